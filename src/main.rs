use {
  anyhow::Context,
  app::App,
  arguments::Arguments,
  block_cursor::BlockCursor,
  button_listener::ButtonListener,
  clap::Parser,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  comment::Comment,
  company::Company,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  effect::Effect,
  event::Event,
  futures::{
    future,
    stream::{self, StreamExt},
  },
  help_view::HelpView,
  log::{debug, error, info, warn},
  node::{Node, Tag},
  page::{Page, Phase},
  pending_posts::PendingPosts,
  post::Post,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap,
    },
  },
  select_menu::SelectMenu,
  serde::{Deserialize, de::DeserializeOwned},
  state::State,
  status_line::StatusLine,
  std::{
    backtrace::BacktraceStatus,
    collections::{BTreeMap, HashMap, HashSet},
    env, fs,
    io::{self, IsTerminal, Stdout},
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant},
  },
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  user::User,
  utils::{present_id, truncate, wrap_text},
};

mod app;
mod arguments;
mod block_cursor;
mod button_listener;
mod client;
mod command;
mod command_dispatch;
mod comment;
mod comment_panel;
mod company;
mod effect;
mod event;
mod help_view;
mod logging;
mod node;
mod page;
mod pending_posts;
mod post;
mod post_renderer;
mod render;
mod select_menu;
mod state;
mod status_line;
#[cfg(test)]
mod test_server;
mod user;
mod utils;

const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_CONCURRENCY: usize = 8;
const DEFAULT_USER_ID: u64 = 1;

const DEFAULT_TEXT: &str = "Select an Employee to display their posts.";
const DEFAULT_TEXT_CLASS: &str = "default-text";
const HIDDEN_CLASS: &str = "hide";

const SHOW_COMMENTS: &str = "Show Comments";
const HIDE_COMMENTS: &str = "Hide Comments";

const UNKNOWN_AUTHOR: &str = "Author: unknown";

const IDLE_STATUS: &str = "←/h →/l employee • ↑/k ↓/j post • enter comments • r reload • q quit • ? help";

const LOADING_EMPLOYEES_STATUS: &str = "Loading employees...";
const LOADING_POSTS_STATUS: &str = "Loading posts...";

const FLASH_DURATION: Duration = Duration::from_secs(3);

const HELP_TITLE: &str = "Help";
const HELP_KEY_INDENT: &str = "  ";
const HELP_KEY_WIDTH: usize = 8;
const HELP_STATUS: &str = "Press ? or esc to close help";

const BASE_INDENT: &str = " ";
const COMMENT_INDENT: &str = "  ";

const HELP_TEXT: &str = "\
Employees:
  ← / h   previous employee
  → / l   next employee
  r       reload the current employee

Posts:
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home    jump to first post
  end     jump to last post
  enter   show or hide comments for the selected post
  space   show or hide comments for the selected post

Other:
  ?       toggle this help
  q       quit
  esc     close help or quit
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  logging::initialize(&arguments.log_path()?)?;

  let client = Client::new(&arguments.base_url);

  info!(
    "starting against {} with concurrency {}",
    client.base_url(),
    arguments.concurrency()
  );

  let mut terminal =
    initialize_terminal().context("could not set up the terminal")?;

  let mut app =
    App::new(client, arguments.concurrency(), arguments.employee);

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
