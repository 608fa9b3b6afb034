use super::*;

pub(crate) struct App {
  client: Client,
  concurrency: usize,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.state
      .set_list_area(layout[1].height as usize, layout[1].width);

    frame.render_widget(Paragraph::new(self.select_line()), layout[0]);

    let blocks = self.state.page().main().children();
    let width = layout[1].width;

    let list_items: Vec<ListItem> = if blocks.is_empty() {
      vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw("Nothing to show for this employee."),
      ]))]
    } else {
      blocks
        .iter()
        .map(|block| ListItem::new(render::block_lines(block, width)))
        .collect()
    };

    let cursor = self.state.cursor_mut();

    let mut list_state = ListState::default()
      .with_selected(cursor.selected_index())
      .with_offset(cursor.offset());

    let list = List::new(list_items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, layout[1], &mut list_state);

    self.state.cursor_mut().set_offset(list_state.offset());

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    self.state.help().draw(frame);
  }

  fn execute_effect(&mut self, effect: Effect) {
    let (client, sender) = (self.client.clone(), self.event_tx.clone());

    match effect {
      Effect::FetchUsers => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::Users {
            users: client.list_users().await,
          });
        });
      }
      Effect::RefreshPosts {
        request_id,
        user_id,
      } => {
        let concurrency = self.concurrency;

        self.handle.spawn(async move {
          let _ = sender.send(Event::Posts {
            request_id,
            rendered: Page::load(&client, user_id, concurrency).await,
          });
        });
      }
    }
  }

  pub(crate) fn new(
    client: Client,
    concurrency: usize,
    preselect: Option<u64>,
  ) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      concurrency,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state: State::new(preselect),
    }
  }

  fn process_pending_events(&mut self) {
    self.state.refresh_status();

    while let Ok(event) = self.event_rx.try_recv() {
      for effect in self.state.handle_event(event) {
        self.execute_effect(effect);
      }
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    self.execute_effect(Effect::FetchUsers);

    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else {
        Command::from_key(key)
      };

      let dispatch = self.state.dispatch_command(command);

      for effect in dispatch.effects {
        self.execute_effect(effect);
      }

      if dispatch.should_exit {
        break;
      }
    }

    Ok(())
  }

  fn select_line(&self) -> Line<'static> {
    let page = self.state.page();
    let select = page.select();

    let label = select.selected_label().map_or_else(
      || "Select an Employee".to_string(),
      |name| format!("‹ {} ›", truncate(name, 40)),
    );

    let label_style = if select.is_disabled() {
      Style::default().fg(Color::DarkGray)
    } else {
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![
      Span::raw(BASE_INDENT),
      Span::styled("Employee: ", Style::default().fg(Color::DarkGray)),
      Span::styled(label, label_style),
    ];

    if page.phase() == Phase::Loading {
      spans.push(Span::styled(
        format!("  {LOADING_POSTS_STATUS}"),
        Style::default().fg(Color::DarkGray),
      ));
    } else if !select.is_empty() {
      spans.push(Span::styled(
        format!("  ({} employees)", select.len()),
        Style::default().fg(Color::DarkGray),
      ));
    }

    Line::from(spans)
  }
}
