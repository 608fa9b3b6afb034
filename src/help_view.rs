use super::*;

pub(crate) struct HelpView {
  status_backup: Option<String>,
  visible: bool,
}

impl HelpView {
  pub(crate) fn draw(&self, frame: &mut Frame) {
    if !self.visible {
      return;
    }

    let area = Self::help_area(frame.area());

    frame.render_widget(Clear, area);

    let help = Paragraph::new(Self::help_lines())
      .block(Block::default().title(HELP_TITLE).borders(Borders::ALL))
      .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Char('?') | KeyCode::Esc => Command::HideHelp,
      KeyCode::Char('q' | 'Q') => Command::Quit,
      _ => Command::None,
    }
  }

  /// The overlay rectangle: the help text plus its border, centred, and
  /// never larger than `area`.
  fn help_area(area: Rect) -> Rect {
    let lines = HELP_TEXT.lines();

    let width = lines.clone().map(|line| line.chars().count()).max();
    let height = lines.count();

    let bordered =
      |size: usize| u16::try_from(size.saturating_add(2)).unwrap_or(u16::MAX);

    let [row] = Layout::vertical([Constraint::Length(bordered(height))])
      .flex(Flex::Center)
      .areas(area);

    let [help] =
      Layout::horizontal([Constraint::Length(bordered(width.unwrap_or(0)))])
        .flex(Flex::Center)
        .areas(row);

    help
  }

  /// Section headings in bold, key names in cyan.
  fn help_lines() -> Vec<Line<'static>> {
    HELP_TEXT
      .lines()
      .map(|line| match line.strip_prefix(HELP_KEY_INDENT) {
        Some(entry) => {
          let split = entry
            .char_indices()
            .nth(HELP_KEY_WIDTH)
            .map_or(entry.len(), |(index, _)| index);

          let (keys, description) = entry.split_at(split);

          Line::from(vec![
            Span::raw(HELP_KEY_INDENT),
            Span::styled(keys, Style::default().fg(Color::Cyan)),
            Span::raw(description),
          ])
        }
        None => Line::from(Span::styled(
          line,
          Style::default().add_modifier(Modifier::BOLD),
        )),
      })
      .collect()
  }

  pub(crate) fn hide(&mut self, status: &mut StatusLine) {
    if !self.visible {
      return;
    }

    let backup = self.status_backup.take();

    status.set(backup.as_deref().unwrap_or(IDLE_STATUS));

    self.visible = false;
  }

  pub(crate) fn is_visible(&self) -> bool {
    self.visible
  }

  pub(crate) fn new() -> Self {
    Self {
      status_backup: None,
      visible: false,
    }
  }

  pub(crate) fn show(&mut self, status: &mut StatusLine) {
    if self.visible {
      return;
    }

    self.status_backup = Some(status.text().to_string());

    status.set(HELP_STATUS);

    self.visible = true;
  }
}
