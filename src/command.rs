use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  Click,
  HideHelp,
  NextEmployee,
  None,
  PageDown,
  PageUp,
  PreviousEmployee,
  Quit,
  Reload,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
}

impl Command {
  pub(crate) fn from_key(key: KeyEvent) -> Self {
    let control = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
      KeyCode::Char('q' | 'Q') | KeyCode::Esc => Self::Quit,
      KeyCode::Char('?') => Self::ShowHelp,
      KeyCode::Left | KeyCode::Char('h') => Self::PreviousEmployee,
      KeyCode::Right | KeyCode::Char('l') => Self::NextEmployee,
      KeyCode::Down | KeyCode::Char('j') => Self::SelectNext,
      KeyCode::Up | KeyCode::Char('k') => Self::SelectPrevious,
      KeyCode::PageDown => Self::PageDown,
      KeyCode::PageUp => Self::PageUp,
      KeyCode::Char('d') if control => Self::PageDown,
      KeyCode::Char('u') if control => Self::PageUp,
      KeyCode::Home => Self::SelectFirst,
      KeyCode::End => Self::SelectLast,
      KeyCode::Enter | KeyCode::Char(' ') => Self::Click,
      KeyCode::Char('r' | 'R') => Self::Reload,
      _ => Self::None,
    }
  }
}
