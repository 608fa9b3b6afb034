use super::*;

/// The employee dropdown: one option per user, a current selection and a
/// disabled flag that the page raises while a refresh is in flight.
pub(crate) struct SelectMenu {
  disabled: bool,
  node: Node,
  selected: Option<usize>,
}

impl Default for SelectMenu {
  fn default() -> Self {
    Self {
      disabled: false,
      node: Node::build(Tag::Select, "", None),
      selected: None,
    }
  }
}

impl SelectMenu {
  pub(crate) fn append_options(&mut self, options: Vec<Node>) {
    for option in options {
      self.node.append(option);
    }
  }

  /// Builds one option per user, value set to the id and label to the name,
  /// in input order.
  pub(crate) fn create_options(users: Option<&[User]>) -> Option<Vec<Node>> {
    let users = users?;

    Some(
      users
        .iter()
        .map(|user| {
          let mut option = Node::build(Tag::Option, &user.name, None);
          option.set_value(user.id.to_string());
          option
        })
        .collect(),
    )
  }

  pub(crate) fn disable(&mut self) {
    self.disabled = true;
  }

  pub(crate) fn enable(&mut self) {
    self.disabled = false;
  }

  pub(crate) fn is_disabled(&self) -> bool {
    self.disabled
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.node.is_empty()
  }

  pub(crate) fn len(&self) -> usize {
    self.node.children().len()
  }

  pub(crate) fn options(&self) -> &[Node] {
    self.node.children()
  }

  /// Moves the selection. Returns whether it changed, which is when a change
  /// event should fire. A disabled menu never changes.
  pub(crate) fn select_index(&mut self, index: usize) -> bool {
    if self.disabled || index >= self.len() || self.selected == Some(index) {
      return false;
    }

    self.selected = Some(index);

    true
  }

  pub(crate) fn select_next(&mut self) -> bool {
    let count = self.len();

    if count == 0 {
      return false;
    }

    let next = self.selected.map_or(0, |index| (index + 1) % count);

    self.select_index(next)
  }

  pub(crate) fn select_previous(&mut self) -> bool {
    let count = self.len();

    if count == 0 {
      return false;
    }

    let previous = self
      .selected
      .map_or(count - 1, |index| (index + count - 1) % count);

    self.select_index(previous)
  }

  pub(crate) fn select_value(&mut self, value: &str) -> bool {
    let Some(index) = self
      .options()
      .iter()
      .position(|option| option.value() == Some(value))
    else {
      return false;
    };

    self.select_index(index)
  }

  pub(crate) fn selected_label(&self) -> Option<&str> {
    self
      .selected
      .and_then(|index| self.options().get(index))
      .map(Node::text)
  }

  pub(crate) fn value(&self) -> Option<&str> {
    self
      .selected
      .and_then(|index| self.options().get(index))
      .and_then(Node::value)
  }
}
