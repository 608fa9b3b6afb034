#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tag {
  Article,
  Button,
  Fragment,
  H2,
  H3,
  Main,
  Option,
  P,
  Section,
  Select,
}

/// An element in the in-memory document.
///
/// Nodes carry the little that the page needs from a DOM element: text, a
/// class list, an optional post id used to correlate buttons with comment
/// panels, an optional value (for select options) and children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node {
  children: Vec<Node>,
  classes: Vec<String>,
  post_id: Option<u64>,
  tag: Tag,
  text: String,
  value: Option<String>,
}

impl Node {
  pub(crate) fn add_class(&mut self, class: &str) {
    if !self.has_class(class) {
      self.classes.push(class.to_string());
    }
  }

  /// Appends `child`. Fragments dissolve: their children are moved into
  /// `self` and the fragment itself is dropped.
  pub(crate) fn append(&mut self, child: Node) {
    if child.tag == Tag::Fragment {
      self.children.extend(child.children);
    } else {
      self.children.push(child);
    }
  }

  pub(crate) fn build(tag: Tag, text: &str, class_name: Option<&str>) -> Self {
    let mut node = Self {
      children: Vec::new(),
      classes: Vec::new(),
      post_id: None,
      tag,
      text: text.to_string(),
      value: None,
    };

    if let Some(class_name) = class_name {
      for class in class_name.split_whitespace() {
        node.add_class(class);
      }
    }

    node
  }

  pub(crate) fn children(&self) -> &[Node] {
    &self.children
  }

  fn collect<'a>(&'a self, tag: Tag, matches: &mut Vec<&'a Node>) {
    if self.tag == tag {
      matches.push(self);
    }

    for child in &self.children {
      child.collect(tag, matches);
    }
  }

  /// Removes every child, returning how many were removed.
  pub(crate) fn delete_child_elements(&mut self) -> usize {
    let removed = self.children.len();
    self.children.clear();
    removed
  }

  fn find(&self, predicate: &impl Fn(&Node) -> bool) -> Option<&Node> {
    if predicate(self) {
      return Some(self);
    }

    self
      .children
      .iter()
      .find_map(|child| child.find(predicate))
  }

  fn find_mut(
    &mut self,
    predicate: &impl Fn(&Node) -> bool,
  ) -> Option<&mut Node> {
    if predicate(self) {
      return Some(self);
    }

    self
      .children
      .iter_mut()
      .find_map(|child| child.find_mut(predicate))
  }

  pub(crate) fn has_class(&self, class: &str) -> bool {
    self.classes.iter().any(|existing| existing == class)
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.children.is_empty()
  }

  pub(crate) fn post_id(&self) -> Option<u64> {
    self.post_id
  }

  pub(crate) fn query(&self, tag: Tag, post_id: u64) -> Option<&Node> {
    self.find(&|node: &Node| node.tag == tag && node.post_id == Some(post_id))
  }

  pub(crate) fn query_all(&self, tag: Tag) -> Vec<&Node> {
    let mut matches = Vec::new();
    self.collect(tag, &mut matches);
    matches
  }

  pub(crate) fn query_mut(
    &mut self,
    tag: Tag,
    post_id: u64,
  ) -> Option<&mut Node> {
    self.find_mut(&|node: &Node| {
      node.tag == tag && node.post_id == Some(post_id)
    })
  }

  pub(crate) fn set_post_id(&mut self, post_id: u64) {
    self.post_id = Some(post_id);
  }

  pub(crate) fn set_text(&mut self, text: &str) {
    text.clone_into(&mut self.text);
  }

  pub(crate) fn set_value(&mut self, value: String) {
    self.value = Some(value);
  }

  pub(crate) fn tag(&self) -> Tag {
    self.tag
  }

  pub(crate) fn text(&self) -> &str {
    &self.text
  }

  /// Adds `class` if missing, removes it otherwise. Returns whether the class
  /// is present afterwards.
  pub(crate) fn toggle_class(&mut self, class: &str) -> bool {
    if let Some(position) =
      self.classes.iter().position(|existing| existing == class)
    {
      self.classes.remove(position);
      false
    } else {
      self.classes.push(class.to_string());
      true
    }
  }

  pub(crate) fn value(&self) -> Option<&str> {
    self.value.as_deref()
  }
}
