use super::*;

/// Click handler bound to one post's comments button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ButtonListener {
  post_id: u64,
}

impl ButtonListener {
  /// Flips the comment panel and the button label for the bound post.
  pub(crate) fn handle(self, main: &mut Node) -> Option<(bool, String)> {
    comment_panel::toggle_comments(main, Some(self.post_id))
  }

  pub(crate) fn new(post_id: u64) -> Self {
    Self { post_id }
  }
}
