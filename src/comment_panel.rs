use super::*;

/// Builds the hidden comment panel for `post_id`.
///
/// Absent comments still give a panel, just an empty one, so that every post
/// keeps its button/panel pair.
pub(crate) fn build_panel(
  post_id: Option<u64>,
  comments: Option<&[Comment]>,
) -> Option<Node> {
  let post_id = present_id(post_id)?;

  let mut section =
    Node::build(Tag::Section, "", Some(&format!("comments {HIDDEN_CLASS}")));

  section.set_post_id(post_id);

  match create_comments(comments) {
    Some(fragment) => section.append(fragment),
    None => warn!("rendering post {post_id} without comments"),
  }

  Some(section)
}

/// Builds a fragment holding one `article` per comment: name heading, body
/// paragraph and a `From: {email}` paragraph.
pub(crate) fn create_comments(comments: Option<&[Comment]>) -> Option<Node> {
  let comments = comments?;

  let mut fragment = Node::build(Tag::Fragment, "", None);

  for comment in comments {
    let mut article = Node::build(Tag::Article, "", None);
    article.append(Node::build(Tag::H3, &comment.name, None));
    article.append(Node::build(Tag::P, &comment.body, None));
    article.append(Node::build(Tag::P, &comment.from_line(), None));
    fragment.append(article);
  }

  Some(fragment)
}

pub(crate) fn toggle_comment_button(
  root: &mut Node,
  post_id: Option<u64>,
) -> Option<&Node> {
  let button = root.query_mut(Tag::Button, present_id(post_id)?)?;

  let label = if button.text() == SHOW_COMMENTS {
    HIDE_COMMENTS
  } else {
    SHOW_COMMENTS
  };

  button.set_text(label);

  Some(&*button)
}

pub(crate) fn toggle_comment_section(
  root: &mut Node,
  post_id: Option<u64>,
) -> Option<&Node> {
  let section = root.query_mut(Tag::Section, present_id(post_id)?)?;

  section.toggle_class(HIDDEN_CLASS);

  Some(&*section)
}

/// Flips both the panel and its button. Returns whether the panel is now
/// hidden and the button's new label, or `None` if either is missing.
pub(crate) fn toggle_comments(
  root: &mut Node,
  post_id: Option<u64>,
) -> Option<(bool, String)> {
  let post_id = present_id(post_id)?;

  if root.query(Tag::Section, post_id).is_none()
    || root.query(Tag::Button, post_id).is_none()
  {
    return None;
  }

  let hidden =
    toggle_comment_section(root, Some(post_id))?.has_class(HIDDEN_CLASS);

  let label = toggle_comment_button(root, Some(post_id))?
    .text()
    .to_string();

  Some((hidden, label))
}
