use super::*;

/// Assembles the block for one post: title, body, id, author, catch phrase,
/// the comments button and the hidden comment panel, in that order.
///
/// An unknown author renders as `Author: unknown` with an empty catch phrase.
/// Posts without an id cannot be paired with a panel and yield `None`.
pub(crate) fn create_post(
  post: &Post,
  author: Option<&User>,
  comments: Option<&[Comment]>,
) -> Option<Node> {
  let post_id = present_id(Some(post.id))?;

  let (byline, catch_phrase) = match author {
    Some(user) => (user.byline(), user.company.catch_phrase.as_str()),
    None => (UNKNOWN_AUTHOR.to_string(), ""),
  };

  let mut button = Node::build(Tag::Button, SHOW_COMMENTS, None);
  button.set_post_id(post_id);

  let mut article = Node::build(Tag::Article, "", None);
  article.append(Node::build(Tag::H2, &post.title, None));
  article.append(Node::build(Tag::P, &post.body, None));
  article.append(Node::build(Tag::P, &format!("Post ID: {post_id}"), None));
  article.append(Node::build(Tag::P, &byline, None));
  article.append(Node::build(Tag::P, catch_phrase, None));
  article.append(button);
  article.append(comment_panel::build_panel(Some(post_id), comments)?);

  Some(article)
}

pub(crate) fn placeholder() -> Node {
  Node::build(Tag::P, DEFAULT_TEXT, Some(DEFAULT_TEXT_CLASS))
}

/// Renders `posts` into a fragment of post blocks, in input order.
///
/// Authors (each distinct id once) and comments are fetched up front, at
/// most `concurrency` requests at a time per kind, and blocks are assembled
/// once everything has arrived. An empty or absent list, or one where no
/// post could be rendered, gives the placeholder paragraph instead.
pub(crate) async fn render_posts(
  client: &Client,
  posts: Option<&[Post]>,
  concurrency: usize,
) -> Node {
  let Some(posts) = posts.filter(|posts| !posts.is_empty()) else {
    return placeholder();
  };

  let (user_ids, post_ids): (Vec<u64>, Vec<u64>) =
    posts.iter().map(|post| (post.user_id, post.id)).unzip();

  let authors = client.get_users(user_ids, concurrency);

  let comments = stream::iter(post_ids.into_iter().map(|post_id| {
    let client = client.clone();

    async move { client.list_comments_by_post(Some(post_id)).await }
  }))
  .buffered(concurrency.max(1))
  .collect::<Vec<_>>();

  let (authors, comments) = future::join(authors, comments).await;

  let mut fragment = Node::build(Tag::Fragment, "", None);

  for (post, comments) in posts.iter().zip(comments) {
    let author = authors.get(&post.user_id);

    if author.is_none() {
      warn!("author {} of post {} is unavailable", post.user_id, post.id);
    }

    match create_post(post, author, comments.as_deref()) {
      Some(article) => fragment.append(article),
      None => warn!("skipping post without an id: {:?}", post.title),
    }
  }

  if fragment.is_empty() {
    return placeholder();
  }

  fragment
}
