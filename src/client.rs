use super::*;

/// Read-only client for the posts API.
///
/// Every public operation degrades to `None` instead of failing: missing ids
/// short-circuit before any request is made, and transport, status or decode
/// failures are logged and swallowed here.
#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Default for Client {
  fn default() -> Self {
    Self::new(DEFAULT_BASE_URL)
  }
}

impl Client {
  pub(crate) fn base_url(&self) -> &str {
    &self.base_url
  }

  async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
    let url = format!("{}{path}", self.base_url);

    debug!("GET {url}");

    self
      .client
      .get(&url)
      .send()
      .await
      .with_context(|| format!("request to {url} failed"))?
      .error_for_status()
      .with_context(|| format!("{url} answered with an error status"))?
      .json::<T>()
      .await
      .with_context(|| format!("could not decode response from {url}"))
  }

  async fn fetch_or_log<T: DeserializeOwned>(
    &self,
    path: &str,
    what: &str,
  ) -> Option<T> {
    match self.fetch(path).await {
      Ok(value) => Some(value),
      Err(error) => {
        error!("could not fetch {what}: {error:#}");
        None
      }
    }
  }

  pub(crate) async fn get_user(&self, user_id: Option<u64>) -> Option<User> {
    let user_id = present_id(user_id)?;

    self
      .fetch_or_log(&format!("/users/{user_id}"), &format!("user {user_id}"))
      .await
  }

  /// Fetches each distinct non-zero id once, at most `concurrency` requests
  /// at a time. Ids that could not be resolved are absent from the map.
  pub(crate) async fn get_users<I>(
    &self,
    user_ids: I,
    concurrency: usize,
  ) -> HashMap<u64, User>
  where
    I: IntoIterator<Item = u64>,
  {
    let mut seen = HashSet::new();

    let user_ids = user_ids
      .into_iter()
      .filter(|id| *id != 0 && seen.insert(*id))
      .collect::<Vec<_>>();

    let responses = stream::iter(user_ids.into_iter().map(|id| {
      let client = self.clone();

      async move { (id, client.get_user(Some(id)).await) }
    }))
    .buffered(concurrency.max(1))
    .collect::<Vec<_>>()
    .await;

    responses
      .into_iter()
      .filter_map(|(id, user)| user.map(|user| (id, user)))
      .collect()
  }

  pub(crate) async fn list_comments_by_post(
    &self,
    post_id: Option<u64>,
  ) -> Option<Vec<Comment>> {
    let post_id = present_id(post_id)?;

    self
      .fetch_or_log(
        &format!("/comments?postId={post_id}"),
        &format!("comments for post {post_id}"),
      )
      .await
  }

  pub(crate) async fn list_posts_by_user(
    &self,
    user_id: Option<u64>,
  ) -> Option<Vec<Post>> {
    let user_id = present_id(user_id)?;

    self
      .fetch_or_log(
        &format!("/posts?userId={user_id}"),
        &format!("posts for user {user_id}"),
      )
      .await
  }

  pub(crate) async fn list_users(&self) -> Option<Vec<User>> {
    self.fetch_or_log("/users", "users").await
  }

  pub(crate) fn new(base_url: &str) -> Self {
    Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      client: reqwest::Client::new(),
    }
  }
}
