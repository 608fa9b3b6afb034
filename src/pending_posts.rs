pub(crate) struct PendingPosts {
  pub(crate) request_id: u64,
  pub(crate) user_id: u64,
}
