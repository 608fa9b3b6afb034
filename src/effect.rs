#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
  FetchUsers,
  RefreshPosts { request_id: u64, user_id: u64 },
}
