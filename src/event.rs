use super::*;

pub(crate) enum Event {
  Posts {
    request_id: u64,
    rendered: Option<Node>,
  },
  Users {
    users: Option<Vec<User>>,
  },
}
