use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Comment {
  pub(crate) body: String,
  pub(crate) email: String,
  #[allow(dead_code)]
  pub(crate) id: u64,
  pub(crate) name: String,
  #[allow(dead_code)]
  pub(crate) post_id: u64,
}

impl Comment {
  pub(crate) fn from_line(&self) -> String {
    format!("From: {}", self.email)
  }
}
