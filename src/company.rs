use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Company {
  pub(crate) catch_phrase: String,
  pub(crate) name: String,
}
