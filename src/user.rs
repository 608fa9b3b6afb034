use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub(crate) struct User {
  pub(crate) company: Company,
  pub(crate) id: u64,
  pub(crate) name: String,
}

impl User {
  pub(crate) fn byline(&self) -> String {
    format!("Author: {} with {}", self.name, self.company.name)
  }
}
