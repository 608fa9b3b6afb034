use super::*;

#[derive(Debug, Parser)]
#[command(name = "staff-posts", version)]
#[command(about = "Browse an employee's posts and their comments")]
pub(crate) struct Arguments {
  /// Base URL of the posts API
  #[arg(long, env = "STAFF_POSTS_API_URL", default_value = DEFAULT_BASE_URL)]
  pub(crate) base_url: String,
  /// Maximum number of author or comment requests in flight at once
  #[arg(
    long,
    env = "STAFF_POSTS_CONCURRENCY",
    default_value_t = DEFAULT_CONCURRENCY
  )]
  concurrency: usize,
  /// Employee whose posts are loaded once the menu is populated
  #[arg(long, env = "STAFF_POSTS_EMPLOYEE")]
  pub(crate) employee: Option<u64>,
  /// Log file, defaults to the user state directory
  #[arg(long, env = "STAFF_POSTS_LOG_FILE")]
  log_file: Option<PathBuf>,
}

impl Arguments {
  pub(crate) fn concurrency(&self) -> usize {
    self.concurrency.max(1)
  }

  pub(crate) fn log_path(&self) -> Result<PathBuf> {
    if let Some(path) = &self.log_file {
      return Ok(path.clone());
    }

    let base_dir = if let Ok(dir) = env::var("XDG_STATE_HOME") {
      PathBuf::from(dir)
    } else if let Ok(home) = env::var("HOME") {
      PathBuf::from(home).join(".local").join("state")
    } else {
      return Ok(env::current_dir()?.join(".staff-posts.log"));
    };

    Ok(base_dir.join("staff-posts").join("staff-posts.log"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(args: &[&str]) -> Arguments {
    Arguments::try_parse_from(
      std::iter::once("staff-posts").chain(args.iter().copied()),
    )
    .unwrap()
  }

  #[test]
  fn flags_override_defaults() {
    let arguments = parse(&[
      "--base-url",
      "http://localhost:3000",
      "--employee",
      "2",
      "--concurrency",
      "3",
      "--log-file",
      "/tmp/posts.log",
    ]);

    assert_eq!(arguments.base_url, "http://localhost:3000");
    assert_eq!(arguments.employee, Some(2));
    assert_eq!(arguments.concurrency(), 3);
    assert_eq!(
      arguments.log_path().unwrap(),
      PathBuf::from("/tmp/posts.log")
    );
  }

  #[test]
  fn zero_concurrency_is_raised_to_one() {
    assert_eq!(parse(&["--concurrency", "0"]).concurrency(), 1);
  }

  #[test]
  fn non_numeric_employee_is_rejected() {
    assert!(
      Arguments::try_parse_from(["staff-posts", "--employee", "leanne"])
        .is_err()
    );
  }
}
