use {
  super::*,
  env_logger::{Builder, Env, Target},
  std::fs::OpenOptions,
};

/// Routes `log` records to `path`, appending. The terminal belongs to the
/// interface, so nothing is written to stderr. `RUST_LOG` selects the level,
/// `info` when unset.
pub(crate) fn initialize(path: &Path) -> Result {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).with_context(|| {
      format!("could not create log directory {}", parent.display())
    })?;
  }

  let file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("could not open log file {}", path.display()))?;

  Builder::from_env(Env::default().default_filter_or("info"))
    .target(Target::Pipe(Box::new(file)))
    .try_init()
    .context("could not initialize logging")?;

  Ok(())
}
