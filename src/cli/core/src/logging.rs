/* src/cli/core/src/logging.rs */

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Diagnostics go to stderr so stdout stays limited to the ui lines.
pub fn init_logging(verbose: bool) -> Result<()> {
  let level = if verbose { Level::DEBUG } else { Level::WARN };
  let subscriber = FmtSubscriber::builder()
    .with_max_level(level)
    .with_target(false)
    .with_writer(std::io::stderr)
    .finish();
  tracing::subscriber::set_global_default(subscriber)?;
  Ok(())
}
