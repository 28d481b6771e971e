/* src/cli/core/src/config/mod.rs */

mod layer;
mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use layer::{Overrides, ResolvedConfig, resolve};
pub use loader::{CONFIG_FILE, find_laroute_config, load_laroute_config};
pub use types::LarouteConfig;
