/* src/cli/core/src/main.rs */

mod config;
mod logging;
mod ui;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use laroute_codegen::{
  ArtifactGenerator, GenerationContext, RouteCollection, RouteTable, TeraCompiler,
};

use config::{LarouteConfig, Overrides, find_laroute_config, load_laroute_config, resolve};

#[derive(Parser)]
#[command(name = "laroute", version, about = "Generate a client-side routes file from named routes")]
struct Cli {
  /// Route table JSON dumped by the application (default: laroute.routes, then routes.json)
  routes: Option<PathBuf>,
  /// Directory the generated file is written to (default: "public/js")
  #[arg(short, long)]
  path: Option<PathBuf>,
  /// Name of the generated file, without extension (default: "laroute")
  #[arg(short, long)]
  filename: Option<String>,
  /// Global name the generated helpers are exposed under (default: "laroute")
  #[arg(long)]
  namespace: Option<String>,
  /// Prefix for the generated URLs (default: "")
  #[arg(long, visible_alias = "pr")]
  prefix: Option<String>,
  /// Generated file type: "js" (default) or "json"
  #[arg(short = 't', long = "type", value_name = "TYPE")]
  output_type: Option<String>,
  /// Custom Tera template instead of the built-in one
  #[arg(long, visible_alias = "tp")]
  template_path: Option<PathBuf>,
  /// Prefix generated URLs with the root URL
  #[arg(long)]
  absolute: bool,
  /// Generate relative URLs even when laroute.toml sets absolute
  #[arg(long, conflicts_with = "absolute")]
  no_absolute: bool,
  /// Root URL used with --absolute (default: app.url)
  #[arg(long)]
  root_url: Option<String>,
  /// Route filter: all, none, or only-in-namespace (default: all)
  #[arg(long)]
  filter: Option<String>,
  /// Action prefix routes must match with --filter only-in-namespace
  #[arg(long)]
  action_namespace: Option<String>,
  /// Path to laroute.toml (auto-detected if omitted)
  #[arg(short, long)]
  config: Option<PathBuf>,
  /// Print debug diagnostics to stderr
  #[arg(short, long)]
  verbose: bool,
}

impl Cli {
  fn into_parts(self) -> (Option<PathBuf>, Overrides) {
    let overrides = Overrides {
      routes: self.routes,
      path: self.path,
      filename: self.filename,
      namespace: self.namespace,
      prefix: self.prefix,
      output_type: self.output_type,
      template_path: self.template_path,
      absolute: match (self.absolute, self.no_absolute) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
      },
      root_url: self.root_url,
      filter: self.filter,
      action_namespace: self.action_namespace,
    };
    (self.config, overrides)
  }
}

/// Load an explicit config, or search upward from cwd; no file at all means defaults.
/// Returns the config and the directory its relative paths are anchored to.
fn load_config(explicit: Option<PathBuf>) -> Result<(LarouteConfig, PathBuf)> {
  let path = match explicit {
    Some(p) => Some(p),
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_laroute_config(&cwd).ok()
    }
  };

  let Some(path) = path else {
    tracing::debug!("no laroute.toml found, using defaults");
    return Ok((LarouteConfig::default(), PathBuf::new()));
  };
  let config = load_laroute_config(&path)?;
  let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
  tracing::debug!(config = %path.display(), "loaded config");
  Ok((config, base_dir))
}

fn run(cli: Cli) -> Result<PathBuf> {
  let (config_path, overrides) = cli.into_parts();
  let (file, base_dir) = load_config(config_path)?;
  let resolved = resolve(overrides, &file, &base_dir)?;
  tracing::debug!(?resolved, "resolved configuration");

  ui::arrow(&format!("reading {}", resolved.routes.display()));
  let source = RouteTable::new(&resolved.routes);
  let collection =
    RouteCollection::from_source(&source, resolved.filter, &resolved.action_namespace)?;
  if collection.is_empty() {
    ui::warn(&format!("no named routes left after filter \"{}\"", resolved.filter));
  }
  let context = GenerationContext::new(&resolved.options, &collection);

  ui::arrow(&format!("rendering {}", resolved.template));
  let generator = ArtifactGenerator::new(TeraCompiler::new());
  let path = generator.generate(&resolved.template, &context, &resolved.output)?;

  ui::ok(&format!("generated {} routes", collection.len()));
  ui::detail(&format!("namespace {}  type {}", resolved.options.namespace, resolved.output_type));
  Ok(path)
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  if let Err(e) = logging::init_logging(cli.verbose) {
    ui::warn(&format!("logging unavailable: {e}"));
  }
  ui::banner("generate");

  match run(cli) {
    Ok(path) => {
      ui::ok(&format!("Created: {}", path.display()));
      ExitCode::SUCCESS
    }
    Err(e) => {
      tracing::debug!(error = ?e, "generation failed");
      ui::fail(&format!("{e:#}"));
      ExitCode::FAILURE
    }
  }
}
