/* src/cli/core/src/config/layer.rs */

// Layering: command line > laroute.toml > built-in defaults, resolved once.

use std::path::{Path, PathBuf};

use anyhow::Result;
use laroute_codegen::{
  FilterPolicy, GenerateOptions, OutputType, TemplateRef, output_path, select_template,
};

use super::LarouteConfig;

/// Values given on the command line. `None` falls through to the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
  pub routes: Option<PathBuf>,
  pub path: Option<PathBuf>,
  pub filename: Option<String>,
  pub namespace: Option<String>,
  pub prefix: Option<String>,
  pub output_type: Option<String>,
  pub template_path: Option<PathBuf>,
  pub absolute: Option<bool>,
  pub root_url: Option<String>,
  pub filter: Option<String>,
  pub action_namespace: Option<String>,
}

/// Everything one generation run needs, with no further lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
  pub output_type: OutputType,
  /// Route table file to read.
  pub routes: PathBuf,
  /// Artifact destination, `{path}/{filename}.{type}`.
  pub output: PathBuf,
  pub template: TemplateRef,
  pub filter: FilterPolicy,
  pub action_namespace: String,
  pub options: GenerateOptions,
}

/// Merge `cli` over `file`. Relative paths taken from the file are joined to `base_dir`
/// (the file's directory); paths from the command line are used as given.
pub fn resolve(cli: Overrides, file: &LarouteConfig, base_dir: &Path) -> Result<ResolvedConfig> {
  let section = &file.laroute;

  // Type first: an unknown type aborts before routes or templates are looked at
  let output_type: OutputType =
    cli.output_type.as_deref().unwrap_or(&section.output_type).parse()?;
  let filter: FilterPolicy = cli.filter.as_deref().unwrap_or(&section.filter).parse()?;

  let routes = cli.routes.unwrap_or_else(|| base_dir.join(&section.routes));
  let dir = cli.path.unwrap_or_else(|| base_dir.join(&section.path));
  let filename = cli.filename.unwrap_or_else(|| section.filename.clone());

  let configured_template = match output_type {
    OutputType::Js => section.template.js.as_deref(),
    OutputType::Json => section.template.json.as_deref(),
  }
  .map(|p| base_dir.join(p));
  let custom_template = cli.template_path.or(configured_template);

  Ok(ResolvedConfig {
    output_type,
    routes,
    output: output_path(&dir, &filename, output_type),
    template: select_template(output_type, custom_template.as_deref()),
    filter,
    action_namespace: cli.action_namespace.unwrap_or_else(|| section.action_namespace.clone()),
    options: GenerateOptions {
      namespace: cli.namespace.unwrap_or_else(|| section.namespace.clone()),
      absolute: cli.absolute.unwrap_or(section.absolute),
      root_url: cli.root_url.unwrap_or_else(|| file.app.url.clone()),
      prefix: cli.prefix.unwrap_or_else(|| section.prefix.clone()),
    },
  })
}
