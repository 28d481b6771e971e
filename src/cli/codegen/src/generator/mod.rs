/* src/cli/codegen/src/generator/mod.rs */

use std::path::{Path, PathBuf};

use serde_json::{Value, json};

use crate::collection::RouteCollection;
use crate::compiler::{Compiler, TemplateRef};
use crate::error::{Error, Result};
use crate::output::OutputType;

#[cfg(test)]
mod tests;

/// Fully resolved settings the generator consumes. Resolution order lives with the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
  pub namespace: String,
  pub absolute: bool,
  pub root_url: String,
  pub prefix: String,
}

impl Default for GenerateOptions {
  fn default() -> Self {
    Self {
      namespace: "laroute".to_string(),
      absolute: false,
      root_url: String::new(),
      prefix: String::new(),
    }
  }
}

/// Variables handed to the template for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationContext {
  pub namespace: String,
  pub routes: Value,
  pub absolute: bool,
  pub root_url: String,
  pub prefix: String,
}

impl GenerationContext {
  pub fn new(options: &GenerateOptions, routes: &RouteCollection) -> Self {
    Self {
      namespace: options.namespace.clone(),
      routes: routes.to_serializable(),
      absolute: options.absolute,
      root_url: options.root_url.clone(),
      prefix: options.prefix.clone(),
    }
  }

  /// Template data mapping, keyed by the names templates refer to (`root_url` is `rootUrl`).
  pub fn to_data(&self) -> Value {
    json!({
      "namespace": self.namespace,
      "routes": self.routes,
      "absolute": self.absolute,
      "rootUrl": self.root_url,
      "prefix": self.prefix,
    })
  }
}

/// Custom template when one is configured, otherwise the built-in one for `kind`.
pub fn select_template(kind: OutputType, custom: Option<&Path>) -> TemplateRef {
  match custom {
    Some(path) => TemplateRef::File(path.to_path_buf()),
    None => TemplateRef::Builtin(kind),
  }
}

/// `{dir}/{filename}.{ext}`
pub fn output_path(dir: &Path, filename: &str, kind: OutputType) -> PathBuf {
  dir.join(format!("{filename}.{}", kind.extension()))
}

/// Renders a context through a compiler and writes the artifact.
/// Holds no state between runs.
#[derive(Debug, Clone, Default)]
pub struct ArtifactGenerator<C> {
  compiler: C,
}

impl<C: Compiler> ArtifactGenerator<C> {
  pub fn new(compiler: C) -> Self {
    Self { compiler }
  }

  pub fn render(&self, template: &TemplateRef, context: &GenerationContext) -> Result<String> {
    self.compiler.compile(template, &context.to_data())
  }

  /// Render then write to `output`, replacing any existing file. Parent
  /// directories are not created. Nothing is written if rendering fails.
  pub fn generate(
    &self,
    template: &TemplateRef,
    context: &GenerationContext,
    output: &Path,
  ) -> Result<PathBuf> {
    let rendered = self.render(template, context)?;
    std::fs::write(output, rendered)
      .map_err(|source| Error::WriteError { path: output.to_path_buf(), source })?;
    Ok(output.to_path_buf())
  }
}
