/* src/cli/codegen/src/error.rs */

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the route-collection-to-artifact pipeline.
///
/// The library never reports these itself; the caller decides how to show them.
#[derive(Debug, Error)]
pub enum Error {
  /// Requested output type is neither `js` nor `json`.
  #[error("Unknown type: {0}")]
  UnknownOutputType(String),

  /// Requested filter policy is not one of `all`, `none`, `only-in-namespace`.
  #[error("Unknown filter: {0} (expected all, none, or only-in-namespace)")]
  UnknownFilter(String),

  #[error("template not found: {template} ({reason})")]
  TemplateNotFound { template: String, reason: String },

  /// Syntax fault, undefined variable, or any other engine failure while rendering.
  #[error("failed to render {template}: {message}")]
  RenderError { template: String, message: String },

  #[error("failed to write {}: {source}", path.display())]
  WriteError {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// Route table file could not be read or did not contain route records.
  #[error("invalid route table {}: {message}", path.display())]
  RouteTable { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
