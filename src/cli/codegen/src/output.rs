/* src/cli/codegen/src/output.rs */

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Artifact format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputType {
  /// Script exposing URL helpers under a namespace.
  #[default]
  Js,
  /// Route data document for an external URL-building runtime.
  Json,
}

impl OutputType {
  pub fn extension(self) -> &'static str {
    match self {
      Self::Js => "js",
      Self::Json => "json",
    }
  }
}

impl FromStr for OutputType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "js" => Ok(Self::Js),
      "json" => Ok(Self::Json),
      other => Err(Error::UnknownOutputType(other.to_string())),
    }
  }
}

impl fmt::Display for OutputType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.extension())
  }
}
