/* src/cli/codegen/src/source.rs */

// Raw route records as the host framework reports them, and the capability
// that supplies them to the collection.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};

/// One entry of a framework route table, before filtering or normalization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRoute {
  #[serde(default)]
  pub name: Option<String>,
  /// Accepts `["GET", "HEAD"]` or the pipe-joined `"GET|HEAD"` listing form.
  #[serde(default, alias = "method", deserialize_with = "method_list")]
  pub methods: Vec<String>,
  pub uri: String,
  #[serde(default)]
  pub action: Option<String>,
}

impl RawRoute {
  pub fn new(
    name: Option<&str>,
    methods: &[&str],
    uri: impl Into<String>,
    action: Option<&str>,
  ) -> Self {
    Self {
      name: name.map(str::to_string),
      methods: methods.iter().map(|m| (*m).to_string()).collect(),
      uri: uri.into(),
      action: action.map(str::to_string),
    }
  }
}

fn method_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum MethodList {
    Joined(String),
    List(Vec<String>),
  }

  Ok(match MethodList::deserialize(deserializer)? {
    MethodList::Joined(joined) => joined.split('|').map(str::to_string).collect(),
    MethodList::List(list) => list,
  })
}

/// Anything that can hand over a snapshot of a route table.
pub trait RouteSource {
  fn routes(&self) -> Result<Vec<RawRoute>>;
}

impl RouteSource for [RawRoute] {
  fn routes(&self) -> Result<Vec<RawRoute>> {
    Ok(self.to_vec())
  }
}

impl RouteSource for Vec<RawRoute> {
  fn routes(&self) -> Result<Vec<RawRoute>> {
    Ok(self.clone())
  }
}

/// Route table dumped to a JSON file: either a bare array of records or `{ "routes": [...] }`.
#[derive(Debug, Clone)]
pub struct RouteTable {
  path: PathBuf,
}

impl RouteTable {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Parse route records from JSON text.
  pub fn parse(path: &Path, content: &str) -> Result<Vec<RawRoute>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TableDocument {
      List(Vec<RawRoute>),
      Wrapped { routes: Vec<RawRoute> },
    }

    let doc: TableDocument = serde_json::from_str(content).map_err(|e| Error::RouteTable {
      path: path.to_path_buf(),
      message: format!("expected an array of routes or an object with a `routes` array ({e})"),
    })?;
    Ok(match doc {
      TableDocument::List(routes) | TableDocument::Wrapped { routes } => routes,
    })
  }
}

impl RouteSource for RouteTable {
  fn routes(&self) -> Result<Vec<RawRoute>> {
    let content = std::fs::read_to_string(&self.path)
      .map_err(|e| Error::RouteTable { path: self.path.clone(), message: e.to_string() })?;
    Self::parse(&self.path, &content)
  }
}
