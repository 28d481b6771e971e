/* src/cli/codegen/src/collection/mod.rs */

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde_json::{Value, json};

use crate::error::{Error, Result};
use crate::route::{Route, normalize_methods};
use crate::source::{RawRoute, RouteSource};


/// Which named routes make it into the generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterPolicy {
  #[default]
  All,
  None,
  /// Keep routes whose action starts with the configured action namespace.
  OnlyInNamespace,
}

impl FilterPolicy {
  fn retains(self, action: Option<&str>, action_namespace: &str) -> bool {
    match self {
      Self::All => true,
      Self::None => false,
      Self::OnlyInNamespace => {
        action_namespace.is_empty() || action.is_some_and(|a| a.starts_with(action_namespace))
      }
    }
  }
}

impl FromStr for FilterPolicy {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "all" => Ok(Self::All),
      "none" => Ok(Self::None),
      "only-in-namespace" => Ok(Self::OnlyInNamespace),
      other => Err(Error::UnknownFilter(other.to_string())),
    }
  }
}

impl fmt::Display for FilterPolicy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::All => "all",
      Self::None => "none",
      Self::OnlyInNamespace => "only-in-namespace",
    })
  }
}

/// Filtered, deduplicated routes in router iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteCollection {
  routes: Vec<Route>,
}

impl RouteCollection {
  /// Build from raw records: drop unnamed, apply `policy`, dedupe by name
  /// (first wins), then normalize. Records left without any HTTP method are dropped.
  /// A dropped first occurrence still claims its name, so later duplicates stay out.
  pub fn build<I>(raw: I, policy: FilterPolicy, action_namespace: &str) -> Self
  where
    I: IntoIterator<Item = RawRoute>,
  {
    let mut seen: HashSet<String> = HashSet::new();
    let mut routes = Vec::new();

    for record in raw {
      let Some(name) = record.name.filter(|n| !n.trim().is_empty()) else {
        continue;
      };
      if !policy.retains(record.action.as_deref(), action_namespace) {
        continue;
      }
      if !seen.insert(name.clone()) {
        continue;
      }
      let methods = normalize_methods(&record.methods);
      if methods.is_empty() {
        continue;
      }
      routes.push(Route::new(name, methods, record.uri, record.action));
    }

    Self { routes }
  }

  /// Snapshot `source` and build from it.
  pub fn from_source<S>(source: &S, policy: FilterPolicy, action_namespace: &str) -> Result<Self>
  where
    S: RouteSource + ?Sized,
  {
    Ok(Self::build(source.routes()?, policy, action_namespace))
  }

  pub fn len(&self) -> usize {
    self.routes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.routes.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Route> {
    self.routes.iter()
  }

  pub fn get(&self, name: &str) -> Option<&Route> {
    self.routes.iter().find(|r| r.name == name)
  }

  /// Transport form: `[{ "uri", "methods", "name" }, ...]` in collection order.
  /// Parameters are left for the consumer to derive from `uri`.
  pub fn to_serializable(&self) -> Value {
    Value::Array(
      self
        .routes
        .iter()
        .map(|r| json!({ "uri": r.uri, "methods": r.methods, "name": r.name }))
        .collect(),
    )
  }

  pub fn to_json(&self) -> String {
    self.to_serializable().to_string()
  }
}

impl<'a> IntoIterator for &'a RouteCollection {
  type Item = &'a Route;
  type IntoIter = std::slice::Iter<'a, Route>;

  fn into_iter(self) -> Self::IntoIter {
    self.routes.iter()
  }
}
