/* src/cli/core/src/config/types.rs */

use serde::Deserialize;

/// Contents of `laroute.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LarouteConfig {
  #[serde(default)]
  pub app: AppSection,
  #[serde(default)]
  pub laroute: LarouteSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppSection {
  /// Root URL prepended to generated paths when `laroute.absolute` is set.
  #[serde(default)]
  pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LarouteSection {
  #[serde(default = "default_path")]
  pub path: String,
  #[serde(default = "default_filename")]
  pub filename: String,
  #[serde(default = "default_namespace")]
  pub namespace: String,
  // Kept as text so an unknown value surfaces as an output-type error, not a parse error
  #[serde(rename = "type", default = "default_type")]
  pub output_type: String,
  #[serde(default)]
  pub absolute: bool,
  #[serde(default)]
  pub prefix: String,
  #[serde(default = "default_filter")]
  pub filter: String,
  #[serde(default)]
  pub action_namespace: String,
  /// Route table dumped by the host framework.
  #[serde(default = "default_routes")]
  pub routes: String,
  #[serde(default)]
  pub template: TemplateSection,
}

impl Default for LarouteSection {
  fn default() -> Self {
    Self {
      path: default_path(),
      filename: default_filename(),
      namespace: default_namespace(),
      output_type: default_type(),
      absolute: false,
      prefix: String::new(),
      filter: default_filter(),
      action_namespace: String::new(),
      routes: default_routes(),
      template: TemplateSection::default(),
    }
  }
}

/// Per-output-type template overrides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateSection {
  pub js: Option<String>,
  pub json: Option<String>,
}

fn default_path() -> String {
  "public/js".to_string()
}

fn default_filename() -> String {
  "laroute".to_string()
}

fn default_namespace() -> String {
  "laroute".to_string()
}

fn default_type() -> String {
  "js".to_string()
}

fn default_filter() -> String {
  "all".to_string()
}

fn default_routes() -> String {
  "routes.json".to_string()
}
