/* src/cli/codegen/src/compiler.rs */

use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

use serde_json::Value;
use tera::{Context, Tera};

use crate::error::{Error, Result};
use crate::output::OutputType;

const JS_TEMPLATE: &str = include_str!("../templates/laroute.js.tera");
const JSON_TEMPLATE: &str = include_str!("../templates/laroute.json.tera");

/// Name the template is registered under inside the engine.
const TEMPLATE_NAME: &str = "artifact";

/// Where a template comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateRef {
  /// Template shipped with this crate for the given output type.
  Builtin(OutputType),
  File(PathBuf),
}

impl fmt::Display for TemplateRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Builtin(kind) => write!(f, "builtin:{kind}"),
      Self::File(path) => write!(f, "{}", path.display()),
    }
  }
}

/// Render a template against a data mapping. No filtering, no I/O beyond reading the template.
pub trait Compiler {
  fn compile(&self, template: &TemplateRef, data: &Value) -> Result<String>;
}

/// Tera-backed compiler. Undefined variables are render errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeraCompiler;

impl TeraCompiler {
  pub fn new() -> Self {
    Self
  }

  fn source(template: &TemplateRef) -> Result<Cow<'static, str>> {
    match template {
      TemplateRef::Builtin(OutputType::Js) => Ok(Cow::Borrowed(JS_TEMPLATE)),
      TemplateRef::Builtin(OutputType::Json) => Ok(Cow::Borrowed(JSON_TEMPLATE)),
      TemplateRef::File(path) => std::fs::read_to_string(path).map(Cow::Owned).map_err(|e| {
        Error::TemplateNotFound { template: template.to_string(), reason: e.to_string() }
      }),
    }
  }
}

impl Compiler for TeraCompiler {
  fn compile(&self, template: &TemplateRef, data: &Value) -> Result<String> {
    let source = Self::source(template)?;
    let render_error =
      |e: tera::Error| Error::RenderError { template: template.to_string(), message: engine_message(&e) };

    let mut tera = Tera::default();
    // Output is JS/JSON, never HTML
    tera.autoescape_on(Vec::new());
    tera.add_raw_template(TEMPLATE_NAME, &source).map_err(render_error)?;

    if !data.is_object() {
      return Err(Error::RenderError {
        template: template.to_string(),
        message: "template data must be a mapping of variable names to values".to_string(),
      });
    }
    let context = Context::from_value(data.clone()).map_err(render_error)?;
    tera.render(TEMPLATE_NAME, &context).map_err(render_error)
  }
}

/// Tera nests the useful detail in the source chain; flatten it into one line.
fn engine_message(err: &tera::Error) -> String {
  let mut message = err.to_string();
  let mut source = std::error::Error::source(err);
  while let Some(cause) = source {
    message.push_str(": ");
    message.push_str(&cause.to_string());
    source = cause.source();
  }
  message
}
