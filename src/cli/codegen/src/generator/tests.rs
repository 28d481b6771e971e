/* src/cli/codegen/src/generator/tests.rs */

use std::cell::RefCell;

use serde_json::json;

use super::*;
use crate::collection::FilterPolicy;
use crate::compiler::TeraCompiler;
use crate::source::RawRoute;

fn home_only() -> RouteCollection {
  RouteCollection::build(
    vec![RawRoute::new(Some("home"), &["GET"], "/", Some("HomeController@index"))],
    FilterPolicy::All,
    "",
  )
}

fn options() -> GenerateOptions {
  GenerateOptions {
    namespace: "Router".to_string(),
    absolute: true,
    root_url: "https://example.test".to_string(),
    prefix: "/app".to_string(),
  }
}

/// Records what it was asked to render.
#[derive(Default)]
struct RecordingCompiler {
  calls: RefCell<Vec<(TemplateRef, Value)>>,
}

impl Compiler for RecordingCompiler {
  fn compile(&self, template: &TemplateRef, data: &Value) -> Result<String> {
    self.calls.borrow_mut().push((template.clone(), data.clone()));
    Ok("rendered".to_string())
  }
}

// -- Context --

#[test]
fn context_carries_options_and_routes() {
  let ctx = GenerationContext::new(&options(), &home_only());
  assert_eq!(
    ctx.to_data(),
    json!({
      "namespace": "Router",
      "routes": [{ "uri": "/", "methods": ["GET"], "name": "home" }],
      "absolute": true,
      "rootUrl": "https://example.test",
      "prefix": "/app",
    })
  );
}

#[test]
fn context_data_has_exactly_template_keys() {
  let ctx = GenerationContext::new(&GenerateOptions::default(), &RouteCollection::default());
  let data = ctx.to_data();
  let mut keys: Vec<&str> = data.as_object().unwrap().keys().map(String::as_str).collect();
  keys.sort_unstable();
  assert_eq!(keys, vec!["absolute", "namespace", "prefix", "rootUrl", "routes"]);
}

#[test]
fn default_options() {
  let opts = GenerateOptions::default();
  assert_eq!(opts.namespace, "laroute");
  assert!(!opts.absolute);
  assert!(opts.prefix.is_empty());
}

// -- Helpers --

#[test]
fn output_path_joins_filename_and_extension() {
  assert_eq!(
    output_path(Path::new("public/js"), "laroute", OutputType::Js),
    PathBuf::from("public/js/laroute.js")
  );
  assert_eq!(
    output_path(Path::new("out"), "routes", OutputType::Json),
    PathBuf::from("out/routes.json")
  );
}

#[test]
fn select_template_prefers_custom() {
  assert_eq!(select_template(OutputType::Js, None), TemplateRef::Builtin(OutputType::Js));
  assert_eq!(
    select_template(OutputType::Json, Some(Path::new("t.tera"))),
    TemplateRef::File(PathBuf::from("t.tera"))
  );
}

// -- Generate --

#[test]
fn generate_passes_context_to_compiler() {
  let dir = tempfile::tempdir().unwrap();
  let out = dir.path().join("laroute.js");
  let generator = ArtifactGenerator::new(RecordingCompiler::default());
  let ctx = GenerationContext::new(&options(), &home_only());

  let written = generator.generate(&TemplateRef::Builtin(OutputType::Js), &ctx, &out).unwrap();

  assert_eq!(written, out);
  assert_eq!(std::fs::read_to_string(&out).unwrap(), "rendered");
  let calls = generator.compiler.calls.borrow();
  assert_eq!(calls.len(), 1);
  assert_eq!(calls[0].0, TemplateRef::Builtin(OutputType::Js));
  assert_eq!(calls[0].1, ctx.to_data());
}

#[test]
fn generate_json_document() {
  let dir = tempfile::tempdir().unwrap();
  let out = dir.path().join("laroute.json");
  let generator = ArtifactGenerator::new(TeraCompiler::new());
  let ctx = GenerationContext::new(&options(), &home_only());

  generator.generate(&TemplateRef::Builtin(OutputType::Json), &ctx, &out).unwrap();

  let doc: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
  assert_eq!(doc["routes"], json!([{ "uri": "/", "methods": ["GET"], "name": "home" }]));
  assert_eq!(doc["namespace"], "Router");
  assert_eq!(doc["prefix"], "/app");
  assert_eq!(doc["absolute"], true);
  assert_eq!(doc["rootUrl"], "https://example.test");
}

#[test]
fn generate_js_script() {
  let dir = tempfile::tempdir().unwrap();
  let out = dir.path().join("laroute.js");
  let generator = ArtifactGenerator::new(TeraCompiler::new());
  let ctx = GenerationContext::new(&options(), &home_only());

  generator.generate(&TemplateRef::Builtin(OutputType::Js), &ctx, &out).unwrap();

  let script = std::fs::read_to_string(&out).unwrap();
  assert!(script.contains(r#"root["Router"] = laroute;"#));
  assert!(script.contains(r#"rootUrl: "https://example.test","#));
  assert!(script.contains(r#"prefix: "/app","#));
  assert!(script.contains("absolute: true,"));
  assert!(!script.contains("HomeController"));
}

#[test]
fn generate_overwrites_existing_file() {
  let dir = tempfile::tempdir().unwrap();
  let out = dir.path().join("laroute.json");
  std::fs::write(&out, "stale contents that are longer than the new output").unwrap();
  let generator = ArtifactGenerator::new(RecordingCompiler::default());
  let ctx = GenerationContext::new(&options(), &home_only());

  generator.generate(&TemplateRef::Builtin(OutputType::Json), &ctx, &out).unwrap();

  assert_eq!(std::fs::read_to_string(&out).unwrap(), "rendered");
}

#[test]
fn missing_template_writes_nothing() {
  let dir = tempfile::tempdir().unwrap();
  let out = dir.path().join("laroute.js");
  let generator = ArtifactGenerator::new(TeraCompiler::new());
  let ctx = GenerationContext::new(&options(), &home_only());
  let template = TemplateRef::File(dir.path().join("nope.tera"));

  let err = generator.generate(&template, &ctx, &out).unwrap_err();

  assert!(matches!(err, Error::TemplateNotFound { .. }));
  assert!(!out.exists());
}

#[test]
fn missing_template_leaves_existing_output_unchanged() {
  let dir = tempfile::tempdir().unwrap();
  let out = dir.path().join("laroute.js");
  std::fs::write(&out, "previous").unwrap();
  let generator = ArtifactGenerator::new(TeraCompiler::new());
  let ctx = GenerationContext::new(&options(), &home_only());

  let err =
    generator.generate(&TemplateRef::File(dir.path().join("nope.tera")), &ctx, &out).unwrap_err();

  assert!(matches!(err, Error::TemplateNotFound { .. }));
  assert_eq!(std::fs::read_to_string(&out).unwrap(), "previous");
}

#[test]
fn render_error_propagates_unchanged() {
  let dir = tempfile::tempdir().unwrap();
  let template = dir.path().join("bad.tera");
  std::fs::write(&template, "{{ nowhere }}").unwrap();
  let out = dir.path().join("laroute.js");
  let generator = ArtifactGenerator::new(TeraCompiler::new());
  let ctx = GenerationContext::new(&options(), &home_only());

  let err = generator.generate(&TemplateRef::File(template), &ctx, &out).unwrap_err();

  assert!(matches!(err, Error::RenderError { .. }));
  assert!(!out.exists());
}

#[test]
fn missing_directory_is_write_error() {
  let dir = tempfile::tempdir().unwrap();
  let out = dir.path().join("not-created").join("laroute.js");
  let generator = ArtifactGenerator::new(RecordingCompiler::default());
  let ctx = GenerationContext::new(&options(), &home_only());

  let err = generator.generate(&TemplateRef::Builtin(OutputType::Js), &ctx, &out).unwrap_err();

  match err {
    Error::WriteError { path, .. } => assert_eq!(path, out),
    other => panic!("expected WriteError, got {other:?}"),
  }
  assert!(!dir.path().join("not-created").exists());
}

#[test]
fn empty_collection_still_generates() {
  let dir = tempfile::tempdir().unwrap();
  let out = dir.path().join("laroute.json");
  let generator = ArtifactGenerator::new(TeraCompiler::new());
  let ctx = GenerationContext::new(&GenerateOptions::default(), &RouteCollection::default());

  generator.generate(&TemplateRef::Builtin(OutputType::Json), &ctx, &out).unwrap();

  let doc: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
  assert_eq!(doc["routes"], json!([]));
  assert_eq!(doc["namespace"], "laroute");
}
