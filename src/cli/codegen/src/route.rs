/* src/cli/codegen/src/route.rs */

/// One named route, normalized from the host framework's route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
  pub name: String,
  pub methods: Vec<String>,
  pub uri: String,
  /// Placeholder names in `uri`, left to right.
  pub parameters: Vec<String>,
  /// Handler identity, only consulted by namespace filtering.
  pub action: Option<String>,
}

impl Route {
  pub fn new(
    name: impl Into<String>,
    methods: Vec<String>,
    uri: impl Into<String>,
    action: Option<String>,
  ) -> Self {
    let uri = uri.into();
    let parameters = extract_parameters(&uri);
    Self { name: name.into(), methods, uri, parameters, action }
  }
}

/// Extract placeholder names from a URI pattern: `/users/{id}/posts/{post?}` -> `[id, post]`.
///
/// Malformed tokens are skipped rather than rejected. An unclosed `{` ends the scan,
/// and `{}` contributes nothing.
pub fn extract_parameters(uri: &str) -> Vec<String> {
  let mut params = Vec::new();
  let mut rest = uri;

  while let Some(open) = rest.find('{') {
    let after_open = &rest[open + 1..];
    let Some(close) = after_open.find('}') else {
      break;
    };
    let body = &after_open[..close];

    // Outer token never closed -- restart at the innermost opening brace
    if let Some(inner) = body.rfind('{') {
      rest = &after_open[inner..];
      continue;
    }

    let name = body.strip_suffix('?').unwrap_or(body);
    if !name.is_empty() {
      params.push(name.to_string());
    }
    rest = &after_open[close + 1..];
  }

  params
}

/// Upper-case HTTP verbs and drop blanks and repeats, keeping first appearance.
pub(crate) fn normalize_methods<S: AsRef<str>>(methods: &[S]) -> Vec<String> {
  let mut out: Vec<String> = Vec::with_capacity(methods.len());
  for method in methods {
    let verb = method.as_ref().trim().to_ascii_uppercase();
    if !verb.is_empty() && !out.contains(&verb) {
      out.push(verb);
    }
  }
  out
}
