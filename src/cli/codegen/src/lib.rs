/* src/cli/codegen/src/lib.rs */

// Route table -> client URL helper artifact.
// raw routes -> RouteCollection -> GenerationContext -> Compiler -> file

pub mod collection;
pub mod compiler;
pub mod error;
pub mod generator;
pub mod output;
pub mod route;
pub mod source;

pub use collection::{FilterPolicy, RouteCollection};
pub use compiler::{Compiler, TemplateRef, TeraCompiler};
pub use error::{Error, Result};
pub use generator::{
  ArtifactGenerator, GenerateOptions, GenerationContext, output_path, select_template,
};
pub use output::OutputType;
pub use route::{Route, extract_parameters};
pub use source::{RawRoute, RouteSource, RouteTable};
