//! Template rendering
//!
//! All pages render through one minijinja [`Environment`] built at
//! startup from the templates embedded in the binary. Handlers pass
//! pre-computed context values; templates contain no URL or fetch logic.

use std::sync::Arc;

use include_dir::{Dir, include_dir};
use minijinja::Environment;

static TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Process-wide template engine
#[derive(Clone, Debug)]
pub struct Renderer {
    env: Arc<Environment<'static>>,
}

impl Renderer {
    /// Build the environment from the embedded template directory.
    ///
    /// Template parse errors abort startup: a template that does not
    /// compile can never render, so failing early is the only option.
    pub fn new() -> Self {
        let mut env = Environment::new();

        for file in TEMPLATES.files() {
            let name = file
                .path()
                .to_str()
                .expect("template names are valid UTF-8");
            let source = file
                .contents_utf8()
                .expect("template contents are valid UTF-8");
            env.add_template(name, source)
                .unwrap_or_else(|e| panic!("template {} failed to parse: {}", name, e));
        }

        Self { env: Arc::new(env) }
    }

    /// Render a template with the given context.
    pub fn render<S: serde::Serialize>(
        &self,
        name: &str,
        ctx: S,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
