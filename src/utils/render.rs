use minijinja::Environment;
use serde::Serialize;

use crate::utils::app_error::ValidationErrors;

pub const REGISTER_VIEW: &str = "register.html";

/// Context of the register view.
#[derive(Debug, Serialize)]
pub struct RegisterView<'a> {
    pub errors: Option<&'a ValidationErrors>,
    pub success: bool,
}

/// Templates compiled into the binary. Names ending in `.html` are
/// auto-escaped.
#[derive(Debug)]
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(REGISTER_VIEW, include_str!("../../templates/register.html"))?;
        Ok(Self { env })
    }

    pub fn render<C: Serialize>(&self, view: &str, context: C) -> Result<String, minijinja::Error> {
        self.env.get_template(view)?.render(context)
    }
}
