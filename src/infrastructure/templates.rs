//! HTML view rendering
//!
//! Templates are plain files loaded from a directory at startup. Every
//! template name ends in `.html`, so minijinja escapes interpolated values
//! automatically. Prices go through the `price` filter.

use std::path::PathBuf;
use std::sync::Arc;

use axum::response::Html;
use minijinja::{path_loader, Environment};
use serde::Serialize;

pub const LIST_TEMPLATE: &str = "list.html";
pub const ADD_TEMPLATE: &str = "add.html";
pub const EDIT_TEMPLATE: &str = "edit.html";

const ALL_TEMPLATES: [&str; 3] = [LIST_TEMPLATE, ADD_TEMPLATE, EDIT_TEMPLATE];

#[derive(Clone)]
pub struct Views {
    env: Arc<Environment<'static>>,
}

impl Views {
    /// Builds the environment over `dir` and compiles every page template, so
    /// a missing or broken file fails at startup rather than on first request.
    pub fn load(dir: impl Into<PathBuf>) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_loader(path_loader(dir.into()));
        env.add_filter("price", format_price);

        for name in ALL_TEMPLATES {
            env.get_template(name)?;
        }
        Ok(Self { env: Arc::new(env) })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<Html<String>, minijinja::Error> {
        let template = self.env.get_template(name)?;
        Ok(Html(template.render(ctx)?))
    }
}

/// Shortest decimal form: whole prices print without a fractional part.
fn format_price(price: f64) -> String {
    price.to_string()
}
