//! Server-side page templates.
//!
//! Templates are compiled into the binary and registered once at startup.
//! Names ending in `.html` are auto-escaped.

use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

pub const ALL_LISTS: &str = "all_lists.html";
pub const NEW_LIST: &str = "new_list.html";
pub const SINGLE_LIST: &str = "single_list.html";
pub const EDIT_LIST: &str = "edit_list.html";

const SOURCES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../templates/layout.html")),
    (ALL_LISTS, include_str!("../templates/all_lists.html")),
    (NEW_LIST, include_str!("../templates/new_list.html")),
    (SINGLE_LIST, include_str!("../templates/single_list.html")),
    (EDIT_LIST, include_str!("../templates/edit_list.html")),
];

/// The registered template set.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Parse and register every page template.
    pub fn load() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in SOURCES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Render the template `name` with `context`.
    pub fn render<C: Serialize>(
        &self,
        name: &str,
        context: C,
    ) -> Result<Html<String>, minijinja::Error> {
        let template = self.env.get_template(name)?;
        Ok(Html(template.render(context)?))
    }
}
