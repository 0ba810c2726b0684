//! Named styles and the template renderer.
//!
//! Templates refer to semantic style names (`{{ name | style("name") }}`);
//! the [`Theme`] maps those names to `console` styles. With colour disabled
//! the filter passes text through untouched, except that an unknown style name
//! is flagged with [`MISSING_STYLE_INDICATOR`] so typos show up in output.
//!
//! Templates whose name ends in `.html` are HTML-escaped by minijinja.

use console::{Style, Term};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, replacing any previous one with that name.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

/// Whether stdout can show colours.
pub fn stdout_supports_color() -> bool {
    Term::stdout().features().colors_supported()
}

/// A minijinja environment with named templates and the `style` filter.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(theme: Theme, use_color: bool) -> Self {
        let mut env = Environment::new();
        env.add_filter("style", move |value: Value, name: String| -> String {
            theme.apply(&name, &value.to_string(), use_color)
        });
        Self { env }
    }

    /// Registers a named template. Syntax errors surface here.
    pub fn add_template(&mut self, name: &'static str, source: &'static str) -> Result<(), Error> {
        self.env.add_template(name, source)
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }
}
