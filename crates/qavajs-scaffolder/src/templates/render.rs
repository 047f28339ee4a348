//! `{{name}}` placeholder substitution

use std::collections::HashMap;

/// Named values substituted into a template
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Replace every `{{key}}` with its value; unknown placeholders stay as-is
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

/// Collapse every run of line breaks into a single `\n`.
///
/// Placeholders that render to nothing leave empty lines behind; this drops them.
pub fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\n' && c != '\r' {
            out.push(c);
            continue;
        }

        let mut saw_newline = c == '\n';
        let mut run = String::from(c);
        while let Some(&next) = chars.peek() {
            if next != '\n' && next != '\r' {
                break;
            }
            saw_newline |= next == '\n';
            run.push(next);
            chars.next();
        }

        // A bare carriage return is not a line break
        if saw_newline {
            out.push('\n');
        } else {
            out.push_str(&run);
        }
    }

    out
}
