//! # Prompt Templates
//!
//! This module provides the [`Template`] type: an immutable prompt string
//! with a declared set of `{name}` placeholders. The declared variables and
//! the placeholders actually present in the text are checked against each
//! other when the template is constructed, so a template that renders at all
//! renders completely.

use crate::errors::PromptError;
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Matches a `{name}` substitution point in a template string.
const PLACEHOLDER_PATTERN: &str = r"\{([A-Za-z_][A-Za-z0-9_]*)\}";

/// An immutable prompt template with a declared variable set.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    text: String,
    variables: Vec<String>,
}

impl Template {
    /// Creates a template, validating that the declared variables and the
    /// `{name}` tokens in `text` match exactly.
    ///
    /// Returns [`PromptError::UndeclaredPlaceholder`] if the text references
    /// a name outside `variables`, or [`PromptError::UnreferencedVariable`]
    /// if a declared variable never appears in the text.
    pub fn new(name: &str, text: &str, variables: &[&str]) -> Result<Self, PromptError> {
        let re = Regex::new(PLACEHOLDER_PATTERN)?;
        let declared: Vec<String> = variables.iter().map(|v| v.to_string()).collect();

        let referenced: Vec<String> = re
            .captures_iter(text)
            .map(|caps| caps[1].to_string())
            .collect();

        if let Some(placeholder) = referenced.iter().find(|r| !declared.contains(r)) {
            return Err(PromptError::UndeclaredPlaceholder(placeholder.clone()));
        }
        if let Some(variable) = declared.iter().find(|d| !referenced.contains(d)) {
            return Err(PromptError::UnreferencedVariable(variable.clone()));
        }

        Ok(Self {
            name: name.to_string(),
            text: text.to_string(),
            variables: declared,
        })
    }

    /// The template's name, used in log events.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw template text, placeholders included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The declared variable names, in declaration order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Renders the template by substituting every `{name}` occurrence with
    /// its bound value.
    ///
    /// `variables` must contain exactly the declared variable names: a
    /// missing key fails with [`PromptError::MissingVariable`] and a stray
    /// one with [`PromptError::UnknownVariable`]. Substitution is a single
    /// pass over the template text, so bound values containing `{name}`
    /// tokens are emitted verbatim rather than re-expanded.
    pub fn render(&self, variables: &HashMap<String, String>) -> Result<String, PromptError> {
        for key in variables.keys() {
            if !self.variables.contains(key) {
                return Err(PromptError::UnknownVariable(key.clone()));
            }
        }
        for name in &self.variables {
            if !variables.contains_key(name) {
                return Err(PromptError::MissingVariable(name.clone()));
            }
        }

        let re = Regex::new(PLACEHOLDER_PATTERN)?;
        let rendered = re
            .replace_all(&self.text, |caps: &regex::Captures| {
                // The exact key set was checked above, so every capture
                // resolves to a bound value.
                variables[&caps[1]].clone()
            })
            .into_owned();

        debug!(template = %self.name, rendered = %rendered, "Rendered prompt template");

        Ok(rendered)
    }

    /// Renders the template from a `serde_json::Value`.
    ///
    /// This allows for easy integration with APIs that receive JSON
    /// payloads: `value` must be a JSON object mapping variable names to
    /// string values.
    pub fn render_from_value(&self, value: Value) -> Result<String, PromptError> {
        let variables: HashMap<String, String> = serde_json::from_value(value)?;
        self.render(&variables)
    }
}
