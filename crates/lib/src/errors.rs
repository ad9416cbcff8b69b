use thiserror::Error;

/// Custom error types for the application.
#[derive(Error, Debug)]
pub enum PromptError {
    /// A required template variable was not supplied at render time.
    #[error("Missing value for template variable: {0}")]
    MissingVariable(String),
    /// A variable was supplied that the template does not declare.
    #[error("Unknown template variable: {0}")]
    UnknownVariable(String),
    /// The template text references a placeholder outside its declared
    /// variable set. Raised at construction time.
    #[error("Template references undeclared placeholder: {{{0}}}")]
    UndeclaredPlaceholder(String),
    /// A declared variable has no `{name}` token in the template text.
    /// Raised at construction time.
    #[error("Declared variable never appears in the template: {0}")]
    UnreferencedVariable(String),
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
    #[error("Failed to deserialize template variables: {0}")]
    Deserialization(#[from] serde_json::Error),
}
