//! YAML error types with source-span diagnostics
//!
//! Syntax errors carry the offending file content and a span, so miette can
//! render the failing line with a pointer instead of a bare message.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors from reading or parsing a YAML file
#[derive(Debug, Error, Diagnostic)]
pub enum YamlError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] YamlSyntaxError),
}

/// A YAML syntax or mapping error with its location in the source
#[derive(Debug, Error, Diagnostic)]
#[error("Invalid YAML: {message}")]
pub struct YamlSyntaxError {
    /// What the parser objected to
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("here")]
    pub span: Option<SourceSpan>,
}

impl YamlSyntaxError {
    /// Build a spanned diagnostic from a serde_yml error
    pub fn from_serde_error(err: &serde_yml::Error, content: &str, filename: &str) -> Self {
        let span = err.location().map(|loc| {
            let offset = loc.index().min(content.len().saturating_sub(1));
            SourceSpan::from((offset, 1))
        });

        Self {
            message: err.to_string(),
            src: NamedSource::new(filename, content.to_string()),
            span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_carries_span() {
        let content = "name: test\nvalue: [1, 2";
        let err = serde_yml::from_str::<serde_yml::Value>(content).unwrap_err();
        let diag = YamlSyntaxError::from_serde_error(&err, content, "test.yaml");
        assert!(diag.span.is_some());
        assert!(!diag.message.is_empty());
    }
}
