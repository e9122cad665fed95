//! Parse errors rendered as source diagnostics

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors raised while reading a document
#[derive(Debug, Error, Diagnostic)]
pub enum YamlError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] YamlSyntaxError),

    #[error("failed to read document: {0}")]
    #[diagnostic(code(gdm::io))]
    Io(#[from] std::io::Error),

    #[error("failed to render JSON: {0}")]
    #[diagnostic(code(gdm::render))]
    RenderJson(#[source] serde_json::Error),

    #[error("failed to render YAML: {0}")]
    #[diagnostic(code(gdm::render))]
    RenderYaml(#[source] serde_yml::Error),
}

/// A syntax or shape error pointing into the document source
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(gdm::yaml::syntax), help("documents may be written as JSON or YAML"))]
pub struct YamlSyntaxError {
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("here")]
    pub span: Option<SourceSpan>,

    pub line: Option<usize>,
    pub column: Option<usize>,
}

impl YamlSyntaxError {
    /// Build from a serde_yml error, pointing at the reported location
    pub fn from_serde_error(err: &serde_yml::Error, content: &str, filename: &str) -> Self {
        let location = err.location();
        let span = location.as_ref().map(|loc| {
            let offset = loc.index().min(content.len());
            let len = if offset < content.len() { 1 } else { 0 };
            SourceSpan::from((offset, len))
        });

        Self {
            message: strip_location_suffix(&err.to_string()),
            src: NamedSource::new(filename, content.to_string()),
            span,
            line: location.as_ref().map(|loc| loc.line()),
            column: location.as_ref().map(|loc| loc.column()),
        }
    }

    /// Build from a serde_json error, pointing at its 1-based line and column
    pub fn from_json_error(err: &serde_json::Error, content: &str, filename: &str) -> Self {
        let line = err.line();
        let column = err.column();
        let span = (line > 0).then(|| {
            let line_start: usize = content
                .split_inclusive('\n')
                .take(line - 1)
                .map(str::len)
                .sum();
            let offset = (line_start + column.saturating_sub(1)).min(content.len());
            let len = if offset < content.len() { 1 } else { 0 };
            SourceSpan::from((offset, len))
        });

        Self {
            message: strip_location_suffix(&err.to_string()),
            src: NamedSource::new(filename, content.to_string()),
            span,
            line: (line > 0).then_some(line),
            column: (line > 0).then_some(column),
        }
    }
}

/// serde_yml and serde_json append " at line X column Y" to messages; the label shows that
fn strip_location_suffix(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_string(),
        None => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_location_suffix() {
        assert_eq!(
            strip_location_suffix("did not find expected key at line 2 column 3"),
            "did not find expected key"
        );
        assert_eq!(strip_location_suffix("plain"), "plain");
    }

    #[test]
    fn test_json_error_span() {
        let content = "{\"a\": 1,\n \"b\": }";
        let err = serde_json::from_str::<serde_json::Value>(content).unwrap_err();
        let diag = YamlSyntaxError::from_json_error(&err, content, "doc.json");

        assert_eq!(diag.line, Some(2));
        let span = diag.span.expect("span");
        assert_eq!(&content[span.offset()..span.offset() + span.len()], "}");
    }

    #[test]
    fn test_error_points_into_source() {
        let content = "id: x\n  bad: [\n";
        let err = serde_yml::from_str::<serde_json::Value>(content).unwrap_err();
        let diag = YamlSyntaxError::from_serde_error(&err, content, "doc.yaml");

        assert!(!diag.message.is_empty());
        if let Some(span) = diag.span {
            assert!(span.offset() <= content.len());
        }
    }
}
