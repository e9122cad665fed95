//! Schema validation of raw documents
//!
//! Documents are parsed into untyped JSON and checked against the embedded
//! schema of their kind. Every declared member, when present, must match its
//! declared type; undeclared members are accepted.

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

use crate::core::ModelKind;
use crate::schema::registry::SchemaRegistry;
use crate::yaml::{parse_document, YamlError};

/// A schema could not be loaded or compiled
#[derive(Debug, Error, Diagnostic)]
pub enum SchemaError {
    #[error("no embedded schema for {0}")]
    #[diagnostic(code(gdm::schema::missing))]
    Missing(ModelKind),

    #[error("invalid schema for {kind}: {message}")]
    #[diagnostic(code(gdm::schema::invalid))]
    Invalid { kind: ModelKind, message: String },
}

/// A single schema violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON pointer to the offending member ("" for the document root)
    pub instance_path: String,
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// One violation rendered against the document source
#[derive(Debug, Error, Diagnostic)]
#[error("{violation}")]
pub struct ViolationDiagnostic {
    pub violation: Violation,

    #[label("here")]
    pub span: Option<SourceSpan>,
}

/// A document that failed schema validation
#[derive(Debug, Error, Diagnostic)]
#[error("{filename} is not a valid {kind} document ({} violation(s))", .violations.len())]
#[diagnostic(code(gdm::schema::violation))]
pub struct SchemaViolations {
    pub kind: ModelKind,
    pub filename: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[related]
    pub violations: Vec<ViolationDiagnostic>,
}

/// Errors produced while validating a document
#[derive(Debug, Error, Diagnostic)]
pub enum ValidationError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] YamlError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(#[from] SchemaViolations),

    #[error("cannot determine the kind of {filename}")]
    #[diagnostic(
        code(gdm::schema::unknown_kind),
        help("pass --kind, or add a `type`, `data` or `statusCode` member")
    )]
    UnknownKind { filename: String },
}

impl ValidationError {
    /// Number of individual problems this error represents
    pub fn violation_count(&self) -> usize {
        match self {
            ValidationError::Schema(v) => v.violations.len(),
            _ => 1,
        }
    }
}

/// Compiled validators for every registered schema
pub struct Validator {
    compiled: HashMap<ModelKind, jsonschema::Validator>,
}

impl Validator {
    /// Compile all schemas from the registry
    pub fn new(registry: &SchemaRegistry) -> Result<Self, SchemaError> {
        let mut compiled = HashMap::new();

        for kind in ModelKind::all() {
            let schema = bundle(registry, *kind)?;
            let validator =
                jsonschema::validator_for(&schema).map_err(|e| SchemaError::Invalid {
                    kind: *kind,
                    message: e.to_string(),
                })?;
            compiled.insert(*kind, validator);
        }

        tracing::debug!(count = compiled.len(), "compiled schemas");
        Ok(Self { compiled })
    }

    /// Check an untyped value, returning every violation
    pub fn check(&self, value: &Value, kind: ModelKind) -> Vec<Violation> {
        let Some(validator) = self.compiled.get(&kind) else {
            return vec![Violation {
                instance_path: String::new(),
                message: format!("no schema registered for {}", kind),
            }];
        };

        validator
            .iter_errors(value)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                message: e.to_string(),
            })
            .collect()
    }

    /// Whether an untyped value conforms to the schema of a kind
    pub fn is_valid(&self, value: &Value, kind: ModelKind) -> bool {
        self.compiled
            .get(&kind)
            .is_some_and(|validator| validator.is_valid(value))
    }

    /// Parse and validate document content against a kind
    pub fn validate(
        &self,
        content: &str,
        filename: &str,
        kind: ModelKind,
    ) -> Result<Value, ValidationError> {
        let value = parse_document(content, filename)?;
        self.validate_parsed(value, content, filename, kind)
    }

    /// Parse document content, detect its kind, and validate it
    pub fn validate_detect(
        &self,
        content: &str,
        filename: &str,
    ) -> Result<(ModelKind, Value), ValidationError> {
        let value = parse_document(content, filename)?;
        let kind = ModelKind::detect(&value).ok_or_else(|| ValidationError::UnknownKind {
            filename: filename.to_string(),
        })?;
        tracing::debug!(file = filename, %kind, "detected document kind");
        let value = self.validate_parsed(value, content, filename, kind)?;
        Ok((kind, value))
    }

    fn validate_parsed(
        &self,
        value: Value,
        content: &str,
        filename: &str,
        kind: ModelKind,
    ) -> Result<Value, ValidationError> {
        let violations = self.check(&value, kind);
        if violations.is_empty() {
            return Ok(value);
        }

        tracing::debug!(file = filename, %kind, count = violations.len(), "schema violations");
        let violations = violations
            .into_iter()
            .map(|violation| ViolationDiagnostic {
                span: locate(content, &violation.instance_path),
                violation,
            })
            .collect();

        Err(ValidationError::Schema(SchemaViolations {
            kind,
            filename: filename.to_string(),
            src: NamedSource::new(filename, content.to_string()),
            violations,
        }))
    }
}

/// Build a self-contained schema document for a kind
///
/// Schemas that reference other embedded schemas by relative URI get those
/// schemas bundled under `$defs`; their `$id` makes the reference resolve
/// locally.
fn bundle(registry: &SchemaRegistry, kind: ModelKind) -> Result<Value, SchemaError> {
    let mut schema = registry.get_value(kind).ok_or(SchemaError::Missing(kind))?;

    for dependency in dependencies(kind) {
        let embedded = registry
            .get_value(*dependency)
            .ok_or(SchemaError::Missing(*dependency))?;
        let Some(root) = schema.as_object_mut() else {
            return Err(SchemaError::Invalid {
                kind,
                message: "schema root is not an object".to_string(),
            });
        };
        let defs = root
            .entry("$defs")
            .or_insert_with(|| Value::Object(Default::default()));
        if let Some(defs) = defs.as_object_mut() {
            defs.insert(dependency.as_str().to_string(), embedded);
        }
    }

    Ok(schema)
}

fn dependencies(kind: ModelKind) -> &'static [ModelKind] {
    match kind {
        ModelKind::DataSourceIdentifierList => &[ModelKind::DataSourceIdentifier],
        ModelKind::DataSourceIdentifier | ModelKind::StatusType => &[],
    }
}

/// Best-effort source position for a JSON pointer
///
/// Walks the pointer one segment at a time, narrowing to the matched member
/// or element, so repeated keys resolve to the right occurrence. Object
/// members point at their key, array elements at the element itself. When a
/// segment cannot be followed the deepest resolved position is returned.
fn locate(content: &str, pointer: &str) -> Option<SourceSpan> {
    let segments: Vec<String> = pointer
        .split('/')
        .skip(1)
        .map(|seg| seg.replace("~1", "/").replace("~0", "~"))
        .collect();

    if matches!(content.trim_start().chars().next(), Some('{') | Some('[')) {
        locate_json(content, &segments)
    } else {
        locate_yaml(content, &segments)
    }
}

// ============================================================================
// JSON source walking
// ============================================================================

fn locate_json(content: &str, segments: &[String]) -> Option<SourceSpan> {
    let bytes = content.as_bytes();
    let mut pos = skip_ws(bytes, 0);
    let mut span = None;

    for segment in segments {
        let found = match bytes.get(pos) {
            Some(b'{') => json_member(content, pos, segment),
            Some(b'[') => segment
                .parse()
                .ok()
                .and_then(|index| json_element(bytes, pos, index)),
            _ => None,
        };
        let Some((start, end, value)) = found else {
            break;
        };
        span = Some(SourceSpan::from((start, end - start)));
        pos = value;
    }

    span
}

/// Key span and value start of the named member of the object at `pos`
fn json_member(content: &str, pos: usize, name: &str) -> Option<(usize, usize, usize)> {
    let bytes = content.as_bytes();
    let mut i = skip_ws(bytes, pos + 1);

    loop {
        if bytes.get(i) != Some(&b'"') {
            return None;
        }
        let key_start = i;
        let key_end = skip_string(bytes, i)?;
        i = skip_ws(bytes, key_end);
        if bytes.get(i) != Some(&b':') {
            return None;
        }
        let value_start = skip_ws(bytes, i + 1);

        let key: Option<String> = serde_json::from_str(&content[key_start..key_end]).ok();
        if key.as_deref() == Some(name) {
            return Some((key_start, key_end, value_start));
        }

        i = skip_ws(bytes, skip_value(bytes, value_start)?);
        match bytes.get(i) {
            Some(b',') => i = skip_ws(bytes, i + 1),
            _ => return None,
        }
    }
}

/// Span of the element at `index` in the array at `pos`
fn json_element(bytes: &[u8], pos: usize, index: usize) -> Option<(usize, usize, usize)> {
    let mut i = skip_ws(bytes, pos + 1);
    let mut n = 0;

    loop {
        if matches!(bytes.get(i), None | Some(b']')) {
            return None;
        }
        let end = skip_value(bytes, i)?;
        if n == index {
            return Some((i, end, i));
        }

        i = skip_ws(bytes, end);
        match bytes.get(i) {
            Some(b',') => i = skip_ws(bytes, i + 1),
            _ => return None,
        }
        n += 1;
    }
}

fn skip_ws(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).is_some_and(|b| b.is_ascii_whitespace()) {
        i += 1;
    }
    i
}

/// Index just past the string starting at `i`
fn skip_string(bytes: &[u8], i: usize) -> Option<usize> {
    let mut j = i + 1;
    while j < bytes.len() {
        match bytes[j] {
            b'\\' => j += 2,
            b'"' => return Some(j + 1),
            _ => j += 1,
        }
    }
    None
}

/// Index just past the value starting at `i`
fn skip_value(bytes: &[u8], i: usize) -> Option<usize> {
    match bytes.get(i)? {
        b'"' => skip_string(bytes, i),
        b'{' | b'[' => {
            let mut depth = 0usize;
            let mut j = i;
            while j < bytes.len() {
                match bytes[j] {
                    b'"' => {
                        j = skip_string(bytes, j)?;
                        continue;
                    }
                    b'{' | b'[' => depth += 1,
                    b'}' | b']' => {
                        depth = depth.checked_sub(1)?;
                        if depth == 0 {
                            return Some(j + 1);
                        }
                    }
                    _ => {}
                }
                j += 1;
            }
            None
        }
        _ => {
            let len = bytes[i..]
                .iter()
                .take_while(|&&b| !matches!(b, b',' | b'}' | b']') && !b.is_ascii_whitespace())
                .count();
            (len > 0).then_some(i + len)
        }
    }
}

// ============================================================================
// YAML source walking
// ============================================================================

/// A block-style mapping key or sequence dash found in the source
#[derive(Debug)]
struct YamlToken<'a> {
    col: usize,
    offset: usize,
    len: usize,
    /// `None` for a sequence dash
    key: Option<&'a str>,
}

fn locate_yaml(content: &str, segments: &[String]) -> Option<SourceSpan> {
    let tokens = yaml_tokens(content);
    let mut block: &[YamlToken] = &tokens;
    let mut span = None;

    for segment in segments {
        let Some(min_col) = block.iter().map(|t| t.col).min() else {
            break;
        };
        let is_sequence = block.iter().any(|t| t.col == min_col && t.key.is_none());
        let mut children = block.iter().enumerate().filter(|(_, t)| t.col == min_col);

        let found = match segment.parse::<usize>() {
            Ok(index) if is_sequence => children.filter(|(_, t)| t.key.is_none()).nth(index),
            _ => children.find(|(_, t)| t.key == Some(segment.as_str())),
        };
        let Some((index, token)) = found else {
            break;
        };
        span = Some(SourceSpan::from((token.offset, token.len)));
        block = child_block(block, index);
    }

    span
}

/// Tokens nested under `block[index]`
///
/// A sequence may sit at the same indent as the key that owns it.
fn child_block<'t, 'a>(block: &'t [YamlToken<'a>], index: usize) -> &'t [YamlToken<'a>] {
    let parent = &block[index];
    let rest = &block[index + 1..];
    let len = rest
        .iter()
        .take_while(|t| {
            t.col > parent.col || (parent.key.is_some() && t.col == parent.col && t.key.is_none())
        })
        .count();
    &rest[..len]
}

fn yaml_tokens(content: &str) -> Vec<YamlToken<'_>> {
    let mut tokens = Vec::new();
    let mut line_start = 0;

    for line in content.split_inclusive('\n') {
        let start = line_start;
        line_start += line.len();

        let body = line.trim_end();
        let mut rest = body.trim_start();
        let mut col = body.len() - rest.len();
        if rest.is_empty() || rest.starts_with('#') || rest == "---" || rest == "..." {
            continue;
        }

        if rest == "-" || rest.starts_with("- ") {
            tokens.push(YamlToken { col, offset: start + col, len: 1, key: None });
            let after = &rest[1..];
            rest = after.trim_start();
            col += 1 + after.len() - rest.len();
            if rest.is_empty() {
                continue;
            }
        }

        if let Some((raw, key)) = mapping_key(rest) {
            tokens.push(YamlToken { col, offset: start + col, len: raw.len(), key: Some(key) });
        }
    }

    tokens
}

/// Raw and unquoted key of a `key: value` or `key:` line
fn mapping_key(text: &str) -> Option<(&str, &str)> {
    let end = match text.find(": ") {
        Some(end) => end,
        None => text.strip_suffix(':')?.len(),
    };
    let raw = text[..end].trim_end();
    if raw.is_empty() || raw.starts_with(['{', '[']) {
        return None;
    }
    Some((raw, raw.trim_matches(|c| c == '"' || c == '\'')))
}
