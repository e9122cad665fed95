//! Status type - HTTP status carried inside problem-detail error bodies

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::core::kind::ModelKind;
use crate::core::model::{AdditionalProperties, Model};

/// HTTP status descriptor of a problem detail
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_phrase: Option<String>,

    /// Integral JSON numbers are accepted in any spelling (`404`, `404.0`)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_status_code"
    )]
    pub status_code: Option<i32>,

    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for StatusType {
    const KIND: ModelKind = ModelKind::StatusType;
    const FIELDS: &'static [&'static str] = &["reasonPhrase", "statusCode"];

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

impl StatusType {
    /// Status with an explicit code and phrase
    pub fn new(status_code: i32, reason_phrase: impl Into<String>) -> Self {
        Self {
            reason_phrase: Some(reason_phrase.into()),
            status_code: Some(status_code),
            additional_properties: AdditionalProperties::new(),
        }
    }

    /// Status for a code, with the canonical reason phrase when one is known
    pub fn from_code(status_code: i32) -> Self {
        Self {
            reason_phrase: canonical_reason(status_code).map(str::to_string),
            status_code: Some(status_code),
            additional_properties: AdditionalProperties::new(),
        }
    }

    fn class(&self) -> Option<i32> {
        self.status_code
            .filter(|code| (100..600).contains(code))
            .map(|code| code / 100)
    }

    pub fn is_informational(&self) -> bool {
        self.class() == Some(1)
    }

    pub fn is_success(&self) -> bool {
        self.class() == Some(2)
    }

    pub fn is_redirection(&self) -> bool {
        self.class() == Some(3)
    }

    pub fn is_client_error(&self) -> bool {
        self.class() == Some(4)
    }

    pub fn is_server_error(&self) -> bool {
        self.class() == Some(5)
    }

    pub fn is_error(&self) -> bool {
        self.is_client_error() || self.is_server_error()
    }
}

impl std::fmt::Display for StatusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.status_code, self.reason_phrase.as_deref()) {
            (Some(code), Some(reason)) => write!(f, "{} {}", code, reason),
            (Some(code), None) => write!(f, "{}", code),
            (None, Some(reason)) => write!(f, "{}", reason),
            (None, None) => write!(f, "unknown status"),
        }
    }
}

/// Read a status code as a 32-bit integer
///
/// JSON Schema counts any number with a zero fractional part as an integer,
/// so `404.0` is taken as `404`; fractions and values outside `i32` fail.
fn deserialize_status_code<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let integral = match number.as_i64() {
        Some(n) => Some(n),
        None => number
            .as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
            .map(|f| f as i64),
    };

    integral
        .and_then(|n| i32::try_from(n).ok())
        .map(Some)
        .ok_or_else(|| {
            de::Error::custom(format!("statusCode {} is not a 32-bit integer", number))
        })
}

/// Canonical reason phrase for a registered HTTP status code
pub fn canonical_reason(code: i32) -> Option<&'static str> {
    let reason = match code {
        100 => "Continue",
        101 => "Switching Protocols",
        102 => "Processing",
        103 => "Early Hints",
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        203 => "Non-Authoritative Information",
        204 => "No Content",
        205 => "Reset Content",
        206 => "Partial Content",
        207 => "Multi-Status",
        208 => "Already Reported",
        226 => "IM Used",
        300 => "Multiple Choices",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        304 => "Not Modified",
        307 => "Temporary Redirect",
        308 => "Permanent Redirect",
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        412 => "Precondition Failed",
        413 => "Payload Too Large",
        414 => "URI Too Long",
        415 => "Unsupported Media Type",
        416 => "Requested range not satisfiable",
        417 => "Expectation Failed",
        418 => "I'm a teapot",
        421 => "Misdirected Request",
        422 => "Unprocessable Entity",
        423 => "Locked",
        424 => "Failed Dependency",
        425 => "Too Early",
        426 => "Upgrade Required",
        428 => "Precondition Required",
        429 => "Too Many Requests",
        431 => "Request Header Fields Too Large",
        451 => "Unavailable For Legal Reasons",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "HTTP Version not supported",
        506 => "Variant Also Negotiates",
        507 => "Insufficient Storage",
        508 => "Loop Detected",
        509 => "Bandwidth Limit Exceeded",
        510 => "Not Extended",
        511 => "Network Authentication Required",
        _ => return None,
    };
    Some(reason)
}
