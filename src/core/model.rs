//! Model trait - common interface for all API records

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::core::kind::ModelKind;

/// Undeclared members of an open record, in document order
pub type AdditionalProperties = Map<String, Value>;

/// Errors raised when building or mutating models
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("'{key}' is a declared field of {schema} and cannot be set as an additional property")]
    ReservedKey { key: String, schema: &'static str },

    #[error("invalid {kind} document: {source}")]
    Decode {
        kind: ModelKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode {kind}: {source}")]
    Encode {
        kind: ModelKind,
        #[source]
        source: serde_json::Error,
    },
}

/// Common trait for all typed records
///
/// Every record is an open schema: members that are not declared fields are
/// kept in an [`AdditionalProperties`] map and written back on serialization.
pub trait Model: Serialize + DeserializeOwned {
    /// The document kind this model represents
    const KIND: ModelKind;

    /// Wire names of the declared fields
    const FIELDS: &'static [&'static str];

    /// Undeclared members captured during deserialization
    fn additional_properties(&self) -> &AdditionalProperties;

    /// Mutable access to undeclared members
    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties;

    /// Look up an undeclared member
    fn get_additional(&self, key: &str) -> Option<&Value> {
        self.additional_properties().get(key)
    }

    /// Set an undeclared member, returning the previous value
    ///
    /// Keys matching a declared wire name are rejected, since the flattened
    /// map would otherwise emit a duplicate member.
    fn set_additional(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, ModelError> {
        let key = key.into();
        if Self::FIELDS.contains(&key.as_str()) {
            return Err(ModelError::ReservedKey {
                key,
                schema: Self::KIND.schema_name(),
            });
        }
        Ok(self.additional_properties_mut().insert(key, value.into()))
    }

    /// Remove an undeclared member
    fn remove_additional(&mut self, key: &str) -> Option<Value> {
        self.additional_properties_mut().remove(key)
    }

    /// Decode from an untyped JSON value
    fn from_value(value: Value) -> Result<Self, ModelError> {
        serde_json::from_value(value).map_err(|source| ModelError::Decode {
            kind: Self::KIND,
            source,
        })
    }

    /// Encode into an untyped JSON value
    fn to_value(&self) -> Result<Value, ModelError> {
        serde_json::to_value(self).map_err(|source| ModelError::Encode {
            kind: Self::KIND,
            source,
        })
    }
}
