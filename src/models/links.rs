//! Link objects attached to resources and collections

use serde::{Deserialize, Serialize};

use crate::core::model::AdditionalProperties;

/// Links of a single resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectLinks {
    /// A string containing the link's URL
    #[serde(rename = "self")]
    pub self_link: String,

    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl ObjectLinks {
    pub fn new(self_link: impl Into<String>) -> Self {
        Self {
            self_link: self_link.into(),
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// Links of a paged collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListLinks {
    #[serde(rename = "self")]
    pub self_link: String,

    /// Link to the next page, absent on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl ListLinks {
    pub fn new(self_link: impl Into<String>) -> Self {
        Self {
            self_link: self_link.into(),
            next: None,
            additional_properties: AdditionalProperties::new(),
        }
    }
}
