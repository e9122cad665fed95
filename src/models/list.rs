//! Document envelopes in which identifiers are returned

use serde::{Deserialize, Serialize};

use crate::core::kind::ModelKind;
use crate::core::model::{AdditionalProperties, Model};
use crate::models::data_source::JsonApiDataSourceIdentifierOutWithLinks;
use crate::models::links::{ListLinks, ObjectLinks};

/// Single-resource document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonApiDataSourceIdentifierOutDocument {
    pub data: JsonApiDataSourceIdentifierOutWithLinks,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ObjectLinks>,

    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Paging state of a collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Zero-based page index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,

    /// Page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_elements: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u64>,
}

/// Collection metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonApiDataSourceIdentifierOutListMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageMetadata>,

    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// A page of data source identifiers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonApiDataSourceIdentifierOutList {
    pub data: Vec<JsonApiDataSourceIdentifierOutWithLinks>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ListLinks>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<JsonApiDataSourceIdentifierOutListMeta>,

    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for JsonApiDataSourceIdentifierOutList {
    const KIND: ModelKind = ModelKind::DataSourceIdentifierList;
    const FIELDS: &'static [&'static str] = &["data", "links", "meta"];

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

impl JsonApiDataSourceIdentifierOutList {
    pub fn new(data: Vec<JsonApiDataSourceIdentifierOutWithLinks>) -> Self {
        Self {
            data,
            ..Default::default()
        }
    }

    /// Whether the server advertised a further page
    pub fn has_next(&self) -> bool {
        self.links.as_ref().is_some_and(|l| l.next.is_some())
    }

    /// Paging state, if present
    pub fn page(&self) -> Option<&PageMetadata> {
        self.meta.as_ref().and_then(|m| m.page.as_ref())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JsonApiDataSourceIdentifierOutWithLinks> {
        self.data.iter()
    }
}

impl<'a> IntoIterator for &'a JsonApiDataSourceIdentifierOutList {
    type Item = &'a JsonApiDataSourceIdentifierOutWithLinks;
    type IntoIter = std::slice::Iter<'a, JsonApiDataSourceIdentifierOutWithLinks>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::data_source::DataSourceType;
    use serde_json::json;

    #[test]
    fn test_list_with_paging() {
        let value = json!({
            "data": [{
                "id": "demo-pg",
                "type": "dataSourceIdentifier",
                "attributes": {"name": "Demo", "schema": "demo", "type": "POSTGRESQL"},
                "links": {"self": "https://example.com/ds/demo-pg"}
            }],
            "links": {
                "self": "https://example.com/ds?page=0",
                "next": "https://example.com/ds?page=1"
            },
            "meta": {"page": {"number": 0, "size": 1, "totalElements": 2, "totalPages": 2}}
        });

        let list = JsonApiDataSourceIdentifierOutList::from_value(value.clone()).unwrap();
        assert_eq!(list.len(), 1);
        assert!(list.has_next());
        assert_eq!(list.page().unwrap().total_elements, Some(2));
        assert_eq!(
            list.iter().next().unwrap().attributes.data_source_type,
            DataSourceType::Postgresql
        );
        assert_eq!(list.to_value().unwrap(), value);
    }

    #[test]
    fn test_last_page_has_no_next() {
        let list = JsonApiDataSourceIdentifierOutList::from_value(json!({
            "data": [],
            "links": {"self": "https://example.com/ds?page=1"}
        }))
        .unwrap();
        assert!(list.is_empty());
        assert!(!list.has_next());
        assert!(list.page().is_none());
    }

    #[test]
    fn test_single_document() {
        let doc: JsonApiDataSourceIdentifierOutDocument = serde_json::from_value(json!({
            "data": {
                "id": "bq",
                "type": "dataSourceIdentifier",
                "attributes": {"name": "Warehouse", "schema": "sales", "type": "BIGQUERY"}
            },
            "links": {"self": "https://example.com/ds/bq"},
            "included": []
        }))
        .unwrap();
        assert_eq!(doc.data.id, "bq");
        assert!(doc.additional_properties.contains_key("included"));
    }
}
