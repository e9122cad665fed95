//! Typed API records

pub mod data_source;
pub mod links;
pub mod list;
pub mod status_type;

pub use data_source::{
    DataSourceIdentifierTag, DataSourcePermission, DataSourceType,
    JsonApiDataSourceIdentifierOutAttributes, JsonApiDataSourceIdentifierOutWithLinks,
    JsonApiDataSourceOutMeta,
};
pub use links::{ListLinks, ObjectLinks};
pub use list::{
    JsonApiDataSourceIdentifierOutDocument, JsonApiDataSourceIdentifierOutList,
    JsonApiDataSourceIdentifierOutListMeta, PageMetadata,
};
pub use status_type::{canonical_reason, StatusType};
