//! Data source identifier resource - the public identity of a data source

use serde::{Deserialize, Serialize};

use crate::core::kind::ModelKind;
use crate::core::model::{AdditionalProperties, Model};
use crate::models::links::ObjectLinks;

/// Database engine behind a data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataSourceType {
    Postgresql,
    Redshift,
    Vertica,
    Snowflake,
    Ads,
    Bigquery,
    Mssql,
    Presto,
    Dremio,
    Drill,
    Greenplum,
    Azuresql,
    Synapse,
    Databricks,
    Gdstorage,
    Clickhouse,
    Mysql,
    Mariadb,
    Oracle,
    Pinot,
    Singlestore,
    Motherduck,
    Flexconnect,
    Starrocks,
    Athena,
    Mongodb,
}

impl DataSourceType {
    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSourceType::Postgresql => "POSTGRESQL",
            DataSourceType::Redshift => "REDSHIFT",
            DataSourceType::Vertica => "VERTICA",
            DataSourceType::Snowflake => "SNOWFLAKE",
            DataSourceType::Ads => "ADS",
            DataSourceType::Bigquery => "BIGQUERY",
            DataSourceType::Mssql => "MSSQL",
            DataSourceType::Presto => "PRESTO",
            DataSourceType::Dremio => "DREMIO",
            DataSourceType::Drill => "DRILL",
            DataSourceType::Greenplum => "GREENPLUM",
            DataSourceType::Azuresql => "AZURESQL",
            DataSourceType::Synapse => "SYNAPSE",
            DataSourceType::Databricks => "DATABRICKS",
            DataSourceType::Gdstorage => "GDSTORAGE",
            DataSourceType::Clickhouse => "CLICKHOUSE",
            DataSourceType::Mysql => "MYSQL",
            DataSourceType::Mariadb => "MARIADB",
            DataSourceType::Oracle => "ORACLE",
            DataSourceType::Pinot => "PINOT",
            DataSourceType::Singlestore => "SINGLESTORE",
            DataSourceType::Motherduck => "MOTHERDUCK",
            DataSourceType::Flexconnect => "FLEXCONNECT",
            DataSourceType::Starrocks => "STARROCKS",
            DataSourceType::Athena => "ATHENA",
            DataSourceType::Mongodb => "MONGODB",
        }
    }
}

impl std::fmt::Display for DataSourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Permission the caller holds on a data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataSourcePermission {
    Manage,
    Use,
}

/// The fixed resource type tag; any other value fails to deserialize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DataSourceIdentifierTag {
    #[default]
    #[serde(rename = "dataSourceIdentifier")]
    DataSourceIdentifier,
}

/// Attributes of a data source identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonApiDataSourceIdentifierOutAttributes {
    /// Display name
    pub name: String,

    /// Database schema the data source reads from
    pub schema: String,

    /// Database engine
    #[serde(rename = "type")]
    pub data_source_type: DataSourceType,

    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl JsonApiDataSourceIdentifierOutAttributes {
    pub fn new(
        name: impl Into<String>,
        schema: impl Into<String>,
        data_source_type: DataSourceType,
    ) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
            data_source_type,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// Resource metadata returned alongside a data source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonApiDataSourceOutMeta {
    /// Permissions of the current user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<DataSourcePermission>>,

    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl JsonApiDataSourceOutMeta {
    pub fn with_permissions(permissions: impl IntoIterator<Item = DataSourcePermission>) -> Self {
        Self {
            permissions: Some(permissions.into_iter().collect()),
            additional_properties: AdditionalProperties::new(),
        }
    }

    pub fn has_permission(&self, permission: DataSourcePermission) -> bool {
        self.permissions
            .as_deref()
            .is_some_and(|perms| perms.contains(&permission))
    }
}

/// A data source identifier resource with links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonApiDataSourceIdentifierOutWithLinks {
    /// API identifier of an object
    pub id: String,

    pub attributes: JsonApiDataSourceIdentifierOutAttributes,

    /// Object type, always `dataSourceIdentifier`
    #[serde(rename = "type")]
    pub resource_type: DataSourceIdentifierTag,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<JsonApiDataSourceOutMeta>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ObjectLinks>,

    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Model for JsonApiDataSourceIdentifierOutWithLinks {
    const KIND: ModelKind = ModelKind::DataSourceIdentifier;
    const FIELDS: &'static [&'static str] = &["id", "attributes", "type", "meta", "links"];

    fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional_properties
    }
}

impl JsonApiDataSourceIdentifierOutWithLinks {
    /// Create an identifier from its required fields
    pub fn new(id: impl Into<String>, attributes: JsonApiDataSourceIdentifierOutAttributes) -> Self {
        Self {
            id: id.into(),
            attributes,
            resource_type: DataSourceIdentifierTag::default(),
            meta: None,
            links: None,
            additional_properties: AdditionalProperties::new(),
        }
    }

    pub fn with_meta(mut self, meta: JsonApiDataSourceOutMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn with_links(mut self, links: ObjectLinks) -> Self {
        self.links = Some(links);
        self
    }

    /// Wire value of the `type` member
    pub fn type_name(&self) -> &'static str {
        crate::core::kind::DATA_SOURCE_IDENTIFIER_TYPE
    }

    /// Link to this resource, if the server returned one
    pub fn self_link(&self) -> Option<&str> {
        self.links.as_ref().map(|l| l.self_link.as_str())
    }

    /// Whether the caller may manage this data source
    pub fn can_manage(&self) -> bool {
        self.meta
            .as_ref()
            .is_some_and(|m| m.has_permission(DataSourcePermission::Manage))
    }

    /// Whether the caller may use this data source (implied by manage)
    pub fn can_use(&self) -> bool {
        self.can_manage()
            || self
                .meta
                .as_ref()
                .is_some_and(|m| m.has_permission(DataSourcePermission::Use))
    }
}
