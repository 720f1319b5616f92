//! Wire types for the `container` resource.

use serde::{Deserialize, Serialize};

use crate::pagination::{PageQuery, Paged};

/// One container instance as reported by listings and microservice detail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContainerInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(default)]
    pub created_time: String,
}

/// Paginated container listing.
pub type ContainerList = Paged<ContainerInfo>;

/// Query options for listing containers. Filters are sent only when set.
#[derive(Debug, Clone, Default)]
pub struct ListContainersOptions {
    pub page: PageQuery,
    pub name: Option<String>,
    pub service_id: Option<String>,
    pub node_id: Option<String>,
}
