//! Wire types for the `node` resource.

use serde::{Deserialize, Serialize};

use crate::pagination::{PageQuery, Paged};

/// Detail view of a cluster node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NodeGet {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_count: Option<i64>,
    #[serde(default)]
    pub created_time: String,
}

/// Paginated node listing.
pub type NodeList = Paged<NodeGet>;

/// Query options for listing nodes. Filters are sent only when set.
#[derive(Debug, Clone, Default)]
pub struct ListNodesOptions {
    pub page: PageQuery,
    pub name: Option<String>,
    pub status: Option<String>,
}
