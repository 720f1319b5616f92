//! Wire types for the `micro-service` resource.

use serde::{Deserialize, Serialize};

use crate::pagination::{PageQuery, Paged};

/// Load-balance strategy that requires a master/backup detail list.
pub const LOAD_BALANCE_MASTER_SLAVE: &str = "masterSlave";

/// Query options for listing microservices. Filters are sent only when set.
#[derive(Debug, Clone, Default)]
pub struct ListMicroServicesOptions {
    pub page: PageQuery,
    /// Fuzzy name match; the API calls this query parameter `name`.
    pub keyword: Option<String>,
    /// Image id; the API calls this query parameter `projectId`.
    pub image_id: Option<i64>,
    pub node_id: Option<String>,
    pub label: Option<String>,
}

/// One row of a microservice listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MicroServiceSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_name: String,
    #[serde(default)]
    pub health_instance: i64,
    #[serde(default)]
    pub instance: i64,
    /// `"roundRobin"` or `"masterSlave"`.
    #[serde(default)]
    pub load_balance: String,
}

/// Paginated microservice listing.
pub type MicroServiceList = Paged<MicroServiceSummary>;

/// Detail view of a single microservice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MicroServiceGet {
    #[serde(rename = "boDynamic", default)]
    pub bo_dynamic: bool,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_name: String,
    #[serde(default)]
    pub health_instance: i64,
    #[serde(default)]
    pub instance: i64,
    #[serde(default)]
    pub load_balance: String,
    /// Present only under the `"masterSlave"` strategy.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub load_balance_detail: Vec<LoadBalanceDetail>,
}

/// One master/backup pairing of a `"masterSlave"` strategy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadBalanceDetail {
    pub master: String,
    /// Backup node task id; the wire name is `id`.
    #[serde(rename = "id")]
    pub task_id: String,
}

/// Payload for updating a microservice's load-balance strategy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMicroServiceRequest {
    pub id: String,
    pub load_balance: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub load_balance_detail: Vec<LoadBalanceDetail>,
}
