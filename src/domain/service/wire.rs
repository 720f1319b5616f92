//! Wire types for the `service` resource.

use serde::{Deserialize, Serialize};

use crate::domain::common::{EcsImageConfig, ImageInfo, ImageVsoa, NodeInfo, NodeSpec};
use crate::pagination::{PageQuery, Paged};

// ─── Create / Update requests ───────────────────────────────────────────────

/// Payload for creating a service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    pub name: String,
    pub image: ImageSpec,
    pub node: NodeSpec,
    /// Instance count under the `"dynamic"` deployment policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<i32>,
    /// `"dynamic"` or `"static"`.
    pub policy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepull: Option<bool>,
}

/// Image section of a create/update payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageSpec {
    /// Image reference in `name@tag#os` form.
    #[serde(rename = "ref")]
    pub image_ref: String,
    /// Deployment behavior: `"run"` or `"load"`.
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<EcsImageConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vsoa: Option<ImageVsoa>,
}

/// Payload for updating a service. Carries the service id in the body; the
/// client checks it against the path-level id before sending.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<NodeSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepull: Option<bool>,
}

// ─── Responses ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceCreateResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceDeleteResponse {
    pub id: String,
}

/// Detail view of a single service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceGet {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub policy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<NodeInfo>,
    #[serde(default)]
    pub created_time: String,
    #[serde(default)]
    pub updated_time: String,
}

/// One row of a service listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_instance: Option<i64>,
    #[serde(default)]
    pub created_time: String,
    #[serde(default)]
    pub updated_time: String,
}

/// Paginated service listing.
pub type ServiceList = Paged<ServiceSummary>;

// ─── List options ───────────────────────────────────────────────────────────

/// Query options for listing services. Filters are sent only when set.
#[derive(Debug, Clone, Default)]
pub struct ListServicesOptions {
    pub page: PageQuery,
    pub name: Option<String>,
    /// Image id; the API calls this query parameter `id`.
    pub image_id: Option<String>,
    pub node_id: Option<String>,
    pub label: Option<String>,
}

// ─── Batch operations ───────────────────────────────────────────────────────

/// Options for batch-creating services from templates under a path label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateByPathOptions {
    /// Deployment behavior, `"run"` or `"load"`. Addressed through the URL,
    /// never serialized into the body.
    #[serde(skip)]
    pub action: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteByPathResult {
    pub id: String,
    #[serde(default)]
    pub result: bool,
    #[serde(default)]
    pub message: String,
}

/// Request and response body for batch control by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ControlServicesResponse {
    #[serde(default)]
    pub ids: Vec<String>,
}

// ─── Actions ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RedeployRequest {
    pub id: String,
}

/// Query options for checking name availability.
#[derive(Debug, Clone, Default)]
pub struct ValidateNameOptions {
    pub name: String,
    /// Existing service id to exclude from the check (when renaming).
    pub id: Option<String>,
}

/// Client-side view of a name check: existence on the server is inverted
/// into validity for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    /// Human-readable reason, present only when the name is invalid.
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RollbackRequest {
    pub service_id: String,
    pub record_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: String,
    #[serde(default)]
    pub status: String,
}

// ─── Statistics ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceStatistics {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub running: i64,
    #[serde(default)]
    pub stopped: i64,
    #[serde(default)]
    pub abnormal: i64,
}
