//! Wire types for the `service/record` resource.

use serde::{Deserialize, Serialize};

use crate::domain::common::{EcsImageConfig, ImageInfo, ImageVsoa, NodeInfo, NodeSpec};
use crate::pagination::{PageQuery, Paged};

/// Detail view of one deployment record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordGet {
    pub name: String,
    pub image: ImageInfo,
    #[serde(default)]
    pub node: NodeInfo,
    #[serde(default)]
    pub action: String,
    /// `"dynamic"` or `"static"`.
    #[serde(default)]
    pub policy: String,
    /// Instance count under the `"dynamic"` policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<i32>,
    #[serde(default)]
    pub cmd: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vsoa: Option<ImageVsoa>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<EcsImageConfig>,
    #[serde(default)]
    pub created_time: String,
}

/// One row of a deployment record listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeployRecord {
    pub id: String,
    pub name: String,
    /// Container launch arguments.
    #[serde(default)]
    pub cmd: String,
    #[serde(default)]
    pub created_time: String,
    #[serde(default)]
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<NodeSpec>,
}

/// Paginated deployment record listing.
pub type RecordList = Paged<DeployRecord>;

/// Query options for listing the deployment records of one service.
#[derive(Debug, Clone, Default)]
pub struct ListRecordsOptions {
    pub page: PageQuery,
    /// Owning service id; the API calls this query parameter `id`.
    pub service_id: String,
}
