//! Wire types for the `provision-template` resource.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::common::{EcsImageConfig, ImageVsoa, NodeSpec};

// ─── Create ─────────────────────────────────────────────────────────────────

/// Batch-create templates from image references under a path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplateRequest {
    pub image_refs: Vec<String>,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplateResponse {
    #[serde(rename = "provisionTmplList", default)]
    pub templates: Vec<TemplateRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateRow {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateDirectoryRequest {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateDirectoryResponse {
    pub id: String,
    pub path: String,
}

// ─── Move ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoveRequest {
    pub src: String,
    pub dst: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoveResponse {
    pub id: String,
}

// ─── Update ─────────────────────────────────────────────────────────────────

/// Template content for a single-template update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TemplateSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<TemplateImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<NodeSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<i32>,
    /// `"dynamic"` or `"static"`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub policy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepull: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateImage {
    #[serde(rename = "ref")]
    pub image_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<EcsImageConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vsoa: Option<ImageVsoa>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pull_policy: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateTemplateRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<TemplateSpec>,
    /// Optional global deployment behavior: `"run"` or `"load"`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTemplateResult {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_result: Option<DeployResult>,
}

/// Batch update addressed by id or by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTemplatesBatchRequest {
    pub templates: Vec<TemplateBatchEntry>,
    /// Optional global deployment behavior: `"run"` or `"load"`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub action: String,
}

/// One entry of a batch update. `id` is required when updating by id,
/// `name` when updating by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateBatchEntry {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// New image reference in `name@tag#os` form.
    pub image_ref: String,
    /// Per-entry deployment behavior, overriding the global one.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTemplateBatchResult {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub result: bool,
    #[serde(default)]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_result: Option<DeployResult>,
}

/// Outcome of a deployment triggered by a template update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeployResult {
    #[serde(rename = "provisionTmpld", default)]
    pub provision_tmpl_id: String,
    /// `"failed"`, `"created"` or `"updated"`.
    pub result: String,
    /// Id of the created service, when one was created.
    pub provision_id: Option<String>,
    #[serde(default)]
    pub tasks: Vec<DeployTask>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeployTask {
    #[serde(rename = "id")]
    pub task_id: String,
}

// ─── Read ───────────────────────────────────────────────────────────────────

/// Query options for the template tree.
#[derive(Debug, Clone, Default)]
pub struct GetTemplateTreeOptions {
    pub path: String,
    /// Tree depth; 0 means the server default.
    pub level: u32,
    /// `"simple"` or `"full"`.
    pub model: Option<String>,
}

/// One node of the template tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateTree {
    pub name: String,
    #[serde(rename = "realpath", default)]
    pub real_path: String,
    #[serde(default)]
    pub child_count: i64,
    /// Populated only when `model=full` was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<TemplateDetail>,
    #[serde(default)]
    pub children: HashMap<String, TemplateTree>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDetail {
    pub id: String,
    pub name: String,
    /// `"folder"` or `"service"`.
    pub kind: String,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub node: NodeSpec,
    #[serde(default)]
    pub created_time: String,
    #[serde(default)]
    pub updated_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateGet {
    pub id: String,
    pub name: String,
    /// `"folder"` or `"service"`.
    pub kind: String,
    #[serde(default)]
    pub spec: TemplateSpec,
    #[serde(default)]
    pub created_time: String,
    #[serde(default)]
    pub updated_time: String,
}

/// Query options for searching templates and directories.
#[derive(Debug, Clone, Default)]
pub struct SearchTemplateOptions {
    pub key: Option<String>,
    pub path: Option<String>,
    /// `"folder"` or `"service"`.
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchTemplateResult {
    pub id: String,
    pub name: String,
    pub kind: String,
    #[serde(default)]
    pub hostname: String,
    #[serde(rename = "realpath", default)]
    pub real_path: String,
    #[serde(default)]
    pub node: NodeSpec,
    #[serde(default)]
    pub created_time: String,
    #[serde(default)]
    pub updated_time: String,
}

// ─── Delete ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteTemplateResult {
    pub id: String,
}

/// Bulk delete request and response; the wire field is `id` in both
/// directions, carrying the id list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteTemplatesResult {
    #[serde(rename = "id", default)]
    pub ids: Vec<String>,
}
