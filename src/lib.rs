//! # ECSM Client
//!
//! A typed Rust client for the ECSM orchestration platform's REST API.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Error types, endpoint assembly, pagination machinery
//! 2. **REST** — `RestClient` with a fluent per-request builder
//! 3. **Domain** — Vertical slices per resource: wire types + sub-client
//! 4. **High-Level Client** — `EcsmClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ecsm_client::prelude::*;
//!
//! let client = EcsmClient::new("http", "192.168.31.129", "3001")?;
//!
//! let services = client.services().list_all(Default::default()).await?;
//! let node = client.nodes().get("node-id").await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Unified client error type.
pub mod error;

/// Endpoint assembly and transport constants.
pub mod network;

/// Paged envelopes and the exhaustive list-all driver.
pub mod pagination;

// ── Layer 2: REST ────────────────────────────────────────────────────────────

/// Low-level REST transport: client, request builder, response envelope.
pub mod rest;

// ── Layer 3: Domain ──────────────────────────────────────────────────────────

/// Resource families (vertical slices): wire types and sub-clients.
pub mod domain;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `EcsmClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Errors
    pub use crate::error::EcsmError;

    // Network
    pub use crate::network::{Endpoint, API_PREFIX};

    // Pagination
    pub use crate::pagination::{ListAllPolicy, PageQuery, Paged, DEFAULT_PAGE_SIZE};

    // REST transport
    pub use crate::rest::{Request, Response, RestClient, Verb};

    // Domain — services
    pub use crate::domain::service::{
        CreateByPathOptions, CreateServiceRequest, ListServicesOptions, RollbackRequest,
        ServiceGet, ServiceList, ServiceStatistics, ServiceSummary, Services,
        UpdateServiceRequest, ValidateNameOptions, ValidationOutcome,
    };

    // Domain — micro-services
    pub use crate::domain::micro_service::{
        ListMicroServicesOptions, LoadBalanceDetail, MicroServiceGet, MicroServiceList,
        MicroServiceSummary, MicroServices, UpdateMicroServiceRequest,
    };

    // Domain — deployment records
    pub use crate::domain::record::{DeployRecord, ListRecordsOptions, RecordGet, RecordList, Records};

    // Domain — containers
    pub use crate::domain::container::{ContainerInfo, ContainerList, Containers, ListContainersOptions};

    // Domain — nodes
    pub use crate::domain::node::{ListNodesOptions, NodeGet, NodeList, Nodes};

    // Domain — config entries
    pub use crate::domain::config::{
        ConfigItem, ConfigKind, Configs, CreateConfigRequest, ListConfigsOptions,
    };

    // Domain — provisioning templates
    pub use crate::domain::template::{
        CreateDirectoryRequest, CreateTemplateRequest, GetTemplateTreeOptions, MoveRequest,
        SearchTemplateOptions, TemplateGet, TemplateTree, Templates, UpdateTemplateRequest,
        UpdateTemplatesBatchRequest,
    };

    // High-level client
    pub use crate::client::{EcsmClient, EcsmClientBuilder};
}
