//! Services sub-client.

use crate::domain::service::wire::*;
use crate::error::EcsmError;
use crate::pagination::{collect_all_pages, ListAllPolicy, PageData};
use crate::rest::RestClient;

/// Control verbs accepted by the batch control endpoints.
const CONTROL_ACTIONS: [&str; 6] = ["start", "stop", "restart", "pause", "unpause", "destroy"];

fn ensure_control_action(action: &str) -> Result<(), EcsmError> {
    if !CONTROL_ACTIONS.contains(&action) {
        return Err(EcsmError::Validation(format!(
            "invalid action '{}', must be one of [{}]",
            action,
            CONTROL_ACTIONS.join(", ")
        )));
    }
    Ok(())
}

/// Sub-client for the `service` resource.
pub struct Services<'a> {
    pub(crate) rest: &'a RestClient,
}

impl<'a> Services<'a> {
    /// Create a new service.
    pub async fn create(
        &self,
        service: &CreateServiceRequest,
    ) -> Result<ServiceCreateResponse, EcsmError> {
        self.rest
            .post()
            .resource("service")
            .body(service)
            .send()
            .await?
            .decode()
    }

    /// Get a service by id.
    pub async fn get(&self, service_id: &str) -> Result<ServiceGet, EcsmError> {
        self.rest
            .get()
            .resource("service")
            .name(service_id)
            .send()
            .await?
            .decode()
    }

    /// List one page of services.
    pub async fn list(&self, opts: ListServicesOptions) -> Result<ServiceList, EcsmError> {
        let mut req = self
            .rest
            .get()
            .resource("service")
            .param("pageNum", opts.page.page_num)
            .param("pageSize", opts.page.page_size);

        if let Some(name) = &opts.name {
            req = req.param("name", name);
        }
        if let Some(image_id) = &opts.image_id {
            req = req.param("id", image_id);
        }
        if let Some(node_id) = &opts.node_id {
            req = req.param("nodeId", node_id);
        }
        if let Some(label) = &opts.label {
            req = req.param("label", label);
        }

        req.send().await?.decode()
    }

    /// List every service matching `opts`, walking all pages.
    pub async fn list_all(
        &self,
        opts: ListServicesOptions,
    ) -> Result<Vec<ServiceSummary>, EcsmError> {
        collect_all_pages(opts.page.page_size, ListAllPolicy::TotalCount, |page| {
            let mut opts = opts.clone();
            opts.page = page;
            async move { self.list(opts).await.map(PageData::from) }
        })
        .await
    }

    /// Update an existing service. The path-level id must match the id
    /// carried in the body; a mismatch fails before any network call.
    pub async fn update(
        &self,
        service_id: &str,
        service: &UpdateServiceRequest,
    ) -> Result<ServiceCreateResponse, EcsmError> {
        if service_id != service.id {
            return Err(EcsmError::Validation(format!(
                "service id in path ('{}') does not match service id in body ('{}')",
                service_id, service.id
            )));
        }

        self.rest
            .put()
            .resource("service")
            .body(service)
            .send()
            .await?
            .decode()
    }

    /// Delete a service by id.
    pub async fn delete(&self, service_id: &str) -> Result<ServiceDeleteResponse, EcsmError> {
        self.rest
            .delete()
            .resource("service")
            .name(service_id)
            .send()
            .await?
            .decode()
    }

    /// Batch-create services from the templates under a path label.
    pub async fn create_by_path(
        &self,
        opts: CreateByPathOptions,
    ) -> Result<Vec<ServiceCreateResponse>, EcsmError> {
        if opts.action != "run" && opts.action != "load" {
            return Err(EcsmError::Validation(format!(
                "invalid action '{}', must be 'run' or 'load'",
                opts.action
            )));
        }

        self.rest
            .post()
            .resource("service")
            .subresource(&opts.action)
            .subresource("templates-path-label")
            .body(&opts)
            .send()
            .await?
            .decode()
    }

    /// Batch-delete every service under a path label.
    pub async fn delete_by_path(&self, path: &str) -> Result<Vec<DeleteByPathResult>, EcsmError> {
        let body = serde_json::json!({ "path": path });

        self.rest
            .delete()
            .resource("service/path")
            .body(&body)
            .send()
            .await?
            .decode()
    }

    /// Apply a control verb (start/stop/restart/pause/unpause/destroy) to a
    /// set of services addressed by id.
    pub async fn control_by_id(
        &self,
        service_ids: &[String],
        action: &str,
    ) -> Result<ControlServicesResponse, EcsmError> {
        ensure_control_action(action)?;

        let body = ControlServicesResponse {
            ids: service_ids.to_vec(),
        };

        self.rest
            .post()
            .resource("service")
            .subresource(action)
            .subresource("ids")
            .body(&body)
            .send()
            .await?
            .decode()
    }

    /// Apply a control verb to every service under a path label.
    pub async fn control_by_label(
        &self,
        path: &str,
        action: &str,
    ) -> Result<ControlServicesResponse, EcsmError> {
        ensure_control_action(action)?;

        let body = serde_json::json!({ "path": path });

        self.rest
            .post()
            .resource("service")
            .subresource(action)
            .subresource("path-label")
            .body(&body)
            .send()
            .await?
            .decode()
    }

    /// Trigger a redeployment. Success carries no payload.
    pub async fn redeploy(&self, service_id: &str) -> Result<(), EcsmError> {
        let body = RedeployRequest {
            id: service_id.to_string(),
        };

        self.rest
            .put()
            .resource("service/deployment/restart")
            .body(&body)
            .send()
            .await?
            .discard()
    }

    /// Check whether a service name is available. The server answers
    /// "does this name exist"; existence is inverted into invalidity here.
    pub async fn validate_name(
        &self,
        opts: &ValidateNameOptions,
    ) -> Result<ValidationOutcome, EcsmError> {
        let mut req = self
            .rest
            .get()
            .resource("service/name/check")
            .param("name", &opts.name);
        if let Some(id) = &opts.id {
            req = req.param("id", id);
        }

        let name_exists: bool = req.send().await?.decode()?;

        Ok(ValidationOutcome {
            is_valid: !name_exists,
            message: name_exists
                .then(|| format!("service name '{}' already exists", opts.name)),
        })
    }

    /// Roll a service back to a previous deployment record.
    pub async fn rollback(&self, req: &RollbackRequest) -> Result<Transaction, EcsmError> {
        self.rest
            .put()
            .resource("service")
            .subresource("rollback")
            .body(req)
            .send()
            .await?
            .decode()
    }

    /// Cluster-wide service statistics.
    pub async fn statistics(&self) -> Result<ServiceStatistics, EcsmError> {
        self.rest
            .get()
            .resource("service/summary")
            .send()
            .await?
            .decode()
    }
}
