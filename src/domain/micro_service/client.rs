//! MicroServices sub-client.

use crate::domain::micro_service::wire::*;
use crate::error::EcsmError;
use crate::pagination::{collect_all_pages, ListAllPolicy, PageData};
use crate::rest::RestClient;

/// A `loadBalanceDetail` list is meaningful only under the `"masterSlave"`
/// strategy, and mandatory there. Both directions are rejected locally.
fn ensure_load_balance_consistent(
    load_balance: &str,
    detail: &[LoadBalanceDetail],
) -> Result<(), EcsmError> {
    if load_balance != LOAD_BALANCE_MASTER_SLAVE && !detail.is_empty() {
        return Err(EcsmError::Validation(format!(
            "loadBalanceDetail can only be set when loadBalance strategy is '{}', but the strategy was '{}'",
            LOAD_BALANCE_MASTER_SLAVE, load_balance
        )));
    }
    if load_balance == LOAD_BALANCE_MASTER_SLAVE && detail.is_empty() {
        return Err(EcsmError::Validation(format!(
            "loadBalanceDetail must be provided when loadBalance strategy is '{}'",
            LOAD_BALANCE_MASTER_SLAVE
        )));
    }
    Ok(())
}

/// Sub-client for the `micro-service` resource.
pub struct MicroServices<'a> {
    pub(crate) rest: &'a RestClient,
}

impl<'a> MicroServices<'a> {
    /// List one page of microservices.
    pub async fn list(
        &self,
        opts: ListMicroServicesOptions,
    ) -> Result<MicroServiceList, EcsmError> {
        let mut req = self
            .rest
            .get()
            .resource("micro-service")
            .param("pageNum", opts.page.page_num)
            .param("pageSize", opts.page.page_size);

        if let Some(keyword) = &opts.keyword {
            req = req.param("name", keyword);
        }
        if let Some(image_id) = opts.image_id {
            req = req.param("projectId", image_id);
        }
        if let Some(node_id) = &opts.node_id {
            req = req.param("nodeId", node_id);
        }
        if let Some(label) = &opts.label {
            req = req.param("label", label);
        }

        req.send().await?.decode()
    }

    /// List every microservice matching `opts`, walking all pages.
    pub async fn list_all(
        &self,
        opts: ListMicroServicesOptions,
    ) -> Result<Vec<MicroServiceSummary>, EcsmError> {
        collect_all_pages(opts.page.page_size, ListAllPolicy::TotalCount, |page| {
            let mut opts = opts.clone();
            opts.page = page;
            async move { self.list(opts).await.map(PageData::from) }
        })
        .await
    }

    /// Get a microservice by id.
    pub async fn get(&self, micro_service_id: &str) -> Result<MicroServiceGet, EcsmError> {
        self.rest
            .get()
            .resource("micro-service")
            .name(micro_service_id)
            .send()
            .await?
            .decode()
    }

    /// Update a microservice's load-balance strategy. The strategy/detail
    /// invariant is enforced before anything is sent.
    pub async fn update(&self, micro_service: &UpdateMicroServiceRequest) -> Result<(), EcsmError> {
        ensure_load_balance_consistent(
            &micro_service.load_balance,
            &micro_service.load_balance_detail,
        )?;

        self.rest
            .put()
            .resource("micro-service")
            .body(micro_service)
            .send()
            .await?
            .discard()
    }
}
