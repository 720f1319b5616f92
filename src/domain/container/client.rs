//! Containers sub-client.

use crate::domain::container::wire::*;
use crate::error::EcsmError;
use crate::pagination::{collect_all_pages, ListAllPolicy, PageData};
use crate::rest::RestClient;

/// Sub-client for the `container` resource.
pub struct Containers<'a> {
    pub(crate) rest: &'a RestClient,
}

impl<'a> Containers<'a> {
    /// Get a container by id.
    pub async fn get(&self, container_id: &str) -> Result<ContainerInfo, EcsmError> {
        self.rest
            .get()
            .resource("container")
            .name(container_id)
            .send()
            .await?
            .decode()
    }

    /// List one page of containers.
    pub async fn list(&self, opts: ListContainersOptions) -> Result<ContainerList, EcsmError> {
        let mut req = self
            .rest
            .get()
            .resource("container")
            .param("pageNum", opts.page.page_num)
            .param("pageSize", opts.page.page_size);

        if let Some(name) = &opts.name {
            req = req.param("name", name);
        }
        if let Some(service_id) = &opts.service_id {
            req = req.param("serviceId", service_id);
        }
        if let Some(node_id) = &opts.node_id {
            req = req.param("nodeId", node_id);
        }

        req.send().await?.decode()
    }

    /// List every container matching `opts`, walking all pages.
    pub async fn list_all(
        &self,
        opts: ListContainersOptions,
    ) -> Result<Vec<ContainerInfo>, EcsmError> {
        collect_all_pages(opts.page.page_size, ListAllPolicy::TotalCount, |page| {
            let mut opts = opts.clone();
            opts.page = page;
            async move { self.list(opts).await.map(PageData::from) }
        })
        .await
    }
}
