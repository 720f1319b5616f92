//! Nodes sub-client.

use crate::domain::node::wire::*;
use crate::error::EcsmError;
use crate::pagination::{collect_all_pages, ListAllPolicy, PageData};
use crate::rest::RestClient;

/// Sub-client for the `node` resource.
pub struct Nodes<'a> {
    pub(crate) rest: &'a RestClient,
}

impl<'a> Nodes<'a> {
    /// Get a node by id.
    pub async fn get(&self, node_id: &str) -> Result<NodeGet, EcsmError> {
        self.rest
            .get()
            .resource("node")
            .name(node_id)
            .send()
            .await?
            .decode()
    }

    /// List one page of nodes.
    pub async fn list(&self, opts: ListNodesOptions) -> Result<NodeList, EcsmError> {
        let mut req = self
            .rest
            .get()
            .resource("node")
            .param("pageNum", opts.page.page_num)
            .param("pageSize", opts.page.page_size);

        if let Some(name) = &opts.name {
            req = req.param("name", name);
        }
        if let Some(status) = &opts.status {
            req = req.param("status", status);
        }

        req.send().await?.decode()
    }

    /// List every node matching `opts`, walking all pages.
    pub async fn list_all(&self, opts: ListNodesOptions) -> Result<Vec<NodeGet>, EcsmError> {
        collect_all_pages(opts.page.page_size, ListAllPolicy::TotalCount, |page| {
            let mut opts = opts.clone();
            opts.page = page;
            async move { self.list(opts).await.map(PageData::from) }
        })
        .await
    }
}
