//! Records sub-client.

use crate::domain::record::wire::*;
use crate::error::EcsmError;
use crate::pagination::{collect_all_pages, ListAllPolicy, PageData};
use crate::rest::RestClient;

/// Sub-client for the `service/record` resource.
pub struct Records<'a> {
    pub(crate) rest: &'a RestClient,
}

impl<'a> Records<'a> {
    /// Get a deployment record by id.
    pub async fn get(&self, record_id: &str) -> Result<RecordGet, EcsmError> {
        self.rest
            .get()
            .resource("service/record")
            .name(record_id)
            .send()
            .await?
            .decode()
    }

    /// Delete a deployment record by id. The record is addressed through a
    /// query parameter, not a path segment, and success carries no payload.
    pub async fn delete(&self, record_id: &str) -> Result<(), EcsmError> {
        self.rest
            .delete()
            .resource("service/record")
            .param("id", record_id)
            .send()
            .await?
            .discard()
    }

    /// List one page of deployment records for a service.
    pub async fn list(&self, opts: ListRecordsOptions) -> Result<RecordList, EcsmError> {
        self.rest
            .get()
            .resource("service/record")
            .param("id", &opts.service_id)
            .param("pageNum", opts.page.page_num)
            .param("pageSize", opts.page.page_size)
            .send()
            .await?
            .decode()
    }

    /// List every deployment record of a service, walking all pages.
    pub async fn list_all(&self, opts: ListRecordsOptions) -> Result<Vec<DeployRecord>, EcsmError> {
        collect_all_pages(opts.page.page_size, ListAllPolicy::TotalCount, |page| {
            let mut opts = opts.clone();
            opts.page = page;
            async move { self.list(opts).await.map(PageData::from) }
        })
        .await
    }
}
