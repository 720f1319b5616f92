//! Configs sub-client.

use crate::domain::config::wire::*;
use crate::error::EcsmError;
use crate::pagination::{collect_all_pages, ListAllPolicy, PageData};
use crate::rest::RestClient;

/// Sub-client for the `configmap` resource.
pub struct Configs<'a> {
    pub(crate) rest: &'a RestClient,
}

impl<'a> Configs<'a> {
    /// Create a config item. The value's runtime shape is checked against
    /// the declared kind before anything is sent.
    pub async fn create(&self, config: &CreateConfigRequest) -> Result<(), EcsmError> {
        ensure_value_matches(config.kind, &config.value)?;

        self.rest
            .post()
            .resource("configmap")
            .body(config)
            .send()
            .await?
            .discard()
    }

    /// Update a config item, with the same value/kind check as `create`.
    pub async fn update(&self, config: &ConfigItem) -> Result<(), EcsmError> {
        ensure_value_matches(config.kind, &config.value)?;

        self.rest
            .put()
            .resource("configmap")
            .body(config)
            .send()
            .await?
            .discard()
    }

    /// Delete a config item by id.
    pub async fn delete(&self, config_id: &str) -> Result<(), EcsmError> {
        self.rest
            .delete()
            .resource("configmap")
            .name(config_id)
            .send()
            .await?
            .discard()
    }

    /// Look up a config value by key. The value's shape depends on the
    /// item's declared kind, so it is returned as raw JSON.
    pub async fn get(&self, key: &str) -> Result<serde_json::Value, EcsmError> {
        self.rest
            .get()
            .resource("configmap/key")
            .param("key", key)
            .send()
            .await?
            .decode()
    }

    /// List one page of config items. This endpoint returns a bare array,
    /// not a paged envelope.
    pub async fn list(&self, opts: ListConfigsOptions) -> Result<Vec<ConfigItem>, EcsmError> {
        let mut req = self
            .rest
            .get()
            .resource("configmap")
            .param("pageNum", opts.page.page_num)
            .param("pageSize", opts.page.page_size);

        if let Some(key) = &opts.key {
            req = req.param("key", key);
        }

        req.send().await?.decode()
    }

    /// List every config item, walking all pages. Because the list endpoint
    /// reports no total, exhaustion is detected by a short page.
    pub async fn list_all(&self, opts: ListConfigsOptions) -> Result<Vec<ConfigItem>, EcsmError> {
        collect_all_pages(opts.page.page_size, ListAllPolicy::ShortPage, |page| {
            let mut opts = opts.clone();
            opts.page = page;
            async move {
                let items = self.list(opts).await?;
                Ok(PageData { items, total: 0 })
            }
        })
        .await
    }
}
