//! Templates sub-client.

use crate::domain::template::wire::*;
use crate::error::EcsmError;
use crate::rest::RestClient;

/// Sub-client for the `provision-template` resource.
pub struct Templates<'a> {
    pub(crate) rest: &'a RestClient,
}

impl<'a> Templates<'a> {
    /// Batch-create templates from image references under a path.
    pub async fn create_template(
        &self,
        template: &CreateTemplateRequest,
    ) -> Result<CreateTemplateResponse, EcsmError> {
        self.rest
            .post()
            .resource("provision-template/path-label/service/batch")
            .body(template)
            .send()
            .await?
            .decode()
    }

    /// Create a template directory.
    pub async fn create_directory(
        &self,
        directory: &CreateDirectoryRequest,
    ) -> Result<CreateDirectoryResponse, EcsmError> {
        self.rest
            .post()
            .resource("provision-template/path-label/folder")
            .body(directory)
            .send()
            .await?
            .decode()
    }

    /// Move a template or directory to a new path.
    pub async fn move_entry(&self, mv: &MoveRequest) -> Result<MoveResponse, EcsmError> {
        self.rest
            .put()
            .resource("provision-template/path-label/move")
            .body(mv)
            .send()
            .await?
            .decode()
    }

    /// Update a single template by id.
    pub async fn update_template(
        &self,
        template_id: &str,
        req: &UpdateTemplateRequest,
    ) -> Result<UpdateTemplateResult, EcsmError> {
        self.rest
            .put()
            .resource("provision-templates")
            .name(template_id)
            .body(req)
            .send()
            .await?
            .decode()
    }

    /// Batch-update templates addressed by id. Every entry must carry an id.
    pub async fn update_templates_by_id(
        &self,
        req: &UpdateTemplatesBatchRequest,
    ) -> Result<Vec<UpdateTemplateBatchResult>, EcsmError> {
        for (i, entry) in req.templates.iter().enumerate() {
            if entry.id.is_empty() {
                return Err(EcsmError::Validation(format!(
                    "template id is required for update-by-id at index {}",
                    i
                )));
            }
        }

        self.rest
            .put()
            .resource("provision-templates")
            .body(req)
            .send()
            .await?
            .decode()
    }

    /// Batch-update templates addressed by name. Every entry must carry a name.
    pub async fn update_templates_by_name(
        &self,
        req: &UpdateTemplatesBatchRequest,
    ) -> Result<Vec<UpdateTemplateBatchResult>, EcsmError> {
        for (i, entry) in req.templates.iter().enumerate() {
            if entry.name.is_empty() {
                return Err(EcsmError::Validation(format!(
                    "template name is required for update-by-name at index {}",
                    i
                )));
            }
        }

        self.rest
            .put()
            .resource("provision-templates/images")
            .body(req)
            .send()
            .await?
            .decode()
    }

    /// Get the template/directory tree under a path.
    pub async fn tree(&self, opts: GetTemplateTreeOptions) -> Result<TemplateTree, EcsmError> {
        let mut req = self
            .rest
            .get()
            .resource("provision-template/path-label/tree")
            .param("path", &opts.path);

        if opts.level > 0 {
            req = req.param("level", opts.level);
        }
        if let Some(model) = &opts.model {
            req = req.param("model", model);
        }

        req.send().await?.decode()
    }

    /// Get a template by id.
    pub async fn get_by_id(&self, template_id: &str) -> Result<TemplateGet, EcsmError> {
        self.rest
            .get()
            .resource("provision-template")
            .name(template_id)
            .send()
            .await?
            .decode()
    }

    /// Get a template by its path label.
    pub async fn get_by_path(&self, template_path: &str) -> Result<TemplateGet, EcsmError> {
        self.rest
            .get()
            .resource("provision-template/path-label")
            .param("path", template_path)
            .send()
            .await?
            .decode()
    }

    /// Search templates and directories under a path.
    pub async fn search(
        &self,
        opts: SearchTemplateOptions,
    ) -> Result<SearchTemplateResult, EcsmError> {
        let mut req = self
            .rest
            .get()
            .resource("provision-template/path-label/search");

        if let Some(key) = &opts.key {
            req = req.param("key", key);
        }
        if let Some(path) = &opts.path {
            req = req.param("path", path);
        }
        if let Some(kind) = &opts.kind {
            req = req.param("kind", kind);
        }

        req.send().await?.decode()
    }

    /// Delete a template or directory by path label.
    pub async fn delete_by_path(&self, path: &str) -> Result<DeleteTemplateResult, EcsmError> {
        let body = serde_json::json!({ "path": path });

        self.rest
            .delete()
            .resource("provision-template/path-label")
            .body(&body)
            .send()
            .await?
            .decode()
    }

    /// Delete a template or directory by id.
    pub async fn delete_by_id(&self, template_id: &str) -> Result<DeleteTemplateResult, EcsmError> {
        self.rest
            .delete()
            .resource("provision-template/path-label")
            .name(template_id)
            .send()
            .await?
            .decode()
    }

    /// Delete templates or directories by id list.
    pub async fn delete_by_ids(&self, template_ids: &[String]) -> Result<DeleteTemplatesResult, EcsmError> {
        let body = DeleteTemplatesResult {
            ids: template_ids.to_vec(),
        };

        self.rest
            .delete()
            .resource("provision-template/path-label")
            .body(&body)
            .send()
            .await?
            .decode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str) -> TemplateBatchEntry {
        TemplateBatchEntry {
            id: id.to_string(),
            name: name.to_string(),
            image_ref: "app@2.0.0#sylixos".to_string(),
            action: String::new(),
        }
    }

    #[tokio::test]
    async fn update_by_id_requires_every_entry_to_carry_an_id() {
        let rest = RestClient::from_base_url("http://localhost:1/api/v1").unwrap();
        let templates = Templates { rest: &rest };

        let req = UpdateTemplatesBatchRequest {
            templates: vec![entry("tmpl-1", ""), entry("", "orphan")],
            action: String::new(),
        };

        let err = templates.update_templates_by_id(&req).await.unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("index 1"));
    }

    #[tokio::test]
    async fn update_by_name_requires_every_entry_to_carry_a_name() {
        let rest = RestClient::from_base_url("http://localhost:1/api/v1").unwrap();
        let templates = Templates { rest: &rest };

        let req = UpdateTemplatesBatchRequest {
            templates: vec![entry("tmpl-1", "")],
            action: String::new(),
        };

        let err = templates.update_templates_by_name(&req).await.unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("index 0"));
    }
}
