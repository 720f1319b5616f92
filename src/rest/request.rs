//! Fluent request builder — assemble one HTTP request, then execute it.

use serde::Serialize;

use crate::error::EcsmError;
use crate::rest::client::RestClient;
use crate::rest::response::Response;

/// HTTP verb for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    fn method(self) -> reqwest::Method {
        match self {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Put => reqwest::Method::PUT,
            Verb::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One in-flight request description.
///
/// Chain steps return the builder; [`send`](Request::send) consumes it by
/// value, so a builder cannot be executed twice or reconfigured after
/// execution. Body serialization errors are deferred to `send` so the chain
/// stays fluent.
#[must_use = "a request does nothing until sent"]
pub struct Request<'a> {
    rest: &'a RestClient,
    verb: Verb,
    segments: Vec<String>,
    params: Vec<(String, String)>,
    body: Option<Result<serde_json::Value, serde_json::Error>>,
}

impl<'a> Request<'a> {
    pub(crate) fn new(rest: &'a RestClient, verb: Verb) -> Self {
        Self {
            rest,
            verb,
            segments: Vec::new(),
            params: Vec::new(),
            body: None,
        }
    }

    /// Set the primary resource path. The path is trusted and appended
    /// verbatim, so compound segments like `"service/record"` are allowed.
    pub fn resource(mut self, path: &str) -> Self {
        self.segments.push(path.trim_matches('/').to_string());
        self
    }

    /// Append a resource identifier as the next path segment
    /// (singular-resource addressing). Percent-encoded.
    pub fn name(mut self, id: &str) -> Self {
        self.segments.push(urlencoding::encode(id).into_owned());
        self
    }

    /// Append one more path segment, in call order. Used for action-style
    /// endpoints such as `service/{action}/ids`. Percent-encoded.
    pub fn subresource(mut self, segment: &str) -> Self {
        self.segments.push(urlencoding::encode(segment).into_owned());
        self
    }

    /// Add one query parameter. Calling `param` twice with the same key
    /// overwrites the earlier value (last write wins).
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        let value = value.to_string();
        if let Some(existing) = self.params.iter_mut().find(|(k, _)| k == key) {
            existing.1 = value;
        } else {
            self.params.push((key.to_string(), value));
        }
        self
    }

    /// Set the JSON request body. Omission means no body is sent.
    pub fn body<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        self.body = Some(serde_json::to_value(body));
        self
    }

    fn url(&self) -> String {
        format!("{}/{}", self.rest.base_url(), self.segments.join("/"))
    }

    /// Execute the assembled request.
    ///
    /// Dropping the returned future cancels the in-flight HTTP call; the
    /// client timeout bounds it otherwise. Both surface as
    /// [`EcsmError::Transport`]. Non-success HTTP statuses are not an error
    /// here — they are reported when the [`Response`] is decoded.
    pub async fn send(self) -> Result<Response, EcsmError> {
        let url = self.url();
        let mut req = self.rest.http().request(self.verb.method(), &url);

        if !self.params.is_empty() {
            req = req.query(&self.params);
        }
        if let Some(body) = self.body {
            req = req.json(&body?);
        }

        tracing::debug!(verb = ?self.verb, %url, "dispatching ECSM API request");

        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.bytes().await?.to_vec();

        Ok(Response::new(status, body))
    }
}
