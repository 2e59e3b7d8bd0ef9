// src/grid/http.rs
// GridClient over a node's web API (the `node.url` endpoint)

use super::{Capability, DirectoryInfo, GridClient, parse_directory_json};
use crate::error::GridError;
use async_trait::async_trait;
use tracing::debug;
use url::Url;

/// Web API client bound to one node URL
#[derive(Clone)]
pub struct WebApiClient {
    client: reqwest::Client,
    base: Url,
}

impl WebApiClient {
    /// Build a client for `node_url`. A missing trailing slash is added so
    /// relative joins stay under the node's root.
    pub fn new(client: reqwest::Client, node_url: &str) -> Result<Self, GridError> {
        let trimmed = node_url.trim();
        let base = if trimmed.ends_with('/') {
            Url::parse(trimmed)?
        } else {
            Url::parse(&format!("{}/", trimmed))?
        };
        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `uri/<cap>[/<name>]` with every segment percent-encoded
    fn cap_url(&self, cap: &Capability, child: Option<&str>) -> Result<Url, GridError> {
        let mut path = format!("uri/{}", urlencoding::encode(cap.as_str()));
        if let Some(name) = child {
            path.push('/');
            path.push_str(&urlencoding::encode(name));
        }
        Ok(self.base.join(&path)?)
    }

    async fn check(resp: reqwest::Response) -> Result<String, GridError> {
        let status = resp.status();
        let body = resp.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(GridError::Status {
                status: status.as_u16(),
                body: body.trim().to_string(),
            })
        }
    }
}

#[async_trait]
impl GridClient for WebApiClient {
    async fn create_directory(&self) -> Result<Capability, GridError> {
        let url = self.base.join("uri")?;
        debug!(url = %url, "POST mkdir");
        let resp = self
            .client
            .post(url)
            .query(&[("t", "mkdir")])
            .send()
            .await?;
        let body = Self::check(resp).await?;
        let cap = body.trim();
        if cap.is_empty() {
            return Err(GridError::MissingField("dircap"));
        }
        Ok(Capability::new(cap))
    }

    async fn describe_directory(&self, cap: &Capability) -> Result<DirectoryInfo, GridError> {
        let url = self.cap_url(cap, None)?;
        debug!("GET directory listing");
        let resp = self
            .client
            .get(url)
            .query(&[("t", "json")])
            .send()
            .await?;
        let body = Self::check(resp).await?;
        parse_directory_json(&body)
    }

    async fn link(
        &self,
        dircap: &Capability,
        name: &str,
        child: &Capability,
    ) -> Result<(), GridError> {
        let url = self.cap_url(dircap, Some(name))?;
        debug!(name = %name, "PUT link");
        let resp = self
            .client
            .put(url)
            .query(&[("t", "uri"), ("replace", "only-files")])
            .body(child.as_str().to_string())
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }
}
