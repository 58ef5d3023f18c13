use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use super::{DocumentStore, QueryParams, StoreError};
use crate::document::model::Document;
use crate::mutation::types::{DeleteTarget, Mutation, MutationRequest, MutationResponse};

/// Connection settings for the document store HTTP API.
#[derive(Debug, Clone)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    /// Dated API version, with or without the leading `v`.
    pub api_version: String,
    /// Bearer token; required for mutations and private datasets.
    pub token: Option<String>,
    /// Overrides `https://{project_id}.api.sanity.io`.
    pub api_host: Option<String>,
    pub timeout: Duration,
}

impl SanityConfig {
    fn base_url(&self) -> String {
        let host = match &self.api_host {
            Some(host) => host.trim_end_matches('/').to_string(),
            None => format!("https://{}.api.sanity.io", self.project_id),
        };
        let version = self.api_version.trim_start_matches('v');
        format!("{host}/v{version}")
    }
}

/// HTTP client for the document store, holding the write credentials.
#[derive(Debug, Clone)]
pub struct SanityClient {
    http: Client,
    base_url: Url,
    dataset: String,
    token: Option<String>,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Value,
}

#[derive(Deserialize)]
struct DocumentsResponse {
    #[serde(default)]
    documents: Vec<Document>,
}

impl SanityClient {
    pub fn new(config: SanityConfig) -> Result<Self, StoreError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        let base = config.base_url();
        let base_url = match Url::parse(&base) {
            Ok(url) if !url.cannot_be_a_base() => url,
            _ => return Err(StoreError::InvalidUrl(base)),
        };
        Ok(Self {
            http,
            base_url,
            dataset: config.dataset,
            token: config.token,
        })
    }

    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    /// `{base}/data/{endpoint}/{dataset}/{extra...}` with every appended
    /// segment percent-encoded.
    fn endpoint(&self, endpoint: &str, extra: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["data", endpoint, self.dataset.as_str()])
                .extend(extra);
        }
        url
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn mutate(&self, mutations: Vec<Mutation>) -> Result<MutationResponse, StoreError> {
        let url = self.endpoint("mutate", &[]);
        let body = MutationRequest {
            mutations,
            transaction_id: Some(Uuid::new_v4().to_string()),
        };
        debug!(url = %url, count = body.mutations.len(), "submitting mutations");

        let response = self
            .authorize(self.http.post(url.clone()))
            .query(&[("returnDocuments", "true"), ("visibility", "sync")])
            .json(&body)
            .send()
            .await?;
        decode(ensure_success(response).await?).await
    }
}

async fn ensure_success(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
    response
        .json::<T>()
        .await
        .map_err(|e| StoreError::Decode(e.to_string()))
}

#[async_trait]
impl DocumentStore for SanityClient {
    async fn fetch(&self, query: &str, params: &QueryParams) -> Result<Value, StoreError> {
        let url = self.endpoint("query", &[]);
        let mut pairs = vec![("query".to_string(), query.to_string())];
        for (name, value) in params {
            pairs.push((format!("${name}"), value.to_string()));
        }
        debug!(url = %url, query, "running query");

        let response = self
            .authorize(self.http.get(url.clone()))
            .query(&pairs)
            .send()
            .await?;
        let body: QueryResponse = decode(ensure_success(response).await?).await?;
        Ok(body.result)
    }

    async fn get_document(&self, id: &str) -> Result<Option<Document>, StoreError> {
        let url = self.endpoint("doc", &[id]);
        debug!(url = %url, "fetching document");

        let response = self.authorize(self.http.get(url.clone())).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body: DocumentsResponse = decode(ensure_success(response).await?).await?;
        Ok(body.documents.into_iter().next())
    }

    async fn create_or_replace(&self, document: Document) -> Result<Document, StoreError> {
        let response = self
            .mutate(vec![Mutation::CreateOrReplace(document.clone())])
            .await?;

        let returned = response
            .results
            .into_iter()
            .find(|result| result.id == document.id)
            .and_then(|result| result.document);

        match returned {
            Some(value) => {
                serde_json::from_value(value).map_err(|e| StoreError::Decode(e.to_string()))
            }
            None => Ok(document),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let response = self
            .mutate(vec![Mutation::Delete(DeleteTarget { id: id.to_string() })])
            .await?;
        debug!(
            transaction_id = %response.transaction_id,
            deleted = response.results.len(),
            "delete committed"
        );
        Ok(())
    }
}
