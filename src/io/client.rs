// HTTP client for the content backend

use super::schema::{Algorithm, Category, Example};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid API base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("{message}: {source}")]
    Transport {
        message: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{message} (HTTP {status})")]
    Status {
        message: &'static str,
        status: StatusCode,
    },
    #[error("{message}: unexpected response shape: {source}")]
    Decode {
        message: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// One backend resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Categories,
    CategoryBySlug(String),
    Examples { category_id: Option<i64> },
    ExampleBySlug(String),
    Algorithms { category: Option<String> },
    AlgorithmBySlug(String),
}

impl Endpoint {
    /// Full request URL under `base`. Path segments and query values are percent-encoded.
    pub fn url(&self, base: &str) -> Result<Url, ClientError> {
        let invalid = |reason: String| ClientError::InvalidBaseUrl {
            url: base.to_string(),
            reason,
        };

        let mut url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| invalid("cannot be used as a base".to_string()))?;
            segments.pop_if_empty();
            match self {
                Endpoint::Categories => {
                    segments.push("categories");
                }
                Endpoint::CategoryBySlug(slug) => {
                    segments.extend(["categories", "slug", slug.as_str()]);
                }
                Endpoint::Examples { .. } => {
                    segments.push("examples");
                }
                Endpoint::ExampleBySlug(slug) => {
                    segments.extend(["examples", "slug", slug.as_str()]);
                }
                Endpoint::Algorithms { .. } => {
                    segments.push("algorithms");
                }
                Endpoint::AlgorithmBySlug(slug) => {
                    segments.extend(["algorithms", "slug", slug.as_str()]);
                }
            }
        }

        match self {
            Endpoint::Examples {
                category_id: Some(id),
            } => {
                url.query_pairs_mut()
                    .append_pair("category_id", &id.to_string());
            }
            // An empty category filters nothing, so it is left off like `None`
            Endpoint::Algorithms {
                category: Some(category),
            } if !category.is_empty() => {
                url.query_pairs_mut().append_pair("category", category);
            }
            _ => {}
        }

        Ok(url)
    }

    fn failure_message(&self) -> &'static str {
        match self {
            Endpoint::Categories => "failed to fetch categories",
            Endpoint::CategoryBySlug(_) => "failed to fetch category",
            Endpoint::Examples { .. } => "failed to fetch examples",
            Endpoint::ExampleBySlug(_) => "failed to fetch example",
            Endpoint::Algorithms { .. } => "failed to fetch algorithms",
            Endpoint::AlgorithmBySlug(_) => "failed to fetch algorithm",
        }
    }
}

/// Typed wrappers over the backend's read endpoints. No retries, no caching.
#[derive(Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    base_url: String,
}

impl ContentClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        // Fail early on a base URL that can never work
        Endpoint::Categories.url(base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::Build)?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // No page lists every category yet; the home page is built from the registry
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ClientError> {
        self.get(Endpoint::Categories).await
    }

    pub async fn fetch_category_by_slug(&self, slug: &str) -> Result<Category, ClientError> {
        self.get(Endpoint::CategoryBySlug(slug.to_string())).await
    }

    pub async fn fetch_examples(&self, category_id: Option<i64>) -> Result<Vec<Example>, ClientError> {
        self.get(Endpoint::Examples { category_id }).await
    }

    // Example pages are loaded per category, so nothing asks for a single example yet
    pub async fn fetch_example_by_slug(&self, slug: &str) -> Result<Example, ClientError> {
        self.get(Endpoint::ExampleBySlug(slug.to_string())).await
    }

    pub async fn fetch_algorithms(&self, category: Option<&str>) -> Result<Vec<Algorithm>, ClientError> {
        self.get(Endpoint::Algorithms {
            category: category.map(str::to_string),
        })
        .await
    }

    pub async fn fetch_algorithm_by_slug(&self, slug: &str) -> Result<Algorithm, ClientError> {
        self.get(Endpoint::AlgorithmBySlug(slug.to_string())).await
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ClientError> {
        let url = endpoint.url(&self.base_url)?;
        let message = endpoint.failure_message();
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ClientError::Transport { message, source })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("GET {} returned {}", url, status);
            return Err(ClientError::Status { message, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ClientError::Transport { message, source })?;
        serde_json::from_slice(&body).map_err(|source| ClientError::Decode { message, source })
    }
}
