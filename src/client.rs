//! GitLab API client.
//!
//! Low-level HTTP client that handles authentication and raw requests.
//! Resource-specific operations are implemented via traits on model types.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{AuditError, Result};
use crate::pagination::{Page, PaginationParams, PER_PAGE};

/// Default GitLab REST API base.
pub const DEFAULT_API_URL: &str = "https://gitlab.com/api/v4/";

/// Environment variable holding the private access token.
pub const TOKEN_ENV: &str = "GITLAB_TOKEN";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

const TOKEN_HEADER: &str = "PRIVATE-TOKEN";
const USER_AGENT: &str = concat!("gitlab-members/", env!("CARGO_PKG_VERSION"));

/// Low-level GitLab API client.
///
/// Presents a static access token in the `PRIVATE-TOKEN` header on every
/// request. Only GET requests are issued.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use gitlab_members::GitLabClient;
///
/// # fn example() -> gitlab_members::Result<()> {
/// // Token from GITLAB_TOKEN, default base URL
/// let token = gitlab_members::token_from_env()?;
/// let client = GitLabClient::new(&token, gitlab_members::DEFAULT_API_URL)?;
///
/// // Or configure manually
/// let client = GitLabClient::new("glpat-xxxx", "https://gitlab.example.com/api/v4")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GitLabClient {
    http: Client,
    base_url: Arc<Url>,
    token: String,
}

impl std::fmt::Debug for GitLabClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitLabClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl GitLabClient {
    /// Create a new client with the provided token and base URL, using the
    /// default request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(token: &str, base_url: &str) -> Result<Self> {
        Self::with_timeout(token, base_url, DEFAULT_TIMEOUT)
    }

    /// Create a new client with an explicit per-request timeout.
    ///
    /// The timeout bounds a single call only, never the whole traversal.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_timeout(token: &str, base_url: &str, timeout: Duration) -> Result<Self> {
        // Url::join drops the last segment unless the base ends with /
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(timeout)
            .build()
            .map_err(AuditError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            token: token.to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Make a GET request.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .get(url)
            .header(TOKEN_HEADER, &self.token)
            .send()
            .await
            .map_err(AuditError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a GET request with query parameters.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .get(url)
            .header(TOKEN_HEADER, &self.token)
            .query(query)
            .send()
            .await
            .map_err(AuditError::HttpError)?;

        Self::check_response(response).await
    }

    /// GET a path and decode the JSON body.
    ///
    /// A body that is not valid JSON for `T` yields [`AuditError::ParseError`].
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.get(path).await?;
        Self::decode(response).await
    }

    /// GET a path with query parameters and decode the JSON body.
    pub async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self.get_with_query(path, query).await?;
        Self::decode(response).await
    }

    /// Fetch a single page of a list endpoint.
    #[tracing::instrument(skip(self))]
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        params: PaginationParams,
    ) -> Result<Page<T>> {
        let items: Vec<T> = self.get_json_with_query(path, &params).await?;
        tracing::debug!(items = items.len(), "fetched page");
        Ok(Page::new(items, params.page, params.per_page))
    }

    /// Fetch every item of a list endpoint, page by page.
    ///
    /// Pages are requested until one comes back with fewer than
    /// [`PER_PAGE`] items, so a collection that is an exact multiple of the
    /// page size ends with one empty request. There is no page limit.
    pub async fn get_all<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let mut all_items = Vec::new();
        let mut params = PaginationParams::for_page(1, PER_PAGE);

        loop {
            let page = self.get_page::<T>(path, params).await?;
            let has_more = page.has_more;
            all_items.extend(page.items);

            if !has_more {
                break;
            }
            params.page += 1;
        }

        Ok(all_items)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.text().await.map_err(AuditError::HttpError)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = Self::extract_error_message(response, status).await;
        Err(AuditError::ApiError {
            message,
            status_code: status.as_u16(),
        })
    }

    /// Build `"<code> <reason>"`, plus GitLab's own message when the body
    /// carries one.
    async fn extract_error_message(response: Response, status: reqwest::StatusCode) -> String {
        let head = match status.canonical_reason() {
            Some(reason) => format!("{} {}", status.as_u16(), reason),
            None => status.as_u16().to_string(),
        };

        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return head,
        };

        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            for key in ["message", "error"] {
                if let Some(msg) = json.get(key).and_then(|m| m.as_str()) {
                    return format!("{head} ({msg})");
                }
            }
        }

        head
    }
}

/// Read the access token from `GITLAB_TOKEN`.
///
/// # Errors
///
/// Returns [`AuditError::MissingArgument`] if the variable is unset or empty.
pub fn token_from_env() -> Result<String> {
    require_token(env::var(TOKEN_ENV).ok())
}

/// Validate a raw token value.
pub fn require_token(value: Option<String>) -> Result<String> {
    match value {
        Some(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(AuditError::MissingArgument(format!(
            "Missing ENV variable {TOKEN_ENV} with GitLab access token"
        ))),
    }
}
