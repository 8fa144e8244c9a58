//! reqwest implementation of [`Api`].
//!
//! References:
//! - [Actions secrets](https://docs.github.com/en/rest/actions/secrets?apiVersion=2022-11-28)
//! - [List repositories for the authenticated user](https://docs.github.com/rest/repos/repos#list-repositories-for-the-authenticated-user)

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use super::{Api, Upsert};
use crate::core::constants::{BASE_URL, GITHUB_API_URL, PER_PAGE, USER_AGENT};
use crate::core::types::{split_repo, PublicKey, Repo, SealedSecret, SecretInfo, SecretList};
use crate::error::{ApiError, Result};

const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const MEDIA_TYPE: &str = "application/vnd.github+json";

/// REST API root for a GitHub host.
///
/// `github.com` maps to `https://api.github.com`; any other host is treated
/// as GitHub Enterprise Server and maps to `https://<host>/api/v3`.
pub fn api_url_for(base_url: &str) -> String {
    let host = base_url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');
    if host.is_empty() || host.eq_ignore_ascii_case(BASE_URL) {
        GITHUB_API_URL.to_string()
    } else {
        format!("https://{}/api/v3", host)
    }
}

/// GitHub REST client authenticated with a bearer token.
pub struct GitHubClient {
    http: Client,
    api_url: String,
    token: String,
    api_version: String,
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("api_url", &self.api_url)
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl GitHubClient {
    /// Create a client for the GitHub host `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the HTTP client cannot be built.
    pub fn new(base_url: &str, token: &str, api_version: &str) -> Result<Self> {
        Self::with_api_url(api_url_for(base_url), token, api_version)
    }

    /// Create a client against an explicit API root.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the HTTP client cannot be built.
    pub fn with_api_url(
        api_url: impl Into<String>,
        token: &str,
        api_version: &str,
    ) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ApiError::from)?;

        Ok(Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.to_string(),
            api_version: api_version.to_string(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.api_url, path))
            .bearer_auth(&self.token)
            .header(ACCEPT, MEDIA_TYPE)
            .header(API_VERSION_HEADER, &self.api_version)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        trace!(status = status.as_u16(), url = %response.url(), "response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(response)
    }

    async fn json<T: DeserializeOwned>(response: Response) -> Result<T> {
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()).into())
    }

    /// Fetch every page of a list endpoint.
    async fn paged<P: Page>(&self, path: &str) -> Result<Vec<P::Item>> {
        let mut all = Vec::new();
        let mut page = 1usize;
        loop {
            let request = self.request(Method::GET, path).query(&[
                ("per_page", PER_PAGE.to_string()),
                ("page", page.to_string()),
            ]);
            let batch = Self::json::<P>(self.send(request).await?)
                .await?
                .into_items();
            let len = batch.len();
            all.extend(batch);

            if len < PER_PAGE {
                break;
            }
            page += 1;
        }
        Ok(all)
    }
}

/// A single page of a list endpoint.
trait Page: DeserializeOwned {
    type Item;
    fn into_items(self) -> Vec<Self::Item>;
}

impl Page for Vec<Repo> {
    type Item = Repo;

    fn into_items(self) -> Vec<Repo> {
        self
    }
}

impl Page for SecretList {
    type Item = SecretInfo;

    fn into_items(self) -> Vec<SecretInfo> {
        self.secrets
    }
}

#[async_trait]
impl Api for GitHubClient {
    async fn list_repos(&self) -> Result<Vec<Repo>> {
        debug!("listing repositories");
        let repos = self.paged::<Vec<Repo>>("/user/repos").await?;
        debug!(count = repos.len(), "repositories listed");
        Ok(repos)
    }

    async fn list_secrets(&self, repo: &str) -> Result<Vec<SecretInfo>> {
        let (owner, name) = split_repo(repo)?;
        debug!(repo, "listing secrets");
        let path = format!("/repos/{}/{}/actions/secrets", owner, name);
        self.paged::<SecretList>(&path).await
    }

    async fn public_key(&self, repo: &str) -> Result<PublicKey> {
        let (owner, name) = split_repo(repo)?;
        debug!(repo, "fetching public key");
        let path = format!("/repos/{}/{}/actions/secrets/public-key", owner, name);
        let response = self.send(self.request(Method::GET, &path)).await?;
        Self::json(response).await
    }

    async fn put_secret(&self, repo: &str, name: &str, secret: &SealedSecret) -> Result<Upsert> {
        let (owner, repo_name) = split_repo(repo)?;
        debug!(repo, secret = name, key_id = %secret.key_id, "putting secret");
        let path = format!("/repos/{}/{}/actions/secrets/{}", owner, repo_name, name);
        let response = self
            .send(self.request(Method::PUT, &path).json(secret))
            .await?;

        Ok(match response.status() {
            StatusCode::CREATED => Upsert::Created,
            _ => Upsert::Updated,
        })
    }
}
