use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::RwLock;

use jobpulse_model::{
    ApplicationId, ApplicationsPage, GmailStatus, NewApplication,
    QueryFilters, ScanOutcome, ScanStatusResponse, StatsSummary,
    UpdateApplication,
};

use crate::api::JobsApi;
use crate::auth::{AuthToken, SigninResponse};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Authenticated HTTP client for the JobPulse backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token_store: Arc<RwLock<Option<AuthToken>>>,
}

impl ApiClient {
    /// Create a new API client against the configured base URL.
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .expect("Failed to create HTTP client");

        log::info!(
            "[ApiClient] Creating new API client with base URL: {}",
            config.base_url
        );

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token_store: Arc::new(RwLock::new(None)),
        }
    }

    /// Build a full API URL for a path like `applications` or
    /// `gmail/status`.
    pub fn build_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Set the authentication token.
    pub async fn set_token(&self, token: Option<AuthToken>) {
        *self.token_store.write().await = token;
    }

    /// Get the current authentication token.
    pub async fn get_token(&self) -> Option<AuthToken> {
        self.token_store.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.token_store.read().await.is_some()
    }

    /// Attach the bearer token when one is stored.
    async fn build_request(&self, builder: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.token_store.read().await.as_ref() {
            builder.header("Authorization", token.header_value())
        } else {
            builder
        }
    }

    /// Execute a request and decode the JSON body.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ClientResult<T> {
        let response = request.send().await?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => {
                let body = response.text().await?;
                Ok(serde_json::from_str(&body)?)
            }
            StatusCode::UNAUTHORIZED => {
                // Token might be expired, clear it
                self.set_token(None).await;
                Err(ClientError::Unauthorized)
            }
            status => {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "unknown error".to_string());
                Err(ClientError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }

    /// Execute a request whose body we only need for error reporting.
    async fn execute_no_content(
        &self,
        request: RequestBuilder,
    ) -> ClientResult<()> {
        let response = request.send().await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED => {
                self.set_token(None).await;
                Err(ClientError::Unauthorized)
            }
            status => {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "unknown error".to_string());
                Err(ClientError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }

    /// GET request.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.build_url(path);
        log::debug!("[ApiClient] GET {}", url);
        let request = self.client.get(&url);
        let request = self.build_request(request).await;
        self.execute(request).await
    }

    /// Sign in and store the returned bearer token for later requests.
    pub async fn signin(
        &self,
        email: &str,
        password: &str,
    ) -> ClientResult<SigninResponse> {
        #[derive(serde::Serialize)]
        struct SigninRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let url = self.build_url("auth/signin");
        let request = self.client.post(&url).json(&SigninRequest {
            email,
            password,
        });
        let response: SigninResponse = self.execute(request).await?;
        self.set_token(Some(AuthToken::new(response.token.clone())))
            .await;
        Ok(response)
    }

    /// Drop the stored token (sign-out).
    pub async fn signout(&self) {
        self.set_token(None).await;
    }
}

#[async_trait]
impl JobsApi for ApiClient {
    async fn fetch_applications(
        &self,
        filters: &QueryFilters,
        limit: u64,
        offset: u64,
    ) -> ClientResult<ApplicationsPage> {
        let url = self.build_url("applications");
        log::debug!(
            "[ApiClient] GET {} (limit {}, offset {})",
            url,
            limit,
            offset
        );
        let request = self
            .client
            .get(&url)
            .query(&filters.to_query_pairs(limit, offset));
        let request = self.build_request(request).await;
        self.execute(request).await
    }

    async fn update_application(
        &self,
        id: &ApplicationId,
        update: &UpdateApplication,
    ) -> ClientResult<()> {
        let url = self.build_url(&format!("applications/{}", id));
        let request = self.client.put(&url).json(update);
        let request = self.build_request(request).await;
        self.execute_no_content(request).await
    }

    async fn create_application(
        &self,
        application: &NewApplication,
    ) -> ClientResult<ApplicationId> {
        #[derive(serde::Deserialize)]
        struct CreatedResponse {
            id: String,
        }

        let url = self.build_url("applications");
        let request = self.client.post(&url).json(application);
        let request = self.build_request(request).await;
        let created: CreatedResponse = self.execute(request).await?;
        Ok(ApplicationId::from_string(created.id)?)
    }

    async fn delete_application(
        &self,
        id: &ApplicationId,
    ) -> ClientResult<()> {
        let url = self.build_url(&format!("applications/{}", id));
        let request = self.client.delete(&url);
        let request = self.build_request(request).await;
        self.execute_no_content(request).await
    }

    async fn clear_all_applications(&self) -> ClientResult<u64> {
        #[derive(serde::Deserialize)]
        struct ClearedResponse {
            deleted_count: u64,
        }

        let url = self.build_url("applications/clear/all");
        let request = self.client.delete(&url);
        let request = self.build_request(request).await;
        let cleared: ClearedResponse = self.execute(request).await?;
        Ok(cleared.deleted_count)
    }

    async fn scan_status(&self) -> ClientResult<ScanStatusResponse> {
        self.get("scan/status").await
    }

    async fn gmail_status(&self) -> ClientResult<GmailStatus> {
        self.get("gmail/status").await
    }

    async fn trigger_scan(
        &self,
        days_back: u32,
        max_results: u32,
    ) -> ClientResult<ScanOutcome> {
        #[derive(serde::Serialize)]
        struct ScanRequest {
            days_back: u32,
            max_results: u32,
        }

        let url = self.build_url("gmail/scan");
        let request = self.client.post(&url).json(&ScanRequest {
            days_back,
            max_results,
        });
        let request = self.build_request(request).await;
        self.execute(request).await
    }

    async fn fetch_stats(&self) -> ClientResult<StatsSummary> {
        self.get("stats").await
    }

    async fn fetch_platforms(&self) -> ClientResult<Vec<String>> {
        self.get("platforms").await
    }

    async fn fetch_statuses(&self) -> ClientResult<Vec<String>> {
        self.get("statuses").await
    }
}
