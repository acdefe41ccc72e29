use gloo::net::http::{Request, Response};
use shared::{
    CreateTransactionRequest, CreateTransactionResponse, ErrorBody, HealthResponse, WalletBalance,
};
use thiserror::Error;

/// A failed request to the backend: either the transport gave out or
/// the server answered with a non-success status. The optional
/// `detail` carries the server's own failure text when the body had
/// one.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {status}")]
    Response { status: u16, detail: Option<String> },
}

impl ApiError {
    /// Server-provided failure text, if the response body carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Response { detail, .. } => detail.as_deref(),
            ApiError::Network(_) => None,
        }
    }
}

/// API client for communicating with the wallet backend
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Query the backend health endpoint
    pub async fn check_health(&self) -> Result<HealthResponse, ApiError> {
        let url = format!("{}/health", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<HealthResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(ApiError::Network(format!(
                            "failed to parse health response: {}",
                            e
                        ))),
                    }
                } else {
                    Err(Self::response_error(response).await)
                }
            }
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// Fetch the current wallet balance
    pub async fn get_balance(&self) -> Result<WalletBalance, ApiError> {
        let url = format!("{}/wallet/balance", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<WalletBalance>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(ApiError::Network(format!(
                            "failed to parse balance response: {}",
                            e
                        ))),
                    }
                } else {
                    Err(Self::response_error(response).await)
                }
            }
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// Record a new transaction and receive the updated balance
    pub async fn create_transaction(
        &self,
        request: CreateTransactionRequest,
    ) -> Result<CreateTransactionResponse, ApiError> {
        let url = format!("{}/wallet/transactions", self.base_url);

        match Request::post(&url)
            .json(&request)
            .map_err(|e| ApiError::Network(format!("failed to serialize request: {}", e)))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<CreateTransactionResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(ApiError::Network(format!(
                            "failed to parse transaction response: {}",
                            e
                        ))),
                    }
                } else {
                    Err(Self::response_error(response).await)
                }
            }
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    async fn response_error(response: Response) -> ApiError {
        let status = response.status();
        let detail = match response.json::<ErrorBody>().await {
            Ok(body) => body.detail,
            Err(_) => None,
        };
        ApiError::Response { status, detail }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_only_comes_from_response_errors() {
        let response = ApiError::Response {
            status: 422,
            detail: Some("Amount must be positive".to_string()),
        };
        assert_eq!(response.detail(), Some("Amount must be positive"));

        let bare = ApiError::Response {
            status: 500,
            detail: None,
        };
        assert_eq!(bare.detail(), None);

        let network = ApiError::Network("connection refused".to_string());
        assert_eq!(network.detail(), None);
    }

    #[test]
    fn test_error_display() {
        let network = ApiError::Network("timeout".to_string());
        assert_eq!(network.to_string(), "network error: timeout");

        let response = ApiError::Response {
            status: 404,
            detail: None,
        };
        assert_eq!(response.to_string(), "server responded with status 404");
    }
}
