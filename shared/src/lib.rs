use serde::{Deserialize, Serialize};

/// Current wallet balance as returned by `GET /wallet/balance`.
///
/// The server is authoritative: a new balance always replaces the old
/// one wholesale, it is never merged or recomputed client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub balance: f64,
    /// ISO 4217-like currency code, e.g. "EUR"
    pub currency: String,
}

/// Response body of `GET /health`.
///
/// Only the literal status string "ok" counts as healthy; anything
/// else (including e.g. "degraded" on an HTTP 200) is treated as an
/// error by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Transaction kind: income adds to the balance, expense subtracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

/// Request body for `POST /wallet/transactions`.
///
/// Optional fields are sent as JSON `null` when absent, never as an
/// empty string and never omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    /// Transaction amount, strictly greater than 0
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Optional description (max 255 characters)
    pub description: Option<String>,
    /// Optional date override (ISO 8601 local datetime); server uses
    /// the current time when null
    pub date: Option<String>,
}

/// A stored transaction as echoed back by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: i64,
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub description: Option<String>,
    pub created_at: String,
}

/// Successful response of `POST /wallet/transactions`: the created
/// transaction plus the updated wallet balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionResponse {
    pub balance: f64,
    pub currency: String,
    pub transaction: TransactionRecord,
}

/// Error body the backend may attach to a non-success response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_transaction_request_wire_shape() {
        let request = CreateTransactionRequest {
            amount: 50.0,
            transaction_type: TransactionType::Income,
            description: Some("Salary".to_string()),
            date: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "amount": 50.0,
                "type": "income",
                "description": "Salary",
                "date": null,
            })
        );
    }

    #[test]
    fn test_blank_optionals_serialize_as_null_not_omitted() {
        let request = CreateTransactionRequest {
            amount: 12.5,
            transaction_type: TransactionType::Income,
            description: None,
            date: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.get("description").unwrap().is_null());
        assert!(object.get("date").unwrap().is_null());
    }

    #[test]
    fn test_transaction_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&TransactionType::Income).unwrap(),
            "\"income\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionType::Expense).unwrap(),
            "\"expense\""
        );
    }

    #[test]
    fn test_parse_create_transaction_response() {
        let body = json!({
            "balance": 150.0,
            "currency": "EUR",
            "transaction": {
                "id": 7,
                "amount": 50.0,
                "type": "income",
                "description": "Salary",
                "created_at": "2026-08-31T10:15:00+00:00",
            }
        });

        let response: CreateTransactionResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.balance, 150.0);
        assert_eq!(response.currency, "EUR");
        assert_eq!(response.transaction.amount, 50.0);
        assert_eq!(response.transaction.transaction_type, TransactionType::Income);
    }

    #[test]
    fn test_parse_wallet_balance() {
        let balance: WalletBalance =
            serde_json::from_str(r#"{"balance": 0.0, "currency": "EUR"}"#).unwrap();
        assert_eq!(balance.balance, 0.0);
        assert_eq!(balance.currency, "EUR");
    }

    #[test]
    fn test_error_body_detail_is_optional() {
        let with_detail: ErrorBody =
            serde_json::from_str(r#"{"detail": "Amount must be positive"}"#).unwrap();
        assert_eq!(with_detail.detail.as_deref(), Some("Amount must be positive"));

        let without: ErrorBody = serde_json::from_str(r#"{"detail": null}"#).unwrap();
        assert_eq!(without.detail, None);
    }
}
