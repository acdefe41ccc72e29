use shared::WalletBalance;
use thiserror::Error;

/// Fixed user-facing message for any balance fetch failure. Raw
/// transport errors are logged to the console, never rendered.
pub const CONNECT_ERROR_MESSAGE: &str =
    "Could not connect to the server. Please make sure the backend is running.";

/// Fallback shown when a submission fails without a `detail` in the
/// response body.
pub const INCOME_FALLBACK_MESSAGE: &str = "Failed to add income. Please try again.";

/// Lifetime of the success banner, in milliseconds.
pub const MESSAGE_TIMEOUT_MS: u32 = 3_000;

/// Backend health as reported by the health-check flow.
///
/// Set only by that flow; a failed balance fetch never touches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthStatus {
    #[default]
    Unknown,
    Ok,
    Error,
}

impl HealthStatus {
    /// Only the literal status string "ok" counts as healthy.
    pub fn from_status(status: &str) -> Self {
        if status == "ok" {
            HealthStatus::Ok
        } else {
            HealthStatus::Error
        }
    }
}

/// Lifecycle of the balance fetch flow. Loading is always followed by
/// exactly one of Loaded or Failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Lifecycle of the income submission flow; drives the submit
/// button's label and disabled state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

/// Raw, not-yet-validated form input. Exists only while the income
/// form is open; closing the form always resets it to empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IncomeDraft {
    pub amount: String,
    pub description: String,
    pub date: String,
}

/// Client-side validation failure for the amount field. The display
/// strings are the exact messages shown under the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Amount is required")]
    Missing,
    #[error("Please enter a valid number")]
    NotANumber,
    #[error("Amount must be greater than 0")]
    NotPositive,
}

/// Validate the raw amount input, in order: present, numeric and
/// finite, strictly positive. Stops at the first failure.
pub fn validate_amount(raw: &str) -> Result<f64, AmountError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Missing);
    }
    let amount = match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => return Err(AmountError::NotANumber),
    };
    if amount <= 0.0 {
        return Err(AmountError::NotPositive);
    }
    Ok(amount)
}

/// Optional form fields become `None` when blank; an empty string is
/// never sent to the backend.
pub fn blank_to_none(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Success banner text for a recorded income.
pub fn income_success_message(amount: f64, currency: &str) -> String {
    format!("✓ Income of {:.2} {} added successfully!", amount, currency)
}

/// What the balance card renders. Exactly one variant at a time, with
/// fixed precedence: failed > loading > loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum BalanceView<'a> {
    Failed(&'a str),
    Loading,
    Ready(&'a WalletBalance),
}

/// Map the fetch flow's state to the single view the card shows.
///
/// A Loaded state without a snapshot (not reachable through the fetch
/// flow, which always stores one before flipping to Loaded) renders
/// as Loading rather than a blank card.
pub fn balance_view<'a>(
    fetch_state: FetchState,
    error: Option<&'a str>,
    balance: Option<&'a WalletBalance>,
) -> BalanceView<'a> {
    match fetch_state {
        FetchState::Failed => BalanceView::Failed(error.unwrap_or(CONNECT_ERROR_MESSAGE)),
        FetchState::Idle | FetchState::Loading => BalanceView::Loading,
        FetchState::Loaded => match balance {
            Some(snapshot) => BalanceView::Ready(snapshot),
            None => BalanceView::Loading,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_required() {
        assert_eq!(validate_amount(""), Err(AmountError::Missing));
        assert_eq!(validate_amount("   "), Err(AmountError::Missing));
        assert_eq!(validate_amount("\t\n"), Err(AmountError::Missing));
        assert_eq!(AmountError::Missing.to_string(), "Amount is required");
    }

    #[test]
    fn test_amount_must_be_numeric_and_finite() {
        assert_eq!(validate_amount("abc"), Err(AmountError::NotANumber));
        assert_eq!(validate_amount("12,50"), Err(AmountError::NotANumber));
        assert_eq!(validate_amount("1.2.3"), Err(AmountError::NotANumber));
        // f64::from_str accepts these spellings, the form does not
        assert_eq!(validate_amount("inf"), Err(AmountError::NotANumber));
        assert_eq!(validate_amount("NaN"), Err(AmountError::NotANumber));
        assert_eq!(
            AmountError::NotANumber.to_string(),
            "Please enter a valid number"
        );
    }

    #[test]
    fn test_amount_must_be_positive() {
        assert_eq!(validate_amount("0"), Err(AmountError::NotPositive));
        assert_eq!(validate_amount("0.00"), Err(AmountError::NotPositive));
        assert_eq!(validate_amount("-5"), Err(AmountError::NotPositive));
        assert_eq!(
            AmountError::NotPositive.to_string(),
            "Amount must be greater than 0"
        );
    }

    #[test]
    fn test_valid_amounts_parse() {
        assert_eq!(validate_amount("50"), Ok(50.0));
        assert_eq!(validate_amount(" 12.34 "), Ok(12.34));
        assert_eq!(validate_amount("0.01"), Ok(0.01));
    }

    #[test]
    fn test_health_status_only_literal_ok_is_healthy() {
        assert_eq!(HealthStatus::from_status("ok"), HealthStatus::Ok);
        assert_eq!(HealthStatus::from_status("OK"), HealthStatus::Error);
        assert_eq!(HealthStatus::from_status("degraded"), HealthStatus::Error);
        assert_eq!(HealthStatus::from_status(""), HealthStatus::Error);
    }

    #[test]
    fn test_blank_to_none() {
        assert_eq!(blank_to_none(""), None);
        assert_eq!(blank_to_none("   "), None);
        assert_eq!(blank_to_none("Salary"), Some("Salary".to_string()));
    }

    #[test]
    fn test_income_success_message_format() {
        assert_eq!(
            income_success_message(50.0, "EUR"),
            "✓ Income of 50.00 EUR added successfully!"
        );
        assert_eq!(
            income_success_message(12.5, "USD"),
            "✓ Income of 12.50 USD added successfully!"
        );
    }

    #[test]
    fn test_balance_view_precedence() {
        let snapshot = WalletBalance {
            balance: 150.0,
            currency: "EUR".to_string(),
        };

        // failed wins even with a snapshot present
        assert_eq!(
            balance_view(FetchState::Failed, Some(CONNECT_ERROR_MESSAGE), Some(&snapshot)),
            BalanceView::Failed(CONNECT_ERROR_MESSAGE)
        );
        // loading wins over a stale snapshot
        assert_eq!(
            balance_view(FetchState::Loading, None, Some(&snapshot)),
            BalanceView::Loading
        );
        assert_eq!(
            balance_view(FetchState::Loaded, None, Some(&snapshot)),
            BalanceView::Ready(&snapshot)
        );
        assert_eq!(balance_view(FetchState::Idle, None, None), BalanceView::Loading);
        assert_eq!(balance_view(FetchState::Loaded, None, None), BalanceView::Loading);
    }

    #[test]
    fn test_draft_resets_to_empty() {
        let draft = IncomeDraft {
            amount: "50".to_string(),
            description: "Salary".to_string(),
            date: "2026-08-31T10:00".to_string(),
        };
        assert_ne!(draft, IncomeDraft::default());
        assert_eq!(IncomeDraft::default().amount, "");
    }
}
