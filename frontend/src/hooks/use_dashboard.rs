use shared::{CreateTransactionRequest, TransactionType, WalletBalance};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::state::{
    blank_to_none, income_success_message, validate_amount, FetchState, HealthStatus, IncomeDraft,
    SubmissionState, CONNECT_ERROR_MESSAGE, INCOME_FALLBACK_MESSAGE, MESSAGE_TIMEOUT_MS,
};

/// Everything the dashboard screen renders from.
#[derive(Clone)]
pub struct DashboardState {
    pub balance: Option<WalletBalance>,
    pub fetch_state: FetchState,
    pub fetch_error: Option<String>,
    pub health: HealthStatus,
    pub form_open: bool,
    pub draft: IncomeDraft,
    pub submission: SubmissionState,
    pub form_error: Option<String>,
    pub success_message: Option<String>,
}

#[derive(Clone)]
pub struct UseDashboardActions {
    pub fetch_balance: Callback<()>,
    pub open_income_form: Callback<()>,
    pub close_income_form: Callback<()>,
    pub submit_income: Callback<()>,
    pub on_amount_change: Callback<InputEvent>,
    pub on_description_change: Callback<InputEvent>,
    pub on_date_change: Callback<InputEvent>,
}

pub struct UseDashboardResult {
    pub state: DashboardState,
    pub actions: UseDashboardActions,
}

/// The dashboard controller: health polling, balance retrieval and
/// income submission against the wallet backend, plus the state the
/// screen derives its render from.
///
/// The three flows are independent. Each one's network task only ever
/// moves its own state cells, so no flow observes another half-done.
/// The balance snapshot is the one cell two flows share; see the
/// epoch counter below for the policy.
#[hook]
pub fn use_dashboard(api_client: &ApiClient) -> UseDashboardResult {
    let balance = use_state(|| Option::<WalletBalance>::None);
    let fetch_state = use_state(FetchState::default);
    let fetch_error = use_state(|| Option::<String>::None);
    let health = use_state(HealthStatus::default);

    // Income form state
    let form_open = use_state(|| false);
    let draft = use_state(IncomeDraft::default);
    let submission = use_state(SubmissionState::default);
    let form_error = use_state(|| Option::<String>::None);

    let success_message = use_state(|| Option::<String>::None);

    // Counters readable from late-completing tasks (use_state snapshots
    // would be stale by then):
    // - balance_epoch: bumped by every submission success; a fetch that
    //   started before the bump drops its balance write so it cannot
    //   clobber the fresher server-authoritative value.
    // - form_session: bumped on every open/close; a submission that
    //   outlives its form session keeps its dashboard-level effects but
    //   skips the form-level ones.
    // - message_seq: the expiry timer only clears the banner it was
    //   scheduled for, not a newer one.
    let balance_epoch = use_mut_ref(|| 0u64);
    let form_session = use_mut_ref(|| 0u64);
    let message_seq = use_mut_ref(|| 0u64);

    let fetch_balance = {
        let api_client = api_client.clone();
        let balance = balance.clone();
        let fetch_state = fetch_state.clone();
        let fetch_error = fetch_error.clone();
        let balance_epoch = balance_epoch.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let balance = balance.clone();
            let fetch_state = fetch_state.clone();
            let fetch_error = fetch_error.clone();
            let balance_epoch = balance_epoch.clone();

            spawn_local(async move {
                fetch_state.set(FetchState::Loading);
                fetch_error.set(None);
                let epoch = *balance_epoch.borrow();

                match api_client.get_balance().await {
                    Ok(snapshot) => {
                        // A submission that resolved while this fetch was in
                        // flight already holds the fresher balance.
                        if *balance_epoch.borrow() == epoch {
                            balance.set(Some(snapshot));
                        }
                        fetch_state.set(FetchState::Loaded);
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to fetch balance:", e.to_string());
                        fetch_state.set(FetchState::Failed);
                        fetch_error.set(Some(CONNECT_ERROR_MESSAGE.to_string()));
                    }
                }
            });
        })
    };

    let open_income_form = {
        let form_open = form_open.clone();
        let draft = draft.clone();
        let form_error = form_error.clone();
        let submission = submission.clone();
        let form_session = form_session.clone();

        Callback::from(move |_| {
            *form_session.borrow_mut() += 1;
            draft.set(IncomeDraft::default());
            form_error.set(None);
            submission.set(SubmissionState::Idle);
            form_open.set(true);
        })
    };

    // Cancel button and backdrop dismissal both land here. The draft
    // and any validation error are discarded; an in-flight submission
    // is not aborted.
    let close_income_form = {
        let form_open = form_open.clone();
        let draft = draft.clone();
        let form_error = form_error.clone();
        let submission = submission.clone();
        let form_session = form_session.clone();

        Callback::from(move |_| {
            *form_session.borrow_mut() += 1;
            draft.set(IncomeDraft::default());
            form_error.set(None);
            submission.set(SubmissionState::Idle);
            form_open.set(false);
        })
    };

    let submit_income = {
        let api_client = api_client.clone();
        let balance = balance.clone();
        let form_open = form_open.clone();
        let draft = draft.clone();
        let submission = submission.clone();
        let form_error = form_error.clone();
        let success_message = success_message.clone();
        let balance_epoch = balance_epoch.clone();
        let form_session = form_session.clone();
        let message_seq = message_seq.clone();

        Callback::from(move |_| {
            // Validation runs before any network call; on failure the
            // submission state is left untouched.
            let amount = match validate_amount(&draft.amount) {
                Ok(value) => value,
                Err(e) => {
                    form_error.set(Some(e.to_string()));
                    return;
                }
            };

            form_error.set(None);
            submission.set(SubmissionState::Submitting);

            let request = CreateTransactionRequest {
                amount,
                transaction_type: TransactionType::Income,
                description: blank_to_none(&draft.description),
                date: blank_to_none(&draft.date),
            };
            let session = *form_session.borrow();

            let api_client = api_client.clone();
            let balance = balance.clone();
            let form_open = form_open.clone();
            let draft = draft.clone();
            let submission = submission.clone();
            let form_error = form_error.clone();
            let success_message = success_message.clone();
            let balance_epoch = balance_epoch.clone();
            let form_session = form_session.clone();
            let message_seq = message_seq.clone();

            spawn_local(async move {
                match api_client.create_transaction(request).await {
                    Ok(response) => {
                        // Dashboard-level effects apply even if the form was
                        // closed while the request was in flight.
                        *balance_epoch.borrow_mut() += 1;
                        balance.set(Some(WalletBalance {
                            balance: response.balance,
                            currency: response.currency.clone(),
                        }));
                        submission.set(SubmissionState::Succeeded);

                        *message_seq.borrow_mut() += 1;
                        let seq = *message_seq.borrow();
                        success_message.set(Some(income_success_message(
                            amount,
                            &response.currency,
                        )));
                        {
                            let success_message = success_message.clone();
                            let message_seq = message_seq.clone();
                            spawn_local(async move {
                                gloo::timers::future::TimeoutFuture::new(MESSAGE_TIMEOUT_MS).await;
                                if *message_seq.borrow() == seq {
                                    success_message.set(None);
                                }
                            });
                        }

                        // Form-level effects only if the user has not closed
                        // (or closed and reopened) the form meanwhile.
                        if *form_session.borrow() == session {
                            draft.set(IncomeDraft::default());
                            form_error.set(None);
                            form_open.set(false);
                        }
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to create transaction:", e.to_string());
                        submission.set(SubmissionState::Failed);
                        // The form stays open with the entered values intact
                        // so the user can correct and resubmit.
                        if *form_session.borrow() == session {
                            let message = e
                                .detail()
                                .map(str::to_string)
                                .unwrap_or_else(|| INCOME_FALLBACK_MESSAGE.to_string());
                            form_error.set(Some(message));
                        }
                    }
                }
            });
        })
    };

    // Any edit to any draft field clears a displayed validation error;
    // revalidation waits for the next submit attempt.
    let on_amount_change = {
        let draft = draft.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.amount = input.value();
            draft.set(next);
            form_error.set(None);
        })
    };

    let on_description_change = {
        let draft = draft.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.description = input.value();
            draft.set(next);
            form_error.set(None);
        })
    };

    let on_date_change = {
        let draft = draft.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.date = input.value();
            draft.set(next);
            form_error.set(None);
        })
    };

    // Initial activation: health check and balance fetch run
    // concurrently, neither waits for the other and the failure of one
    // does not affect the other's state.
    {
        let api_client = api_client.clone();
        let health = health.clone();
        let fetch_balance = fetch_balance.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.check_health().await {
                    Ok(response) => health.set(HealthStatus::from_status(&response.status)),
                    Err(e) => {
                        gloo::console::warn!("Health check failed:", e.to_string());
                        health.set(HealthStatus::Error);
                    }
                }
            });
            fetch_balance.emit(());

            || ()
        });
    }

    let state = DashboardState {
        balance: (*balance).clone(),
        fetch_state: *fetch_state,
        fetch_error: (*fetch_error).clone(),
        health: *health,
        form_open: *form_open,
        draft: (*draft).clone(),
        submission: *submission,
        form_error: (*form_error).clone(),
        success_message: (*success_message).clone(),
    };

    let actions = UseDashboardActions {
        fetch_balance,
        open_income_form,
        close_income_form,
        submit_income,
        on_amount_change,
        on_description_change,
        on_date_change,
    };

    UseDashboardResult { state, actions }
}
