use web_sys::MouseEvent;
use yew::prelude::*;

use crate::state::{IncomeDraft, SubmissionState};

#[derive(Properties, PartialEq)]
pub struct IncomeModalProps {
    pub is_open: bool,
    pub draft: IncomeDraft,
    pub submission: SubmissionState,
    pub form_error: Option<String>,

    pub on_amount_change: Callback<InputEvent>,
    pub on_description_change: Callback<InputEvent>,
    pub on_date_change: Callback<InputEvent>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

/// Modal income form. Cancel and backdrop dismissal both discard the
/// draft; the cancel button stays enabled while a submission is in
/// flight.
#[function_component(IncomeModal)]
pub fn income_modal(props: &IncomeModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let submitting = props.submission.is_submitting();

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal income-modal" onclick={on_modal_click}>
                <h3>{"＋ Add Income"}</h3>

                {if let Some(error) = props.form_error.as_ref() {
                    html! {
                        <div class="form-message error">
                            {error}
                        </div>
                    }
                } else { html! {} }}

                <form class="income-form" onsubmit={onsubmit}>
                    <div class="form-group">
                        <label for="income-amount">{"Amount"}</label>
                        <input
                            type="number"
                            id="income-amount"
                            placeholder="0.00"
                            step="0.01"
                            value={props.draft.amount.clone()}
                            oninput={props.on_amount_change.clone()}
                            disabled={submitting}
                        />
                    </div>

                    <div class="form-group">
                        <label for="income-description">{"Description (optional)"}</label>
                        <input
                            type="text"
                            id="income-description"
                            placeholder="Salary, gift, refund..."
                            maxlength="255"
                            value={props.draft.description.clone()}
                            oninput={props.on_description_change.clone()}
                            disabled={submitting}
                        />
                    </div>

                    <div class="form-group">
                        <label for="income-date">{"Date (optional)"}</label>
                        <input
                            type="datetime-local"
                            id="income-date"
                            value={props.draft.date.clone()}
                            oninput={props.on_date_change.clone()}
                            disabled={submitting}
                        />
                    </div>

                    <div class="modal-actions">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={submitting}>
                            {if submitting { "Adding..." } else { "Add Income" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
