/// Popup UI for the Site Scrubber extension

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use patternfly_yew::prelude::*;
use crate::bridge::ChromeHost;
use crate::clearing::execute_clear;
use crate::tab_data::ClearSummary;

#[derive(Clone, PartialEq)]
enum AppState {
    Idle,
    Clearing,
    Done(ClearSummary),
    Error(String),
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| AppState::Idle);
    let reload_after = use_state(|| false);

    // One cycle at a time: the trigger is disabled while a cycle is in
    // flight, so clicks cannot overlap.
    let is_busy = matches!(*state, AppState::Clearing);

    let on_reload_toggle = {
        let reload_after = reload_after.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                reload_after.set(input.checked());
            }
        })
    };

    // Clear all handler
    let on_clear = {
        let state = state.clone();
        let reload_after = reload_after.clone();

        Callback::from(move |_| {
            let state = state.clone();
            // Sampled once at trigger time; later toggling does not affect
            // the running cycle.
            let reload_requested = *reload_after;

            state.set(AppState::Clearing);

            spawn_local(async move {
                match execute_clear(&ChromeHost, reload_requested).await {
                    Ok(summary) => {
                        state.set(AppState::Done(summary));
                    }
                    Err(e) => {
                        state.set(AppState::Error(e.to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Site Scrubber"}</h1>
            <p class="popup-subtitle">
                {"Clear cookies, storage, and service workers for the current site."}
            </p>

            <label class="reload-toggle">
                <input
                    type="checkbox"
                    checked={*reload_after}
                    oninput={on_reload_toggle}
                    disabled={is_busy}
                />
                {" Reload page after clearing"}
            </label>

            <Button onclick={on_clear} disabled={is_busy} variant={ButtonVariant::Primary} block={true}>
                {"🧹 Clear Site Data"}
            </Button>

            // Status display
            {match &*state {
                AppState::Clearing => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{"Clearing site data..."}</p>
                    </div>
                },
                AppState::Done(summary) => html! {
                    <div class="message-top-margin">
                        <Alert
                            r#type={if summary.all_cleared() { AlertType::Success } else { AlertType::Warning }}
                            title={if summary.all_cleared() { "Site data cleared" } else { "Cleared with failures" }}
                            inline={true}
                        >
                            <div class="summary-box">
                                {for summary.entries().iter().map(|(label, outcome)| html! {
                                    <div class="summary-item">
                                        <span class="summary-label">{*label}</span>
                                        <span class="summary-flag">
                                            {if outcome.is_cleared() { "✓ cleared" } else { "✗ failed" }}
                                        </span>
                                    </div>
                                })}
                            </div>
                        </Alert>
                    </div>
                },
                AppState::Error(err) => html! {
                    <div class="message-top-margin">
                        <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                            {err.clone()}
                        </Alert>
                    </div>
                },
                AppState::Idle => html! {}
            }}

            <p class="footer-popup">
                {"Site Scrubber v0.1.0"}
            </p>
        </div>
    }
}
