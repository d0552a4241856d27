//! Greeting board panel
//!
//! Small end-to-end surface over the greeter contract: reads the current
//! greeting with a dry-run query and updates it with a signed transaction,
//! reporting progress through the transaction toaster.

use js_sys::{Array, Function};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use shared::TxStatus;

use crate::services::client::{query_contract, submit_contract_tx};
use crate::state::contracts::use_contract;
use crate::state::network::use_network_context;
use crate::state::toasts::use_toast_context;
use crate::state::wallet::use_wallet_context;
use crate::utils::deployments::{deployment_for, GREETER_CONTRACT_ID};

#[component]
pub fn GreeterPanel() -> impl IntoView {
    let network_ctx = use_network_context();
    let wallet_ctx = use_wallet_context();
    let toasts = use_toast_context();

    let deployment = Memo::new(move |_| {
        network_ctx
            .network_id
            .with(|id| deployment_for(GREETER_CONTRACT_ID, id))
    });
    let contract = use_contract(deployment);

    let greeting = RwSignal::new(None::<String>);
    let (message, set_message) = signal(String::new());
    // Bumped after a finalized update so the greeting re-queries.
    let refresh = RwSignal::new(0u64);

    Effect::new(move |_| {
        refresh.get();
        let handle = contract.get();
        let caller = wallet_ctx.selected_account.get().map(|a| a.address);
        greeting.set(None);

        let (Some(handle), Some(caller)) = (handle, caller) else {
            return;
        };

        leptos::task::spawn_local(async move {
            match query_contract(&handle, "greet", &Array::new(), &caller).await {
                Ok(data) => greeting.set(Some(data.trim_matches('"').to_string())),
                Err(e) => log::warn!("greet query failed: {e}"),
            }
        });
    });

    let submit = move |_| {
        let Some(handle) = contract.get_untracked() else {
            toasts.error("Contract is not ready yet");
            return;
        };
        let Some(account) = wallet_ctx.selected_account.get_untracked() else {
            toasts.error("Select an account first");
            return;
        };
        let Some(signer) = wallet_ctx.signer() else {
            toasts.error("Connect a wallet first");
            return;
        };
        let text = message.get_untracked();
        if text.trim().is_empty() {
            toasts.error("Enter a message first");
            return;
        }

        let toaster = toasts.tx_toaster("Signing transaction...");
        let status_toaster = toaster.clone();
        let on_status = Closure::wrap(Box::new(move |raw: JsValue| {
            match serde_wasm_bindgen::from_value::<TxStatus>(raw) {
                Ok(status) => {
                    if matches!(status, TxStatus::Finalized { .. }) {
                        refresh.update(|n| *n += 1);
                    }
                    status_toaster.update_tx_status(&status);
                }
                Err(e) => log::warn!("unrecognized tx status: {e}"),
            }
        }) as Box<dyn FnMut(JsValue)>);

        leptos::task::spawn_local(async move {
            let args = Array::of1(&JsValue::from_str(&text));
            // Ownership of the callback moves to the JS side, which keeps it
            // alive for as long as the status stream runs.
            let callback: Function = on_status.into_js_value().unchecked_into();
            let outcome = submit_contract_tx(
                &handle,
                "setMessage",
                &args,
                &account.address,
                &signer,
                &callback,
            )
            .await;

            if let Err(e) = outcome {
                log::error!("setMessage submission failed: {e}");
                toaster.on_error(&e.to_string());
            }
        });
        set_message.set(String::new());
    };

    view! {
        <div class="card">
            <h3>"Greeting Board"</h3>
            {move || match deployment.get() {
                None => view! {
                    <p class="muted">"The greeter contract is not deployed on this network."</p>
                }.into_any(),
                Some(_) => view! {
                    <div class="greeter">
                        {move || match greeting.get() {
                            Some(current) => view! { <p class="greeting">{current}</p> }.into_any(),
                            None => view! { <p class="greeting muted">"Loading greeting..."</p> }.into_any(),
                        }}
                        <div class="greeter-form">
                            <input
                                type="text"
                                placeholder="Say something nice"
                                prop:value=message
                                on:input=move |ev| set_message.set(event_target_value(&ev))
                            />
                            <button
                                class="btn"
                                disabled=move || !network_ctx.ready.get()
                                on:click=submit
                            >
                                "Update greeting"
                            </button>
                        </div>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
