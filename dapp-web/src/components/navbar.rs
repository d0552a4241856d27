//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

use shared::utils::truncate_address;

use crate::components::network_select::NetworkSelect;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">
                        "Ink"<span class="nav-accent">"Board"</span>
                    </span>
                </A>
                <div class="nav-actions">
                    <NetworkSelect/>
                    {move || {
                        let account = wallet_ctx
                            .selected_account
                            .get()
                            .filter(|_| wallet_ctx.is_connected());
                        match account {
                            Some(account) => view! {
                                <div class="nav-account">
                                    <span class="nav-address" title=account.address.clone()>
                                        {truncate_address(&account.address)}
                                    </span>
                                    <button
                                        class="btn btn-outline"
                                        on:click=move |_| wallet_ctx.sign_out()
                                    >
                                        "Sign out"
                                    </button>
                                </div>
                            }.into_any(),
                            None => view! {
                                <span class="nav-disconnected">"Not connected"</span>
                            }.into_any(),
                        }
                    }}
                </div>
            </div>
        </nav>
    }
}
