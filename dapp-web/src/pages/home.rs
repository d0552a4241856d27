//! Home page
//!
//! Disconnected: the wallet connection panel. Connected: account picker,
//! balance warning and the greeting board.

use leptos::prelude::*;

use shared::utils::format_balance;

use crate::components::{AccountSelect, BalanceInsufficientAlert, GreeterPanel, WalletConnect};
use crate::state::balances::use_free_balance;
use crate::state::network::use_network_context;
use crate::state::session::ConnectionPhase;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn HomePage() -> impl IntoView {
    let network_ctx = use_network_context();
    let wallet_ctx = use_wallet_context();
    let balance = use_free_balance();

    view! {
        <div class="content">
            {move || match wallet_ctx.phase.get() {
                ConnectionPhase::Disconnected => view! { <WalletConnect/> }.into_any(),
                ConnectionPhase::Connecting => view! {
                    <div class="card">
                        <span class="spinner"></span>
                        <p>"Connecting wallet..."</p>
                    </div>
                }.into_any(),
                ConnectionPhase::Connected => view! {
                    <div class="dashboard">
                        <BalanceInsufficientAlert balance=balance/>
                        {move || balance.get().map(|raw| {
                            let network = network_ctx.network();
                            view! {
                                <p class="balance-line">
                                    "Free balance: "
                                    {format_balance(raw, network.decimals, &network.symbol)}
                                </p>
                            }
                        })}
                        <AccountSelect/>
                        <GreeterPanel/>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
