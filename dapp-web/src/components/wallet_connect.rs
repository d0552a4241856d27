//! Wallet connection panel
//!
//! One button per known wallet: connect when its extension is ready, an
//! install link when it is missing, disabled while probing is still under
//! way.

use leptos::prelude::*;

use crate::state::wallet::use_wallet_context;
use crate::wallets::WalletStatus;

#[component]
pub fn WalletConnect() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    view! {
        <div class="card connect-card">
            <h2>"Connect Wallet"</h2>
            <p class="subtitle">"Select a wallet to connect"</p>
            <div class="wallet-list">
                {move || wallet_ctx.wallets.get().into_iter().map(|wallet| {
                    let name = wallet.info.name.clone();
                    let logo = wallet.info.logo.clone();

                    match wallet.status {
                        WalletStatus::Ready => {
                            let id = wallet.info.id.clone();
                            view! {
                                <button
                                    class="wallet-button"
                                    on:click=move |_| {
                                        if let Err(e) = wallet_ctx.enable_wallet(&id) {
                                            log::error!("{e}");
                                        }
                                    }
                                >
                                    <img src=logo alt=name.clone()/>
                                    <span class="wallet-name">{name.clone()}</span>
                                    <span class="wallet-cta">"→"</span>
                                </button>
                            }.into_any()
                        }
                        WalletStatus::Pending => view! {
                            <button class="wallet-button" disabled=true>
                                <img src=logo alt=name.clone()/>
                                <span class="wallet-name">{name.clone()}</span>
                                <span class="wallet-cta muted">"Detecting..."</span>
                            </button>
                        }.into_any(),
                        WalletStatus::Unavailable(_) => {
                            let install_url = wallet.info.install_url.clone();
                            view! {
                                <a
                                    class="wallet-button wallet-missing"
                                    href=install_url
                                    target="_blank"
                                    rel="noreferrer"
                                >
                                    <img src=logo alt=name.clone()/>
                                    <span class="wallet-name">{name.clone()}</span>
                                    <span class="wallet-cta">"Install"</span>
                                </a>
                            }.into_any()
                        }
                    }
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
