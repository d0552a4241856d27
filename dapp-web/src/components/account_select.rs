//! Account picker for the connected wallet

use leptos::prelude::*;

use shared::utils::truncate_address;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn AccountSelect() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    view! {
        <div class="card">
            <h3>"Accounts"</h3>
            {move || {
                let accounts = wallet_ctx.accounts.get();
                if accounts.is_empty() {
                    return view! {
                        <p class="muted">
                            "No accounts authorized. Create or expose one in the wallet extension."
                        </p>
                    }.into_any();
                }

                view! {
                    <ul class="account-list">
                        {accounts.into_iter().map(|account| {
                            let selected = wallet_ctx
                                .selected_account
                                .get()
                                .is_some_and(|a| a.address == account.address);
                            let pick = account.clone();

                            view! {
                                <li>
                                    <button
                                        class=if selected { "account-item selected" } else { "account-item" }
                                        on:click=move |_| wallet_ctx.set_selected_account(pick.clone())
                                    >
                                        <span class="account-name">
                                            {account.display_name().to_string()}
                                        </span>
                                        <span class="account-address">
                                            {truncate_address(&account.address)}
                                        </span>
                                    </button>
                                </li>
                            }
                        }).collect::<Vec<_>>()}
                    </ul>
                }.into_any()
            }}
        </div>
    }
}
