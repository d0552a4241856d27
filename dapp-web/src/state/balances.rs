//! Free-balance lookup for the selected account
//!
//! `None` while unresolved (no client, no account, query in flight); a
//! definite value once the query lands and still matches the current
//! account and network.

use leptos::prelude::*;

use crate::services::client::query_free_balance;
use crate::state::network::use_network_context;
use crate::state::wallet::use_wallet_context;

pub fn use_free_balance() -> RwSignal<Option<u128>> {
    let network_ctx = use_network_context();
    let wallet_ctx = use_wallet_context();
    let balance = RwSignal::new(None::<u128>);

    Effect::new(move |_| {
        let client = network_ctx.client();
        let address = wallet_ctx.selected_account.get().map(|a| a.address);
        balance.set(None);

        let (Some(client), Some(address)) = (client, address) else {
            return;
        };

        leptos::task::spawn_local(async move {
            match query_free_balance(&client, &address).await {
                Ok(value) => {
                    let same_account = wallet_ctx
                        .selected_account
                        .get_untracked()
                        .is_some_and(|a| a.address == address);
                    let same_network =
                        network_ctx.network_id.get_untracked() == client.network_id();
                    if same_account && same_network {
                        balance.set(Some(value));
                    }
                }
                Err(e) => log::warn!("balance query for {address} failed: {e}"),
            }
        });
    });

    balance
}
