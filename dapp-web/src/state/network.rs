//! Network context
//!
//! Supplies the active network descriptor, the chain client handle and a
//! readiness flag. Switching networks disconnects the old client and builds
//! a fresh one; a switch racing a slow connect wins by id comparison.

use leptos::prelude::*;

use shared::NetworkInfo;

use crate::services::client::{create_chain_client, ChainClient};
use crate::state::toasts::use_toast_context;
use crate::utils::networks::{default_network, network_by_id};
use crate::utils::url::get_query_param;

/// Global network context
#[derive(Clone, Copy)]
pub struct NetworkContext {
    pub network_id: RwSignal<String>,
    /// True once the chain client for the active network is up.
    pub ready: RwSignal<bool>,
    client: RwSignal<Option<ChainClient>, LocalStorage>,
}

impl NetworkContext {
    /// Descriptor of the active network.
    pub fn network(&self) -> NetworkInfo {
        self.network_id
            .with(|id| network_by_id(id))
            .unwrap_or_else(default_network)
    }

    pub fn client(&self) -> Option<ChainClient> {
        self.client.get()
    }

    pub fn set_network_id(&self, id: &str) {
        if network_by_id(id).is_none() {
            log::error!("ignoring unknown network id {id}");
            return;
        }
        if self.network_id.get_untracked() != id {
            self.network_id.set(id.to_string());
        }
    }
}

pub fn provide_network_context() -> NetworkContext {
    // `?network=<id>` pre-selects a supported network; anything else falls
    // back to the default.
    let initial = get_query_param("network")
        .and_then(|id| network_by_id(&id))
        .unwrap_or_else(default_network);

    let ctx = NetworkContext {
        network_id: RwSignal::new(initial.id),
        ready: RwSignal::new(false),
        client: RwSignal::new_local(None),
    };
    provide_context(ctx);

    let toasts = use_toast_context();
    Effect::new(move |_| {
        let id = ctx.network_id.get();
        let Some(network) = network_by_id(&id) else {
            return;
        };

        if let Some(previous) = ctx.client.get_untracked() {
            leptos::task::spawn_local(async move { previous.disconnect().await });
        }
        ctx.ready.set(false);
        ctx.client.set(None);

        leptos::task::spawn_local(async move {
            match create_chain_client(&network).await {
                Ok(client) => {
                    if ctx.network_id.get_untracked() == network.id {
                        log::info!("chain client ready on {}", network.id);
                        ctx.client.set(Some(client));
                        ctx.ready.set(true);
                    } else {
                        // The user switched away while we were connecting.
                        client.disconnect().await;
                    }
                }
                Err(e) => {
                    log::error!("failed to reach {}: {e}", network.id);
                    toasts.error(format!("Failed to connect to {}", network.name));
                }
            }
        });
    });

    ctx
}

pub fn use_network_context() -> NetworkContext {
    expect_context::<NetworkContext>()
}
