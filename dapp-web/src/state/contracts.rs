//! Reactive contract instances
//!
//! A contract handle exists exactly while a client, metadata and an address
//! are all present; whenever any of the three changes the old instance is
//! dropped and a fresh one is built. Hosted metadata is fetched before
//! instantiation.

use gloo_net::http::Request;
use leptos::prelude::*;

use shared::{ContractDeployment, MetadataSource};

use crate::error::{DappError, Result};
use crate::services::client::{instantiate_contract, ChainClient, ContractHandle};
use crate::state::network::use_network_context;

/// Reactive handle over the deployment's contract instance on the active
/// network. `None` while inputs are missing or instantiation is in flight.
pub fn use_contract(
    deployment: Memo<Option<ContractDeployment>>,
) -> RwSignal<Option<ContractHandle>, LocalStorage> {
    let network_ctx = use_network_context();
    let contract = RwSignal::new_local(None::<ContractHandle>);

    Effect::new(move |_| {
        let client = network_ctx.client();
        let current = deployment.get();
        contract.set(None);

        let (Some(client), Some(current)) = (client, current) else {
            return;
        };

        leptos::task::spawn_local(async move {
            match build_contract(&client, &current).await {
                Ok(handle) => {
                    // A deployment change while instantiating wins.
                    if deployment.get_untracked().as_ref() == Some(&current) {
                        contract.set(Some(handle));
                    }
                }
                Err(e) => log::error!("contract {} unavailable: {e}", current.id),
            }
        });
    });

    contract
}

async fn build_contract(
    client: &ChainClient,
    deployment: &ContractDeployment,
) -> Result<ContractHandle> {
    let metadata = resolve_metadata(&deployment.metadata).await?;
    instantiate_contract(client, &metadata, &deployment.address).await
}

async fn resolve_metadata(source: &MetadataSource) -> Result<String> {
    match source {
        MetadataSource::Inline(value) => Ok(value.to_string()),
        MetadataSource::Reference(reference) if source.is_url() => {
            let response = Request::get(reference)
                .send()
                .await
                .map_err(|e| DappError::Client(e.to_string()))?;
            if !response.ok() {
                return Err(DappError::Client(format!(
                    "metadata fetch failed with status {}",
                    response.status()
                )));
            }
            response
                .text()
                .await
                .map_err(|e| DappError::Client(e.to_string()))
        }
        // A raw metadata string passes straight through.
        MetadataSource::Reference(raw) => Ok(raw.clone()),
    }
}
