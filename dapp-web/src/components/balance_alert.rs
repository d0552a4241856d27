//! Balance-insufficient warning

use leptos::prelude::*;

use shared::NetworkInfo;

use crate::state::network::use_network_context;
use crate::utils::constants::DEFAULT_FAUCET_URL;

/// The warning shows only for a definite zero. An unresolved balance renders
/// nothing: we do not warn until we know.
fn balance_is_insufficient(balance: Option<u128>) -> bool {
    matches!(balance, Some(0))
}

fn faucet_url(network: &NetworkInfo) -> String {
    network
        .faucet_url
        .clone()
        .unwrap_or_else(|| DEFAULT_FAUCET_URL.to_string())
}

#[component]
pub fn BalanceInsufficientAlert(#[prop(into)] balance: Signal<Option<u128>>) -> impl IntoView {
    let network_ctx = use_network_context();

    view! {
        {move || balance_is_insufficient(balance.get()).then(|| {
            let network = network_ctx.network();
            view! {
                <div class="alert alert-warning">
                    <p class="alert-title">"Balance insufficient to make transactions"</p>
                    <a href=faucet_url(&network) target="_blank" rel="noreferrer">
                        "Claim some testnet token from the faucet now! ↗"
                    </a>
                </div>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warns_only_on_a_definite_zero() {
        assert!(!balance_is_insufficient(None));
        assert!(balance_is_insufficient(Some(0)));
        assert!(!balance_is_insufficient(Some(1)));
        assert!(!balance_is_insufficient(Some(u128::MAX)));
    }

    #[test]
    fn faucet_falls_back_to_the_default() {
        let mut network = crate::utils::networks::default_network();
        assert_eq!(faucet_url(&network), network.faucet_url.clone().unwrap());

        network.faucet_url = None;
        assert_eq!(faucet_url(&network), DEFAULT_FAUCET_URL);
    }
}
