//! Injected wallet extension interop
//!
//! Substrate wallet extensions register themselves under
//! `window.injectedWeb3[id]` once the page loads. This module probes those
//! entries, drives enablement, and wraps the enabled provider's account
//! subscription in a handle that unsubscribes on drop.

use gloo_timers::future::TimeoutFuture;
use js_sys::Function;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use shared::InjectedAccount;

use crate::error::{DappError, Result};
use crate::services::js_error_message;
use crate::utils::constants::{WALLET_PROBE_INTERVAL_MS, WALLET_READY_TIMEOUT_MS};
use crate::wallets::registry::WalletRegistry;
use crate::wallets::{WalletInfo, WalletStatus};

#[wasm_bindgen(inline_js = "
export function getInjectedExtension(id) {
    const injected = window.injectedWeb3;
    return (injected && injected[id]) || null;
}

export async function enableExtension(extension, appName) {
    if (!extension || typeof extension.enable !== 'function') {
        throw new Error('wallet extension does not expose enable()');
    }
    return await extension.enable(appName);
}

export function subscribeExtensionAccounts(injectedApi, callback) {
    if (!injectedApi || !injectedApi.accounts || typeof injectedApi.accounts.subscribe !== 'function') {
        throw new Error('injected api does not expose accounts.subscribe()');
    }
    return injectedApi.accounts.subscribe((accounts) => callback(accounts));
}
")]
extern "C" {
    #[wasm_bindgen(js_name = getInjectedExtension)]
    fn get_injected_extension(id: &str) -> Option<JsValue>;

    #[wasm_bindgen(js_name = enableExtension, catch)]
    async fn enable_extension(extension: &JsValue, app_name: &str) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = subscribeExtensionAccounts, catch)]
    fn subscribe_extension_accounts(
        injected_api: &JsValue,
        callback: &Function,
    ) -> std::result::Result<Function, JsValue>;
}

/// Handle on one entry of `window.injectedWeb3`, captured at probe time.
#[derive(Clone)]
pub struct InjectedExtension {
    raw: JsValue,
}

impl InjectedExtension {
    /// Ask the extension to authorize this app. Rejection (by the user or
    /// the extension itself) surfaces as [`DappError::EnableRejected`].
    pub async fn enable(&self, app_name: &str) -> Result<InjectedApi> {
        let raw = enable_extension(&self.raw, app_name)
            .await
            .map_err(|e| DappError::EnableRejected(js_error_message(&e)))?;
        Ok(InjectedApi { raw })
    }
}

/// The provider API an extension exposes once enabled.
#[derive(Clone)]
pub struct InjectedApi {
    raw: JsValue,
}

impl InjectedApi {
    /// The signer object, forwarded to the chain client when submitting.
    pub fn signer(&self) -> JsValue {
        js_sys::Reflect::get(&self.raw, &JsValue::from_str("signer"))
            .unwrap_or(JsValue::UNDEFINED)
    }

    /// Subscribe to the provider's live account list. Every delivery
    /// replaces the whole list. Dropping the returned handle unsubscribes.
    pub fn subscribe_accounts(
        &self,
        mut on_accounts: impl FnMut(Vec<InjectedAccount>) + 'static,
    ) -> Result<AccountSubscription> {
        let callback = Closure::wrap(Box::new(move |value: JsValue| {
            match serde_wasm_bindgen::from_value::<Vec<InjectedAccount>>(value) {
                Ok(accounts) => on_accounts(accounts),
                Err(e) => log::warn!("malformed account list from extension: {e}"),
            }
        }) as Box<dyn FnMut(JsValue)>);

        let unsubscribe = subscribe_extension_accounts(&self.raw, callback.as_ref().unchecked_ref())
            .map_err(|e| DappError::EnableRejected(js_error_message(&e)))?;

        Ok(AccountSubscription { unsubscribe, _callback: callback })
    }
}

/// Live account subscription; released deterministically on drop, whichever
/// path tears the connection down.
pub struct AccountSubscription {
    unsubscribe: Function,
    _callback: Closure<dyn FnMut(JsValue)>,
}

impl Drop for AccountSubscription {
    fn drop(&mut self) {
        if let Err(e) = self.unsubscribe.call0(&JsValue::NULL) {
            log::warn!("account unsubscribe failed: {}", js_error_message(&e));
        }
    }
}

/// Probe for every known wallet concurrently. Each wallet gets its own task
/// and its own outcome; one extension failing to show up never blocks or
/// fails the others.
pub fn initialize_wallets(registry: &WalletRegistry<InjectedExtension>, wallets: &[WalletInfo]) {
    for wallet in wallets {
        let registry = registry.clone();
        let id = wallet.id.clone();
        leptos::task::spawn_local(async move {
            let outcome = match probe_until_found(&id).await {
                Some(extension) => {
                    log::info!("wallet {id} is ready");
                    registry.mark_ready(&id, extension)
                }
                None => {
                    log::warn!("wallet {id}: extension not detected");
                    registry.mark_unavailable(&id, "extension not detected")
                }
            };
            if let Err(e) = outcome {
                log::error!("wallet {id}: {e}");
            }
        });
    }
}

/// Wait for a wallet to finish probing and hand out its extension handle.
/// Used by the connection flow, which may start (e.g. from a restored
/// session) before probing has settled.
pub async fn wait_until_ready(
    registry: &WalletRegistry<InjectedExtension>,
    id: &str,
) -> Result<InjectedExtension> {
    if !registry.contains(id) {
        return Err(DappError::UnknownWalletId(id.to_string()));
    }

    let mut waited: u32 = 0;
    loop {
        match registry.status(id) {
            Some(WalletStatus::Ready) => {
                if let Some(extension) = registry.handle(id) {
                    return Ok(extension);
                }
            }
            Some(WalletStatus::Unavailable(reason)) => {
                return Err(DappError::WalletUnavailable(reason));
            }
            _ => {}
        }

        if waited >= WALLET_READY_TIMEOUT_MS {
            return Err(DappError::WalletUnavailable(format!(
                "{id} extension not detected"
            )));
        }
        TimeoutFuture::new(WALLET_PROBE_INTERVAL_MS).await;
        waited += WALLET_PROBE_INTERVAL_MS;
    }
}

/// Re-probe `window.injectedWeb3` until the extension shows up or the
/// readiness window closes. Extensions inject asynchronously after page
/// load, so a missing entry right away means nothing yet.
async fn probe_until_found(id: &str) -> Option<InjectedExtension> {
    let mut waited: u32 = 0;
    loop {
        if let Some(raw) = get_injected_extension(id) {
            return Some(InjectedExtension { raw });
        }
        if waited >= WALLET_READY_TIMEOUT_MS {
            return None;
        }
        TimeoutFuture::new(WALLET_PROBE_INTERVAL_MS).await;
        waited += WALLET_PROBE_INTERVAL_MS;
    }
}
