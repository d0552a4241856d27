//! Wallet context
//!
//! Glues the wallet registry, the session machine and the extension interop
//! together behind one context: components read signals, the connection
//! effect below drives the asynchronous connect flow and tears down the
//! account subscription on every exit path.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use shared::InjectedAccount;

use crate::error::Result;
use crate::services::extension::{
    initialize_wallets, wait_until_ready, AccountSubscription, InjectedApi, InjectedExtension,
};
use crate::services::storage::{browser_store, KvStore};
use crate::state::session::{ConnectionPhase, WalletSession};
use crate::state::toasts::{use_toast_context, ToastContext};
use crate::utils::constants::APP_NAME;
use crate::wallets::registry::{WalletRegistry, WalletView};
use crate::wallets::known_wallets;

type SharedSession = WalletSession<Box<dyn KvStore>>;
type SharedSubscription = Rc<RefCell<Option<AccountSubscription>>>;

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    /// Every known wallet with its current readiness.
    pub wallets: RwSignal<Vec<WalletView>>,
    /// Live account list of the connected wallet.
    pub accounts: RwSignal<Vec<InjectedAccount>>,
    pub connected_wallet_id: RwSignal<Option<String>>,
    pub phase: RwSignal<ConnectionPhase>,
    pub selected_account: RwSignal<Option<InjectedAccount>>,
    injected_api: RwSignal<Option<InjectedApi>, LocalStorage>,
    registry: StoredValue<WalletRegistry<InjectedExtension>, LocalStorage>,
    session: StoredValue<SharedSession, LocalStorage>,
    subscription: StoredValue<SharedSubscription, LocalStorage>,
}

impl WalletContext {
    pub fn is_connected(&self) -> bool {
        self.phase.get() == ConnectionPhase::Connected
    }

    pub fn connected_wallet(&self) -> Option<WalletView> {
        let id = self.connected_wallet_id.get()?;
        self.wallets.with(|wallets| wallets.iter().find(|w| w.info.id == id).cloned())
    }

    /// Select a wallet to connect. Fails immediately on an id that is not in
    /// the registry, without touching persisted state.
    pub fn enable_wallet(&self, id: &str) -> Result<()> {
        let session = self.session.get_value();
        let registry = self.registry.get_value();
        session.begin_connect(id, &registry)
    }

    pub fn sign_out(&self) {
        self.session.get_value().sign_out();
    }

    pub fn set_selected_account(&self, account: InjectedAccount) {
        self.session.get_value().set_selected_account(account);
    }

    /// Signer of the enabled provider, for transaction submission.
    pub fn signer(&self) -> Option<JsValue> {
        self.injected_api.with(|api| api.as_ref().map(|a| a.signer()))
    }

    fn clear_connection_artifacts(&self) {
        // Dropping the handle unsubscribes the account callback.
        self.subscription.get_value().borrow_mut().take();
        self.injected_api.set(None);
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let toasts = use_toast_context();
    let registry: WalletRegistry<InjectedExtension> = WalletRegistry::new(known_wallets());
    let session: SharedSession = WalletSession::new(browser_store());

    let wallets = RwSignal::new(registry.snapshot());
    let restored = session.snapshot();
    let accounts = RwSignal::new(restored.accounts);
    let connected_wallet_id = RwSignal::new(restored.connected_wallet_id);
    let phase = RwSignal::new(restored.phase);
    let selected_account = RwSignal::new(restored.selected_account);

    registry.on_change(move |snapshot| wallets.set(snapshot.to_vec()));
    session.on_change(move |snapshot| {
        accounts.set(snapshot.accounts.clone());
        phase.set(snapshot.phase);
        selected_account.set(snapshot.selected_account.clone());
        // The connection effect keys off this signal; only propagate actual
        // id changes so an attempt does not retrigger itself.
        if connected_wallet_id.get_untracked() != snapshot.connected_wallet_id {
            connected_wallet_id.set(snapshot.connected_wallet_id.clone());
        }
    });

    initialize_wallets(&registry, &known_wallets());

    let ctx = WalletContext {
        wallets,
        accounts,
        connected_wallet_id,
        phase,
        selected_account,
        injected_api: RwSignal::new_local(None),
        registry: StoredValue::new_local(registry),
        session: StoredValue::new_local(session),
        subscription: StoredValue::new_local(Rc::new(RefCell::new(None))),
    };
    provide_context(ctx);

    // Re-runs on every connection-id change, including the id restored from
    // storage on the first run. Each run tears down whatever the previous
    // one established; staleness of in-flight attempts is handled by the
    // session epoch, not by cancellation.
    Effect::new(move |_| {
        let id = ctx.connected_wallet_id.get();
        ctx.clear_connection_artifacts();

        let session = ctx.session.get_value();
        match id {
            None => session.detach(),
            Some(id) => {
                let epoch = session.start_attempt(&id);
                leptos::task::spawn_local(connect_flow(ctx, toasts, id, epoch));
            }
        }
    });

    ctx
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}

async fn connect_flow(ctx: WalletContext, toasts: ToastContext, id: String, epoch: u64) {
    let session = ctx.session.get_value();

    match try_connect(&ctx, &session, &id, epoch).await {
        Ok((api, subscription)) => {
            if session.connection_established(epoch) {
                *ctx.subscription.get_value().borrow_mut() = Some(subscription);
                ctx.injected_api.set(Some(api));
                log::info!("wallet {id} connected");
            }
            // Otherwise the attempt went stale while enabling; dropping the
            // subscription here unsubscribes it before it can publish.
        }
        Err(e) => {
            log::error!("connecting {id} failed: {e}");
            if session.connection_failed(epoch) {
                toasts.error(e.to_string());
            }
        }
    }
}

async fn try_connect(
    ctx: &WalletContext,
    session: &SharedSession,
    id: &str,
    epoch: u64,
) -> Result<(InjectedApi, AccountSubscription)> {
    let registry = ctx.registry.get_value();
    let extension = wait_until_ready(&registry, id).await?;
    let api = extension.enable(APP_NAME).await?;

    let events = session.clone();
    let subscription = api.subscribe_accounts(move |accounts| {
        events.publish_accounts(epoch, accounts);
    })?;

    Ok((api, subscription))
}
