//! Wallet session state machine
//!
//! Owns the "currently connected wallet" and "currently selected account"
//! state, persisted across reloads. The machine itself is synchronous; the
//! asynchronous connection flow (readiness wait, enablement, account
//! subscription) lives in [`crate::state::wallet`] and drives it through the
//! transition calls below.
//!
//! Every connection attempt gets an epoch. Account deliveries and completion
//! callbacks carry the epoch they were started under and are ignored when it
//! is no longer current, which makes late subscription events after sign-out
//! or reconnection inert without explicit cancellation.

use std::cell::RefCell;
use std::rc::Rc;

use shared::InjectedAccount;

use crate::error::{DappError, Result};
use crate::services::storage::KvStore;
use crate::utils::constants::{CONNECTED_WALLET_KEY, SELECTED_ACCOUNT_KEY};
use crate::wallets::registry::WalletRegistry;

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionPhase {
    Disconnected,
    Connecting,
    Connected,
}

/// Point-in-time view of the session, published to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub phase: ConnectionPhase,
    pub connected_wallet_id: Option<String>,
    pub accounts: Vec<InjectedAccount>,
    pub selected_account: Option<InjectedAccount>,
}

struct SessionInner<S> {
    store: S,
    phase: ConnectionPhase,
    connected_wallet_id: Option<String>,
    accounts: Vec<InjectedAccount>,
    selected_account: Option<InjectedAccount>,
    epoch: u64,
    listeners: Vec<Box<dyn Fn(&SessionSnapshot)>>,
}

pub struct WalletSession<S> {
    inner: Rc<RefCell<SessionInner<S>>>,
}

impl<S> Clone for WalletSession<S> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<S: KvStore> WalletSession<S> {
    /// Create the session, restoring any persisted connection id and
    /// selected account.
    pub fn new(store: S) -> Self {
        let connected_wallet_id = store.get(CONNECTED_WALLET_KEY);
        let selected_account = store
            .get(SELECTED_ACCOUNT_KEY)
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(account) => Some(account),
                Err(e) => {
                    log::warn!("discarding unreadable persisted account: {e}");
                    None
                }
            });

        Self {
            inner: Rc::new(RefCell::new(SessionInner {
                store,
                phase: ConnectionPhase::Disconnected,
                connected_wallet_id,
                accounts: Vec::new(),
                selected_account,
                epoch: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let inner = self.inner.borrow();
        SessionSnapshot {
            phase: inner.phase,
            connected_wallet_id: inner.connected_wallet_id.clone(),
            accounts: inner.accounts.clone(),
            selected_account: inner.selected_account.clone(),
        }
    }

    pub fn connected_wallet_id(&self) -> Option<String> {
        self.inner.borrow().connected_wallet_id.clone()
    }

    pub fn current_epoch(&self) -> u64 {
        self.inner.borrow().epoch
    }

    pub fn on_change(&self, listener: impl Fn(&SessionSnapshot) + 'static) {
        self.inner.borrow_mut().listeners.push(Box::new(listener));
    }

    /// Select a wallet to connect. The id is validated against the registry
    /// before anything is persisted: an unknown id fails immediately and
    /// leaves both in-memory and persisted state untouched.
    pub fn begin_connect<H: Clone>(
        &self,
        id: &str,
        registry: &WalletRegistry<H>,
    ) -> Result<()> {
        if !registry.contains(id) {
            return Err(DappError::UnknownWalletId(id.to_string()));
        }

        {
            let mut inner = self.inner.borrow_mut();
            inner.store.set(CONNECTED_WALLET_KEY, id);
            inner.connected_wallet_id = Some(id.to_string());
        }
        self.notify();
        Ok(())
    }

    /// Start a connection attempt for the current wallet id and return the
    /// attempt's epoch. Called by the connection effect on every id change
    /// (including the restored id after a reload).
    pub fn start_attempt(&self, id: &str) -> u64 {
        let epoch = {
            let mut inner = self.inner.borrow_mut();
            inner.connected_wallet_id = Some(id.to_string());
            inner.phase = ConnectionPhase::Connecting;
            inner.epoch += 1;
            inner.epoch
        };
        self.notify();
        epoch
    }

    /// Enablement and subscription succeeded. Ignored when the attempt is no
    /// longer current.
    pub fn connection_established(&self, epoch: u64) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.epoch != epoch {
                return false;
            }
            inner.phase = ConnectionPhase::Connected;
        }
        self.notify();
        true
    }

    /// The connection attempt failed. When the attempt is still current the
    /// persisted connection id is cleared and the session returns to
    /// `Disconnected`; the caller surfaces the error to the user. Returns
    /// whether the failure applied.
    pub fn connection_failed(&self, epoch: u64) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.epoch != epoch {
                return false;
            }
            inner.store.remove(CONNECTED_WALLET_KEY);
            inner.connected_wallet_id = None;
            inner.phase = ConnectionPhase::Disconnected;
            inner.accounts.clear();
            // A straggling subscription from this attempt must find a stale
            // epoch.
            inner.epoch += 1;
        }
        self.notify();
        true
    }

    /// Replace the published account list with a fresh delivery from the
    /// provider subscription. Last write wins; deliveries from a stale epoch
    /// are dropped. Returns whether the delivery was applied.
    pub fn publish_accounts(&self, epoch: u64, accounts: Vec<InjectedAccount>) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.epoch != epoch {
                return false;
            }
            inner.accounts = accounts;
        }
        self.notify();
        true
    }

    /// Persist the user's account choice.
    ///
    /// The selection is stored as-is and deliberately not checked against
    /// the published account list: a reconnect may publish a different set
    /// while the stored selection stays what the user last picked.
    pub fn set_selected_account(&self, account: InjectedAccount) {
        {
            let mut inner = self.inner.borrow_mut();
            match serde_json::to_string(&account) {
                Ok(raw) => inner.store.set(SELECTED_ACCOUNT_KEY, &raw),
                Err(e) => log::warn!("failed to persist selected account: {e}"),
            }
            inner.selected_account = Some(account);
        }
        self.notify();
    }

    /// Explicit sign-out: both persisted keys are cleared and any live
    /// subscription becomes inert.
    pub fn sign_out(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.store.remove(CONNECTED_WALLET_KEY);
            inner.store.remove(SELECTED_ACCOUNT_KEY);
            inner.connected_wallet_id = None;
            inner.selected_account = None;
            inner.accounts.clear();
            inner.phase = ConnectionPhase::Disconnected;
            inner.epoch += 1;
        }
        self.notify();
    }

    /// The connection effect observed an empty wallet id: make sure the
    /// phase reflects it. The selected account survives, matching sign-out
    /// being the only path that clears it.
    pub fn detach(&self) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let changed = inner.phase != ConnectionPhase::Disconnected;
            inner.phase = ConnectionPhase::Disconnected;
            changed
        };
        if changed {
            self.notify();
        }
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        let inner = self.inner.borrow();
        for listener in &inner.listeners {
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MemoryStore;
    use crate::wallets::known_wallets;

    fn account(address: &str) -> InjectedAccount {
        InjectedAccount {
            address: address.to_string(),
            name: None,
            genesis_hash: None,
            key_type: None,
        }
    }

    fn registry() -> WalletRegistry<()> {
        WalletRegistry::new(known_wallets())
    }

    #[test]
    fn unknown_wallet_id_fails_without_touching_state() {
        let store = MemoryStore::new();
        store.set(CONNECTED_WALLET_KEY, "talisman");
        let session = WalletSession::new(store.clone());

        let err = session.begin_connect("metamask", &registry()).unwrap_err();
        assert_eq!(err, DappError::UnknownWalletId("metamask".into()));
        assert_eq!(store.get(CONNECTED_WALLET_KEY), Some("talisman".into()));
        assert_eq!(session.connected_wallet_id(), Some("talisman".into()));
    }

    #[test]
    fn begin_connect_persists_the_id() {
        let store = MemoryStore::new();
        let session = WalletSession::new(store.clone());

        session.begin_connect("subwallet-js", &registry()).unwrap();
        assert_eq!(store.get(CONNECTED_WALLET_KEY), Some("subwallet-js".into()));
        assert_eq!(session.connected_wallet_id(), Some("subwallet-js".into()));
    }

    #[test]
    fn restores_persisted_session() {
        let store = MemoryStore::new();
        store.set(CONNECTED_WALLET_KEY, "talisman");
        store.set(SELECTED_ACCOUNT_KEY, r#"{"address": "5Addr1", "name": "dev"}"#);

        let session = WalletSession::new(store);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.connected_wallet_id, Some("talisman".into()));
        let mut expected = account("5Addr1");
        expected.name = Some("dev".into());
        assert_eq!(snapshot.selected_account, Some(expected));
        assert_eq!(snapshot.phase, ConnectionPhase::Disconnected);
    }

    #[test]
    fn unreadable_persisted_account_is_discarded() {
        let store = MemoryStore::new();
        store.set(SELECTED_ACCOUNT_KEY, "not json at all");
        let session = WalletSession::new(store);
        assert_eq!(session.snapshot().selected_account, None);
    }

    #[test]
    fn account_deliveries_are_last_write_wins() {
        let session = WalletSession::new(MemoryStore::new());
        session.begin_connect("subwallet-js", &registry()).unwrap();
        let epoch = session.start_attempt("subwallet-js");

        assert!(session.publish_accounts(epoch, vec![account("5Addr1")]));
        assert!(session.publish_accounts(epoch, vec![account("5Addr2"), account("5Addr3")]));

        let snapshot = session.snapshot();
        assert_eq!(snapshot.accounts.len(), 2);
        assert_eq!(snapshot.accounts[0].address, "5Addr2");
    }

    #[test]
    fn connection_failure_clears_persisted_id() {
        let store = MemoryStore::new();
        let session = WalletSession::new(store.clone());
        session.begin_connect("talisman", &registry()).unwrap();
        let epoch = session.start_attempt("talisman");

        assert!(session.connection_failed(epoch));
        assert_eq!(store.get(CONNECTED_WALLET_KEY), None);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, ConnectionPhase::Disconnected);
        assert_eq!(snapshot.connected_wallet_id, None);
    }

    #[test]
    fn stale_attempt_outcomes_are_ignored() {
        let session = WalletSession::new(MemoryStore::new());
        session.begin_connect("talisman", &registry()).unwrap();
        let first = session.start_attempt("talisman");
        let second = session.start_attempt("talisman");

        // The first attempt settles late, after a newer attempt started.
        assert!(!session.connection_established(first));
        assert!(!session.connection_failed(first));
        assert_eq!(session.snapshot().phase, ConnectionPhase::Connecting);

        assert!(session.connection_established(second));
        assert_eq!(session.snapshot().phase, ConnectionPhase::Connected);
    }

    #[test]
    fn sign_out_clears_everything_and_mutes_the_subscription() {
        let store = MemoryStore::new();
        let session = WalletSession::new(store.clone());
        session.begin_connect("subwallet-js", &registry()).unwrap();
        let epoch = session.start_attempt("subwallet-js");
        session.connection_established(epoch);
        session.publish_accounts(epoch, vec![account("5Addr1")]);
        session.set_selected_account(account("5Addr1"));

        session.sign_out();

        assert_eq!(store.get(CONNECTED_WALLET_KEY), None);
        assert_eq!(store.get(SELECTED_ACCOUNT_KEY), None);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, ConnectionPhase::Disconnected);
        assert!(snapshot.accounts.is_empty());
        assert_eq!(snapshot.selected_account, None);

        // The old subscription callback firing late must change nothing.
        assert!(!session.publish_accounts(epoch, vec![account("5Addr9")]));
        assert!(session.snapshot().accounts.is_empty());
    }

    #[test]
    fn selected_account_is_not_validated_against_the_list() {
        let session = WalletSession::new(MemoryStore::new());
        session.begin_connect("talisman", &registry()).unwrap();
        let epoch = session.start_attempt("talisman");

        session.set_selected_account(account("5Elsewhere"));
        session.publish_accounts(epoch, vec![account("5Addr1")]);

        // The stored selection survives even though the wallet never
        // published it.
        assert_eq!(
            session.snapshot().selected_account,
            Some(account("5Elsewhere"))
        );
    }

    #[test]
    fn selected_account_round_trips_through_storage() {
        let store = MemoryStore::new();
        {
            let session = WalletSession::new(store.clone());
            let mut chosen = account("5Addr1");
            chosen.name = Some("stash".into());
            session.set_selected_account(chosen);
        }

        let reloaded = WalletSession::new(store);
        let selected = reloaded.snapshot().selected_account.expect("restored");
        assert_eq!(selected.address, "5Addr1");
        assert_eq!(selected.name.as_deref(), Some("stash"));
    }

    #[test]
    fn listeners_receive_snapshots() {
        use std::cell::RefCell;

        let session = WalletSession::new(MemoryStore::new());
        let phases = Rc::new(RefCell::new(Vec::new()));
        let phases_cb = Rc::clone(&phases);
        session.on_change(move |snapshot| phases_cb.borrow_mut().push(snapshot.phase));

        session.begin_connect("talisman", &registry()).unwrap();
        let epoch = session.start_attempt("talisman");
        session.connection_established(epoch);
        session.sign_out();

        assert_eq!(
            *phases.borrow(),
            vec![
                ConnectionPhase::Disconnected, // begin_connect keeps the phase
                ConnectionPhase::Connecting,
                ConnectionPhase::Connected,
                ConnectionPhase::Disconnected,
            ]
        );
    }
}
