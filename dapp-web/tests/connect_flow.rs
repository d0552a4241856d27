//! Connection-flow scenarios across the registry, the session machine and
//! persisted storage, driven the way the browser layer drives them.

use dapp_web::error::DappError;
use dapp_web::services::storage::{KvStore, MemoryStore};
use dapp_web::state::session::{ConnectionPhase, WalletSession};
use dapp_web::utils::constants::{CONNECTED_WALLET_KEY, SELECTED_ACCOUNT_KEY};
use dapp_web::wallets::registry::WalletRegistry;
use dapp_web::wallets::{known_wallets, WalletStatus};

use shared::InjectedAccount;

fn account(address: &str) -> InjectedAccount {
    InjectedAccount {
        address: address.to_string(),
        name: None,
        genesis_hash: None,
        key_type: None,
    }
}

/// Wallet A initializes, wallet B rejects: A is ready, B records the reason,
/// nothing escapes and the other wallets are untouched.
#[test]
fn isolated_initialization_outcomes() {
    let registry: WalletRegistry<()> = WalletRegistry::new(known_wallets());

    registry.mark_ready("subwallet-js", ()).unwrap();
    registry
        .mark_unavailable("talisman", "probe rejected")
        .unwrap();

    assert_eq!(registry.status("subwallet-js"), Some(WalletStatus::Ready));
    assert_eq!(
        registry.status("talisman"),
        Some(WalletStatus::Unavailable("probe rejected".into()))
    );
    assert_eq!(registry.status("polkadot-js"), Some(WalletStatus::Pending));
}

/// Unknown ids fail fast and leave the persisted session alone.
#[test]
fn unknown_wallet_id_is_rejected_up_front() {
    let registry: WalletRegistry<()> = WalletRegistry::new(known_wallets());
    let store = MemoryStore::new();
    let session = WalletSession::new(store.clone());

    let err = session.begin_connect("metamask", &registry).unwrap_err();
    assert!(matches!(err, DappError::UnknownWalletId(_)));
    assert_eq!(store.get(CONNECTED_WALLET_KEY), None);
    assert_eq!(session.snapshot().phase, ConnectionPhase::Disconnected);
}

/// The full happy path: select, connect, receive accounts, reload, sign out.
#[test]
fn connect_reload_and_sign_out() {
    let registry: WalletRegistry<()> = WalletRegistry::new(known_wallets());
    let store = MemoryStore::new();

    // First page load: the user picks SubWallet and the flow succeeds.
    {
        let session = WalletSession::new(store.clone());
        session.begin_connect("subwallet-js", &registry).unwrap();
        let epoch = session.start_attempt("subwallet-js");
        assert!(session.publish_accounts(epoch, vec![account("5Addr1")]));
        assert!(session.connection_established(epoch));
        session.set_selected_account(account("5Addr1"));

        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, ConnectionPhase::Connected);
        assert_eq!(snapshot.accounts.len(), 1);
    }

    // Reload: both halves of the session come back from storage.
    let session = WalletSession::new(store.clone());
    let snapshot = session.snapshot();
    assert_eq!(snapshot.connected_wallet_id, Some("subwallet-js".into()));
    assert_eq!(
        snapshot.selected_account.map(|a| a.address),
        Some("5Addr1".into())
    );

    // Sign out: everything persisted is gone.
    session.sign_out();
    assert_eq!(store.get(CONNECTED_WALLET_KEY), None);
    assert_eq!(store.get(SELECTED_ACCOUNT_KEY), None);
}

/// A late subscription event from a torn-down connection must not alter the
/// published accounts.
#[test]
fn late_subscription_event_is_inert() {
    let registry: WalletRegistry<()> = WalletRegistry::new(known_wallets());
    let session = WalletSession::new(MemoryStore::new());

    session.begin_connect("subwallet-js", &registry).unwrap();
    let epoch = session.start_attempt("subwallet-js");
    session.connection_established(epoch);
    assert!(session.publish_accounts(epoch, vec![account("5Addr1")]));

    // The connection id is cleared (failure path used here); afterwards the
    // old callback fires once more.
    let epoch2 = session.start_attempt("subwallet-js");
    session.connection_failed(epoch2);
    assert!(!session.publish_accounts(epoch, vec![account("5AddrLate")]));
    assert!(session.snapshot().accounts.is_empty());
}

/// A wallet-switch mid-flight: the first wallet's enablement settles after
/// the user already picked another one.
#[test]
fn switching_wallets_invalidates_the_previous_attempt() {
    let registry: WalletRegistry<()> = WalletRegistry::new(known_wallets());
    let store = MemoryStore::new();
    let session = WalletSession::new(store.clone());

    session.begin_connect("talisman", &registry).unwrap();
    let first = session.start_attempt("talisman");

    session.begin_connect("subwallet-js", &registry).unwrap();
    let second = session.start_attempt("subwallet-js");

    // The stale attempt reports in both orders; neither applies.
    assert!(!session.connection_established(first));
    assert!(!session.publish_accounts(first, vec![account("5Old")]));

    assert!(session.publish_accounts(second, vec![account("5New")]));
    assert!(session.connection_established(second));

    let snapshot = session.snapshot();
    assert_eq!(snapshot.connected_wallet_id, Some("subwallet-js".into()));
    assert_eq!(snapshot.accounts[0].address, "5New");
    assert_eq!(store.get(CONNECTED_WALLET_KEY), Some("subwallet-js".into()));
}

/// A failure of the current attempt clears persistence but an already
/// superseded failure does not.
#[test]
fn only_the_current_attempt_can_fail_the_session() {
    let registry: WalletRegistry<()> = WalletRegistry::new(known_wallets());
    let store = MemoryStore::new();
    let session = WalletSession::new(store.clone());

    session.begin_connect("talisman", &registry).unwrap();
    let first = session.start_attempt("talisman");
    let second = session.start_attempt("talisman");

    assert!(!session.connection_failed(first));
    assert_eq!(store.get(CONNECTED_WALLET_KEY), Some("talisman".into()));

    assert!(session.connection_failed(second));
    assert_eq!(store.get(CONNECTED_WALLET_KEY), None);
}
