//! Wallet registry
//!
//! An explicit reactive store over the known wallets: one owned record per
//! wallet id, mutated only through the transition calls below, with
//! subscribers receiving fresh list snapshots on every change. Consumers
//! never hold a live mutable wallet reference and never poll.
//!
//! The provider handle type is generic so the store can be exercised without
//! a browser: the app instantiates it with the injected extension handle,
//! tests with `()`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{DappError, Result};
use crate::wallets::{WalletInfo, WalletStatus};

/// Snapshot of one wallet's identity and readiness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletView {
    pub info: WalletInfo,
    pub status: WalletStatus,
}

struct WalletRecord<H> {
    info: WalletInfo,
    status: WalletStatus,
    handle: Option<H>,
}

struct RegistryInner<H> {
    records: Vec<WalletRecord<H>>,
    listeners: Vec<Box<dyn Fn(&[WalletView])>>,
}

pub struct WalletRegistry<H> {
    inner: Rc<RefCell<RegistryInner<H>>>,
}

impl<H> Clone for WalletRegistry<H> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<H: Clone> WalletRegistry<H> {
    pub fn new(wallets: Vec<WalletInfo>) -> Self {
        let records = wallets
            .into_iter()
            .map(|info| WalletRecord { info, status: WalletStatus::Pending, handle: None })
            .collect();

        Self {
            inner: Rc::new(RefCell::new(RegistryInner { records, listeners: Vec::new() })),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.borrow().records.iter().any(|r| r.info.id == id)
    }

    pub fn view(&self, id: &str) -> Option<WalletView> {
        self.inner
            .borrow()
            .records
            .iter()
            .find(|r| r.info.id == id)
            .map(|r| WalletView { info: r.info.clone(), status: r.status.clone() })
    }

    pub fn status(&self, id: &str) -> Option<WalletStatus> {
        self.view(id).map(|v| v.status)
    }

    /// Provider handle of a ready wallet.
    pub fn handle(&self, id: &str) -> Option<H> {
        self.inner
            .borrow()
            .records
            .iter()
            .find(|r| r.info.id == id)
            .and_then(|r| r.handle.clone())
    }

    /// Fresh snapshot of every record.
    pub fn snapshot(&self) -> Vec<WalletView> {
        self.inner
            .borrow()
            .records
            .iter()
            .map(|r| WalletView { info: r.info.clone(), status: r.status.clone() })
            .collect()
    }

    /// Record that a wallet's extension was detected. Touches nothing but
    /// this wallet's record.
    pub fn mark_ready(&self, id: &str, handle: H) -> Result<()> {
        self.transition(id, WalletStatus::Ready, Some(handle))
    }

    /// Record that a wallet's extension could not be detected, keeping the
    /// reason observable. Touches nothing but this wallet's record.
    pub fn mark_unavailable(&self, id: &str, reason: impl Into<String>) -> Result<()> {
        self.transition(id, WalletStatus::Unavailable(reason.into()), None)
    }

    /// Subscribe to list snapshots; the listener fires after every
    /// transition.
    pub fn on_change(&self, listener: impl Fn(&[WalletView]) + 'static) {
        self.inner.borrow_mut().listeners.push(Box::new(listener));
    }

    fn transition(&self, id: &str, status: WalletStatus, handle: Option<H>) -> Result<()> {
        {
            let mut inner = self.inner.borrow_mut();
            let record = inner
                .records
                .iter_mut()
                .find(|r| r.info.id == id)
                .ok_or_else(|| DappError::UnknownWalletId(id.to_string()))?;
            record.status = status;
            record.handle = handle;
        }

        self.notify();
        Ok(())
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
    use crate::wallets::known_wallets;
    use std::cell::Cell;

    fn registry() -> WalletRegistry<()> {
        WalletRegistry::new(known_wallets())
    }

    #[test]
    fn starts_with_every_wallet_pending() {
        let registry = registry();
        assert!(registry
            .snapshot()
            .iter()
            .all(|w| w.status == WalletStatus::Pending));
    }

    #[test]
    fn one_wallet_failing_never_touches_the_others() {
        let registry = registry();
        registry.mark_ready("subwallet-js", ()).unwrap();
        registry
            .mark_unavailable("talisman", "extension not detected")
            .unwrap();

        assert_eq!(registry.status("subwallet-js"), Some(WalletStatus::Ready));
        assert_eq!(
            registry.status("talisman"),
            Some(WalletStatus::Unavailable("extension not detected".into()))
        );
        assert_eq!(registry.status("polkadot-js"), Some(WalletStatus::Pending));
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let registry = registry();
        assert_eq!(
            registry.mark_ready("metamask", ()),
            Err(DappError::UnknownWalletId("metamask".into()))
        );
        assert!(registry.status("metamask").is_none());
        assert!(!registry.contains("metamask"));
    }

    #[test]
    fn listeners_observe_every_transition() {
        let registry = registry();
        let seen = Rc::new(Cell::new(0usize));
        let ready_in_last = Rc::new(Cell::new(0usize));

        let seen_cb = Rc::clone(&seen);
        let ready_cb = Rc::clone(&ready_in_last);
        registry.on_change(move |snapshot| {
            seen_cb.set(seen_cb.get() + 1);
            ready_cb.set(snapshot.iter().filter(|w| w.status.is_ready()).count());
        });

        registry.mark_ready("subwallet-js", ()).unwrap();
        registry.mark_ready("polkadot-js", ()).unwrap();
        registry.mark_unavailable("talisman", "nope").unwrap();

        assert_eq!(seen.get(), 3);
        assert_eq!(ready_in_last.get(), 2);
    }

    #[test]
    fn handle_is_available_once_ready() {
        let registry: WalletRegistry<u32> = WalletRegistry::new(known_wallets());
        assert_eq!(registry.handle("talisman"), None);
        registry.mark_ready("talisman", 7).unwrap();
        assert_eq!(registry.handle("talisman"), Some(7));
    }
}
