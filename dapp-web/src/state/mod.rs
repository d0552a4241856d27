//! Application state: contexts and the stores behind them

pub mod balances;
pub mod contracts;
pub mod network;
pub mod session;
pub mod toasts;
pub mod wallet;
