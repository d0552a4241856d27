//! Data types shared across the dapp.

pub mod account;
pub mod contract;
pub mod network;
pub mod tx;
