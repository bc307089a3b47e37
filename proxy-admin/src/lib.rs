//! Proxy Admin Contract - Transparent Upgrade Principal
//!
//! Set as the chain-level admin of transparent-mode faucets. Its owner swaps
//! the code installed at a faucet address with `Upgrade` or `UpgradeAndCall`
//! and can hand the admin role of a faucet to another principal.
//!
//! The proxy admin is never a faucet user: the faucet rejects every call it
//! makes except the admin change.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
