//! Token Faucet Contract - Upgradeable Test Token Dispenser
//!
//! Any wallet can claim a fixed, owner-configured amount of each supported
//! token, at most once per cooldown window per token. The owner configures
//! the token amounts and the cooldown, can drain balances and can hand the
//! role over.
//!
//! # Upgrades
//! The contract address and its storage are stable; the code installed at the
//! address is replaced through chain-level migration. One of two modes is
//! fixed at instantiation:
//!
//! - **Transparent**: a proxy admin contract is the chain-level admin and the
//!   only principal able to migrate. Its calls into the faucet are intercepted
//!   and can only change the recorded proxy admin.
//! - **Self-governed**: the contract is its own chain-level admin and the
//!   owner migrates it with `UpgradeTo`. Migrating to code that lacks
//!   `UpgradeTo` freezes the contract on that code permanently; there is no
//!   recovery path.
//!
//! Migration never reinitializes state unless the migrate message carries an
//! initialization call, and a failing initialization aborts the migration.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
