//! Common - Shared Types for the Token Faucet Contracts
//!
//! This package provides the asset ledger abstraction dispensed by the faucet
//! and the upgrade state machine shared by the faucet and its proxy admin.

pub mod asset;
pub mod upgrade;

pub use asset::{Asset, AssetInfo, TokenLedger};
pub use upgrade::{query_logic_pointer, LogicPointer, ProxyState, UpgradeError, UpgradeMode};
