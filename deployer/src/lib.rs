//! Faucet Proxy Deployer - One-Shot Transparent Proxy Bootstrap
//!
//! Instantiating this contract deploys, in one transaction:
//! 1. a proxy admin owned by `admin_owner`
//! 2. a transparent-mode faucet whose chain-level admin is that proxy admin
//!
//! Both addresses are reported as attributes and through the `Deployment`
//! query. The deployer has no responsibilities afterwards.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
