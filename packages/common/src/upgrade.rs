//! Upgrade state shared by upgradeable logic and its proxy admin.
//!
//! The contract address and its storage are the stable proxy; the code id
//! installed at that address is the logic pointer. Who may swap the code id
//! is decided by the [`UpgradeMode`] chosen at deployment:
//!
//! - `Transparent`: a separate admin principal (the chain-level contract
//!   admin) performs migrations. Calls from that principal into the logic are
//!   intercepted and never reach ordinary operations.
//! - `SelfGoverned`: the contract is its own chain-level admin and the logic
//!   exposes an owner-gated upgrade operation that migrates itself.
//!
//! [`ProxyState`] tracks the lifecycle of the installed logic. `Upgrading`
//! only exists inside a single migrate call.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, QuerierWrapper, StdResult};
use thiserror::Error;

/// Upgrade authorization strategy, fixed per deployment
#[cw_serde]
pub enum UpgradeMode {
    /// Upgrades are performed by a distinct admin principal
    Transparent { admin: Addr },
    /// Upgrades are performed by the logic itself, gated by its owner
    SelfGoverned {},
}

impl UpgradeMode {
    pub fn name(&self) -> &'static str {
        match self {
            UpgradeMode::Transparent { .. } => "transparent",
            UpgradeMode::SelfGoverned {} => "self_governed",
        }
    }

    /// Returns true if `addr` is the transparent proxy admin.
    pub fn is_proxy_admin(&self, addr: &Addr) -> bool {
        matches!(self, UpgradeMode::Transparent { admin } if admin == addr)
    }
}

#[cw_serde]
pub enum ProxyState {
    Uninitialized,
    Active { version: String },
    Upgrading { from: String, to: String },
}

#[derive(Error, Debug, PartialEq)]
pub enum UpgradeError {
    #[error("Logic already initialized")]
    AlreadyInitialized,

    #[error("Logic not initialized")]
    NotInitialized,

    #[error("Upgrade already in progress: {from} -> {to}")]
    UpgradeInProgress { from: String, to: String },

    #[error("No upgrade in progress")]
    NotUpgrading,
}

impl ProxyState {
    pub fn initialize(self, version: impl Into<String>) -> Result<Self, UpgradeError> {
        match self {
            ProxyState::Uninitialized => Ok(ProxyState::Active {
                version: version.into(),
            }),
            _ => Err(UpgradeError::AlreadyInitialized),
        }
    }

    pub fn begin_upgrade(self, to: impl Into<String>) -> Result<Self, UpgradeError> {
        match self {
            ProxyState::Active { version } => Ok(ProxyState::Upgrading {
                from: version,
                to: to.into(),
            }),
            ProxyState::Uninitialized => Err(UpgradeError::NotInitialized),
            ProxyState::Upgrading { from, to } => Err(UpgradeError::UpgradeInProgress { from, to }),
        }
    }

    pub fn complete_upgrade(self) -> Result<Self, UpgradeError> {
        match self {
            ProxyState::Upgrading { to, .. } => Ok(ProxyState::Active { version: to }),
            _ => Err(UpgradeError::NotUpgrading),
        }
    }

    /// Version of the active logic, if any.
    pub fn version(&self) -> Option<&str> {
        match self {
            ProxyState::Active { version } => Some(version),
            _ => None,
        }
    }
}

/// Code id currently installed at a contract address and its chain-level admin
#[cw_serde]
pub struct LogicPointer {
    pub code_id: u64,
    pub admin: Option<String>,
}

pub fn query_logic_pointer(
    querier: &QuerierWrapper,
    proxy: impl Into<String>,
) -> StdResult<LogicPointer> {
    let info = querier.query_wasm_contract_info(proxy)?;
    Ok(LogicPointer {
        code_id: info.code_id,
        admin: info.admin,
    })
}
