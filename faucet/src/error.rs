use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

use common::UpgradeError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Upgrade(#[from] UpgradeError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================
    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Proxy admin cannot call faucet operations")]
    ProxyDeniedAdminAccess,

    #[error("Owner cannot be the proxy admin")]
    OwnerIsProxyAdmin,

    #[error("New owner can't be zero address")]
    ZeroAddress,

    // ========================================================================
    // Faucet Errors
    // ========================================================================
    #[error("Cooldown shouldn't be zero")]
    InvalidCooldown,

    #[error("Token not supported: {token}")]
    UnsupportedToken { token: String },

    #[error("Cooldown not elapsed: last claim at {last_claim}, now {now}")]
    CooldownNotElapsed { last_claim: u64, now: u64 },

    #[error("Insufficient faucet balance: required {required}, available {available}")]
    InsufficientFaucetBalance {
        required: Uint128,
        available: Uint128,
    },

    #[error("Faucet holds no {token}")]
    EmptyFaucetBalance { token: String },

    // ========================================================================
    // Upgrade Errors
    // ========================================================================
    #[error("Operation not available in {mode} upgrade mode")]
    UpgradeModeMismatch { mode: String },

    #[error("Contract is not its own admin")]
    NotSelfAdministered,

    #[error("Upgrade initialization failed: {reason}")]
    UpgradeInitialization { reason: String },

    #[error("Cannot migrate from {found}, expected {expected}")]
    IncompatibleLogic { expected: String, found: String },
}
