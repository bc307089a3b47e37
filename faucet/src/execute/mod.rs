//! Execute handlers for the faucet contract.
//!
//! - `claim` - token requests subject to the per-wallet cooldown
//! - `config` - token amounts and cooldown
//! - `owner` - withdrawals and ownership transfer
//! - `upgrade` - self-governed upgrades, proxy admin changes, reinitializers

mod claim;
mod config;
mod owner;
mod upgrade;

pub use claim::*;
pub use config::*;
pub use owner::*;
pub use upgrade::*;

use cosmwasm_std::{Addr, Storage};

use crate::error::ContractError;
use crate::state::{Config, CONFIG};

/// Loads the config, failing unless `sender` is the owner.
pub(crate) fn ensure_owner(storage: &dyn Storage, sender: &Addr) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if *sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(config)
}
