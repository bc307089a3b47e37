//! Owner operations.
//!
//! This module handles:
//! - Draining a token balance to the owner
//! - Ownership transfer

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use common::{AssetInfo, TokenLedger};

use crate::error::ContractError;
use crate::execute::ensure_owner;
use crate::state::{CONFIG, UPGRADE_MODE};

/// Transfer the faucet's entire holding of `asset` to the owner.
///
/// Claim timestamps are left untouched.
pub fn execute_withdraw_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset: AssetInfo,
) -> Result<Response, ContractError> {
    let config = ensure_owner(deps.storage, &info.sender)?;
    asset.validate(deps.api)?;

    let amount = asset.balance_of(&deps.querier, &env.contract.address)?;
    if amount.is_zero() {
        return Err(ContractError::EmptyFaucetBalance {
            token: asset.id().to_string(),
        });
    }

    let transfer = asset.transfer_msg(&config.owner, amount)?;

    Ok(Response::new()
        .add_message(transfer)
        .add_attribute("action", "withdraw_token")
        .add_attribute("token", asset.id())
        .add_attribute("amount", amount)
        .add_attribute("recipient", config.owner))
}

pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = ensure_owner(deps.storage, &info.sender)?;

    if new_owner.trim().is_empty() {
        return Err(ContractError::ZeroAddress);
    }
    let new_owner = deps.api.addr_validate(&new_owner)?;

    if UPGRADE_MODE.load(deps.storage)?.is_proxy_admin(&new_owner) {
        return Err(ContractError::OwnerIsProxyAdmin);
    }

    let previous_owner = std::mem::replace(&mut config.owner, new_owner.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("previous_owner", previous_owner)
        .add_attribute("new_owner", new_owner))
}
