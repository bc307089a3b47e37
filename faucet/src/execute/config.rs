//! Token amount and cooldown configuration.

use cosmwasm_std::{Api, DepsMut, MessageInfo, Response, Storage, Uint128};

use common::{Asset, AssetInfo};

use crate::error::ContractError;
use crate::execute::ensure_owner;
use crate::state::{CONFIG, DISPENSE_AMOUNTS};

/// Set the per-claim amount of a token. A zero amount removes the token.
pub fn execute_configure_token(
    deps: DepsMut,
    info: MessageInfo,
    asset: AssetInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;

    let token = asset.id().to_string();
    save_token(deps.storage, deps.api, Asset { info: asset, amount })?;

    Ok(Response::new()
        .add_attribute("action", "configure_token")
        .add_attribute("token", token)
        .add_attribute("amount", amount))
}

/// Overwrite the global cooldown.
pub fn execute_configure_cooldown(
    deps: DepsMut,
    info: MessageInfo,
    cooldown_seconds: u64,
) -> Result<Response, ContractError> {
    let mut config = ensure_owner(deps.storage, &info.sender)?;

    config.cooldown_seconds = validate_cooldown(cooldown_seconds)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "configure_cooldown")
        .add_attribute("cooldown_seconds", cooldown_seconds.to_string()))
}

pub(crate) fn validate_cooldown(cooldown_seconds: u64) -> Result<u64, ContractError> {
    if cooldown_seconds == 0 {
        return Err(ContractError::InvalidCooldown);
    }
    Ok(cooldown_seconds)
}

pub(crate) fn save_token(
    storage: &mut dyn Storage,
    api: &dyn Api,
    token: Asset,
) -> Result<(), ContractError> {
    token.info.validate(api)?;

    if token.amount.is_zero() {
        DISPENSE_AMOUNTS.remove(storage, &token.info.key());
    } else {
        DISPENSE_AMOUNTS.save(storage, &token.info.key(), &token)?;
    }
    Ok(())
}
