//! Token requests.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use common::{AssetInfo, TokenLedger};

use crate::error::ContractError;
use crate::state::{CONFIG, DISPENSE_AMOUNTS, LAST_CLAIM};

/// Dispense the configured amount of `asset` to the caller.
///
/// The claim timestamp is saved before the ledger transfer is emitted, so a
/// ledger that calls back into the faucet while delivering the tokens sees
/// the new claim and fails the cooldown check.
pub fn execute_request_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset: AssetInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let key = asset.key();
    let token = asset.id().to_string();

    let dispense = DISPENSE_AMOUNTS
        .may_load(deps.storage, &key)?
        .filter(|dispense| dispense.info == asset)
        .ok_or(ContractError::UnsupportedToken {
            token: token.clone(),
        })?;

    let now = env.block.time.seconds();
    let last = LAST_CLAIM
        .may_load(deps.storage, (&info.sender, &key))?
        .unwrap_or(0);

    if last != 0 && now.saturating_sub(last) < config.cooldown_seconds {
        return Err(ContractError::CooldownNotElapsed {
            last_claim: last,
            now,
        });
    }

    let available = dispense
        .info
        .balance_of(&deps.querier, &env.contract.address)?;
    if available < dispense.amount {
        return Err(ContractError::InsufficientFaucetBalance {
            required: dispense.amount,
            available,
        });
    }

    LAST_CLAIM.save(deps.storage, (&info.sender, &key), &now)?;

    let transfer = dispense.transfer_msg(&info.sender)?;

    Ok(Response::new()
        .add_message(transfer)
        .add_attribute("action", "claim")
        .add_attribute("user", info.sender)
        .add_attribute("token", token)
        .add_attribute("amount", dispense.amount)
        .add_attribute("timestamp", now.to_string()))
}
