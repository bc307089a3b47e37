//! Token Faucet Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult,
};
use cw2::{get_contract_version, set_contract_version};

use common::{query_logic_pointer, ProxyState, UpgradeMode};

use crate::error::ContractError;
use crate::execute::{
    execute_change_proxy_admin, execute_configure_cooldown, execute_configure_token,
    execute_request_token, execute_transfer_ownership, execute_upgrade_to,
    execute_withdraw_token, run_upgrade_call, save_token, validate_cooldown,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, UpgradeModeMsg};
use crate::query::{
    query_claimable_at, query_config, query_faucet_balance, query_implementation,
    query_last_claim, query_token_amount, query_tokens,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, INITIALIZED_VERSION, INITIAL_VERSION,
    PROXY_STATE, UPGRADE_MODE,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.owner.trim().is_empty() {
        return Err(ContractError::ZeroAddress);
    }
    let owner = deps.api.addr_validate(&msg.owner)?;
    let cooldown_seconds = validate_cooldown(msg.cooldown_seconds)?;

    let mode = match msg.upgrade_mode {
        UpgradeModeMsg::Transparent { admin } => UpgradeMode::Transparent {
            admin: deps.api.addr_validate(&admin)?,
        },
        UpgradeModeMsg::SelfGoverned {} => UpgradeMode::SelfGoverned {},
    };
    if mode.is_proxy_admin(&owner) {
        return Err(ContractError::OwnerIsProxyAdmin);
    }

    CONFIG.save(
        deps.storage,
        &Config {
            owner: owner.clone(),
            cooldown_seconds,
        },
    )?;
    UPGRADE_MODE.save(deps.storage, &mode)?;

    let token_count = msg.tokens.len();
    for token in msg.tokens {
        save_token(deps.storage, deps.api, token)?;
    }

    PROXY_STATE.save(
        deps.storage,
        &ProxyState::Uninitialized.initialize(CONTRACT_VERSION)?,
    )?;
    INITIALIZED_VERSION.save(deps.storage, &INITIAL_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("cooldown_seconds", cooldown_seconds.to_string())
        .add_attribute("upgrade_mode", mode.name())
        .add_attribute("token_count", token_count.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    // Calls from the transparent proxy admin never reach faucet operations
    if is_proxy_admin(deps.as_ref(), &env, &info.sender)? {
        return match msg {
            ExecuteMsg::ChangeProxyAdmin { new_admin } => {
                execute_change_proxy_admin(deps, new_admin)
            }
            _ => Err(ContractError::ProxyDeniedAdminAccess),
        };
    }

    match msg {
        ExecuteMsg::ConfigureToken { asset, amount } => {
            execute_configure_token(deps, info, asset, amount)
        }
        ExecuteMsg::ConfigureCooldown { cooldown_seconds } => {
            execute_configure_cooldown(deps, info, cooldown_seconds)
        }
        ExecuteMsg::RequestToken { asset } => execute_request_token(deps, env, info, asset),
        ExecuteMsg::WithdrawToken { asset } => execute_withdraw_token(deps, env, info, asset),
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
        ExecuteMsg::UpgradeTo { code_id, call } => {
            execute_upgrade_to(deps, env, info, code_id, call)
        }
        ExecuteMsg::ChangeProxyAdmin { .. } => match UPGRADE_MODE.load(deps.storage)? {
            UpgradeMode::Transparent { .. } => Err(ContractError::Unauthorized),
            mode => Err(ContractError::UpgradeModeMismatch {
                mode: mode.name().to_string(),
            }),
        },
    }
}

/// In transparent mode both the recorded proxy admin and the chain-level
/// admin count as the proxy admin, so a faucet instantiated with an admin
/// that differs from `upgrade_mode` still intercepts its real migrator.
fn is_proxy_admin(deps: Deps, env: &Env, sender: &Addr) -> StdResult<bool> {
    let mode = UPGRADE_MODE.load(deps.storage)?;
    match mode {
        UpgradeMode::Transparent { .. } if mode.is_proxy_admin(sender) => Ok(true),
        UpgradeMode::Transparent { .. } => {
            let pointer = query_logic_pointer(&deps.querier, &env.contract.address)?;
            Ok(pointer.admin.as_deref() == Some(sender.as_str()))
        }
        UpgradeMode::SelfGoverned {} => Ok(false),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::TokenAmount { asset } => to_json_binary(&query_token_amount(deps, asset)?),
        QueryMsg::Tokens { start_after, limit } => {
            to_json_binary(&query_tokens(deps, start_after, limit)?)
        }
        QueryMsg::LastClaim { user, asset } => {
            to_json_binary(&query_last_claim(deps, user, asset)?)
        }
        QueryMsg::ClaimableAt { user, asset } => {
            to_json_binary(&query_claimable_at(deps, user, asset)?)
        }
        QueryMsg::FaucetBalance { asset } => {
            to_json_binary(&query_faucet_balance(deps, env, asset)?)
        }
        QueryMsg::Implementation {} => to_json_binary(&query_implementation(deps, env)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

/// Entered whenever new code is installed at this address. Storage is carried
/// over untouched unless `msg.call` runs an initializer; a failing initializer
/// aborts the migration, so the previous code stays installed.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(mut deps: DepsMut, _env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::IncompatibleLogic {
            expected: CONTRACT_NAME.to_string(),
            found: stored.contract,
        });
    }

    let upgrading = PROXY_STATE
        .may_load(deps.storage)?
        .unwrap_or(ProxyState::Uninitialized)
        .begin_upgrade(CONTRACT_VERSION)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // The new code id is only recorded after migrate returns; it is on the
    // initiating `upgrade`/`upgrade_to` event.
    let mut response = Response::new()
        .add_attribute("action", "upgraded")
        .add_attribute("new_logic", format!("{CONTRACT_NAME}@{CONTRACT_VERSION}"))
        .add_attribute("from_version", stored.version)
        .add_attribute("version", CONTRACT_VERSION);

    if let Some(call) = msg.call {
        let init = run_upgrade_call(deps.branch(), call).map_err(|err| match err {
            ContractError::UpgradeInitialization { .. } => err,
            other => ContractError::UpgradeInitialization {
                reason: other.to_string(),
            },
        })?;
        response = response.add_attributes(init.attributes);
    }

    PROXY_STATE.save(deps.storage, &upgrading.complete_upgrade()?)?;

    Ok(response)
}
