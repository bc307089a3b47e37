//! Upgrade handlers.
//!
//! In self-governed mode the owner migrates the contract to new code through
//! `UpgradeTo`; the contract has to be its own chain-level admin for the
//! migration to go through. In transparent mode the proxy admin migrates the
//! contract directly and may only call `ChangeProxyAdmin` on the faucet.

use cosmwasm_std::{to_json_binary, DepsMut, Env, MessageInfo, Response, WasmMsg};

use common::{query_logic_pointer, UpgradeMode};

use crate::error::ContractError;
use crate::execute::{ensure_owner, save_token, validate_cooldown};
use crate::msg::{MigrateMsg, UpgradeCall};
use crate::state::{CONFIG, INITIALIZED_VERSION, INITIAL_VERSION, UPGRADE_MODE};

/// Migrate this contract to `code_id`, optionally running `call` on the new logic.
///
/// Nothing checks that the new code still exposes `UpgradeTo`. Installing
/// logic without it leaves the contract unable to upgrade ever again, since
/// the contract is its only admin.
pub fn execute_upgrade_to(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    code_id: u64,
    call: Option<UpgradeCall>,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;

    let mode = UPGRADE_MODE.load(deps.storage)?;
    if !matches!(mode, UpgradeMode::SelfGoverned {}) {
        return Err(ContractError::UpgradeModeMismatch {
            mode: mode.name().to_string(),
        });
    }

    let pointer = query_logic_pointer(&deps.querier, &env.contract.address)?;
    if pointer.admin.as_deref() != Some(env.contract.address.as_str()) {
        return Err(ContractError::NotSelfAdministered);
    }

    let migrate = WasmMsg::Migrate {
        contract_addr: env.contract.address.to_string(),
        new_code_id: code_id,
        msg: to_json_binary(&MigrateMsg { call })?,
    };

    Ok(Response::new()
        .add_message(migrate)
        .add_attribute("action", "upgrade_to")
        .add_attribute("previous_code_id", pointer.code_id.to_string())
        .add_attribute("code_id", code_id.to_string()))
}

/// Record a new transparent proxy admin. The caller has already been
/// identified as the current proxy admin.
pub fn execute_change_proxy_admin(
    deps: DepsMut,
    new_admin: String,
) -> Result<Response, ContractError> {
    let previous_admin = match UPGRADE_MODE.load(deps.storage)? {
        UpgradeMode::Transparent { admin } => admin,
        mode => {
            return Err(ContractError::UpgradeModeMismatch {
                mode: mode.name().to_string(),
            })
        }
    };

    if new_admin.trim().is_empty() {
        return Err(ContractError::ZeroAddress);
    }
    let new_admin = deps.api.addr_validate(&new_admin)?;

    if CONFIG.load(deps.storage)?.owner == new_admin {
        return Err(ContractError::OwnerIsProxyAdmin);
    }

    UPGRADE_MODE.save(
        deps.storage,
        &UpgradeMode::Transparent {
            admin: new_admin.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "change_proxy_admin")
        .add_attribute("previous_admin", previous_admin)
        .add_attribute("new_admin", new_admin))
}

/// Run an initialization call against freshly migrated storage.
pub fn run_upgrade_call(deps: DepsMut, call: UpgradeCall) -> Result<Response, ContractError> {
    match call {
        UpgradeCall::Reinitialize {
            version,
            cooldown_seconds,
            tokens,
        } => {
            let initialized = INITIALIZED_VERSION
                .may_load(deps.storage)?
                .unwrap_or(INITIAL_VERSION);
            if version <= initialized {
                return Err(ContractError::UpgradeInitialization {
                    reason: format!(
                        "version {version} is not above initialized version {initialized}"
                    ),
                });
            }

            if let Some(cooldown_seconds) = cooldown_seconds {
                let mut config = CONFIG.load(deps.storage)?;
                config.cooldown_seconds = validate_cooldown(cooldown_seconds)?;
                CONFIG.save(deps.storage, &config)?;
            }

            let token_count = tokens.len();
            for token in tokens {
                save_token(deps.storage, deps.api, token)?;
            }

            INITIALIZED_VERSION.save(deps.storage, &version)?;

            Ok(Response::new()
                .add_attribute("initialized_version", version.to_string())
                .add_attribute("token_count", token_count.to_string()))
        }
    }
}
