use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, Empty, Env,
    MessageInfo, Response, StdResult, WasmMsg,
};
use cw2::set_contract_version;

use common::query_logic_pointer;

use crate::error::ContractError;
use crate::msg::{
    ExecuteMsg, InstantiateMsg, OwnerResponse, ProxyAdminResponse, ProxyExecuteMsg,
    ProxyImplementationResponse, QueryMsg,
};
use crate::state::{CONTRACT_NAME, CONTRACT_VERSION, OWNER};

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
    OWNER.save(deps.storage, &owner)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let owner = OWNER.load(deps.storage)?;
    if info.sender != owner {
        return Err(ContractError::Unauthorized);
    }

    match msg {
        ExecuteMsg::Upgrade { proxy, code_id } => {
            execute_upgrade(deps, proxy, code_id, to_json_binary(&Empty {})?)
        }
        ExecuteMsg::UpgradeAndCall {
            proxy,
            code_id,
            msg,
        } => execute_upgrade(deps, proxy, code_id, msg),
        ExecuteMsg::ChangeProxyAdmin { proxy, new_admin } => {
            execute_change_proxy_admin(deps, proxy, new_admin)
        }
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, owner, new_owner)
        }
    }
}

/// Migrate `proxy` to `code_id`. A failing migrate message reverts the swap.
fn execute_upgrade(
    deps: DepsMut,
    proxy: String,
    code_id: u64,
    msg: Binary,
) -> Result<Response, ContractError> {
    let proxy = deps.api.addr_validate(&proxy)?;
    let previous = query_logic_pointer(&deps.querier, &proxy)?;

    let migrate = WasmMsg::Migrate {
        contract_addr: proxy.to_string(),
        new_code_id: code_id,
        msg,
    };

    Ok(Response::new()
        .add_message(migrate)
        .add_attribute("action", "upgrade")
        .add_attribute("proxy", proxy)
        .add_attribute("previous_code_id", previous.code_id.to_string())
        .add_attribute("code_id", code_id.to_string()))
}

/// Tell the proxy about its new admin, then hand over the chain-level admin role.
fn execute_change_proxy_admin(
    deps: DepsMut,
    proxy: String,
    new_admin: String,
) -> Result<Response, ContractError> {
    let proxy = deps.api.addr_validate(&proxy)?;
    if new_admin.trim().is_empty() {
        return Err(ContractError::ZeroAddress);
    }
    let new_admin = deps.api.addr_validate(&new_admin)?;

    let messages: Vec<CosmosMsg> = vec![
        WasmMsg::Execute {
            contract_addr: proxy.to_string(),
            msg: to_json_binary(&ProxyExecuteMsg::ChangeProxyAdmin {
                new_admin: new_admin.to_string(),
            })?,
            funds: vec![],
        }
        .into(),
        WasmMsg::UpdateAdmin {
            contract_addr: proxy.to_string(),
            admin: new_admin.to_string(),
        }
        .into(),
    ];

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "change_proxy_admin")
        .add_attribute("proxy", proxy)
        .add_attribute("new_admin", new_admin))
}

fn execute_transfer_ownership(
    deps: DepsMut,
    previous_owner: Addr,
    new_owner: String,
) -> Result<Response, ContractError> {
    if new_owner.trim().is_empty() {
        return Err(ContractError::ZeroAddress);
    }
    let new_owner = deps.api.addr_validate(&new_owner)?;
    OWNER.save(deps.storage, &new_owner)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("previous_owner", previous_owner)
        .add_attribute("new_owner", new_owner))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Owner {} => to_json_binary(&OwnerResponse {
            owner: OWNER.load(deps.storage)?,
        }),
        QueryMsg::ProxyImplementation { proxy } => {
            let pointer = query_logic_pointer(&deps.querier, proxy)?;
            to_json_binary(&ProxyImplementationResponse {
                code_id: pointer.code_id,
            })
        }
        QueryMsg::ProxyAdmin { proxy } => {
            let pointer = query_logic_pointer(&deps.querier, proxy)?;
            to_json_binary(&ProxyAdminResponse {
                admin: pointer.admin,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{
        mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage,
    };
    use cosmwasm_std::{from_json, OwnedDeps};

    fn setup() -> OwnedDeps<MockStorage, MockApi, MockQuerier> {
        let mut deps = mock_dependencies();
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("terra1deployer", &[]),
            InstantiateMsg {
                owner: "terra1owner".to_string(),
            },
        )
        .unwrap();
        deps
    }

    #[test]
    fn test_instantiate_sets_owner() {
        let deps = setup();
        let res: OwnerResponse =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::Owner {}).unwrap()).unwrap();
        assert_eq!(res.owner, Addr::unchecked("terra1owner"));
    }

    #[test]
    fn test_instantiate_rejects_empty_owner() {
        let mut deps = mock_dependencies();
        let err = instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("terra1deployer", &[]),
            InstantiateMsg {
                owner: "".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::ZeroAddress);
    }

    #[test]
    fn test_only_owner_executes() {
        let mut deps = setup();
        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("terra1intruder", &[]),
            ExecuteMsg::TransferOwnership {
                new_owner: "terra1intruder".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);
    }

    #[test]
    fn test_change_proxy_admin_messages() {
        let mut deps = setup();
        let res = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("terra1owner", &[]),
            ExecuteMsg::ChangeProxyAdmin {
                proxy: "terra1proxy".to_string(),
                new_admin: "terra1newadmin".to_string(),
            },
        )
        .unwrap();

        assert_eq!(res.messages.len(), 2);
        assert_eq!(
            res.messages[0].msg,
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: "terra1proxy".to_string(),
                msg: to_json_binary(&ProxyExecuteMsg::ChangeProxyAdmin {
                    new_admin: "terra1newadmin".to_string(),
                })
                .unwrap(),
                funds: vec![],
            })
        );
        assert_eq!(
            res.messages[1].msg,
            CosmosMsg::Wasm(WasmMsg::UpdateAdmin {
                contract_addr: "terra1proxy".to_string(),
                admin: "terra1newadmin".to_string(),
            })
        );
    }

    #[test]
    fn test_transfer_ownership() {
        let mut deps = setup();
        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("terra1owner", &[]),
            ExecuteMsg::TransferOwnership {
                new_owner: "terra1successor".to_string(),
            },
        )
        .unwrap();

        let res: OwnerResponse =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::Owner {}).unwrap()).unwrap();
        assert_eq!(res.owner, Addr::unchecked("terra1successor"));

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("terra1owner", &[]),
            ExecuteMsg::TransferOwnership {
                new_owner: "terra1owner".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);
    }
}
