use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Reply,
    Response, StdError, StdResult, SubMsg, WasmMsg,
};
use cw2::set_contract_version;

use faucet::msg::{InstantiateMsg as FaucetInstantiateMsg, UpgradeModeMsg};
use proxy_admin::msg::InstantiateMsg as ProxyAdminInstantiateMsg;

use crate::error::ContractError;
use crate::msg::{DeploymentResponse, InstantiateMsg, QueryMsg};
use crate::state::{
    PendingFaucet, ADMIN, CONTRACT_NAME, CONTRACT_VERSION, INSTANTIATE_ADMIN_REPLY_ID,
    INSTANTIATE_PROXY_REPLY_ID, PENDING_FAUCET, PROXY,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin_owner = deps.api.addr_validate(&msg.admin_owner)?;

    PENDING_FAUCET.save(
        deps.storage,
        &PendingFaucet {
            code_id: msg.faucet_code_id,
            owner: msg.owner,
            cooldown_seconds: msg.cooldown_seconds,
            tokens: msg.tokens,
            label: msg.label.clone(),
        },
    )?;

    let instantiate_admin = WasmMsg::Instantiate {
        admin: None,
        code_id: msg.proxy_admin_code_id,
        msg: to_json_binary(&ProxyAdminInstantiateMsg {
            owner: admin_owner.to_string(),
        })?,
        funds: vec![],
        label: format!("{} admin", msg.label),
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(
            instantiate_admin,
            INSTANTIATE_ADMIN_REPLY_ID,
        ))
        .add_attribute("action", "instantiate")
        .add_attribute("admin_owner", admin_owner))
}

/// Nothing can be executed once the bootstrap has run.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: Empty,
) -> Result<Response, ContractError> {
    Err(ContractError::AlreadyDeployed)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        INSTANTIATE_ADMIN_REPLY_ID => {
            let admin = deps.api.addr_validate(&instantiated_address(msg)?)?;
            ADMIN.save(deps.storage, &admin)?;

            let pending = PENDING_FAUCET.load(deps.storage)?;
            let instantiate_proxy = WasmMsg::Instantiate {
                admin: Some(admin.to_string()),
                code_id: pending.code_id,
                msg: to_json_binary(&FaucetInstantiateMsg {
                    owner: pending.owner,
                    cooldown_seconds: pending.cooldown_seconds,
                    tokens: pending.tokens,
                    upgrade_mode: UpgradeModeMsg::Transparent {
                        admin: admin.to_string(),
                    },
                })?,
                funds: vec![],
                label: pending.label,
            };

            Ok(Response::new()
                .add_submessage(SubMsg::reply_on_success(
                    instantiate_proxy,
                    INSTANTIATE_PROXY_REPLY_ID,
                ))
                .add_attribute("proxy_admin", admin))
        }
        INSTANTIATE_PROXY_REPLY_ID => {
            let proxy = deps.api.addr_validate(&instantiated_address(msg)?)?;
            PROXY.save(deps.storage, &proxy)?;
            PENDING_FAUCET.remove(deps.storage);

            Ok(Response::new().add_attribute("proxy", proxy))
        }
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

/// Address reported by the `instantiate` event of a successful submessage.
fn instantiated_address(msg: Reply) -> Result<String, ContractError> {
    let response = msg.result.into_result().map_err(StdError::generic_err)?;
    response
        .events
        .iter()
        .filter(|event| event.ty == "instantiate")
        .flat_map(|event| event.attributes.iter())
        .find(|attr| attr.key == "_contract_address")
        .map(|attr| attr.value.clone())
        .ok_or(ContractError::MissingContractAddress)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Deployment {} => to_json_binary(&DeploymentResponse {
            admin: ADMIN.load(deps.storage)?,
            proxy: PROXY.load(deps.storage)?,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_env};
    use cosmwasm_std::{Event, SubMsgResponse, SubMsgResult};

    fn instantiate_reply(id: u64, address: &str) -> Reply {
        Reply {
            id,
            result: SubMsgResult::Ok(SubMsgResponse {
                events: vec![Event::new("instantiate")
                    .add_attribute("_contract_address", address)
                    .add_attribute("code_id", "1")],
                data: None,
            }),
        }
    }

    #[test]
    fn test_instantiated_address() {
        let addr = instantiated_address(instantiate_reply(1, "terra1created")).unwrap();
        assert_eq!(addr, "terra1created");

        let empty = Reply {
            id: 1,
            result: SubMsgResult::Ok(SubMsgResponse {
                events: vec![Event::new("wasm").add_attribute("action", "instantiate")],
                data: None,
            }),
        };
        assert_eq!(
            instantiated_address(empty).unwrap_err(),
            ContractError::MissingContractAddress
        );
    }

    #[test]
    fn test_unknown_reply_id() {
        let mut deps = mock_dependencies();
        let err = reply(deps.as_mut(), mock_env(), instantiate_reply(7, "terra1created"))
            .unwrap_err();
        assert_eq!(err, ContractError::UnknownReplyId { id: 7 });
    }
}
