//! Query handlers for the faucet contract.

use cosmwasm_std::{Deps, Env, Order, StdResult, Uint128};
use cw2::get_contract_version;
use cw_storage_plus::Bound;

use common::{query_logic_pointer, Asset, AssetInfo, ProxyState, TokenLedger};

use crate::msg::{
    ClaimableAtResponse, ConfigResponse, FaucetBalanceResponse, ImplementationResponse,
    LastClaimResponse, TokenAmountResponse, TokensResponse,
};
use crate::state::{
    CONFIG, DISPENSE_AMOUNTS, INITIALIZED_VERSION, INITIAL_VERSION, LAST_CLAIM, PROXY_STATE,
    UPGRADE_MODE,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        cooldown_seconds: config.cooldown_seconds,
    })
}

pub fn query_token_amount(deps: Deps, asset: AssetInfo) -> StdResult<TokenAmountResponse> {
    let amount = DISPENSE_AMOUNTS
        .may_load(deps.storage, &asset.key())?
        .map(|token| token.amount)
        .unwrap_or_default();
    Ok(TokenAmountResponse { asset, amount })
}

pub fn query_tokens(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<TokensResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    let tokens: Vec<Asset> = DISPENSE_AMOUNTS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, token)| token))
        .collect::<StdResult<_>>()?;

    Ok(TokensResponse { tokens })
}

pub fn query_last_claim(
    deps: Deps,
    user: String,
    asset: AssetInfo,
) -> StdResult<LastClaimResponse> {
    let user_addr = deps.api.addr_validate(&user)?;
    let last_claim = LAST_CLAIM.may_load(deps.storage, (&user_addr, &asset.key()))?;
    Ok(LastClaimResponse { last_claim })
}

pub fn query_claimable_at(
    deps: Deps,
    user: String,
    asset: AssetInfo,
) -> StdResult<ClaimableAtResponse> {
    let user_addr = deps.api.addr_validate(&user)?;
    let cooldown_seconds = CONFIG.load(deps.storage)?.cooldown_seconds;
    let last = LAST_CLAIM
        .may_load(deps.storage, (&user_addr, &asset.key()))?
        .unwrap_or(0);

    let claimable_at = if last == 0 {
        0
    } else {
        last.saturating_add(cooldown_seconds)
    };
    Ok(ClaimableAtResponse { claimable_at })
}

pub fn query_faucet_balance(
    deps: Deps,
    env: Env,
    asset: AssetInfo,
) -> StdResult<FaucetBalanceResponse> {
    let amount: Uint128 = asset.balance_of(&deps.querier, &env.contract.address)?;
    Ok(FaucetBalanceResponse { amount })
}

pub fn query_implementation(deps: Deps, env: Env) -> StdResult<ImplementationResponse> {
    let version = get_contract_version(deps.storage)?;
    let pointer = query_logic_pointer(&deps.querier, &env.contract.address)?;

    Ok(ImplementationResponse {
        mode: UPGRADE_MODE.load(deps.storage)?,
        state: PROXY_STATE
            .may_load(deps.storage)?
            .unwrap_or(ProxyState::Uninitialized),
        contract: version.contract,
        version: version.version,
        initialized_version: INITIALIZED_VERSION
            .may_load(deps.storage)?
            .unwrap_or(INITIAL_VERSION),
        code_id: pointer.code_id,
        admin: pointer.admin,
    })
}
