use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

#[cw_serde]
pub struct InstantiateMsg {
    /// Principal allowed to upgrade the proxies administered by this contract
    pub owner: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Install `code_id` at `proxy` without running any initialization
    Upgrade { proxy: String, code_id: u64 },
    /// Install `code_id` at `proxy` and run `msg` as its migrate message in
    /// the same transaction
    UpgradeAndCall {
        proxy: String,
        code_id: u64,
        msg: Binary,
    },
    /// Hand the admin role of `proxy` to `new_admin`
    ChangeProxyAdmin { proxy: String, new_admin: String },
    TransferOwnership { new_owner: String },
}

/// Admin-only message understood by transparent proxies
#[cw_serde]
pub enum ProxyExecuteMsg {
    ChangeProxyAdmin { new_admin: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(OwnerResponse)]
    Owner {},
    /// Code id currently installed at `proxy`
    #[returns(ProxyImplementationResponse)]
    ProxyImplementation { proxy: String },
    /// Chain-level admin of `proxy`
    #[returns(ProxyAdminResponse)]
    ProxyAdmin { proxy: String },
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct ProxyImplementationResponse {
    pub code_id: u64,
}

#[cw_serde]
pub struct ProxyAdminResponse {
    pub admin: Option<String>,
}
