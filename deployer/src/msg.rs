use common::Asset;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

#[cw_serde]
pub struct InstantiateMsg {
    /// Code id of the already stored faucet logic
    pub faucet_code_id: u64,
    /// Code id of the stored proxy admin
    pub proxy_admin_code_id: u64,
    /// Owner of the proxy admin, i.e. the principal allowed to upgrade
    pub admin_owner: String,
    /// Faucet owner
    pub owner: String,
    pub cooldown_seconds: u64,
    pub tokens: Vec<Asset>,
    /// Label of the faucet proxy; the proxy admin gets `"{label} admin"`
    pub label: String,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(DeploymentResponse)]
    Deployment {},
}

#[cw_serde]
pub struct DeploymentResponse {
    pub admin: Addr,
    pub proxy: Addr,
}
