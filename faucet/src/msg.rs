use common::{Asset, AssetInfo, ProxyState, UpgradeMode};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Upgrade strategy requested at instantiation
#[cw_serde]
pub enum UpgradeModeMsg {
    /// `admin` must also be set as the contract's chain-level admin
    Transparent { admin: String },
    /// The contract must be made its own chain-level admin after instantiation
    SelfGoverned {},
}

#[cw_serde]
pub struct InstantiateMsg {
    /// Owner who can configure tokens, cooldown and withdraw balances
    pub owner: String,
    /// Seconds a wallet must wait between claims of the same token
    pub cooldown_seconds: u64,
    /// Initial set of dispensable tokens and their per-claim amounts
    pub tokens: Vec<Asset>,
    pub upgrade_mode: UpgradeModeMsg,
}

/// Initialization executed by the new logic in the same transaction as the upgrade
#[cw_serde]
pub enum UpgradeCall {
    /// Versioned reinitializer. `version` must be greater than every version
    /// that already ran.
    Reinitialize {
        version: u64,
        cooldown_seconds: Option<u64>,
        tokens: Vec<Asset>,
    },
}

#[cw_serde]
pub struct MigrateMsg {
    pub call: Option<UpgradeCall>,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Owner: set the per-claim amount of a token (zero disables it)
    ConfigureToken { asset: AssetInfo, amount: Uint128 },
    /// Owner: set the global cooldown
    ConfigureCooldown { cooldown_seconds: u64 },
    /// Claim the configured amount (once per cooldown per wallet per token)
    RequestToken { asset: AssetInfo },
    /// Owner: drain the faucet's whole balance of a token to the owner
    WithdrawToken { asset: AssetInfo },
    /// Owner: hand the owner role to another address
    TransferOwnership { new_owner: String },
    /// Owner, self-governed mode only: migrate this contract to `code_id`
    UpgradeTo {
        code_id: u64,
        call: Option<UpgradeCall>,
    },
    /// Proxy admin, transparent mode only: record a new proxy admin
    ChangeProxyAdmin { new_admin: String },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    /// Per-claim amount of a token; zero if the token is not dispensable
    #[returns(TokenAmountResponse)]
    TokenAmount { asset: AssetInfo },
    /// Dispensable tokens, ordered by token key
    #[returns(TokensResponse)]
    Tokens {
        /// Key of the last token of the previous page
        /// (`native:<denom>` or `cw20:<address>`)
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(LastClaimResponse)]
    LastClaim { user: String, asset: AssetInfo },
    /// Returns the timestamp (seconds) when the user can next claim this token.
    /// Returns 0 if the user has never claimed.
    #[returns(ClaimableAtResponse)]
    ClaimableAt { user: String, asset: AssetInfo },
    /// The faucet's own holding of a token
    #[returns(FaucetBalanceResponse)]
    FaucetBalance { asset: AssetInfo },
    /// Installed logic, upgrade mode and lifecycle state
    #[returns(ImplementationResponse)]
    Implementation {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub cooldown_seconds: u64,
}

#[cw_serde]
pub struct TokenAmountResponse {
    pub asset: AssetInfo,
    pub amount: Uint128,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<Asset>,
}

#[cw_serde]
pub struct LastClaimResponse {
    pub last_claim: Option<u64>,
}

#[cw_serde]
pub struct ClaimableAtResponse {
    pub claimable_at: u64,
}

#[cw_serde]
pub struct FaucetBalanceResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct ImplementationResponse {
    pub mode: UpgradeMode,
    pub state: ProxyState,
    /// cw2 contract name of the installed logic
    pub contract: String,
    /// cw2 version of the installed logic
    pub version: String,
    pub initialized_version: u64,
    /// Code id installed at this address
    pub code_id: u64,
    /// Chain-level admin allowed to migrate this address
    pub admin: Option<String>,
}
