use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

use common::{Asset, ProxyState, UpgradeMode};

pub const CONTRACT_NAME: &str = "crates.io:token-faucet";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializer version recorded by `instantiate`
pub const INITIAL_VERSION: u64 = 1;

#[cw_serde]
pub struct Config {
    /// Sole principal allowed to configure, withdraw and transfer ownership
    pub owner: Addr,
    /// Minimum seconds between two claims of the same token by the same wallet
    pub cooldown_seconds: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// asset key (`native:<denom>` / `cw20:<address>`) => dispensed asset and amount per claim
pub const DISPENSE_AMOUNTS: Map<&str, Asset> = Map::new("dispense_amounts");

/// (user_address, asset key) => last claim timestamp (seconds)
pub const LAST_CLAIM: Map<(&Addr, &str), u64> = Map::new("last_claim");

pub const UPGRADE_MODE: Item<UpgradeMode> = Item::new("upgrade_mode");

pub const PROXY_STATE: Item<ProxyState> = Item::new("proxy_state");

/// Highest initializer version that has run against this storage
pub const INITIALIZED_VERSION: Item<u64> = Item::new("initialized_version");
