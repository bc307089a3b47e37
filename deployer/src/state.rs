use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

use common::Asset;

pub const CONTRACT_NAME: &str = "crates.io:faucet-proxy-deployer";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const INSTANTIATE_ADMIN_REPLY_ID: u64 = 1;
pub const INSTANTIATE_PROXY_REPLY_ID: u64 = 2;

/// Faucet parameters held between the proxy admin and proxy instantiations
#[cw_serde]
pub struct PendingFaucet {
    pub code_id: u64,
    pub owner: String,
    pub cooldown_seconds: u64,
    pub tokens: Vec<Asset>,
    pub label: String,
}

pub const PENDING_FAUCET: Item<PendingFaucet> = Item::new("pending_faucet");

pub const ADMIN: Item<Addr> = Item::new("admin");

pub const PROXY: Item<Addr> = Item::new("proxy");
