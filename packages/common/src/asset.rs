//! Fungible asset descriptors and the ledger capability behind them.
//!
//! An asset lives either in the bank module (native denom) or in a CW20
//! contract. The faucet only ever needs two things from the ledger: the
//! balance a holder has, and a message that moves an amount out of the
//! contract's own account.

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Api, BankMsg, Coin, CosmosMsg, QuerierWrapper, StdError, StdResult,
    Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

/// Identifies a fungible asset
#[cw_serde]
pub enum AssetInfo {
    /// Native bank denom (e.g. `uluna`)
    Native { denom: String },
    /// CW20 token contract
    Cw20 { contract_addr: Addr },
}

impl AssetInfo {
    /// The denom for native tokens, the contract address for CW20 tokens.
    pub fn id(&self) -> &str {
        match self {
            AssetInfo::Native { denom } => denom,
            AssetInfo::Cw20 { contract_addr } => contract_addr.as_str(),
        }
    }

    /// Storage key tagged with the ledger kind, so a denom spelled like a
    /// CW20 address never shares a slot with that token.
    pub fn key(&self) -> String {
        match self {
            AssetInfo::Native { denom } => format!("native:{denom}"),
            AssetInfo::Cw20 { contract_addr } => format!("cw20:{contract_addr}"),
        }
    }

    pub fn validate(&self, api: &dyn Api) -> StdResult<()> {
        match self {
            AssetInfo::Native { denom } => {
                if denom.trim().is_empty() {
                    return Err(StdError::generic_err("Native denom must not be empty"));
                }
                Ok(())
            }
            AssetInfo::Cw20 { contract_addr } => {
                api.addr_validate(contract_addr.as_str())?;
                Ok(())
            }
        }
    }
}

impl fmt::Display for AssetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Balance and transfer capability of the ledger an asset is tracked in.
///
/// Transfers are always issued with the calling contract as the sender.
pub trait TokenLedger {
    fn balance_of(&self, querier: &QuerierWrapper, holder: &Addr) -> StdResult<Uint128>;

    fn transfer_msg(&self, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg>;
}

impl TokenLedger for AssetInfo {
    fn balance_of(&self, querier: &QuerierWrapper, holder: &Addr) -> StdResult<Uint128> {
        match self {
            AssetInfo::Native { denom } => Ok(querier.query_balance(holder, denom)?.amount),
            AssetInfo::Cw20 { contract_addr } => {
                let res: BalanceResponse = querier.query_wasm_smart(
                    contract_addr,
                    &Cw20QueryMsg::Balance {
                        address: holder.to_string(),
                    },
                )?;
                Ok(res.balance)
            }
        }
    }

    fn transfer_msg(&self, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        let msg = match self {
            AssetInfo::Native { denom } => CosmosMsg::Bank(BankMsg::Send {
                to_address: recipient.to_string(),
                amount: vec![Coin {
                    denom: denom.clone(),
                    amount,
                }],
            }),
            AssetInfo::Cw20 { contract_addr } => CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: recipient.to_string(),
                    amount,
                })?,
                funds: vec![],
            }),
        };
        Ok(msg)
    }
}

/// An amount of a specific asset
#[cw_serde]
pub struct Asset {
    pub info: AssetInfo,
    pub amount: Uint128,
}

impl Asset {
    pub fn transfer_msg(&self, recipient: &Addr) -> StdResult<CosmosMsg> {
        self.info.transfer_msg(recipient, self.amount)
    }
}
