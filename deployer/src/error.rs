use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    #[error("Instantiate reply carries no contract address")]
    MissingContractAddress,

    #[error("Deployment already completed")]
    AlreadyDeployed,
}
