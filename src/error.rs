//! Client error types.

use {
    solana_client::client_error::ClientError,
    solana_sdk::{
        pubkey::Pubkey, signer::SignerError, transaction::TransactionError,
        transport::TransportError,
    },
    thiserror::Error,
};

/// Errors that can be returned by the Rewards Center client.
#[derive(Error, Debug)]
pub enum RewardsCenterClientError {
    /// A string seed does not fit in a program derived address.
    #[error("Seed `{0}` exceeds the maximum seed length")]
    SeedTooLong(String),
    /// No account exists at the requested address.
    #[error("Account {0} not found")]
    AccountNotFound(Pubkey),
    /// The account exists but belongs to another program.
    #[error("Account {address} is owned by {owner}, not the rewards center program")]
    IncorrectAccountOwner { address: Pubkey, owner: Pubkey },
    /// The account data does not start with the expected discriminator.
    #[error("Account data is not a {0} account")]
    InvalidAccountDiscriminator(&'static str),
    /// The account data could not be decoded.
    #[error("Invalid account data: {0}")]
    InvalidAccountData(#[from] std::io::Error),
    /// The configured commitment level is not recognized.
    #[error("Invalid commitment level `{0}`")]
    InvalidCommitment(String),
    /// The wallet keypair could not be read.
    #[error("Failed to read keypair from {path}: {reason}")]
    Keypair { path: String, reason: String },
    #[error(transparent)]
    Signer(#[from] SignerError),
    #[error(transparent)]
    Rpc(#[from] ClientError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Transaction(#[from] TransactionError),
}
