//! Transaction submission.
//!
//! [TransactionExecutor] is the seam between the client and the network. The
//! nonblocking RPC client implements it for real clusters; anything else
//! that can hand out a blockhash, land a transaction and read an account
//! (an in-process bank, a recorder) can stand in for it.

use {
    crate::error::RewardsCenterClientError,
    log::debug,
    solana_client::nonblocking::rpc_client::RpcClient,
    solana_sdk::{
        account::Account,
        hash::Hash,
        pubkey::Pubkey,
        signature::{Signature, Signer},
        transaction::Transaction,
    },
};

/// A connection able to submit transactions and read accounts.
#[allow(async_fn_in_trait)]
pub trait TransactionExecutor {
    /// Blockhash to sign new transactions with.
    async fn latest_blockhash(&mut self) -> Result<Hash, RewardsCenterClientError>;

    /// Sends a signed transaction and waits for it to be confirmed.
    async fn submit_transaction(
        &mut self,
        transaction: &Transaction,
    ) -> Result<Signature, RewardsCenterClientError>;

    /// Reads an account, returning `None` if it does not exist.
    async fn fetch_account(
        &mut self,
        address: &Pubkey,
    ) -> Result<Option<Account>, RewardsCenterClientError>;
}

impl TransactionExecutor for RpcClient {
    async fn latest_blockhash(&mut self) -> Result<Hash, RewardsCenterClientError> {
        Ok(self.get_latest_blockhash().await?)
    }

    async fn submit_transaction(
        &mut self,
        transaction: &Transaction,
    ) -> Result<Signature, RewardsCenterClientError> {
        Ok(self.send_and_confirm_transaction(transaction).await?)
    }

    async fn fetch_account(
        &mut self,
        address: &Pubkey,
    ) -> Result<Option<Account>, RewardsCenterClientError> {
        Ok(self
            .get_account_with_commitment(address, self.commitment())
            .await?
            .value)
    }
}

/// Signs a transaction with a fresh blockhash and submits it.
///
/// The transaction must already name its fee payer, and `signers` must
/// cover every signer it requires. Failures are returned as they come from
/// the signer or the executor; nothing is retried.
pub async fn execute_transaction<E: TransactionExecutor>(
    executor: &mut E,
    mut transaction: Transaction,
    signers: &[&dyn Signer],
) -> Result<Signature, RewardsCenterClientError> {
    let recent_blockhash = executor.latest_blockhash().await?;
    transaction.try_sign(signers, recent_blockhash)?;
    let signature = executor.submit_transaction(&transaction).await?;
    debug!("Confirmed transaction {signature}");
    Ok(signature)
}
