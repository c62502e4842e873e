//! Typed handle on the Rewards Center program.

use {
    crate::{
        error::RewardsCenterClientError,
        executor::{execute_transaction, TransactionExecutor},
        instruction::{self, InitPaymentInfoIx, UpdatePaymentInfoIx},
        state::{get_payment_info_address, AccountData, PaymentInfo},
    },
    solana_client::nonblocking::rpc_client::RpcClient,
    solana_sdk::{
        commitment_config::CommitmentConfig,
        instruction::Instruction,
        pubkey::Pubkey,
        signature::{Keypair, Signature, Signer},
        transaction::Transaction,
    },
};

/// A connection to the Rewards Center program paired with the wallet that
/// signs and pays for its transactions.
pub struct RewardsCenterProgram<E> {
    executor: E,
    wallet: Box<dyn Signer>,
}

impl RewardsCenterProgram<RpcClient> {
    /// Connects to an RPC endpoint.
    ///
    /// Without a wallet the handle signs with a freshly generated keypair,
    /// which is enough for reads. Without a commitment the RPC client
    /// default applies.
    pub fn connect(
        url: impl ToString,
        wallet: Option<Box<dyn Signer>>,
        commitment: Option<CommitmentConfig>,
    ) -> Self {
        let rpc_client =
            RpcClient::new_with_commitment(url.to_string(), commitment.unwrap_or_default());
        Self::new(rpc_client, wallet)
    }
}

impl<E: TransactionExecutor> RewardsCenterProgram<E> {
    pub fn new(executor: E, wallet: Option<Box<dyn Signer>>) -> Self {
        let wallet = wallet.unwrap_or_else(|| Box::new(Keypair::new()));
        Self { executor, wallet }
    }

    pub fn program_id(&self) -> Pubkey {
        crate::id()
    }

    pub fn wallet(&self) -> &dyn Signer {
        self.wallet.as_ref()
    }

    pub fn executor_mut(&mut self) -> &mut E {
        &mut self.executor
    }

    /// Builds an `initPaymentInfo` instruction paid for by the wallet.
    pub fn init_payment_info(
        &self,
        ix: InitPaymentInfoIx,
    ) -> Result<Instruction, RewardsCenterClientError> {
        let payment_info = get_payment_info_address(&ix.identifier)?;
        Ok(instruction::init_payment_info(
            &payment_info,
            &self.wallet.pubkey(),
            ix,
        ))
    }

    /// Builds an `updatePaymentInfo` instruction with the wallet as both the
    /// signing authority and the payer.
    pub fn update_payment_info(&self, payment_info: &Pubkey, ix: UpdatePaymentInfoIx) -> Instruction {
        let wallet = self.wallet.pubkey();
        instruction::update_payment_info(payment_info, &wallet, &wallet, ix)
    }

    /// Fetches and decodes a program account.
    pub async fn fetch_account<T: AccountData>(
        &mut self,
        address: &Pubkey,
    ) -> Result<T, RewardsCenterClientError> {
        let account = self
            .executor
            .fetch_account(address)
            .await?
            .ok_or(RewardsCenterClientError::AccountNotFound(*address))?;
        if account.owner != crate::id() {
            return Err(RewardsCenterClientError::IncorrectAccountOwner {
                address: *address,
                owner: account.owner,
            });
        }
        T::try_from_account_data(&account.data)
    }

    pub async fn fetch_payment_info(
        &mut self,
        address: &Pubkey,
    ) -> Result<PaymentInfo, RewardsCenterClientError> {
        self.fetch_account(address).await
    }

    /// Signs a transaction with the wallet and submits it.
    pub async fn execute_transaction(
        &mut self,
        transaction: Transaction,
    ) -> Result<Signature, RewardsCenterClientError> {
        execute_transaction(&mut self.executor, transaction, &[self.wallet.as_ref()]).await
    }
}
