//! `updatePaymentInfo`: replaces the terms of an existing payment info.

use {
    super::{
        default_payment_shares, warn_on_unbalanced_shares, DEFAULT_IDENTIFIER,
        DEFAULT_PAYMENT_AMOUNT,
    },
    crate::{
        error::RewardsCenterClientError, executor::TransactionExecutor,
        instruction::UpdatePaymentInfoIx, program::RewardsCenterProgram,
        state::get_payment_info_address,
    },
    log::{debug, info},
    solana_sdk::{
        pubkey::Pubkey,
        signature::{Signature, Signer},
        transaction::Transaction,
    },
};

pub const COMMAND_NAME: &str = "updatePaymentInfo";
pub const DESCRIPTION: &str = "Update a payment info object";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Args {
    /// Identifier the payment info was created with.
    pub identifier: String,
    pub ix: UpdatePaymentInfoIx,
}

/// Default arguments: hand the `cardinal-default` payment info to `wallet`
/// and charge 0.002 SOL, all paid to the default recipient.
pub fn get_args(wallet: &Pubkey) -> Args {
    Args {
        identifier: DEFAULT_IDENTIFIER.to_string(),
        ix: UpdatePaymentInfoIx {
            authority: *wallet,
            payment_amount: DEFAULT_PAYMENT_AMOUNT,
            payment_mint: Pubkey::default(),
            payment_shares: default_payment_shares(),
        },
    }
}

/// Result of a submitted update.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdatePaymentInfoOutcome {
    pub identifier: String,
    pub payment_info: Pubkey,
    pub ix: UpdatePaymentInfoIx,
    pub signature: Signature,
}

impl UpdatePaymentInfoOutcome {
    pub fn confirmation(&self) -> String {
        format!(
            "Updated payment manager {} [{}] {:#}",
            self.identifier,
            self.payment_info,
            self.ix.to_json()
        )
    }
}

/// Builds the unsigned update transaction, paid for by the program wallet.
///
/// Returns the derived payment info address along with the transaction.
pub fn build_transaction<E: TransactionExecutor>(
    program: &RewardsCenterProgram<E>,
    args: &Args,
) -> Result<(Pubkey, Transaction), RewardsCenterClientError> {
    let payment_info = get_payment_info_address(&args.identifier)?;
    debug!("Payment info {} derived from `{}`", payment_info, args.identifier);
    let instruction = program.update_payment_info(&payment_info, args.ix.clone());
    let transaction =
        Transaction::new_with_payer(&[instruction], Some(&program.wallet().pubkey()));
    Ok((payment_info, transaction))
}

pub async fn handler<E: TransactionExecutor>(
    program: &mut RewardsCenterProgram<E>,
    args: Args,
) -> Result<UpdatePaymentInfoOutcome, RewardsCenterClientError> {
    warn_on_unbalanced_shares(&args.identifier, &args.ix.payment_shares);
    let (payment_info, transaction) = build_transaction(program, &args)?;
    let signature = program.execute_transaction(transaction).await?;

    let outcome = UpdatePaymentInfoOutcome {
        identifier: args.identifier,
        payment_info,
        ix: args.ix,
        signature,
    };
    info!("{}", outcome.confirmation());
    Ok(outcome)
}
