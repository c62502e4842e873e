//! `initPaymentInfo`: creates a payment info at the address derived from its
//! identifier.

use {
    super::{
        default_payment_shares, warn_on_unbalanced_shares, DEFAULT_IDENTIFIER,
        DEFAULT_PAYMENT_AMOUNT,
    },
    crate::{
        error::RewardsCenterClientError, executor::TransactionExecutor,
        instruction::InitPaymentInfoIx, program::RewardsCenterProgram,
        state::get_payment_info_address,
    },
    log::{debug, info},
    solana_sdk::{
        pubkey::Pubkey,
        signature::{Signature, Signer},
        transaction::Transaction,
    },
};

pub const COMMAND_NAME: &str = "initPaymentInfo";
pub const DESCRIPTION: &str = "Create a payment info object";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Args {
    pub ix: InitPaymentInfoIx,
}

pub fn get_args(wallet: &Pubkey) -> Args {
    Args {
        ix: InitPaymentInfoIx {
            authority: *wallet,
            identifier: DEFAULT_IDENTIFIER.to_string(),
            payment_amount: DEFAULT_PAYMENT_AMOUNT,
            payment_mint: Pubkey::default(),
            payment_shares: default_payment_shares(),
        },
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitPaymentInfoOutcome {
    pub payment_info: Pubkey,
    pub ix: InitPaymentInfoIx,
    pub signature: Signature,
}

impl InitPaymentInfoOutcome {
    pub fn confirmation(&self) -> String {
        format!(
            "Created payment manager {} [{}] {:#}",
            self.ix.identifier,
            self.payment_info,
            self.ix.to_json()
        )
    }
}

pub fn build_transaction<E: TransactionExecutor>(
    program: &RewardsCenterProgram<E>,
    args: &Args,
) -> Result<(Pubkey, Transaction), RewardsCenterClientError> {
    let payment_info = get_payment_info_address(&args.ix.identifier)?;
    debug!("Payment info {} derived from `{}`", payment_info, args.ix.identifier);
    let instruction = program.init_payment_info(args.ix.clone())?;
    let transaction =
        Transaction::new_with_payer(&[instruction], Some(&program.wallet().pubkey()));
    Ok((payment_info, transaction))
}

pub async fn handler<E: TransactionExecutor>(
    program: &mut RewardsCenterProgram<E>,
    args: Args,
) -> Result<InitPaymentInfoOutcome, RewardsCenterClientError> {
    warn_on_unbalanced_shares(&args.ix.identifier, &args.ix.payment_shares);
    let (payment_info, transaction) = build_transaction(program, &args)?;
    let signature = program.execute_transaction(transaction).await?;

    let outcome = InitPaymentInfoOutcome {
        payment_info,
        ix: args.ix,
        signature,
    };
    info!("{}", outcome.confirmation());
    Ok(outcome)
}
