//! `paymentInfo`: reads a payment info back from the chain.

use {
    super::DEFAULT_IDENTIFIER,
    crate::{
        error::RewardsCenterClientError,
        executor::TransactionExecutor,
        program::RewardsCenterProgram,
        state::{get_payment_info_address, total_basis_points, PaymentInfo},
    },
    serde_json::{json, Value},
    solana_sdk::pubkey::Pubkey,
};

pub const COMMAND_NAME: &str = "paymentInfo";
pub const DESCRIPTION: &str = "Show a payment info object";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Args {
    pub identifier: String,
}

pub fn get_args() -> Args {
    Args {
        identifier: DEFAULT_IDENTIFIER.to_string(),
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentInfoOutcome {
    pub payment_info: Pubkey,
    pub data: PaymentInfo,
}

impl PaymentInfoOutcome {
    pub fn to_json(&self) -> Value {
        let data = &self.data;
        json!({
            "address": self.payment_info.to_string(),
            "identifier": data.identifier,
            "authority": data.authority.to_string(),
            "paymentAmount": data.payment_amount,
            "paymentMint": data.payment_mint.to_string(),
            "paymentShares": data
                .payment_shares
                .iter()
                .map(|share| json!({
                    "address": share.address.to_string(),
                    "basisPoints": share.basis_points,
                }))
                .collect::<Vec<_>>(),
            "totalBasisPoints": total_basis_points(&data.payment_shares),
        })
    }
}

pub async fn handler<E: TransactionExecutor>(
    program: &mut RewardsCenterProgram<E>,
    args: Args,
) -> Result<PaymentInfoOutcome, RewardsCenterClientError> {
    let payment_info = get_payment_info_address(&args.identifier)?;
    let data = program.fetch_payment_info(&payment_info).await?;
    Ok(PaymentInfoOutcome { payment_info, data })
}
