//! Payment info commands.

use {
    crate::{
        constants::BASIS_POINTS_DIVISOR,
        state::{total_basis_points, PaymentShare},
    },
    log::warn,
    solana_program::{pubkey, pubkey::Pubkey},
};

pub mod init_payment_info;
pub mod payment_info;
pub mod update_payment_info;

/// Identifier of the payment info used when none is given.
pub const DEFAULT_IDENTIFIER: &str = "cardinal-default";
/// Default payment amount, in the smallest unit of the payment mint.
pub const DEFAULT_PAYMENT_AMOUNT: u64 = 2_000_000;
/// Recipient of the whole payment by default.
pub const DEFAULT_PAYMENT_RECIPIENT: Pubkey =
    pubkey!("4dNCRewnFfS89p7BAV3rnJu6NKnDoKxzsY1pAX7Ga5JT");

/// A single share paying everything to [DEFAULT_PAYMENT_RECIPIENT].
pub fn default_payment_shares() -> Vec<PaymentShare> {
    vec![PaymentShare::new(DEFAULT_PAYMENT_RECIPIENT, 10_000)]
}

// Shares are never rejected locally, an unbalanced split is only reported.
fn warn_on_unbalanced_shares(identifier: &str, shares: &[PaymentShare]) {
    let total = total_basis_points(shares);
    if u64::from(total) != BASIS_POINTS_DIVISOR {
        warn!(
            "Payment shares for {identifier} add up to {total} basis points, expected {BASIS_POINTS_DIVISOR}"
        );
    }
}
