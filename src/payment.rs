//! Accounts consumed by the program when it charges a payment info.
//!
//! Instructions that charge a fee (staking, unstaking, claiming rewards,
//! boosting) take the payment accounts as trailing accounts. The program
//! walks them in a fixed order, so they have to be appended exactly as
//! [remaining_accounts_for_payment] lays them out.

use {
    crate::state::PaymentInfo,
    solana_program::{instruction::AccountMeta, pubkey::Pubkey, system_program},
    spl_associated_token_account::get_associated_token_address,
};

/// Builds the trailing accounts for a payment.
///
/// The payment info itself always comes first. A zero payment stops there.
/// Otherwise the payer, the transfer program (system program for native SOL,
/// SPL Token otherwise) and, for tokens, the payer's associated token account
/// follow, then one account per share with non-zero basis points: the
/// recipient for native SOL, or its associated token account for tokens.
pub fn remaining_accounts_for_payment(
    payment_info_address: &Pubkey,
    payment_info: &PaymentInfo,
    payer_address: &Pubkey,
) -> Vec<AccountMeta> {
    let mut accounts = vec![AccountMeta::new_readonly(*payment_info_address, false)];
    if payment_info.payment_amount == 0 {
        return accounts;
    }

    accounts.push(AccountMeta::new(*payer_address, true));
    if payment_info.is_native() {
        accounts.push(AccountMeta::new_readonly(system_program::id(), false));
    } else {
        accounts.push(AccountMeta::new_readonly(spl_token::id(), false));
        accounts.push(AccountMeta::new(
            get_associated_token_address(payer_address, &payment_info.payment_mint),
            false,
        ));
    }

    accounts.extend(
        payment_info
            .payment_shares
            .iter()
            .filter(|share| share.basis_points != 0)
            .map(|share| {
                let recipient = if payment_info.is_native() {
                    share.address
                } else {
                    get_associated_token_address(&share.address, &payment_info.payment_mint)
                };
                AccountMeta::new(recipient, false)
            }),
    );
    accounts
}
