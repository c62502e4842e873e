//! Addresses and limits shared by every Rewards Center client.

use solana_program::{pubkey, pubkey::Pubkey};

/// The deployed Rewards Center program.
pub const REWARDS_CENTER_ADDRESS: Pubkey = crate::ID;

/// Payment info charged for wrapped SOL payment flows.
pub const WRAPPED_SOL_PAYMENT_INFO: Pubkey =
    pubkey!("3UVg7heyuV66n2RpfC1h39FPUgvdF4D5AZh99grBDUu5");

/// Payment info charged for native SOL payment flows.
pub const SOL_PAYMENT_INFO: Pubkey = pubkey!("3UVg7heyuV66n2RpfC1h39FPUgvdF4D5AZh99grBDUu5");

/// Payment info used when a pool does not configure one.
pub const DEFAULT_PAYMENT_INFO: Pubkey = pubkey!("3UVg7heyuV66n2RpfC1h39FPUgvdF4D5AZh99grBDUu5");

/// Basis points representing 100% of a payment.
pub const BASIS_POINTS_DIVISOR: u64 = 10_000;
