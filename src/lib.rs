//! Client for the Rewards Center program.
//!
//! The program itself lives on chain at a pinned address. This crate
//! describes its accounts and instructions, derives its addresses, builds
//! and submits its transactions, and ships the `rewards-center` CLI on top.

pub mod config;
pub mod constants;
pub mod error;
pub mod executor;
pub mod idl;
pub mod instruction;
pub mod payment;
pub mod program;
pub mod state;
pub mod tools;

solana_program::declare_id!("E2Wc4racSRRp8EBrMH3n1AYSjuFt4JiLdh14J58UiyDu");
