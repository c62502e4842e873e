//! Program state types.
//!
//! Every account owned by the Rewards Center program is stored the Anchor
//! way: an 8-byte discriminator derived from the account type name, followed
//! by the Borsh encoding of the account struct. Accounts may be allocated
//! with more space than their current contents need (payment infos are
//! resized as shares are added and removed), so decoding ignores trailing
//! bytes.
//!
//! The structs here are views over remote data. The client never mutates
//! them in place; changes are proposed by submitting instructions.

use {
    crate::{error::RewardsCenterClientError, idl::IdlField, idl::IdlType},
    borsh::{BorshDeserialize, BorshSerialize},
    shank::ShankAccount,
    solana_program::{hash::hash, pubkey::Pubkey},
};

/// The seed prefix (`"payment-info"`) in bytes used to derive the address of
/// a payment info account.
/// Seeds: `"payment-info" + identifier`.
pub const SEED_PREFIX_PAYMENT_INFO: &[u8] = b"payment-info";
/// The seed prefix (`"stake-pool"`) in bytes used to derive the address of a
/// stake pool.
/// Seeds: `"stake-pool" + identifier`.
pub const SEED_PREFIX_STAKE_POOL: &[u8] = b"stake-pool";
/// The seed prefix (`"stake-entry"`) in bytes used to derive the address of a
/// stake entry.
/// Seeds: `"stake-entry" + stake_pool_address + stake_mint_address + staker`.
pub const SEED_PREFIX_STAKE_ENTRY: &[u8] = b"stake-entry";
/// Seeds: `"reward-distributor" + stake_pool_address + identifier`.
pub const SEED_PREFIX_REWARD_DISTRIBUTOR: &[u8] = b"reward-distributor";
/// Seeds: `"reward-entry" + reward_distributor_address + stake_entry_address`.
pub const SEED_PREFIX_REWARD_ENTRY: &[u8] = b"reward-entry";
/// Seeds: `"receipt-manager" + stake_pool_address + name`.
pub const SEED_PREFIX_RECEIPT_MANAGER: &[u8] = b"receipt-manager";
/// Seeds: `"reward-receipt" + receipt_manager_address + stake_entry_address`.
pub const SEED_PREFIX_REWARD_RECEIPT: &[u8] = b"reward-receipt";
/// Seeds: `"stake-booster" + stake_pool_address + identifier`.
pub const SEED_PREFIX_STAKE_BOOSTER: &[u8] = b"stake-booster";
/// Seeds: `"stake-authorization" + stake_pool_address + mint_address`.
pub const SEED_PREFIX_STAKE_AUTHORIZATION: &[u8] = b"stake-authorization";

/// Computes an Anchor discriminator: the first 8 bytes of
/// `sha256("<namespace>:<name>")`.
pub fn discriminator(namespace: &str, name: &str) -> [u8; 8] {
    let preimage = format!("{namespace}:{name}");
    let mut discriminator = [0; 8];
    discriminator.copy_from_slice(&hash(preimage.as_bytes()).to_bytes()[..8]);
    discriminator
}

fn find_address_with_string_seed(
    seeds: &[&[u8]],
    string_seed: &str,
) -> Result<(Pubkey, u8), RewardsCenterClientError> {
    Pubkey::try_find_program_address(seeds, &crate::id())
        .ok_or_else(|| RewardsCenterClientError::SeedTooLong(string_seed.to_string()))
}

/// Derive the address of a payment info account.
pub fn get_payment_info_address(identifier: &str) -> Result<Pubkey, RewardsCenterClientError> {
    get_payment_info_address_and_bump_seed(identifier).map(|(address, _)| address)
}

/// Derive the address of a payment info account, with bump seed.
pub fn get_payment_info_address_and_bump_seed(
    identifier: &str,
) -> Result<(Pubkey, u8), RewardsCenterClientError> {
    find_address_with_string_seed(&collect_payment_info_seeds(identifier), identifier)
}

pub(crate) fn collect_payment_info_seeds(identifier: &str) -> [&[u8]; 2] {
    [SEED_PREFIX_PAYMENT_INFO, identifier.as_bytes()]
}

/// Derive the address of a stake pool.
pub fn get_stake_pool_address(identifier: &str) -> Result<Pubkey, RewardsCenterClientError> {
    find_address_with_string_seed(&[SEED_PREFIX_STAKE_POOL, identifier.as_bytes()], identifier)
        .map(|(address, _)| address)
}

/// Derive the address of a stake entry.
///
/// Non-fungible stakes are keyed by the mint alone, so `staker` is `None`
/// for them and the default key takes its place in the seeds.
pub fn get_stake_entry_address(
    stake_pool_address: &Pubkey,
    stake_mint_address: &Pubkey,
    staker: Option<&Pubkey>,
) -> Pubkey {
    let staker = staker.copied().unwrap_or_default();
    Pubkey::find_program_address(
        &[
            SEED_PREFIX_STAKE_ENTRY,
            stake_pool_address.as_ref(),
            stake_mint_address.as_ref(),
            staker.as_ref(),
        ],
        &crate::id(),
    )
    .0
}

/// Derive the address of a reward distributor.
pub fn get_reward_distributor_address(stake_pool_address: &Pubkey, identifier: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[
            SEED_PREFIX_REWARD_DISTRIBUTOR,
            stake_pool_address.as_ref(),
            &identifier.to_le_bytes(),
        ],
        &crate::id(),
    )
    .0
}

/// Derive the address of a reward entry.
pub fn get_reward_entry_address(
    reward_distributor_address: &Pubkey,
    stake_entry_address: &Pubkey,
) -> Pubkey {
    Pubkey::find_program_address(
        &[
            SEED_PREFIX_REWARD_ENTRY,
            reward_distributor_address.as_ref(),
            stake_entry_address.as_ref(),
        ],
        &crate::id(),
    )
    .0
}

/// Derive the address of a receipt manager.
pub fn get_receipt_manager_address(
    stake_pool_address: &Pubkey,
    name: &str,
) -> Result<Pubkey, RewardsCenterClientError> {
    find_address_with_string_seed(
        &[
            SEED_PREFIX_RECEIPT_MANAGER,
            stake_pool_address.as_ref(),
            name.as_bytes(),
        ],
        name,
    )
    .map(|(address, _)| address)
}

/// Derive the address of a reward receipt.
pub fn get_reward_receipt_address(
    receipt_manager_address: &Pubkey,
    stake_entry_address: &Pubkey,
) -> Pubkey {
    Pubkey::find_program_address(
        &[
            SEED_PREFIX_REWARD_RECEIPT,
            receipt_manager_address.as_ref(),
            stake_entry_address.as_ref(),
        ],
        &crate::id(),
    )
    .0
}

/// Derive the address of a stake booster.
pub fn get_stake_booster_address(stake_pool_address: &Pubkey, identifier: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[
            SEED_PREFIX_STAKE_BOOSTER,
            stake_pool_address.as_ref(),
            &identifier.to_le_bytes(),
        ],
        &crate::id(),
    )
    .0
}

/// Derive the address of a stake authorization record.
pub fn get_stake_authorization_address(stake_pool_address: &Pubkey, mint_address: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[
            SEED_PREFIX_STAKE_AUTHORIZATION,
            stake_pool_address.as_ref(),
            mint_address.as_ref(),
        ],
        &crate::id(),
    )
    .0
}

/// An account kind owned by the Rewards Center program.
pub trait AccountData: BorshSerialize + BorshDeserialize {
    /// Type name, as it appears in the IDL.
    const NAME: &'static str;
    /// Field layout, in serialization order.
    const FIELDS: &'static [IdlField];

    fn discriminator() -> [u8; 8] {
        discriminator("account", Self::NAME)
    }

    /// Decodes raw account data, checking the discriminator.
    fn try_from_account_data(data: &[u8]) -> Result<Self, RewardsCenterClientError> {
        if data.len() < 8 || data[..8] != Self::discriminator() {
            return Err(RewardsCenterClientError::InvalidAccountDiscriminator(
                Self::NAME,
            ));
        }
        let mut body = &data[8..];
        Ok(Self::deserialize(&mut body)?)
    }

    /// Encodes the account as it is stored on chain.
    fn to_account_data(&self) -> Result<Vec<u8>, RewardsCenterClientError> {
        let mut data = Self::discriminator().to_vec();
        self.serialize(&mut data)?;
        Ok(data)
    }
}

/// A recipient of a payment and its share in basis points.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, Eq, PartialEq)]
pub struct PaymentShare {
    pub address: Pubkey,
    pub basis_points: u16,
}

impl PaymentShare {
    pub const FIELDS: &'static [IdlField] = &[
        IdlField::new("address", IdlType::PUBKEY),
        IdlField::new("basisPoints", IdlType::U16),
    ];

    pub fn new(address: Pubkey, basis_points: u16) -> Self {
        Self {
            address,
            basis_points,
        }
    }
}

/// Sum of the basis points of a list of shares.
///
/// The program expects the shares of a payment info to add up to 10000.
/// Nothing here enforces it.
pub fn total_basis_points(shares: &[PaymentShare]) -> u32 {
    shares.iter().map(|share| u32::from(share.basis_points)).sum()
}

/// A fee charged by the program for an action, split between recipients.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, Eq, PartialEq, ShankAccount)]
pub struct PaymentInfo {
    pub bump: u8,
    /// Key allowed to update the payment info.
    pub authority: Pubkey,
    /// The identifier the address was derived from.
    pub identifier: String,
    /// Amount charged, in the smallest unit of `payment_mint`.
    pub payment_amount: u64,
    /// Mint of the payment. The default key means native SOL.
    pub payment_mint: Pubkey,
    pub payment_shares: Vec<PaymentShare>,
}

impl AccountData for PaymentInfo {
    const NAME: &'static str = "PaymentInfo";
    const FIELDS: &'static [IdlField] = &[
        IdlField::new("bump", IdlType::U8),
        IdlField::new("authority", IdlType::PUBKEY),
        IdlField::new("identifier", IdlType::STRING),
        IdlField::new("paymentAmount", IdlType::U64),
        IdlField::new("paymentMint", IdlType::PUBKEY),
        IdlField::new(
            "paymentShares",
            IdlType::Vec {
                vec: &IdlType::Defined {
                    defined: "PaymentShare",
                },
            },
        ),
    ];
}

impl PaymentInfo {
    /// Whether payments are made in native SOL rather than an SPL token.
    pub fn is_native(&self) -> bool {
        self.payment_mint == Pubkey::default()
    }
}

/// A pool that NFTs or fungible tokens can be staked into.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, Eq, PartialEq, ShankAccount)]
pub struct StakePool {
    pub bump: u8,
    pub authority: Pubkey,
    pub total_staked: u32,
    pub reset_on_unstake: bool,
    pub cooldown_seconds: Option<u32>,
    pub min_stake_seconds: Option<u32>,
    pub end_date: Option<i64>,
    pub stake_payment_info: Pubkey,
    pub unstake_payment_info: Pubkey,
    pub requires_authorization: bool,
    pub allowed_creators: Vec<Pubkey>,
    pub allowed_collections: Vec<Pubkey>,
    pub identifier: String,
}

impl AccountData for StakePool {
    const NAME: &'static str = "StakePool";
    const FIELDS: &'static [IdlField] = &[
        IdlField::new("bump", IdlType::U8),
        IdlField::new("authority", IdlType::PUBKEY),
        IdlField::new("totalStaked", IdlType::U32),
        IdlField::new("resetOnUnstake", IdlType::BOOL),
        IdlField::new("cooldownSeconds", IdlType::Option { option: &IdlType::U32 }),
        IdlField::new("minStakeSeconds", IdlType::Option { option: &IdlType::U32 }),
        IdlField::new("endDate", IdlType::Option { option: &IdlType::I64 }),
        IdlField::new("stakePaymentInfo", IdlType::PUBKEY),
        IdlField::new("unstakePaymentInfo", IdlType::PUBKEY),
        IdlField::new("requiresAuthorization", IdlType::BOOL),
        IdlField::new("allowedCreators", IdlType::Vec { vec: &IdlType::PUBKEY }),
        IdlField::new("allowedCollections", IdlType::Vec { vec: &IdlType::PUBKEY }),
        IdlField::new("identifier", IdlType::STRING),
    ];
}

/// Tracks a single staked mint (or a staker's fungible position) in a pool.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, Eq, PartialEq, ShankAccount)]
pub struct StakeEntry {
    pub bump: u8,
    pub kind: u8,
    pub pool: Pubkey,
    pub amount: u64,
    pub stake_mint: Pubkey,
    pub last_staker: Pubkey,
    pub last_staked_at: i64,
    pub last_updated_at: i64,
    pub total_stake_seconds: u128,
    pub used_stake_seconds: u128,
    pub cooldown_start_seconds: Option<i64>,
    pub multiplier_stake_seconds: Option<u128>,
    pub multiplier_basis_points: Option<u64>,
}

impl AccountData for StakeEntry {
    const NAME: &'static str = "StakeEntry";
    const FIELDS: &'static [IdlField] = &[
        IdlField::new("bump", IdlType::U8),
        IdlField::new("kind", IdlType::U8),
        IdlField::new("pool", IdlType::PUBKEY),
        IdlField::new("amount", IdlType::U64),
        IdlField::new("stakeMint", IdlType::PUBKEY),
        IdlField::new("lastStaker", IdlType::PUBKEY),
        IdlField::new("lastStakedAt", IdlType::I64),
        IdlField::new("lastUpdatedAt", IdlType::I64),
        IdlField::new("totalStakeSeconds", IdlType::U128),
        IdlField::new("usedStakeSeconds", IdlType::U128),
        IdlField::new("cooldownStartSeconds", IdlType::Option { option: &IdlType::I64 }),
        IdlField::new("multiplierStakeSeconds", IdlType::Option { option: &IdlType::U128 }),
        IdlField::new("multiplierBasisPoints", IdlType::Option { option: &IdlType::U64 }),
    ];
}

/// Distributes a reward mint to the entries of a stake pool.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, Eq, PartialEq, ShankAccount)]
pub struct RewardDistributor {
    pub bump: u8,
    pub stake_pool: Pubkey,
    pub kind: u8,
    pub authority: Pubkey,
    pub identifier: u64,
    pub reward_mint: Pubkey,
    pub reward_amount: u64,
    pub reward_duration_seconds: u128,
    pub rewards_issued: u128,
    pub default_multiplier: u64,
    pub multiplier_decimals: u8,
    pub claim_rewards_payment_info: Pubkey,
    pub max_reward_seconds_received: Option<u128>,
}

impl AccountData for RewardDistributor {
    const NAME: &'static str = "RewardDistributor";
    const FIELDS: &'static [IdlField] = &[
        IdlField::new("bump", IdlType::U8),
        IdlField::new("stakePool", IdlType::PUBKEY),
        IdlField::new("kind", IdlType::U8),
        IdlField::new("authority", IdlType::PUBKEY),
        IdlField::new("identifier", IdlType::U64),
        IdlField::new("rewardMint", IdlType::PUBKEY),
        IdlField::new("rewardAmount", IdlType::U64),
        IdlField::new("rewardDurationSeconds", IdlType::U128),
        IdlField::new("rewardsIssued", IdlType::U128),
        IdlField::new("defaultMultiplier", IdlType::U64),
        IdlField::new("multiplierDecimals", IdlType::U8),
        IdlField::new("claimRewardsPaymentInfo", IdlType::PUBKEY),
        IdlField::new(
            "maxRewardSecondsReceived",
            IdlType::Option { option: &IdlType::U128 },
        ),
    ];
}

/// Rewards received by one stake entry from one distributor.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, Eq, PartialEq, ShankAccount)]
pub struct RewardEntry {
    pub bump: u8,
    pub stake_entry: Pubkey,
    pub reward_distributor: Pubkey,
    pub reward_seconds_received: u128,
    pub multiplier: u64,
}

impl AccountData for RewardEntry {
    const NAME: &'static str = "RewardEntry";
    const FIELDS: &'static [IdlField] = &[
        IdlField::new("bump", IdlType::U8),
        IdlField::new("stakeEntry", IdlType::PUBKEY),
        IdlField::new("rewardDistributor", IdlType::PUBKEY),
        IdlField::new("rewardSecondsReceived", IdlType::U128),
        IdlField::new("multiplier", IdlType::U64),
    ];
}

/// Lets stakers spend accumulated stake seconds on receipts.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, Eq, PartialEq, ShankAccount)]
pub struct ReceiptManager {
    pub bump: u8,
    pub stake_pool: Pubkey,
    pub authority: Pubkey,
    pub required_stake_seconds: u128,
    pub stake_seconds_to_use: u128,
    pub claimed_receipts_counter: u128,
    pub requires_authorization: bool,
    pub name: String,
    pub payment_mint: Pubkey,
    pub payment_manager: Pubkey,
    pub payment_recipient: Pubkey,
    pub max_claimed_receipts: Option<u128>,
    pub claim_action_payment_info: Pubkey,
}

impl AccountData for ReceiptManager {
    const NAME: &'static str = "ReceiptManager";
    const FIELDS: &'static [IdlField] = &[
        IdlField::new("bump", IdlType::U8),
        IdlField::new("stakePool", IdlType::PUBKEY),
        IdlField::new("authority", IdlType::PUBKEY),
        IdlField::new("requiredStakeSeconds", IdlType::U128),
        IdlField::new("stakeSecondsToUse", IdlType::U128),
        IdlField::new("claimedReceiptsCounter", IdlType::U128),
        IdlField::new("requiresAuthorization", IdlType::BOOL),
        IdlField::new("name", IdlType::STRING),
        IdlField::new("paymentMint", IdlType::PUBKEY),
        IdlField::new("paymentManager", IdlType::PUBKEY),
        IdlField::new("paymentRecipient", IdlType::PUBKEY),
        IdlField::new("maxClaimedReceipts", IdlType::Option { option: &IdlType::U128 }),
        IdlField::new("claimActionPaymentInfo", IdlType::PUBKEY),
    ];
}

/// A receipt claimed by a stake entry from a receipt manager.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, Eq, PartialEq, ShankAccount)]
pub struct RewardReceipt {
    pub bump: u8,
    pub stake_entry: Pubkey,
    pub receipt_manager: Pubkey,
    pub target: Pubkey,
    pub allowed: bool,
}

impl AccountData for RewardReceipt {
    const NAME: &'static str = "RewardReceipt";
    const FIELDS: &'static [IdlField] = &[
        IdlField::new("bump", IdlType::U8),
        IdlField::new("stakeEntry", IdlType::PUBKEY),
        IdlField::new("receiptManager", IdlType::PUBKEY),
        IdlField::new("target", IdlType::PUBKEY),
        IdlField::new("allowed", IdlType::BOOL),
    ];
}

/// Sells extra stake seconds to the entries of a pool.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, Eq, PartialEq, ShankAccount)]
pub struct StakeBooster {
    pub bump: u8,
    pub stake_pool: Pubkey,
    pub identifier: u64,
    pub payment_amount: u64,
    pub payment_mint: Pubkey,
    pub payment_manager: Pubkey,
    pub boost_seconds: u128,
    pub start_time_seconds: i64,
    pub boost_action_payment_info: Pubkey,
}

impl AccountData for StakeBooster {
    const NAME: &'static str = "StakeBooster";
    const FIELDS: &'static [IdlField] = &[
        IdlField::new("bump", IdlType::U8),
        IdlField::new("stakePool", IdlType::PUBKEY),
        IdlField::new("identifier", IdlType::U64),
        IdlField::new("paymentAmount", IdlType::U64),
        IdlField::new("paymentMint", IdlType::PUBKEY),
        IdlField::new("paymentManager", IdlType::PUBKEY),
        IdlField::new("boostSeconds", IdlType::U128),
        IdlField::new("startTimeSeconds", IdlType::I64),
        IdlField::new("boostActionPaymentInfo", IdlType::PUBKEY),
    ];
}

/// Allows a mint into a pool that requires authorization.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, Eq, PartialEq, ShankAccount)]
pub struct StakeAuthorizationRecord {
    pub bump: u8,
    pub pool: Pubkey,
    pub mint: Pubkey,
}

impl AccountData for StakeAuthorizationRecord {
    const NAME: &'static str = "StakeAuthorizationRecord";
    const FIELDS: &'static [IdlField] = &[
        IdlField::new("bump", IdlType::U8),
        IdlField::new("pool", IdlType::PUBKEY),
        IdlField::new("mint", IdlType::PUBKEY),
    ];
}
