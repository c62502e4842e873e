//! Program instruction types.
//!
//! Instruction data follows the Anchor layout: an 8-byte discriminator
//! (`sha256("global:<method>")[..8]`) followed by the Borsh encoding of the
//! instruction arguments.

use {
    crate::{
        idl::{IdlField, IdlType},
        state::{discriminator, PaymentShare},
    },
    borsh::{
        io::{Result as IoResult, Write},
        BorshDeserialize, BorshSerialize,
    },
    serde_json::{json, Value},
    shank::ShankInstruction,
    solana_program::{
        instruction::{AccountMeta, Instruction},
        program_error::ProgramError,
        pubkey::Pubkey,
        system_program,
    },
};

const PAYMENT_SHARES: IdlType = IdlType::Vec {
    vec: &IdlType::Defined {
        defined: "PaymentShare",
    },
};

fn payment_shares_json(shares: &[PaymentShare]) -> Value {
    shares
        .iter()
        .map(|share| {
            json!({
                "address": share.address.to_string(),
                "basisPoints": share.basis_points,
            })
        })
        .collect()
}

/// Arguments of [InitPaymentInfo](enum.RewardsCenterInstruction.html).
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct InitPaymentInfoIx {
    pub authority: Pubkey,
    pub identifier: String,
    pub payment_amount: u64,
    pub payment_mint: Pubkey,
    pub payment_shares: Vec<PaymentShare>,
}

impl InitPaymentInfoIx {
    pub const FIELDS: &'static [IdlField] = &[
        IdlField::new("authority", IdlType::PUBKEY),
        IdlField::new("identifier", IdlType::STRING),
        IdlField::new("paymentAmount", IdlType::U64),
        IdlField::new("paymentMint", IdlType::PUBKEY),
        IdlField::new("paymentShares", PAYMENT_SHARES),
    ];

    /// JSON rendering with base58 keys and IDL field names.
    pub fn to_json(&self) -> Value {
        json!({
            "authority": self.authority.to_string(),
            "identifier": self.identifier,
            "paymentAmount": self.payment_amount,
            "paymentMint": self.payment_mint.to_string(),
            "paymentShares": payment_shares_json(&self.payment_shares),
        })
    }
}

/// Arguments of [UpdatePaymentInfo](enum.RewardsCenterInstruction.html).
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct UpdatePaymentInfoIx {
    pub authority: Pubkey,
    pub payment_amount: u64,
    pub payment_mint: Pubkey,
    pub payment_shares: Vec<PaymentShare>,
}

impl UpdatePaymentInfoIx {
    pub const FIELDS: &'static [IdlField] = &[
        IdlField::new("authority", IdlType::PUBKEY),
        IdlField::new("paymentAmount", IdlType::U64),
        IdlField::new("paymentMint", IdlType::PUBKEY),
        IdlField::new("paymentShares", PAYMENT_SHARES),
    ];

    /// JSON rendering with base58 keys and IDL field names.
    pub fn to_json(&self) -> Value {
        json!({
            "authority": self.authority.to_string(),
            "paymentAmount": self.payment_amount,
            "paymentMint": self.payment_mint.to_string(),
            "paymentShares": payment_shares_json(&self.payment_shares),
        })
    }
}

/// Rewards Center instructions built by this client.
#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq, ShankInstruction)]
pub enum RewardsCenterInstruction {
    /// Creates a payment info account at the address derived from the
    /// identifier.
    ///
    /// Accounts expected by this instruction:
    ///
    /// 0. `[w]` Payment info account.
    /// 1. `[w, s]` Payer.
    /// 2. `[ ]` System program.
    #[account(
        0,
        writable,
        name = "payment_info",
        desc = "Payment info account.",
    )]
    #[account(
        1,
        writable,
        signer,
        name = "payer",
        desc = "Payer of the account rent.",
    )]
    #[account(
        2,
        name = "system_program",
        desc = "System program.",
    )]
    InitPaymentInfo(InitPaymentInfoIx),
    /// Replaces the authority, amount, mint and shares of a payment info.
    ///
    /// The account is resized by the program when the number of shares
    /// changes, which is why the payer and system program are required.
    ///
    /// Accounts expected by this instruction:
    ///
    /// 0. `[w]` Payment info account.
    /// 1. `[s]` Payment info authority.
    /// 2. `[w, s]` Payer.
    /// 3. `[ ]` System program.
    #[account(
        0,
        writable,
        name = "payment_info",
        desc = "Payment info account.",
    )]
    #[account(
        1,
        signer,
        name = "authority",
        desc = "Payment info authority.",
    )]
    #[account(
        2,
        writable,
        signer,
        name = "payer",
        desc = "Payer of any additional rent.",
    )]
    #[account(
        3,
        name = "system_program",
        desc = "System program.",
    )]
    UpdatePaymentInfo(UpdatePaymentInfoIx),
}

impl RewardsCenterInstruction {
    pub const INIT_PAYMENT_INFO: &'static str = "initPaymentInfo";
    pub const UPDATE_PAYMENT_INFO: &'static str = "updatePaymentInfo";
    /// IDL names of every instruction, in IDL order.
    pub const NAMES: &'static [&'static str] = &[Self::INIT_PAYMENT_INFO, Self::UPDATE_PAYMENT_INFO];

    /// IDL name of the instruction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InitPaymentInfo(_) => Self::INIT_PAYMENT_INFO,
            Self::UpdatePaymentInfo(_) => Self::UPDATE_PAYMENT_INFO,
        }
    }

    /// Anchor discriminator of the instruction.
    pub fn discriminator(&self) -> [u8; 8] {
        match self {
            Self::InitPaymentInfo(_) => discriminator("global", "init_payment_info"),
            Self::UpdatePaymentInfo(_) => discriminator("global", "update_payment_info"),
        }
    }

    /// Packs a
    /// [RewardsCenterInstruction](enum.RewardsCenterInstruction.html)
    /// into a byte buffer.
    pub fn pack(&self) -> Result<Vec<u8>, ProgramError> {
        borsh::to_vec(self).map_err(|err| ProgramError::BorshIoError(err.to_string()))
    }

    /// Unpacks a byte buffer into a
    /// [RewardsCenterInstruction](enum.RewardsCenterInstruction.html).
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        if input.len() < 8 {
            return Err(ProgramError::InvalidInstructionData);
        }
        let (tag, rest) = input.split_at(8);
        if *tag == discriminator("global", "init_payment_info") {
            InitPaymentInfoIx::try_from_slice(rest)
                .map(Self::InitPaymentInfo)
                .map_err(|_| ProgramError::InvalidInstructionData)
        } else if *tag == discriminator("global", "update_payment_info") {
            UpdatePaymentInfoIx::try_from_slice(rest)
                .map(Self::UpdatePaymentInfo)
                .map_err(|_| ProgramError::InvalidInstructionData)
        } else {
            Err(ProgramError::InvalidInstructionData)
        }
    }
}

impl BorshSerialize for RewardsCenterInstruction {
    fn serialize<W: Write>(&self, writer: &mut W) -> IoResult<()> {
        writer.write_all(&self.discriminator())?;
        match self {
            Self::InitPaymentInfo(ix) => ix.serialize(writer),
            Self::UpdatePaymentInfo(ix) => ix.serialize(writer),
        }
    }
}

/// Creates an [InitPaymentInfo](enum.RewardsCenterInstruction.html)
/// instruction.
pub fn init_payment_info(
    payment_info_address: &Pubkey,
    payer_address: &Pubkey,
    ix: InitPaymentInfoIx,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*payment_info_address, false),
        AccountMeta::new(*payer_address, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    Instruction::new_with_borsh(
        crate::id(),
        &RewardsCenterInstruction::InitPaymentInfo(ix),
        accounts,
    )
}

/// Creates an [UpdatePaymentInfo](enum.RewardsCenterInstruction.html)
/// instruction.
pub fn update_payment_info(
    payment_info_address: &Pubkey,
    authority_address: &Pubkey,
    payer_address: &Pubkey,
    ix: UpdatePaymentInfoIx,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*payment_info_address, false),
        AccountMeta::new_readonly(*authority_address, true),
        AccountMeta::new(*payer_address, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    Instruction::new_with_borsh(
        crate::id(),
        &RewardsCenterInstruction::UpdatePaymentInfo(ix),
        accounts,
    )
}

#[cfg(test)]
mod tests {
    use {super::*, solana_program::hash::hash};

    fn update_ix() -> UpdatePaymentInfoIx {
        UpdatePaymentInfoIx {
            authority: Pubkey::new_unique(),
            payment_amount: 2_000_000,
            payment_mint: Pubkey::default(),
            payment_shares: vec![PaymentShare::new(Pubkey::new_unique(), 10_000)],
        }
    }

    #[test]
    fn test_pack_unpack_update_payment_info() {
        let original = RewardsCenterInstruction::UpdatePaymentInfo(update_ix());
        let packed = original.pack().unwrap();
        let unpacked = RewardsCenterInstruction::unpack(&packed).unwrap();
        assert_eq!(original, unpacked);
    }

    #[test]
    fn test_pack_unpack_init_payment_info() {
        let original = RewardsCenterInstruction::InitPaymentInfo(InitPaymentInfoIx {
            authority: Pubkey::new_unique(),
            identifier: "cardinal-test".to_string(),
            payment_amount: 0,
            payment_mint: Pubkey::new_unique(),
            payment_shares: vec![],
        });
        let packed = original.pack().unwrap();
        let unpacked = RewardsCenterInstruction::unpack(&packed).unwrap();
        assert_eq!(original, unpacked);
    }

    #[test]
    fn test_update_payment_info_wire_layout() {
        let ix = update_ix();
        let packed = RewardsCenterInstruction::UpdatePaymentInfo(ix.clone())
            .pack()
            .unwrap();

        assert_eq!(packed[..8], hash(b"global:update_payment_info").to_bytes()[..8]);
        assert_eq!(packed[8..40], ix.authority.to_bytes());
        assert_eq!(packed[40..48], 2_000_000u64.to_le_bytes());
        assert_eq!(packed[48..80], Pubkey::default().to_bytes());
        // vec length, then (address, basis points) pairs
        assert_eq!(packed[80..84], 1u32.to_le_bytes());
        assert_eq!(packed[84..116], ix.payment_shares[0].address.to_bytes());
        assert_eq!(packed[116..118], 10_000u16.to_le_bytes());
        assert_eq!(packed.len(), 118);
    }

    #[test]
    fn test_unpack_rejects_unknown_discriminator() {
        let mut packed = RewardsCenterInstruction::UpdatePaymentInfo(update_ix())
            .pack()
            .unwrap();
        packed[0] ^= 0xff;
        assert_eq!(
            RewardsCenterInstruction::unpack(&packed),
            Err(ProgramError::InvalidInstructionData)
        );
        assert_eq!(
            RewardsCenterInstruction::unpack(&[1, 2, 3]),
            Err(ProgramError::InvalidInstructionData)
        );
    }

    #[test]
    fn test_update_payment_info_accounts() {
        let payment_info = Pubkey::new_unique();
        let authority = Pubkey::new_unique();
        let payer = Pubkey::new_unique();
        let instruction = update_payment_info(&payment_info, &authority, &payer, update_ix());

        assert_eq!(instruction.program_id, crate::id());
        assert_eq!(
            instruction.accounts,
            vec![
                AccountMeta::new(payment_info, false),
                AccountMeta::new_readonly(authority, true),
                AccountMeta::new(payer, true),
                AccountMeta::new_readonly(system_program::id(), false),
            ]
        );
    }

    #[test]
    fn test_update_json_uses_idl_names() {
        let ix = update_ix();
        let json = ix.to_json();
        assert_eq!(json["authority"], ix.authority.to_string());
        assert_eq!(json["paymentAmount"], 2_000_000);
        assert_eq!(json["paymentMint"], "11111111111111111111111111111111");
        assert_eq!(json["paymentShares"][0]["basisPoints"], 10_000);
    }
}
