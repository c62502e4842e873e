//! Interface description of the Rewards Center program.
//!
//! The descriptor mirrors the Anchor IDL JSON layout for the parts of the
//! program this client speaks: the instructions it builds and the account
//! kinds it reads. It is assembled from constants, so it is fixed for the
//! lifetime of the process.

use {
    crate::{
        instruction::{InitPaymentInfoIx, RewardsCenterInstruction, UpdatePaymentInfoIx},
        state::{
            AccountData, PaymentInfo, PaymentShare, ReceiptManager, RewardDistributor,
            RewardEntry, RewardReceipt, StakeAuthorizationRecord, StakeBooster, StakeEntry,
            StakePool,
        },
    },
    serde::Serialize,
};

/// Program name, as published in the on-chain IDL.
pub const PROGRAM_NAME: &str = "cardinal_rewards_center";

/// Type representation in the IDL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IdlType {
    Primitive(&'static str),
    Vec { vec: &'static IdlType },
    Option { option: &'static IdlType },
    Defined { defined: &'static str },
}

impl IdlType {
    pub const BOOL: IdlType = IdlType::Primitive("bool");
    pub const U8: IdlType = IdlType::Primitive("u8");
    pub const U16: IdlType = IdlType::Primitive("u16");
    pub const U32: IdlType = IdlType::Primitive("u32");
    pub const U64: IdlType = IdlType::Primitive("u64");
    pub const U128: IdlType = IdlType::Primitive("u128");
    pub const I64: IdlType = IdlType::Primitive("i64");
    pub const STRING: IdlType = IdlType::Primitive("string");
    pub const PUBKEY: IdlType = IdlType::Primitive("publicKey");
}

/// A named field of a struct, account or instruction argument list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IdlField {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub type_: IdlType,
}

impl IdlField {
    pub const fn new(name: &'static str, type_: IdlType) -> Self {
        Self { name, type_ }
    }
}

/// An account expected by an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdlAccountItem {
    pub name: &'static str,
    pub is_mut: bool,
    pub is_signer: bool,
}

impl IdlAccountItem {
    pub const fn new(name: &'static str, is_mut: bool, is_signer: bool) -> Self {
        Self {
            name,
            is_mut,
            is_signer,
        }
    }
}

/// An instruction in the IDL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IdlInstruction {
    pub name: &'static str,
    pub accounts: &'static [IdlAccountItem],
    pub args: &'static [IdlField],
}

/// Struct body of an account or type definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IdlStruct {
    pub kind: &'static str,
    pub fields: &'static [IdlField],
}

/// Account or type definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IdlTypeDef {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub type_: IdlStruct,
}

impl IdlTypeDef {
    pub const fn new(name: &'static str, fields: &'static [IdlField]) -> Self {
        Self {
            name,
            type_: IdlStruct {
                kind: "struct",
                fields,
            },
        }
    }

    const fn account<T: AccountData>() -> Self {
        Self::new(T::NAME, T::FIELDS)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IdlMetadata {
    pub address: &'static str,
}

/// Top-level IDL for the Rewards Center program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RewardsCenterIdl {
    pub name: &'static str,
    pub instructions: &'static [IdlInstruction],
    pub accounts: &'static [IdlTypeDef],
    pub types: &'static [IdlTypeDef],
    pub metadata: IdlMetadata,
}

impl RewardsCenterIdl {
    /// Looks up an instruction by its IDL name.
    pub fn instruction(&self, name: &str) -> Option<&IdlInstruction> {
        self.instructions.iter().find(|ix| ix.name == name)
    }

    /// Looks up an account definition by its type name.
    pub fn account(&self, name: &str) -> Option<&IdlTypeDef> {
        self.accounts.iter().find(|account| account.name == name)
    }

    /// Serialize the IDL to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// The interface of the deployed Rewards Center program.
pub const REWARDS_CENTER_IDL: RewardsCenterIdl = RewardsCenterIdl {
    name: PROGRAM_NAME,
    instructions: &[
        IdlInstruction {
            name: RewardsCenterInstruction::INIT_PAYMENT_INFO,
            accounts: &[
                IdlAccountItem::new("paymentInfo", true, false),
                IdlAccountItem::new("payer", true, true),
                IdlAccountItem::new("systemProgram", false, false),
            ],
            args: &[IdlField::new(
                "ix",
                IdlType::Defined {
                    defined: "InitPaymentInfoIx",
                },
            )],
        },
        IdlInstruction {
            name: RewardsCenterInstruction::UPDATE_PAYMENT_INFO,
            accounts: &[
                IdlAccountItem::new("paymentInfo", true, false),
                IdlAccountItem::new("authority", false, true),
                IdlAccountItem::new("payer", true, true),
                IdlAccountItem::new("systemProgram", false, false),
            ],
            args: &[IdlField::new(
                "ix",
                IdlType::Defined {
                    defined: "UpdatePaymentInfoIx",
                },
            )],
        },
    ],
    accounts: &[
        IdlTypeDef::account::<RewardDistributor>(),
        IdlTypeDef::account::<RewardEntry>(),
        IdlTypeDef::account::<StakePool>(),
        IdlTypeDef::account::<StakeEntry>(),
        IdlTypeDef::account::<ReceiptManager>(),
        IdlTypeDef::account::<RewardReceipt>(),
        IdlTypeDef::account::<StakeBooster>(),
        IdlTypeDef::account::<StakeAuthorizationRecord>(),
        IdlTypeDef::account::<PaymentInfo>(),
    ],
    types: &[
        IdlTypeDef::new("PaymentShare", PaymentShare::FIELDS),
        IdlTypeDef::new("InitPaymentInfoIx", InitPaymentInfoIx::FIELDS),
        IdlTypeDef::new("UpdatePaymentInfoIx", UpdatePaymentInfoIx::FIELDS),
    ],
    metadata: IdlMetadata {
        address: "E2Wc4racSRRp8EBrMH3n1AYSjuFt4JiLdh14J58UiyDu",
    },
};
