//! Rewards Center CLI.

use {
    anyhow::Result,
    clap::{Parser, Subcommand},
    rewards_center_client::{
        config::{parse_payment_share, parse_pubkey, Config, ConfigArgs},
        idl::REWARDS_CENTER_IDL,
        state::PaymentShare,
        tools::payment::{init_payment_info, payment_info, update_payment_info},
    },
    serde_json::json,
    solana_sdk::{
        pubkey::Pubkey,
        signature::Signer,
        transaction::Transaction,
    },
};

#[derive(Parser)]
#[command(name = "rewards-center")]
#[command(about = "Rewards Center CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(
        about = update_payment_info::DESCRIPTION,
        visible_alias = update_payment_info::COMMAND_NAME
    )]
    UpdatePaymentInfo(PaymentInfoOverrides),
    #[command(
        about = init_payment_info::DESCRIPTION,
        visible_alias = init_payment_info::COMMAND_NAME
    )]
    InitPaymentInfo(PaymentInfoOverrides),
    #[command(
        about = payment_info::DESCRIPTION,
        visible_alias = payment_info::COMMAND_NAME
    )]
    PaymentInfo {
        /// Identifier the payment info was created with [default: cardinal-default]
        #[arg(long)]
        identifier: Option<String>,
    },
    /// Print the program interface description as JSON
    Idl,
}

// Options left unset keep the value from `get_args`.
#[derive(clap::Args)]
struct PaymentInfoOverrides {
    /// Payment info identifier [default: cardinal-default]
    #[arg(long)]
    identifier: Option<String>,
    /// New payment info authority [default: the wallet]
    #[arg(long, value_parser = parse_pubkey)]
    authority: Option<Pubkey>,
    /// Amount charged, in the smallest unit of the payment mint [default: 2000000]
    #[arg(long)]
    payment_amount: Option<u64>,
    /// Payment mint, the default address meaning native SOL
    #[arg(long, value_parser = parse_pubkey)]
    payment_mint: Option<Pubkey>,
    /// Recipient share as <ADDRESS>:<BASIS_POINTS>, repeatable
    #[arg(long = "payment-share", value_parser = parse_payment_share)]
    payment_shares: Vec<PaymentShare>,
}

impl PaymentInfoOverrides {
    fn apply(
        self,
        identifier: &mut String,
        authority: &mut Pubkey,
        payment_amount: &mut u64,
        payment_mint: &mut Pubkey,
        payment_shares: &mut Vec<PaymentShare>,
    ) {
        if let Some(value) = self.identifier {
            *identifier = value;
        }
        if let Some(value) = self.authority {
            *authority = value;
        }
        if let Some(value) = self.payment_amount {
            *payment_amount = value;
        }
        if let Some(value) = self.payment_mint {
            *payment_mint = value;
        }
        if !self.payment_shares.is_empty() {
            *payment_shares = self.payment_shares;
        }
    }
}

fn print_dry_run(payment_info: &Pubkey, transaction: &Transaction, ix: serde_json::Value) {
    let message = &transaction.message;
    let instructions: Vec<_> = message
        .instructions
        .iter()
        .map(|instruction| {
            json!({
                "programId": message.account_keys[instruction.program_id_index as usize].to_string(),
                "accounts": instruction
                    .accounts
                    .iter()
                    .map(|index| message.account_keys[*index as usize].to_string())
                    .collect::<Vec<_>>(),
                "data": instruction
                    .data
                    .iter()
                    .map(|byte| format!("{byte:02x}"))
                    .collect::<String>(),
            })
        })
        .collect();
    let summary = json!({
        "paymentInfo": payment_info.to_string(),
        "feePayer": message.account_keys[0].to_string(),
        "args": ix,
        "instructions": instructions,
    });
    println!("{summary:#}");
    println!("Dry run, omit --dry-run to submit the transaction.");
}

#[tokio::main]
async fn main() -> Result<()> {
    solana_logger::setup_with_default("info");
    let cli = Cli::parse();
    let config = Config::new(cli.config)?;

    match cli.command {
        Command::UpdatePaymentInfo(overrides) => {
            let wallet = config.load_wallet()?;
            let mut args = update_payment_info::get_args(&wallet.pubkey());
            overrides.apply(
                &mut args.identifier,
                &mut args.ix.authority,
                &mut args.ix.payment_amount,
                &mut args.ix.payment_mint,
                &mut args.ix.payment_shares,
            );

            let mut program = config.connect(Some(Box::new(wallet)));
            if config.dry_run {
                let (payment_info, transaction) =
                    update_payment_info::build_transaction(&program, &args)?;
                print_dry_run(&payment_info, &transaction, args.ix.to_json());
                return Ok(());
            }
            let outcome = update_payment_info::handler(&mut program, args).await?;
            println!("Signature: {}", outcome.signature);
        }
        Command::InitPaymentInfo(overrides) => {
            let wallet = config.load_wallet()?;
            let mut args = init_payment_info::get_args(&wallet.pubkey());
            overrides.apply(
                &mut args.ix.identifier,
                &mut args.ix.authority,
                &mut args.ix.payment_amount,
                &mut args.ix.payment_mint,
                &mut args.ix.payment_shares,
            );

            let mut program = config.connect(Some(Box::new(wallet)));
            if config.dry_run {
                let (payment_info, transaction) =
                    init_payment_info::build_transaction(&program, &args)?;
                print_dry_run(&payment_info, &transaction, args.ix.to_json());
                return Ok(());
            }
            let outcome = init_payment_info::handler(&mut program, args).await?;
            println!("Signature: {}", outcome.signature);
        }
        Command::PaymentInfo { identifier } => {
            // Reads do not need the configured wallet to exist.
            let wallet = config
                .load_wallet()
                .ok()
                .map(|keypair| Box::new(keypair) as Box<dyn Signer>);
            let mut program = config.connect(wallet);
            let mut args = payment_info::get_args();
            if let Some(identifier) = identifier {
                args.identifier = identifier;
            }
            let outcome = payment_info::handler(&mut program, args).await?;
            println!("{:#}", outcome.to_json());
        }
        Command::Idl => {
            println!("{}", REWARDS_CENTER_IDL.to_json_pretty()?);
        }
    }

    Ok(())
}
