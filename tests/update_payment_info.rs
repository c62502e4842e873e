
use {
    rewards_center_client::{
        error::RewardsCenterClientError,
        instruction::RewardsCenterInstruction,
        program::RewardsCenterProgram,
        state::{get_payment_info_address, PaymentShare},
        tools::payment::{
            update_payment_info::{build_transaction, get_args, handler},
            DEFAULT_IDENTIFIER, DEFAULT_PAYMENT_RECIPIENT,
        },
    },
    setup::{setup, setup_payment_info, setup_wallet, BanksExecutor, RecordingExecutor},
    solana_sdk::{
        instruction::InstructionError,
        pubkey::Pubkey,
        signature::{Keypair, Signer},
        system_program,
        transaction::TransactionError,
    },
    test_case::test_case,
};

#[test]
fn build_single_instruction_transaction() {
    let program = RewardsCenterProgram::new(RecordingExecutor::default(), None);
    let wallet = program.wallet().pubkey();
    let args = get_args(&wallet);

    let (payment_info, transaction) = build_transaction(&program, &args).unwrap();

    assert_eq!(payment_info, get_payment_info_address(DEFAULT_IDENTIFIER).unwrap());
    assert_eq!(transaction.message.account_keys[0], wallet);
    assert_eq!(transaction.message.instructions.len(), 1);

    let instruction = &transaction.message.instructions[0];
    let keys = &transaction.message.account_keys;
    assert_eq!(keys[instruction.program_id_index as usize], rewards_center_client::id());
    let accounts: Vec<Pubkey> = instruction
        .accounts
        .iter()
        .map(|index| keys[*index as usize])
        .collect();
    assert_eq!(
        accounts,
        vec![payment_info, wallet, wallet, system_program::id()]
    );
    assert_eq!(
        RewardsCenterInstruction::unpack(&instruction.data).unwrap(),
        RewardsCenterInstruction::UpdatePaymentInfo(args.ix)
    );
}

#[test_case(vec![] ; "no shares")]
#[test_case(vec![5_000] ; "under allocated")]
#[test_case(vec![10_000, 10_000] ; "over allocated")]
#[tokio::test]
async fn unbalanced_shares_are_submitted_unchanged(basis_points: Vec<u16>) {
    let mut program = RewardsCenterProgram::new(RecordingExecutor::default(), None);
    let mut args = get_args(&program.wallet().pubkey());
    args.ix.payment_shares = basis_points
        .into_iter()
        .map(|basis_points| PaymentShare::new(Pubkey::new_unique(), basis_points))
        .collect();

    let outcome = handler(&mut program, args.clone()).await.unwrap();
    assert_eq!(outcome.ix, args.ix);

    let submitted = &program.executor_mut().submitted;
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].signatures[0], outcome.signature);
    assert_eq!(
        RewardsCenterInstruction::unpack(&submitted[0].message.instructions[0].data).unwrap(),
        RewardsCenterInstruction::UpdatePaymentInfo(args.ix)
    );
}

#[tokio::test]
async fn fail_identifier_too_long() {
    let mut program = RewardsCenterProgram::new(RecordingExecutor::default(), None);
    let mut args = get_args(&program.wallet().pubkey());
    args.identifier = "x".repeat(33);

    let err = handler(&mut program, args).await.unwrap_err();

    assert!(matches!(err, RewardsCenterClientError::SeedTooLong(_)));
    assert!(program.executor_mut().submitted.is_empty());
}

#[tokio::test]
async fn success_default_payment_info() {
    let mut context = setup().start_with_context().await;
    let wallet = setup_wallet(&mut context);
    let wallet_address = wallet.pubkey();

    let payment_info = setup_payment_info(
        &mut context,
        DEFAULT_IDENTIFIER,
        &wallet_address,
        1,
        vec![
            PaymentShare::new(Pubkey::new_unique(), 5_000),
            PaymentShare::new(Pubkey::new_unique(), 5_000),
        ],
    )
    .await;

    let mut program = RewardsCenterProgram::new(
        BanksExecutor(context.banks_client.clone()),
        Some(Box::new(wallet)),
    );
    let args = get_args(&wallet_address);
    let outcome = handler(&mut program, args).await.unwrap();

    assert_eq!(outcome.payment_info, payment_info);
    let confirmation = outcome.confirmation();
    assert!(confirmation.contains(DEFAULT_IDENTIFIER));
    assert!(confirmation.contains(&payment_info.to_string()));

    // Check the on-chain payment info was replaced.
    let state = program.fetch_payment_info(&payment_info).await.unwrap();
    assert_eq!(state.identifier, DEFAULT_IDENTIFIER);
    assert_eq!(state.authority, wallet_address);
    assert_eq!(state.payment_amount, 2_000_000);
    assert_eq!(state.payment_mint, Pubkey::default());
    assert!(state.is_native());
    assert_eq!(
        state.payment_shares,
        vec![PaymentShare::new(DEFAULT_PAYMENT_RECIPIENT, 10_000)]
    );
}

#[tokio::test]
async fn success_transfer_authority() {
    let mut context = setup().start_with_context().await;
    let wallet = setup_wallet(&mut context);
    let wallet_address = wallet.pubkey();
    let new_authority = Pubkey::new_unique();

    let payment_info =
        setup_payment_info(&mut context, "cardinal-transfer", &wallet_address, 0, vec![]).await;

    let mut program = RewardsCenterProgram::new(
        BanksExecutor(context.banks_client.clone()),
        Some(Box::new(wallet)),
    );
    let mut args = get_args(&wallet_address);
    args.identifier = "cardinal-transfer".to_string();
    args.ix.authority = new_authority;
    handler(&mut program, args).await.unwrap();

    let state = program.fetch_payment_info(&payment_info).await.unwrap();
    assert_eq!(state.authority, new_authority);

    // The wallet no longer controls the payment info.
    let mut args = get_args(&wallet_address);
    args.identifier = "cardinal-transfer".to_string();
    let err = handler(&mut program, args).await.unwrap_err();
    assert!(matches!(
        err,
        RewardsCenterClientError::Transaction(TransactionError::InstructionError(
            0,
            InstructionError::MissingRequiredSignature
        ))
    ));
}

#[tokio::test]
async fn fail_wallet_not_authority() {
    let mut context = setup().start_with_context().await;
    let wallet = setup_wallet(&mut context);
    let wallet_address = wallet.pubkey();

    let authority = Keypair::new();
    let payment_info = setup_payment_info(
        &mut context,
        DEFAULT_IDENTIFIER,
        &authority.pubkey(),
        2_000_000,
        vec![PaymentShare::new(Pubkey::new_unique(), 10_000)],
    )
    .await;

    let mut program = RewardsCenterProgram::new(
        BanksExecutor(context.banks_client.clone()),
        Some(Box::new(wallet)),
    );
    let err = handler(&mut program, get_args(&wallet_address))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RewardsCenterClientError::Transaction(TransactionError::InstructionError(
            0,
            InstructionError::MissingRequiredSignature
        ))
    ));

    // Nothing changed on chain.
    let state = program.fetch_payment_info(&payment_info).await.unwrap();
    assert_eq!(state.authority, authority.pubkey());
}

#[tokio::test]
async fn fail_payment_info_not_created() {
    let mut context = setup().start_with_context().await;
    let wallet = setup_wallet(&mut context);
    let wallet_address = wallet.pubkey();

    let mut program = RewardsCenterProgram::new(
        BanksExecutor(context.banks_client.clone()),
        Some(Box::new(wallet)),
    );
    let err = handler(&mut program, get_args(&wallet_address))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RewardsCenterClientError::Transaction(TransactionError::InstructionError(
            0,
            InstructionError::InvalidAccountOwner
        ))
    ));
}
