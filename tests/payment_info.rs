
use {
    rewards_center_client::{
        error::RewardsCenterClientError,
        program::RewardsCenterProgram,
        state::{get_payment_info_address, PaymentShare},
        tools::payment::payment_info::{get_args, handler},
    },
    setup::{setup, setup_payment_info, BanksExecutor},
    solana_sdk::{
        account::{Account, AccountSharedData},
        pubkey::Pubkey,
    },
};

#[tokio::test]
async fn success_read_with_ephemeral_wallet() {
    let mut context = setup().start_with_context().await;
    let authority = Pubkey::new_unique();
    let recipient = Pubkey::new_unique();

    let address = setup_payment_info(
        &mut context,
        "cardinal-default",
        &authority,
        2_000_000,
        vec![
            PaymentShare::new(recipient, 2_500),
            PaymentShare::new(recipient, 2_500),
        ],
    )
    .await;

    let mut program = RewardsCenterProgram::new(BanksExecutor(context.banks_client.clone()), None);
    let outcome = handler(&mut program, get_args()).await.unwrap();

    assert_eq!(outcome.payment_info, address);
    assert_eq!(outcome.data.authority, authority);
    assert_eq!(outcome.data.payment_shares.len(), 2);

    let json = outcome.to_json();
    assert_eq!(json["identifier"], "cardinal-default");
    assert_eq!(json["paymentAmount"], 2_000_000);
    assert_eq!(json["totalBasisPoints"], 5_000);
}

#[tokio::test]
async fn fail_not_found() {
    let context = setup().start_with_context().await;
    let mut program = RewardsCenterProgram::new(BanksExecutor(context.banks_client.clone()), None);

    let err = handler(&mut program, get_args()).await.unwrap_err();

    let address = get_payment_info_address("cardinal-default").unwrap();
    assert!(matches!(err, RewardsCenterClientError::AccountNotFound(a) if a == address));
}

#[tokio::test]
async fn fail_foreign_owner() {
    let mut context = setup().start_with_context().await;
    let address = get_payment_info_address("cardinal-default").unwrap();
    context.set_account(
        &address,
        &AccountSharedData::from(Account {
            lamports: 100_000_000,
            data: vec![0; 64],
            owner: Pubkey::new_unique(),
            ..Account::default()
        }),
    );

    let mut program = RewardsCenterProgram::new(BanksExecutor(context.banks_client.clone()), None);
    let err = handler(&mut program, get_args()).await.unwrap_err();

    assert!(matches!(
        err,
        RewardsCenterClientError::IncorrectAccountOwner { address: a, .. } if a == address
    ));
}
