mod common;

use assert_matches::assert_matches;
use common::{fresh_state, FakeMaster};
use jetton_cell::CellBuilder;
use jetton_ledger_client::{
    publish_metadata, read_content, ClientError, LedgerError, MasterState, Request, RetryPolicy,
};
use jetton_logger::no_op_logger;
use jetton_metadata::{JettonContent, MetadataError, OnchainMetadata};

fn offchain() -> JettonContent {
    JettonContent::Offchain {
        uri: "https://kiwi.eu.com/kwt/metadata.json".to_string(),
    }
}

fn onchain() -> JettonContent {
    JettonContent::Onchain(OnchainMetadata {
        name: "Kiwi Token".to_string(),
        symbol: "KWT".to_string(),
        description: "Utility token of the Kiwi ecosystem".to_string(),
        image: "https://kiwi.eu.com/kwt/logo.png".to_string(),
        decimals: 9,
    })
}

#[tokio::test]
async fn should_publish_and_read_back_content() {
    let master = FakeMaster::new(fresh_state());
    assert_eq!(read_content(&master).await, Ok(None));

    for content in [offchain(), onchain()] {
        let cell = publish_metadata(
            &master,
            &content,
            &RetryPolicy::immediate(6),
            &no_op_logger(),
        )
        .await
        .unwrap();

        assert_eq!(cell, content.encode().unwrap());
        assert_eq!(
            master.submitted().last(),
            Some(&Request::UpdateContent(cell))
        );
        assert_eq!(read_content(&master).await, Ok(Some(content)));
    }
}

#[tokio::test]
async fn should_wait_for_the_update_to_show_up() {
    let master = FakeMaster::new(fresh_state()).with_lag(2);
    publish_metadata(
        &master,
        &onchain(),
        &RetryPolicy::immediate(3),
        &no_op_logger(),
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn should_give_up_when_the_update_never_shows_up() {
    let master = FakeMaster::new(fresh_state()).with_lag(5);
    assert_matches!(
        publish_metadata(&master, &offchain(), &RetryPolicy::immediate(3), &no_op_logger()).await,
        Err(ClientError::NotConfirmed { what, attempts: 3, last_error: None }) if what == "content update"
    );
}

#[tokio::test]
async fn should_report_a_rejected_update() {
    let master = FakeMaster::new(fresh_state()).rejecting_everything();
    assert_matches!(
        publish_metadata(&master, &offchain(), &RetryPolicy::immediate(3), &no_op_logger()).await,
        Err(ClientError::Ledger(LedgerError::Rejected(_)))
    );
    assert!(master.submitted().is_empty());
}

#[tokio::test]
async fn should_report_unreadable_content() {
    let mut garbage = CellBuilder::new();
    garbage.store_u8(7).unwrap();
    let master = FakeMaster::new(MasterState {
        content: Some(garbage.build().unwrap()),
        ..fresh_state()
    });
    assert_matches!(
        read_content(&master).await,
        Err(ClientError::Metadata(MetadataError::Format(_)))
    );
}
