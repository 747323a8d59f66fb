use auction_settlement::domain::auction::{Auction, AuctionId};
use auction_settlement::domain::money::Amount;
use auction_settlement::domain::payment::Payment;
use auction_settlement::domain::ports::{
    AuctionRepositoryBox, NotifierBox, PaymentRepositoryBox,
};
use auction_settlement::infrastructure::in_memory::{
    InMemoryAuctionRepository, InMemoryNotifier, InMemoryPaymentRepository,
};
use auction_settlement::infrastructure::notifier::LogNotifier;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_ports_as_trait_objects() {
    let auctions = InMemoryAuctionRepository::new();
    auctions.insert(Auction::builder(1, "TV").build()).await;
    let auction_repo: AuctionRepositoryBox = Box::new(auctions);
    let payment_repo: PaymentRepositoryBox = Box::new(InMemoryPaymentRepository::new());
    let notifiers: Vec<NotifierBox> = vec![Box::new(InMemoryNotifier::new()), Box::new(LogNotifier)];

    let payment = Payment::new(
        Amount::new(dec!(3000)).unwrap(),
        NaiveDate::from_ymd_opt(2017, 9, 4).unwrap(),
    );

    // Verify Send + Sync by spawning tasks
    let auction_handle = tokio::spawn(async move {
        let mut auction = auction_repo.list_open().await.unwrap().remove(0);
        auction.close().unwrap();
        auction_repo.update(auction).await.unwrap();
        auction_repo.list_closed().await.unwrap()
    });

    let payment_handle = tokio::spawn(async move { payment_repo.save(payment).await });

    let notifier_handle = tokio::spawn(async move {
        for notifier in &notifiers {
            notifier
                .notify(Auction::builder(1, "TV").closed().build())
                .await
                .unwrap();
        }
    });

    let closed = auction_handle.await.unwrap();
    assert_eq!(closed.len(), 1);
    assert_eq!(closed[0].id, AuctionId(1));

    assert!(payment_handle.await.unwrap().is_ok());
    notifier_handle.await.unwrap();
}
