use async_trait::async_trait;
use auction_settlement::domain::auction::{Auction, AuctionId};
use auction_settlement::domain::ports::{AuctionRepository, Notifier};
use auction_settlement::error::{Result, SettlementError};
use auction_settlement::infrastructure::in_memory::InMemoryAuctionRepository;
use chrono::{Duration, Local, NaiveDateTime};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Shared, ordered record of collaborator calls, e.g. `update:1`, `notify:1`.
pub type Journal = Arc<Mutex<Vec<String>>>;

pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(journal: &Journal) -> Vec<String> {
    journal.lock().unwrap().clone()
}

pub fn long_ago() -> NaiveDateTime {
    Local::now().naive_local() - Duration::days(18 * 365)
}

pub fn yesterday() -> NaiveDateTime {
    Local::now().naive_local() - Duration::days(1)
}

pub fn open_auction(id: u32, description: &str, created_at: NaiveDateTime) -> Auction {
    Auction::builder(id, description).created_at(created_at).build()
}

/// Wraps the in-memory repository, journaling every call and failing
/// `update` for selected auctions.
#[derive(Clone)]
pub struct JournalingAuctionRepository {
    pub inner: InMemoryAuctionRepository,
    journal: Journal,
    failing: HashSet<AuctionId>,
}

impl JournalingAuctionRepository {
    pub fn new(auctions: Vec<Auction>, journal: Journal) -> Self {
        Self {
            inner: InMemoryAuctionRepository::with_auctions(auctions),
            journal,
            failing: HashSet::new(),
        }
    }

    pub fn failing_update_for(mut self, id: u32) -> Self {
        self.failing.insert(AuctionId(id));
        self
    }

    fn record(&self, entry: String) {
        self.journal.lock().unwrap().push(entry);
    }
}

#[async_trait]
impl AuctionRepository for JournalingAuctionRepository {
    async fn list_open(&self) -> Result<Vec<Auction>> {
        self.record("list_open".to_string());
        self.inner.list_open().await
    }

    async fn list_closed(&self) -> Result<Vec<Auction>> {
        self.record("list_closed".to_string());
        self.inner.list_closed().await
    }

    async fn update(&self, auction: Auction) -> Result<()> {
        if self.failing.contains(&auction.id) {
            self.record(format!("update_failed:{}", auction.id));
            return Err(SettlementError::StorageError(format!(
                "Cannot write auction {}",
                auction.id
            )));
        }
        self.record(format!("update:{}", auction.id));
        self.inner.update(auction).await
    }
}

pub struct JournalingNotifier {
    journal: Journal,
}

impl JournalingNotifier {
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }
}

#[async_trait]
impl Notifier for JournalingNotifier {
    async fn notify(&self, auction: Auction) -> Result<()> {
        self.journal
            .lock()
            .unwrap()
            .push(format!("notify:{}", auction.id));
        Ok(())
    }
}
