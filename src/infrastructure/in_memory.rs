use crate::domain::auction::{Auction, AuctionId};
use crate::domain::payment::Payment;
use crate::domain::ports::{AuctionRepository, Notifier, PaymentRepository};
use crate::error::{Result, SettlementError};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for auctions.
///
/// Keeps auctions in insertion order so that listings come back in the order
/// they were loaded. `Clone` shares the underlying storage.
#[derive(Default, Clone)]
pub struct InMemoryAuctionRepository {
    auctions: Arc<RwLock<Vec<Auction>>>,
}

impl InMemoryAuctionRepository {
    /// Creates a new, empty in-memory auction repository.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auctions(auctions: impl IntoIterator<Item = Auction>) -> Self {
        Self {
            auctions: Arc::new(RwLock::new(auctions.into_iter().collect())),
        }
    }

    /// Adds an auction, replacing any stored auction with the same id in place.
    pub async fn insert(&self, auction: Auction) {
        let mut auctions = self.auctions.write().await;
        match auctions.iter_mut().find(|stored| stored.id == auction.id) {
            Some(stored) => *stored = auction,
            None => auctions.push(auction),
        }
    }

    pub async fn get(&self, id: AuctionId) -> Option<Auction> {
        let auctions = self.auctions.read().await;
        auctions.iter().find(|auction| auction.id == id).cloned()
    }

    pub async fn all(&self) -> Vec<Auction> {
        self.auctions.read().await.clone()
    }

    async fn list_where(&self, closed: bool) -> Vec<Auction> {
        let auctions = self.auctions.read().await;
        auctions
            .iter()
            .filter(|auction| auction.is_closed() == closed)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl AuctionRepository for InMemoryAuctionRepository {
    async fn list_open(&self) -> Result<Vec<Auction>> {
        Ok(self.list_where(false).await)
    }

    async fn list_closed(&self) -> Result<Vec<Auction>> {
        Ok(self.list_where(true).await)
    }

    async fn update(&self, auction: Auction) -> Result<()> {
        let mut auctions = self.auctions.write().await;
        let stored = auctions
            .iter_mut()
            .find(|stored| stored.id == auction.id)
            .ok_or_else(|| {
                SettlementError::StorageError(format!("Auction {} not found", auction.id))
            })?;
        *stored = auction;
        Ok(())
    }
}

/// A thread-safe in-memory store for generated payments, in save order.
#[derive(Default, Clone)]
pub struct InMemoryPaymentRepository {
    payments: Arc<RwLock<Vec<Payment>>>,
}

impl InMemoryPaymentRepository {
    /// Creates a new, empty in-memory payment repository.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn all(&self) -> Vec<Payment> {
        self.payments.read().await.clone()
    }
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
    async fn save(&self, payment: Payment) -> Result<()> {
        self.payments.write().await.push(payment);
        Ok(())
    }
}

/// Collects closing notices instead of delivering them.
#[derive(Default, Clone)]
pub struct InMemoryNotifier {
    sent: Arc<RwLock<Vec<Auction>>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent(&self) -> Vec<Auction> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl Notifier for InMemoryNotifier {
    async fn notify(&self, auction: Auction) -> Result<()> {
        self.sent.write().await.push(auction);
        Ok(())
    }
}
