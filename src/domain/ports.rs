use super::auction::Auction;
use super::money::Amount;
use super::payment::Payment;
use crate::error::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
#[cfg(test)]
use mockall::automock;

/// Read/write access to stored auctions.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuctionRepository: Send + Sync {
    /// Auctions still accepting bids, in storage order.
    async fn list_open(&self) -> Result<Vec<Auction>>;
    /// Auctions already closed, in storage order.
    async fn list_closed(&self) -> Result<Vec<Auction>>;
    async fn update(&self, auction: Auction) -> Result<()>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn save(&self, payment: Payment) -> Result<()>;
}

/// Outbound notice that an auction has been closed.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, auction: Auction) -> Result<()>;
}

/// Source of the current local date and time.
#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Determines the winning bid of an auction.
///
/// `evaluate` stores its findings; `winning_amount` reports on the last
/// evaluated auction.
#[cfg_attr(test, automock)]
pub trait Appraiser: Send + Sync {
    fn evaluate(&mut self, auction: &Auction) -> Result<()>;
    fn winning_amount(&self) -> Result<Amount>;
}

pub type AuctionRepositoryBox = Box<dyn AuctionRepository>;
pub type PaymentRepositoryBox = Box<dyn PaymentRepository>;
pub type NotifierBox = Box<dyn Notifier>;
pub type ClockBox = Box<dyn Clock>;
pub type AppraiserBox = Box<dyn Appraiser>;
