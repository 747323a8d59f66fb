use super::money::Amount;
use crate::error::SettlementError;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuctionId(pub u32);

impl fmt::Display for AuctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bidder(pub String);

impl Bidder {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuctionStatus {
    #[default]
    Open,
    Closed,
}

/// A bidder's offer on an auction. Never modified once placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bid {
    pub bidder: Bidder,
    pub amount: Amount,
}

impl Bid {
    pub fn new(bidder: Bidder, amount: Amount) -> Self {
        Self { bidder, amount }
    }
}

/// A listing that accepts bids until it is closed.
///
/// The auction owns its bids in submission order. The only mutation the
/// batch routines perform is the `Open -> Closed` transition, which is
/// terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auction {
    /// The unique identifier for the auction.
    pub id: AuctionId,
    /// What is being sold.
    pub description: String,
    /// Local wall-clock timestamp at which bidding opened.
    pub created_at: NaiveDateTime,
    status: AuctionStatus,
    bids: Vec<Bid>,
}

impl Auction {
    pub fn new(id: AuctionId, description: impl Into<String>, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            description: description.into(),
            created_at,
            status: AuctionStatus::Open,
            bids: Vec::new(),
        }
    }

    pub fn builder(id: u32, description: impl Into<String>) -> AuctionBuilder {
        AuctionBuilder::new(id, description)
    }

    pub fn status(&self) -> AuctionStatus {
        self.status
    }

    pub fn is_closed(&self) -> bool {
        self.status == AuctionStatus::Closed
    }

    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }

    /// Appends a bid. Closed auctions no longer accept bids.
    pub fn place_bid(&mut self, bid: Bid) -> Result<(), SettlementError> {
        if self.is_closed() {
            return Err(SettlementError::ValidationError(format!(
                "Auction {} is closed",
                self.id
            )));
        }
        self.bids.push(bid);
        Ok(())
    }

    /// Closes the auction (moves from open to closed)
    pub fn close(&mut self) -> Result<(), SettlementError> {
        if self.is_closed() {
            return Err(SettlementError::ValidationError(format!(
                "Auction {} is already closed",
                self.id
            )));
        }
        self.status = AuctionStatus::Closed;
        Ok(())
    }
}

/// Fluent construction of auctions, mostly for fixtures and input readers.
///
/// Bids are recorded as given; the builder does not apply the open/closed
/// rule to them so that already-closed auctions can be rebuilt with their
/// bid history.
pub struct AuctionBuilder {
    id: AuctionId,
    description: String,
    created_at: Option<NaiveDateTime>,
    status: AuctionStatus,
    bids: Vec<Bid>,
}

impl AuctionBuilder {
    pub fn new(id: u32, description: impl Into<String>) -> Self {
        Self {
            id: AuctionId(id),
            description: description.into(),
            created_at: None,
            status: AuctionStatus::Open,
            bids: Vec::new(),
        }
    }

    pub fn created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn status(mut self, status: AuctionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn closed(self) -> Self {
        self.status(AuctionStatus::Closed)
    }

    pub fn bid(mut self, bidder: impl Into<String>, amount: Amount) -> Self {
        self.bids.push(Bid::new(Bidder::new(bidder), amount));
        self
    }

    /// Builds the auction. Without an explicit creation time, the current
    /// local time is used.
    pub fn build(self) -> Auction {
        Auction {
            id: self.id,
            description: self.description,
            created_at: self
                .created_at
                .unwrap_or_else(|| Local::now().naive_local()),
            status: self.status,
            bids: self.bids,
        }
    }
}
