use crate::domain::auction::{Auction, AuctionBuilder, AuctionId, AuctionStatus, Bid, Bidder};
use crate::domain::money::Amount;
use crate::error::{Result, SettlementError};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::io::Read;

/// One line of the auctions file: `id, description, created_at, status`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct AuctionRow {
    pub id: AuctionId,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub status: AuctionStatus,
}

impl AuctionRow {
    /// Rebuilds the auction with its bids, in the order given.
    pub fn into_auction(self, bids: impl IntoIterator<Item = Bid>) -> Auction {
        bids.into_iter()
            .fold(
                AuctionBuilder::new(self.id.0, self.description)
                    .created_at(self.created_at)
                    .status(self.status),
                |builder, bid| builder.bid(bid.bidder.0, bid.amount),
            )
            .build()
    }
}

/// One line of the bids file: `auction, bidder, amount`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct BidRow {
    pub auction: AuctionId,
    pub bidder: Bidder,
    pub amount: Amount,
}

impl BidRow {
    pub fn into_bid(self) -> (AuctionId, Bid) {
        (self.auction, Bid::new(self.bidder, self.amount))
    }
}

fn csv_reader<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source)
}

/// Reads auction rows from a CSV source.
///
/// Rows are deserialized lazily, so a malformed line only fails its own item.
pub struct AuctionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> AuctionReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: csv_reader(source),
        }
    }

    pub fn rows(self) -> impl Iterator<Item = Result<AuctionRow>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(SettlementError::from))
    }
}

/// Reads bid rows from a CSV source.
pub struct BidReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> BidReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: csv_reader(source),
        }
    }

    pub fn rows(self) -> impl Iterator<Item = Result<BidRow>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(SettlementError::from))
    }
}
