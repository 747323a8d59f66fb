use crate::domain::auction::Auction;
use crate::domain::money::Amount;
use crate::domain::ports::Appraiser;
use crate::error::{Result, SettlementError};

/// Finds the highest bid of an auction in a single pass.
///
/// On equal amounts the earliest bid wins.
#[derive(Debug, Default, Clone)]
pub struct HighestBidAppraiser {
    highest: Option<Amount>,
}

impl HighestBidAppraiser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Appraiser for HighestBidAppraiser {
    fn evaluate(&mut self, auction: &Auction) -> Result<()> {
        let mut bids = auction.bids().iter().map(|bid| bid.amount);
        let Some(first) = bids.next() else {
            self.highest = None;
            return Err(SettlementError::ValuationError(format!(
                "Auction {} has no bids",
                auction.id
            )));
        };

        self.highest = Some(bids.fold(first, |high, amount| if amount > high { amount } else { high }));
        Ok(())
    }

    fn winning_amount(&self) -> Result<Amount> {
        self.highest.ok_or_else(|| {
            SettlementError::ValuationError("No auction has been evaluated".to_string())
        })
    }
}
