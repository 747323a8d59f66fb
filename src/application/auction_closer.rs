use crate::domain::auction::{Auction, AuctionId};
use crate::domain::calendar::started_over_a_week_ago;
use crate::domain::ports::{AuctionRepositoryBox, ClockBox, NotifierBox};
use crate::error::{Result, SettlementError};
use crate::infrastructure::clock::default_clock;

/// What happened to one auction that was old enough to close.
#[derive(Debug)]
pub enum ClosureOutcome {
    /// Closed, persisted and notified.
    Closed(AuctionId),
    /// Closed and persisted, but the notice could not be delivered.
    Unnotified {
        auction: AuctionId,
        error: SettlementError,
    },
    /// The closing step or its persistence failed. Nothing was notified.
    Failed {
        auction: AuctionId,
        error: SettlementError,
    },
}

impl ClosureOutcome {
    pub fn auction(&self) -> AuctionId {
        match self {
            ClosureOutcome::Closed(auction) => *auction,
            ClosureOutcome::Unnotified { auction, .. } => *auction,
            ClosureOutcome::Failed { auction, .. } => *auction,
        }
    }

    /// Whether the closed status reached the repository.
    pub fn is_persisted(&self) -> bool {
        !matches!(self, ClosureOutcome::Failed { .. })
    }
}

/// Result of one closing pass.
///
/// Auctions count as closed once their closed status has been persisted,
/// whether or not the notice went out.
#[derive(Debug, Default)]
pub struct ClosureReport {
    outcomes: Vec<ClosureOutcome>,
    skipped: usize,
}

impl ClosureReport {
    /// Number of auctions whose closure was persisted during this pass.
    pub fn total_closed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_persisted()).count()
    }

    /// Open auctions left untouched because they are less than a week old.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn outcomes(&self) -> &[ClosureOutcome] {
        &self.outcomes
    }

    pub fn closed_auctions(&self) -> Vec<AuctionId> {
        self.outcomes
            .iter()
            .filter(|o| o.is_persisted())
            .map(ClosureOutcome::auction)
            .collect()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ClosureOutcome> {
        self.outcomes.iter().filter(|o| !matches!(o, ClosureOutcome::Closed(_)))
    }
}

/// Closes open auctions whose bidding started a week or more ago.
///
/// Each auction is handled on its own: a failure while closing, persisting or
/// notifying one auction is logged and recorded in the report, and the pass
/// moves on to the next auction.
pub struct AuctionCloser {
    auctions: AuctionRepositoryBox,
    notifier: NotifierBox,
    clock: ClockBox,
}

impl AuctionCloser {
    /// Creates a new `AuctionCloser`.
    ///
    /// # Arguments
    ///
    /// * `auctions` - Source of open auctions and sink for closed ones.
    /// * `notifier` - Receives every auction whose closure was persisted.
    /// * `clock` - Decides what "now" is; `None` uses [`default_clock`].
    pub fn new(auctions: AuctionRepositoryBox, notifier: NotifierBox, clock: Option<ClockBox>) -> Self {
        Self {
            auctions,
            notifier,
            clock: clock.unwrap_or_else(default_clock),
        }
    }

    /// Runs one closing pass over the currently open auctions.
    ///
    /// Only a failure to list the open auctions is returned as an error.
    pub async fn close(&self) -> Result<ClosureReport> {
        let open = self.auctions.list_open().await?;
        let now = self.clock.now();
        tracing::info!(open = open.len(), now = %now, "Closing auctions...");

        let mut report = ClosureReport::default();
        for auction in open {
            if !started_over_a_week_ago(auction.created_at, now) {
                tracing::debug!(auction_id = %auction.id, created_at = %auction.created_at, "Auction still running");
                report.skipped += 1;
                continue;
            }

            let outcome = self.close_auction(auction).await;
            match &outcome {
                ClosureOutcome::Closed(_) => {}
                ClosureOutcome::Unnotified { auction, error } => {
                    tracing::error!(error = %error, auction_id = %auction, "Failed to notify auction closure");
                }
                ClosureOutcome::Failed { auction, error } => {
                    tracing::error!(error = %error, auction_id = %auction, "Failed to close auction");
                }
            }
            report.outcomes.push(outcome);
        }

        tracing::info!(
            closed = report.total_closed(),
            skipped = report.skipped(),
            failed = report.outcomes().len() - report.total_closed(),
            "Closing pass finished"
        );
        Ok(report)
    }

    async fn close_auction(&self, mut auction: Auction) -> ClosureOutcome {
        let id = auction.id;
        if let Err(error) = auction.close() {
            return ClosureOutcome::Failed { auction: id, error };
        }
        if let Err(error) = self.auctions.update(auction.clone()).await {
            return ClosureOutcome::Failed { auction: id, error };
        }
        match self.notifier.notify(auction).await {
            Ok(()) => ClosureOutcome::Closed(id),
            Err(error) => ClosureOutcome::Unnotified { auction: id, error },
        }
    }
}
