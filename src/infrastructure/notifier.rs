use crate::domain::auction::Auction;
use crate::domain::ports::Notifier;
use crate::error::Result;
use async_trait::async_trait;

/// Emits the closing notice as a log event.
///
/// Stands in for a mailer when the batch runs from the command line.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, auction: Auction) -> Result<()> {
        tracing::info!(
            auction_id = %auction.id,
            description = %auction.description,
            bids = auction.bids().len(),
            "Auction closed notice"
        );
        Ok(())
    }
}
