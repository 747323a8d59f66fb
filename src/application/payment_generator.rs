use crate::domain::calendar::next_business_day;
use crate::domain::payment::Payment;
use crate::domain::ports::{AppraiserBox, AuctionRepositoryBox, ClockBox, PaymentRepositoryBox};
use crate::error::{Result, SettlementError};
use crate::infrastructure::clock::default_clock;
use chrono::NaiveDate;

/// Creates one payment per closed auction, due on the next business day.
///
/// Unlike closing, generation stops at the first failure: an auction that is
/// still open or cannot be valued, or a payment that cannot be saved, aborts
/// the rest of the pass.
pub struct PaymentGenerator {
    auctions: AuctionRepositoryBox,
    payments: PaymentRepositoryBox,
    appraiser: AppraiserBox,
    clock: ClockBox,
}

impl PaymentGenerator {
    /// Creates a new `PaymentGenerator`.
    ///
    /// # Arguments
    ///
    /// * `auctions` - Source of closed auctions.
    /// * `payments` - Where generated payments are saved.
    /// * `appraiser` - Picks the winning bid of each auction.
    /// * `clock` - Gives today's date; `None` uses [`default_clock`].
    pub fn new(
        auctions: AuctionRepositoryBox,
        payments: PaymentRepositoryBox,
        appraiser: AppraiserBox,
        clock: Option<ClockBox>,
    ) -> Self {
        Self {
            auctions,
            payments,
            appraiser,
            clock: clock.unwrap_or_else(default_clock),
        }
    }

    /// Generates and saves the payments for every closed auction.
    pub async fn generate(&mut self) -> Result<()> {
        let closed = self.auctions.list_closed().await?;
        tracing::info!(closed = closed.len(), "Generating payments...");

        for auction in closed {
            if !auction.is_closed() {
                return Err(SettlementError::ValidationError(format!(
                    "Auction {} is still open",
                    auction.id
                )));
            }
            self.appraiser.evaluate(&auction)?;
            let payment = Payment::new(self.appraiser.winning_amount()?, self.business_day()?);
            tracing::info!(
                auction_id = %auction.id,
                amount = %payment.amount(),
                due_date = %payment.due_date(),
                "Payment generated"
            );
            self.payments.save(payment).await?;
        }
        Ok(())
    }

    fn business_day(&self) -> Result<NaiveDate> {
        let today = self.clock.today();
        next_business_day(today).ok_or_else(|| {
            SettlementError::CalendarError(format!("No business day after {today}"))
        })
    }
}
