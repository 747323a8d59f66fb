use crate::domain::auction::{Auction, AuctionId, AuctionStatus};
use crate::domain::payment::Payment;
use crate::error::Result;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct AuctionLine<'a> {
    id: AuctionId,
    description: &'a str,
    created_at: NaiveDateTime,
    status: AuctionStatus,
}

#[derive(Serialize)]
struct PaymentLine {
    amount: Decimal,
    due_date: NaiveDate,
}

/// Writes batch results as CSV: auction states after a closing pass, or the
/// payments produced by a generation pass.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(target: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(target),
        }
    }

    pub fn write_auctions<'a>(&mut self, auctions: impl IntoIterator<Item = &'a Auction>) -> Result<()> {
        for auction in auctions {
            self.writer.serialize(AuctionLine {
                id: auction.id,
                description: &auction.description,
                created_at: auction.created_at,
                status: auction.status(),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn write_payments<'a>(&mut self, payments: impl IntoIterator<Item = &'a Payment>) -> Result<()> {
        for payment in payments {
            self.writer.serialize(PaymentLine {
                amount: payment.amount().value().normalize(),
                due_date: payment.due_date(),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
