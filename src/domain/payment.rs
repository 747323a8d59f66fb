use super::money::Amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A payment owed by the winner of a closed auction.
///
/// Captured once at generation time; it keeps no reference to the auction
/// it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    amount: Amount,
    due_date: NaiveDate,
}

impl Payment {
    pub fn new(amount: Amount, due_date: NaiveDate) -> Self {
        Self { amount, due_date }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}
