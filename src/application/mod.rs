//! Application layer containing the two batch routines.
//!
//! [`auction_closer::AuctionCloser`] closes auctions that have been open for a
//! week and [`payment_generator::PaymentGenerator`] turns closed auctions into
//! payments. Each is triggered externally, once per pass, and processes its
//! listing sequentially.

pub mod auction_closer;
pub mod payment_generator;
