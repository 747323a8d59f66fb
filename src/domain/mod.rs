//! Domain layer: auction and payment entities, calendar rules, and the ports
//! through which the batch routines reach storage, notification, time and
//! valuation.

pub mod auction;
pub mod calendar;
pub mod money;
pub mod payment;
pub mod ports;
