//! CSV input and output used by the command-line runner.

pub mod auction_reader;
pub mod report_writer;
