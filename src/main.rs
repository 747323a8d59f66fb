use auction_settlement::application::auction_closer::AuctionCloser;
use auction_settlement::application::payment_generator::PaymentGenerator;
use auction_settlement::domain::auction::{AuctionId, Bid};
use auction_settlement::domain::ports::ClockBox;
use auction_settlement::infrastructure::appraiser::HighestBidAppraiser;
use auction_settlement::infrastructure::clock::FixedClock;
use auction_settlement::infrastructure::in_memory::{
    InMemoryAuctionRepository, InMemoryPaymentRepository,
};
use auction_settlement::infrastructure::notifier::LogNotifier;
use auction_settlement::interfaces::csv::auction_reader::{AuctionReader, BidReader};
use auction_settlement::interfaces::csv::report_writer::ReportWriter;
use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Runs one auction settlement pass. Meant to be triggered by a scheduler.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Close open auctions that started a week or more ago
    Close(BatchArgs),
    /// Generate payments for closed auctions
    Generate(BatchArgs),
}

#[derive(Args)]
struct BatchArgs {
    /// Auctions CSV file (id, description, created_at, status)
    #[arg(long)]
    auctions: PathBuf,

    /// Bids CSV file (auction, bidder, amount)
    #[arg(long)]
    bids: Option<PathBuf>,

    /// Run as if the local time were this instant, e.g. 2017-09-03T10:00:00
    #[arg(long, env = "AUCTION_NOW")]
    now: Option<NaiveDateTime>,
}

impl BatchArgs {
    fn clock(&self) -> Option<ClockBox> {
        self.now.map(|now| Box::new(FixedClock(now)) as ClockBox)
    }

    async fn load_auctions(&self) -> Result<InMemoryAuctionRepository> {
        let mut bids: HashMap<AuctionId, Vec<Bid>> = HashMap::new();
        if let Some(path) = &self.bids {
            let file = File::open(path).into_diagnostic()?;
            for row in BidReader::new(file).rows() {
                match row {
                    Ok(row) => {
                        let (auction, bid) = row.into_bid();
                        bids.entry(auction).or_default().push(bid);
                    }
                    Err(e) => tracing::warn!(error = %e, "Error reading bid"),
                }
            }
        }

        let repo = InMemoryAuctionRepository::new();
        let mut seen = HashSet::new();
        let file = File::open(&self.auctions).into_diagnostic()?;
        for row in AuctionReader::new(file).rows() {
            match row {
                Ok(row) if !seen.insert(row.id) => {
                    tracing::warn!(auction_id = %row.id, "Ignoring duplicate auction row");
                }
                Ok(row) => {
                    let auction_bids = bids.remove(&row.id).unwrap_or_default();
                    repo.insert(row.into_auction(auction_bids)).await;
                }
                Err(e) => tracing::warn!(error = %e, "Error reading auction"),
            }
        }
        for auction in bids.keys() {
            tracing::warn!(auction_id = %auction, "Ignoring bids for unknown auction");
        }
        Ok(repo)
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

async fn close(args: BatchArgs) -> Result<()> {
    let repo = args.load_auctions().await?;
    let closer = AuctionCloser::new(Box::new(repo.clone()), Box::new(LogNotifier), args.clock());
    closer.close().await.into_diagnostic()?;

    let auctions = repo.all().await;
    let mut writer = ReportWriter::new(io::stdout().lock());
    writer.write_auctions(&auctions).into_diagnostic()?;
    Ok(())
}

async fn generate(args: BatchArgs) -> Result<()> {
    let repo = args.load_auctions().await?;
    let payments = InMemoryPaymentRepository::new();
    let mut generator = PaymentGenerator::new(
        Box::new(repo),
        Box::new(payments.clone()),
        Box::new(HighestBidAppraiser::new()),
        args.clock(),
    );
    generator.generate().await.into_diagnostic()?;

    let payments = payments.all().await;
    let mut writer = ReportWriter::new(io::stdout().lock());
    writer.write_payments(&payments).into_diagnostic()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Close(args) => close(args).await,
        Command::Generate(args) => generate(args).await,
    }
}
