use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn test_close_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("auction-settlement"));
    cmd.arg("close")
        .arg("--auctions")
        .arg("tests/fixtures/auctions.csv")
        .arg("--bids")
        .arg("tests/fixtures/bids.csv")
        .arg("--now")
        .arg("2017-09-03T10:00:00");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("id,description,created_at,status"))
        // Started years ago: closed
        .stdout(predicate::str::contains("1,TV,1999-02-20T10:00:00,closed"))
        // Started the day before: still open
        .stdout(predicate::str::contains("2,Radio,2017-09-02T10:00:00,open"))
        .stdout(predicate::str::contains("3,Fridge,2017-08-01T08:30:00,closed"))
        .stderr(predicate::str::contains("Auction closed notice"));

    Ok(())
}

#[test]
fn test_generate_end_to_end_on_a_sunday() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("auction-settlement"));
    cmd.arg("generate")
        .arg("--auctions")
        .arg("tests/fixtures/auctions.csv")
        .arg("--bids")
        .arg("tests/fixtures/bids.csv")
        .env("AUCTION_NOW", "2017-09-03T10:00:00");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("amount,due_date"))
        .stdout(predicate::str::contains("3000,2017-09-04"))
        // Auction 1 is still open, so its bid produces no payment.
        .stdout(predicate::str::contains("150").not());

    Ok(())
}

#[test]
fn test_unreadable_rows_are_skipped() {
    let mut auctions = NamedTempFile::new().unwrap();
    writeln!(auctions, "id, description, created_at, status").unwrap();
    writeln!(auctions, "1, TV, 1999-02-20T10:00:00, open").unwrap();
    writeln!(auctions, "2, Radio, last week, open").unwrap();
    writeln!(auctions, "x, Fridge, 1999-02-20T10:00:00, open").unwrap();

    let mut cmd = Command::new(cargo_bin!("auction-settlement"));
    cmd.arg("close")
        .arg("--auctions")
        .arg(auctions.path())
        .arg("--now")
        .arg("2017-09-03T10:00:00");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading auction"))
        .stdout(predicate::str::contains("1,TV,1999-02-20T10:00:00,closed"))
        .stdout(predicate::str::contains("Radio").not());
}

#[test]
fn test_generate_fails_on_closed_auction_without_bids() {
    let mut auctions = NamedTempFile::new().unwrap();
    writeln!(auctions, "id, description, created_at, status").unwrap();
    writeln!(auctions, "1, TV, 1999-02-20T10:00:00, closed").unwrap();

    let mut cmd = Command::new(cargo_bin!("auction-settlement"));
    cmd.arg("generate")
        .arg("--auctions")
        .arg(auctions.path())
        .arg("--now")
        .arg("2017-09-06T10:00:00");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("has no bids"));
}

#[test]
fn test_missing_auctions_file() {
    let mut cmd = Command::new(cargo_bin!("auction-settlement"));
    cmd.arg("close").arg("--auctions").arg("tests/fixtures/missing.csv");

    cmd.assert().failure();
}

#[test]
fn test_duplicate_auction_rows_keep_the_first() {
    let mut auctions = NamedTempFile::new().unwrap();
    writeln!(auctions, "id, description, created_at, status").unwrap();
    writeln!(auctions, "1, TV, 1999-02-20T10:00:00, closed").unwrap();
    writeln!(auctions, "1, Radio, 2017-09-01T10:00:00, closed").unwrap();
    let mut bids = NamedTempFile::new().unwrap();
    writeln!(bids, "auction, bidder, amount").unwrap();
    writeln!(bids, "1, David, 2000.0").unwrap();
    writeln!(bids, "1, Leticia, 3000.0").unwrap();

    let mut cmd = Command::new(cargo_bin!("auction-settlement"));
    cmd.arg("generate")
        .arg("--auctions")
        .arg(auctions.path())
        .arg("--bids")
        .arg(bids.path())
        .arg("--now")
        .arg("2017-09-06T10:00:00");

    // The duplicate would otherwise replace the first row and lose its bids.
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Ignoring duplicate auction row"))
        .stdout(predicate::str::contains("3000,2017-09-06"));
}
