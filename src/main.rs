use anyhow::Context;
use std::{io, path::Path, process};
#[macro_use]
extern crate log;

mod features;
use features::{Account, Operation};

const DEMO_SCRIPT: &str = "\
type, amount, owner
deposit, 100,
deposit, 0,
withdrawal, 50,
withdrawal, 1000,
rename, , Jessie Jean Sumandigs
rename, , Jessie Jean Sumandig
withdrawal, 0.99,
";

fn main() {
    env_logger::init();
    match run() {
        Ok(account) => match serde_json::to_string_pretty(&account) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("{e}");
                process::exit(1);
            }
        },
        Err(e) => {
            error!("{e:#}");
            process::exit(1);
        }
    }
}

fn cli() -> clap::Command<'static> {
    clap::Command::new("bank-account")
        .about("Replays deposits, withdrawals and renames against a single account")
        .arg(
            clap::Arg::new("owner")
                .long("owner")
                .takes_value(true)
                .default_value("J Doe")
                .help("Name the account is opened with"),
        )
        .arg(
            clap::Arg::new("input")
                .index(1)
                .help("CSV file with `type, amount, owner` rows. Replays a demo script if omitted"),
        )
}

fn run() -> anyhow::Result<Account> {
    let matches = cli().get_matches();

    let mut account = Account::new(matches.value_of("owner"))?;
    info!("Opened account for {}", account.owner());

    match matches.value_of("input") {
        Some(path) => replay_file(path, &mut account)?,
        None => {
            let rdr = reader_builder().from_reader(DEMO_SCRIPT.as_bytes());
            replay(rdr, &mut account)?;
        }
    }

    info!("Final balance {}", account.balance());
    Ok(account)
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .delimiter(b',')
        .trim(csv::Trim::All);
    builder
}

fn replay_file(path: impl AsRef<Path>, account: &mut Account) -> anyhow::Result<()> {
    let path = path.as_ref();
    let rdr = reader_builder()
        .from_path(path)
        .with_context(|| format!("Unable to read {}", path.display()))?;
    replay(rdr, account)
}

/// Applies every row to `account`. Rejected operations are logged and skipped,
/// rows that cannot be read abort the replay
fn replay<R: io::Read>(mut rdr: csv::Reader<R>, account: &mut Account) -> anyhow::Result<()> {
    for result in rdr.deserialize() {
        let operation: Operation = result?;
        match operation.apply(account) {
            Ok(balance) => debug!("{:?} applied, balance {balance}", operation.operation_type()),
            Err(e) => match e.kind() {
                Some(kind) => warn!("{kind:?}: {e}"),
                None => warn!("{e}"),
            },
        }
    }

    Ok(())
}
