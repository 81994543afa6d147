use clap::Parser;
use std::path::PathBuf;

/// Apply a batch of money transfers against a set of accounts
#[derive(Parser, Debug)]
#[command(name = "transfer-engine")]
#[command(about = "Apply a batch of money transfers against a set of accounts", long_about = None)]
pub struct CliArgs {
    /// Accounts CSV file with accountNumber,balance rows
    #[arg(value_name = "ACCOUNTS", help = "Path to the accounts CSV file")]
    pub accounts_file: PathBuf,

    /// Transfers CSV file with fromAccount,toAccount,amount rows
    #[arg(value_name = "TRANSFERS", help = "Path to the transfers CSV file")]
    pub transfers_file: PathBuf,
}
