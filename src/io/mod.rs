//! I/O module
//!
//! Handles CSV parsing and the balance report.
//!
//! # Components
//!
//! - `csv_format` - row structures, validation/conversion, report serialization
//! - `reader` - streaming readers over the two input files

pub mod csv_format;
pub mod reader;

pub use csv_format::{
    convert_account_row, convert_transfer_row, parse_account_number, write_balances_csv,
    AccountRow, TransferRow,
};
pub use reader::{AccountReader, TransferReader};
