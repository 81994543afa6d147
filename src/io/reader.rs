//! Streaming CSV readers for the two input files
//!
//! Provides iterator interfaces over account rows and transfer rows,
//! delegating format concerns to the csv_format module.
//!
//! # Design
//!
//! Both readers wrap a `csv::Reader` and deserialize one row at a time, so
//! memory usage stays constant regardless of file size. Input files are
//! headerless; fields are trimmed. Each yielded item is a
//! `Result<domain value, TransferError>`: fatal errors (file not found)
//! are returned from `new()`, per-row errors are yielded inline with the
//! 1-based line number so callers can skip and keep reading.

use crate::io::csv_format::{
    convert_account_row, convert_transfer_row, AccountRow, TransferRow,
};
use crate::types::{Account, TransferError, TransferRequest};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

fn open_csv(path: &Path) -> Result<csv::Reader<File>, TransferError> {
    let file = File::open(path)
        .map_err(|e| TransferError::file_open(&path.display().to_string(), e))?;

    Ok(ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .buffer_capacity(8 * 1024)
        .from_reader(file))
}

/// Attach a line number to a per-row error
fn row_error(line: u64, message: impl ToString) -> TransferError {
    TransferError::Parse {
        line: Some(line),
        message: message.to_string(),
    }
}

/// Streaming reader over `accountNumber,balance` rows
///
/// # Examples
///
/// ```no_run
/// use bank_transfer_engine::io::reader::AccountReader;
/// use std::path::Path;
///
/// let reader = AccountReader::new(Path::new("accounts.csv")).unwrap();
/// let accounts: Vec<_> = reader.filter_map(Result::ok).collect();
/// println!("Loaded {} accounts", accounts.len());
/// ```
#[derive(Debug)]
pub struct AccountReader {
    reader: csv::Reader<File>,
    line: u64,
}

impl AccountReader {
    /// Open the accounts file for streaming iteration
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened; this is fatal to the
    /// run.
    pub fn new(path: &Path) -> Result<Self, TransferError> {
        Ok(Self {
            reader: open_csv(path)?,
            line: 0,
        })
    }
}

impl Iterator for AccountReader {
    type Item = Result<Account, TransferError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut rows = self.reader.deserialize::<AccountRow>();

        match rows.next()? {
            Ok(row) => {
                self.line += 1;
                Some(convert_account_row(row).map_err(|e| row_error(self.line, e)))
            }
            Err(e) => {
                self.line += 1;
                Some(Err(row_error(self.line, e)))
            }
        }
    }
}

/// Streaming reader over `fromAccount,toAccount,amount` rows
///
/// Yields transfer requests in file order; the position of each row in the
/// file is the position of the request in the batch.
#[derive(Debug)]
pub struct TransferReader {
    reader: csv::Reader<File>,
    line: u64,
}

impl TransferReader {
    /// Open the transfers file for streaming iteration
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened; this is fatal to the
    /// run.
    pub fn new(path: &Path) -> Result<Self, TransferError> {
        Ok(Self {
            reader: open_csv(path)?,
            line: 0,
        })
    }
}

impl Iterator for TransferReader {
    type Item = Result<TransferRequest, TransferError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut rows = self.reader.deserialize::<TransferRow>();

        match rows.next()? {
            Ok(row) => {
                self.line += 1;
                Some(convert_transfer_row(row).map_err(|e| row_error(self.line, e)))
            }
            Err(e) => {
                self.line += 1;
                Some(Err(row_error(self.line, e)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_account_reader_new_fails_on_missing_file() {
        let result = AccountReader::new(Path::new("nonexistent.csv"));
        assert!(matches!(
            result.unwrap_err(),
            TransferError::FileOpen { .. }
        ));
    }

    #[test]
    fn test_account_reader_iterates_valid_rows() {
        let file = create_temp_csv("1111234522226789,5000.00\n1111234522221234,10000.00\n");

        let reader = AccountReader::new(file.path()).unwrap();
        let accounts: Vec<_> = reader.filter_map(Result::ok).collect();

        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].number, "1111234522226789");
        assert_eq!(accounts[0].balance, Decimal::new(500000, 2));
        assert_eq!(accounts[1].number, "1111234522221234");
        assert_eq!(accounts[1].balance, Decimal::new(1000000, 2));
    }

    #[test]
    fn test_account_reader_trims_whitespace() {
        let file = create_temp_csv("  1111234522226789  ,  5000.00  \n");

        let reader = AccountReader::new(file.path()).unwrap();
        let accounts: Vec<_> = reader.filter_map(Result::ok).collect();

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].number, "1111234522226789");
    }

    #[test]
    fn test_account_reader_includes_line_numbers_in_errors() {
        let file = create_temp_csv(
            "1111234522226789,5000.00\n123,10000.00\n1111234522221234,250.00\n",
        );

        let reader = AccountReader::new(file.path()).unwrap();
        let rows: Vec<_> = reader.collect();

        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_ok());
        assert!(rows[1].is_err());
        assert!(rows[2].is_ok());

        let error = rows[1].as_ref().unwrap_err().to_string();
        assert!(error.contains("line 2"));
        assert!(error.contains("Invalid account number"));
    }

    #[test]
    fn test_account_reader_continues_after_error() {
        let file = create_temp_csv(
            "1111234522226789,5000.00\n1111234522221234,abc\n2222123433331212,550.00\n",
        );

        let reader = AccountReader::new(file.path()).unwrap();
        let accounts: Vec<_> = reader.filter_map(Result::ok).collect();

        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].number, "1111234522226789");
        assert_eq!(accounts[1].number, "2222123433331212");
    }

    #[test]
    fn test_account_reader_handles_empty_file() {
        let file = create_temp_csv("");

        let reader = AccountReader::new(file.path()).unwrap();
        assert_eq!(reader.count(), 0);
    }

    #[test]
    fn test_account_reader_rejects_wrong_field_count() {
        let file = create_temp_csv("1111234522226789\n");

        let reader = AccountReader::new(file.path()).unwrap();
        let rows: Vec<_> = reader.collect();

        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_err());
    }

    #[test]
    fn test_transfer_reader_iterates_valid_rows() {
        let file = create_temp_csv(
            "1111234522226789,1212343433335665,500.00\n1111234522221234,1212343433335665,25.60\n",
        );

        let reader = TransferReader::new(file.path()).unwrap();
        let requests: Vec<_> = reader.filter_map(Result::ok).collect();

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].source, "1111234522226789");
        assert_eq!(requests[0].destination, "1212343433335665");
        assert_eq!(requests[0].amount, Decimal::new(50000, 2));
        assert_eq!(requests[1].amount, Decimal::new(2560, 2));
    }

    #[test]
    fn test_transfer_reader_preserves_file_order() {
        let file = create_temp_csv(
            "1111234522226789,1212343433335665,1.00\n\
             1212343433335665,1111234522226789,2.00\n\
             1111234522226789,1212343433335665,3.00\n",
        );

        let reader = TransferReader::new(file.path()).unwrap();
        let amounts: Vec<_> = reader
            .filter_map(Result::ok)
            .map(|request| request.amount)
            .collect();

        assert_eq!(
            amounts,
            vec![
                Decimal::new(100, 2),
                Decimal::new(200, 2),
                Decimal::new(300, 2)
            ]
        );
    }

    #[test]
    fn test_transfer_reader_includes_line_numbers_in_errors() {
        let file = create_temp_csv(
            "1111234522226789,1212343433335665,500.00\n\
             1111234522226789,1212343433335665,-10.00\n",
        );

        let reader = TransferReader::new(file.path()).unwrap();
        let rows: Vec<_> = reader.collect();

        assert!(rows[0].is_ok());
        let error = rows[1].as_ref().unwrap_err().to_string();
        assert!(error.contains("line 2"));
        assert!(error.contains("must be positive"));
    }

    #[test]
    fn test_transfer_reader_continues_after_error() {
        let file = create_temp_csv(
            "1111234522226789,1212343433335665,500.00\n\
             badnumber,1212343433335665,10.00\n\
             1212343433335665,1111234522226789,25.60\n",
        );

        let reader = TransferReader::new(file.path()).unwrap();
        let requests: Vec<_> = reader.filter_map(Result::ok).collect();

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].amount, Decimal::new(2560, 2));
    }

    #[test]
    fn test_transfer_reader_new_fails_on_missing_file() {
        let result = TransferReader::new(Path::new("nonexistent.csv"));
        assert!(matches!(
            result.unwrap_err(),
            TransferError::FileOpen { .. }
        ));
    }
}
