//! CSV export
//!
//! Rows are `name,amount,category,date` with no header. Fields are written
//! as-is: embedded commas are neither quoted nor escaped, so a name like
//! "Lunch, with Sam" spreads over two columns in the output.

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, DATE_FORMAT};

/// Write `expenses` as CSV rows to `writer`
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> TrackerResult<()> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for expense in expenses {
        csv_writer.write_record([
            expense.name.as_str(),
            expense.amount.to_decimal_string().as_str(),
            expense.category.as_str(),
            expense.date.format(DATE_FORMAT).to_string().as_str(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(format!("Failed to flush CSV output: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn expense(name: &str, cents: i64, category: &str, day: u32) -> Expense {
        Expense::new(
            name,
            Money::from_cents(cents),
            category,
            NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
        )
    }

    fn export(expenses: &[Expense]) -> String {
        let mut output = Vec::new();
        export_expenses_csv(expenses, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_rows_without_header() {
        let csv = export(&[
            expense("Coffee", 450, "Food", 3),
            expense("Bus", 275, "Transport", 4),
        ]);

        assert_eq!(
            csv,
            "Coffee,4.50,Food,2025-01-03\nBus,2.75,Transport,2025-01-04\n"
        );
    }

    #[test]
    fn test_embedded_commas_are_not_quoted() {
        let csv = export(&[expense("Lunch, with Sam", 1899, "Food", 5)]);
        assert_eq!(csv, "Lunch, with Sam,18.99,Food,2025-01-05\n");
    }

    #[test]
    fn test_empty_list_writes_nothing() {
        assert_eq!(export(&[]), "");
    }
}
