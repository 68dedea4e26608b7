//! Single-row spreadsheet output.
//!
//! Writes a header row (`Indsendelser`, `Antal`) and one data row. No index
//! column; both cells are text. An existing file at the path is replaced.

use std::path::Path;

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use tracing::debug;

use crate::core::domain::CountRecord;
use crate::error::{RecordError, Result};

/// Write `record` to an `.xlsx` file at `path`.
///
/// # Errors
///
/// Returns `RecordError::Write` if the workbook can't be built or saved.
pub fn write(record: &CountRecord, path: &Path) -> Result<()> {
    debug!(path = %path.display(), %record, "writing spreadsheet");

    build(record, path).map_err(|source| RecordError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

fn build(record: &CountRecord, path: &Path) -> std::result::Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let header = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);

    let sheet = workbook.add_worksheet();
    for (col, name) in (0u16..).zip(CountRecord::COLUMNS) {
        sheet.write_string_with_format(0, col, name, &header)?;
    }
    for (col, value) in (0u16..).zip(record.values()) {
        sheet.write_string(1, col, value)?;
    }

    workbook.save(path)
}
