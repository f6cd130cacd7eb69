use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};

use crate::error::{AtlasError, Result};

/// Column-indexed snapshot of a single worksheet: a header row and the body
/// rows converted to strings, padded to the header width.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    sheet: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Name of the worksheet this table was read from.
    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolves a header name to its column index.
    pub fn column(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| AtlasError::MissingColumn {
                sheet: self.sheet.clone(),
                column: name.to_string(),
            })
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

/// Reads the first worksheet of an Excel workbook into a [`RawTable`].
///
/// The sheet must carry a header row; body rows shorter than the header are
/// padded with empty cells so column indices stay valid.
pub fn read_table(path: &Path) -> Result<RawTable> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AtlasError::InvalidWorkbook("workbook contains no sheets".into()))?;

    let range = workbook
        .worksheet_range(&sheet)
        .ok_or_else(|| AtlasError::InvalidWorkbook(format!("missing sheet '{sheet}'")))?
        .map_err(AtlasError::from)?;

    let mut row_iter = range.rows();
    let columns: Vec<String> = match row_iter.next() {
        Some(first_row) => first_row
            .iter()
            .map(|cell| cell_to_string(Some(cell)))
            .collect(),
        None => {
            return Err(AtlasError::InvalidWorkbook(format!(
                "sheet '{sheet}' has no header row"
            )));
        }
    };

    let mut rows = Vec::new();
    for row in row_iter {
        let mut cells: Vec<String> = row.iter().map(|cell| cell_to_string(Some(cell))).collect();
        cells.resize(columns.len(), String::new());
        rows.push(cells);
    }

    Ok(RawTable {
        sheet,
        columns,
        rows,
    })
}

fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
