use std::path::Path;

use csv::WriterBuilder;

use crate::error::Result;
use crate::reconcile::ExportTable;

/// Default file name for the Kindercare location export.
pub const EXPORT_FILE_NAME: &str = "kindercare-locations.csv";

/// Writes the export table to the given path as UTF-8 CSV, header row first.
pub fn write_csv(path: &Path, table: &ExportTable) -> Result<()> {
    let mut writer = WriterBuilder::new().from_path(path)?;
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
