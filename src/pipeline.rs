use std::fs;
use std::path::Path;

use tracing::{info, instrument};

use crate::error::Result;
use crate::io::csv_export;
use crate::io::excel_read;
use crate::reconcile;
use crate::viz::{self, MapOptions};

/// Runs the full pipeline and writes the map specification as JSON.
#[instrument(
    level = "info",
    skip_all,
    fields(cdn = %cdn.display(), kindercare = %kindercare.display(), output = %output.display())
)]
pub fn build_map(cdn: &Path, kindercare: &Path, output: &Path, options: &MapOptions) -> Result<()> {
    let cdn_table = excel_read::read_table(cdn)?;
    let kindercare_table = excel_read::read_table(kindercare)?;
    let records = reconcile::parse_kindercare(&kindercare_table)?;

    let locations = reconcile::reconcile(&cdn_table, &records)?;
    let coverage = reconcile::compute_coverage(&records);
    info!(
        location_count = locations.len(),
        kindercare_total = coverage.total,
        kindercare_with_address = coverage.with_address,
        kindercare_missing = coverage.missing,
        "locations reconciled"
    );

    let spec = viz::build_map_spec(&locations, coverage, options);
    let json = serde_json::to_string_pretty(&spec)?;
    fs::write(output, json)?;
    Ok(())
}

/// Writes the Kindercare location table as CSV.
#[instrument(
    level = "info",
    skip_all,
    fields(kindercare = %kindercare.display(), output = %output.display())
)]
pub fn export_kindercare(kindercare: &Path, output: &Path) -> Result<()> {
    let table = excel_read::read_table(kindercare)?;
    let records = reconcile::parse_kindercare(&table)?;
    let export = reconcile::export_table(&records);
    info!(row_count = export.rows.len(), "export table built");
    csv_export::write_csv(output, &export)
}
