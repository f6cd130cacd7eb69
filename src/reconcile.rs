//! Normalization and reconciliation of the two brand location exports.
//!
//! The two source workbooks carry different column schemas; this module maps
//! both onto [`NormalizedLocation`], filters out Kindercare rows the upstream
//! crawler failed to parse, and derives the coverage metrics reported next to
//! the map.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{AtlasError, Result};
use crate::io::excel_read::RawTable;
use crate::model::{Brand, Coverage, GeoPoint, KindercareRecord, NO_PAGE_LINK, NormalizedLocation};

/// Number of trailing page-link characters that form a Kindercare school id.
const SCHOOL_ID_LEN: usize = 6;
/// Director value the crawler writes when a center page could not be parsed.
const DIRECTOR_ERROR_SENTINEL: &str = "error";

/// Column order of the Kindercare CSV export.
pub const EXPORT_COLUMNS: [&str; 10] = [
    "Brand",
    "SchoolID",
    "CenterName",
    "CenterDirector",
    "CenterLeaderTitle",
    "CenterHours",
    "CenterAddressCity",
    "CenterAddressState",
    "CenterAddressZip",
    "CenterPageLink",
];

/// Tabular projection of the Kindercare set prepared for CSV export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Maps the CDN workbook onto the shared schema.
///
/// Renames `Director` and `School` to the shared field names and fills the
/// page link with the [`NO_PAGE_LINK`] sentinel; no rows are filtered, so the
/// output length always equals the input length.
pub fn normalize_cdn(table: &RawTable) -> Result<Vec<NormalizedLocation>> {
    let school = table.column("School")?;
    let name = table.column("CenterName")?;
    let director = table.column("Director")?;
    let lat = table.column("GeocodedLat")?;
    let lon = table.column("GeocodedLon")?;

    let mut locations = Vec::with_capacity(table.len());
    for row in table.rows() {
        locations.push(NormalizedLocation {
            brand: Brand::Cdn,
            school_id: row[school].clone(),
            center_name: row[name].clone(),
            center_director: row[director].clone(),
            latitude: parse_coordinate("GeocodedLat", &row[lat])?,
            longitude: parse_coordinate("GeocodedLon", &row[lon])?,
            page_link: NO_PAGE_LINK.to_string(),
        });
    }
    Ok(locations)
}

/// Parses the Kindercare workbook into typed records, converting the
/// director error sentinel into a validity flag and deriving school ids from
/// the page links. Coordinate cells may be empty only on invalid rows; those
/// records never reach the map.
pub fn parse_kindercare(table: &RawTable) -> Result<Vec<KindercareRecord>> {
    let leader = table.column("CenterLeaderName")?;
    let name = table.column("CenterName")?;
    let link = table.column("CenterPageLink")?;
    let lat = table.column("GeocodedLat")?;
    let lon = table.column("GeocodedLon")?;
    let leader_title = table.column("CenterLeaderTitle")?;
    let hours = table.column("CenterHours")?;
    let city = table.column("CenterAddressCity")?;
    let state = table.column("CenterAddressState")?;
    let zip = table.column("CenterAddressZip")?;

    let mut records = Vec::with_capacity(table.len());
    for row in table.rows() {
        let director = match row[leader].as_str() {
            DIRECTOR_ERROR_SENTINEL => None,
            value => Some(value.to_string()),
        };
        let page_link = row[link].clone();
        records.push(KindercareRecord {
            school_id: derive_school_id(&page_link),
            center_name: row[name].clone(),
            director,
            geocode: parse_optional_geocode(&row[lat], &row[lon])?,
            page_link,
            leader_title: row[leader_title].clone(),
            hours: row[hours].clone(),
            address_city: row[city].clone(),
            address_state: row[state].clone(),
            address_zip: row[zip].clone(),
        });
    }
    Ok(records)
}

/// Projects the valid Kindercare records onto the shared schema.
pub fn normalize_kindercare(records: &[KindercareRecord]) -> Result<Vec<NormalizedLocation>> {
    let mut locations = Vec::new();
    for record in records {
        let Some(director) = &record.director else {
            continue;
        };
        let point = record
            .geocode
            .ok_or_else(|| AtlasError::MissingGeocode {
                school_id: record.school_id.clone(),
            })?;
        locations.push(NormalizedLocation {
            brand: Brand::Kindercare,
            school_id: record.school_id.clone(),
            center_name: record.center_name.clone(),
            center_director: director.clone(),
            latitude: point.latitude,
            longitude: point.longitude,
            page_link: record.page_link.clone(),
        });
    }
    Ok(locations)
}

/// Produces the unified location sequence: CDN records first, then the
/// surviving Kindercare records, preserving source order within each brand.
pub fn reconcile(
    cdn: &RawTable,
    kindercare: &[KindercareRecord],
) -> Result<Vec<NormalizedLocation>> {
    let mut unified = normalize_cdn(cdn)?;
    unified.extend(normalize_kindercare(kindercare)?);
    debug!(location_count = unified.len(), "brand tables reconciled");
    Ok(unified)
}

/// Counts distinct school ids before and after the validity filter. Counts
/// use ids rather than rows because the source can carry duplicate rows that
/// share one id.
pub fn compute_coverage(records: &[KindercareRecord]) -> Coverage {
    let total = distinct_ids(records.iter());
    let with_address = distinct_ids(records.iter().filter(|record| record.is_valid()));
    Coverage {
        total,
        with_address,
        missing: total - with_address,
    }
}

/// Builds the export projection: valid records only, fixed column order,
/// sorted ascending by school id.
pub fn export_table(records: &[KindercareRecord]) -> ExportTable {
    let mut rows: Vec<Vec<String>> = records
        .iter()
        .filter_map(|record| {
            let director = record.director.as_deref()?;
            Some(vec![
                Brand::Kindercare.as_str().to_string(),
                record.school_id.clone(),
                record.center_name.clone(),
                director.to_string(),
                record.leader_title.clone(),
                record.hours.clone(),
                record.address_city.clone(),
                record.address_state.clone(),
                record.address_zip.clone(),
                record.page_link.clone(),
            ])
        })
        .collect();
    rows.sort_by(|lhs, rhs| lhs[1].cmp(&rhs[1]));

    ExportTable {
        columns: EXPORT_COLUMNS.iter().map(|name| name.to_string()).collect(),
        rows,
    }
}

/// Derives a Kindercare school id from the trailing characters of its page
/// link. Links shorter than six characters are used whole; the crawler only
/// produces these for malformed pages, so they are logged rather than
/// rejected.
pub fn derive_school_id(page_link: &str) -> String {
    let length = page_link.chars().count();
    if length < SCHOOL_ID_LEN {
        warn!(page_link, "page link shorter than a school id, used verbatim");
        return page_link.to_string();
    }
    page_link.chars().skip(length - SCHOOL_ID_LEN).collect()
}

fn distinct_ids<'a>(records: impl Iterator<Item = &'a KindercareRecord>) -> usize {
    records
        .map(|record| record.school_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}

fn parse_coordinate(column: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| AtlasError::InvalidCoordinate {
            column: column.to_string(),
            value: value.to_string(),
        })
}

fn parse_optional_geocode(lat: &str, lon: &str) -> Result<Option<GeoPoint>> {
    if lat.trim().is_empty() && lon.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(GeoPoint {
        latitude: parse_coordinate("GeocodedLat", lat)?,
        longitude: parse_coordinate("GeocodedLon", lon)?,
    }))
}
