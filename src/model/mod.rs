use std::fmt;

use serde::{Deserialize, Serialize};

/// Page-link value used for brands whose source data carries no link.
pub const NO_PAGE_LINK: &str = "none";

/// Childcare-center operator whose locations appear on the combined map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brand {
    Cdn,
    Kindercare,
}

impl Brand {
    /// Label used in the `Brand` column of exports and map legends.
    pub fn as_str(self) -> &'static str {
        match self {
            Brand::Cdn => "CDN",
            Brand::Kindercare => "Kindercare",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A latitude/longitude pair produced by the upstream geocoding run. May be
/// zip-code precision where street-level geocoding failed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// One physical center in the unified schema shared by both brands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedLocation {
    pub brand: Brand,
    /// Unique within a brand only; CDN ids come straight from the `School`
    /// column, Kindercare ids are derived from the page link.
    pub school_id: String,
    pub center_name: String,
    pub center_director: String,
    pub latitude: f64,
    pub longitude: f64,
    /// [`NO_PAGE_LINK`] for CDN records.
    pub page_link: String,
}

/// Typed raw Kindercare row, including the columns that only matter for the
/// CSV export. The upstream crawler writes the literal string `"error"` into
/// `CenterLeaderName` when a center page could not be parsed; that sentinel
/// becomes `director: None` at ingestion so no magic-string comparison
/// survives past parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct KindercareRecord {
    pub school_id: String,
    pub center_name: String,
    pub director: Option<String>,
    /// Absent on rows the crawler failed to parse.
    pub geocode: Option<GeoPoint>,
    pub page_link: String,
    pub leader_title: String,
    pub hours: String,
    pub address_city: String,
    pub address_state: String,
    pub address_zip: String,
}

impl KindercareRecord {
    /// Whether the record survived the upstream crawl intact.
    pub fn is_valid(&self) -> bool {
        self.director.is_some()
    }
}

/// Data-quality summary for the Kindercare set, counted over distinct school
/// ids rather than rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coverage {
    /// Distinct ids before the validity filter.
    pub total: usize,
    /// Distinct ids among records that survived the filter.
    pub with_address: usize,
    pub missing: usize,
}
