//! Map specification handed to the visualization collaborator.
//!
//! The core does not render anything itself; it produces a serializable
//! [`MapSpec`] describing per-brand point layers, marker styling, optional
//! clustering, and the coverage footnotes shown under the map. A charting
//! frontend consumes the JSON form of this structure.

use serde::Serialize;

use crate::model::{Brand, Coverage, NormalizedLocation};

/// Marker color for CDN locations.
pub const CDN_COLOR: &str = "#2a3bfa";
/// Marker color for Kindercare locations.
pub const KINDERCARE_COLOR: &str = "#fa512a";

// Continental-US framing and marker styling shared by every render.
const MAP_CENTER_LAT: f64 = 39.8283;
const MAP_CENTER_LON: f64 = -98.5795;
const MAP_ZOOM: u8 = 4;
const MARKER_SIZE: u8 = 16;
const MARKER_OPACITY: f64 = 0.50;
const CLUSTER_OPACITY: f64 = 0.75;

/// Rendering knobs that vary between deployments of the map page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapOptions {
    pub page_width: u32,
    pub cluster_enabled: bool,
    pub cluster_step: u32,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            page_width: 1600,
            cluster_enabled: false,
            cluster_step: 2,
        }
    }
}

/// One plotted location with its hover-tooltip fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub school_id: String,
    pub center_name: String,
    pub center_director: String,
    pub page_link: String,
}

/// All points of one brand, drawn in a single color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandLayer {
    pub brand: String,
    pub color: String,
    pub points: Vec<MapPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClusterSettings {
    pub opacity: f64,
    pub step: u32,
}

/// Complete description of one map render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSpec {
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub zoom: u8,
    pub page_width: u32,
    pub marker_size: u8,
    pub marker_opacity: f64,
    /// `None` disables clustering entirely.
    pub clustering: Option<ClusterSettings>,
    pub layers: Vec<BrandLayer>,
    pub footnotes: Vec<String>,
}

/// Assembles the map specification from the unified location sequence.
///
/// Layers appear in fixed brand order (CDN, then Kindercare) so legend and
/// color assignment stay deterministic across renders.
pub fn build_map_spec(
    locations: &[NormalizedLocation],
    coverage: Coverage,
    options: &MapOptions,
) -> MapSpec {
    let layers = vec![
        brand_layer(locations, Brand::Cdn, CDN_COLOR),
        brand_layer(locations, Brand::Kindercare, KINDERCARE_COLOR),
    ];

    let clustering = options.cluster_enabled.then_some(ClusterSettings {
        opacity: CLUSTER_OPACITY,
        step: options.cluster_step,
    });

    MapSpec {
        center_latitude: MAP_CENTER_LAT,
        center_longitude: MAP_CENTER_LON,
        zoom: MAP_ZOOM,
        page_width: options.page_width,
        marker_size: MARKER_SIZE,
        marker_opacity: MARKER_OPACITY,
        clustering,
        layers,
        footnotes: footnotes(coverage),
    }
}

fn brand_layer(locations: &[NormalizedLocation], brand: Brand, color: &str) -> BrandLayer {
    let points = locations
        .iter()
        .filter(|location| location.brand == brand)
        .map(|location| MapPoint {
            latitude: location.latitude,
            longitude: location.longitude,
            school_id: location.school_id.clone(),
            center_name: location.center_name.clone(),
            center_director: location.center_director.clone(),
            page_link: location.page_link.clone(),
        })
        .collect();

    BrandLayer {
        brand: brand.to_string(),
        color: color.to_string(),
        points,
    }
}

fn footnotes(coverage: Coverage) -> Vec<String> {
    vec![
        "*Some address data could not be geocoded due to bad/non-matching address data. \
         These points were plotted according to their zip code instead."
            .to_string(),
        format!(
            "*Showing {} of {} total Kindercare locations, where address data was available.",
            coverage.with_address, coverage.total
        ),
    ]
}
