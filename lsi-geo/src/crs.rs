//! Legacy GeoJSON `crs` member handling.
//!
//! Modern GeoJSON (RFC 7946) is always WGS84 and has no `crs` member, but
//! boundary files exported from GIS tooling often still carry the legacy
//! member. We honor it for the projections Landsat products actually ship
//! in: web mercator and WGS84 UTM zones.

use geojson::FeatureCollection;
use lsi_core::error::DashboardError;

/// EPSG code for WGS84 geographic coordinates.
pub const EPSG_WGS84: u32 = 4326;

/// Extract the EPSG code from a feature collection's legacy `crs` member.
///
/// Returns `Ok(None)` when no `crs` member is present (the RFC 7946 case:
/// coordinates are WGS84). `urn:ogc:def:crs:OGC:1.3:CRS84` is treated as
/// WGS84. A `crs` member that names no recognizable code is a
/// [`DashboardError::Geometry`].
pub fn detect_epsg(collection: &FeatureCollection) -> Result<Option<u32>, DashboardError> {
    let crs = match collection
        .foreign_members
        .as_ref()
        .and_then(|m| m.get("crs"))
    {
        Some(crs) => crs,
        None => return Ok(None),
    };

    let name = crs
        .get("properties")
        .and_then(|p| p.get("name"))
        .and_then(|n| n.as_str())
        .ok_or_else(|| {
            DashboardError::Geometry("AOI 'crs' member has no properties.name".to_string())
        })?;

    parse_crs_name(name)
        .map(Some)
        .ok_or_else(|| DashboardError::Geometry(format!("unrecognized AOI CRS '{}'", name)))
}

/// Parse CRS names of the forms `EPSG:32611`, `urn:ogc:def:crs:EPSG::32611`,
/// and `urn:ogc:def:crs:OGC:1.3:CRS84`.
fn parse_crs_name(name: &str) -> Option<u32> {
    if name.contains("CRS84") {
        return Some(EPSG_WGS84);
    }
    name.rsplit(':').next()?.parse::<u32>().ok()
}

/// Proj string for a supported projected CRS, or `None` if unsupported.
///
/// UTM zones are expressed as transverse Mercator directly
/// (zone N has central meridian `6N - 183`, false easting 500 km, southern
/// zones add a 10,000 km false northing).
pub fn proj_string_for_epsg(epsg: u32) -> Option<String> {
    match epsg {
        // Web mercator (spherical).
        3857 => Some(
            "+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +k=1 +units=m +no_defs"
                .to_string(),
        ),
        // WGS84 UTM, northern hemisphere: EPSG:32601 - 32660.
        32601..=32660 => {
            let zone = epsg - 32600;
            Some(format!(
                "+proj=tmerc +lat_0=0 +lon_0={} +k=0.9996 +x_0=500000 +y_0=0 +datum=WGS84 +units=m +no_defs",
                zone as i32 * 6 - 183
            ))
        }
        // WGS84 UTM, southern hemisphere: EPSG:32701 - 32760.
        32701..=32760 => {
            let zone = epsg - 32700;
            Some(format!(
                "+proj=tmerc +lat_0=0 +lon_0={} +k=0.9996 +x_0=500000 +y_0=10000000 +datum=WGS84 +units=m +no_defs",
                zone as i32 * 6 - 183
            ))
        }
        _ => None,
    }
}

/// Proj string for WGS84 geographic coordinates.
pub fn wgs84_proj_string() -> &'static str {
    "+proj=longlat +datum=WGS84 +no_defs"
}
