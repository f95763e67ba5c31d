//! AOI boundary loading and WGS84 normalization.
//!
//! The dashboard draws one area of interest, loaded once at startup from a
//! GeoJSON file. Whatever CRS the file arrives in, the boundary handed to
//! the map panel is always WGS84 lon/lat with the legacy `crs` member
//! stripped, plus a precomputed centroid for map centering.

use crate::crs;
use geojson::{Feature, FeatureCollection, GeoJson, Value};
use lsi_core::error::DashboardError;
use proj4rs::Proj;
use std::path::Path;

/// The AOI boundary in WGS84, ready for the map renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    collection: FeatureCollection,
    /// Centroid of the first feature as `(lat, lon)`.
    centroid: (f64, f64),
}

impl Boundary {
    /// Parse a boundary from a GeoJSON string.
    ///
    /// Accepts a FeatureCollection, a bare Feature, or a bare Geometry
    /// (the latter two are wrapped). Coordinates are reprojected to WGS84
    /// when a legacy `crs` member names a supported projected CRS; an AOI
    /// already in WGS84 passes through with coordinates untouched.
    ///
    /// Parse failures are [`DashboardError::DataUnavailable`]; empty
    /// collections, unsupported CRS, and failed transforms are
    /// [`DashboardError::Geometry`].
    pub fn from_geojson_str(geojson_str: &str) -> Result<Boundary, DashboardError> {
        let parsed: GeoJson = geojson_str.parse().map_err(|e| {
            DashboardError::DataUnavailable(format!("AOI GeoJSON does not parse: {}", e))
        })?;

        let mut collection = match parsed {
            GeoJson::FeatureCollection(fc) => fc,
            GeoJson::Feature(feature) => FeatureCollection {
                bbox: None,
                features: vec![feature],
                foreign_members: None,
            },
            GeoJson::Geometry(geometry) => FeatureCollection {
                bbox: None,
                features: vec![Feature {
                    bbox: None,
                    geometry: Some(geometry),
                    id: None,
                    properties: None,
                    foreign_members: None,
                }],
                foreign_members: None,
            },
        };

        if collection.features.is_empty() {
            return Err(DashboardError::Geometry(
                "AOI contains no features".to_string(),
            ));
        }

        if let Some(epsg) = crs::detect_epsg(&collection)? {
            if epsg != crs::EPSG_WGS84 {
                reproject_to_wgs84(&mut collection, epsg)?;
                log::info!(
                    "[LSI Debug] boundary: reprojected AOI from EPSG:{} to WGS84",
                    epsg
                );
            }
        }
        // Coordinates are WGS84 from here on; the legacy member must not
        // reach the map renderer.
        if let Some(members) = collection.foreign_members.as_mut() {
            members.remove("crs");
        }

        let centroid = compute_centroid(&collection)?;
        log::info!(
            "[LSI Debug] boundary: loaded AOI with {} features, centroid ({:.4}, {:.4})",
            collection.features.len(),
            centroid.0,
            centroid.1
        );

        Ok(Boundary {
            collection,
            centroid,
        })
    }

    /// Load a boundary from a GeoJSON file on disk (native CLI path).
    pub fn from_geojson_file(path: &Path) -> Result<Boundary, DashboardError> {
        let geojson_str = std::fs::read_to_string(path).map_err(|e| {
            DashboardError::DataUnavailable(format!("cannot read {}: {}", path.display(), e))
        })?;
        Boundary::from_geojson_str(&geojson_str)
    }

    /// Centroid of the first feature as `(lat, lon)`, for map centering.
    pub fn centroid(&self) -> (f64, f64) {
        self.centroid
    }

    /// Number of features in the boundary.
    pub fn feature_count(&self) -> usize {
        self.collection.features.len()
    }

    /// The normalized feature collection.
    pub fn collection(&self) -> &FeatureCollection {
        &self.collection
    }

    /// The normalized boundary serialized back to a GeoJSON string, as the
    /// map renderer consumes it.
    pub fn to_feature_collection_string(&self) -> String {
        GeoJson::from(self.collection.clone()).to_string()
    }
}

fn reproject_to_wgs84(
    collection: &mut FeatureCollection,
    epsg: u32,
) -> Result<(), DashboardError> {
    let proj_string = crs::proj_string_for_epsg(epsg)
        .ok_or_else(|| DashboardError::Geometry(format!("unsupported AOI CRS EPSG:{}", epsg)))?;
    let src = Proj::from_proj_string(&proj_string).map_err(|e| {
        DashboardError::Geometry(format!(
            "cannot initialize EPSG:{} projection: {:?}",
            epsg, e
        ))
    })?;
    let dst = Proj::from_proj_string(crs::wgs84_proj_string())
        .map_err(|e| DashboardError::Geometry(format!("cannot initialize WGS84: {:?}", e)))?;

    for feature in &mut collection.features {
        if let Some(geometry) = feature.geometry.as_mut() {
            transform_value(&mut geometry.value, &src, &dst)?;
        }
    }
    Ok(())
}

fn transform_value(value: &mut Value, src: &Proj, dst: &Proj) -> Result<(), DashboardError> {
    match value {
        Value::Point(position) => transform_position(position, src, dst),
        Value::MultiPoint(positions) | Value::LineString(positions) => positions
            .iter_mut()
            .try_for_each(|p| transform_position(p, src, dst)),
        Value::MultiLineString(lines) | Value::Polygon(lines) => lines
            .iter_mut()
            .flat_map(|line| line.iter_mut())
            .try_for_each(|p| transform_position(p, src, dst)),
        Value::MultiPolygon(polygons) => polygons
            .iter_mut()
            .flat_map(|polygon| polygon.iter_mut())
            .flat_map(|ring| ring.iter_mut())
            .try_for_each(|p| transform_position(p, src, dst)),
        Value::GeometryCollection(geometries) => geometries
            .iter_mut()
            .try_for_each(|g| transform_value(&mut g.value, src, dst)),
    }
}

/// Transform one position in place. Geographic output from proj4rs is in
/// radians, so the result is converted to degrees.
fn transform_position(
    position: &mut Vec<f64>,
    src: &Proj,
    dst: &Proj,
) -> Result<(), DashboardError> {
    if position.len() < 2 {
        return Err(DashboardError::Geometry(
            "AOI coordinate has fewer than 2 values".to_string(),
        ));
    }
    let mut point = (position[0], position[1], 0.0);
    proj4rs::transform::transform(src, dst, &mut point)
        .map_err(|e| DashboardError::Geometry(format!("coordinate transform failed: {:?}", e)))?;
    position[0] = point.0.to_degrees();
    position[1] = point.1.to_degrees();
    position.truncate(2);
    Ok(())
}

/// Centroid of the first feature carrying a geometry, as `(lat, lon)`.
fn compute_centroid(collection: &FeatureCollection) -> Result<(f64, f64), DashboardError> {
    let geometry = collection
        .features
        .iter()
        .find_map(|f| f.geometry.as_ref())
        .ok_or_else(|| {
            DashboardError::Geometry("AOI features carry no geometry".to_string())
        })?;

    let geom = geo_types::Geometry::<f64>::try_from(geometry.clone()).map_err(|e| {
        DashboardError::Geometry(format!("AOI geometry cannot be interpreted: {}", e))
    })?;
    let point = geo::algorithm::centroid::Centroid::centroid(&geom)
        .ok_or_else(|| DashboardError::Geometry("AOI geometry has no centroid".to_string()))?;
    Ok((point.y(), point.x()))
}
