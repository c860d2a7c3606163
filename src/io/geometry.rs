use crate::cell::GeohashCell;
use crate::error::GeohashError;
use geo_types::{Geometry, Polygon};
use geojson::{Feature, FeatureCollection, GeoJson, JsonObject, JsonValue};
use rayon::prelude::*;
use std::str::FromStr;
use wkt::Wkt;

/// Output format for cell polygon geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

/// Trait for converting collections of [`GeohashCell`]s to GeoJSON.
///
/// Implemented for `[GeohashCell]`, so it also applies to `Vec<GeohashCell>`.
pub trait CellsToGeoJson {
    /// One polygon feature per cell, carrying `geohash` and `precision` properties.
    fn to_feature_collection(&self) -> FeatureCollection;
    /// The feature collection serialized as a GeoJSON string.
    fn to_geojson_string(&self) -> String {
        self.to_feature_collection().to_string()
    }
}

impl CellsToGeoJson for [GeohashCell] {
    fn to_feature_collection(&self) -> FeatureCollection {
        let features: Vec<Feature> = self.par_iter().map(cell_to_feature).collect();
        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}

impl GeohashCell {
    /// Serializes the cell polygon as WKT or GeoJSON.
    ///
    /// # Example
    /// ```
    /// use geohash_rs::{GeohashCell, GeometryFormat};
    ///
    /// # fn main() -> Result<(), geohash_rs::GeohashError> {
    /// let cell = GeohashCell::from_geohash("u09tu")?;
    /// assert!(cell.to_geometry_string(GeometryFormat::Wkt).starts_with("POLYGON"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_geometry_string(&self, format: GeometryFormat) -> String {
        let polygon = self.to_polygon();
        match format {
            GeometryFormat::Wkt => polygon_to_wkt(&polygon),
            GeometryFormat::GeoJson => polygon_to_geojson(&polygon),
        }
    }

    /// The cell as a GeoJSON feature.
    pub fn to_feature(&self) -> Feature {
        cell_to_feature(self)
    }
}

fn cell_to_feature(cell: &GeohashCell) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("geohash".to_string(), JsonValue::from(cell.id.as_str()));
    properties.insert("precision".to_string(), JsonValue::from(cell.precision));

    Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::from(&cell.to_polygon())),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn polygon_to_wkt(polygon: &Polygon<f64>) -> String {
    use wkt::ToWkt;
    polygon.wkt_string()
}

fn polygon_to_geojson(polygon: &Polygon<f64>) -> String {
    let geom = geojson::Geometry::from(polygon);
    geom.to_string()
}

/// Reads a cell polygon back from a WKT or GeoJSON string.
///
/// Strings starting with `{` are read as GeoJSON (a geometry or a feature),
/// anything else as WKT.
pub fn parse_cell_polygon(s: &str) -> Result<Polygon<f64>, GeohashError> {
    let trimmed = s.trim();
    let geometry = if trimmed.starts_with('{') {
        parse_geojson(trimmed)?
    } else {
        parse_wkt(trimmed)?
    };

    match geometry {
        Geometry::Polygon(polygon) => Ok(polygon),
        Geometry::Rect(rect) => Ok(rect.to_polygon()),
        _ => Err(GeohashError::GeometryParse(
            "Expected a polygon geometry".to_string(),
        )),
    }
}

fn parse_geojson(s: &str) -> Result<Geometry<f64>, GeohashError> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| GeohashError::GeometryParse(e.to_string()))?;

    match geojson {
        GeoJson::Geometry(geom) => {
            Geometry::try_from(geom).map_err(|e| GeohashError::GeometryParse(e.to_string()))
        }
        GeoJson::Feature(feat) => feat
            .geometry
            .ok_or_else(|| GeohashError::GeometryParse("Feature has no geometry".to_string()))
            .and_then(|g| {
                Geometry::try_from(g).map_err(|e| GeohashError::GeometryParse(e.to_string()))
            }),
        GeoJson::FeatureCollection(_) => Err(GeohashError::GeometryParse(
            "FeatureCollection not supported, use individual geometries".to_string(),
        )),
    }
}

fn parse_wkt(s: &str) -> Result<Geometry<f64>, GeohashError> {
    let wkt: Wkt<f64> =
        Wkt::from_str(s).map_err(|e| GeohashError::GeometryParse(e.to_string()))?;

    wkt.try_into()
        .map_err(|_| GeohashError::GeometryParse("Failed to convert WKT to geometry".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wkt_round_trip() -> Result<(), GeohashError> {
        let cell = GeohashCell::from_geohash("u09tu")?;
        let wkt = cell.to_geometry_string(GeometryFormat::Wkt);
        assert!(wkt.starts_with("POLYGON"));

        let polygon = parse_cell_polygon(&wkt)?;
        assert_eq!(polygon, cell.to_polygon());
        Ok(())
    }

    #[test]
    fn test_geojson_round_trip() -> Result<(), GeohashError> {
        let cell = GeohashCell::from_geohash("qgmpvf18")?;
        let json = cell.to_geometry_string(GeometryFormat::GeoJson);
        assert!(json.contains("\"Polygon\""));

        let polygon = parse_cell_polygon(&json)?;
        assert_eq!(polygon, cell.to_polygon());
        Ok(())
    }

    #[test]
    fn test_feature_collection() -> Result<(), GeohashError> {
        let cells = vec![
            GeohashCell::from_geohash("u09tu")?,
            GeohashCell::from_geohash("u09tv")?,
        ];
        let collection = cells.to_feature_collection();
        assert_eq!(collection.features.len(), 2);

        let ids: Vec<Option<&str>> = collection
            .features
            .iter()
            .map(|f| f.property("geohash").and_then(|v| v.as_str()))
            .collect();
        assert_eq!(ids, vec![Some("u09tu"), Some("u09tv")]);

        let parsed: GeoJson = cells
            .to_geojson_string()
            .parse()
            .map_err(|e: geojson::Error| GeohashError::GeometryParse(e.to_string()))?;
        assert!(matches!(parsed, GeoJson::FeatureCollection(ref fc) if fc.features.len() == 2));
        Ok(())
    }

    #[test]
    fn test_feature_is_parseable_as_cell_polygon() -> Result<(), GeohashError> {
        let cell = GeohashCell::from_geohash("wx4g")?;
        let polygon = parse_cell_polygon(&cell.to_feature().to_string())?;
        assert_eq!(polygon, cell.to_polygon());
        Ok(())
    }

    #[test]
    fn test_parse_rejects_non_polygons() {
        assert!(matches!(
            parse_cell_polygon("POINT(1 2)"),
            Err(GeohashError::GeometryParse(_))
        ));
        assert!(parse_cell_polygon("not a geometry").is_err());
        assert!(parse_cell_polygon(r#"{"type": "FeatureCollection", "features": []}"#).is_err());
    }
}
