//! GeoJSON export of decoded cells.

use crate::codec::decode;
use crate::error::{GeocellError, Result};
use crate::neighbors::neighbors;
use geocell_types::{Code, Rectangle};
use ::geojson::{Feature, FeatureCollection, Geometry, Value};
use serde_json::Map;

fn cell_geometry(rect: &Rectangle) -> Geometry {
    let (w, e) = (rect.longitude.min, rect.longitude.max);
    let (s, n) = (rect.latitude.min, rect.latitude.max);
    let ring = vec![
        vec![w, s],
        vec![e, s],
        vec![e, n],
        vec![w, n],
        vec![w, s],
    ];
    Geometry::new(Value::Polygon(vec![ring]))
}

fn cell_feature(rect: &Rectangle, direction: Option<&str>) -> Feature {
    let mut props = Map::new();
    props.insert("bits".to_string(), rect.code.bits.into());
    props.insert("step".to_string(), rect.code.step.into());
    if let Some(direction) = direction {
        props.insert("direction".to_string(), direction.into());
    }

    Feature {
        bbox: None,
        geometry: Some(cell_geometry(rect)),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}

/// Converts a cell to a GeoJSON Polygon geometry.
pub fn rectangle_to_geojson(rect: &Rectangle) -> Result<String> {
    serde_json::to_string(&cell_geometry(rect)).map_err(|e| {
        GeocellError::Serialization(format!("Failed to serialize cell: {}", e))
    })
}

/// Decodes a code and renders its cell as a Feature with `bits` and `step`
/// properties.
pub fn code_to_feature(code: Code) -> Result<String> {
    let rect = decode(code)?;
    serde_json::to_string(&cell_feature(&rect, None)).map_err(|e| {
        GeocellError::Serialization(format!("Failed to serialize feature: {}", e))
    })
}

/// Renders a cell and its eight neighbors as a FeatureCollection.
///
/// The source cell comes first with `"direction": "center"`; neighbors follow
/// clockwise from north.
pub fn neighbors_to_feature_collection(code: Code) -> Result<String> {
    let center = decode(code)?;
    let mut features = vec![cell_feature(&center, Some("center"))];

    for (direction, neighbor) in neighbors(code)?.iter() {
        let name = serde_json::to_value(direction)?;
        let rect = decode(neighbor)?;
        features.push(cell_feature(&rect, name.as_str()));
    }

    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };

    serde_json::to_string(&collection).map_err(|e| {
        GeocellError::Serialization(format!(
            "Failed to serialize feature collection: {}",
            e
        ))
    })
}
