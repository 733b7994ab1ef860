use crate::model::Point3;

/// Projection parameters used by the engine to flatten spatial nodes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename = "camera", rename_all = "camelCase")]
pub struct Camera {
    pub position: Point3,
    pub rotation: Point3,
    pub focal_distance: f64,
    pub zoom: f64,
}

impl Camera {
    pub fn new(position: Point3, rotation: Point3, focal_distance: f64, zoom: f64) -> Self {
        Self {
            position,
            rotation,
            focal_distance,
            zoom,
        }
    }
}

/// A point light used by the engine when shading projected solids.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename = "lightSource", rename_all = "camelCase")]
pub struct LightSource {
    pub position: Point3,
}

impl LightSource {
    pub fn new(position: Point3) -> Self {
        Self { position }
    }
}
