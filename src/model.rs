pub mod node;
pub mod paint;
pub mod spatial;

/// A planar coordinate. Serializes as a 2-element array, never as an object
/// with named axes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point2(pub f64, pub f64);

impl Point2 {
    pub fn x(self) -> f64 {
        self.0
    }

    pub fn y(self) -> f64 {
        self.1
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self(x, y)
    }
}

/// A spatial coordinate. Serializes as a 3-element array.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point3(pub f64, pub f64, pub f64);

impl Point3 {
    pub fn x(self) -> f64 {
        self.0
    }

    pub fn y(self) -> f64 {
        self.1
    }

    pub fn z(self) -> f64 {
        self.2
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self(x, y, z)
    }
}

/// Squared-distance tolerance under which two points count as coincident,
/// matching the threshold the engine uses for closed-path detection.
pub(crate) const POINT_EPSILON_SQ: f64 = 1e-3;

pub(crate) fn points_coincide(a: Point2, b: Point2) -> bool {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    dx * dx + dy * dy < POINT_EPSILON_SQ
}
