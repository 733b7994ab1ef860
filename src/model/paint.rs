use crate::foundation::error::{ScenelinkError, ScenelinkResult};
use crate::model::Point2;

/// An RGBA color with all channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename = "color")]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB channels.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Fully transparent black, the default paint for new nodes.
    pub fn transparent() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.0,
        }
    }

    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Parse `#RRGGBB` (with or without the `#`) into a color with the
    /// given opacity.
    pub fn from_hex(hex: &str, opacity: f64) -> ScenelinkResult<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return Err(ScenelinkError::decode("hex color must be RRGGBB"));
        }

        let channel = |range: std::ops::Range<usize>| -> ScenelinkResult<f64> {
            u8::from_str_radix(&hex[range], 16)
                .map(|v| f64::from(v) / 255.0)
                .map_err(|_| ScenelinkError::decode(format!("invalid hex color '{hex}'")))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
            a: opacity,
        })
    }
}

/// A single gradient stop: an offset in `[0, 1]` and a color.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

impl GradientStop {
    pub fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename = "linearGradient", rename_all = "camelCase")]
/// A gradient along the segment from `start` to `end`.
pub struct LinearGradient {
    pub start: Point2,
    pub end: Point2,
    pub stops: Vec<GradientStop>,
    pub alpha: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename = "radialGradient", rename_all = "camelCase")]
/// A gradient radiating from `focus` inside the circle at `center`.
pub struct RadialGradient {
    pub center: Point2,
    pub radius: f64,
    pub focus: Point2,
    pub stops: Vec<GradientStop>,
    pub alpha: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename = "image", rename_all = "camelCase")]
/// An image stretched over the rectangle `top_left`..`bottom_right`.
///
/// `data` holds the base64-encoded image bytes; the engine decodes them
/// according to `mime_type`.
pub struct ImagePaint {
    pub data: String,
    pub mime_type: String,
    pub top_left: Point2,
    pub bottom_right: Point2,
    pub alpha: f64,
}

/// How a region is colored: solid, gradient, or image.
///
/// Each variant's wire form carries its own `"type"` discriminator
/// (`color`, `linearGradient`, `radialGradient`, `image`); decoding an
/// unrecognized tag fails. Consumers match exhaustively; there is no
/// runtime type sniffing anywhere in the crate.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Color(Color),
    LinearGradient(LinearGradient),
    RadialGradient(RadialGradient),
    Image(ImagePaint),
}

impl serde::Serialize for Paint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Paint::Color(c) => serde::Serialize::serialize(c, serializer),
            Paint::LinearGradient(g) => serde::Serialize::serialize(g, serializer),
            Paint::RadialGradient(g) => serde::Serialize::serialize(g, serializer),
            Paint::Image(i) => serde::Serialize::serialize(i, serializer),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Paint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;

        let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
        match value.get("type").and_then(|t| t.as_str()) {
            Some("color") => serde_json::from_value(value)
                .map(Paint::Color)
                .map_err(D::Error::custom),
            Some("linearGradient") => serde_json::from_value(value)
                .map(Paint::LinearGradient)
                .map_err(D::Error::custom),
            Some("radialGradient") => serde_json::from_value(value)
                .map(Paint::RadialGradient)
                .map_err(D::Error::custom),
            Some("image") => serde_json::from_value(value)
                .map(Paint::Image)
                .map_err(D::Error::custom),
            Some(other) => Err(D::Error::custom(format!("unknown paint type '{other}'"))),
            None => Err(D::Error::custom("paint payload missing 'type' discriminator")),
        }
    }
}

impl Paint {
    /// The default paint: fully transparent solid color.
    pub fn transparent() -> Self {
        Self::Color(Color::transparent())
    }

    /// The overall opacity of this paint: the color alpha channel for solid
    /// colors, the `alpha` multiplier for gradients and images.
    pub fn alpha(&self) -> f64 {
        match self {
            Paint::Color(c) => c.a,
            Paint::LinearGradient(g) => g.alpha,
            Paint::RadialGradient(g) => g.alpha,
            Paint::Image(i) => i.alpha,
        }
    }

    /// A copy of this paint with its overall opacity replaced.
    pub fn with_alpha(&self, alpha: f64) -> Self {
        match self {
            Paint::Color(c) => Paint::Color(Color { a: alpha, ..*c }),
            Paint::LinearGradient(g) => Paint::LinearGradient(LinearGradient {
                alpha,
                ..g.clone()
            }),
            Paint::RadialGradient(g) => Paint::RadialGradient(RadialGradient {
                alpha,
                ..g.clone()
            }),
            Paint::Image(i) => Paint::Image(ImagePaint {
                alpha,
                ..i.clone()
            }),
        }
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Color(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn color_paint_wire_shape() {
        let p = Paint::Color(Color::new(0.25, 0.5, 0.75, 1.0));
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(
            v,
            json!({"type": "color", "r": 0.25, "g": 0.5, "b": 0.75, "a": 1.0})
        );
    }

    #[test]
    fn gradient_coordinates_are_arrays() {
        let p = Paint::LinearGradient(LinearGradient {
            start: Point2(0.0, 0.0),
            end: Point2(100.0, 0.0),
            stops: vec![GradientStop::new(0.0, Color::white())],
            alpha: 1.0,
        });
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["start"], json!([0.0, 0.0]));
        assert_eq!(v["end"], json!([100.0, 0.0]));
        assert_eq!(v["stops"][0]["offset"], json!(0.0));
    }

    #[test]
    fn parses_hex_colors() {
        let c = Color::from_hex("#ff8000", 0.5).unwrap();
        assert!((c.r - 1.0).abs() < 1e-9);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-9);
        assert!((c.b - 0.0).abs() < 1e-9);
        assert_eq!(c.a, 0.5);

        assert!(Color::from_hex("not-a-color", 1.0).is_err());
        assert!(Color::from_hex("#12345", 1.0).is_err());
    }

    #[test]
    fn with_alpha_covers_every_variant() {
        let paints = [
            Paint::Color(Color::white()),
            Paint::LinearGradient(LinearGradient {
                start: Point2(0.0, 0.0),
                end: Point2(1.0, 1.0),
                stops: vec![],
                alpha: 1.0,
            }),
            Paint::RadialGradient(RadialGradient {
                center: Point2(0.0, 0.0),
                radius: 5.0,
                focus: Point2(0.0, 0.0),
                stops: vec![],
                alpha: 1.0,
            }),
            Paint::Image(ImagePaint {
                data: "AAAA".to_owned(),
                mime_type: "image/png".to_owned(),
                top_left: Point2(0.0, 0.0),
                bottom_right: Point2(10.0, 10.0),
                alpha: 1.0,
            }),
        ];
        for p in paints {
            assert_eq!(p.with_alpha(0.5).alpha(), 0.5);
        }
    }
}
