use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A window frame in the global desktop coordinate space.
///
/// Origins may be negative when a display sits left of or above the
/// primary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    #[serde(deserialize_with = "coord")]
    pub x: i32,
    #[serde(deserialize_with = "coord")]
    pub y: i32,
    #[serde(deserialize_with = "coord")]
    pub width: i32,
    #[serde(deserialize_with = "coord")]
    pub height: i32,
}

/// Whole numbers, or reals rounded to the nearest point.
fn coord<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let value = f64::deserialize(deserializer)?.round();
    if !value.is_finite() || value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return Err(de::Error::custom(format!("coordinate out of range: {value}")));
    }
    Ok(value as i32)
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{}) {}x{}", self.x, self.y, self.width, self.height)
    }
}
