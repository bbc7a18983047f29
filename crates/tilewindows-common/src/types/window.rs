use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::Rect;

/// One saved window frame inside a layout.
///
/// Serializes flat, matching the on-disk entry
/// `{ "app", "index"?, "x", "y", "width", "height" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Owning application. Hand-edited entries may leave it empty; those are
    /// skipped on apply.
    #[serde(default)]
    pub app: String,
    /// 1-based enumeration position of the window when the layout was saved.
    /// Anything other than a positive whole number reads as no hint.
    #[serde(
        default,
        deserialize_with = "index_hint",
        skip_serializing_if = "Option::is_none"
    )]
    pub index: Option<u32>,
    #[serde(flatten)]
    pub rect: Rect,
}

impl Target {
    pub fn new(app: impl Into<String>, rect: Rect) -> Self {
        Self {
            app: app.into(),
            index: None,
            rect,
        }
    }

    pub fn with_index(mut self, index: u32) -> Self {
        self.index = Some(index);
        self
    }
}

fn index_hint<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_f64()
        .filter(|v| v.fract() == 0.0 && *v >= 1.0 && *v <= f64::from(u32::MAX))
        .map(|v| v as u32))
}

/// A window that is open right now, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveWindow {
    pub app: String,
    /// 1-based enumeration position, valid only for the snapshot it came from.
    pub index: u32,
    #[serde(flatten)]
    pub rect: Rect,
    /// Ordinary movable/resizable window, as opposed to a sheet, panel or popover.
    pub standard: bool,
    #[serde(default)]
    pub minimized: bool,
}

impl LiveWindow {
    /// The saved form of this window, keeping its index as a matching hint.
    pub fn to_target(&self) -> Target {
        Target {
            app: self.app.clone(),
            index: Some(self.index),
            rect: self.rect,
        }
    }
}
