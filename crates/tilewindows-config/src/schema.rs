//! On-disk layout file shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tilewindows_common::Target;
use tracing::warn;

/// The whole config file: `{ "layouts": { <name>: [Target, ...] } }`.
///
/// Layout names are kept sorted; the targets inside each layout keep the
/// order they were saved in. Layouts that do not parse are carried as raw
/// JSON and written back unchanged, so rewriting the file never loses them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutFile {
    pub layouts: BTreeMap<String, Vec<Target>>,
    unreadable: BTreeMap<String, Value>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum LayoutRef<'a> {
    Parsed(&'a [Target]),
    Raw(&'a Value),
}

#[derive(Serialize)]
struct Wire<'a> {
    layouts: BTreeMap<&'a str, LayoutRef<'a>>,
}

impl Serialize for LayoutFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut layouts: BTreeMap<&str, LayoutRef<'_>> = self
            .unreadable
            .iter()
            .map(|(name, raw)| (name.as_str(), LayoutRef::Raw(raw)))
            .collect();
        layouts.extend(
            self.layouts
                .iter()
                .map(|(name, targets)| (name.as_str(), LayoutRef::Parsed(targets))),
        );
        Wire { layouts }.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LayoutFile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

impl LayoutFile {
    /// Build from an already-parsed JSON document, keeping whatever is usable.
    ///
    /// A missing or non-object `layouts` key yields an empty file. A layout
    /// whose entries do not parse is kept aside as raw JSON with a warning
    /// instead of discarding every other layout with it.
    pub fn from_value(value: Value) -> Self {
        let Some(Value::Object(layouts)) = value.get("layouts").cloned() else {
            if !value.is_null() {
                warn!("config has no \"layouts\" object, treating as empty");
            }
            return Self::default();
        };

        let mut file = Self::default();
        for (name, entries) in layouts {
            match serde_json::from_value::<Vec<Target>>(entries.clone()) {
                Ok(targets) => {
                    file.layouts.insert(name, targets);
                }
                Err(e) => {
                    warn!(layout = %name, "unreadable layout, keeping it as is: {e}");
                    file.unreadable.insert(name, entries);
                }
            }
        }
        file
    }

    /// Every layout name, readable or not, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .layouts
            .keys()
            .chain(self.unreadable.keys())
            .cloned()
            .collect();
        names.sort();
        names
    }

    pub fn get(&self, name: &str) -> Option<&[Target]> {
        self.layouts.get(name).map(Vec::as_slice)
    }

    /// True when `name` exists on disk but could not be parsed.
    pub fn is_unreadable(&self, name: &str) -> bool {
        self.unreadable.contains_key(name)
    }

    /// Insert or replace a layout, returning the previous targets if any.
    pub fn insert(&mut self, name: impl Into<String>, targets: Vec<Target>) -> Option<Vec<Target>> {
        let name = name.into();
        self.unreadable.remove(&name);
        self.layouts.insert(name, targets)
    }

    /// Remove a layout, readable or not. Returns whether it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        let parsed = self.layouts.remove(name).is_some();
        let raw = self.unreadable.remove(name).is_some();
        parsed || raw
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty() && self.unreadable.is_empty()
    }

    /// Number of layouts, readable or not.
    pub fn len(&self) -> usize {
        self.layouts.len() + self.unreadable.len()
    }
}
