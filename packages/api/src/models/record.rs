//! Geo-tagged records and snapshot payloads.

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

/// A record pinned on the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    /// Latitude.
    pub x: f64,
    /// Longitude.
    pub y: f64,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub additional_info: Option<String>,
    #[serde(default, alias = "like_count", alias = "likes_count")]
    pub likes: i64,
}

/// Image attached to a new record.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Fields of a record being created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewRecord {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub kind: String,
    pub description: String,
    pub additional_info: String,
    pub image: Option<ImageUpload>,
}

impl NewRecord {
    /// Problems that make the record unsendable, as user-facing text.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Name is required");
        }
        if !self.x.is_finite() || !(-90.0..=90.0).contains(&self.x) {
            return Err("Latitude must be between -90 and 90");
        }
        if !self.y.is_finite() || !(-180.0..=180.0).contains(&self.y) {
            return Err("Longitude must be between -180 and 180");
        }
        Ok(())
    }

    /// Text fields in the order the form sends them.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.trim().to_string()),
            ("x", self.x.to_string()),
            ("y", self.y.to_string()),
            ("type", self.kind.trim().to_string()),
            ("description", self.description.trim().to_string()),
            ("additional_info", self.additional_info.trim().to_string()),
        ]
    }

    /// Multipart body for the create endpoint.
    pub fn into_form(self) -> Form {
        let mut form = Form::new();
        for (key, value) in self.fields() {
            form = form.text(key, value);
        }
        if let Some(image) = self.image {
            form = form.part("image", Part::bytes(image.bytes).file_name(image.file_name));
        }
        form
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LikeState {
    #[serde(default)]
    pub liked: bool,
    #[serde(default, alias = "like_count")]
    pub likes: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EraseSummary {
    #[serde(default)]
    pub deleted: u64,
}

/// A full export of record data, kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(pub serde_json::Value);

impl Snapshot {
    /// Parse a backup file's contents.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text).map(Snapshot)
    }

    /// Number of records in the snapshot, when it is a list or has one under
    /// `records`.
    pub fn record_count(&self) -> Option<usize> {
        match &self.0 {
            serde_json::Value::Array(items) => Some(items.len()),
            serde_json::Value::Object(map) => map.get("records")?.as_array().map(Vec::len),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RestoreSummary {
    #[serde(default)]
    pub restored: bool,
    #[serde(default)]
    pub count: u64,
}
