//! Typed provider feature descriptor.
//!
//! Catalog rows carry features either as a JSON object or as a JSON string
//! holding an object, with inconsistent key names. [`ProviderFeatures::parse`]
//! is the single place that reads them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

const UHD_KEYS: &[&str] = &["4k", "uhd", "has_4k", "has4k"];
const MOBILE_KEYS: &[&str] = &["mobile", "mobile_app", "mobileapp"];
const DOWNLOAD_KEYS: &[&str] = &["download", "downloads", "offline"];
const STREAM_KEYS: &[&str] = &[
    "streams",
    "simultaneous_streams",
    "max_streams",
    "simultaneousstreams",
];

/// Features of a streaming offer, with defaults for anything not published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderFeatures {
    /// 4K / UHD streams available.
    pub uhd: bool,
    pub mobile: bool,
    /// Offline downloads.
    pub download: bool,
    /// Simultaneous streams allowed (at least one).
    pub streams: u8,
}

impl Default for ProviderFeatures {
    fn default() -> Self {
        Self {
            uhd: false,
            mobile: false,
            download: false,
            streams: 1,
        }
    }
}

impl ProviderFeatures {
    /// Parse a descriptor that is either structured or serialized.
    ///
    /// Never fails: missing, malformed or mistyped fields fall back to the
    /// defaults.
    pub fn parse(raw: Option<&Value>) -> Self {
        match raw {
            Some(Value::Object(map)) => Self::from_map(map),
            Some(Value::String(s)) => match serde_json::from_str::<Value>(s) {
                Ok(Value::Object(map)) => Self::from_map(&map),
                Ok(_) | Err(_) => {
                    debug!(raw = %s, "feature descriptor is not a JSON object");
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        let defaults = Self::default();
        Self {
            uhd: lookup(map, UHD_KEYS).and_then(as_flag).unwrap_or(defaults.uhd),
            mobile: lookup(map, MOBILE_KEYS)
                .and_then(as_flag)
                .unwrap_or(defaults.mobile),
            download: lookup(map, DOWNLOAD_KEYS)
                .and_then(as_flag)
                .unwrap_or(defaults.download),
            streams: lookup(map, STREAM_KEYS)
                .and_then(as_count)
                .unwrap_or(defaults.streams),
        }
    }
}

fn lookup<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    map.iter()
        .find(|(k, _)| {
            let k = k.to_ascii_lowercase();
            keys.iter().any(|candidate| k == *candidate)
        })
        .map(|(_, v)| v)
}

fn as_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|n| n != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "ja" | "1" => Some(true),
            "false" | "no" | "nein" | "0" | "" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn as_count(value: &Value) -> Option<u8> {
    let n = match value {
        Value::Number(n) => n.as_u64()?,
        Value::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };
    Some(n.clamp(1, u64::from(u8::MAX)) as u8)
}
