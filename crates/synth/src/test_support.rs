use std::collections::BTreeSet;

use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use serde_json::Value;

use crate::shared::context::GenContext;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn seeded(seed: u64) -> GenContext<StdRng> {
    GenContext::seeded(seed, fixed_now())
}

/// Every object key path in `value`, with array positions collapsed to `[]`.
pub fn key_paths(value: &Value) -> BTreeSet<String> {
    let mut paths = BTreeSet::new();
    collect(value, String::new(), &mut paths);
    paths
}

fn collect(value: &Value, prefix: String, paths: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                paths.insert(path.clone());
                collect(child, path, paths);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect(item, format!("{prefix}[]"), paths);
            }
        }
        _ => {}
    }
}
