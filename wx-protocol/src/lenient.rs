//! Serde helpers that accept any JSON scalar where a string is expected.
//!
//! The server writes raw string arrays, and entries it has no value for come
//! through as `null`. Numbers and booleans show up in hand-written service
//! configs. All of them are rendered as text, `null` as the empty string.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Number(n) => n.to_string(),
            Scalar::Flag(b) => b.to_string(),
        }
    }
}

fn text(value: Option<Scalar>) -> String {
    value.map(Scalar::into_text).unwrap_or_default()
}

pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text(Option::<Scalar>::deserialize(deserializer)?))
}

pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_text))
}

pub fn opt_strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Option<Scalar>>>::deserialize(deserializer)?;
    Ok(values.map(|row| row.into_iter().map(text).collect()))
}

pub fn opt_rows<'de, D>(deserializer: D) -> Result<Option<Vec<Vec<String>>>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows = Option::<Vec<Vec<Option<Scalar>>>>::deserialize(deserializer)?;
    Ok(rows.map(|rows| {
        rows.into_iter()
            .map(|row| row.into_iter().map(text).collect())
            .collect()
    }))
}

pub fn opt_string_map<'de, D>(deserializer: D) -> Result<Option<BTreeMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let map = Option::<BTreeMap<String, Option<Scalar>>>::deserialize(deserializer)?;
    Ok(map.map(|map| map.into_iter().map(|(k, v)| (k, text(v))).collect()))
}
