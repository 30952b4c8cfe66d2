use serde::{Deserialize, Deserializer};

use super::pagination::first_page;

// browsers send ids from <select> elements as strings, API clients send numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

impl TryFrom<IntOrString> for i64 {
    type Error = String;

    fn try_from(value: IntOrString) -> Result<Self, Self::Error> {
        match value {
            IntOrString::Int(v) => Ok(v),
            IntOrString::Str(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("Wrong value {s}, can not parse to i64")),
        }
    }
}

pub fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    i64::try_from(IntOrString::deserialize(deserializer)?).map_err(serde::de::Error::custom)
}

pub fn deserialize_optional_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        Some(value) => i64::try_from(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

// a page that is not a number falls back to the first one instead of failing the request
pub fn deserialize_page<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or_else(first_page))
}
