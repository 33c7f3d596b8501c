//! Field-level decoding helpers.

use serde::{Deserialize, Deserializer};

/// `deserialize_with` target that reads an explicit `null` as `T::default()`.
///
/// Pair it with `#[serde(default)]` so a missing key defaults the same way.
pub fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "null_to_default")]
        name: String,
        #[serde(default, deserialize_with = "null_to_default")]
        total: u64,
        #[serde(default, deserialize_with = "null_to_default")]
        tags: Vec<String>,
    }

    #[test]
    fn test_null_missing_and_present() {
        let row: Row = serde_json::from_str(r#"{"name":null,"total":null,"tags":null}"#).unwrap();
        assert_eq!(row.name, "");
        assert_eq!(row.total, 0);
        assert!(row.tags.is_empty());

        let row: Row = serde_json::from_str("{}").unwrap();
        assert_eq!(row.total, 0);

        let row: Row = serde_json::from_str(r#"{"name":"a","total":3,"tags":["x"]}"#).unwrap();
        assert_eq!((row.name.as_str(), row.total, row.tags.len()), ("a", 3, 1));
    }

    #[test]
    fn test_wrong_type_still_fails() {
        assert!(serde_json::from_str::<Row>(r#"{"total":"many"}"#).is_err());
    }
}
