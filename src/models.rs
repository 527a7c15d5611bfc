use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// An inventory record.
///
/// `price` is kept as the formatted text the client sent; nothing does
/// arithmetic on it. Fields that are missing or `null` in a create body
/// decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Item {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "nome", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "valor", deserialize_with = "null_as_default")]
    pub price: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: i64,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            quantity,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::Item;

    #[test]
    fn null_fields_decode_to_zero_values() {
        let item: Item =
            serde_json::from_str(r#"{"id":"7","nome":null,"valor":null,"quantity":null}"#)
                .unwrap();
        assert_eq!(item, Item::new("7", "", "", 0));
    }

    #[test]
    fn wrong_types_still_fail() {
        assert!(serde_json::from_str::<Item>(r#"{"quantity":"3"}"#).is_err());
        assert!(serde_json::from_str::<Item>(r#"{"nome":5}"#).is_err());
    }
}
