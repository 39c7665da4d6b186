use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

// field names follow the qnips payload, e.g. `{"Allergens": {...}, "Products": {...}, "Rows": [...]}`

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct MealData {
    /// `None` when the payload has no allergen table at all
    #[serde(default)]
    pub allergens: Option<BTreeMap<String, Allergen>>,
    /// keyed by the product id as string
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: BTreeMap<String, Product>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rows: Vec<MealRow>,
}

impl MealData {
    /// Decodes a response body. A `null` body is an empty plan.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        let data: Option<MealData> = serde_json::from_str(body)?;
        Ok(data.unwrap_or_default())
    }
}

// the api sends `null` for empty sections
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Allergen {
    pub id: String,
    pub label: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    pub product_id: u64,
    pub name: String,
    #[serde(default)]
    pub allergen_ids: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: Price,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Price {
    #[serde(rename = "Betrag")]
    pub amount: f64,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct MealRow {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub days: Vec<DayEntry>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct DayEntry {
    /// 1 = Monday ... 5 = Friday
    pub weekday: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_ids: Vec<ProductRef>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ProductRef {
    pub product_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_qnips_payload() {
        let json = r#"{
            "Allergens": {"A": {"Id": "A", "Label": "Gluten"}},
            "Products": {
                "7": {"ProductId": 7, "Name": "Linsensuppe", "AllergenIds": ["A"], "Price": {"Betrag": 2.5}},
                "8": {"ProductId": 8, "Name": "Apfel", "AllergenIds": null, "Price": {"Betrag": 0.8}, "Extra": true}
            },
            "Rows": [{"Name": "Suppe", "Days": [{"Weekday": 1, "ProductIds": [{"ProductId": 7}]}]}]
        }"#;

        let data: MealData = serde_json::from_str(json).unwrap();

        assert_eq!(data.allergens.as_ref().unwrap()["A"].label, "Gluten");
        assert_eq!(data.products["7"].allergen_ids, Some(vec!["A".to_string()]));
        assert_eq!(data.products["8"].allergen_ids, None);
        assert_eq!(data.products["7"].price.amount, 2.5);
        assert_eq!(data.rows[0].days[0].product_ids[0].product_id, 7);
    }

    #[test]
    fn missing_sections_decode_empty() {
        let data: MealData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, MealData::default());
    }

    #[test]
    fn null_sections_decode_empty() {
        let json = r#"{
            "Allergens": null,
            "Products": {"3": {"ProductId": 3, "Name": "Brot", "Price": null}},
            "Rows": [{"Name": "Beilage", "Days": [{"Weekday": 2, "ProductIds": null}]}, {"Name": "Leer", "Days": null}]
        }"#;

        let data = MealData::from_json(json).unwrap();

        assert_eq!(data.allergens, None);
        assert_eq!(data.products["3"].price, Price::default());
        assert!(data.rows[0].days[0].product_ids.is_empty());
        assert!(data.rows[1].days.is_empty());
    }

    #[test]
    fn null_rows_and_products_decode_empty() {
        let data = MealData::from_json(r#"{"Allergens": {}, "Products": null, "Rows": null}"#).unwrap();

        assert_eq!(data.allergens, Some(BTreeMap::new()));
        assert!(data.products.is_empty());
        assert!(data.rows.is_empty());
    }

    #[test]
    fn null_body_is_empty_plan() {
        assert_eq!(MealData::from_json("null").unwrap(), MealData::default());
        assert!(MealData::from_json("[]").is_err());
    }
}
