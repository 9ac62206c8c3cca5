//! Product data model

use serde::{Deserialize, Serialize};

/// A catalog row. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub size: String,
    pub price: f64,
}

/// Submitted add/edit form, kept exactly as typed. Missing fields read as
/// empty; the price is coerced by the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub size: String,
    pub price: String,
}

impl ProductForm {
    /// Builds the form from decoded `key=value` pairs. A repeated key keeps
    /// its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            name: first_value(pairs, "name").to_string(),
            size: first_value(pairs, "size").to_string(),
            price: first_value(pairs, "price").to_string(),
        }
    }
}

/// First value for `key`, or `""` when it is absent.
pub fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> &'a str {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn first_value_wins() {
        let query = pairs(&[("filter", "a"), ("filter", "b")]);
        assert_eq!(first_value(&query, "filter"), "a");
        assert_eq!(first_value(&query, "other"), "");
    }

    #[test]
    fn form_fields_default_to_empty() {
        let submitted = pairs(&[("name", "Widget"), ("name", "Gadget"), ("x", "1")]);
        let form = ProductForm::from_pairs(&submitted);
        assert_eq!(
            form,
            ProductForm {
                name: "Widget".to_string(),
                ..ProductForm::default()
            }
        );
    }
}
