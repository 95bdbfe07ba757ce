//! Backend отдает одни и те же поля то числом, то строкой, то null.
//! Эти функции приводят их к одному типу для строк таблиц.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `_id` как строка (числа и строки), null превращается в пустую строку
pub fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(value_to_string).unwrap_or_default())
}

/// Строковое поле, терпимое к null и числам
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    id_string(deserializer)
}

/// Числовое поле: число, строка с числом или null (тогда 0)
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_f64).unwrap_or(0.0))
}

pub fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(value_to_f64)
        .map(|v| v.max(0.0) as u64)
        .unwrap_or(0))
}

/// Булево поле: true/false, "true"/"false", 1/0
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        Some(Value::Number(n)) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
        _ => false,
    })
}

pub fn value_to_string(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

pub fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Идентификатор строки для тела запроса: числовой `_id` уходит числом
pub fn id_to_json(id: &str) -> Value {
    match id.parse::<i64>() {
        Ok(n) => Value::from(n),
        Err(_) => Value::from(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(rename = "_id", deserialize_with = "id_string")]
        id: String,
        #[serde(default, deserialize_with = "lenient_f64")]
        amount: f64,
        #[serde(default, deserialize_with = "lenient_string")]
        name: String,
        #[serde(default, deserialize_with = "lenient_bool")]
        active: bool,
    }

    #[test]
    fn accepts_mixed_field_types() {
        let row: Row =
            serde_json::from_str(r#"{"_id":42,"amount":"12.5","name":null,"active":"true"}"#)
                .unwrap();
        assert_eq!(row.id, "42");
        assert_eq!(row.amount, 12.5);
        assert_eq!(row.name, "");
        assert!(row.active);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let row: Row = serde_json::from_str(r#"{"_id":"abc"}"#).unwrap();
        assert_eq!(row.id, "abc");
        assert_eq!(row.amount, 0.0);
        assert!(!row.active);
    }

    #[test]
    fn numeric_ids_are_sent_as_numbers() {
        assert_eq!(id_to_json("17"), Value::from(17));
        assert_eq!(id_to_json("65f0c1"), Value::from("65f0c1"));
    }
}
