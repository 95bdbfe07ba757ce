use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::error::ApiError;

/// Общий конверт ответа: `{ responseMessage, result }`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub response_message: Option<String>,
    #[serde(default = "Option::default")]
    pub result: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn message_or(&self, default: &str) -> String {
        self.response_message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(default)
            .to_string()
    }
}

/// `metadata[0]` списочных ответов
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PageMeta {
    #[serde(default, deserialize_with = "super::de::lenient_u64")]
    pub total: u64,
    #[serde(default, deserialize_with = "super::de::lenient_u64")]
    pub total_page: u64,
}

/// Где в ответе лежат строки страницы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListShape {
    /// `result.data` и `result.metadata[0]`
    Flat,
    /// `result[0].data` и `result[0].metadata[0]`
    Nested,
}

/// Разобранная страница списка
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub rows: Vec<T>,
    pub meta: Option<PageMeta>,
    /// Блок, в котором лежали `data`/`metadata` (там же бывают агрегаты, например `totalAmount`)
    pub block: Value,
}

impl ListShape {
    fn block<'a>(&self, result: &'a Value) -> Option<&'a Value> {
        match self {
            ListShape::Flat => Some(result),
            ListShape::Nested => result.get(0),
        }
    }
}

/// Разбирает тело ответа списочного endpoint-а.
///
/// Строки, которые не удалось десериализовать, пропускаются с предупреждением в лог.
/// Если `result`/`data` отсутствуют, страница считается пустой.
pub fn parse_list_page<T: DeserializeOwned>(
    body: &Value,
    shape: ListShape,
) -> Result<ListPage<T>, ApiError> {
    if !body.is_object() {
        return Err(ApiError::Decode("response body is not an object".to_string()));
    }

    let block = body
        .get("result")
        .and_then(|result| shape.block(result))
        .cloned()
        .unwrap_or(Value::Null);

    let rows = match block.get("data") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match serde_json::from_value::<T>(item.clone()) {
                Ok(row) => Some(row),
                Err(e) => {
                    log::warn!("skipping row that failed to decode: {}", e);
                    None
                }
            })
            .collect(),
        _ => Vec::new(),
    };

    let meta = block
        .get("metadata")
        .and_then(|m| m.get(0))
        .and_then(|m| serde_json::from_value::<PageMeta>(m.clone()).ok());

    Ok(ListPage { rows, meta, block })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        name: String,
    }

    #[test]
    fn flat_shape_reads_data_and_metadata() {
        let body = json!({
            "responseMessage": "ok",
            "result": {
                "data": [{"name": "a"}, {"name": "b"}],
                "metadata": [{"total": 120, "total_page": 3}]
            }
        });
        let page: ListPage<Row> = parse_list_page(&body, ListShape::Flat).unwrap();
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.meta, Some(PageMeta { total: 120, total_page: 3 }));
    }

    #[test]
    fn nested_shape_reads_first_element() {
        let body = json!({
            "result": [{
                "data": [{"name": "a"}],
                "metadata": [{"total": 1, "total_page": 1}],
                "totalAmount": [{"totalAmount": 250.5}]
            }]
        });
        let page: ListPage<Row> = parse_list_page(&body, ListShape::Nested).unwrap();
        assert_eq!(page.rows, vec![Row { name: "a".into() }]);
        assert_eq!(page.block["totalAmount"][0]["totalAmount"], json!(250.5));
    }

    #[test]
    fn empty_metadata_and_bad_rows() {
        let body = json!({
            "result": { "data": [{"name": "ok"}, {"other": 1}], "metadata": [] }
        });
        let page: ListPage<Row> = parse_list_page(&body, ListShape::Flat).unwrap();
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.meta, None);
    }

    #[test]
    fn missing_result_is_empty_page() {
        let page: ListPage<Row> =
            parse_list_page(&json!({"responseMessage": "nothing"}), ListShape::Nested).unwrap();
        assert!(page.rows.is_empty());
        assert!(parse_list_page::<Row>(&json!([1, 2]), ListShape::Flat).is_err());
    }

    #[test]
    fn envelope_message_fallback() {
        let env: ApiEnvelope<Value> = serde_json::from_str(r#"{"result":null}"#).unwrap();
        assert_eq!(env.message_or("Done"), "Done");
    }
}
