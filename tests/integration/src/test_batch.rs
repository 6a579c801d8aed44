//! `BatchGetItem` flattening.

#[cfg(test)]
mod tests {
    use dynoplain_core::{DecoderConfig, Value};
    use serde_json::json;

    use crate::{decoder, decoder_with};

    fn ids(decoded: &Value) -> Vec<&str> {
        decoded
            .as_list()
            .unwrap()
            .iter()
            .filter_map(|item| item.get("id").and_then(Value::as_str))
            .collect()
    }

    #[test]
    fn test_should_flatten_tables_in_name_order() {
        let body = json!({
            "Responses": {
                "T2": [{"id": {"S": "b"}}, {"id": {"S": "c"}}],
                "T1": [{"id": {"S": "a"}}],
            },
            "UnprocessedKeys": {},
        });
        let decoded = decoder().decode_json("BatchGetItem", &body).unwrap();
        assert_eq!(ids(&decoded), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_should_keep_item_order_within_table_when_unsorted() {
        let body = json!({
            "Responses": {
                "T1": [{"id": {"S": "a"}}],
                "T2": [{"id": {"S": "b"}}, {"id": {"S": "c"}}],
            },
        });
        let decoded = decoder_with(DecoderConfig::default().with_sorted_batch_tables(false))
            .decode_json("BatchGetItem", &body)
            .unwrap();
        let ids = ids(&decoded);
        assert_eq!(ids.len(), 3);
        let b = ids.iter().position(|id| *id == "b").unwrap();
        assert_eq!(ids[b + 1], "c");
    }

    #[test]
    fn test_should_skip_table_entries_that_are_not_lists() {
        let body = json!({
            "Responses": {
                "T1": [{"id": {"S": "a"}}],
                "T2": {"id": {"S": "ignored"}},
            },
        });
        let decoded = decoder().decode_json("BatchGetItem", &body).unwrap();
        assert_eq!(ids(&decoded), vec!["a"]);
    }

    #[test]
    fn test_should_decode_empty_batch_as_empty_list() {
        let body = json!({"Responses": {}, "UnprocessedKeys": {}});
        let decoded = decoder().decode_json("BatchGetItem", &body).unwrap();
        assert_eq!(decoded, Value::List(vec![]));
    }

    #[test]
    fn test_should_decode_null_responses_as_empty_list() {
        let body = json!({"Responses": null, "UnprocessedKeys": {}});
        let decoded = decoder().decode_json("BatchGetItem", &body).unwrap();
        assert_eq!(decoded, Value::List(vec![]));
    }

    #[test]
    fn test_should_ignore_unprocessed_keys() {
        let body = json!({
            "Responses": {"T1": [{"id": {"S": "a"}}]},
            "UnprocessedKeys": {"T1": {"Keys": [{"id": {"S": "z"}}]}},
        });
        let decoded = decoder().decode_json("BatchGetItem", &body).unwrap();
        assert_eq!(ids(&decoded), vec!["a"]);
    }
}
