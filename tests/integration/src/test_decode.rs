//! Single-item and multi-item responses decoded from JSON bodies.

#[cfg(test)]
mod tests {
    use dynoplain_core::{DecodeError, DecoderConfig, Value};
    use serde_json::json;

    use crate::{decoder, decoder_with};

    #[test]
    fn test_should_decode_get_item_with_every_attribute_type() {
        let body = json!({
            "Item": {
                "pk": {"S": "user#1"},
                "age": {"N": "42"},
                "score": {"N": "99.5"},
                "active": {"BOOL": true},
                "deleted_at": {"NULL": true},
                "avatar": {"B": "aGVsbG8="},
                "profile": {"M": {
                    "city": {"S": "Lisbon"},
                    "visits": {"L": [{"N": "1"}, {"S": "two"}]},
                }},
                "roles": {"SS": ["admin", "dev"]},
                "lucky": {"NS": ["7", "13"]},
                "keys": {"BS": ["AQ==", "Ag=="]},
            },
            "ConsumedCapacity": {"TableName": "users", "CapacityUnits": 0.5},
        });

        let decoded = decoder().decode_json("GetItem", &body).unwrap();
        let json = serde_json::Value::from(decoded);
        assert_eq!(
            json,
            json!({
                "pk": "user#1",
                "age": 42,
                "score": 99.5,
                "active": true,
                "deleted_at": null,
                "avatar": "aGVsbG8=",
                "profile": {"city": "Lisbon", "visits": [1, "two"]},
                "roles": ["admin", "dev"],
                "lucky": [7, 13],
                "keys": ["AQ==", "Ag=="],
            })
        );
    }

    #[test]
    fn test_should_keep_binary_as_raw_bytes() {
        let body = json!({"Item": {"avatar": {"B": "aGVsbG8="}}});
        let decoded = decoder().decode_json("GetItem", &body).unwrap();
        let bytes = decoded.get("avatar").and_then(Value::as_bytes).unwrap();
        assert_eq!(bytes.as_ref(), b"hello");
    }

    #[test]
    fn test_should_decode_get_item_miss_as_null() {
        let decoded = decoder().decode_json("GetItem", &json!({})).unwrap();
        assert!(decoded.is_null());
    }

    #[test]
    fn test_should_decode_query_items_in_order() {
        let body = json!({
            "Items": [
                {"pk": {"S": "a"}, "sk": {"N": "1"}},
                {"pk": {"S": "a"}, "sk": {"N": "2"}},
                {"pk": {"S": "a"}, "sk": {"N": "3"}},
            ],
            "Count": 3,
            "ScannedCount": 3,
            "LastEvaluatedKey": {"pk": {"S": "a"}, "sk": {"N": "3"}},
        });
        let decoded = decoder().decode_json("Query", &body).unwrap();
        let sort_keys: Vec<i64> = decoded
            .as_list()
            .unwrap()
            .iter()
            .filter_map(|item| item.get("sk").and_then(Value::as_i64))
            .collect();
        assert_eq!(sort_keys, vec![1, 2, 3]);
    }

    #[test]
    fn test_should_decode_count_only_scan_as_empty_list() {
        let body = json!({"Count": 12, "ScannedCount": 40});
        let decoded = decoder().decode_json("DynamoDB_20120810.Scan", &body).unwrap();
        assert_eq!(decoded, Value::List(vec![]));
    }

    #[test]
    fn test_should_decode_null_items_as_empty_list() {
        for operation in ["Query", "Scan"] {
            let decoded = decoder()
                .decode_json(operation, &json!({"Items": null, "Count": 0}))
                .unwrap();
            assert_eq!(decoded, Value::List(vec![]), "{operation}");
        }
    }

    #[test]
    fn test_should_decode_null_item_as_null() {
        let decoded = decoder().decode_json("GetItem", &json!({"Item": null})).unwrap();
        assert!(decoded.is_null());
    }

    #[test]
    fn test_should_reject_write_responses() {
        let err = decoder()
            .decode_json("PutItem", &json!({"Attributes": {"pk": {"S": "a"}}}))
            .unwrap_err();
        assert_eq!(err.to_string(), "unsupported response type: PutItemOutput");
    }

    #[test]
    fn test_should_reject_unknown_operation_by_name() {
        let err = decoder()
            .decode_json("DescribeTable", &json!({"Table": {}}))
            .unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedResponseType(ref t) if t == "DescribeTable"));
    }

    #[test]
    fn test_should_reject_non_object_body() {
        let err = decoder().decode_json("Scan", &json!(null)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported response type: invalid response object"
        );
    }

    #[test]
    fn test_should_fail_on_attribute_without_type() {
        let body = json!({"Items": [{"pk": {"S": "a"}}, {"pk": {}}]});
        let err = decoder().decode_json("Scan", &body).unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedAttributeType(ref dump) if dump == "{}"));
    }

    #[test]
    fn test_should_prefer_string_over_number_in_malformed_attribute() {
        let body = json!({"Item": {"x": {"N": "5", "S": "five"}}});
        let decoded = decoder().decode_json("GetItem", &body).unwrap();
        assert_eq!(decoded.get("x").and_then(Value::as_str), Some("five"));
    }

    #[test]
    fn test_should_enforce_configured_depth_limit() {
        let body = json!({"Item": {"deep": {"L": [{"L": [{"L": [{"N": "1"}]}]}]}}});
        let err = decoder_with(DecoderConfig::default().with_max_depth(2))
            .decode_json("GetItem", &body)
            .unwrap_err();
        assert!(matches!(err, DecodeError::DepthLimitExceeded { max_depth: 2 }));

        assert!(decoder().decode_json("GetItem", &body).is_ok());
    }
}
