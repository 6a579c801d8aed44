//! Responses handed over by `aws-sdk-dynamodb`.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use aws_sdk_dynamodb::operation::batch_get_item::BatchGetItemOutput;
    use aws_sdk_dynamodb::operation::get_item::GetItemOutput;
    use aws_sdk_dynamodb::operation::query::QueryOutput;
    use aws_sdk_dynamodb::operation::scan::ScanOutput;
    use aws_sdk_dynamodb::primitives::Blob;
    use aws_sdk_dynamodb::types::AttributeValue;
    use dynoplain_core::{DecodeError, Value};
    use dynoplain_model::DynamoDBResponse;
    use serde_json::json;

    use crate::decoder;

    fn sdk_item(pairs: &[(&str, AttributeValue)]) -> HashMap<String, AttributeValue> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect()
    }

    #[test]
    fn test_should_decode_sdk_get_item() {
        let output = GetItemOutput::builder()
            .item("id", AttributeValue::S("abc".to_owned()))
            .item(
                "nested",
                AttributeValue::M(sdk_item(&[
                    ("a", AttributeValue::N("1".to_owned())),
                    (
                        "b",
                        AttributeValue::L(vec![
                            AttributeValue::S("x".to_owned()),
                            AttributeValue::N("2".to_owned()),
                        ]),
                    ),
                ])),
            )
            .item("blob", AttributeValue::B(Blob::new(b"hi".to_vec())))
            .build();

        let decoded = decoder().decode(&DynamoDBResponse::from(output)).unwrap();
        assert_eq!(
            serde_json::Value::from(decoded),
            json!({"id": "abc", "nested": {"a": 1, "b": ["x", 2]}, "blob": "aGk="})
        );
    }

    #[test]
    fn test_should_decode_sdk_get_item_miss_as_null() {
        let output = GetItemOutput::builder().build();
        let decoded = decoder().decode(&DynamoDBResponse::from(output)).unwrap();
        assert!(decoded.is_null());
    }

    #[test]
    fn test_should_decode_sdk_query_and_scan() {
        let query = QueryOutput::builder()
            .items(sdk_item(&[("n", AttributeValue::N("1".to_owned()))]))
            .items(sdk_item(&[("n", AttributeValue::N("2".to_owned()))]))
            .count(2)
            .build();
        let decoded = decoder().decode(&DynamoDBResponse::from(query)).unwrap();
        assert_eq!(serde_json::Value::from(decoded), json!([{"n": 1}, {"n": 2}]));

        let scan = ScanOutput::builder().count(0).build();
        let decoded = decoder().decode(&DynamoDBResponse::from(scan)).unwrap();
        assert_eq!(decoded, Value::List(vec![]));
    }

    #[test]
    fn test_should_decode_sdk_batch_get_item() {
        let output = BatchGetItemOutput::builder()
            .responses(
                "T1",
                vec![sdk_item(&[("id", AttributeValue::S("a".to_owned()))])],
            )
            .responses(
                "T2",
                vec![
                    sdk_item(&[("id", AttributeValue::S("b".to_owned()))]),
                    sdk_item(&[("id", AttributeValue::S("c".to_owned()))]),
                ],
            )
            .build();
        let decoded = decoder().decode(&DynamoDBResponse::from(output)).unwrap();
        assert_eq!(
            serde_json::Value::from(decoded),
            json!([{"id": "a"}, {"id": "b"}, {"id": "c"}])
        );
    }

    #[test]
    fn test_should_fail_on_invalid_sdk_number_set() {
        let output = GetItemOutput::builder()
            .item("ns", AttributeValue::Ns(vec!["1".to_owned(), "oops".to_owned()]))
            .build();
        let err = decoder()
            .decode(&DynamoDBResponse::from(output))
            .unwrap_err();
        assert!(matches!(err, DecodeError::InvalidNumber(ref n) if n == "oops"));
    }
}
