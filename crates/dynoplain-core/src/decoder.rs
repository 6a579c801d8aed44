//! Response decoder.
//!
//! Walks a typed response once, stripping type tags from every attribute
//! value. The decoder holds only its configuration, so one instance can be
//! shared freely across threads.

use std::collections::HashMap;

use dynoplain_model::{AttributeValue, DynamoDBResponse, Item, Variant};
use tracing::{debug, trace};

use crate::config::DecoderConfig;
use crate::error::DecodeError;
use crate::value::{Number, PlainItem, Value};

/// Decodes typed DynamoDB responses into plain [`Value`]s.
#[derive(Debug, Clone, Default)]
pub struct ResponseDecoder {
    config: DecoderConfig,
}

impl ResponseDecoder {
    /// Create a decoder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with an explicit configuration.
    #[must_use]
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a response.
    ///
    /// - `GetItem`: the item as a [`Value::Map`], or [`Value::Null`] when absent.
    /// - `Query` / `Scan`: a [`Value::List`] of maps in input order.
    /// - `BatchGetItem`: a flat [`Value::List`] of maps across all tables.
    ///
    /// Any other response fails with [`DecodeError::UnsupportedResponseType`].
    pub fn decode(&self, response: &DynamoDBResponse) -> Result<Value, DecodeError> {
        let decoded = match response {
            DynamoDBResponse::GetItem(output) => self
                .decode_item(output.item.as_ref())?
                .map_or(Value::Null, Value::Map),
            DynamoDBResponse::Query(output) => Value::List(self.decode_items(&output.items)?),
            DynamoDBResponse::Scan(output) => Value::List(self.decode_items(&output.items)?),
            DynamoDBResponse::BatchGetItem(output) => {
                Value::List(self.decode_batch(&output.responses)?)
            }
            other => {
                return Err(DecodeError::UnsupportedResponseType(
                    other.type_name().to_owned(),
                ));
            }
        };

        let items = match &decoded {
            Value::List(items) => items.len(),
            Value::Null => 0,
            _ => 1,
        };
        debug!(operation = %response.operation(), items, "decoded response");
        Ok(decoded)
    }

    /// Build the typed response for `operation` from a JSON body, then decode it.
    pub fn decode_json(
        &self,
        operation: &str,
        body: &serde_json::Value,
    ) -> Result<Value, DecodeError> {
        let response = DynamoDBResponse::from_json(operation, body)?;
        self.decode(&response)
    }

    /// Decode a single item. `None` decodes to `None`.
    pub fn decode_item(&self, item: Option<&Item>) -> Result<Option<PlainItem>, DecodeError> {
        item.map(|item| self.decode_fields(item, 0)).transpose()
    }

    /// Decode a single attribute value. `None` decodes to [`Value::Null`].
    pub fn decode_attribute(&self, attr: Option<&AttributeValue>) -> Result<Value, DecodeError> {
        attr.map_or(Ok(Value::Null), |attr| self.decode_value(attr, 0))
    }

    fn decode_items(&self, items: &[Item]) -> Result<Vec<Value>, DecodeError> {
        items
            .iter()
            .map(|item| self.decode_fields(item, 0).map(Value::Map))
            .collect()
    }

    fn decode_batch(&self, responses: &HashMap<String, Vec<Item>>) -> Result<Vec<Value>, DecodeError> {
        let mut tables: Vec<(&String, &Vec<Item>)> = responses.iter().collect();
        if self.config.sort_batch_tables {
            tables.sort_unstable_by(|a, b| a.0.cmp(b.0));
        }

        let mut decoded = Vec::with_capacity(tables.iter().map(|(_, items)| items.len()).sum());
        for (table, items) in tables {
            trace!(table = %table, count = items.len(), "decoding batch table");
            decoded.extend(self.decode_items(items)?);
        }
        Ok(decoded)
    }

    /// `depth` is the number of `M`/`L` containers enclosing these fields.
    fn decode_fields(
        &self,
        fields: &HashMap<String, AttributeValue>,
        depth: usize,
    ) -> Result<PlainItem, DecodeError> {
        fields
            .iter()
            .map(|(name, attr)| Ok((name.clone(), self.decode_value(attr, depth)?)))
            .collect()
    }

    fn decode_value(&self, attr: &AttributeValue, depth: usize) -> Result<Value, DecodeError> {
        let Some(variant) = attr.variant() else {
            return Err(DecodeError::UnsupportedAttributeType(attr.to_string()));
        };

        let value = match variant {
            Variant::S(s) => Value::String(s.to_owned()),
            Variant::N(n) => Value::Number(parse_number(n)?),
            Variant::Bool(b) => Value::Bool(b),
            Variant::Null => Value::Null,
            Variant::B(b) => Value::Binary(b.clone()),
            Variant::M(m) => Value::Map(self.decode_fields(m, self.descend(depth)?)?),
            Variant::L(l) => {
                let depth = self.descend(depth)?;
                Value::List(
                    l.iter()
                        .map(|v| self.decode_value(v, depth))
                        .collect::<Result<_, _>>()?,
                )
            }
            Variant::Ss(v) => Value::List(v.iter().cloned().map(Value::String).collect()),
            Variant::Ns(v) => Value::List(
                v.iter()
                    .map(|n| parse_number(n).map(Value::Number))
                    .collect::<Result<_, _>>()?,
            ),
            Variant::Bs(v) => Value::List(v.iter().cloned().map(Value::Binary).collect()),
        };
        Ok(value)
    }

    fn descend(&self, depth: usize) -> Result<usize, DecodeError> {
        let next = depth + 1;
        if let Some(max_depth) = self.config.max_depth {
            if next > max_depth {
                return Err(DecodeError::DepthLimitExceeded { max_depth });
            }
        }
        Ok(next)
    }
}

fn parse_number(text: &str) -> Result<Number, DecodeError> {
    Number::parse(text).ok_or_else(|| DecodeError::InvalidNumber(text.to_owned()))
}
