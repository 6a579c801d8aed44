//! DynamoDB `AttributeValue` type with a custom wire decoder.
//!
//! On the wire an attribute value is an object keyed by its type descriptor,
//! e.g. `{"S": "hello"}`. A well-formed value carries exactly one key, but the
//! type here keeps one optional slot per descriptor so that objects with
//! several keys (or none) stay representable. [`AttributeValue::variant`]
//! decides which slot wins.

use std::collections::HashMap;
use std::fmt;

use base64::Engine;
use bytes::Bytes;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// A single DynamoDB item: attribute name to attribute value.
pub type Item = HashMap<String, AttributeValue>;

/// Type descriptors in resolution priority order.
pub const TYPE_DESCRIPTORS: &[&str] = &["S", "N", "BOOL", "NULL", "B", "M", "L", "SS", "NS", "BS"];

/// DynamoDB attribute value.
///
/// Numbers are string-encoded to preserve arbitrary precision. Binary payloads
/// hold raw bytes; the base64 text form only exists on the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeValue {
    /// String value.
    pub s: Option<String>,
    /// Number value (string-encoded).
    pub n: Option<String>,
    /// Boolean value.
    pub bool: Option<bool>,
    /// Null marker. Any populated value means null, whatever the flag says.
    pub null: Option<bool>,
    /// Binary value.
    pub b: Option<Bytes>,
    /// Map of nested attribute values.
    pub m: Option<HashMap<String, AttributeValue>>,
    /// List of nested attribute values.
    pub l: Option<Vec<AttributeValue>>,
    /// String set.
    pub ss: Option<Vec<String>>,
    /// Number set (string-encoded).
    pub ns: Option<Vec<String>>,
    /// Binary set.
    pub bs: Option<Vec<Bytes>>,
}

/// The populated slot of an [`AttributeValue`], borrowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Variant<'a> {
    /// `S`
    S(&'a str),
    /// `N`
    N(&'a str),
    /// `BOOL`
    Bool(bool),
    /// `NULL`
    Null,
    /// `B`
    B(&'a Bytes),
    /// `M`
    M(&'a HashMap<String, AttributeValue>),
    /// `L`
    L(&'a [AttributeValue]),
    /// `SS`
    Ss(&'a [String]),
    /// `NS`
    Ns(&'a [String]),
    /// `BS`
    Bs(&'a [Bytes]),
}

impl Variant<'_> {
    /// Returns the DynamoDB type descriptor string (e.g., "S", "N", "BOOL").
    #[must_use]
    pub fn type_descriptor(&self) -> &'static str {
        match self {
            Self::S(_) => "S",
            Self::N(_) => "N",
            Self::Bool(_) => "BOOL",
            Self::Null => "NULL",
            Self::B(_) => "B",
            Self::M(_) => "M",
            Self::L(_) => "L",
            Self::Ss(_) => "SS",
            Self::Ns(_) => "NS",
            Self::Bs(_) => "BS",
        }
    }
}

impl AttributeValue {
    /// String value.
    #[must_use]
    pub fn s(value: impl Into<String>) -> Self {
        Self {
            s: Some(value.into()),
            ..Self::default()
        }
    }

    /// Number value from its decimal text.
    #[must_use]
    pub fn n(value: impl Into<String>) -> Self {
        Self {
            n: Some(value.into()),
            ..Self::default()
        }
    }

    /// Boolean value.
    #[must_use]
    pub fn bool(value: bool) -> Self {
        Self {
            bool: Some(value),
            ..Self::default()
        }
    }

    /// Null value.
    #[must_use]
    pub fn null() -> Self {
        Self {
            null: Some(true),
            ..Self::default()
        }
    }

    /// Binary value.
    #[must_use]
    pub fn b(value: impl Into<Bytes>) -> Self {
        Self {
            b: Some(value.into()),
            ..Self::default()
        }
    }

    /// Map value.
    #[must_use]
    pub fn m(value: HashMap<String, AttributeValue>) -> Self {
        Self {
            m: Some(value),
            ..Self::default()
        }
    }

    /// List value.
    #[must_use]
    pub fn l(value: Vec<AttributeValue>) -> Self {
        Self {
            l: Some(value),
            ..Self::default()
        }
    }

    /// String set.
    #[must_use]
    pub fn ss<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            ss: Some(values.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Number set.
    #[must_use]
    pub fn ns<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            ns: Some(values.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Binary set.
    #[must_use]
    pub fn bs<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        Self {
            bs: Some(values.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Returns the first populated slot in the order
    /// S, N, BOOL, NULL, B, M, L, SS, NS, BS.
    ///
    /// `None` when no slot is populated.
    #[must_use]
    pub fn variant(&self) -> Option<Variant<'_>> {
        if let Some(s) = &self.s {
            return Some(Variant::S(s));
        }
        if let Some(n) = &self.n {
            return Some(Variant::N(n));
        }
        if let Some(b) = self.bool {
            return Some(Variant::Bool(b));
        }
        if self.null.is_some() {
            return Some(Variant::Null);
        }
        if let Some(b) = &self.b {
            return Some(Variant::B(b));
        }
        if let Some(m) = &self.m {
            return Some(Variant::M(m));
        }
        if let Some(l) = &self.l {
            return Some(Variant::L(l));
        }
        if let Some(ss) = &self.ss {
            return Some(Variant::Ss(ss));
        }
        if let Some(ns) = &self.ns {
            return Some(Variant::Ns(ns));
        }
        self.bs.as_deref().map(Variant::Bs)
    }

    /// Returns `true` if no slot is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variant().is_none()
    }

    /// Returns the type descriptor of the winning slot, if any.
    #[must_use]
    pub fn type_descriptor(&self) -> Option<&'static str> {
        self.variant().map(|v| v.type_descriptor())
    }
}

/// Renders every populated slot, not only the winning one.
impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(s) = &self.s {
            parts.push(format!("S: {s:?}"));
        }
        if let Some(n) = &self.n {
            parts.push(format!("N: {n}"));
        }
        if let Some(b) = self.bool {
            parts.push(format!("BOOL: {b}"));
        }
        if let Some(b) = self.null {
            parts.push(format!("NULL: {b}"));
        }
        if let Some(b) = &self.b {
            parts.push(format!("B: {} bytes", b.len()));
        }
        if let Some(m) = &self.m {
            let mut entries: Vec<_> = m.iter().collect();
            entries.sort_by_key(|(k, _)| *k);
            let rendered: Vec<String> = entries.iter().map(|(k, v)| format!("{k}: {v}")).collect();
            parts.push(format!("M: {{{}}}", rendered.join(", ")));
        }
        if let Some(l) = &self.l {
            let rendered: Vec<String> = l.iter().map(ToString::to_string).collect();
            parts.push(format!("L: [{}]", rendered.join(", ")));
        }
        if let Some(v) = &self.ss {
            parts.push(format!("SS: {v:?}"));
        }
        if let Some(v) = &self.ns {
            parts.push(format!("NS: {v:?}"));
        }
        if let Some(v) = &self.bs {
            parts.push(format!("BS: {} items", v.len()));
        }
        write!(f, "{{{}}}", parts.join(", "))
    }
}

fn decode_base64(encoded: &str) -> Result<Bytes, base64::DecodeError> {
    base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map(Bytes::from)
}

impl<'de> Deserialize<'de> for AttributeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AttributeValueVisitor)
    }
}

struct AttributeValueVisitor;

/// Reads the value for `key`, rejecting a descriptor seen twice in one object.
fn next_unique<'de, M, T>(map: &mut M, taken: bool, key: &'static str) -> Result<T, M::Error>
where
    M: MapAccess<'de>,
    T: Deserialize<'de>,
{
    if taken {
        return Err(de::Error::duplicate_field(key));
    }
    map.next_value()
}

impl<'de> Visitor<'de> for AttributeValueVisitor {
    type Value = AttributeValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a DynamoDB AttributeValue object keyed by type descriptor")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
        let mut value = AttributeValue::default();

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "S" => value.s = Some(next_unique(&mut map, value.s.is_some(), "S")?),
                "N" => value.n = Some(next_unique(&mut map, value.n.is_some(), "N")?),
                "BOOL" => value.bool = Some(next_unique(&mut map, value.bool.is_some(), "BOOL")?),
                "NULL" => value.null = Some(next_unique(&mut map, value.null.is_some(), "NULL")?),
                "B" => {
                    let encoded: String = next_unique(&mut map, value.b.is_some(), "B")?;
                    value.b = Some(decode_base64(&encoded).map_err(de::Error::custom)?);
                }
                "M" => value.m = Some(next_unique(&mut map, value.m.is_some(), "M")?),
                "L" => value.l = Some(next_unique(&mut map, value.l.is_some(), "L")?),
                "SS" => value.ss = Some(next_unique(&mut map, value.ss.is_some(), "SS")?),
                "NS" => value.ns = Some(next_unique(&mut map, value.ns.is_some(), "NS")?),
                "BS" => {
                    let encoded: Vec<String> = next_unique(&mut map, value.bs.is_some(), "BS")?;
                    let decoded = encoded
                        .iter()
                        .map(|e| decode_base64(e))
                        .collect::<Result<Vec<_>, _>>()
                        .map_err(de::Error::custom)?;
                    value.bs = Some(decoded);
                }
                other => return Err(de::Error::unknown_field(other, TYPE_DESCRIPTORS)),
            }
        }

        Ok(value)
    }
}
