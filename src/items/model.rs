use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

pub type ItemId = i64;

/// Identifier parsed from a path segment.
///
/// Parsing follows `parseInt` rules: leading whitespace and a sign are
/// accepted, the longest run of digits is taken and anything after it is
/// ignored. A segment without leading digits becomes `NotANumber`, which is
/// still handed to the item service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParsedId {
    Number(ItemId),
    NotANumber,
}

impl ParsedId {
    /// Base-10 parse, as `parseInt(segment, 10)`
    pub fn parse(segment: &str) -> Self {
        Self::parse_with(segment, false)
    }

    /// Radix-less parse, as `parseInt(segment)`: a `0x`/`0X` prefix selects hex
    pub fn parse_auto(segment: &str) -> Self {
        Self::parse_with(segment, true)
    }

    fn parse_with(segment: &str, detect_hex: bool) -> Self {
        let rest = segment.trim_start();
        let (negative, rest) = match rest.as_bytes().first() {
            Some(b'-') => (true, &rest[1..]),
            Some(b'+') => (false, &rest[1..]),
            _ => (false, rest),
        };

        let (radix, rest) = match rest.get(..2) {
            Some("0x") | Some("0X") if detect_hex => (16, &rest[2..]),
            _ => (10, rest),
        };

        let digits_len = rest.bytes().take_while(|b| (*b as char).is_digit(radix)).count();
        if digits_len == 0 {
            return ParsedId::NotANumber;
        }

        let digits = &rest[..digits_len];
        let signed = if negative { format!("-{}", digits) } else { digits.to_string() };
        match ItemId::from_str_radix(&signed, radix) {
            Ok(value) => ParsedId::Number(value),
            Err(_) => ParsedId::NotANumber,
        }
    }

    pub fn as_number(&self) -> Option<ItemId> {
        match self {
            ParsedId::Number(id) => Some(*id),
            ParsedId::NotANumber => None,
        }
    }
}

impl fmt::Display for ParsedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedId::Number(id) => write!(f, "{}", id),
            ParsedId::NotANumber => f.write_str("NaN"),
        }
    }
}

/// Item payload before the store has assigned an identifier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseItem {
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl BaseItem {
    /// Attach a store-assigned id; any client-supplied `id` attribute is dropped
    pub fn into_item(mut self, id: ItemId) -> Item {
        self.attributes.remove("id");
        Item {
            id,
            attributes: self.attributes,
        }
    }
}

/// A persisted item, serialized flat as `{ "id": .., ...attributes }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}
