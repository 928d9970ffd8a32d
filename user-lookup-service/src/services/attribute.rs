//! Conversion from DynamoDB attribute values to plain JSON.
//!
//! Numbers keep the exact digits the table returned, so values with up to
//! 38 significant digits survive unchanged. Binary values are rendered as
//! standard base64 strings.
//! Anything the conversion cannot represent is reported as an error so the
//! caller can treat the item as malformed.

use crate::models::UserRecord;
use anyhow::{anyhow, bail, Context, Result};
use aws_sdk_dynamodb::types::AttributeValue;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{Map, Number, Value};
use std::collections::HashMap;

pub fn item_to_record(item: HashMap<String, AttributeValue>) -> Result<UserRecord> {
    Ok(UserRecord::new(item_to_map(item)?))
}

fn item_to_map(item: HashMap<String, AttributeValue>) -> Result<Map<String, Value>> {
    item.into_iter()
        .map(|(name, value)| {
            let json = attribute_to_json(value)
                .with_context(|| format!("Invalid value for attribute '{}'", name))?;
            Ok((name, json))
        })
        .collect()
}

pub fn attribute_to_json(value: AttributeValue) -> Result<Value> {
    let json = match value {
        AttributeValue::S(s) => Value::String(s),
        AttributeValue::N(n) => Value::Number(parse_number(&n)?),
        AttributeValue::Bool(b) => Value::Bool(b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::B(blob) => Value::String(STANDARD.encode(blob.as_ref())),
        AttributeValue::Ss(items) => Value::Array(items.into_iter().map(Value::String).collect()),
        AttributeValue::Ns(items) => Value::Array(
            items
                .iter()
                .map(|n| parse_number(n).map(Value::Number))
                .collect::<Result<_>>()?,
        ),
        AttributeValue::Bs(items) => Value::Array(
            items
                .iter()
                .map(|blob| Value::String(STANDARD.encode(blob.as_ref())))
                .collect(),
        ),
        AttributeValue::L(items) => Value::Array(
            items
                .into_iter()
                .map(attribute_to_json)
                .collect::<Result<_>>()?,
        ),
        AttributeValue::M(map) => Value::Object(item_to_map(map)?),
        other => bail!("Unsupported attribute value: {:?}", other),
    };
    Ok(json)
}

fn parse_number(raw: &str) -> Result<Number> {
    let raw = raw.trim();
    serde_json::from_str::<Number>(raw).map_err(|_| anyhow!("Not a finite number: '{}'", raw))
}
