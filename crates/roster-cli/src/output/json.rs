use serde_json::{json, Value};

use roster_core::lookup::Locality;
use roster_core::{Match, Record};

/// A record in its stored shape plus its position in the store.
pub fn record_json(record: &Record, index: usize) -> anyhow::Result<Value> {
    let mut value = serde_json::to_value(record)?;
    if let Value::Object(map) = &mut value {
        map.insert("index".to_string(), json!(index));
    }
    Ok(value)
}

pub fn matches_json(matches: &[Match<'_>]) -> anyhow::Result<Value> {
    let items = matches
        .iter()
        .map(|m| record_json(m.record, m.index))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Value::Array(items))
}

pub fn locality_json(postcode: &str, locality: &Locality) -> Value {
    json!({
        "postcode": postcode,
        "city": locality.city,
        "state": locality.state,
    })
}

pub fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
