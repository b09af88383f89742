use chrono::{NaiveDate, Utc};
use serde_json::Value;
use std::collections::HashMap;

/// Countdown rendered in the hero: negative once the day has passed.
pub fn days_until(date: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let date: NaiveDate = serde::Deserialize::deserialize(date)?;
    let now = Utc::now().date_naive();
    Ok(Value::from((date - now).num_days()))
}
