use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// A single analytics value as the backend sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum StatValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(Value),
}

impl From<Value> for StatValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => StatValue::Integer(i),
                (None, Some(f)) => StatValue::Float(f),
                _ => StatValue::Other(Value::Number(n)),
            },
            Value::String(s) => StatValue::Text(s),
            other => StatValue::Other(other),
        }
    }
}

impl From<StatValue> for Value {
    fn from(value: StatValue) -> Self {
        match value {
            StatValue::Integer(i) => Value::from(i),
            StatValue::Float(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
            StatValue::Text(s) => Value::String(s),
            StatValue::Other(v) => v,
        }
    }
}

impl From<i64> for StatValue {
    fn from(value: i64) -> Self {
        StatValue::Integer(value)
    }
}

impl From<f64> for StatValue {
    fn from(value: f64) -> Self {
        StatValue::Float(value)
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        StatValue::Text(value.to_string())
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Integer(i) => write!(f, "{}", i),
            StatValue::Float(x) => write!(f, "{}", x),
            StatValue::Text(s) => f.write_str(s),
            StatValue::Other(Value::Null) => Ok(()),
            StatValue::Other(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatEntry {
    pub label: String,
    pub value: StatValue,
}

/// Per-team aggregates from `/analytics`, in the order the backend sent them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct TeamAnalytics {
    entries: Vec<StatEntry>,
}

impl TeamAnalytics {
    pub fn from_pairs<L, V, I>(pairs: I) -> Self
    where
        L: Into<String>,
        V: Into<StatValue>,
        I: IntoIterator<Item = (L, V)>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(label, value)| StatEntry {
                    label: label.into(),
                    value: value.into(),
                })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[StatEntry] {
        &self.entries
    }

    pub fn get(&self, label: &str) -> Option<&StatValue> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| &entry.value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Map<String, Value>> for TeamAnalytics {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            entries: map
                .into_iter()
                .map(|(label, value)| StatEntry {
                    label,
                    value: StatValue::from(value),
                })
                .collect(),
        }
    }
}

impl From<TeamAnalytics> for Map<String, Value> {
    fn from(analytics: TeamAnalytics) -> Self {
        analytics
            .entries
            .into_iter()
            .map(|entry| (entry.label, Value::from(entry.value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn keeps_backend_key_order() {
        let analytics: TeamAnalytics = serde_json::from_str(
            r#"{
                "Total Matches": 238,
                "Total Runs": 31564,
                "Total Wickets": 1602,
                "Total Fours": 2790,
                "Total Sixes": 1187,
                "Average Run Rate": 7.85
            }"#,
        )
        .unwrap();

        let labels: Vec<&str> = analytics.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Total Matches",
                "Total Runs",
                "Total Wickets",
                "Total Fours",
                "Total Sixes",
                "Average Run Rate",
            ]
        );
        assert_eq!(analytics.get("Total Runs"), Some(&StatValue::Integer(31564)));
        assert_eq!(analytics.get("Average Run Rate"), Some(&StatValue::Float(7.85)));
    }

    #[test]
    fn mixed_value_types_decode() {
        let analytics: TeamAnalytics =
            serde_json::from_str(r#"{"Matches Won": 10, "Win %": "62.5"}"#).unwrap();

        assert_eq!(
            analytics,
            TeamAnalytics::from_pairs([
                ("Matches Won", StatValue::Integer(10)),
                ("Win %", StatValue::Text("62.5".to_string())),
            ])
        );
    }

    #[test]
    fn empty_object_is_empty() {
        let analytics: TeamAnalytics = serde_json::from_str("{}").unwrap();
        assert!(analytics.is_empty());
        assert_eq!(analytics.len(), 0);
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert!(serde_json::from_str::<TeamAnalytics>(r#"["Total Runs"]"#).is_err());
    }

    #[rstest]
    #[case(StatValue::Integer(10), "10")]
    #[case(StatValue::Float(7.85), "7.85")]
    #[case(StatValue::Float(62.0), "62")]
    #[case(StatValue::Text("62.5".into()), "62.5")]
    #[case(StatValue::Other(Value::Null), "")]
    #[case(StatValue::Other(Value::Bool(true)), "true")]
    fn values_display_like_plain_text(#[case] value: StatValue, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn serializes_back_in_the_same_order() {
        let analytics = TeamAnalytics::from_pairs([("b", 2i64), ("a", 1i64)]);
        assert_eq!(serde_json::to_string(&analytics).unwrap(), r#"{"b":2,"a":1}"#);
    }
}
