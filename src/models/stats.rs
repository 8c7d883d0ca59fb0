use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::SensorField;

/// Aggregate counters plus the most recent reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_messages: u64,
    pub active_alerts_count: u64,
    #[serde(default)]
    pub latest_readings: Option<LatestReading>,
}

impl StatsSummary {
    /// The latest reading, if the backend has seen any data yet
    pub fn latest(&self) -> Option<&LatestReading> {
        self.latest_readings.as_ref().filter(|r| r.has_data())
    }
}

/// Most recent reading as reported by `/stats`.
///
/// The backend sends `{}` before the first message arrives, otherwise
/// `{topic, timestamp, values}` where `values` is the raw sensor payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatestReading {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub values: Option<HashMap<String, serde_json::Value>>,
    /// Sensor keys sent inline instead of under `values`
    #[serde(flatten)]
    pub inline: HashMap<String, serde_json::Value>,
}

impl LatestReading {
    pub fn has_data(&self) -> bool {
        self.topic.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Numeric value for a field; non-numeric payload entries count as missing.
    ///
    /// A key present under `values` shadows the inline one, even when it is null.
    pub fn value(&self, field: SensorField) -> Option<f64> {
        let key = field.key();
        match self.values.as_ref().and_then(|values| values.get(key)) {
            Some(value) => value.as_f64(),
            None => self.inline.get(key).and_then(serde_json::Value::as_f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_latest_readings() {
        let stats: StatsSummary = serde_json::from_value(json!({
            "total_messages": 0,
            "active_alerts_count": 0,
            "latest_readings": {}
        }))
        .unwrap();

        assert!(stats.latest_readings.is_some());
        assert!(stats.latest().is_none());
    }

    #[test]
    fn test_missing_or_null_latest_readings() {
        let stats: StatsSummary = serde_json::from_value(json!({
            "total_messages": 3,
            "active_alerts_count": 1,
            "latest_readings": null
        }))
        .unwrap();
        assert!(stats.latest().is_none());

        let stats: StatsSummary = serde_json::from_value(json!({
            "total_messages": 3,
            "active_alerts_count": 1
        }))
        .unwrap();
        assert!(stats.latest().is_none());
    }

    #[test]
    fn test_empty_topic_is_no_data() {
        let latest: LatestReading = serde_json::from_value(json!({
            "topic": "",
            "timestamp": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert!(!latest.has_data());
    }

    #[test]
    fn test_values_from_payload() {
        let stats: StatsSummary = serde_json::from_value(json!({
            "total_messages": 120,
            "active_alerts_count": 4,
            "latest_readings": {
                "topic": "sensor/1",
                "timestamp": "2024-01-01T00:00:00Z",
                "values": {"temperature": 21.5, "humidity": "n/a"}
            }
        }))
        .unwrap();

        let latest = stats.latest().unwrap();
        assert_eq!(latest.topic.as_deref(), Some("sensor/1"));
        assert_eq!(latest.value(SensorField::Temperature), Some(21.5));
        assert_eq!(latest.value(SensorField::Humidity), None);
        assert_eq!(latest.value(SensorField::Voltage), None);
    }

    #[test]
    fn test_inline_values_and_payload_precedence() {
        let latest: LatestReading = serde_json::from_value(json!({
            "topic": "sensor/2",
            "timestamp": "2024-01-01T00:00:00Z",
            "temperature": 19.0,
            "humidity": 48.0,
            "current": 1.5,
            "pressure": 1001.2,
            "values": {"temperature": 20.0, "humidity": null, "current": "off", "voltage": null}
        }))
        .unwrap();

        assert_eq!(latest.value(SensorField::Temperature), Some(20.0));
        assert_eq!(latest.value(SensorField::Pressure), Some(1001.2));
        assert_eq!(latest.value(SensorField::Voltage), None);
        // null or non-numeric under `values` still hides the inline reading
        assert_eq!(latest.value(SensorField::Humidity), None);
        assert_eq!(latest.value(SensorField::Current), None);
    }
}
