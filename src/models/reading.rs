use serde::{Deserialize, Serialize};

/// One raw sensor measurement. A topic may report any subset of the values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub id: i64,
    pub topic: String,
    pub timestamp: String,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub voltage: Option<f64>,
    pub current: Option<f64>,
    pub pressure: Option<f64>,
}

impl Reading {
    pub fn value(&self, field: SensorField) -> Option<f64> {
        match field {
            SensorField::Temperature => self.temperature,
            SensorField::Humidity => self.humidity,
            SensorField::Voltage => self.voltage,
            SensorField::Current => self.current,
            SensorField::Pressure => self.pressure,
        }
    }
}

/// The five values a sensor can report
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SensorField {
    Temperature,
    Humidity,
    Voltage,
    Current,
    Pressure,
}

impl SensorField {
    /// All fields in column order
    pub fn all() -> &'static [SensorField] {
        &[
            SensorField::Temperature,
            SensorField::Humidity,
            SensorField::Voltage,
            SensorField::Current,
            SensorField::Pressure,
        ]
    }

    /// JSON key used by the backend
    pub fn key(&self) -> &'static str {
        match self {
            SensorField::Temperature => "temperature",
            SensorField::Humidity => "humidity",
            SensorField::Voltage => "voltage",
            SensorField::Current => "current",
            SensorField::Pressure => "pressure",
        }
    }

    /// Column header with unit
    pub fn label(&self) -> &'static str {
        match self {
            SensorField::Temperature => "Temp (°C)",
            SensorField::Humidity => "Humidity (%)",
            SensorField::Voltage => "Voltage (V)",
            SensorField::Current => "Current (A)",
            SensorField::Pressure => "Pressure (hPa)",
        }
    }
}
