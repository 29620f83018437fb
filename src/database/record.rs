use serde::Deserialize;
use serde_json::Value;

use crate::database::models::{label, Airplane, NewAirplane};

/// Errors that can occur while reading an airplane from API input
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("Invalid JSON format: {0}")]
    InvalidJson(String),
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),
    #[error("Invalid value: {0}")]
    InvalidField(String),
}

/// Loosely typed view of an airplane body; presence checks happen after decoding
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AirplaneFields {
    id: Option<i32>,
    producer_name: Option<String>,
    model_name: Option<String>,
    passenger_capacity: Option<i32>,
}

impl AirplaneFields {
    fn from_json(json: Value) -> Result<Self, PayloadError> {
        if !json.is_object() {
            return Err(PayloadError::InvalidJson("Expected JSON object".to_string()));
        }
        serde_json::from_value(json).map_err(|e| PayloadError::InvalidField(e.to_string()))
    }

    fn passenger_capacity(&self) -> Result<i32, PayloadError> {
        self.passenger_capacity
            .ok_or(PayloadError::MissingRequiredField("passengerCapacity"))
    }
}

impl NewAirplane {
    /// Read a create body. A client supplied `id` is ignored.
    pub fn from_json(json: Value) -> Result<Self, PayloadError> {
        let fields = AirplaneFields::from_json(json)?;
        let passenger_capacity = fields.passenger_capacity()?;
        Ok(Self {
            producer_name: fields.producer_name,
            model_name: fields.model_name,
            passenger_capacity,
        })
    }
}

impl Airplane {
    /// Read an update body; every field is replaced and `id` is mandatory.
    pub fn from_json(json: Value) -> Result<Self, PayloadError> {
        let fields = AirplaneFields::from_json(json)?;
        let passenger_capacity = fields.passenger_capacity()?;
        let id = fields.id.ok_or(PayloadError::MissingRequiredField("id"))?;
        Ok(Self {
            id,
            producer_name: fields.producer_name,
            model_name: fields.model_name,
            passenger_capacity,
        })
    }
}

/// Best-effort "Producer Model" label from a body that may have failed validation
pub fn label_from_json(json: &Value) -> String {
    label(str_field(json, "producerName"), str_field(json, "modelName"))
}

fn str_field<'a>(json: &'a Value, key: &str) -> Option<&'a str> {
    json.get(key).and_then(Value::as_str)
}
