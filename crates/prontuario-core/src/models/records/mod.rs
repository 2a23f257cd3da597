//! Specific clinical records ("fichas").
//!
//! Every field has a zero/empty default and is always serialized, so a
//! freshly created record posts the complete nested schema.

pub mod cardio;
pub mod common;
pub mod neuro;
pub mod trauma;

use serde::{Deserialize, Serialize};

use super::record_type::RecordType;

pub use cardio::CardiorespiratoryRecord;
pub use neuro::NeurofunctionalRecord;
pub use trauma::TraumaOrthopedicRecord;

/// A record body tagged with its type.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecificRecord {
    Neurofunctional(NeurofunctionalRecord),
    Cardiorespiratory(CardiorespiratoryRecord),
    TraumaOrthopedic(TraumaOrthopedicRecord),
}

impl SpecificRecord {
    pub fn record_type(&self) -> RecordType {
        match self {
            SpecificRecord::Neurofunctional(_) => RecordType::Neurofunctional,
            SpecificRecord::Cardiorespiratory(_) => RecordType::Cardiorespiratory,
            SpecificRecord::TraumaOrthopedic(_) => RecordType::TraumaOrthopedic,
        }
    }

    /// An all-defaults body for `record_type`.
    pub fn blank(record_type: RecordType) -> Self {
        match record_type {
            RecordType::Neurofunctional => {
                SpecificRecord::Neurofunctional(NeurofunctionalRecord::default())
            }
            RecordType::Cardiorespiratory => {
                SpecificRecord::Cardiorespiratory(CardiorespiratoryRecord::default())
            }
            RecordType::TraumaOrthopedic => {
                SpecificRecord::TraumaOrthopedic(TraumaOrthopedicRecord::default())
            }
        }
    }

    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            SpecificRecord::Neurofunctional(r) => serde_json::to_value(r),
            SpecificRecord::Cardiorespiratory(r) => serde_json::to_value(r),
            SpecificRecord::TraumaOrthopedic(r) => serde_json::to_value(r),
        }
    }

    pub fn from_value(
        record_type: RecordType,
        value: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        Ok(match record_type {
            RecordType::Neurofunctional => {
                SpecificRecord::Neurofunctional(serde_json::from_value(value)?)
            }
            RecordType::Cardiorespiratory => {
                SpecificRecord::Cardiorespiratory(serde_json::from_value(value)?)
            }
            RecordType::TraumaOrthopedic => {
                SpecificRecord::TraumaOrthopedic(serde_json::from_value(value)?)
            }
        })
    }
}

/// A record as stored by the backend: body plus ownership metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRecord<T> {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub patient_id: Option<String>,
    #[serde(default)]
    pub clinician_id: Option<String>,
    #[serde(flatten)]
    pub body: T,
}
