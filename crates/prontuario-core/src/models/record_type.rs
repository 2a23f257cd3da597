use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The three kinds of specific clinical record ("ficha").
///
/// Serialized in camelCase (`neurofunctional`, `cardiorespiratory`,
/// `traumaOrthopedic`), which is also the `recordType` query value used by
/// the access-request endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordType {
    Neurofunctional,
    Cardiorespiratory,
    TraumaOrthopedic,
}

impl RecordType {
    /// Order in which a record ID is matched against a patient's record map.
    pub const PRECEDENCE: [RecordType; 3] = [
        RecordType::Neurofunctional,
        RecordType::Cardiorespiratory,
        RecordType::TraumaOrthopedic,
    ];

    /// REST collection slug, e.g. `cardiorespiratory-record`.
    pub fn slug(&self) -> &'static str {
        match self {
            RecordType::Neurofunctional => "neurofunctional-record",
            RecordType::Cardiorespiratory => "cardiorespiratory-record",
            RecordType::TraumaOrthopedic => "trauma-orthopedic-record",
        }
    }

    /// Key of this type in `specificMedicalRecordsIds`.
    pub fn map_key(&self) -> &'static str {
        match self {
            RecordType::Neurofunctional => "neurofunctionalRecord",
            RecordType::Cardiorespiratory => "cardiorespiratoryRecord",
            RecordType::TraumaOrthopedic => "traumaOrthopedicRecord",
        }
    }

    pub fn query_value(&self) -> &'static str {
        match self {
            RecordType::Neurofunctional => "neurofunctional",
            RecordType::Cardiorespiratory => "cardiorespiratory",
            RecordType::TraumaOrthopedic => "traumaOrthopedic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordType::Neurofunctional => "Neurofunctional",
            RecordType::Cardiorespiratory => "Cardiorespiratory",
            RecordType::TraumaOrthopedic => "Trauma-orthopedic",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_value())
    }
}

impl FromStr for RecordType {
    type Err = CoreError;

    /// Accepts the query value, the slug, the map key, or a short alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        match needle.as_str() {
            "neuro" | "neurofunctional" | "neurofunctional-record" | "neurofunctionalrecord" => {
                Ok(RecordType::Neurofunctional)
            }
            "cardio" | "cardiorespiratory" | "cardiorespiratory-record"
            | "cardiorespiratoryrecord" => Ok(RecordType::Cardiorespiratory),
            "trauma" | "traumaorthopedic" | "trauma-orthopedic" | "trauma-orthopedic-record"
            | "traumaorthopedicrecord" => Ok(RecordType::TraumaOrthopedic),
            _ => Err(CoreError::UnknownRecordType(s.to_string())),
        }
    }
}
