use prontuario_core::models::record_type::RecordType;

use super::common;
use crate::RecordForm;
use crate::schema::{Field, Section};

/// Cardiorespiratory physiotherapy assessment.
pub struct CardiorespiratoryForm;

impl RecordForm for CardiorespiratoryForm {
    fn record_type(&self) -> RecordType {
        RecordType::Cardiorespiratory
    }

    fn name(&self) -> &str {
        "Cardiorespiratory assessment"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                Section::new(
                    "anamnesis",
                    "Anamnesis",
                    vec![
                        Field::text("chiefComplaint", "Chief complaint").required(),
                        Field::long_text("historyOfPresentIllness", "History of present illness"),
                        Field::long_text("comorbidities", "Comorbidities"),
                        Field::boolean("smoker", "Smoker"),
                        Field::number("packYears", "Pack-years", 0.0, 200.0),
                    ],
                ),
                common::vital_signs(),
                Section::new(
                    "chestExam",
                    "Chest examination",
                    vec![
                        Field::choice(
                            "thoraxType",
                            "Thorax type",
                            &["normal", "barrel", "pectus excavatum", "pectus carinatum", "kyphoscoliotic"],
                        ),
                        Field::choice(
                            "breathingPattern",
                            "Breathing pattern",
                            &["costal", "diaphragmatic", "mixed", "paradoxical"],
                        ),
                        Field::text("chestExpansion", "Chest expansion"),
                        Field::long_text("auscultation", "Pulmonary auscultation"),
                        Field::boolean("cough.present", "Cough"),
                        Field::boolean("cough.productive", "Productive cough"),
                    ],
                ),
                Section::new(
                    "respiratoryMuscleStrength",
                    "Respiratory muscle strength",
                    vec![
                        Field::number("maximalInspiratoryPressure", "PImax", 0.0, 200.0)
                            .unit("cmH2O"),
                        Field::number("maximalExpiratoryPressure", "PEmax", 0.0, 300.0)
                            .unit("cmH2O"),
                    ],
                ),
                Section::new(
                    "spirometry",
                    "Spirometry",
                    vec![
                        Field::number("fev1", "FEV1", 0.0, 10.0).unit("L"),
                        Field::number("fvc", "FVC", 0.0, 10.0).unit("L"),
                        Field::number("fev1FvcRatio", "FEV1/FVC", 0.0, 100.0).unit("%"),
                        Field::number("peakExpiratoryFlow", "Peak expiratory flow", 0.0, 1000.0)
                            .unit("L/min"),
                    ],
                ),
                Section::new(
                    "functionalCapacity",
                    "Functional capacity",
                    vec![
                        Field::number("sixMinuteWalkDistance", "6-minute walk distance", 0.0, 1000.0)
                            .unit("m"),
                        Field::number("borgDyspnea", "Borg dyspnea", 0.0, 10.0),
                        Field::number("borgFatigue", "Borg fatigue", 0.0, 10.0),
                    ],
                ),
                common::treatment_plan(),
            ]
        });
        &SECTIONS
    }
}
