use prontuario_core::models::record_type::RecordType;

use super::common;
use crate::RecordForm;
use crate::schema::{Field, Section};

/// Trauma-orthopedic physiotherapy assessment.
pub struct TraumaOrthopedicForm;

impl RecordForm for TraumaOrthopedicForm {
    fn record_type(&self) -> RecordType {
        RecordType::TraumaOrthopedic
    }

    fn name(&self) -> &str {
        "Trauma-orthopedic assessment"
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
                        Field::text("mechanismOfInjury", "Mechanism of injury"),
                        Field::text("injuryDate", "Injury date"),
                        Field::long_text("surgicalHistory", "Surgical history"),
                    ],
                ),
                common::vital_signs(),
                Section::new(
                    "pain",
                    "Pain",
                    vec![
                        Field::number("intensity", "Intensity (VAS)", 0.0, 10.0),
                        Field::text("location", "Location"),
                        Field::choice(
                            "character",
                            "Character",
                            &["burning", "stabbing", "throbbing", "aching", "tingling"],
                        ),
                        Field::text("aggravatingFactors", "Aggravating factors"),
                        Field::text("relievingFactors", "Relieving factors"),
                    ],
                ),
                Section::new(
                    "inspection",
                    "Inspection",
                    vec![
                        Field::boolean("edema", "Edema"),
                        Field::boolean("deformity", "Deformity"),
                        Field::boolean("scar", "Scar"),
                        Field::long_text("notes", "Notes"),
                    ],
                ),
                Section::new(
                    "palpation",
                    "Palpation",
                    vec![
                        Field::boolean("tenderness", "Tenderness"),
                        Field::boolean("temperatureIncrease", "Increased temperature"),
                        Field::long_text("notes", "Notes"),
                    ],
                ),
                Section::new(
                    "rangeOfMotion",
                    "Range of motion",
                    vec![
                        Field::text("joint", "Joint"),
                        Field::number("flexion", "Flexion", 0.0, 180.0).unit("°"),
                        Field::number("extension", "Extension", 0.0, 180.0).unit("°"),
                        Field::number("abduction", "Abduction", 0.0, 180.0).unit("°"),
                        Field::number("adduction", "Adduction", 0.0, 90.0).unit("°"),
                        Field::number("internalRotation", "Internal rotation", 0.0, 90.0).unit("°"),
                        Field::number("externalRotation", "External rotation", 0.0, 90.0).unit("°"),
                    ],
                ),
                Section::new(
                    "muscleStrength",
                    "Muscle strength",
                    vec![
                        Field::text("muscleGroup", "Muscle group"),
                        Field::number("grade", "Oxford grade", 0.0, 5.0),
                    ],
                ),
                Section::new(
                    "specialTests",
                    "Special tests",
                    vec![
                        Field::text("performed", "Tests performed"),
                        Field::long_text("findings", "Findings"),
                    ],
                ),
                Section::new(
                    "functionalScales",
                    "Functional scales",
                    vec![
                        Field::number("lowerExtremityFunctionalScale", "LEFS", 0.0, 80.0),
                        Field::number("dashScore", "DASH", 0.0, 100.0),
                    ],
                ),
                common::treatment_plan(),
            ]
        });
        &SECTIONS
    }
}
