use prontuario_core::models::record_type::RecordType;

use super::common;
use crate::RecordForm;
use crate::schema::{Field, Section};

/// Neurofunctional physiotherapy assessment.
/// Scales: Glasgow (3-15), modified Ashworth (0-4), MRC sum (0-60),
/// Berg (0-56), Barthel (0-100).
pub struct NeurofunctionalForm;

impl RecordForm for NeurofunctionalForm {
    fn record_type(&self) -> RecordType {
        RecordType::Neurofunctional
    }

    fn name(&self) -> &str {
        "Neurofunctional assessment"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            let reflex = ["absent", "hypoactive", "normal", "hyperactive"];
            vec![
                Section::new(
                    "anamnesis",
                    "Anamnesis",
                    vec![
                        Field::text("chiefComplaint", "Chief complaint").required(),
                        Field::long_text("historyOfPresentIllness", "History of present illness"),
                        Field::text("medicalDiagnosis", "Medical diagnosis"),
                        Field::text("onsetDate", "Onset date"),
                        Field::long_text("previousTreatments", "Previous treatments"),
                    ],
                ),
                common::vital_signs(),
                Section::new(
                    "consciousness",
                    "Consciousness",
                    vec![
                        Field::number("glasgowComaScale", "Glasgow Coma Scale", 3.0, 15.0),
                        Field::choice(
                            "orientation",
                            "Orientation",
                            &["oriented", "partially oriented", "disoriented"],
                        ),
                    ],
                ),
                Section::new(
                    "muscleTone",
                    "Muscle tone",
                    vec![
                        Field::number("modifiedAshworth", "Modified Ashworth", 0.0, 4.0),
                        Field::choice("affectedSide", "Affected side", &["left", "right", "bilateral"]),
                    ],
                ),
                Section::new(
                    "reflexes",
                    "Reflexes",
                    vec![
                        Field::choice("biceps", "Biceps", &reflex),
                        Field::choice("patellar", "Patellar", &reflex),
                        Field::choice("achilles", "Achilles", &reflex),
                        Field::boolean("babinski", "Babinski sign"),
                    ],
                ),
                Section::new(
                    "motorFunction",
                    "Motor function",
                    vec![
                        Field::number("mrcSumScore", "MRC sum score", 0.0, 60.0),
                        Field::text("coordination", "Coordination"),
                        Field::text("involuntaryMovements", "Involuntary movements"),
                    ],
                ),
                Section::new(
                    "sensitivity",
                    "Sensitivity",
                    vec![
                        Field::text("superficial", "Superficial"),
                        Field::text("deep", "Deep"),
                        Field::text("proprioception", "Proprioception"),
                    ],
                ),
                Section::new(
                    "balanceAndGait",
                    "Balance and gait",
                    vec![
                        Field::number("bergBalanceScale", "Berg Balance Scale", 0.0, 56.0),
                        Field::number("timedUpAndGo", "Timed Up and Go", 0.0, 300.0).unit("s"),
                        Field::text("gaitPattern", "Gait pattern"),
                        Field::boolean("usesAssistiveDevice", "Uses assistive device"),
                    ],
                ),
                Section::new(
                    "functionalIndependence",
                    "Functional independence",
                    vec![Field::number("barthelIndex", "Barthel index", 0.0, 100.0)],
                ),
                common::treatment_plan(),
            ]
        });
        &SECTIONS
    }
}
