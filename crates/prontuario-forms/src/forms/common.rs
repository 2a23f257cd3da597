use crate::schema::{Field, Section};

pub(crate) fn vital_signs() -> Section {
    Section::new(
        "vitalSigns",
        "Vital signs",
        vec![
            Field::number("bloodPressure.systolic", "Systolic blood pressure", 40.0, 300.0)
                .unit("mmHg"),
            Field::number("bloodPressure.diastolic", "Diastolic blood pressure", 20.0, 200.0)
                .unit("mmHg"),
            Field::number("heartRate", "Heart rate", 20.0, 250.0).unit("bpm"),
            Field::number("respiratoryRate", "Respiratory rate", 4.0, 80.0).unit("rpm"),
            Field::number("oxygenSaturation", "Oxygen saturation", 50.0, 100.0).unit("%"),
            Field::number("temperature", "Temperature", 30.0, 45.0).unit("°C"),
        ],
    )
}

pub(crate) fn treatment_plan() -> Section {
    Section::new(
        "treatmentPlan",
        "Treatment plan",
        vec![
            Field::long_text("physiotherapeuticDiagnosis", "Physiotherapeutic diagnosis")
                .required(),
            Field::long_text("goals", "Goals"),
            Field::long_text("conduct", "Conduct"),
        ],
    )
}
