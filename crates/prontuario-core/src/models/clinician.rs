use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clinician {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub cpf: Option<String>,
    /// Professional council registration number.
    #[serde(default)]
    pub crefito: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Registration payload for `POST /clinicians`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClinician {
    pub name: String,
    pub email: String,
    pub password: String,
    pub cpf: String,
    pub crefito: String,
    pub specialty: String,
    pub phone: String,
}
