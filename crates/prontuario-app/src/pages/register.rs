use prontuario_api::endpoints::auth::Registration;
use prontuario_auth::flows;
use prontuario_auth::storage::SessionStorage;
use prontuario_core::models::clinician::NewClinician;
use prontuario_core::models::patient::NewPatient;
use prontuario_core::models::role::Role;

use crate::navigation::Route;
use crate::state::App;

/// Sign-up form state. Fields that do not apply to the chosen role are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub role: Option<Role>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub cpf: String,
    pub phone: String,
    pub birth_date: String,
    pub gender: String,
    pub crefito: String,
    pub specialty: String,
}

impl RegisterForm {
    pub fn registration(&self) -> eyre::Result<Registration> {
        let role = self.role.ok_or_else(|| eyre::eyre!("choose a role: patient or clinician"))?;
        for (label, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("password", &self.password),
        ] {
            if value.trim().is_empty() {
                return Err(eyre::eyre!("{label} is required"));
            }
        }

        Ok(match role {
            Role::Patient => Registration::Patient(NewPatient {
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                password: self.password.clone(),
                cpf: self.cpf.trim().to_string(),
                phone: self.phone.trim().to_string(),
                birth_date: self.birth_date.trim().to_string(),
                gender: self.gender.trim().to_string(),
            }),
            Role::Clinician => Registration::Clinician(NewClinician {
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                password: self.password.clone(),
                cpf: self.cpf.trim().to_string(),
                crefito: self.crefito.trim().to_string(),
                specialty: self.specialty.trim().to_string(),
                phone: self.phone.trim().to_string(),
            }),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Create the account. On success the form is cleared and navigation
/// moves to the login route; on failure the form is left as it was.
pub fn submit<S: SessionStorage>(app: &mut App<S>, form: &mut RegisterForm) -> eyre::Result<String> {
    app.open(Route::Register);
    let registration = form.registration()?;
    flows::register(&app.client, &registration)?;

    let email = registration.email().to_string();
    form.clear();
    app.open(Route::Login);
    Ok(format!(
        "Account created for {email} ({}). Log in to continue.\n",
        registration.role()
    ))
}
