use clap::{Args, Parser, Subcommand};
use eyre::Result;
use prontuario_app::config::{self, AppConfig};
use prontuario_app::pages::people::ContactChanges;
use prontuario_app::pages::register::RegisterForm;
use prontuario_app::pages::universal::UniversalChanges;
use prontuario_app::pages::{access, dashboard, login, people, records, register, universal};
use prontuario_app::state::App;
use prontuario_auth::storage::FileSessionStorage;
use prontuario_core::models::record_type::RecordType;
use prontuario_core::models::role::Role;
use prontuario_core::models::session::Credentials;

#[derive(Parser)]
#[command(name = "prontuario")]
#[command(about = "Patient and clinician medical record client")]
struct Cli {
    /// Backend URL for this invocation only
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a patient or clinician account
    Register(RegisterArgs),
    /// Log in and store the session
    Login {
        /// patient or clinician
        role: Role,
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Clear the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Show the dashboard for the logged-in role
    Dashboard {
        /// Patient ID, when the token does not carry one
        #[arg(long)]
        patient_id: Option<String>,
    },
    /// Show a patient, or edit their contact details
    Patient {
        id: String,
        #[command(flatten)]
        changes: ContactArgs,
    },
    /// Find a patient by CPF
    PatientByCpf { cpf: String },
    /// Show a clinician, or edit their contact details
    Clinician {
        id: String,
        #[command(flatten)]
        changes: ContactArgs,
    },
    /// The patient's universal record
    #[command(subcommand)]
    Prontuario(ProntuarioCommand),
    /// Specific assessment records
    #[command(subcommand)]
    Record(RecordCommand),
    /// Ask a patient for access to one of their record types
    RequestAccess {
        patient_id: String,
        /// neurofunctional, cardiorespiratory or traumaOrthopedic
        record_type: RecordType,
    },
    /// Show or change the saved configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args)]
struct RegisterArgs {
    /// patient or clinician
    role: Role,
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
    #[arg(long, default_value = "")]
    cpf: String,
    #[arg(long, default_value = "")]
    phone: String,
    /// Patients only (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    birth_date: String,
    /// Patients only
    #[arg(long, default_value = "")]
    gender: String,
    /// Clinicians only
    #[arg(long, default_value = "")]
    crefito: String,
    /// Clinicians only
    #[arg(long, default_value = "")]
    specialty: String,
}

#[derive(Args)]
struct ContactArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    phone: Option<String>,
}

#[derive(Subcommand)]
enum ProntuarioCommand {
    Show {
        patient_id: String,
    },
    Edit {
        patient_id: String,
        #[command(flatten)]
        changes: UniversalArgs,
    },
    Create {
        patient_id: String,
        #[command(flatten)]
        changes: UniversalArgs,
    },
}

#[derive(Args)]
struct UniversalArgs {
    #[arg(long)]
    profession: Option<String>,
    /// Centimetres
    #[arg(long)]
    height: Option<f64>,
    /// Kilograms
    #[arg(long)]
    weight: Option<f64>,
    /// Comma-separated
    #[arg(long)]
    allergies: Option<String>,
    /// Comma-separated
    #[arg(long)]
    medications: Option<String>,
    /// Comma-separated
    #[arg(long)]
    diagnoses: Option<String>,
    #[arg(long)]
    emergency_name: Option<String>,
    #[arg(long)]
    emergency_phone: Option<String>,
    #[arg(long)]
    emergency_relationship: Option<String>,
}

#[derive(Subcommand)]
enum RecordCommand {
    /// List the fields of a record type
    Fields { record_type: RecordType },
    /// Create a record
    New {
        record_type: RecordType,
        patient_id: String,
        /// Defaults to the logged-in clinician
        #[arg(long)]
        clinician_id: Option<String>,
        /// Field assignment, path=value (repeatable)
        #[arg(long = "set")]
        sets: Vec<String>,
    },
    /// Show a record
    View {
        patient_id: String,
        record_id: String,
        /// Skip the lookup when the type is known
        #[arg(long = "type")]
        record_type: Option<RecordType>,
    },
    /// Change fields of a record
    Edit {
        patient_id: String,
        record_id: String,
        #[arg(long = "type")]
        record_type: Option<RecordType>,
        /// Field assignment, path=value (repeatable)
        #[arg(long = "set")]
        sets: Vec<String>,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    Show,
    SetBaseUrl { url: String },
    SetTimeout { secs: u64 },
}

fn split_list(raw: Option<String>) -> Option<Vec<String>> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
}

impl From<UniversalArgs> for UniversalChanges {
    fn from(args: UniversalArgs) -> Self {
        Self {
            profession: args.profession,
            height: args.height,
            weight: args.weight,
            allergies: split_list(args.allergies),
            medications: split_list(args.medications),
            diagnoses: split_list(args.diagnoses),
            emergency_name: args.emergency_name,
            emergency_phone: args.emergency_phone,
            emergency_relationship: args.emergency_relationship,
        }
    }
}

impl From<ContactArgs> for ContactChanges {
    fn from(args: ContactArgs) -> Self {
        Self {
            name: args.name,
            phone: args.phone,
        }
    }
}

fn parse_sets(raw: &[String]) -> Result<Vec<(String, String)>> {
    raw.iter().map(|s| records::parse_assignment(s)).collect()
}

fn run_config(command: ConfigCommand, mut config: AppConfig) -> Result<String> {
    match command {
        ConfigCommand::Show => Ok(format!(
            "{}\n{}\n",
            config::config_path()?.display(),
            serde_json::to_string_pretty(&config)?
        )),
        ConfigCommand::SetBaseUrl { url } => {
            config.base_url = url.trim_end_matches('/').to_string();
            config::save_config(&config)?;
            Ok(format!("base_url = {}\n", config.base_url))
        }
        ConfigCommand::SetTimeout { secs } => {
            if secs == 0 {
                return Err(eyre::eyre!("timeout must be at least one second"));
            }
            config.timeout_secs = secs;
            config::save_config(&config)?;
            Ok(format!("timeout_secs = {secs}\n"))
        }
    }
}

fn run(command: Commands, app: &mut App<FileSessionStorage>) -> Result<String> {
    match command {
        Commands::Register(args) => {
            let mut form = RegisterForm {
                role: Some(args.role),
                name: args.name,
                email: args.email,
                password: args.password,
                cpf: args.cpf,
                phone: args.phone,
                birth_date: args.birth_date,
                gender: args.gender,
                crefito: args.crefito,
                specialty: args.specialty,
            };
            register::submit(app, &mut form)
        }
        Commands::Login {
            role,
            email,
            password,
        } => login::login(app, role, &Credentials { email, password }),
        Commands::Logout => login::logout(app),
        Commands::Whoami => Ok(login::whoami(app)),
        Commands::Dashboard { patient_id } => dashboard::show(app, patient_id.as_deref()),
        Commands::Patient { id, changes } => {
            let changes = ContactChanges::from(changes);
            if changes.is_empty() {
                people::patient_details(app, &id)
            } else {
                people::edit_patient(app, &id, &changes)
            }
        }
        Commands::PatientByCpf { cpf } => people::patient_by_cpf(app, &cpf),
        Commands::Clinician { id, changes } => {
            let changes = ContactChanges::from(changes);
            if changes.is_empty() {
                people::clinician_details(app, &id)
            } else {
                people::edit_clinician(app, &id, &changes)
            }
        }
        Commands::Prontuario(ProntuarioCommand::Show { patient_id }) => {
            universal::show(app, &patient_id)
        }
        Commands::Prontuario(ProntuarioCommand::Edit {
            patient_id,
            changes,
        }) => universal::edit(app, &patient_id, &changes.into()),
        Commands::Prontuario(ProntuarioCommand::Create {
            patient_id,
            changes,
        }) => universal::create(app, &patient_id, &changes.into()),
        Commands::Record(RecordCommand::Fields { record_type }) => {
            Ok(records::fields(record_type))
        }
        Commands::Record(RecordCommand::New {
            record_type,
            patient_id,
            clinician_id,
            sets,
        }) => records::create(
            app,
            record_type,
            &patient_id,
            clinician_id.as_deref(),
            &parse_sets(&sets)?,
        ),
        Commands::Record(RecordCommand::View {
            patient_id,
            record_id,
            record_type,
        }) => match record_type {
            Some(t) => records::view_typed(app, t, &patient_id, &record_id),
            None => records::view(app, &patient_id, &record_id),
        },
        Commands::Record(RecordCommand::Edit {
            patient_id,
            record_id,
            record_type,
            sets,
        }) => {
            let sets = parse_sets(&sets)?;
            match record_type {
                Some(t) => records::edit_typed(app, t, &patient_id, &record_id, &sets),
                None => records::edit(app, &patient_id, &record_id, &sets),
            }
        }
        Commands::RequestAccess {
            patient_id,
            record_type,
        } => access::request(app, &patient_id, record_type),
        Commands::Config(_) => Err(eyre::eyre!("config commands run without a session")),
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = config::load_or_default()?;

    let outcome = match cli.command {
        Commands::Config(command) => run_config(command, config),
        command => {
            if let Some(url) = cli.base_url {
                config.base_url = url;
            }
            App::from_config(&config).and_then(|mut app| run(command, &mut app))
        }
    };

    match outcome {
        Ok(text) => {
            print!("{text}");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
