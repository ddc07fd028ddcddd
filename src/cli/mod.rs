//! CLI module for the Anagha command-line client.
//!
//! Provides subcommands for talking to a running booking backend:
//! - `login` / `register` / `logout` / `whoami` - Manage the stored session
//! - `hospitals`, `doctors`, `appointments`, `operations`, `payments` - Resource commands
//! - `pricing` - Show static plans or manage backend pricing
//! - `pharma` - Fill in the pharma meeting request form
//! - `config check` - Validate configuration file

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::client::{ApiClient, ClientError};
use crate::config::Config;
use crate::models::{
    Appointment, BookAppointmentRequest, BookOperationRequest, Hospital, Operation, PaymentOrder,
    PaymentStatus, PricingConfig, RegisterRequest, User,
};
use crate::pages::pharma::{DOCTORS, HOSPITALS, PURPOSES, SUBMIT_DELAY};
use crate::pages::pricing::PRICING_FOOTNOTE;
use crate::pages::{find_plan, format_inr, plans, select_plan, PharmaBookingForm};
use crate::session::{FileTokenStore, MemoryTokenStore, Session, TokenStore};
use crate::slots::{
    format_date, format_time_slot, EVENING_LABEL, EVENING_SLOTS, MORNING_LABEL, MORNING_SLOTS,
};
use crate::validation::{validate_required, ValidationErrorBuilder, ValidationErrors};

/// CLI arguments structure
#[derive(Parser, Debug)]
#[command(name = "anagha")]
#[command(author, version, about = "Command-line client for the Anagha Health booking backend", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "anagha.toml")]
    pub config: PathBuf,

    /// Override log level
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// API URL to connect to (overrides the config file)
    #[arg(long, env = "ANAGHA_API_URL")]
    pub api_url: Option<String>,

    /// Use this token for one invocation without storing it
    #[arg(long, env = "ANAGHA_TOKEN")]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in with mobile number and password
    Login {
        #[arg(short, long)]
        mobile: String,
        #[arg(short, long, env = "ANAGHA_PASSWORD")]
        password: String,
    },

    /// Create an account and log in
    Register(RegisterArgs),

    /// Forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Hospital commands
    #[command(subcommand)]
    Hospitals(HospitalsCommands),

    /// List doctors
    Doctors,

    /// Appointment commands
    #[command(subcommand)]
    Appointments(AppointmentsCommands),

    /// Operation booking commands
    #[command(subcommand)]
    Operations(OperationsCommands),

    /// Payment commands
    #[command(subcommand)]
    Payments(PaymentsCommands),

    /// Pricing plans
    #[command(subcommand)]
    Pricing(PricingCommands),

    /// Request a meeting with a doctor as a pharma representative
    Pharma(PharmaArgs),

    /// Show bookable time slots
    Slots,

    /// Configuration management commands
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub mobile: String,
    #[arg(long, env = "ANAGHA_PASSWORD")]
    pub password: String,
    /// Account role, e.g. patient, doctor or pharma
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub specialty: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum HospitalsCommands {
    /// List approved hospitals
    Approved,
    /// List all hospitals
    List {
        /// Only hospitals in this status (pending, approved, rejected)
        #[arg(long)]
        status: Option<String>,
    },
    /// Show one hospital
    Show { id: i64 },
    /// Register a hospital from a JSON payload file
    Register { file: PathBuf },
    /// Approve a pending registration
    Approve { id: i64 },
    /// Reject a pending registration
    Reject { id: i64 },
    /// Show UPI payment identifiers
    PaymentInfo {
        #[arg(long)]
        hospital_id: Option<i64>,
    },
}

#[derive(Subcommand, Debug)]
pub enum AppointmentsCommands {
    /// Book an appointment
    Book {
        #[arg(long)]
        doctor_id: i64,
        #[arg(long)]
        date: String,
        #[arg(long)]
        time_slot: String,
        #[arg(long)]
        reason: Option<String>,
    },
    /// List my appointments
    Mine,
    /// List appointments assigned to me as a doctor
    Doctor,
    /// Show free slots for a doctor on a date
    Slots {
        #[arg(long)]
        doctor_id: i64,
        #[arg(long)]
        date: String,
    },
    Confirm { id: i64 },
    Cancel { id: i64 },
    /// Mark an appointment as visited
    Visited { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum OperationsCommands {
    /// Book an operation
    Book {
        #[arg(long)]
        hospital_id: i64,
        #[arg(long)]
        doctor_id: i64,
        #[arg(long)]
        date: String,
        #[arg(long)]
        specialty: String,
        #[arg(long)]
        notes: Option<String>,
    },
    Mine,
    Doctor,
    /// List my operations in one specialty
    BySpecialty { specialty: String },
    Confirm { id: i64 },
    Cancel { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum PaymentsCommands {
    /// Create a payment order
    Create {
        #[arg(long)]
        amount: u64,
        #[arg(long)]
        hospital_id: Option<i64>,
    },
    /// Create the installation-fee order for a hospital plan
    HospitalOrder {
        /// Plan name
        #[arg(long)]
        plan: String,
        /// Amount in INR (defaults to the plan's installation price)
        #[arg(long)]
        amount: Option<u64>,
    },
    Verify { id: i64 },
    Status { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum PricingCommands {
    /// Show the published plans
    Plans,
    /// Select a plan and print the registration link
    Select { name: String },
    /// Show backend pricing (admin)
    Get,
    /// Show backend pricing used during registration
    Public,
    /// Replace backend pricing from a JSON file (admin)
    Update { file: PathBuf },
}

#[derive(Args, Debug)]
pub struct PharmaArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub company: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    /// Products to present (up to four)
    #[arg(long = "product", num_args = 1..=4)]
    pub products: Vec<String>,
    #[arg(long, default_value = "")]
    pub date: String,
    #[arg(long, default_value = "")]
    pub time: String,
    #[arg(long, default_value = "")]
    pub doctor: String,
    #[arg(long, default_value = "")]
    pub hospital: String,
    #[arg(long, default_value = "")]
    pub purpose: String,
    #[arg(long, default_value = "")]
    pub notes: String,
}

impl PharmaArgs {
    pub fn to_form(&self) -> PharmaBookingForm {
        let product = |i: usize| self.products.get(i).cloned().unwrap_or_default();
        PharmaBookingForm {
            representative_name: self.name.clone(),
            company_name: self.company.clone(),
            phone: self.phone.clone(),
            product1: product(0),
            product2: product(1),
            product3: product(2),
            product4: product(3),
            date: self.date.clone(),
            time: self.time.clone(),
            doctor: self.doctor.clone(),
            hospital: self.hospital.clone(),
            purpose: self.purpose.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Validate configuration file
    Check,
}

// ============================================================================
// CLI Command Handlers
// ============================================================================

/// Create an API client for this invocation.
///
/// A `--token` is held in memory only; otherwise the token file in the
/// configured data directory is used.
pub fn create_client(cli: &Cli, config: &Config) -> Result<ApiClient> {
    let mut client_config = config.client.clone();
    if let Some(api_url) = &cli.api_url {
        client_config.api_url = api_url.clone();
    }

    let store: Arc<dyn TokenStore> = match &cli.token {
        Some(token) => Arc::new(MemoryTokenStore::with_token(token.clone())),
        None => Arc::new(FileTokenStore::new(&config.session.data_dir)),
    };

    ApiClient::from_config(&client_config, Session::new(store))
        .context("Failed to create API client")
}

/// Turn a client error into a CLI error, pointing at login after a 401.
fn api_error(err: ClientError) -> anyhow::Error {
    match err.redirect() {
        Some(next) => anyhow::anyhow!(
            "{} (authentication required, continue at {}; run `anagha login` first)",
            err,
            next
        ),
        None => anyhow::Error::new(err),
    }
}

/// Run a CLI command
pub async fn run_command(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        Commands::Slots => {
            cmd_slots();
            Ok(())
        }
        Commands::Pharma(args) => cmd_pharma(args).await,
        Commands::Config(ConfigCommands::Check) => cmd_config_check(&cli.config),
        Commands::Pricing(PricingCommands::Plans) => {
            cmd_pricing_plans();
            Ok(())
        }
        Commands::Pricing(PricingCommands::Select { name }) => cmd_pricing_select(name),
        command => {
            let client = create_client(cli, config)?;
            run_api_command(&client, command).await
        }
    }
}

async fn run_api_command(client: &ApiClient, command: &Commands) -> Result<()> {
    match command {
        Commands::Login { mobile, password } => cmd_login(client, mobile, password).await,
        Commands::Register(args) => cmd_register(client, args).await,
        Commands::Logout => cmd_logout(client),
        Commands::Whoami => cmd_whoami(client).await,
        Commands::Hospitals(cmd) => cmd_hospitals(client, cmd).await,
        Commands::Doctors => cmd_doctors(client).await,
        Commands::Appointments(cmd) => cmd_appointments(client, cmd).await,
        Commands::Operations(cmd) => cmd_operations(client, cmd).await,
        Commands::Payments(cmd) => cmd_payments(client, cmd).await,
        Commands::Pricing(cmd) => cmd_pricing_remote(client, cmd).await,
        Commands::Slots | Commands::Pharma(_) | Commands::Config(_) => Ok(()),
    }
}

async fn cmd_login(client: &ApiClient, mobile: &str, password: &str) -> Result<()> {
    let user = client
        .auth_helper()
        .login(mobile, password)
        .await
        .map_err(api_error)?;

    println!("Logged in as {} ({})", user.name, user.role);
    Ok(())
}

async fn cmd_register(client: &ApiClient, args: &RegisterArgs) -> Result<()> {
    let request = RegisterRequest {
        name: args.name.clone(),
        mobile: args.mobile.clone(),
        password: args.password.clone(),
        role: args.role.clone(),
        email: args.email.clone(),
        city: args.city.clone(),
        state: args.state.clone(),
        specialty: args.specialty.clone(),
    };

    let user = client
        .auth_helper()
        .register(&request)
        .await
        .map_err(api_error)?;

    println!("Registered and logged in as {} ({})", user.name, user.role);
    Ok(())
}

fn cmd_logout(client: &ApiClient) -> Result<()> {
    let next = client.auth_helper().logout().map_err(api_error)?;
    println!("Logged out. Continue at {}", next);
    Ok(())
}

async fn cmd_whoami(client: &ApiClient) -> Result<()> {
    let auth = client.auth_helper();
    if !auth.is_authenticated() {
        println!("Not logged in.");
        return Ok(());
    }

    match auth.current_user().await {
        Some(user) => {
            print_user(&user);
            Ok(())
        }
        None => {
            println!("Session is no longer valid and has been cleared. Run `anagha login`.");
            Ok(())
        }
    }
}

fn print_user(user: &User) {
    println!();
    println!("ID:        {}", user.id);
    println!("Name:      {}", user.name);
    println!("Mobile:    {}", user.mobile);
    println!("Role:      {}", user.role);
    if let Some(email) = &user.email {
        println!("Email:     {}", email);
    }
    if let Some(specialty) = &user.specialty {
        println!("Specialty: {}", specialty);
    }
    match (&user.city, &user.state) {
        (Some(city), Some(state)) => println!("Location:  {}, {}", city, state),
        (Some(place), None) | (None, Some(place)) => println!("Location:  {}", place),
        (None, None) => {}
    }
    println!();
}

async fn cmd_hospitals(client: &ApiClient, command: &HospitalsCommands) -> Result<()> {
    let api = client.hospitals();
    match command {
        HospitalsCommands::Approved => {
            let hospitals = api.approved().await.map_err(api_error)?;
            print_hospitals(&hospitals);
        }
        HospitalsCommands::List { status } => {
            let hospitals = api.list(status.as_deref()).await.map_err(api_error)?;
            print_hospitals(&hospitals);
        }
        HospitalsCommands::Show { id } => {
            let hospital = api.get(*id).await.map_err(api_error)?;
            println!();
            println!("=== Hospital: {} ===", hospital.display_name());
            println!();
            println!("ID:      {}", hospital.id);
            println!("Status:  {}", hospital.status.as_deref().unwrap_or("-"));
            println!("Email:   {}", hospital.email.as_deref().unwrap_or("-"));
            println!("Mobile:  {}", hospital.mobile.as_deref().unwrap_or("-"));
            println!("City:    {}", hospital.city.as_deref().unwrap_or("-"));
            println!("State:   {}", hospital.state.as_deref().unwrap_or("-"));
            println!();
        }
        HospitalsCommands::Register { file } => {
            let payload = read_json_file(file)?;
            let hospital = api.register(&payload).await.map_err(api_error)?;
            println!(
                "Registration submitted for {} (ID {}). Status: {}",
                hospital.display_name(),
                hospital.id,
                hospital.status.as_deref().unwrap_or("pending")
            );
        }
        HospitalsCommands::Approve { id } => {
            let decision = api.approve(*id).await.map_err(api_error)?;
            println!(
                "{}",
                decision
                    .message
                    .unwrap_or_else(|| format!("Hospital {} approved", id))
            );
        }
        HospitalsCommands::Reject { id } => {
            let decision = api.reject(*id).await.map_err(api_error)?;
            println!(
                "{}",
                decision
                    .message
                    .unwrap_or_else(|| format!("Hospital {} rejected", id))
            );
        }
        HospitalsCommands::PaymentInfo { hospital_id } => {
            let info = api.payment_info(*hospital_id).await.map_err(api_error)?;
            let fallback = info.upi_id.as_str();
            println!();
            println!("UPI ID:      {}", info.upi_id);
            println!("Google Pay:  {}", info.gpay_upi_id.as_deref().unwrap_or(fallback));
            println!("PhonePe:     {}", info.phonepay_upi_id.as_deref().unwrap_or(fallback));
            println!("Paytm:       {}", info.paytm_upi_id.as_deref().unwrap_or(fallback));
            println!("BHIM UPI:    {}", info.bhim_upi_id.as_deref().unwrap_or(fallback));
            println!();
        }
    }
    Ok(())
}

fn print_hospitals(hospitals: &[Hospital]) {
    if hospitals.is_empty() {
        println!("No hospitals found.");
        return;
    }

    println!();
    println!(
        "{:<6}  {:<32}  {:<20}  {:<10}",
        "ID", "NAME", "CITY", "STATUS"
    );
    println!("{}", "-".repeat(74));
    for hospital in hospitals {
        println!(
            "{:<6}  {:<32}  {:<20}  {:<10}",
            hospital.id,
            truncate(hospital.display_name(), 32),
            truncate(hospital.city.as_deref().unwrap_or("-"), 20),
            hospital.status.as_deref().unwrap_or("-")
        );
    }
    println!();
}

async fn cmd_doctors(client: &ApiClient) -> Result<()> {
    let doctors = client.doctors().list().await.map_err(api_error)?;
    if doctors.is_empty() {
        println!("No doctors found.");
        return Ok(());
    }

    println!();
    println!("{:<6}  {:<28}  {:<20}  {:<14}", "ID", "NAME", "SPECIALTY", "MOBILE");
    println!("{}", "-".repeat(74));
    for doctor in doctors {
        println!(
            "{:<6}  {:<28}  {:<20}  {:<14}",
            doctor.id,
            truncate(&doctor.name, 28),
            truncate(doctor.specialty.as_deref().unwrap_or("-"), 20),
            doctor.mobile
        );
    }
    println!();
    Ok(())
}

async fn cmd_appointments(client: &ApiClient, command: &AppointmentsCommands) -> Result<()> {
    let api = client.appointments();
    match command {
        AppointmentsCommands::Book {
            doctor_id,
            date,
            time_slot,
            reason,
        } => {
            let mut errors = ValidationErrorBuilder::new();
            errors
                .check("date", validate_required(date, "Date is required"))
                .check("time_slot", validate_required(time_slot, "Time slot is required"));
            errors.finish().map_err(validation_error)?;

            let request = BookAppointmentRequest {
                doctor_id: *doctor_id,
                date: date.clone(),
                time_slot: time_slot.clone(),
                reason: reason.clone(),
            };
            let appointment = api.book(&request).await.map_err(api_error)?;
            println!(
                "Appointment {} booked for {} at {}",
                appointment.id,
                format_date(appointment.date.as_deref().unwrap_or(date)),
                format_time_slot(appointment.time_slot.as_deref().unwrap_or(time_slot))
            );
        }
        AppointmentsCommands::Mine => {
            let appointments = api.mine().await.map_err(api_error)?;
            print_appointments(&appointments);
        }
        AppointmentsCommands::Doctor => {
            let appointments = api.for_doctor().await.map_err(api_error)?;
            print_appointments(&appointments);
        }
        AppointmentsCommands::Slots { doctor_id, date } => {
            let slots = api
                .available_slots(*doctor_id, date)
                .await
                .map_err(api_error)?;
            println!();
            println!("{} on {}", slots.doctor_name, format_date(&slots.date));
            println!();
            if slots.available_slots.is_empty() {
                println!("No free slots.");
            } else {
                let free: Vec<String> = slots
                    .available_slots
                    .iter()
                    .map(|s| format_time_slot(s))
                    .collect();
                println!("Available: {}", free.join(", "));
            }
            if !slots.booked_slots.is_empty() {
                let booked: Vec<String> = slots
                    .booked_slots
                    .iter()
                    .map(|s| format_time_slot(s))
                    .collect();
                println!("Booked:    {}", booked.join(", "));
            }
            println!();
        }
        AppointmentsCommands::Confirm { id } => {
            let resp = api.confirm(*id).await.map_err(api_error)?;
            print_action(resp.message, &format!("Appointment {} confirmed", id));
        }
        AppointmentsCommands::Cancel { id } => {
            let resp = api.cancel(*id).await.map_err(api_error)?;
            print_action(resp.message, &format!("Appointment {} cancelled", id));
        }
        AppointmentsCommands::Visited { id } => {
            let resp = api.mark_visited(*id).await.map_err(api_error)?;
            print_action(resp.message, &format!("Appointment {} marked as visited", id));
        }
    }
    Ok(())
}

fn print_appointments(appointments: &[Appointment]) {
    if appointments.is_empty() {
        println!("No appointments found.");
        return;
    }

    println!();
    println!(
        "{:<6}  {:<20}  {:<10}  {:<24}  {:<10}",
        "ID", "DATE", "TIME", "WITH", "STATUS"
    );
    println!("{}", "-".repeat(78));
    for appointment in appointments {
        let with = appointment
            .doctor_name
            .as_deref()
            .or(appointment.patient_name.as_deref())
            .unwrap_or("-");
        println!(
            "{:<6}  {:<20}  {:<10}  {:<24}  {:<10}",
            appointment.id,
            appointment
                .date
                .as_deref()
                .map(format_date)
                .unwrap_or_else(|| "-".to_string()),
            appointment
                .time_slot
                .as_deref()
                .map(format_time_slot)
                .unwrap_or_else(|| "-".to_string()),
            truncate(with, 24),
            appointment.status.as_deref().unwrap_or("-")
        );
    }
    println!();
}

async fn cmd_operations(client: &ApiClient, command: &OperationsCommands) -> Result<()> {
    let api = client.operations();
    match command {
        OperationsCommands::Book {
            hospital_id,
            doctor_id,
            date,
            specialty,
            notes,
        } => {
            let mut errors = ValidationErrorBuilder::new();
            errors
                .check("date", validate_required(date, "Date is required"))
                .check("specialty", validate_required(specialty, "Specialty is required"));
            errors.finish().map_err(validation_error)?;

            let request = BookOperationRequest {
                hospital_id: *hospital_id,
                doctor_id: *doctor_id,
                date: date.clone(),
                specialty: specialty.clone(),
                notes: notes.clone(),
            };
            let operation = api.book(&request).await.map_err(api_error)?;
            println!(
                "Operation {} booked for {} ({})",
                operation.id,
                format_date(operation.date.as_deref().unwrap_or(date)),
                operation.specialty.as_deref().unwrap_or(specialty)
            );
        }
        OperationsCommands::Mine => {
            let operations = api.mine().await.map_err(api_error)?;
            print_operations(&operations);
        }
        OperationsCommands::Doctor => {
            let operations = api.for_doctor().await.map_err(api_error)?;
            print_operations(&operations);
        }
        OperationsCommands::BySpecialty { specialty } => {
            let operations = api.by_specialty(specialty).await.map_err(api_error)?;
            print_operations(&operations);
        }
        OperationsCommands::Confirm { id } => {
            let resp = api.confirm(*id).await.map_err(api_error)?;
            print_action(resp.message, &format!("Operation {} confirmed", id));
        }
        OperationsCommands::Cancel { id } => {
            let resp = api.cancel(*id).await.map_err(api_error)?;
            print_action(resp.message, &format!("Operation {} cancelled", id));
        }
    }
    Ok(())
}

fn print_operations(operations: &[Operation]) {
    if operations.is_empty() {
        println!("No operations found.");
        return;
    }

    println!();
    println!(
        "{:<6}  {:<20}  {:<20}  {:<24}  {:<10}",
        "ID", "DATE", "SPECIALTY", "WITH", "STATUS"
    );
    println!("{}", "-".repeat(88));
    for operation in operations {
        let with = operation
            .doctor_name
            .as_deref()
            .or(operation.patient_name.as_deref())
            .unwrap_or("-");
        println!(
            "{:<6}  {:<20}  {:<20}  {:<24}  {:<10}",
            operation.id,
            operation
                .date
                .as_deref()
                .map(format_date)
                .unwrap_or_else(|| "-".to_string()),
            truncate(operation.specialty.as_deref().unwrap_or("-"), 20),
            truncate(with, 24),
            operation.status.as_deref().unwrap_or("-")
        );
    }
    println!();
}

async fn cmd_payments(client: &ApiClient, command: &PaymentsCommands) -> Result<()> {
    let api = client.payments();
    match command {
        PaymentsCommands::Create {
            amount,
            hospital_id,
        } => {
            let order = api
                .create_order(*amount, *hospital_id)
                .await
                .map_err(api_error)?;
            print_order(&order);
        }
        PaymentsCommands::HospitalOrder { plan, amount } => {
            let (plan_name, amount) = match (find_plan(plan), amount) {
                (_, Some(amount)) => (plan.clone(), *amount),
                (Some(found), None) => (found.name.to_string(), found.installation_price),
                (None, None) => anyhow::bail!(
                    "Unknown plan '{}'. Pass --amount or use one of: {}",
                    plan,
                    plans().iter().map(|p| p.name).collect::<Vec<_>>().join(", ")
                ),
            };
            let order = api
                .create_hospital_registration_order(&plan_name, amount)
                .await
                .map_err(api_error)?;
            print_order(&order);
        }
        PaymentsCommands::Verify { id } => {
            let status = api.verify(*id).await.map_err(api_error)?;
            print_payment_status(*id, &status);
        }
        PaymentsCommands::Status { id } => {
            let status = api.status(*id).await.map_err(api_error)?;
            print_payment_status(*id, &status);
        }
    }
    Ok(())
}

fn print_order(order: &PaymentOrder) {
    println!();
    println!(
        "Payment ID:     {}",
        order
            .payment_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!(
        "Transaction:    {}",
        order.transaction_id.as_deref().unwrap_or("-")
    );
    println!(
        "Amount:         {}",
        order
            .amount
            .as_ref()
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!("Status:         {}", order.status.as_deref().unwrap_or("-"));
    if let Some(upi_url) = &order.upi_url {
        println!("UPI link:       {}", upi_url);
    }
    println!();
}

fn print_payment_status(id: i64, status: &PaymentStatus) {
    println!(
        "Payment {}: {}",
        status.payment_id.unwrap_or(id),
        status
            .status
            .as_deref()
            .or(status.message.as_deref())
            .unwrap_or("unknown")
    );
}

fn cmd_pricing_plans() {
    println!();
    println!("=== Pricing Plans ===");
    for plan in plans() {
        println!();
        let badge = if plan.popular { "  [Most Popular]" } else { "" };
        println!("{} - {}{}", plan.name, plan.description, badge);
        println!(
            "  {} /installation + {} /month maintenance",
            format_inr(plan.installation_price),
            format_inr(plan.monthly_price)
        );
        for feature in plan.features {
            println!("  - {}", feature);
        }
        println!("  [{}]", plan.cta);
    }
    println!();
    println!("{}", PRICING_FOOTNOTE);
    println!();
}

fn cmd_pricing_select(name: &str) -> Result<()> {
    let plan = find_plan(name).with_context(|| {
        format!(
            "Unknown plan '{}'. Available plans: {}",
            name,
            plans().iter().map(|p| p.name).collect::<Vec<_>>().join(", ")
        )
    })?;
    println!("{}", select_plan(plan));
    Ok(())
}

async fn cmd_pricing_remote(client: &ApiClient, command: &PricingCommands) -> Result<()> {
    let api = client.admin();
    match command {
        PricingCommands::Get => {
            let pricing = api.pricing().await.map_err(api_error)?;
            print_pricing(&pricing);
        }
        PricingCommands::Public => {
            let pricing = api.public_pricing().await.map_err(api_error)?;
            print_pricing(&pricing);
        }
        PricingCommands::Update { file } => {
            let pricing: PricingConfig = serde_json::from_value(read_json_file(file)?)
                .with_context(|| format!("Invalid pricing file: {}", file.display()))?;
            let resp = api.update_pricing(&pricing).await.map_err(api_error)?;
            println!(
                "{}",
                resp.message
                    .unwrap_or_else(|| "Pricing updated".to_string())
            );
        }
        PricingCommands::Plans | PricingCommands::Select { .. } => {}
    }
    Ok(())
}

fn print_pricing(pricing: &PricingConfig) {
    let symbol = pricing.currency_symbol.as_deref().unwrap_or("₹");
    println!();
    println!(
        "{:<16}  {:>10}  {:<8}  {}",
        "PLAN", "PRICE", "PERIOD", "DESCRIPTION"
    );
    println!("{}", "-".repeat(78));
    for tier in &pricing.plans {
        println!(
            "{:<16}  {:>10}  {:<8}  {}",
            truncate(&tier.name, 16),
            format!("{}{}", symbol, tier.price),
            tier.period.as_deref().unwrap_or("-"),
            tier.description.as_deref().unwrap_or("")
        );
    }
    if let Some(discount) = pricing.annual_discount {
        println!();
        println!("Annual discount: {}%", discount);
    }
    println!();
}

async fn cmd_pharma(args: &PharmaArgs) -> Result<()> {
    let form = args.to_form();
    match form.submit(SUBMIT_DELAY).await {
        Ok(notification) => {
            println!();
            println!("[OK] {}", notification.title);
            println!("     {}", notification.description);
            println!();
            Ok(())
        }
        Err(errors) => {
            print_validation_errors(&errors);
            println!("Doctors:    {}", DOCTORS.iter().map(|d| d.name).collect::<Vec<_>>().join(", "));
            println!("Hospitals:  {}", HOSPITALS.join(", "));
            println!("Purposes:   {}", PURPOSES.join(", "));
            println!();
            anyhow::bail!("Meeting request is incomplete");
        }
    }
}

fn cmd_slots() {
    println!();
    println!("{}", MORNING_LABEL);
    let morning: Vec<String> = MORNING_SLOTS.iter().map(|s| format_time_slot(s)).collect();
    println!("  {}", morning.join("  "));
    println!();
    println!("{}", EVENING_LABEL);
    let evening: Vec<String> = EVENING_SLOTS.iter().map(|s| format_time_slot(s)).collect();
    println!("  {}", evening.join("  "));
    println!();
}

/// Validate configuration file
fn cmd_config_check(config_path: &Path) -> Result<()> {
    println!("Checking configuration file: {}", config_path.display());
    println!();

    if !config_path.exists() {
        println!(
            "[!!] Configuration file not found: {}",
            config_path.display()
        );
        println!();
        println!("Defaults will be used.");
        return Ok(());
    }

    match Config::load(config_path) {
        Ok(config) => {
            println!("[OK] Configuration file is valid!");
            println!();
            println!("=== Configuration Summary ===");
            println!();
            println!("Client:");
            println!("  API URL:      {}", config.client.api_url);
            println!(
                "  Timeout:      {}",
                config
                    .client
                    .request_timeout_secs
                    .map(|s| format!("{}s", s))
                    .unwrap_or_else(|| "none".to_string())
            );
            println!("  User-Agent:   {}", config.client.user_agent);
            println!();
            println!("Session:");
            println!("  Data Dir:     {}", config.session.data_dir.display());
            println!();
            println!("Logging:");
            println!("  Level:        {}", config.logging.level);
            println!();

            let mut warnings = Vec::new();
            if config.client.api_url.starts_with("http://")
                && !config.client.api_url.contains("localhost")
                && !config.client.api_url.contains("127.0.0.1")
            {
                warnings.push("API URL uses plain HTTP - the bearer token is sent unencrypted");
            }
            if !warnings.is_empty() {
                println!("Warnings:");
                for warning in warnings {
                    println!("  [!] {}", warning);
                }
                println!();
            }

            Ok(())
        }
        Err(e) => {
            println!("[!!] Configuration file is invalid!");
            println!();
            println!("Error: {:#}", e);
            println!();
            anyhow::bail!("Invalid configuration file");
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn read_json_file(path: &Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn print_action(message: Option<String>, fallback: &str) {
    println!("{}", message.unwrap_or_else(|| fallback.to_string()));
}

fn print_validation_errors(errors: &ValidationErrors) {
    println!();
    println!("[!!] Please fix the following:");
    for field in errors.fields() {
        if let Some(message) = errors.first(field) {
            println!("  {:<20} {}", field, message);
        }
    }
    println!();
}

fn validation_error(errors: ValidationErrors) -> anyhow::Error {
    print_validation_errors(&errors);
    anyhow::Error::new(errors)
}

/// Truncate a string to max length with ellipsis
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Apollo", 10), "Apollo");
        assert_eq!(truncate("Anagha City Hospital", 10), "Anagha ...");
    }

    #[test]
    fn test_parse_pharma_args() {
        let cli = Cli::try_parse_from([
            "anagha",
            "pharma",
            "--name",
            "Ravi Menon",
            "--company",
            "Sun Pharma",
            "--phone",
            "9876543210",
            "--product",
            "Atorvastatin",
            "Metformin",
            "--date",
            "2025-02-14",
            "--time",
            "11:00",
            "--doctor",
            "Dr. Priya Patel",
            "--hospital",
            "Apollo Healthcare",
            "--purpose",
            "General Meeting",
        ])
        .unwrap();

        let Commands::Pharma(args) = cli.command else {
            panic!("expected pharma command");
        };
        let form = args.to_form();
        assert_eq!(form.product1, "Atorvastatin");
        assert_eq!(form.product2, "Metformin");
        assert!(form.product3.is_empty());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_api_url_flag_overrides_config() {
        let cli = Cli::try_parse_from([
            "anagha",
            "--api-url",
            "http://10.0.0.5:3000",
            "--token",
            "abc",
            "doctors",
        ])
        .unwrap();
        let client = create_client(&cli, &Config::default()).unwrap();
        assert_eq!(client.base_url(), "http://10.0.0.5:3000");
        assert!(client.session().is_authenticated());
    }

    #[test]
    fn test_api_error_adds_login_hint_for_401() {
        let err = api_error(ClientError::Http {
            status: 401,
            message: "Could not validate credentials".to_string(),
        });
        let text = err.to_string();
        assert!(text.contains("Could not validate credentials"));
        assert!(text.contains("/login"));

        let err = api_error(ClientError::Http {
            status: 404,
            message: "Doctor not found".to_string(),
        });
        assert_eq!(err.to_string(), "Doctor not found");
    }
}
