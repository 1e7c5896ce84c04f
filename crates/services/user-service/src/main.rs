//! User Service - registers users against the seeded client directory.

use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use mockable::{Clock, DefaultClock};
use tracing::error;

use common::ServiceConfig;
use domain::ClientId;
use user_service_lib::config::{UserServiceConfig, ENV_PREFIX, SERVICE_NAME};
use user_service_lib::infra::FixedClock;
use user_service_lib::repository::ClientRepository;
use user_service_lib::service::{RegisterUser, RegistrationService};

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User registration service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a user and print whether it was accepted
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        date_of_birth: NaiveDate,
        #[arg(long)]
        client_id: i32,
        /// Evaluate as of this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// List the clients in the directory
    Clients,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    common::init_tracing(&ServiceConfig::from_env(SERVICE_NAME, ENV_PREFIX));
    let config = UserServiceConfig::from_env();

    let cli = Cli::parse();

    match cli.command {
        Commands::Register {
            first_name,
            last_name,
            email,
            date_of_birth,
            client_id,
            today,
        } => {
            let clock: Arc<dyn Clock + Send + Sync> = match today {
                Some(day) => Arc::new(FixedClock::on(day)),
                None => Arc::new(DefaultClock),
            };
            let services = user_service_lib::build_services(&config, clock)?;
            let request = RegisterUser {
                first_name,
                last_name,
                email,
                date_of_birth,
                client_id: ClientId(client_id),
            };

            match services.registration.register(&request) {
                Ok(true) => println!("accepted"),
                Ok(false) => println!("rejected"),
                Err(e) => {
                    error!(code = e.code(), "Registration failed: {}", e);
                    return Err(e.user_message().into());
                }
            }
        }
        Commands::Clients => {
            let services = user_service_lib::build_services(&config, Arc::new(DefaultClock))?;
            for client in services.clients.list()? {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    client.id, client.name, client.tier, client.email, client.address
                );
            }
        }
    }

    Ok(())
}
