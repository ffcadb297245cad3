use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use client::{Resource, ShopClient};
use common::types::{
    CustomerInput, RecordId, ServiceInput, ServiceStatus, VehicleInput, VehicleStatus,
};
use dotenvy::dotenv;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::debug;

#[derive(Parser)]
#[command(name = "shopctl", version, about = "Command-line client for the shop API")]
struct Cli {
    /// API base URL (defaults to client.base_url from config.toml)
    #[arg(long, env = "SHOP_API_URL", global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the API is up
    Health,
    /// Manage customers
    Customers {
        #[command(subcommand)]
        action: CustomerAction,
    },
    /// Manage vehicles
    Vehicles {
        #[command(subcommand)]
        action: VehicleAction,
    },
    /// Manage service jobs
    Services {
        #[command(subcommand)]
        action: ServiceAction,
    },
}

#[derive(Subcommand)]
enum CustomerAction {
    List,
    Get { id: RecordId },
    Create(CustomerArgs),
    /// Replace every field of a customer
    Update {
        id: RecordId,
        #[command(flatten)]
        fields: CustomerArgs,
    },
    /// Delete a customer with their vehicles and services
    Delete { id: RecordId },
}

#[derive(Args)]
struct CustomerArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
}

impl From<CustomerArgs> for CustomerInput {
    fn from(a: CustomerArgs) -> Self {
        CustomerInput { name: a.name, email: a.email, phone: a.phone }
    }
}

#[derive(Subcommand)]
enum VehicleAction {
    List,
    Get { id: RecordId },
    Create(VehicleArgs),
    /// Replace every field of a vehicle
    Update {
        id: RecordId,
        #[command(flatten)]
        fields: VehicleArgs,
    },
    Delete { id: RecordId },
}

#[derive(Args)]
struct VehicleArgs {
    #[arg(long)]
    make: String,
    #[arg(long)]
    model: String,
    #[arg(long)]
    year: i32,
    #[arg(long)]
    price: f64,
    /// available, sold, reserved or service
    #[arg(long, default_value_t = VehicleStatus::Available)]
    status: VehicleStatus,
    #[arg(long)]
    customer_id: Option<RecordId>,
}

impl From<VehicleArgs> for VehicleInput {
    fn from(a: VehicleArgs) -> Self {
        VehicleInput {
            make: a.make,
            model: a.model,
            year: a.year,
            price: a.price,
            status: a.status,
            customer_id: a.customer_id,
        }
    }
}

#[derive(Subcommand)]
enum ServiceAction {
    List,
    Get { id: RecordId },
    Create(ServiceArgs),
    /// Replace every field of a service job
    Update {
        id: RecordId,
        #[command(flatten)]
        fields: ServiceArgs,
    },
    Delete { id: RecordId },
}

#[derive(Args)]
struct ServiceArgs {
    #[arg(long)]
    vehicle_id: RecordId,
    #[arg(long)]
    description: String,
    #[arg(long)]
    cost: f64,
    /// YYYY-MM-DD
    #[arg(long)]
    date: NaiveDate,
    /// pending, in-progress, completed or cancelled
    #[arg(long, default_value_t = ServiceStatus::Pending)]
    status: ServiceStatus,
}

impl From<ServiceArgs> for ServiceInput {
    fn from(a: ServiceArgs) -> Self {
        ServiceInput {
            vehicle_id: a.vehicle_id,
            description: a.description,
            cost: a.cost,
            date: a.date,
            status: a.status,
        }
    }
}

/// One resource call, independent of the record kind.
enum Op<I> {
    List,
    Get(RecordId),
    Create(I),
    Update(RecordId, I),
    Delete(RecordId),
}

impl From<CustomerAction> for Op<CustomerInput> {
    fn from(a: CustomerAction) -> Self {
        match a {
            CustomerAction::List => Op::List,
            CustomerAction::Get { id } => Op::Get(id),
            CustomerAction::Create(fields) => Op::Create(fields.into()),
            CustomerAction::Update { id, fields } => Op::Update(id, fields.into()),
            CustomerAction::Delete { id } => Op::Delete(id),
        }
    }
}

impl From<VehicleAction> for Op<VehicleInput> {
    fn from(a: VehicleAction) -> Self {
        match a {
            VehicleAction::List => Op::List,
            VehicleAction::Get { id } => Op::Get(id),
            VehicleAction::Create(fields) => Op::Create(fields.into()),
            VehicleAction::Update { id, fields } => Op::Update(id, fields.into()),
            VehicleAction::Delete { id } => Op::Delete(id),
        }
    }
}

impl From<ServiceAction> for Op<ServiceInput> {
    fn from(a: ServiceAction) -> Self {
        match a {
            ServiceAction::List => Op::List,
            ServiceAction::Get { id } => Op::Get(id),
            ServiceAction::Create(fields) => Op::Create(fields.into()),
            ServiceAction::Update { id, fields } => Op::Update(id, fields.into()),
            ServiceAction::Delete { id } => Op::Delete(id),
        }
    }
}

async fn execute<I, R>(resource: Resource<I, R>, op: Op<I>) -> anyhow::Result<Value>
where
    I: Serialize,
    R: DeserializeOwned + Serialize,
{
    let value = match op {
        Op::List => serde_json::to_value(resource.get_all().await?)?,
        Op::Get(id) => serde_json::to_value(resource.get_one(id).await?)?,
        Op::Create(input) => serde_json::to_value(resource.create(&input).await?)?,
        Op::Update(id, input) => serde_json::to_value(resource.update(id, &input).await?)?,
        Op::Delete(id) => serde_json::to_value(resource.delete(id).await?)?,
    };
    Ok(value)
}

/// `--url` wins; otherwise `client.base_url` from config, overlaid by the
/// environment. A config file that exists but does not parse is an error.
fn base_url(flag: Option<String>) -> anyhow::Result<String> {
    if let Some(url) = flag {
        return Ok(url);
    }
    let mut cfg = configs::load_default_or_fallback()?;
    cfg.apply_env();
    Ok(cfg.client.base_url)
}

async fn run(cli: Cli) -> anyhow::Result<Value> {
    let shop = ShopClient::new(base_url(cli.url)?);
    debug!(base_url = shop.base_url(), "shopctl starting");
    match cli.command {
        Commands::Health => Ok(serde_json::to_value(shop.health().await?)?),
        Commands::Customers { action } => execute(shop.customers(), action.into()).await,
        Commands::Vehicles { action } => execute(shop.vehicles(), action.into()).await,
        Commands::Services { action } => execute(shop.services(), action.into()).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging_cli();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
