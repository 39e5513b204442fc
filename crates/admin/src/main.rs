use admin::AppConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use domain::models::{Athlete, QRCode, Session, SessionPackage, Staff};
use domain::{Entity, Persisted};
use gateway::{QueryOptions, RestGateway, SearchQuery};

#[derive(Parser)]
#[command(name = "pilates-admin")]
#[command(about = "Pilates studio scheduling administration", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the scheduling API; falls back to API_BASE_URL.
    #[arg(long)]
    api_url: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage athletes
    Athletes {
        #[command(subcommand)]
        action: EntityAction,
    },
    /// Manage staff members
    Staff {
        #[command(subcommand)]
        action: EntityAction,
    },
    /// Manage session packages
    Packages {
        #[command(subcommand)]
        action: EntityAction,
    },
    /// Manage sessions
    Sessions {
        #[command(subcommand)]
        action: EntityAction,
    },
    /// Manage QR codes
    Qrcodes {
        #[command(subcommand)]
        action: EntityAction,
    },
}

#[derive(Subcommand)]
enum EntityAction {
    /// List a page of records
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value_t = 20)]
        size: u32,

        #[arg(long, default_value = "id,asc")]
        sort: String,

        #[arg(long)]
        filter: Option<String>,
    },
    /// Fetch one record by id
    Show { id: String },
    /// Free-text search
    Search { query: String },
    /// Delete one record by id
    Delete { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("admin={},gateway={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_url = match cli.api_url {
        Some(url) => url,
        None => AppConfig::from_env()?.api_base_url,
    };

    let http = reqwest::Client::new();
    match cli.command {
        Commands::Athletes { action } => {
            run::<Athlete>(RestGateway::with_client(http, &api_url), action).await
        }
        Commands::Staff { action } => {
            run::<Staff>(RestGateway::with_client(http, &api_url), action).await
        }
        Commands::Packages { action } => {
            run::<SessionPackage>(RestGateway::with_client(http, &api_url), action).await
        }
        Commands::Sessions { action } => {
            run::<Session>(RestGateway::with_client(http, &api_url), action).await
        }
        Commands::Qrcodes { action } => {
            run::<QRCode>(RestGateway::with_client(http, &api_url), action).await
        }
    }
}

async fn run<E: Entity>(api: RestGateway<E>, action: EntityAction) -> anyhow::Result<()> {
    match action {
        EntityAction::List {
            page,
            size,
            sort,
            filter,
        } => {
            let mut options = QueryOptions::new().page(page).size(size).sort(sort);
            if let Some(filter) = filter {
                options = options.filter(filter);
            }
            let listed = api.query(&options).await?;
            if let Some(total) = listed.total_count {
                tracing::info!(total, "{} records on the server", E::SINGULAR);
            }
            print_records(&listed.items)?;
        }
        EntityAction::Show { id } => {
            let id = parse_id::<E>(&id)?;
            match api.find(&id).await? {
                Some(record) => print_records(std::slice::from_ref(&record))?,
                None => anyhow::bail!("no {} with id {}", E::SINGULAR, id),
            }
        }
        EntityAction::Search { query } => {
            let found = api.search(&SearchQuery::new(query)).await;
            print_records(&found.items)?;
        }
        EntityAction::Delete { id } => {
            let id = parse_id::<E>(&id)?;
            api.delete(&id).await?;
            tracing::info!("deleted {} {}", E::SINGULAR, id);
        }
    }
    Ok(())
}

fn parse_id<E: Entity>(raw: &str) -> anyhow::Result<E::Id> {
    raw.parse::<E::Id>()
        .map_err(|_| anyhow::anyhow!("'{}' is not a valid {} id", raw, E::SINGULAR))
}

fn print_records<E: Entity>(records: &[Persisted<E>]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}
