use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use warung::application::session::OrderSession;
use warung::config::ShopConfig;
use warung::domain::catalog::Catalog;
use warung::domain::ports::OrderChannelBox;
use warung::infrastructure::launcher::{LauncherChannel, StdoutChannel};
use warung::interfaces::csv::cart_writer::CartWriter;
use warung::interfaces::csv::catalog_reader::CatalogReader;
use warung::interfaces::csv::command_reader::CommandReader;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct CatalogArgs {
    /// Menu CSV file (id,name,price,description). Defaults to the house menu.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the menu as CSV
    Menu {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// Replay cart actions and print the resulting cart
    Cart {
        /// Cart actions CSV file (action,item)
        actions: PathBuf,

        #[command(flatten)]
        catalog: CatalogArgs,

        /// Print a JSON snapshot instead of CSV
        #[arg(long)]
        json: bool,
    },
    /// Replay cart actions and hand the order to the messaging channel
    Checkout {
        /// Cart actions CSV file (action,item)
        actions: PathBuf,

        #[command(flatten)]
        catalog: CatalogArgs,

        /// Destination contact, overrides WARUNG_PHONE
        #[arg(long)]
        phone: Option<String>,

        /// Messaging service base URL, overrides WARUNG_CHANNEL_URL
        #[arg(long)]
        channel_url: Option<String>,

        /// Open the request with the launcher instead of printing it
        #[arg(long)]
        open: bool,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();
}

fn load_catalog(args: CatalogArgs) -> Result<Arc<Catalog>> {
    let catalog = match args.catalog {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            CatalogReader::new(file).read_catalog().into_diagnostic()?
        }
        None => Catalog::house_menu(),
    };
    Ok(Arc::new(catalog))
}

/// Replays an actions file against a fresh session, reporting and skipping bad rows.
fn replay(actions: &Path, catalog: Arc<Catalog>, config: &ShopConfig) -> Result<OrderSession> {
    let mut session = OrderSession::from_config(catalog, config).into_diagnostic()?;
    let file = File::open(actions).into_diagnostic()?;
    let reader = CommandReader::new(file);
    for command_result in reader.commands() {
        match command_result {
            Ok(command) => match session.apply(command) {
                Ok(event) => {
                    if let Some(notification) = event.notification() {
                        eprintln!("{}", notification);
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "action skipped");
                    eprintln!("Error applying action: {}", e);
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "action skipped");
                eprintln!("Error reading action: {}", e);
            }
        }
    }
    Ok(session)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut config = ShopConfig::from_env();

    match cli.command {
        Command::Menu { catalog } => {
            let catalog = load_catalog(catalog)?;
            let stdout = io::stdout();
            let mut writer = CartWriter::new(stdout.lock());
            writer.write_menu(&catalog).into_diagnostic()?;
        }
        Command::Cart {
            actions,
            catalog,
            json,
        } => {
            let session = replay(&actions, load_catalog(catalog)?, &config)?;
            let stdout = io::stdout();
            if json {
                let mut out = stdout.lock();
                let snapshot = session.cart().snapshot().into_diagnostic()?;
                serde_json::to_writer_pretty(&mut out, &snapshot).into_diagnostic()?;
                io::Write::write_all(&mut out, b"\n").into_diagnostic()?;
            } else {
                let mut writer = CartWriter::new(stdout.lock());
                writer.write_cart(session.cart()).into_diagnostic()?;
            }
        }
        Command::Checkout {
            actions,
            catalog,
            phone,
            channel_url,
            open,
        } => {
            if let Some(phone) = phone {
                config.phone = phone;
            }
            if let Some(channel_url) = channel_url {
                config.channel_url = channel_url;
            }
            let session = replay(&actions, load_catalog(catalog)?, &config)?;

            let channel: OrderChannelBox = if open {
                Box::new(LauncherChannel::new(config.launcher.clone()))
            } else {
                Box::new(StdoutChannel)
            };
            session.submit(channel.as_ref()).await.into_diagnostic()?;
        }
    }

    Ok(())
}
