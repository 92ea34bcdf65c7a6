use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use petfinder::config::Config;
use petfinder::domain::{catalog, find_product, CurrentUser, PetRecord};
use petfinder::logging::init_tracing;
use petfinder::services::memory::{MemoryIdentity, MemoryProfileStore, MemoryRecordStore};
use petfinder::services::{IdentityProvider, PetService};
use petfinder::session::Session;
use petfinder::ui::map::StatusSelector;

#[derive(Parser, Debug)]
#[command(name = "petfinder")]
#[command(about = "Lost/found pet map and pet-shop cart, driven from the command line")]
struct Cli {
    /// Config file (default: petfinder/config.toml in the user config dir).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the pet-shop catalog.
    Shop,
    /// Add products to a cart and print the totals.
    Cart {
        /// Product id to add; repeat to add more units.
        #[arg(long = "add", value_name = "ID")]
        add: Vec<String>,
    },
    /// Show the map markers for a filter.
    Pets {
        /// JSON file with an array of pet records.
        #[arg(long)]
        data: PathBuf,
        /// all, lost, found or resolved.
        #[arg(long, conflicts_with = "mine")]
        status: Option<String>,
        /// Only records owned by --user.
        #[arg(long, requires = "user")]
        mine: bool,
        /// Signed-in user id.
        #[arg(long)]
        user: Option<String>,
    },
    /// Check whether a user may publish another pet.
    Eligibility {
        #[arg(long)]
        data: PathBuf,
        #[arg(long)]
        user: String,
    },
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

fn load_pets(path: &Path) -> Result<Vec<PetRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read pet data '{}'", path.display()))?;
    let pets = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse pet data '{}'", path.display()))?;
    Ok(pets)
}

fn pet_service(
    config: &Config,
    pets: Vec<PetRecord>,
    identity: Arc<MemoryIdentity>,
) -> PetService {
    PetService::new(
        Arc::new(MemoryRecordStore::with_pets(pets)),
        Arc::new(MemoryProfileStore::new()),
        identity,
        config.limits.active_pet_limit(),
    )
}

fn signed_in(user: Option<String>) -> Arc<MemoryIdentity> {
    match user {
        Some(id) => Arc::new(MemoryIdentity::signed_in(CurrentUser::new(id, ""))),
        None => Arc::new(MemoryIdentity::new()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Shop => {
            for product in catalog() {
                println!(
                    "{}\t{}\t{}",
                    product.id,
                    product.name,
                    config.shop.format_price(product.price)
                );
            }
        }
        Command::Cart { add } => {
            let mut session = Session::new(None);
            for id in &add {
                let Some(product) = find_product(id) else {
                    bail!("Unknown product '{}'", id);
                };
                session.add_to_cart(product);
            }
            for line in session.cart().lines() {
                println!(
                    "{}\tx{}\t{}",
                    line.product.name,
                    line.quantity,
                    config.shop.format_price(line.subtotal())
                );
            }
            println!("items: {}", session.cart().total_items());
            println!("total: {}", config.shop.format_price(session.cart().total_price()));
        }
        Command::Pets {
            data,
            status,
            mine,
            user,
        } => {
            let identity = signed_in(user);
            let service = pet_service(&config, load_pets(&data)?, identity.clone());
            let mut session = Session::new(identity.current_user());

            if mine {
                session.set_only_mine(&service, true).await?;
            } else {
                let selector = match status {
                    Some(status) => status.parse::<StatusSelector>()?,
                    None => StatusSelector::All,
                };
                session.set_filter_status(&service, selector).await?;
            }

            for marker in session.map().markers() {
                println!(
                    "{}\t{}\t{:.6},{:.6}\t{}",
                    marker.pet_id,
                    marker.icon,
                    marker.coordinate.latitude,
                    marker.coordinate.longitude,
                    marker.color
                );
            }
        }
        Command::Eligibility { data, user } => {
            let identity = signed_in(Some(user));
            let service = pet_service(&config, load_pets(&data)?, identity.clone());
            let mut session = Session::new(identity.current_user());
            session.refresh_my_pets(&service).await?;

            let my_pets = session.my_pets();
            println!("active: {}/{}", my_pets.active_count(), service.limit().max());
            if my_pets.can_add() {
                println!("can add: yes");
            } else {
                println!("can add: no (limit reached)");
            }
        }
    }

    Ok(())
}
