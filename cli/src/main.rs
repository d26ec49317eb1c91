mod catalog;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "grovedex")]
#[command(about = "Grovedex catalog CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ping the server
    Ping {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
    },
    /// Browse the recipe table
    Recipes {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
        /// Substring to search recipe names for
        #[arg(long)]
        search: Option<String>,
        /// Only recipes of this type (e.g. "Dessert")
        #[arg(long = "type")]
        kind: Option<String>,
        /// Only recipes from this collection
        #[arg(long)]
        collection: Option<String>,
        /// Require an ingredient; repeat to require several
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
        /// Sort column (name, type, stars, energy, sell_price,
        /// ingredients, collection)
        #[arg(long)]
        sort: Option<String>,
        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,
    },
    /// Browse the critter table
    Critters {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
        /// Substring to search critter names for
        #[arg(long)]
        search: Option<String>,
        /// Only critters of this type (e.g. "Fox")
        #[arg(long = "type")]
        kind: Option<String>,
        /// Only critters found at this location
        #[arg(long)]
        location: Option<String>,
        /// Only critters present on this weekday
        #[arg(long)]
        day: Option<String>,
        /// Only critters present at this hour: a label like "9 PM",
        /// a 24-hour number, or "all-day"
        #[arg(long)]
        hour: Option<String>,
        /// Only critters available right now
        #[arg(long)]
        now: bool,
        /// Sort column (name, type, location)
        #[arg(long)]
        sort: Option<String>,
        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ping { server } => catalog::ping(&server).await?,
        Commands::Recipes {
            server,
            search,
            kind,
            collection,
            ingredients,
            sort,
            desc,
        } => {
            catalog::browse_recipes(
                &server,
                catalog::RecipeQueryArgs {
                    search,
                    kind,
                    collection,
                    ingredients,
                    sort,
                    desc,
                },
            )
            .await?
        }
        Commands::Critters {
            server,
            search,
            kind,
            location,
            day,
            hour,
            now,
            sort,
            desc,
        } => {
            catalog::browse_critters(
                &server,
                catalog::CritterQueryArgs {
                    search,
                    kind,
                    location,
                    day,
                    hour,
                    now,
                    sort,
                    desc,
                },
            )
            .await?
        }
    }

    Ok(())
}
