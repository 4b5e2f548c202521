use clap::{Parser, Subcommand};

mod commands;

use vitrine::{
    store::CollectionStore,
    user_error,
    utils::{context, prelude::*},
};

#[derive(Parser)]
#[command(name = "vitrine-cli")]
#[command(about = "Administration des collections du site vitrine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Liste les collections reconnues par l'API
    Collections,

    /// Affiche les enregistrements d'une collection (JSON)
    List { collection: String },

    /// Ajoute un enregistrement (`--data '{...}'` ou `--data @fichier.json`)
    Create {
        collection: String,
        #[arg(long)]
        data: String,
    },

    /// Supprime un enregistrement par identifiant
    Delete {
        collection: String,
        #[arg(long)]
        id: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Configuration (CRITIQUE)
    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ CRITICAL ERROR: Impossible d'initialiser la configuration.");
            eprintln!("   Détails : {}", e);
            std::process::exit(1);
        }
    };

    // 2. Logger
    context::init_logging(&config.log);

    // 3. Parsing & Dispatch
    let cli = Cli::parse();
    if let Err(e) = execute_command(cli.command, &config).await {
        user_error!("{}", e);
        std::process::exit(1);
    }

    tracing::debug!("Fin de l'exécution du CLI");
    Ok(())
}

async fn execute_command(cmd: Commands, config: &AppConfig) -> anyhow::Result<()> {
    if let Commands::Collections = cmd {
        return commands::collections::print_names();
    }

    let store = CollectionStore::open(config)?;
    match cmd {
        Commands::Collections => Ok(()),
        Commands::List { collection } => commands::collections::list(&store, &collection).await,
        Commands::Create { collection, data } => {
            commands::collections::create(&store, &collection, &data).await
        }
        Commands::Delete { collection, id } => {
            commands::collections::delete(&store, &collection, id).await
        }
    }
}
