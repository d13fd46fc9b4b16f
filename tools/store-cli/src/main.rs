//! Store CLI - Command line storefront.
//!
//! Commands:
//! - `store products` - List every product
//! - `store categories` - List the catalog's categories
//! - `store category <name>` - List the products in a category
//! - `store product <id>` - Show one product
//! - `store search <text>` - Search product names and descriptions
//! - `store shop` - Interactive session with a cart and checkout

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use store_observability::{init_logging, LogLevel};

use commands::{CategoryArgs, ProductArgs, ProductsArgs, SearchArgs};

/// Store CLI - Browse the catalog and shop from the terminal
#[derive(Parser)]
#[command(name = "store")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Read products from a JSON fixture instead of the content store
    #[arg(long, global = true, value_name = "FIXTURE")]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every product
    Products(ProductsArgs),

    /// List the catalog's categories
    Categories,

    /// List the products in one category
    Category(CategoryArgs),

    /// Show one product
    Product(ProductArgs),

    /// Search product names and descriptions
    Search(SearchArgs),

    /// Start an interactive shopping session
    Shop,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = context::Context::load(cli.config.as_deref(), cli.catalog.as_deref(), output)?;

    let mut log_config = ctx.config.logging.clone();
    if cli.verbose {
        log_config.level = log_config.level.min(LogLevel::Debug);
    }
    if let Err(e) = init_logging(&log_config) {
        ctx.output.warn(&e.to_string());
    }

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::browse::products(args, &ctx).await,
        Commands::Categories => commands::browse::categories(&ctx).await,
        Commands::Category(args) => commands::browse::category(args, &ctx).await,
        Commands::Product(args) => commands::browse::product(args, &ctx).await,
        Commands::Search(args) => commands::browse::search(args, &ctx).await,
        Commands::Shop => commands::shop::run(&ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "store",
            "category",
            "Chair",
            "--catalog",
            "fixture.json",
            "--json",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.catalog.as_deref(), Some("fixture.json"));
        match cli.command {
            Commands::Category(args) => assert_eq!(args.name, "Chair"),
            _ => panic!("expected category command"),
        }
    }
}
