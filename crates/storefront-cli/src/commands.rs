use super::args::{CatalogCommand, Cli, Commands, ConfigCommand, ProductCommand};
use super::handlers::{self, HandlerContext};
use crate::args::ViewModeArgs;
use crate::context::ExecutionContext;
use crate::logging;
use anyhow::Result;
use storefront_runtime::resolve_data_dir;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir, cli.catalog);

    let Some(command) = cli.command else {
        show_guidance(&ctx);
        return Ok(());
    };

    // The terminal UI owns stdout/stderr, so it only logs to an explicit file.
    match &command {
        Commands::Browse { log_file } => {
            if let Some(path) = log_file {
                logging::init_file(cli.log_level, path)?;
            }
        }
        _ => logging::init_console(cli.log_level)?,
    }

    match command {
        Commands::Browse { .. } => handlers::browse::handle(&ctx),

        Commands::Catalog { command } => match command {
            CatalogCommand::List {
                search,
                category,
                view_mode,
            } => handlers::catalog_list::handle(
                &ctx,
                search,
                category,
                HandlerContext::new(cli.format, &view_mode),
            ),
            CatalogCommand::Categories { view_mode } => handlers::catalog_categories::handle(
                &ctx,
                HandlerContext::new(cli.format, &view_mode),
            ),
        },

        Commands::Product { command } => match command {
            ProductCommand::Show { id, view_mode } => {
                handlers::product_show::handle(&ctx, id, HandlerContext::new(cli.format, &view_mode))
            }
        },

        Commands::Checkout {
            add,
            place,
            view_mode,
        } => handlers::checkout::handle(&ctx, &add, place, HandlerContext::new(cli.format, &view_mode)),

        Commands::Config { command } => match command {
            ConfigCommand::Show { view_mode } => {
                handlers::config_show::handle(&ctx, HandlerContext::new(cli.format, &view_mode))
            }
            ConfigCommand::Init { force } => handlers::config_init::handle(
                &ctx,
                force,
                HandlerContext::new(cli.format, &ViewModeArgs::default()),
            ),
        },
    }
}

fn show_guidance(ctx: &ExecutionContext) {
    println!("storefront - browse a catalog, fill a cart, check out\n");

    if !ctx.config_path().exists() {
        println!("Get started:");
        println!("  storefront config init            # Write a config file");
        println!("  storefront browse                 # Open the interactive storefront\n");
    } else {
        println!("Quick commands:");
        println!("  storefront browse                 # Open the interactive storefront");
        println!("  storefront catalog list           # List products");
        println!("  storefront product show <ID>      # Show one product");
        println!("  storefront checkout --add <ID>    # Build a cart from the command line\n");
    }

    println!("For more commands:");
    println!("  storefront --help");
}
