//! Subcommands

use clap::Subcommand;
use raven::Api;
use serde::Serialize;

use crate::CliError;

mod cart;
mod categories;
mod products;
mod search;

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Browse the catalog
    Products(products::ProductsCommand),

    /// Print the category tree
    Categories(categories::CategoriesArgs),

    /// Autocomplete search
    Search(search::SearchArgs),

    /// Print the session cart
    Cart,
}

pub(crate) async fn run(api: &Api, command: Command) -> Result<(), CliError> {
    match command {
        Command::Products(command) => products::run(api, command).await,
        Command::Categories(args) => categories::run(api, args).await,
        Command::Search(args) => search::run(api, args).await,
        Command::Cart => cart::run(api).await,
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value).map_err(CliError::Output)?;

    #[expect(clippy::print_stdout, reason = "command output is the program's result")]
    {
        println!("{rendered}");
    }

    Ok(())
}
