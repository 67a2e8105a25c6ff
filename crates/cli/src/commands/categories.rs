use clap::Args;
use raven::Api;

use crate::{CliError, commands::print_json};

#[derive(Debug, Args)]
pub(crate) struct CategoriesArgs {
    /// Print a flat list instead of the tree
    #[arg(long)]
    flat: bool,
}

pub(super) async fn run(api: &Api, args: CategoriesArgs) -> Result<(), CliError> {
    let categories = if args.flat {
        api.categories.get_flat().await?
    } else {
        api.get_categories().await?
    };

    print_json(&categories)
}
