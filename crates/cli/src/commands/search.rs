use clap::Args;
use raven::Api;

use crate::{CliError, commands::print_json};

#[derive(Debug, Args)]
pub(crate) struct SearchArgs {
    /// Search text
    query: String,

    /// Maximum number of products returned
    #[arg(long)]
    limit: Option<u32>,
}

pub(super) async fn run(api: &Api, args: SearchArgs) -> Result<(), CliError> {
    print_json(&api.search.search(&args.query, args.limit).await?)
}
