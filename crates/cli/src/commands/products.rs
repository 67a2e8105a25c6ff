use clap::{Args, Subcommand};
use raven::{
    Api,
    resources::{
        categories::CategoryId,
        products::{ProductId, SearchFilters},
    },
};
use rust_decimal::Decimal;

use crate::{CliError, commands::print_json};

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List one page of products
    List(ListArgs),

    /// Show a product and its related products
    Get(GetArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Free-text query
    #[arg(long)]
    q: Option<String>,

    /// Category id
    #[arg(long)]
    category: Option<u64>,

    /// Lower price bound
    #[arg(long)]
    min_price: Option<Decimal>,

    /// Upper price bound
    #[arg(long)]
    max_price: Option<Decimal>,

    /// Only discounted products
    #[arg(long)]
    on_sale: bool,

    /// Page number, starting at 1
    #[arg(long)]
    page: Option<u32>,

    /// Products per page
    #[arg(long)]
    limit: Option<u32>,
}

impl ListArgs {
    fn to_filters(&self) -> SearchFilters {
        let mut filters = SearchFilters::new().price_between(self.min_price, self.max_price);

        filters.q.clone_from(&self.q);
        filters.category = self.category.map(CategoryId::new);
        filters.on_sale = self.on_sale.then_some(true);
        filters.page = self.page;
        filters.limit = self.limit;

        filters
    }
}

#[derive(Debug, Args)]
struct GetArgs {
    /// Product id
    id: u64,
}

pub(super) async fn run(api: &Api, command: ProductsCommand) -> Result<(), CliError> {
    match command.command {
        ProductsSubcommand::List(args) => print_json(&api.get_products(args.to_filters()).await?),
        ProductsSubcommand::Get(args) => {
            print_json(&api.products.get_details(ProductId::new(args.id)).await?)
        }
    }
}
