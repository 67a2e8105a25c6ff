//! Catalog search filters

use rust_decimal::Decimal;

use crate::{
    endpoints::QueryParams,
    resources::{categories::CategoryId, manufacturers::ManufacturerId},
};

/// Listing sort orders understood by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    /// Backend relevance, the default for searches.
    Relevance,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Name, A to Z.
    NameAsc,
    /// Name, Z to A.
    NameDesc,
    /// Most recently added first.
    Newest,
    /// Best sellers first.
    BestSales,
}

impl SortKey {
    /// Wire value of the `order_by` parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::NameAsc => "name_asc",
            Self::NameDesc => "name_desc",
            Self::Newest => "date_add_desc",
            Self::BestSales => "sales_desc",
        }
    }
}

/// Query shaping for product listings. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    /// Full-text query.
    pub q: Option<String>,
    /// Restrict to one category.
    pub category: Option<CategoryId>,
    /// Restrict to one brand.
    pub manufacturer: Option<ManufacturerId>,
    /// Lowest price, inclusive.
    pub min_price: Option<Decimal>,
    /// Highest price, inclusive.
    pub max_price: Option<Decimal>,
    /// Only products with stock.
    pub in_stock: Option<bool>,
    /// Only products flagged on sale.
    pub on_sale: Option<bool>,
    /// Sort order.
    pub sort: Option<SortKey>,
    /// 1-based page.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl SearchFilters {
    /// No filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the full-text query.
    #[must_use]
    pub fn query(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Set the category.
    #[must_use]
    pub fn category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the brand.
    #[must_use]
    pub fn manufacturer(mut self, manufacturer: ManufacturerId) -> Self {
        self.manufacturer = Some(manufacturer);
        self
    }

    /// Set both price bounds; `None` leaves a side open.
    #[must_use]
    pub fn price_between(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Set the stock filter.
    #[must_use]
    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    /// Set the on-sale filter.
    #[must_use]
    pub fn on_sale(mut self, on_sale: bool) -> Self {
        self.on_sale = Some(on_sale);
        self
    }

    /// Set the sort order.
    #[must_use]
    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set the page.
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query parameters under their wire names.
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("q", self.q.clone())
            .with_opt("id_category", self.category)
            .with_opt("id_manufacturer", self.manufacturer)
            .with_opt("price_min", self.min_price)
            .with_opt("price_max", self.max_price)
            .with_opt("in_stock", self.in_stock)
            .with_opt("on_sale", self.on_sale)
            .with_opt("order_by", self.sort.map(SortKey::as_str))
            .with_opt("page", self.page)
            .with_opt("limit", self.limit)
    }
}
