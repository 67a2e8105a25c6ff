//! Endpoint Construction
//!
//! Every backend call goes through the module front controller:
//! `<base>/index.php?fc=module&module=ravenapi&controller=<name>&...`.

use std::fmt::{Display, Formatter, Result as FmtResult};

use reqwest::Url;
use rust_decimal::Decimal;

use crate::ids::TypedId;

/// Front controller script, relative to the base URL path.
pub const ENTRY_POINT: &str = "index.php";

/// Backend module that serves every controller.
pub const MODULE_NAME: &str = "ravenapi";

/// Backend controllers exposed by the module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Controller {
    /// Paginated product listing and search.
    Products,
    /// Single product with related products.
    Product,
    /// Category tree or flat list.
    Categories,
    /// Single category and its products.
    Category,
    /// Session cart reads and mutations.
    Cart,
    /// Checkout options, steps and validation.
    Checkout,
    /// Login, registration, logout and current customer.
    Auth,
    /// Profile of the logged-in customer.
    Customer,
    /// Order history.
    Orders,
    /// Single order.
    Order,
    /// Address book.
    Addresses,
    /// Autocomplete search.
    Search,
    /// Brands.
    Manufacturers,
    /// Payment methods and order payment status.
    Payment,
}

impl Controller {
    /// Wire name used in the `controller` query parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Product => "product",
            Self::Categories => "categories",
            Self::Category => "category",
            Self::Cart => "cart",
            Self::Checkout => "checkout",
            Self::Auth => "auth",
            Self::Customer => "customer",
            Self::Orders => "orders",
            Self::Order => "order",
            Self::Addresses => "addresses",
            Self::Search => "search",
            Self::Manufacturers => "manufacturers",
            Self::Payment => "payment",
        }
    }
}

impl Display for Controller {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Scalar query parameter value.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryValue {
    /// Free text; omitted from URLs when empty.
    Text(String),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer, ids included.
    Uint(u64),
    /// Decimal amount, written without trailing zeros.
    Decimal(Decimal),
    /// `true` or `false`.
    Bool(bool),
}

impl QueryValue {
    /// Empty strings are omitted from built URLs.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }

    /// Value as it appears on the wire, before URL encoding.
    pub fn to_wire(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Int(value) => value.to_string(),
            Self::Uint(value) => value.to_string(),
            Self::Decimal(value) => value.normalize().to_string(),
            Self::Bool(value) => value.to_string(),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Uint(u64::from(value))
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<Decimal> for QueryValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T> From<TypedId<T>> for QueryValue {
    fn from(value: TypedId<T>) -> Self {
        Self::Uint(value.get())
    }
}

/// Ordered query parameters for a single request.
///
/// Keys are static so every parameter a resource sends is spelled out in
/// code next to the endpoint that accepts it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams(Vec<(&'static str, QueryValue)>);

impl QueryParams {
    /// Empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`QueryParams::push`].
    #[must_use]
    pub fn with(mut self, key: &'static str, value: impl Into<QueryValue>) -> Self {
        self.push(key, value);
        self
    }

    /// Builder-style [`QueryParams::push_opt`].
    #[must_use]
    pub fn with_opt<V: Into<QueryValue>>(mut self, key: &'static str, value: Option<V>) -> Self {
        self.push_opt(key, value);
        self
    }

    /// Set `key`, replacing any earlier value for it.
    pub fn push(&mut self, key: &'static str, value: impl Into<QueryValue>) {
        let value = value.into();

        match self.0.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((key, value)),
        }
    }

    /// Set `key` only when a value is present.
    pub fn push_opt<V: Into<QueryValue>>(&mut self, key: &'static str, value: Option<V>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Value set for `key`.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, value)| value)
    }

    /// Parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &QueryValue)> + '_ {
        self.0.iter().map(|(key, value)| (*key, value))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Build the fully-qualified URL for `controller`.
///
/// Parameters with empty string values are skipped; keys and values are
/// URL-encoded.
pub fn build_url(base: &Url, controller: Controller, params: &QueryParams) -> Url {
    let mut url = base.clone();

    let path = format!("{}/{ENTRY_POINT}", url.path().trim_end_matches('/'));

    url.set_path(&path);
    url.set_query(None);
    url.set_fragment(None);

    {
        let mut pairs = url.query_pairs_mut();

        pairs
            .append_pair("fc", "module")
            .append_pair("module", MODULE_NAME)
            .append_pair("controller", controller.as_str());

        for (key, value) in params.iter().filter(|(_, value)| !value.is_empty()) {
            pairs.append_pair(key, &value.to_wire());
        }
    }

    url
}
