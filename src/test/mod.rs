//! Test helpers shared by the service tests.

use std::{collections::BTreeMap, fmt::Debug, sync::Arc};

use reqwest::{Method, StatusCode, Url};
use serde_json::{Value, json};

use crate::{
    config::BackendConfig,
    http::{ApiClient, ApiError, ClientError, HttpRequest, HttpResponse, MockTransport},
};

pub(crate) const TEST_BASE_URL: &str = "http://shop.test";

pub(crate) fn test_config() -> BackendConfig {
    match BackendConfig::new(TEST_BASE_URL) {
        Ok(config) => config,
        Err(error) => unreachable!("test base url must parse: {error}"),
    }
}

pub(crate) fn client_with(transport: MockTransport) -> ApiClient {
    ApiClient::new(Arc::new(test_config()), Arc::new(transport))
}

/// Decoded query string of `url`.
pub(crate) fn query_of(url: &Url) -> BTreeMap<String, String> {
    url.query_pairs().into_owned().collect()
}

/// Query parameters a request sent, minus the fixed routing prefix.
pub(crate) fn params_of(request: &HttpRequest) -> BTreeMap<String, String> {
    let mut query = query_of(&request.url);

    query.remove("fc");
    query.remove("module");
    query.remove("controller");

    query
}

pub(crate) fn targets(request: &HttpRequest, method: &Method, controller: &str) -> bool {
    request.method == *method
        && query_of(&request.url).get("controller").map(String::as_str) == Some(controller)
}

pub(crate) fn ok_json(body: &Value) -> HttpResponse {
    HttpResponse::json(StatusCode::OK, body)
}

/// Expect exactly one request to `controller` and answer it with `response`.
pub(crate) fn expect_call(
    transport: &mut MockTransport,
    method: Method,
    controller: &'static str,
    response: HttpResponse,
) {
    transport
        .expect_send()
        .once()
        .withf(move |request| targets(request, &method, controller))
        .return_once(move |_| Ok(response));
}

pub(crate) fn expect_api_error<T: Debug>(result: Result<T, ClientError>) -> ApiError {
    match result {
        Err(ClientError::Api(error)) => error,
        other => unreachable!("expected an api error, got {other:?}"),
    }
}

pub(crate) fn product_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "reference": format!("REF-{id}"),
        "price": 24.9,
        "price_without_reduction": 24.9,
        "reduction": 0,
        "reduction_type": "amount",
        "quantity": 12,
        "available_for_order": true,
        "id_category_default": 3,
        "category_name": "Freinage",
        "id_manufacturer": 5,
        "manufacturer_name": "Brembo",
        "link_rewrite": format!("product-{id}"),
        "images": [{ "id": 1, "url": "https://cdn.test/1.jpg", "legend": name }],
        "description_short": "<p>Short</p>",
        "description": "<p>Long</p>"
    })
}

pub(crate) fn page_json(data: Vec<Value>, total: u64, page: u32, per_page: u32) -> Value {
    let total_pages = if per_page == 0 {
        0
    } else {
        total.div_ceil(u64::from(per_page))
    };

    json!({
        "data": data,
        "pagination": {
            "total": total,
            "page": page,
            "per_page": per_page,
            "total_pages": total_pages
        }
    })
}

pub(crate) fn customer_json() -> Value {
    json!({
        "id": 7,
        "firstname": "Camille",
        "lastname": "Durand",
        "email": "camille@example.test",
        "birthday": "1990-04-12",
        "newsletter": true
    })
}

pub(crate) fn address_json(id: u64) -> Value {
    json!({
        "id": id,
        "alias": "Maison",
        "firstname": "Camille",
        "lastname": "Durand",
        "address1": "12 rue des Lilas",
        "postcode": "69001",
        "city": "Lyon",
        "id_country": 8,
        "country": "France",
        "phone": "0600000000"
    })
}

pub(crate) fn cart_json(items: Vec<Value>) -> Value {
    json!({
        "id": 91,
        "items": items,
        "vouchers": [],
        "totals": {
            "products": 24.9,
            "discounts": 0,
            "shipping": 0,
            "total": 24.9
        },
        "products_count": 1
    })
}
