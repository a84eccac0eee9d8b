//! REST helpers for the prediction API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, same-origin paths
//! that the host server forwards upstream.
//! Server-side (SSR): stubs returning an error since these calls are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` with a message fit for display, so failed
//! requests degrade to an inline error rather than a panic. Nothing here
//! retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{CarModel, CarName, TokenPair};
#[cfg(feature = "hydrate")]
use super::types::{
    CarSearchResponse, LoginRequest, PricePrediction, PricePredictionRequest, RecommendationRequest, Recommendations,
    RegisterRequest,
};

pub const LOGIN_ENDPOINT: &str = "/user/login/";
pub const REGISTER_ENDPOINT: &str = "/user/register/";
pub const PREDICT_PRICE_ENDPOINT: &str = "/user/predict-price/";
pub const SUGGEST_CAR_ENDPOINT: &str = "/user/suggest-car/";
pub const CAR_NAMES_ENDPOINT: &str = "/cars/names/";
pub const CAR_MODELS_ENDPOINT: &str = "/cars/models";
pub const CAR_SEARCH_ENDPOINT: &str = "/cars/search/";

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

/// Flatten an error body into one message.
///
/// Prefers `detail`; otherwise joins every field's message(s), one field per
/// line, the way the upstream reports validation errors.
#[must_use]
pub fn error_message_from_body(body: &serde_json::Value) -> Option<String> {
    if let Some(detail) = body.get("detail").and_then(serde_json::Value::as_str) {
        if !detail.trim().is_empty() {
            return Some(detail.to_owned());
        }
    }
    let map = body.as_object()?;
    let lines: Vec<String> = map
        .values()
        .filter_map(|value| match value {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(items) => Some(
                items
                    .iter()
                    .map(|item| item.as_str().map_or_else(|| item.to_string(), str::to_owned))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        })
        .filter(|line| !line.trim().is_empty())
        .collect();
    if lines.is_empty() { None } else { Some(lines.join("\n")) }
}

#[cfg(feature = "hydrate")]
fn with_token(builder: gloo_net::http::RequestBuilder, token: Option<&str>) -> gloo_net::http::RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &bearer(token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
    action: &str,
) -> Result<T, String> {
    if !resp.ok() {
        return Err(request_failed_message(action, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Submit credentials to the auth endpoints and return the issued tokens.
#[cfg(feature = "hydrate")]
async fn post_credentials<B: serde::Serialize>(endpoint: &str, body: &B, fallback: &str) -> Result<TokenPair, String> {
    let resp = gloo_net::http::Request::post(endpoint)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|_| "Network error. Please try again.".to_owned())?;
    let ok = resp.ok();
    let body: serde_json::Value = resp.json().await.unwrap_or(serde_json::Value::Null);
    if ok {
        return serde_json::from_value(body).map_err(|e| e.to_string());
    }
    Err(error_message_from_body(&body).unwrap_or_else(|| fallback.to_owned()))
}

/// Sign in via `POST /user/login/`.
///
/// # Errors
///
/// Returns the server's message (or a generic one) when credentials are
/// rejected, or a network-error message when the request cannot be sent.
pub async fn login(email: &str, password: &str) -> Result<TokenPair, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        post_credentials(LOGIN_ENDPOINT, &body, "Invalid credentials.").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /user/register/`.
///
/// # Errors
///
/// Returns the server's validation message(s) or a network-error message.
pub async fn register(email: &str, first_name: &str, last_name: &str, password: &str) -> Result<TokenPair, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = RegisterRequest {
            email: email.to_owned(),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            password: password.to_owned(),
        };
        post_credentials(REGISTER_ENDPOINT, &body, "Registration failed.").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, first_name, last_name, password);
        Err("not available on server".to_owned())
    }
}

/// List car brands via `GET /cars/names/`.
///
/// # Errors
///
/// Returns an error string if the request fails or the status is not OK.
pub async fn fetch_car_names() -> Result<Vec<CarName>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CAR_NAMES_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "fetch car brands").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// List models of one brand via `GET /cars/models?name=...`.
///
/// # Errors
///
/// Returns an error string if the request fails or the status is not OK.
pub async fn fetch_car_models(name: &str) -> Result<Vec<CarModel>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CAR_MODELS_ENDPOINT)
            .query([("name", name)])
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "fetch car models").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        Err("not available on server".to_owned())
    }
}

/// Predict a price via `POST /user/predict-price/`.
///
/// # Errors
///
/// Returns an error string if the request fails or the status is not OK.
#[cfg(feature = "hydrate")]
pub async fn predict_price(req: &PricePredictionRequest, token: Option<&str>) -> Result<PricePrediction, String> {
    let resp = with_token(gloo_net::http::Request::post(PREDICT_PRICE_ENDPOINT), token)
        .json(req)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp, "get prediction").await
}

/// Fetch recommendations for a Toman budget via `POST /user/suggest-car/`.
///
/// # Errors
///
/// Returns an error string if the request fails or the status is not OK.
#[cfg(feature = "hydrate")]
pub async fn fetch_recommendations(price_toman: u64, token: Option<&str>) -> Result<Recommendations, String> {
    let resp = with_token(gloo_net::http::Request::post(SUGGEST_CAR_ENDPOINT), token)
        .json(&RecommendationRequest { price: price_toman })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp, "fetch car recommendations").await
}

/// Search marketplace listings via `GET /cars/search/?q=...`.
///
/// # Errors
///
/// Returns an error string if the request fails or the status is not OK.
#[cfg(feature = "hydrate")]
pub async fn search_cars(term: &str, token: Option<&str>) -> Result<CarSearchResponse, String> {
    let resp = with_token(gloo_net::http::Request::get(CAR_SEARCH_ENDPOINT).query([("q", term)]), token)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp, "search cars").await
}
