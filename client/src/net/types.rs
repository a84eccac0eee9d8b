//! Wire DTOs for the prediction API.
//!
//! DESIGN
//! ======
//! Field names follow the upstream JSON exactly. The upstream is loose about
//! numeric fields in listings (years and mileages arrive as numbers or as
//! strings, sometimes in Persian digits), so those are captured as display
//! strings and normalized at render time.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::state::session::Session;

/// Transmission type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gearbox {
    #[default]
    Automatic,
    Manual,
}

/// Whether the engine has been replaced. The upstream speaks Persian:
/// `نیست` ("is not") for original, `هست` ("is") for replaced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineStatus {
    #[default]
    #[serde(rename = "نیست")]
    Original,
    #[serde(rename = "هست")]
    Replaced,
}

impl EngineStatus {
    pub const ORIGINAL_WIRE: &'static str = "نیست";
    pub const REPLACED_WIRE: &'static str = "هست";

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Original => "Original",
            Self::Replaced => "Replaced",
        }
    }

    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw.trim() {
            Self::ORIGINAL_WIRE => Some(Self::Original),
            Self::REPLACED_WIRE => Some(Self::Replaced),
            _ => None,
        }
    }
}

/// `POST /user/predict-price/` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PricePredictionRequest {
    pub name: String,
    pub model: String,
    pub gearbox: Gearbox,
    pub year: u32,
    pub mile: u64,
    pub body_health: f64,
    pub engine_status: EngineStatus,
}

/// `POST /user/predict-price/` response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PricePrediction {
    #[serde(default)]
    pub predicted_price: Option<f64>,
}

/// `POST /user/suggest-car/` body. `price` is in Toman.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RecommendationRequest {
    pub price: u64,
}

/// `POST /user/suggest-car/` response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Recommendations {
    #[serde(default)]
    pub suggested_cars: Vec<SuggestedCar>,
}

/// One recommended car. `predicted_price` is in Toman.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SuggestedCar {
    pub name: String,
    #[serde(default)]
    pub model: String,
    #[serde(default, deserialize_with = "deserialize_display_string")]
    pub year: String,
    #[serde(default)]
    pub gearbox: Option<String>,
    #[serde(default, deserialize_with = "deserialize_display_string")]
    pub mile: String,
    #[serde(default, deserialize_with = "deserialize_display_string")]
    pub body_health: String,
    #[serde(default)]
    pub engine_status: Option<String>,
    #[serde(default)]
    pub predicted_price: f64,
    #[serde(default)]
    pub price_usd: Option<f64>,
}

/// `GET /cars/search/` response envelope.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CarSearchResponse {
    #[serde(default)]
    pub data: Vec<CarSearchResult>,
}

/// One marketplace listing. `price` is in Toman.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarSearchResult {
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// Known listing sources and their logos.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingSource {
    Khodro45,
    HamrahMechanic,
}

impl ListingSource {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "khodro45" | "khdro45" => Some(Self::Khodro45),
            "hamrah-mechanic" => Some(Self::HamrahMechanic),
            _ => None,
        }
    }

    #[must_use]
    pub fn logo_url(self) -> &'static str {
        match self {
            Self::Khodro45 => "https://khodro45.com/build/images/khodro45-dark.svg",
            Self::HamrahMechanic => "https://www.hamrah-mechanic.com/_next/static/media/new-logo.25cc4dfa.svg",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Khodro45 => "Khodro45",
            Self::HamrahMechanic => "Hamrah Mechanic",
        }
    }
}

/// `GET /cars/names/` item.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CarName {
    pub name: String,
}

/// `GET /cars/models` item.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CarModel {
    pub model: String,
}

/// `POST /user/login/` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /user/register/` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Token pair returned by login and (sometimes) register.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TokenPair {
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub refresh: Option<String>,
}

impl TokenPair {
    #[must_use]
    pub fn into_session(self) -> Option<Session> {
        Session::from_tokens(self.access, self.refresh)
    }
}

fn deserialize_display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}
