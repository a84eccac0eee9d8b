//! Deferred user actions that can survive a detour through sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! A gated form submit is captured as an [`Intent`] before anything touches
//! the network. When the user has no session the intent rides along with the
//! navigation to the auth page and comes back on success; when they do, the
//! same intent is dispatched immediately. Pages never rebuild the request
//! from scratch on resume, they replay the payload carried here.
//!
//! Intents are serialized to JSON while attached to a navigation, matching
//! the structured-clone contract of browser history state.

#[cfg(test)]
#[path = "intent_test.rs"]
mod intent_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{EngineStatus, Gearbox, PricePredictionRequest};
use crate::state::navigation::View;
use crate::state::prediction::PredictionTab;
use crate::util::format::{normalize_digits, rial_to_toman};

/// A deferred user action awaiting (or bypassing) authentication.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    /// Correlation id for logs; carries no semantics.
    pub id: String,
    /// View the user returns to once authenticated.
    pub target_view: View,
    pub payload: IntentPayload,
    /// Replay without asking once a session exists.
    pub auto_resume: bool,
}

impl Intent {
    /// Create an auto-resuming intent that returns to the prediction page.
    #[must_use]
    pub fn new(payload: IntentPayload) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            target_view: View::Prediction,
            payload,
            auto_resume: true,
        }
    }

    /// Require the user to resubmit by hand after authenticating.
    #[must_use]
    pub fn manual(mut self) -> Self {
        self.auto_resume = false;
        self
    }

    /// Whether every field the payload needs for a request is populated.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.payload.is_complete()
    }

    /// Serialize for attachment to a navigation.
    ///
    /// # Errors
    ///
    /// Returns an error string if serialization fails.
    pub fn encode(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("intent encode failed: {e}"))
    }

    /// Parse an intent previously produced by [`Intent::encode`].
    ///
    /// # Errors
    ///
    /// Returns an error string if `raw` is not a valid encoded intent.
    pub fn decode(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| format!("intent decode failed: {e}"))
    }
}

/// Parameters of the gated action, one variant per prediction-page tab.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntentPayload {
    PricePrediction(PredictionForm),
    Recommendation { budget_rial: u64 },
    Search { term: String },
}

impl IntentPayload {
    /// Tab that owns this payload's form.
    #[must_use]
    pub fn tab(&self) -> PredictionTab {
        match self {
            Self::PricePrediction(_) => PredictionTab::PredictPrice,
            Self::Recommendation { .. } => PredictionTab::Recommendations,
            Self::Search { .. } => PredictionTab::Explorer,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        match self {
            Self::PricePrediction(form) => !form.name.trim().is_empty() && !form.model.trim().is_empty(),
            Self::Recommendation { budget_rial } => *budget_rial > 0,
            Self::Search { term } => !term.trim().is_empty(),
        }
    }

    /// Short label for log lines.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PricePrediction(_) => "price_prediction",
            Self::Recommendation { .. } => "recommendation",
            Self::Search { .. } => "search",
        }
    }
}

/// Raw values of the price-prediction form.
///
/// Numeric fields stay strings until submit so partially typed input
/// (including Persian digits) round-trips through a sign-in detour intact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionForm {
    pub name: String,
    pub model: String,
    pub gearbox: Gearbox,
    pub year: String,
    pub mile: String,
    pub body_health: f64,
    pub engine_status: EngineStatus,
}

impl Default for PredictionForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            model: String::new(),
            gearbox: Gearbox::Automatic,
            year: String::new(),
            mile: String::new(),
            body_health: 1.0,
            engine_status: EngineStatus::Original,
        }
    }
}

pub const BODY_HEALTH_MIN: f64 = 1.0;
pub const BODY_HEALTH_MAX: f64 = 10.0;

impl PredictionForm {
    /// Convert the form into a wire request.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message naming the first invalid field.
    pub fn to_request(&self) -> Result<PricePredictionRequest, String> {
        let name = self.name.trim();
        let model = self.model.trim();
        if name.is_empty() {
            return Err("Select a brand.".to_owned());
        }
        if model.is_empty() {
            return Err("Select a model.".to_owned());
        }
        let year = normalize_digits(self.year.trim())
            .parse::<u32>()
            .map_err(|_| "Enter a valid year.".to_owned())?;
        let mile = normalize_digits(self.mile.trim())
            .parse::<u64>()
            .map_err(|_| "Enter a valid mileage.".to_owned())?;
        if !(BODY_HEALTH_MIN..=BODY_HEALTH_MAX).contains(&self.body_health) {
            return Err("Body health must be between 1 and 10.".to_owned());
        }
        Ok(PricePredictionRequest {
            name: name.to_owned(),
            model: model.to_owned(),
            gearbox: self.gearbox,
            year,
            mile,
            body_health: self.body_health,
            engine_status: self.engine_status,
        })
    }
}

/// Budget sent to the recommendation endpoint, in Toman.
#[must_use]
pub fn recommendation_price(budget_rial: u64) -> u64 {
    rial_to_toman(budget_rial)
}
