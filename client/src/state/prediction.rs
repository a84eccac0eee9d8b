//! View state for the prediction page and its three tabs.
//!
//! DESIGN
//! ======
//! Each tab keeps its own form, loading flag, result and error so that a
//! replayed intent can pre-fill one tab without disturbing the others.
//! Transitions live here as plain methods; components only call them.

#[cfg(test)]
#[path = "prediction_test.rs"]
mod prediction_test;

use crate::net::types::{CarSearchResult, SuggestedCar};
use crate::state::intent::{IntentPayload, PredictionForm};

/// Tabs of the prediction page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PredictionTab {
    #[default]
    PredictPrice,
    Recommendations,
    Explorer,
}

impl PredictionTab {
    pub const ALL: [Self; 3] = [Self::PredictPrice, Self::Recommendations, Self::Explorer];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PredictPrice => "Predict Price",
            Self::Recommendations => "Recommendations",
            Self::Explorer => "Car Explorer",
        }
    }
}

/// Price-prediction tab.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PricePredictionState {
    pub form: PredictionForm,
    pub loading: bool,
    pub predicted_price: Option<f64>,
    pub error: Option<String>,
}

/// Recommendations tab. `budget` holds digits only; separators are display-only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecommendationsState {
    pub budget: String,
    pub loading: bool,
    pub items: Vec<SuggestedCar>,
    pub error: Option<String>,
    pub has_searched: bool,
}

/// Car-explorer (listing search) tab.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExplorerState {
    pub term: String,
    pub loading: bool,
    pub results: Vec<CarSearchResult>,
    pub error: Option<String>,
    pub has_searched: bool,
}

/// Shared request lifecycle for the three tabs.
pub trait RequestState {
    type Output;

    fn begin(&mut self);
    fn succeed(&mut self, output: Self::Output);
    fn fail(&mut self, message: String);
}

impl RequestState for PricePredictionState {
    type Output = Option<f64>;

    fn begin(&mut self) {
        self.loading = true;
        self.predicted_price = None;
        self.error = None;
    }

    fn succeed(&mut self, output: Option<f64>) {
        self.loading = false;
        self.predicted_price = output;
    }

    fn fail(&mut self, message: String) {
        self.loading = false;
        self.predicted_price = None;
        self.error = Some(message);
    }
}

impl RequestState for RecommendationsState {
    type Output = Vec<SuggestedCar>;

    fn begin(&mut self) {
        self.loading = true;
        self.items.clear();
        self.error = None;
    }

    fn succeed(&mut self, output: Vec<SuggestedCar>) {
        self.loading = false;
        self.items = output;
        self.has_searched = true;
    }

    fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}

impl RequestState for ExplorerState {
    type Output = Vec<CarSearchResult>;

    fn begin(&mut self) {
        self.loading = true;
        self.results.clear();
        self.error = None;
    }

    fn succeed(&mut self, output: Vec<CarSearchResult>) {
        self.loading = false;
        self.results = output;
        self.has_searched = true;
    }

    fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}

/// Copy a carried payload back into the matching tab's form.
pub fn prefill(
    payload: &IntentPayload,
    price: &mut PricePredictionState,
    recommendations: &mut RecommendationsState,
    explorer: &mut ExplorerState,
) {
    match payload {
        IntentPayload::PricePrediction(form) => price.form = form.clone(),
        IntentPayload::Recommendation { budget_rial } => {
            recommendations.budget = if *budget_rial == 0 { String::new() } else { budget_rial.to_string() };
        }
        IntentPayload::Search { term } => explorer.term.clone_from(term),
    }
}
