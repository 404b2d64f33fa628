// src/query.rs
//
// Listing page state lives in the URL. Every link on the page carries the
// state the reducer produced for that click, so requests stay independent.

use crate::domain::{
    Action, FilterCriteria, FixtureBounds, StatusFilter, ValueRange, ViewMode, ViewState,
};
use std::collections::HashMap;
use url::form_urlencoded;

pub const LISTING_PATH: &str = "/properties";

pub type Params = HashMap<String, String>;

/// Decodes a raw query string. Later duplicates win.
pub fn parse_params(query: Option<&str>) -> Params {
    query
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn number(params: &Params, key: &str) -> Option<u64> {
    params.get(key).and_then(|v| v.trim().parse().ok())
}

fn id(params: &Params, key: &str) -> Option<u32> {
    params.get(key).and_then(|v| v.trim().parse().ok())
}

fn range(params: &Params, min_key: &str, max_key: &str, outer: ValueRange) -> ValueRange {
    ValueRange::new(
        number(params, min_key).unwrap_or(outer.min),
        number(params, max_key).unwrap_or(outer.max),
    )
    .clamped(outer)
}

/// Criteria from `q`, `status` and the four range bounds.
///
/// Ranges are ordered and clamped to the fixture bounds here, the way the
/// slider widget would; anything unparsable falls back to its default.
pub fn criteria_from_params(params: &Params, bounds: &FixtureBounds) -> FilterCriteria {
    FilterCriteria {
        search_query: params.get("q").cloned().unwrap_or_default(),
        status: params
            .get("status")
            .map(|s| StatusFilter::parse_lenient(s))
            .unwrap_or_default(),
        square_footage: range(params, "sqft_min", "sqft_max", bounds.square_footage),
        price: range(params, "price_min", "price_max", bounds.price),
    }
}

/// Replays view mode, selection, pin and the advanced-filter toggle onto `state`.
pub fn restore_view(state: ViewState, params: &Params) -> ViewState {
    let mut state = state;
    if let Some(mode) = params.get("view").and_then(|v| v.parse::<ViewMode>().ok()) {
        state = state.apply(Action::SetViewMode(mode));
    }
    if let Some(selected) = id(params, "selected") {
        state = state.apply(Action::Select(selected));
    }
    if let Some(pin) = id(params, "pin") {
        state = state.apply(Action::HighlightPin(pin));
    }
    if params.get("filters").map(String::as_str) == Some("1") && !state.show_advanced {
        state = state.apply(Action::ToggleAdvancedFilters);
    }
    state
}

/// Full listing state from a request's query parameters.
pub fn state_from_params(params: &Params, bounds: FixtureBounds) -> ViewState {
    let criteria = criteria_from_params(params, &bounds);
    let state = ViewState::initial(bounds).apply(Action::UpdateCriteria(criteria));
    restore_view(state, params)
}

/// Canonical query string for `state`; defaults are left out.
pub fn to_query(state: &ViewState) -> String {
    let bounds = state.bounds();
    let criteria = &state.criteria;
    let mut out = form_urlencoded::Serializer::new(String::new());

    if !criteria.search_query.is_empty() {
        out.append_pair("q", &criteria.search_query);
    }
    if criteria.status != StatusFilter::All {
        out.append_pair("status", criteria.status.as_str());
    }
    if criteria.square_footage.min != bounds.square_footage.min {
        out.append_pair("sqft_min", &criteria.square_footage.min.to_string());
    }
    if criteria.square_footage.max != bounds.square_footage.max {
        out.append_pair("sqft_max", &criteria.square_footage.max.to_string());
    }
    if criteria.price.min != bounds.price.min {
        out.append_pair("price_min", &criteria.price.min.to_string());
    }
    if criteria.price.max != bounds.price.max {
        out.append_pair("price_max", &criteria.price.max.to_string());
    }
    if state.view_mode != ViewMode::Grid {
        out.append_pair("view", state.view_mode.as_str());
    }
    if let Some(selected) = state.selected {
        out.append_pair("selected", &selected.to_string());
    }
    if let Some(pin) = state.highlighted_pin {
        out.append_pair("pin", &pin.to_string());
    }
    if state.show_advanced {
        out.append_pair("filters", "1");
    }

    out.finish()
}

/// Link to the listing page showing `state`.
pub fn listing_href(state: &ViewState) -> String {
    let query = to_query(state);
    if query.is_empty() {
        LISTING_PATH.to_string()
    } else {
        format!("{LISTING_PATH}?{query}")
    }
}

/// Link for the result of applying `action` to `state`.
pub fn action_href(state: &ViewState, action: Action) -> String {
    listing_href(&state.apply(action))
}
