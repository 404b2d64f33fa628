// src/domain/view_state.rs

use crate::domain::filter::{FilterCriteria, FixtureBounds};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
    Map,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Grid, ViewMode::List, ViewMode::Map];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
            ViewMode::Map => "map",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::List => "List",
            ViewMode::Map => "Map",
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            "map" => Ok(ViewMode::Map),
            other => Err(format!("unknown view mode '{other}'")),
        }
    }
}

/// Everything the listing page needs to know about what the user is looking at.
///
/// Values are never mutated in place; [`reduce`] hands back a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub view_mode: ViewMode,
    /// Property whose detail view is open.
    pub selected: Option<u32>,
    /// Map pin the user last clicked. Independent of `selected`.
    pub highlighted_pin: Option<u32>,
    pub criteria: FilterCriteria,
    /// Whether the range sliders ("More filters") are showing.
    pub show_advanced: bool,
    bounds: FixtureBounds,
}

/// User interactions on the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetViewMode(ViewMode),
    Select(u32),
    Dismiss,
    HighlightPin(u32),
    ClearPin,
    UpdateCriteria(FilterCriteria),
    ToggleAdvancedFilters,
    Reset,
}

impl ViewState {
    /// State on first page load: grid view, nothing selected, full ranges.
    pub fn initial(bounds: FixtureBounds) -> Self {
        Self {
            view_mode: ViewMode::Grid,
            selected: None,
            highlighted_pin: None,
            criteria: FilterCriteria::unrestricted(&bounds),
            show_advanced: false,
            bounds,
        }
    }

    pub fn bounds(&self) -> &FixtureBounds {
        &self.bounds
    }

    /// Convenience for `reduce(self.clone(), action)`.
    pub fn apply(&self, action: Action) -> Self {
        reduce(self.clone(), action)
    }
}

pub fn reduce(state: ViewState, action: Action) -> ViewState {
    match action {
        Action::SetViewMode(view_mode) => ViewState { view_mode, ..state },
        Action::Select(id) => ViewState {
            selected: Some(id),
            ..state
        },
        Action::Dismiss => ViewState {
            selected: None,
            ..state
        },
        Action::HighlightPin(id) => ViewState {
            highlighted_pin: Some(id),
            ..state
        },
        Action::ClearPin => ViewState {
            highlighted_pin: None,
            ..state
        },
        // A changed result set may no longer contain the highlighted pin.
        Action::UpdateCriteria(criteria) => ViewState {
            criteria,
            highlighted_pin: None,
            ..state
        },
        Action::ToggleAdvancedFilters => ViewState {
            show_advanced: !state.show_advanced,
            ..state
        },
        Action::Reset => {
            let criteria = FilterCriteria::unrestricted(&state.bounds);
            ViewState {
                criteria,
                highlighted_pin: None,
                ..state
            }
        }
    }
}
