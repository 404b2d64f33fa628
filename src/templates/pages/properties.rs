use crate::catalog::Catalog;
use crate::domain::{Action, PropertyRecord, ViewMode, ViewState};
use crate::query::action_href;
use crate::templates::components::{detail_panel, filter_panel, map_board, property_card, property_row};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct ListingVm<'a> {
    pub state: &'a ViewState,
    pub results: Vec<&'a PropertyRecord>,
    /// Selected record, if the id names something in the catalog.
    pub selected: Option<&'a PropertyRecord>,
    pub catalog: &'a Catalog,
}

impl<'a> ListingVm<'a> {
    pub fn build(catalog: &'a Catalog, state: &'a ViewState) -> Self {
        Self {
            state,
            results: catalog.filter(&state.criteria),
            selected: state.selected.and_then(|id| catalog.get(id)),
            catalog,
        }
    }
}

pub fn properties_page(vm: &ListingVm) -> Markup {
    let state = vm.state;

    desktop_layout(
        "Industrial Properties",
        html! {
            main class="container" id="industrial-properties" {
                h1 { "Industrial Properties for Sale" }
                p {
                    "Browse our premium selection of industrial properties in Chennai with strategic "
                    "locations and modern facilities."
                }

                (filter_panel(state))

                div class="flex items-center justify-between" {
                    p id="results-count" {
                        "Showing " strong { (vm.results.len()) } " properties"
                    }
                    (view_mode_switch(state))
                }

                @if vm.results.is_empty() {
                    div class="card" id="no-results" {
                        p { "No properties found matching your criteria." }
                        a class="btn" href=(action_href(state, Action::Reset)) { "Clear All Filters" }
                    }
                } @else {
                    @match state.view_mode {
                        ViewMode::Grid => (grid(vm)),
                        ViewMode::List => (list(vm)),
                        ViewMode::Map => (map_board(&vm.results, state)),
                    }
                }

                @if let Some(record) = vm.selected {
                    (detail_panel(
                        record,
                        vm.catalog.thumbnail_url(record),
                        Some(action_href(state, Action::Dismiss).as_str()),
                    ))
                }
            }
        },
    )
}

fn view_mode_switch(state: &ViewState) -> Markup {
    html! {
        nav class="view-modes" aria-label="View mode" {
            @for mode in ViewMode::ALL {
                @if mode == state.view_mode {
                    span class="btn btn-active" aria-current="true" { (mode.label()) }
                } @else {
                    a class="btn btn-outline" href=(action_href(state, Action::SetViewMode(mode))) { (mode.label()) }
                }
            }
        }
    }
}

fn grid(vm: &ListingVm) -> Markup {
    html! {
        div class="property-grid" {
            @for record in &vm.results {
                (property_card(
                    record,
                    vm.catalog.thumbnail_url(record),
                    &action_href(vm.state, Action::Select(record.id)),
                ))
            }
        }
    }
}

fn list(vm: &ListingVm) -> Markup {
    html! {
        table class="property-list" {
            thead {
                tr {
                    th { "Property" }
                    th { "Location" }
                    th { "Area (sq ft)" }
                    th { "Rate/sq ft" }
                    th { "Total Price" }
                    th { "Status" }
                }
            }
            tbody {
                @for record in &vm.results {
                    (property_row(record, &action_href(vm.state, Action::Select(record.id))))
                }
            }
        }
    }
}
