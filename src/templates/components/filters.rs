use crate::domain::{format_price, group_thousands, Action, PropertyStatus, StatusFilter, ViewState};
use crate::query::action_href;
use maud::{html, Markup};

const STATUS_OPTIONS: [(StatusFilter, &str); 3] = [
    (StatusFilter::All, "All Properties"),
    (StatusFilter::Only(PropertyStatus::Available), "Available"),
    (StatusFilter::Only(PropertyStatus::UnderOffer), "Under Offer"),
];

/// Search form. Submits to `/properties/filter`, which applies the new
/// criteria through the reducer and redirects back.
pub fn filter_panel(state: &ViewState) -> Markup {
    let criteria = &state.criteria;
    let bounds = state.bounds();

    html! {
        form class="card search-filters" action="/properties/filter" method="get" {
            div class="flex items-center" {
                input
                    type="search"
                    name="q"
                    value=(criteria.search_query)
                    placeholder="Search by name, city, or location...";

                select name="status" {
                    @for (option, label) in STATUS_OPTIONS {
                        option value=(option.as_str()) selected[criteria.status == option] { (label) }
                    }
                }

                button type="submit" class="btn" { "Search" }

                a class="btn btn-outline" href=(action_href(state, Action::ToggleAdvancedFilters)) {
                    @if state.show_advanced { "Hide Filters" } @else { "More Filters" }
                }

                @if criteria.narrows_by_text_or_status() {
                    a class="btn btn-ghost" href=(action_href(state, Action::Reset)) { "Reset" }
                }
            }

            @if state.show_advanced {
                div class="advanced-filters" {
                    fieldset {
                        legend {
                            "Square Footage: "
                            (group_thousands(criteria.square_footage.min)) " - "
                            (group_thousands(criteria.square_footage.max)) " sq ft"
                        }
                        input type="number" name="sqft_min"
                            min=(bounds.square_footage.min) max=(bounds.square_footage.max)
                            step=(bounds.square_footage_step) value=(criteria.square_footage.min);
                        input type="number" name="sqft_max"
                            min=(bounds.square_footage.min) max=(bounds.square_footage.max)
                            step=(bounds.square_footage_step) value=(criteria.square_footage.max);
                    }
                    fieldset {
                        legend {
                            "Price Range: "
                            (format_price(criteria.price.min)) " - " (format_price(criteria.price.max))
                        }
                        input type="number" name="price_min"
                            min=(bounds.price.min) max=(bounds.price.max)
                            step=(bounds.price_step) value=(criteria.price.min);
                        input type="number" name="price_max"
                            min=(bounds.price.min) max=(bounds.price.max)
                            step=(bounds.price_step) value=(criteria.price.max);
                    }
                }
            } @else {
                // Ranges survive a search while the sliders are hidden.
                input type="hidden" name="sqft_min" value=(criteria.square_footage.min);
                input type="hidden" name="sqft_max" value=(criteria.square_footage.max);
                input type="hidden" name="price_min" value=(criteria.price.min);
                input type="hidden" name="price_max" value=(criteria.price.max);
            }

            // View state the filter route hands back to the reducer.
            input type="hidden" name="view" value=(state.view_mode.as_str());
            @if let Some(selected) = state.selected {
                input type="hidden" name="selected" value=(selected);
            }
            @if let Some(pin) = state.highlighted_pin {
                input type="hidden" name="pin" value=(pin);
            }
            @if state.show_advanced {
                input type="hidden" name="filters" value="1";
            }
        }
    }
}
