use crate::domain::{format_price, group_indian, group_thousands, PropertyRecord};
use crate::templates::components::status_badge;
use maud::{html, Markup};

/// Highlights shown on a card before "View Details".
const CARD_HIGHLIGHTS: usize = 3;

/// Grid tile for one property.
pub fn property_card(record: &PropertyRecord, thumbnail: Option<&str>, details_href: &str) -> Markup {
    html! {
        article class="card property-card" data-property-id=(record.id) {
            @if let Some(src) = thumbnail {
                img class="property-thumb" src=(src) alt=(record.name) loading="lazy";
            }
            div class="card-body" {
                div class="flex items-center justify-between" {
                    h2 { (record.name) }
                    (status_badge(record.status))
                }
                p class="location" { (record.submarket) ", " (record.city) }
                dl class="property-stats" {
                    dt { "Area" }
                    dd { (group_thousands(record.square_footage)) " sq ft" }
                    dt { "Rate/sq ft" }
                    dd { "₹" (group_indian(record.price_per_sq_ft)) }
                    dt { "Total" }
                    dd class="price" { (format_price(record.total_price)) }
                }
                @if !record.highlights.is_empty() {
                    ul class="highlights" {
                        @for highlight in record.highlights.iter().take(CARD_HIGHLIGHTS) {
                            li { (highlight) }
                        }
                    }
                }
                a class="btn" href=(details_href) { "View Details" }
            }
        }
    }
}

/// Compact table row for list mode.
pub fn property_row(record: &PropertyRecord, details_href: &str) -> Markup {
    html! {
        tr data-property-id=(record.id) {
            td { a href=(details_href) { (record.name) } }
            td { (record.submarket) ", " (record.city) }
            td class="num" { (group_thousands(record.square_footage)) }
            td class="num" { "₹" (group_indian(record.price_per_sq_ft)) }
            td class="num" { (format_price(record.total_price)) }
            td { (status_badge(record.status)) }
        }
    }
}
