use crate::domain::{format_price, group_indian, group_thousands, PropertyRecord};
use crate::templates::components::status_badge;
use maud::{html, Markup};

/// Full property details. `dismiss_href` closes the panel when rendered as a
/// dialog over the listing; pass `None` on the standalone detail page.
pub fn detail_panel(record: &PropertyRecord, thumbnail: Option<&str>, dismiss_href: Option<&str>) -> Markup {
    html! {
        section class="card property-detail" id="property-details" role="dialog" aria-labelledby="property-detail-title" {
            div class="flex items-center justify-between" {
                div {
                    h2 id="property-detail-title" { (record.name) }
                    p class="location" { (record.submarket) ", " (record.city) }
                }
                (status_badge(record.status))
                @if let Some(href) = dismiss_href {
                    a class="btn btn-ghost" href=(href) aria-label="Close" { "✕" }
                }
            }

            @if let Some(src) = thumbnail {
                img class="property-hero" src=(src) alt=(record.name);
            }

            dl class="property-stats" {
                dt { "Area" }
                dd { (group_thousands(record.square_footage)) " sq ft" }
                dt { "Rate/sq ft" }
                dd { "₹" (group_indian(record.price_per_sq_ft)) }
                dt { "Lot Size" }
                dd {
                    @match record.lot_size {
                        Some(lot) => { (group_thousands(lot)) " sq ft" },
                        None => "N/A",
                    }
                }
                dt { "Year Built" }
                dd {
                    @match record.year_built {
                        Some(year) => (year),
                        None => "N/A",
                    }
                }
            }

            div class="total-price" {
                p { "Total Price" }
                p class="price" { (format_price(record.total_price)) }
            }

            @if !record.description.is_empty() {
                h3 { "Description" }
                p { (record.description) }
            }

            @if !record.highlights.is_empty() {
                h3 { "Key Features & Highlights" }
                ul class="highlights" {
                    @for highlight in &record.highlights {
                        li { (highlight) }
                    }
                }
            }

            @if let Some(zoning) = &record.zoning {
                h3 { "Zoning Information" }
                span class="badge" { (zoning) }
            }

            h3 { "Contact Information" }
            dl class="contact" {
                dt { "Email" }
                dd { a href=(format!("mailto:{}", record.contact_email)) { (record.contact_email) } }
                dt { "Phone" }
                dd { (record.contact_phone) }
            }
        }
    }
}
