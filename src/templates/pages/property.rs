use crate::domain::PropertyRecord;
use crate::templates::components::detail_panel;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Standalone, linkable detail page.
pub fn property_page(record: &PropertyRecord, thumbnail: Option<&str>) -> Markup {
    desktop_layout(
        &record.name,
        html! {
            main class="container" {
                p { a href="/properties" { "← All properties" } }
                (detail_panel(record, thumbnail, None))
            }
        },
    )
}
