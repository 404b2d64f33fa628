use maud::{html, Markup};

pub mod card;
pub mod detail;
pub mod error;
pub mod filters;
pub mod map;
pub mod property_card;

pub use card::card;
pub use detail::detail_panel;
pub use error::error_page;
pub use filters::filter_panel;
pub use map::map_board;
pub use property_card::{property_card, property_row};

use crate::domain::PropertyStatus;

pub fn status_badge(status: PropertyStatus) -> Markup {
    let class = match status {
        PropertyStatus::Available => "badge badge-available",
        PropertyStatus::UnderOffer => "badge badge-under-offer",
    };
    html! {
        span class=(class) { (status.label()) }
    }
}
