// templates/pages/home.rs

use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

pub fn home_page(listed: usize) -> Markup {
    desktop_layout(
        "Home",
        html! {
            main class="container" {
                h1 { "Industrial Real Estate in Chennai" }

                (card("Industrial Properties", html! {
                    p { "Warehouses, manufacturing plants and industrial plots across Chennai's key submarkets." }
                    p { strong { (listed) } " properties currently listed." }
                    a class="btn" href="/properties" { "Browse Properties" }
                }))
            }
        },
    )
}
