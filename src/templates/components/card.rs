use maud::{html, Markup};

/// Titled panel used for the home page call-outs.
pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 class="card-title" { (title) }
            div class="card-body" { (body) }
        }
    }
}
