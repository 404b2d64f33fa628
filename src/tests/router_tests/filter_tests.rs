use crate::router::handle;
use crate::tests::utils::{get, location, sample_catalog};

fn redirect(uri: &str) -> String {
    let catalog = sample_catalog();
    let resp = handle(get(uri), &catalog).unwrap();
    assert_eq!(resp.status(), 303);
    location(&resp).to_string()
}

#[test]
fn filter_form_redirects_to_canonical_url() {
    let loc = redirect(
        "/properties/filter?q=Ambattur&status=available&sqft_min=0&sqft_max=150000\
         &price_min=0&price_max=600000000&view=grid",
    );
    assert_eq!(loc, "/properties?q=Ambattur&status=available");
}

#[test]
fn filter_form_clears_highlighted_pin_but_keeps_selection() {
    let loc = redirect("/properties/filter?q=chennai&view=map&selected=1&pin=2");
    assert_eq!(loc, "/properties?q=chennai&view=map&selected=1");
}

#[test]
fn filter_form_normalizes_inverted_ranges() {
    let loc = redirect("/properties/filter?sqft_min=90000&sqft_max=10000&filters=1");
    assert_eq!(loc, "/properties?sqft_min=10000&sqft_max=90000&filters=1");
}

#[test]
fn empty_submission_lands_on_plain_listing() {
    assert_eq!(redirect("/properties/filter?q=&status=all"), "/properties");
}

#[test]
fn redirect_target_renders() {
    let catalog = sample_catalog();
    let loc = redirect("/properties/filter?q=sriperumbudur&view=list");
    let resp = handle(get(&loc), &catalog).unwrap();
    assert_eq!(resp.status(), 200);
}
