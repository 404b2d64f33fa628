use crate::router::handle;
use crate::tests::utils::{body_string, bundled_catalog, get, sample_catalog};

fn page(uri: &str) -> String {
    let catalog = sample_catalog();
    let mut resp = handle(get(uri), &catalog).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );
    body_string(&mut resp)
}

#[test]
fn home_links_to_listing() {
    let catalog = bundled_catalog();
    let mut resp = handle(get("/"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("href=\"/properties\""));
    assert!(body.contains(&format!("<strong>{}</strong>", catalog.records().len())));
}

#[test]
fn default_listing_shows_every_record_in_grid() {
    let body = page("/properties");
    assert!(body.contains("Showing <strong>3</strong> properties"));
    assert_eq!(body.matches("class=\"card property-card\"").count(), 3);
    assert!(!body.contains("id=\"property-details\""));
    // No reset button until query or status narrow the results.
    assert!(!body.contains(">Reset<"));
}

#[test]
fn grid_keeps_fixture_order() {
    let body = page("/properties");
    let first = body.find("Premium Industrial Warehouse Complex").unwrap();
    let second = body.find("Modern Manufacturing Facility").unwrap();
    let third = body.find("Logistics Park Plot").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn status_filter_narrows_results() {
    let body = page("/properties?status=available");
    assert!(body.contains("Showing <strong>2</strong> properties"));
    assert!(!body.contains("Modern Manufacturing Facility"));
    assert!(body.contains(">Reset<"));
}

#[test]
fn search_is_case_insensitive_over_the_wire() {
    let lower = page("/properties?q=chennai");
    let upper = page("/properties?q=CHENNAI");
    assert!(lower.contains("Showing <strong>2</strong> properties"));
    assert!(upper.contains("Showing <strong>2</strong> properties"));
}

#[test]
fn empty_results_show_clear_all_link() {
    let body = page("/properties?q=mumbai&view=list");
    assert!(body.contains("id=\"no-results\""));
    assert!(body.contains("No properties found matching your criteria."));
    // Reset keeps the view mode.
    assert!(body.contains("href=\"/properties?view=list\""));
}

#[test]
fn list_mode_renders_a_table() {
    let body = page("/properties?view=list");
    assert!(body.contains("class=\"property-list\""));
    assert_eq!(body.matches("<tr data-property-id=").count(), 3);
    assert!(body.contains("₹22.50 Cr"));
    assert!(body.contains("₹45.00 L"));
}

#[test]
fn map_mode_groups_by_submarket() {
    let body = page("/properties?view=map&pin=3");
    assert!(body.contains("class=\"map-board\""));
    assert!(body.contains("<h4>Kurichi</h4>"));
    assert!(body.contains("pin-info"));
}

#[test]
fn selection_opens_detail_with_dismiss_link() {
    let body = page("/properties?view=list&selected=2");
    assert!(body.contains("id=\"property-details\""));
    assert!(body.contains("Heavy-duty flooring"));
    assert!(body.contains("href=\"/properties?view=list\" aria-label=\"Close\""));
}

#[test]
fn unknown_selection_is_ignored() {
    let body = page("/properties?selected=999");
    assert!(!body.contains("id=\"property-details\""));
    assert!(body.contains("Showing <strong>3</strong> properties"));
}

#[test]
fn selection_survives_filtering_it_out() {
    let body = page("/properties?status=available&selected=2");
    assert!(body.contains("Showing <strong>2</strong> properties"));
    assert!(body.contains("id=\"property-details\""));
}

#[test]
fn advanced_filters_toggle() {
    let closed = page("/properties");
    assert!(closed.contains("More Filters"));
    assert!(closed.contains("href=\"/properties?filters=1\""));
    assert!(!closed.contains("class=\"advanced-filters\""));

    let open = page("/properties?filters=1");
    assert!(open.contains("Hide Filters"));
    assert!(open.contains("class=\"advanced-filters\""));
    assert!(open.contains("Square Footage: 0 - 150,000 sq ft"));
    assert!(open.contains("Price Range: ₹0.00 L - ₹60.00 Cr"));
}

#[test]
fn unknown_route_is_not_found() {
    let catalog = sample_catalog();
    let err = handle(get("/careers"), &catalog).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::NotFound));
}

#[test]
fn non_get_requests_are_rejected() {
    let catalog = sample_catalog();
    let mut req = get("/properties");
    *req.method_mut() = http::Method::POST;
    let err = handle(req, &catalog).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::BadRequest(_)));
    assert_eq!(err.status(), 400);
}

#[test]
fn whitespace_search_is_not_treated_as_empty() {
    let body = page("/properties?q=%20%20%20");
    assert!(body.contains("Showing <strong>0</strong> properties"));
    assert!(body.contains("id=\"no-results\""));
    assert!(body.contains(">Reset<"));
}
