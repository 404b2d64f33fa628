use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, bundled_catalog, get};

#[test]
fn detail_page_renders_record() {
    let catalog = bundled_catalog();
    let mut resp = handle(get("/properties/1"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Premium Industrial Warehouse Complex"));
    assert!(body.contains("₹22.50 Cr"));
    assert!(body.contains("Ambattur Industrial Estate, Chennai"));
    assert!(body.contains("sales@knockturn.com"));
    assert!(body.contains("/static/images/warehouse.jpg"));
}

#[test]
fn detail_page_without_thumbnail_has_no_image() {
    let catalog = bundled_catalog();
    // Record 6 carries no thumbnail key.
    let mut resp = handle(get("/properties/6"), &catalog).unwrap();
    let body = body_string(&mut resp);
    assert!(!body.contains("class=\"property-hero\""));
    assert!(body.contains("Year Built"));
    assert!(body.contains("N/A"));
}

#[test]
fn unknown_or_malformed_ids_are_not_found() {
    let catalog = bundled_catalog();
    for uri in ["/properties/999", "/properties/abc", "/properties/1/extra"] {
        let err = handle(get(uri), &catalog).unwrap_err();
        assert!(matches!(err, ServerError::NotFound), "{uri}");
    }
}

#[test]
fn not_found_renders_error_page() {
    let catalog = bundled_catalog();
    let mut resp = crate::router::serve(get("/properties/999"), &catalog);
    assert_eq!(resp.status(), 404);
    let body = body_string(&mut resp);
    assert!(body.contains("Error 404"));
}
