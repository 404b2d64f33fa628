use crate::router::handle;
use crate::tests::utils::{body_string, get, sample_catalog};
use serde_json::Value;

fn api(uri: &str) -> Value {
    let catalog = sample_catalog();
    let mut resp = handle(get(uri), &catalog).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("Content-Type").unwrap(), "application/json");
    serde_json::from_str(&body_string(&mut resp)).unwrap()
}

fn ids(value: &Value) -> Vec<u64> {
    value["properties"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect()
}

#[test]
fn api_returns_all_records_by_default() {
    let value = api("/api/properties");
    assert_eq!(value["count"], 3);
    assert_eq!(ids(&value), vec![1, 2, 3]);
}

#[test]
fn api_applies_filters() {
    let value = api("/api/properties?status=available");
    assert_eq!(value["count"], 2);
    assert_eq!(ids(&value), vec![1, 3]);

    let value = api("/api/properties?sqft_max=50000");
    assert_eq!(ids(&value), vec![1, 3]);

    let value = api("/api/properties?sqft_max=49999");
    assert_eq!(ids(&value), vec![3]);
}

#[test]
fn api_uses_fixture_field_names() {
    let value = api("/api/properties?q=sriperumbudur");
    let record = &value["properties"][0];
    assert_eq!(record["status"], "under-offer");
    assert_eq!(record["squareFootage"], 85000);
    assert_eq!(record["totalPrice"], 323000000);
    assert!(record["lotSize"].is_null());
}
