use crate::catalog::{Catalog, ImageLookup};
use crate::domain::FixtureBounds;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// Catalog built from the bundled fixtures.
pub fn bundled_catalog() -> Catalog {
    Catalog::bundled().unwrap_or_else(|e| panic!("Bundled fixtures failed to load: {e}"))
}

/// Small catalog with two available records and one under offer.
pub fn sample_catalog() -> Catalog {
    Catalog::new(
        crate::domain::fixtures::sample_records(),
        FixtureBounds::default(),
        ImageLookup::bundled(),
    )
    .unwrap()
}

pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
