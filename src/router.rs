use crate::catalog::Catalog;
use crate::domain::{Action, PropertyRecord, ViewState};
use crate::errors::ServerError;
use crate::query::{criteria_from_params, listing_href, parse_params, restore_view, state_from_params};
use crate::responses::{error_to_response, html_response, json_response, redirect_response, ResultResp};
use crate::templates::pages::{home_page, properties_page, property_page, ListingVm};
use astra::{Request, Response};
use serde::Serialize;
use std::time::Instant;

/// Entry point for the server loop: routes, converts errors to pages, logs.
pub fn serve(req: Request, catalog: &Catalog) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let resp = match handle(req, catalog) {
        Ok(resp) => resp,
        Err(err) => {
            if matches!(err, ServerError::InternalError) {
                tracing::error!(%method, %path, error = %err, "request failed");
            }
            error_to_response(err)
        }
    };

    tracing::info!(
        %method,
        %path,
        status = resp.status().as_u16(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "request"
    );
    resp
}

pub fn handle(req: Request, catalog: &Catalog) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_params(req.uri().query());

    match (method, path) {
        ("GET", "/") => html_response(home_page(catalog.records().len())),
        ("GET", "/properties") => {
            let state = state_from_params(&params, catalog.bounds());
            html_response(properties_page(&ListingVm::build(catalog, &state)))
        }
        ("GET", "/properties/filter") => {
            let prior = restore_view(ViewState::initial(catalog.bounds()), &params);
            let criteria = criteria_from_params(&params, &catalog.bounds());
            let next = prior.apply(Action::UpdateCriteria(criteria));
            redirect_response(&listing_href(&next))
        }
        ("GET", "/api/properties") => {
            let criteria = criteria_from_params(&params, &catalog.bounds());
            let properties = catalog.filter(&criteria);
            json_response(&ApiListing {
                count: properties.len(),
                properties,
            })
        }
        ("GET", p) if p.starts_with("/properties/") => {
            let record = property_by_path(catalog, &p["/properties/".len()..])?;
            html_response(property_page(record, catalog.thumbnail_url(record)))
        }
        (m, _) if m != "GET" => Err(ServerError::BadRequest(format!("{m} is not supported"))),
        _ => Err(ServerError::NotFound),
    }
}

#[derive(Serialize)]
struct ApiListing<'a> {
    count: usize,
    properties: Vec<&'a PropertyRecord>,
}

fn property_by_path<'a>(catalog: &'a Catalog, raw_id: &str) -> Result<&'a PropertyRecord, ServerError> {
    let id: u32 = raw_id.parse().map_err(|_| ServerError::NotFound)?;
    catalog.get(id).ok_or(ServerError::NotFound)
}
