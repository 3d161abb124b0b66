//! tiny_http server adapter
//!
//! Handles routing, body parsing, and response conversion for tiny_http.

use std::io::{Cursor, Read as _};

use percent_encoding::percent_decode_str;
use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use policyhub::api::{self, ApiError, ApiResponse};
use policyhub::core::ports::{ContractRefresher, PolicyRepository};
use policyhub::core::services::PolicyService;

// =============================================================================
// SERVER LOOP
// =============================================================================

/// Serve the policy API until the process is stopped
///
/// Requests are handled one at a time on the calling thread.
pub fn serve<R, C>(service: &PolicyService<R, C>, addr: &str) -> anyhow::Result<()>
where
    R: PolicyRepository,
    C: ContractRefresher,
{
    let server = Server::http(addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;
    log::info!("Policy API listening on http://{addr}/api/v1/policies");

    for mut request in server.incoming_requests() {
        log::debug!("{} {}", request.method(), request.url());
        let response = handle_api_request(service, &mut request);
        if let Err(e) = request.respond(response) {
            log::warn!("Failed to send response: {e}");
        }
    }

    Ok(())
}

// =============================================================================
// ROUTING
// =============================================================================

/// A resolved API endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `GET /policies`
    List,
    /// `GET /policies?grouped=true`
    ListGrouped,
    /// `GET /policies/{id}`
    Get(String),
    /// `POST /policies`
    Create,
    /// `PUT /policies`
    Update,
    /// `DELETE /policies/{id}`
    Delete(String),
}

/// Map a method and URL to a route
///
/// Supports both `/api/v1/...` (versioned) and `/api/...` (legacy) prefixes.
/// Policy IDs in the path are percent-decoded. Unknown endpoints are
/// reported as not found, undecodable IDs as bad requests.
pub fn route(method: &Method, url: &str) -> Result<Route, ApiError> {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let api_path = path
        .strip_prefix("/api/v1")
        .or_else(|| path.strip_prefix("/api"))
        .unwrap_or(path);
    let api_path = api_path.trim_end_matches('/');

    let route = match (method, api_path) {
        (&Method::Get, "/policies") if wants_grouped(query) => Some(Route::ListGrouped),
        (&Method::Get, "/policies") => Some(Route::List),
        (&Method::Post, "/policies") => Some(Route::Create),
        (&Method::Put, "/policies") => Some(Route::Update),
        (&Method::Get, _) => policy_id(api_path)?.map(Route::Get),
        (&Method::Delete, _) => policy_id(api_path)?.map(Route::Delete),
        _ => None,
    };

    route.ok_or_else(|| ApiError::not_found(format!("API endpoint not found: {method} {url}")))
}

fn wants_grouped(query: &str) -> bool {
    query
        .split('&')
        .any(|pair| matches!(pair, "grouped" | "grouped=true" | "grouped=1"))
}

fn policy_id(api_path: &str) -> Result<Option<String>, ApiError> {
    let Some(segment) = api_path
        .strip_prefix("/policies/")
        .filter(|id| !id.contains('/'))
    else {
        return Ok(None);
    };

    percent_decode_str(segment)
        .decode_utf8()
        .map(|id| Some(id.into_owned()))
        .map_err(|e| ApiError::bad_request(format!("Invalid policy ID in path: {e}")))
}

/// Handle an API request and return a response
pub fn handle_api_request<R, C>(
    service: &PolicyService<R, C>,
    request: &mut Request,
) -> Response<Cursor<Vec<u8>>>
where
    R: PolicyRepository,
    C: ContractRefresher,
{
    let method = request.method().clone();
    let url = request.url().to_string();

    let route = match route(&method, &url) {
        Ok(route) => route,
        Err(e) => return error_response(&e),
    };

    match route {
        Route::List => handle_result(api::list_policies(service)),
        Route::ListGrouped => handle_result(api::list_grouped_policies(service)),
        Route::Get(id) => handle_result(api::get_policy(service, &id)),
        Route::Create => match read_json_body(request) {
            Ok(req) => handle_result(api::create_policy(service, req)),
            Err(e) => error_response(&e),
        },
        Route::Update => match read_json_body(request) {
            Ok(req) => handle_result(api::update_policy(service, req)),
            Err(e) => error_response(&e),
        },
        Route::Delete(id) => handle_result(api::delete_policy(service, &id)),
    }
}

// =============================================================================
// BODY PARSING
// =============================================================================

/// Read and parse an optional JSON body
///
/// An empty body or JSON `null` yields `None`; the service decides what a
/// missing request means.
fn read_json_body<T: DeserializeOwned>(request: &mut Request) -> Result<Option<T>, ApiError> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;

    parse_body(&body)
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<Option<T>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a handler result to an HTTP response
fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Response<Cursor<Vec<u8>>> {
    match result {
        Ok(data) => json_response(&ApiResponse::success(data), 200),
        Err(e) => error_response(&e),
    }
}

/// Create an error JSON response with appropriate status code
fn error_response(error: &ApiError) -> Response<Cursor<Vec<u8>>> {
    let response = ApiResponse::<()>::error(error);
    json_response(&response, error.status_code())
}

/// Serialize data to JSON response with status code
fn json_response<T: Serialize>(data: &T, status: u16) -> Response<Cursor<Vec<u8>>> {
    let json = serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
    let response = Response::from_data(json.into_bytes()).with_status_code(StatusCode(status));
    match Header::from_bytes("Content-Type", "application/json") {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
