//! HTTP layer for Tebex API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP client carrying the secret header
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a parsed response from the API
//! - [`HttpMethod`]: supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: encodings for request bodies (JSON or form)
//!
//! Most callers never touch this module directly and use
//! [`TebexClient`](crate::TebexClient) instead.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION, SECRET_HEADER};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
