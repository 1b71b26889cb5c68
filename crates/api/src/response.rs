//! Response envelope types for API handlers.
//!
//! Every successful response is `{ "message": ..., "data": ... }`; list
//! responses add a `count`.

use serde::Serialize;

/// Standard `{ "message", "data" }` envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub message: &'static str,
    pub data: T,
}

/// `{ "message", "data", "count" }` envelope for collections.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub message: &'static str,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(message: &'static str, data: Vec<T>) -> Self {
        Self {
            message,
            count: data.len(),
            data,
        }
    }
}
