mod channel;
mod search;
mod stats;
mod tag;
mod video;

pub use channel::*;
pub use search::*;
pub use stats::*;
pub use tag::*;
pub use video::*;

use log::error;
use rocket::serde::json::Json;
use serde::Serialize;
use serde_json::{json, Value};

/// Single-record lookups answer `{}` rather than `null` when there is nothing
/// to return.
pub(crate) fn object_or_empty<T: Serialize>(record: Option<T>) -> Json<Value> {
    let value = record
        .map(serde_json::to_value)
        .transpose()
        .unwrap_or_else(|e| {
            error!("Failed to serialize response: {e:?}");
            None
        });
    Json(value.unwrap_or_else(|| json!({})))
}
