use crate::models::{TagRequest, TagResponse};
use crate::services::tag_service::lookup_tag;
use rocket::get;
use rocket::http::Status;
use rocket::serde::json::Json;

#[get("/?<name>")]
pub fn get_tag(name: Option<String>) -> (Status, Json<TagResponse>) {
    let response = lookup_tag(TagRequest { tag_name: name });
    let status = if response.error_message.is_some() {
        Status::BadRequest
    } else {
        Status::Ok
    };
    (status, Json(response))
}
