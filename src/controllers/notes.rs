//! Notes REST API — CRUD, search, and tag listing for the web UI.
//!
//! Request bodies are validated here, before anything reaches the store;
//! the store still normalizes tags on its own. Not-found conditions from
//! the service map to 404, validation failures to 400.

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{CreateNoteRequest, UpdateNoteRequest};
use crate::service::NotesError;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct ListNotesQuery {
    search: Option<String>,
    tag: Option<String>,
}

/// Split a `tag` query param into filter tags. Comma-separated values all
/// have to match (intersection semantics).
fn parse_tag_filter(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Note ids are opaque to clients; a malformed id is indistinguishable
/// from a missing note.
fn not_found_response() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "Note not found"
    }))
}

/// List notes, optionally filtered by free text and/or tags
async fn list_notes(
    state: web::Data<AppState>,
    query: web::Query<ListNotesQuery>,
) -> impl Responder {
    let filter_tags = query
        .tag
        .as_deref()
        .map(parse_tag_filter)
        .unwrap_or_default();

    let notes = state.notes.list(query.search.as_deref(), &filter_tags);
    HttpResponse::Ok().json(notes)
}

/// Create a note
async fn create_note(
    state: web::Data<AppState>,
    body: web::Json<CreateNoteRequest>,
) -> impl Responder {
    match body.into_inner().validate() {
        Ok(input) => {
            let note = state.notes.create(input);
            log::info!("[NOTES] Created note {}", note.id);
            HttpResponse::Created().json(note)
        }
        Err(errors) => HttpResponse::BadRequest().json(serde_json::json!({
            "error": errors
        })),
    }
}

/// Partially update a note
async fn update_note(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateNoteRequest>,
) -> impl Responder {
    let id = match Uuid::parse_str(&path) {
        Ok(id) => id,
        Err(_) => return not_found_response(),
    };

    let input = match body.into_inner().validate() {
        Ok(input) => input,
        Err(errors) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": errors
            }));
        }
    };

    match state.notes.update(id, input) {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(e @ NotesError::NotFound(_)) => {
            log::debug!("[NOTES] Update failed: {}", e);
            not_found_response()
        }
    }
}

/// Delete a note
async fn delete_note(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = match Uuid::parse_str(&path) {
        Ok(id) => id,
        Err(_) => return not_found_response(),
    };

    match state.notes.delete(id) {
        Ok(()) => {
            log::info!("[NOTES] Deleted note {}", id);
            HttpResponse::NoContent().finish()
        }
        Err(e @ NotesError::NotFound(_)) => {
            log::debug!("[NOTES] Delete failed: {}", e);
            not_found_response()
        }
    }
}

/// List all tags, sorted and deduplicated
async fn list_tags(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.notes.tags())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/notes", web::get().to(list_notes))
            .route("/notes", web::post().to(create_note))
            .route("/notes/{id}", web::put().to(update_note))
            .route("/notes/{id}", web::delete().to(delete_note))
            .route("/tags", web::get().to(list_tags)),
    );
}
