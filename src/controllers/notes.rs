//! Notes REST API — CRUD endpoints over the shared note store.
//!
//! Handlers validate the payload, translate between wire DTOs and the
//! `Note` entity, and map store results to HTTP outcomes. Ids and
//! timestamps are assigned here, never by the client.

use actix_web::{HttpResponse, Responder, web};
use chrono::Utc;
use uuid::Uuid;

use crate::AppState;
use crate::models::{CreateNoteRequest, Note, NoteResponse, UpdateNoteRequest};
use crate::notes::validation::validate_note_payload;

/// Create a new note
async fn create_note(
    state: web::Data<AppState>,
    body: web::Json<CreateNoteRequest>,
) -> impl Responder {
    let request = body.into_inner();

    if let Some(errors) = validate_note_payload(request.title.as_deref()) {
        return HttpResponse::BadRequest().json(serde_json::json!({ "errors": errors }));
    }

    let now = Utc::now();
    let note = Note {
        id: Uuid::new_v4(),
        title: request.title.unwrap_or_default().trim().to_string(),
        content: request.content.unwrap_or_default(),
        created_at: now,
        updated_at: now,
    };

    let stored = state.store.create(note);
    log::debug!("Created note {}", stored.id);

    HttpResponse::Created()
        .insert_header(("Location", format!("/api/notes/{}", stored.id)))
        .json(NoteResponse::from(&stored))
}

/// List all notes, newest first
async fn list_notes(state: web::Data<AppState>) -> impl Responder {
    let items: Vec<NoteResponse> = state
        .store
        .get_all()
        .iter()
        .map(NoteResponse::from)
        .collect();

    HttpResponse::Ok().json(items)
}

/// Get a single note by id
async fn get_note_by_id(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();

    match state.store.get_by_id(id) {
        Some(note) => HttpResponse::Ok().json(NoteResponse::from(&note)),
        None => HttpResponse::NotFound().finish(),
    }
}

/// Update a note's title and content
async fn update_note(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateNoteRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let request = body.into_inner();

    // Validation runs before the existence check: an invalid payload is a
    // 400 even when the id is unknown.
    if let Some(errors) = validate_note_payload(request.title.as_deref()) {
        return HttpResponse::BadRequest().json(serde_json::json!({ "errors": errors }));
    }

    let mut existing = match state.store.get_by_id(id) {
        Some(note) => note,
        None => return HttpResponse::NotFound().finish(),
    };

    // id and created_at are immutable; only title/content/updated_at change
    existing.title = request.title.unwrap_or_default().trim().to_string();
    existing.content = request.content.unwrap_or_default();
    existing.updated_at = Utc::now();

    match state.store.update(existing) {
        Some(updated) => HttpResponse::Ok().json(NoteResponse::from(&updated)),
        // Deleted between the fetch and the replace
        None => HttpResponse::NotFound().finish(),
    }
}

/// Delete a note by id
async fn delete_note(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();

    if state.store.delete(id) {
        log::debug!("Deleted note {}", id);
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().finish()
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/notes")
            .route("", web::post().to(create_note))
            .route("", web::get().to(list_notes))
            .route("/{id}", web::get().to(get_note_by_id))
            .route("/{id}", web::put().to(update_note))
            .route("/{id}", web::delete().to(delete_note)),
    );
}
