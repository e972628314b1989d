//! Book catalog routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use shelf_engine::{Book, BookDraft, BookId};

use crate::error::{AppError, Result};
use crate::handlers::{handle_create, handle_delete, handle_list, handle_update, ListParams};
use crate::AppState;

/// Create book routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_handler).post(create_handler))
        .route("/books/{id}", patch(update_handler).delete(delete_handler))
}

/// Read the integer at the start of a path id, ignoring whatever follows
/// it (`12abc` is 12, `1.5` is 1). Leading whitespace and a sign are
/// allowed, and `0x` introduces hex digits. Ids with no leading integer
/// match no book.
fn parse_id(raw: &str) -> Result<BookId> {
    leading_int(raw).ok_or_else(|| AppError::NotFound(format!("book id {:?}", raw)))
}

fn leading_int(raw: &str) -> Option<BookId> {
    let text = raw.trim_start();
    let (negative, text) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (radix, text) = match text.get(..2) {
        Some("0x") | Some("0X") => (16, &text[2..]),
        _ => (10, text),
    };

    let end = text
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(text.len());
    let digits = &text[..end];
    if digits.is_empty() {
        return None;
    }

    let value = BookId::from_str_radix(digits, radix).ok()?;
    Some(if negative { -value } else { value })
}

/// GET /books - One sorted page of books.
async fn list_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Book>>> {
    let books = handle_list(state.store.clone(), params).await?;
    Ok(Json(books))
}

/// POST /books - Add a book.
async fn create_handler(
    State(state): State<AppState>,
    Json(draft): Json<BookDraft>,
) -> Result<(StatusCode, Json<Book>)> {
    let book = handle_create(state.store.clone(), state.config.id_strategy, draft).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// PATCH /books/{id} - Replace a book's fields.
async fn update_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(draft): Json<BookDraft>,
) -> Result<Json<Book>> {
    let id = parse_id(&raw_id)?;
    let book = handle_update(state.store.clone(), id, draft).await?;
    Ok(Json(book))
}

/// DELETE /books/{id} - Remove a book.
async fn delete_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&raw_id)?;
    handle_delete(state.store.clone(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
