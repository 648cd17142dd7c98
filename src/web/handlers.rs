use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::core::{ClientId, PetId};
use crate::model::{AddressDraft, Client, ClientDraft, PetDraft};
use crate::service::MutationOutcome;
use crate::web::error::{WebError, WebResult};
use crate::web::{normalize, validate, AppState};

fn applied(outcome: MutationOutcome) -> WebResult<Client> {
    match outcome {
        MutationOutcome::Applied(client) => Ok(client),
        MutationOutcome::NotFound => Err(WebError::NotFound),
    }
}

fn ensure_valid(errors: validate::FieldErrors) -> WebResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(WebError::Validation(errors))
    }
}

// -----------------------------
// Client endpoints
// -----------------------------

pub async fn list_clients(State(state): State<AppState>) -> WebResult<Json<Vec<Client>>> {
    Ok(Json(state.clinic.list_clients().await?))
}

pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<ClientId>,
) -> WebResult<Json<Client>> {
    let client = state.clinic.get_client(id).await?.ok_or(WebError::NotFound)?;
    Ok(Json(client))
}

pub async fn create_client(
    State(state): State<AppState>,
    Json(draft): Json<ClientDraft>,
) -> WebResult<(StatusCode, Json<Client>)> {
    let draft = normalize::client_draft(draft);
    ensure_valid(validate::client_draft(&draft))?;

    let client = state.clinic.create_client(draft).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<ClientId>,
    Json(draft): Json<ClientDraft>,
) -> WebResult<(StatusCode, Json<Client>)> {
    let draft = normalize::client_draft(draft);
    ensure_valid(validate::client_draft(&draft))?;

    let client = applied(state.clinic.update_client(id, draft).await?)?;
    Ok((StatusCode::CREATED, Json(client)))
}

pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<ClientId>,
) -> WebResult<Json<Client>> {
    let client = applied(state.clinic.delete_client(id).await?)?;
    Ok(Json(client))
}

// -----------------------------
// Pet endpoints
// -----------------------------

pub async fn create_pet(
    State(state): State<AppState>,
    Path(client_id): Path<ClientId>,
    Json(draft): Json<PetDraft>,
) -> WebResult<(StatusCode, Json<Client>)> {
    let draft = normalize::pet_draft(draft);
    ensure_valid(validate::pet_draft(&draft))?;

    let client = applied(state.clinic.create_pet(client_id, draft).await?)?;
    Ok((StatusCode::CREATED, Json(client)))
}

pub async fn update_pet(
    State(state): State<AppState>,
    Path((client_id, pet_id)): Path<(ClientId, PetId)>,
    Json(draft): Json<PetDraft>,
) -> WebResult<(StatusCode, Json<Client>)> {
    let draft = normalize::pet_draft(draft);
    ensure_valid(validate::pet_draft(&draft))?;

    let client = applied(state.clinic.update_pet(client_id, pet_id, draft).await?)?;
    Ok((StatusCode::CREATED, Json(client)))
}

pub async fn delete_pet(
    State(state): State<AppState>,
    Path((client_id, pet_id)): Path<(ClientId, PetId)>,
) -> WebResult<Json<Client>> {
    let client = applied(state.clinic.delete_pet(client_id, pet_id).await?)?;
    Ok(Json(client))
}

// -----------------------------
// Address endpoints
// -----------------------------

pub async fn create_address(
    State(state): State<AppState>,
    Path(client_id): Path<ClientId>,
    Json(draft): Json<AddressDraft>,
) -> WebResult<(StatusCode, Json<Client>)> {
    let draft = normalize::address_draft(draft);
    ensure_valid(validate::address_draft(&draft))?;

    let client = applied(state.clinic.create_address(client_id, draft).await?)?;
    Ok((StatusCode::CREATED, Json(client)))
}

pub async fn update_address(
    State(state): State<AppState>,
    Path(client_id): Path<ClientId>,
    Json(draft): Json<AddressDraft>,
) -> WebResult<(StatusCode, Json<Client>)> {
    let draft = normalize::address_draft(draft);
    ensure_valid(validate::address_draft(&draft))?;

    let client = applied(state.clinic.update_address(client_id, draft).await?)?;
    Ok((StatusCode::CREATED, Json(client)))
}

pub async fn delete_address(
    State(state): State<AppState>,
    Path(client_id): Path<ClientId>,
) -> WebResult<Json<Client>> {
    let client = applied(state.clinic.delete_address(client_id).await?)?;
    Ok(Json(client))
}

// -----------------------------
// Read-side searches
// -----------------------------

pub async fn search_by_name(
    State(state): State<AppState>,
    Path(fragment): Path<String>,
) -> WebResult<Json<Vec<Client>>> {
    Ok(Json(state.clinic.search_by_name(&fragment).await?))
}

pub async fn search_by_lastname(
    State(state): State<AppState>,
    Path(fragment): Path<String>,
) -> WebResult<Json<Vec<Client>>> {
    Ok(Json(state.clinic.search_by_lastname(&fragment).await?))
}

pub async fn search_by_pet_name(
    State(state): State<AppState>,
    Path(fragment): Path<String>,
) -> WebResult<Json<Vec<Client>>> {
    Ok(Json(state.clinic.search_by_pet_name(&fragment).await?))
}
