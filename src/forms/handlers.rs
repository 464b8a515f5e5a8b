use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::extractors::AuthClaims,
    error::ApiError,
    forms::{
        dto::{
            CreateFormRequest, FormField, FormResponse, MessageResponse, SubmissionResponse,
            SubmitFormRequest,
        },
        repo::{Form, Submission},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/forms/create", post(create_form))
        .route("/forms/admin-dashboard", get(admin_dashboard))
        .route("/forms/submit/:form_id", post(submit_form))
}

#[instrument(skip(state, claims, payload))]
pub async fn create_form(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<CreateFormRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    if !claims.role.is_admin() {
        warn!(user_id = %claims.sub, "form create by non-admin");
        return Err(ApiError::Forbidden);
    }

    if payload.form_name.is_empty() || payload.fields.is_empty() {
        warn!("form create with missing name or fields");
        return Err(ApiError::Validation(
            "Form name and fields are required".into(),
        ));
    }

    // Owner comes from the verified token, never from the request body.
    let fields = serde_json::to_value(&payload.fields).map_err(anyhow::Error::from)?;
    let form = Form::create(&state.db, claims.sub, &payload.form_name, &fields).await?;

    info!(form_id = %form.id, admin_id = %claims.sub, "form created");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Form created successfully",
        }),
    ))
}

#[instrument(skip(state, claims))]
pub async fn admin_dashboard(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
) -> Result<Json<Vec<FormResponse>>, ApiError> {
    if !claims.role.is_admin() {
        warn!(user_id = %claims.sub, "dashboard access by non-admin");
        return Err(ApiError::Forbidden);
    }

    let forms = Form::list_by_admin(&state.db, claims.sub).await?;
    let ids: Vec<Uuid> = forms.iter().map(|f| f.id).collect();

    let mut by_form: HashMap<Uuid, Vec<SubmissionResponse>> = HashMap::new();
    for s in Submission::list_for_forms(&state.db, &ids).await? {
        by_form.entry(s.form_id).or_default().push(SubmissionResponse {
            submitted_at: s.submitted_at,
            data: s.data,
        });
    }

    let mut out = Vec::with_capacity(forms.len());
    for f in forms {
        let fields: Vec<FormField> =
            serde_json::from_value(f.fields).map_err(anyhow::Error::from)?;
        out.push(FormResponse {
            id: f.id,
            admin_id: f.admin_id,
            form_name: f.form_name,
            fields,
            submissions: by_form.remove(&f.id).unwrap_or_default(),
        });
    }
    Ok(Json(out))
}

#[instrument(skip(state, payload))]
pub async fn submit_form(
    State(state): State<AppState>,
    Path(form_id): Path<String>,
    Json(payload): Json<SubmitFormRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    // A malformed id cannot name a stored form.
    let form_id = Uuid::parse_str(&form_id).map_err(|_| ApiError::FormNotFound)?;

    if !Form::exists(&state.db, form_id).await? {
        warn!(%form_id, "submission to unknown form");
        return Err(ApiError::FormNotFound);
    }

    Submission::append(&state.db, form_id, &payload.data).await?;

    info!(%form_id, "submission stored");
    Ok(Json(MessageResponse {
        message: "Form submitted successfully",
    }))
}
