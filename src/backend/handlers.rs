//! Handlers for the public forms and listings.
//!
//! Every submission follows the same path: spend the form token, validate all
//! fields at once, then persist the sanitized values.

use axum::{extract::State, Json};
use http::StatusCode;
use log::{debug, info, warn};
use serde_json::{json, Value};

use super::{
    error::ApiError,
    models::{AdmissionForm, ContactForm, GalleryItem, PublicReview, ReviewForm},
    AppState,
};
use crate::{
    database::{Admission, ContactMessage, Review},
    utils::validation::{FieldKind, FormErrors, FormValidator, ValidatedForm},
};

type Created = (StatusCode, Json<Value>);

pub async fn health() -> &'static str {
    "ok"
}

/// Issues a single-use token to embed in the next form submission
pub async fn issue_token(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let token = state.csrf.issue().map_err(ApiError::Token)?;
    Ok(Json(json!({ "token": token })))
}

fn check_token(state: &AppState, token: &str, form: &str) -> Result<(), ApiError> {
    if state.csrf.consume(token) {
        Ok(())
    } else {
        warn!("Rejected {form} submission with an invalid form token");
        Err(ApiError::Csrf)
    }
}

/// Logs a rejected form by field name only; submitted values stay out of the logs
fn rejected(form: &str, errors: FormErrors) -> ApiError {
    let fields: Vec<&str> = errors.iter().map(|(name, _)| name).collect();
    if errors.is_suspicious() {
        warn!("Rejected suspicious {form} submission (fields: {})", fields.join(", "));
    } else {
        debug!("Rejected {form} submission (fields: {})", fields.join(", "));
    }
    ApiError::Invalid(errors)
}

fn finish(form: &str, validator: FormValidator) -> Result<ValidatedForm, ApiError> {
    validator.finish().map_err(|errors| rejected(form, errors))
}

pub async fn submit_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<Created, ApiError> {
    check_token(&state, &form.csrf_token, "contact")?;

    let mut validator = FormValidator::new();
    validator
        .field("name", &form.name, FieldKind::Name, "Name")
        .field("email", &form.email, FieldKind::Email, "Email")
        .optional_field("phone", form.phone.as_deref(), FieldKind::Phone, "Phone number")
        .field("message", &form.message, FieldKind::Text, "Message");
    let mut values = finish("contact", validator)?;

    let contact = ContactMessage::new(
        values.take("name"),
        values.take("email"),
        values.take_optional("phone"),
        values.take("message"),
    );
    let id = state.db.add_contact(contact).map_err(ApiError::Store)?;

    info!("Contact message {id} received");
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

pub async fn submit_review(
    State(state): State<AppState>,
    Json(form): Json<ReviewForm>,
) -> Result<Created, ApiError> {
    check_token(&state, &form.csrf_token, "review")?;

    let rating = form.rating.unwrap_or(f64::NAN);
    let mut validator = FormValidator::new();
    validator
        .field("name", &form.name, FieldKind::Name, "Name")
        .rating("rating", rating)
        .field("review", &form.review, FieldKind::Review, "Review");
    let mut values = finish("review", validator)?;

    let review = Review::new(values.take("name"), rating, values.take("review"));
    let id = state.db.add_review(review).map_err(ApiError::Store)?;

    info!("Review {id} received, awaiting approval");
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

pub async fn submit_admission(
    State(state): State<AppState>,
    Json(form): Json<AdmissionForm>,
) -> Result<Created, ApiError> {
    check_token(&state, &form.csrf_token, "admission")?;

    let mut validator = FormValidator::new();
    validator
        .field("name", &form.name, FieldKind::Name, "Name")
        .field("email", &form.email, FieldKind::Email, "Email")
        .field("phone", &form.phone, FieldKind::Phone, "Phone number")
        .field("course", &form.course, FieldKind::Text, "Course")
        .optional_field("message", form.message.as_deref(), FieldKind::Text, "Message");
    let mut values = finish("admission", validator)?;

    let admission = Admission::new(
        values.take("name"),
        values.take("email"),
        values.take("phone"),
        values.take("course"),
        values.take_optional("message"),
    );
    let id = state.db.add_admission(admission).map_err(ApiError::Store)?;

    info!("Admission {id} received");
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// Approved reviews only
pub async fn list_reviews(State(state): State<AppState>) -> Result<Json<Vec<PublicReview>>, ApiError> {
    let reviews = state.db.list_reviews(true).map_err(ApiError::Load)?;
    Ok(Json(reviews.into_iter().map(PublicReview::from).collect()))
}

pub async fn list_gallery(State(state): State<AppState>) -> Result<Json<Vec<GalleryItem>>, ApiError> {
    let images = state.db.list_gallery().map_err(ApiError::Load)?;
    Ok(Json(images.into_iter().map(GalleryItem::from).collect()))
}
