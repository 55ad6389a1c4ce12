// src/routes/contact.rs
use axum::{Json, extract::State};
use serde_json::json;

use crate::{
    error::AppError,
    message::{ApiResponse, ContactForm},
    state::SharedState,
};

pub async fn create_contact(
    State(state): State<SharedState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<ApiResponse>, AppError> {
    let form = normalize(form);
    validate(&form)?;

    let id = state.contacts.add(&form).await.map_err(|e| {
        tracing::error!(error = %e, "could not append contact record");
        AppError::Internal("failed to save contact message".to_string())
    })?;

    state.metrics.record_contact().await;
    tracing::info!(contact_id = %id, email = %form.email, "new contact submission");

    Ok(Json(ApiResponse {
        success: true,
        message: "Thank you for your message! I'll get back to you soon.".to_string(),
        data: Some(json!({ "contact_id": id })),
    }))
}

/// Stored submissions, newest first.
pub async fn list_contacts(State(state): State<SharedState>) -> Json<serde_json::Value> {
    let contacts = state.contacts.list().await;
    Json(json!({
        "success": true,
        "data": { "total": contacts.len(), "contacts": contacts }
    }))
}

fn normalize(mut form: ContactForm) -> ContactForm {
    form.name = form.name.trim().to_string();
    form.email = form.email.trim().to_string();
    form.message = form.message.trim().to_string();
    form.subject = form
        .subject
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    form
}

fn validate(form: &ContactForm) -> Result<(), AppError> {
    if form.name.is_empty() {
        return Err(AppError::BadRequest("name cannot be empty".to_string()));
    }
    if form.email.is_empty() {
        return Err(AppError::BadRequest("email cannot be empty".to_string()));
    }
    if !form.email.contains('@') {
        return Err(AppError::BadRequest("email address looks invalid".to_string()));
    }
    if form.message.is_empty() {
        return Err(AppError::BadRequest("message cannot be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            subject: None,
            message: message.to_string(),
        }
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert!(validate(&form("", "a@b.c", "hi")).is_err());
        assert!(validate(&form("Alice", "", "hi")).is_err());
        assert!(validate(&form("Alice", "a@b.c", "")).is_err());
        assert!(validate(&form("Alice", "not-an-email", "hi")).is_err());
        assert!(validate(&form("Alice", "a@b.c", "hi")).is_ok());
    }

    #[test]
    fn normalize_trims_and_drops_empty_subject() {
        let mut f = form("  Alice ", " a@b.c ", " hi ");
        f.subject = Some("   ".to_string());
        let f = normalize(f);
        assert_eq!(f.name, "Alice");
        assert_eq!(f.email, "a@b.c");
        assert_eq!(f.message, "hi");
        assert!(f.subject.is_none());
    }
}
