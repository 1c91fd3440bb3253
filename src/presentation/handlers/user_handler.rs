use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::{
    domain::{
        error::DomainError,
        repositories::{
            user_registration_repository::UserRegistrationRepository,
            user_repository::UserRepository,
        },
        services::{
            mail_service::ActivationMailer, password_service::PasswordHasher,
            token_service::ActivationTokenGenerator,
        },
        validation::ValidationErrors,
    },
    presentation::i18n::{self, Locale},
    usecase::register_user_usecase::{RegisterUserUsecase, RegistrationForm},
};

// Request

/// json for register request; fields may be null or absent
#[derive(Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

// Response

#[derive(Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    #[serde(rename = "validationErrors")]
    pub validation_errors: serde_json::Map<String, Value>,
}

fn localize_errors(errors: &ValidationErrors, locale: Locale) -> ValidationErrorResponse {
    let mut validation_errors = serde_json::Map::new();
    for (field, key) in errors.entries() {
        validation_errors.insert(
            field.as_str().to_string(),
            Value::String(i18n::translate(key, locale)),
        );
    }
    ValidationErrorResponse { validation_errors }
}

/* Router Function and Handler Function */

/// function return Router object
/// Suppose to be nested by main router
pub fn create_user_router<U, R, P, T, M>(
    register_service: RegisterUserUsecase<U, R, P, T, M>,
) -> Router
where
    U: UserRepository + Send + Sync + Clone + 'static,
    R: UserRegistrationRepository + Send + Sync + Clone + 'static,
    P: PasswordHasher + Send + Sync + 'static,
    T: ActivationTokenGenerator + Send + Sync + 'static,
    M: ActivationMailer + Send + Sync + Clone + 'static,
{
    let state = AppState {
        register_service: Arc::new(register_service),
    };

    Router::new()
        .route("/1.0/users", post(register::<U, R, P, T, M>))
        .with_state(state)
}

pub struct AppState<
    U: UserRepository,
    R: UserRegistrationRepository,
    P: PasswordHasher,
    T: ActivationTokenGenerator,
    M: ActivationMailer,
> {
    pub register_service: Arc<RegisterUserUsecase<U, R, P, T, M>>,
}

impl<
    U: UserRepository,
    R: UserRegistrationRepository,
    P: PasswordHasher,
    T: ActivationTokenGenerator,
    M: ActivationMailer,
> Clone for AppState<U, R, P, T, M>
{
    fn clone(&self) -> Self {
        Self {
            register_service: Arc::clone(&self.register_service),
        }
    }
}

/// handler function for register
async fn register<
    U: UserRepository + Send + Sync,
    R: UserRegistrationRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
    T: ActivationTokenGenerator + Send + Sync,
    M: ActivationMailer + Send + Sync,
>(
    State(state): State<AppState<U, R, P, T, M>>,
    headers: HeaderMap,
    Json(payload): Json<RegisterRequest>,
) -> impl IntoResponse {
    let locale = Locale::from_headers(&headers);
    let form = RegistrationForm {
        username: payload.username,
        email: payload.email,
        password: payload.password,
    };

    match state.register_service.register(form).await {
        Ok(_) => (
            StatusCode::CREATED,
            Json(MessageResponse {
                message: i18n::translate("user_created", locale),
            }),
        )
            .into_response(),
        Err(DomainError::Validation(errors)) => (
            StatusCode::BAD_REQUEST,
            Json(localize_errors(&errors, locale)),
        )
            .into_response(),
        Err(DomainError::EmailDelivery(_)) => (
            StatusCode::BAD_GATEWAY,
            Json(MessageResponse {
                message: i18n::translate("email_failure", locale),
            }),
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, "registration failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse {
                    message: "Registration failed".to_string(),
                }),
            )
                .into_response()
        }
    }
}
