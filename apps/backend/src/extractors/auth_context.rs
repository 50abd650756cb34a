use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::auth::bearer::parse_bearer;
use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::logging::security;
use crate::state::app_state::AppState;

/// Verified caller identity for the current request.
///
/// Produced by verifying the bearer token; handlers take it as a parameter
/// and never look at the token again. Declare it before any body extractor
/// so an unauthenticated request is refused before its body is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub subject_id: String,
    pub email: String,
}

impl AuthContext {
    /// Subject in the shape the ownership guard takes.
    pub fn subject(&self) -> Option<&str> {
        Some(self.subject_id.as_str())
    }
}

impl FromRequest for AuthContext {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthContext, AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not available"))?;

    let verified = parse_bearer(req.headers().get(header::AUTHORIZATION))
        .and_then(|token| verify_access_token(token, &state.security));

    match verified {
        Ok(claims) => {
            tracing::Span::current().record("user_id", claims.sub.as_str());
            Ok(AuthContext {
                subject_id: claims.sub,
                email: claims.email,
            })
        }
        Err(err) => {
            security::token_rejected(&err);
            Err(err.into())
        }
    }
}

