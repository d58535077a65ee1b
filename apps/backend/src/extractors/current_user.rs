use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};

use crate::auth::session::{resolve_session, SessionIdentity};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// The signed-in caller. Rejects with 401 when the request is anonymous.
///
/// `AuthGate` stores the identity it resolved in request extensions; when
/// the gate is not mounted the session is resolved here from the headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: String,
    pub email: String,
}

impl From<SessionIdentity> for CurrentUser {
    fn from(identity: SessionIdentity) -> Self {
        Self {
            user_id: identity.user_id,
            email: identity.email,
        }
    }
}

fn extract(req: &HttpRequest) -> Result<CurrentUser, AppError> {
    if let Some(identity) = req.extensions().get::<SessionIdentity>() {
        return Ok(identity.clone().into());
    }

    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not available"))?;

    resolve_session(req.headers(), &state.security)
        .map(CurrentUser::from)
        .ok_or_else(AppError::unauthorized)
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract(req))
    }
}
