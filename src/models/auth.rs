//! Login result envelope
//!
//! [`AuthResult`] is the value a login handler hands to the response layer once
//! a login attempt has resolved. It pairs the account (if any) with the outcome
//! flag and never changes after construction. A failed login is a value with
//! `authenticated == false`, not an error.

use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use super::{AccountIdentity, QuizUser};
use crate::settings::{QuizServerSettings, ResponseSettings};
use crate::utils::logging::LoggingHelper;
use crate::utils::responses::ResponseBuilder;

/// Outcome of a login attempt
///
/// The identity is held as supplied: it is not validated, and an authenticated
/// result without an identity is representable. Serializes as
/// `{"user": ..., "authenticated": ...}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AuthResult<U = QuizUser> {
    #[serde(rename = "user")]
    identity: Option<U>,
    authenticated: bool,
}

/// Envelope returned by the quiz-server login endpoint
pub type LoginResponse = AuthResult<QuizUser>;

impl<U> AuthResult<U> {
    #[must_use]
    pub const fn new(identity: Option<U>, authenticated: bool) -> Self {
        Self {
            identity,
            authenticated,
        }
    }

    /// Successful login for `identity`
    #[must_use]
    pub const fn authenticated(identity: U) -> Self {
        Self::new(Some(identity), true)
    }

    /// Failed login; carries no identity
    #[must_use]
    pub const fn rejected() -> Self {
        Self::new(None, false)
    }

    #[must_use]
    pub const fn identity(&self) -> Option<&U> {
        self.identity.as_ref()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    #[must_use]
    pub fn into_identity(self) -> Option<U> {
        self.identity
    }
}

impl<U> Responder for AuthResult<U>
where
    U: Serialize + AccountIdentity,
{
    type Body = actix_web::body::BoxBody;

    fn respond_to(self, req: &HttpRequest) -> HttpResponse<Self::Body> {
        let rejected_status = req
            .app_data::<web::Data<QuizServerSettings>>()
            .map_or_else(
                || ResponseSettings::default().rejected_status_code(),
                |settings| settings.responses.rejected_status_code(),
            );

        LoggingHelper::log_login_result(&self);
        ResponseBuilder::login_result(&self, rejected_status)
    }
}
