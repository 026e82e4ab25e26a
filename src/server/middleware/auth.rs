//! Role-based access checks for handlers.
//!
//! `AuthGuard::require` resolves the session's account and checks it against the roles an
//! endpoint accepts. The resulting `RequestContext` is passed on to services so they never
//! have to look at the session themselves.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{
        bill::BillAccess,
        user::{Roles, User},
    },
};

/// Role an endpoint may accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Admin,
    Waiter,
    Kitchen,
}

impl Permission {
    fn granted_by(self, roles: &Roles) -> bool {
        match self {
            Permission::Admin => roles.admin,
            Permission::Waiter => roles.waiter,
            Permission::Kitchen => roles.kitchen,
        }
    }
}

/// The authenticated caller of a request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub user: User,
    pub roles: Roles,
}

impl RequestContext {
    pub fn user_id(&self) -> i32 {
        self.user.id
    }

    /// Bills this caller may act on from the waiter endpoints.
    ///
    /// Admins see every bill; anyone else only the bills assigned to them.
    pub fn bill_access(&self) -> BillAccess {
        if self.roles.admin {
            BillAccess::All
        } else {
            BillAccess::OwnedBy(self.user.id)
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in, active account holding every listed role.
    ///
    /// An empty list only requires authentication.
    ///
    /// # Returns
    /// - `Ok(RequestContext)` - The caller and their roles
    /// - `Err(AppError::AuthErr(_))` - No session user, unknown or inactive account, or a
    ///   missing role
    pub async fn require(&self, permissions: &[Permission]) -> Result<RequestContext, AppError> {
        let ctx = self.authenticate().await?;

        if let Some(missing) = permissions.iter().find(|p| !p.granted_by(&ctx.roles)) {
            return Err(AuthError::AccessDenied(
                ctx.user.id,
                format!("missing {missing:?} role"),
            )
            .into());
        }

        Ok(ctx)
    }

    /// Requires a logged-in, active account holding at least one of the listed roles.
    pub async fn require_any(&self, permissions: &[Permission]) -> Result<RequestContext, AppError> {
        let ctx = self.authenticate().await?;

        if !permissions.iter().any(|p| p.granted_by(&ctx.roles)) {
            return Err(AuthError::AccessDenied(
                ctx.user.id,
                format!("needs one of {permissions:?}"),
            )
            .into());
        }

        Ok(ctx)
    }

    /// The session's account when one is logged in, without any role requirement.
    pub async fn current(&self) -> Result<Option<RequestContext>, AppError> {
        match self.authenticate().await {
            Ok(ctx) => Ok(Some(ctx)),
            Err(AppError::AuthErr(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn authenticate(&self) -> Result<RequestContext, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !user.is_active {
            return Err(AuthError::UserInactive(user_id).into());
        }

        Ok(RequestContext {
            roles: user.roles,
            user,
        })
    }
}
