//! aesthub developer console harness.
//!
//! Seeds the in-memory stores with the demo data set, opens a session for
//! a configurable user and prints the resolved access picture: role,
//! effective grants, visible navigation and gated-navigation redirects.

#![forbid(unsafe_code)]

use std::env;

use aesthub_application::{
    AccessService, Session, SessionService, UserDirectory, default_view, visible_views,
};
use aesthub_core::{AppError, AppResult};
use aesthub_domain::{User, UserId, ViewId};
use aesthub_infrastructure::{SEED_ADMIN_USER_ID, seed_stores};

use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct ConsoleConfig {
    session_user: String,
}

impl ConsoleConfig {
    fn load() -> Self {
        let session_user = env::var("AESTHUB_SESSION_USER")
            .ok()
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| SEED_ADMIN_USER_ID.to_owned());

        Self { session_user }
    }
}

/// Resolved access picture for one user, printed as the harness output.
#[derive(Debug, Serialize)]
struct SessionSnapshot {
    session: Session,
    role_name: String,
    effective_permissions: Vec<String>,
    effective_apps: Vec<String>,
    navigation: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ConsoleConfig::load();
    let stores = seed_stores().await?;

    let access = AccessService::new(stores.role_catalog.clone());
    let sessions = SessionService::new(stores.user_directory.clone(), access.clone());

    let users = stores.user_directory.list().await?;
    for user in &users {
        log_access_summary(&access, user).await?;
    }

    let session_user = UserId::new(config.session_user.as_str())?;
    let user = users
        .iter()
        .find(|user| user.id() == &session_user)
        .ok_or_else(|| {
            AppError::NotFound(format!("seed user '{session_user}' does not exist"))
        })?;

    let session = sessions.open(&session_user).await?;
    info!(
        user = %session.user_id,
        role_type = session.role_type.as_str(),
        view = session.view.as_str(),
        "session opened on default view"
    );

    let gated = session.navigate(ViewId::PlatformAppReview);
    info!(
        requested = ViewId::PlatformAppReview.as_str(),
        routed = gated.view.as_str(),
        "navigation gate decision"
    );

    let snapshot = build_snapshot(&access, user, session).await?;
    let rendered = serde_json::to_string_pretty(&snapshot)
        .map_err(|error| AppError::Internal(format!("failed to render snapshot: {error}")))?;
    println!("{rendered}");

    Ok(())
}

async fn log_access_summary(access: &AccessService, user: &User) -> AppResult<()> {
    let role = access.resolve_role(user).await?;
    let grant = access.effective_grant(user).await?;

    info!(
        user = %user.id(),
        name = user.name(),
        role = role.name(),
        role_type = role.role_type().as_str(),
        permissions = grant.permissions.len(),
        apps = grant.apps.len(),
        default_view = default_view(role.role_type()).as_str(),
        "resolved access for seed user"
    );

    Ok(())
}

async fn build_snapshot(
    access: &AccessService,
    user: &User,
    session: Session,
) -> AppResult<SessionSnapshot> {
    let role = access.resolve_role(user).await?;
    let grant = access.effective_grant(user).await?;

    Ok(SessionSnapshot {
        role_name: role.name().to_owned(),
        effective_permissions: grant
            .permissions
            .iter()
            .map(|permission| permission.as_str().to_owned())
            .collect(),
        effective_apps: grant
            .apps
            .iter()
            .map(|app_id| app_id.as_str().to_owned())
            .collect(),
        navigation: visible_views(session.role_type)
            .iter()
            .map(|view| view.as_str().to_owned())
            .collect(),
        session,
    })
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
