//! Auth endpoints.
//!
//! The admin area runs in open-access mode: login always succeeds, status
//! always reports an authenticated admin, and no route is gated on the
//! session. The session layer still tracks a cookie so a future credential
//! check can slot in without changing the clients.

use axum::Json;
use serde::Serialize;
use tower_sessions::Session;

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(rename = "redirectTo")]
    pub redirect_to: &'static str,
}

#[derive(Serialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct AuthStatusResponse {
    #[serde(rename = "isAuthenticated")]
    pub is_authenticated: bool,
    pub username: &'static str,
}

/// POST /auth/login
pub async fn login(session: Session) -> Json<LoginResponse> {
    let _ = session.insert("user", "admin").await;

    Json(LoginResponse {
        success: true,
        message: "Login successful - Open Access",
        redirect_to: "/admin",
    })
}

/// POST /auth/logout
pub async fn logout(session: Session) -> Json<LogoutResponse> {
    let _ = session.flush().await;

    Json(LogoutResponse {
        success: true,
        message: "Logged out successfully",
    })
}

/// GET /auth/status
pub async fn status() -> Json<AuthStatusResponse> {
    Json(AuthStatusResponse {
        is_authenticated: true,
        username: "admin",
    })
}
