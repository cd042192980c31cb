pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::applications::handlers as applications;
use crate::auth::handlers as auth;
use crate::faq;
use crate::matching::handlers as matching;
use crate::profiles::handlers as profiles;
use crate::state::AppState;
use crate::store::handlers as listings;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        // Auth
        .route("/api/auth/register", post(auth::handle_register))
        .route("/api/auth/login", post(auth::handle_login))
        .route("/api/auth/profile", get(auth::handle_profile))
        // Listings
        .route(
            "/api/jobs",
            get(listings::handle_list_jobs).post(listings::handle_create_job),
        )
        .route(
            "/api/jobs/:id",
            get(listings::handle_get_job)
                .patch(listings::handle_update_job)
                .delete(listings::handle_delete_job),
        )
        .route(
            "/api/internships",
            get(listings::handle_list_internships).post(listings::handle_create_internship),
        )
        .route(
            "/api/internships/:id",
            get(listings::handle_get_internship)
                .patch(listings::handle_update_internship)
                .delete(listings::handle_delete_internship),
        )
        // Applications
        .route("/api/applications/apply", post(applications::handle_apply))
        .route(
            "/api/applications/user/:id",
            get(applications::handle_user_applications),
        )
        .route(
            "/api/applications/:id/status",
            patch(applications::handle_update_status),
        )
        // Profiles
        .route(
            "/api/user-profile",
            get(profiles::handle_get_user_profile).patch(profiles::handle_patch_user_profile),
        )
        .route(
            "/api/company-profile",
            get(profiles::handle_get_company_profile)
                .patch(profiles::handle_patch_company_profile),
        )
        // AI matching + FAQ
        .route("/api/ai-matching/match", post(matching::handle_match))
        .route("/api/faq/chat", post(faq::handle_chat))
        .with_state(state)
}
