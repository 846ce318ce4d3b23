// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;
pub mod middleware;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;
use handlers::{auth, blog, careers, contact, demo, newsletter, partners, team, upload, video};

/// Builds the full application router
///
/// Admin-only routes authenticate through the [`middleware::auth::JwtAuth`]
/// extractor on each handler; everything else is public.
pub fn router(state: AppState) -> Router {
    // Multipart bodies need headroom over the stored file size
    let upload_body_limit = state.config.upload.max_bytes + 64 * 1024;

    Router::new()
        // Health check
        .route("/health", get(auth::health_check))
        // Auth routes
        .route("/auth/login", post(auth::login))
        .route("/auth/register", post(auth::register))
        .route("/auth/me", get(auth::me))
        .route("/auth/change-password", post(auth::change_password))
        // Blog routes
        .route("/blog/posts", get(blog::list_published_posts))
        .route("/blog/posts", post(blog::create_post))
        .route("/blog/posts/:slug", get(blog::get_published_post))
        .route("/blog/admin/posts", get(blog::list_all_posts))
        .route("/blog/admin/posts/:id", put(blog::update_post))
        .route("/blog/admin/posts/:id", delete(blog::delete_post))
        .route("/blog/authors", get(blog::list_authors))
        .route("/blog/authors", post(blog::create_author))
        .route("/blog/authors/:id", put(blog::update_author))
        .route("/blog/authors/:id", delete(blog::delete_author))
        .route("/blog/categories", get(blog::list_categories))
        .route("/blog/categories", post(blog::create_category))
        .route("/blog/categories/:id", delete(blog::delete_category))
        // Team routes
        .route("/team/members", get(team::list_members))
        .route("/team/members", post(team::create_member))
        .route("/team/members/:id", put(team::update_member))
        .route("/team/members/:id", delete(team::delete_member))
        .route("/team/values", get(team::list_values))
        .route("/team/values", post(team::create_value))
        .route("/team/values/:id", put(team::update_value))
        .route("/team/values/:id", delete(team::delete_value))
        // Careers routes
        .route("/careers/jobs", get(careers::list_open_jobs))
        .route("/careers/jobs", post(careers::create_job))
        .route("/careers/jobs/:slug", get(careers::get_open_job))
        .route("/careers/admin/jobs", get(careers::list_all_jobs))
        .route("/careers/admin/jobs/:id", put(careers::update_job))
        .route("/careers/admin/jobs/:id", delete(careers::delete_job))
        .route("/careers/departments", get(careers::list_departments))
        .route("/careers/departments", post(careers::create_department))
        .route("/careers/departments/:id", delete(careers::delete_department))
        // Contact routes
        .route("/contact", post(contact::submit_inquiry))
        .route("/contact/inquiries", get(contact::list_inquiries))
        .route(
            "/contact/inquiries/:id/status",
            put(contact::update_inquiry_status),
        )
        // Newsletter routes
        .route("/newsletter/subscribe", post(newsletter::subscribe))
        .route("/newsletter/unsubscribe", post(newsletter::unsubscribe))
        .route("/newsletter/subscribers", get(newsletter::list_subscribers))
        // Demo routes
        .route("/demo/interests", get(demo::list_interests))
        .route("/demo/interests", post(demo::create_interest))
        .route("/demo/interests/:id", delete(demo::delete_interest))
        .route("/demo/slots", get(demo::list_open_slots))
        .route("/demo/slots", post(demo::create_slot))
        .route("/demo/slots/:id", put(demo::update_slot))
        .route("/demo/slots/:id", delete(demo::delete_slot))
        .route("/demo/admin/slots", get(demo::list_all_slots))
        .route("/demo/requests", post(demo::create_request))
        .route("/demo/requests", get(demo::list_requests))
        .route(
            "/demo/requests/:id/status",
            put(demo::update_request_status),
        )
        // Partner routes
        .route("/partners", get(partners::list_active_partners))
        .route("/partners", post(partners::create_partner))
        .route("/partners/all", get(partners::list_all_partners))
        .route("/partners/:id", put(partners::update_partner))
        .route("/partners/:id", delete(partners::delete_partner))
        // Video routes
        .route("/video", get(video::list_published_videos))
        .route("/video", post(video::create_video))
        .route("/video/all", get(video::list_all_videos))
        .route("/video/:id", put(video::update_video))
        .route("/video/:id", delete(video::delete_video))
        // Upload route
        .route(
            "/upload",
            post(upload::upload).layer(DefaultBodyLimit::max(upload_body_limit)),
        )
        // Shared state
        .with_state(state)
}
