use actix_web::web;

pub mod chess960;
pub mod health;

/// Configure application routes. Used by `main.rs` under the middleware
/// chain and directly by tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.configure(health::configure_routes);

    // Landing frame: /chess960
    cfg.configure(chess960::configure_landing);

    // Turn endpoint: /api/chess960/**
    cfg.service(web::scope("/api/chess960").configure(chess960::configure_routes));
}
