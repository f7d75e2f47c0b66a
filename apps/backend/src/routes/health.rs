use actix_web::{web, HttpResponse};
use tracing::debug;

use crate::state::app_state::AppState;

async fn health(app_state: web::Data<AppState>) -> HttpResponse {
    debug!(
        rooms = app_state.flow.registry().len(),
        connections = app_state.websockets.connection_count(),
        "Health check"
    );
    HttpResponse::Ok().body("ok")
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
