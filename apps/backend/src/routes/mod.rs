pub mod health;

use actix_web::web;

use crate::ws::session;

/// Register every HTTP route: `/health` and the `/ws` upgrade.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure)
        .route("/ws", web::get().to(session::upgrade));
}
