use actix_web::{web, App, HttpServer};
use whist_backend::config::Config;
use whist_backend::routes;
use whist_backend::state::AppState;
use whist_backend::telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        host = %config.host,
        port = config.port,
        bot_think_ms = config.timing.bot_think.as_millis() as u64,
        auto_next_trick_ms = config.timing.auto_next_trick.as_millis() as u64,
        auto_next_round_ms = config.timing.auto_next_round.as_millis() as u64,
        "starting whist backend"
    );

    let data = web::Data::new(AppState::new(config.timing));

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
