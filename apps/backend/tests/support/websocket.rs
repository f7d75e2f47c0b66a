use std::net::TcpListener;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use whist_backend::routes;
use whist_backend::state::AppState;
use whist_backend::ws::WsRegistry;

/// Start a real HTTP server on a random local port.
///
/// Returns the server handle (for a graceful stop), the bound address and the
/// join handle of the running server.
pub async fn start_test_server(
    state: AppState,
) -> Result<
    (
        actix_web::dev::ServerHandle,
        std::net::SocketAddr,
        actix_web::rt::task::JoinHandle<Result<(), std::io::Error>>,
    ),
    Box<dyn std::error::Error>,
> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let data = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .workers(1)
    .listen(listener)?
    .run();

    let handle = server.handle();
    let join = actix_web::rt::spawn(server);
    Ok((handle, addr, join))
}

/// Poll until the registry holds `expected` live sockets.
pub async fn wait_for_connections(
    registry: &WsRegistry,
    expected: usize,
    timeout: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = tokio::time::Instant::now();
    while registry.connection_count() != expected {
        if start.elapsed() >= timeout {
            return Err(format!(
                "expected {expected} connections, have {}",
                registry.connection_count()
            )
            .into());
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    Ok(())
}
