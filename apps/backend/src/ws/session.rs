use std::sync::Arc;
use std::time::{Duration, Instant};

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use tracing::{info, warn};

use crate::protocol::{ClientMsg, ServerMsg};
use crate::rooms::ConnectionId;
use crate::services::game_flow::GameFlowService;
use crate::state::AppState;
use crate::ws::hub::{HubEvent, WsRegistry};

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let session = WsSession::new(
        ConnectionId::new(),
        app_state.flow.clone(),
        app_state.websockets.clone(),
    );
    ws::start(session, &req, stream)
}

/// One websocket connection. Client requests go to the game flow service;
/// hub events go out as JSON text frames.
pub struct WsSession {
    conn: ConnectionId,
    flow: GameFlowService,
    registry: Arc<WsRegistry>,
    last_heartbeat: Instant,
}

impl WsSession {
    fn new(conn: ConnectionId, flow: GameFlowService, registry: Arc<WsRegistry>) -> Self {
        Self {
            conn,
            flow,
            registry,
            last_heartbeat: Instant::now(),
        }
    }

    fn send_json(ctx: &mut ws::WebsocketContext<Self>, msg: &ServerMsg) {
        match serde_json::to_string(msg) {
            Ok(payload) => ctx.text(payload),
            Err(err) => warn!(error = %err, "[WS SESSION] failed to serialize outbound message"),
        }
    }

    fn start_heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > CLIENT_TIMEOUT {
                warn!(conn = %actor.conn, "[WS SESSION] heartbeat timed out");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }
            ctx.ping(b"keepalive");
        });
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(conn = %self.conn, "[WS SESSION] started");
        self.registry
            .register_connection(self.conn, ctx.address().recipient::<HubEvent>());
        self.start_heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.flow.disconnect(self.conn);
        self.registry.unregister_connection(self.conn);
        info!(conn = %self.conn, "[WS SESSION] stopped");
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.last_heartbeat = Instant::now();
                match serde_json::from_str::<ClientMsg>(&text) {
                    Ok(cmd) => self.flow.handle(self.conn, cmd),
                    Err(err) => {
                        Self::send_json(ctx, &ServerMsg::bad_request(format!("Malformed request: {err}")));
                    }
                }
            }
            Ok(ws::Message::Binary(_)) => {
                self.last_heartbeat = Instant::now();
                Self::send_json(ctx, &ServerMsg::bad_request("Binary frames are not supported"));
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Continuation(_)) | Ok(ws::Message::Nop) => {
                self.last_heartbeat = Instant::now();
            }
            Err(err) => {
                warn!(conn = %self.conn, error = %err, "[WS SESSION] protocol error");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                ctx.stop();
            }
        }
    }
}

impl Handler<HubEvent> for WsSession {
    type Result = ();

    fn handle(&mut self, msg: HubEvent, ctx: &mut Self::Context) -> Self::Result {
        let HubEvent::Deliver(msg) = msg;
        Self::send_json(ctx, &msg);
    }
}
