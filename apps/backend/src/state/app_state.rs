use std::sync::Arc;

use crate::config::EngineTiming;
use crate::services::game_flow::{GameFlowService, TaskScheduler, TokioScheduler};
use crate::ws::hub::WsRegistry;

/// Shared resources handed to every request and websocket session.
#[derive(Clone)]
pub struct AppState {
    pub flow: GameFlowService,
    pub websockets: Arc<WsRegistry>,
}

impl AppState {
    /// Production wiring: websocket fan-out and tokio timers.
    pub fn new(timing: EngineTiming) -> Self {
        Self::with_scheduler(timing, Arc::new(TokioScheduler))
    }

    pub fn with_scheduler(timing: EngineTiming, scheduler: Arc<dyn TaskScheduler>) -> Self {
        let websockets = Arc::new(WsRegistry::new());
        let flow = GameFlowService::new(websockets.clone(), scheduler, timing);
        Self { flow, websockets }
    }
}
