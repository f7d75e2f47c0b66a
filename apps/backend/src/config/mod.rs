pub mod app;
pub mod timing;

pub use app::Config;
pub use timing::EngineTiming;
