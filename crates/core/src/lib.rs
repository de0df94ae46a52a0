pub mod error;
pub mod event;
pub mod state;
pub mod window;

pub use error::{Error, Result};
pub use event::Message;
pub use state::{BenchmarkResult, Dashboard, Sample};
pub use window::RollingWindow;
