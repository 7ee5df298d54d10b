pub mod config;
pub mod reader;
pub mod render;
pub mod scheduler;

pub use config::{Config, PresentationConfig, TimingConfig};
pub use reader::{KeyCommand, Reader, ReaderEvent};
pub use render::{RecordingSink, RenderInstruction, RenderSink};
pub use scheduler::{DeadlineScheduler, ManualScheduler, Scheduler, TimerId};
