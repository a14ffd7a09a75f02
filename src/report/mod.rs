pub mod client;
pub mod host;
pub mod plugin;
pub mod types;

pub use client::ReportClient;
pub use host::HostInfo;
pub use plugin::ReportPlugin;
pub use types::{Phase, PhaseFailure, PhaseReport};
