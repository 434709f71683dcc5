pub mod app;
pub mod fetch;
pub mod tui;
pub mod view;

pub use app::{run, RunOptions};
pub use fetch::{fetch_payload, DEFAULT_URL};
pub use tui::{Key, KeySource, Tui};
pub use view::{PlainView, ReportView};
