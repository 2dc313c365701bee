//! Presentation adapters.

mod console;
mod recording;

pub use console::{ConsolePresenter, confirmation_text};
pub use recording::RecordingPresenter;
