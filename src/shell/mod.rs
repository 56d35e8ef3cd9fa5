//! Presentation Shell
//!
//! Explicit view state for the "describe your night, get a card" flow and
//! the page that displays it. The HTTP page routes and the CLI both drive
//! one analysis through [`ShellState::run`].

mod page;
mod state;

pub use page::{render_page, BUTTON_LABEL, BUTTON_LABEL_LOADING, INPUT_PLACEHOLDER, PAGE_TITLE};
pub use state::ShellState;
