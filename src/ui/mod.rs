//! Terminal user interface built on [ratatui](https://docs.rs/ratatui).
//!
//! The UI is the engine's reference consumer, organized the same way the
//! engine's contract splits responsibilities:
//!
//! - **[`theme`]** — resolves symbolic [`StyleTag`]s into concrete colors;
//!   the engine itself never sees a color
//! - **[`panes`]** — converts decorated rows into ratatui lines and lays
//!   them into a bordered, scrollable variables pane
//! - **[`app`]** — demo event loop cycling through sample values
//!
//! Not part of the stable library API.
//!
//! [`StyleTag`]: crate::render::StyleTag

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
