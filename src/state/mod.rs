//! Widget state modules for the vitrine TUI application.
//!
//! Each page behavior owns an isolated state struct constructed at
//! initialization and mutated only by its own handlers. Keeping the state
//! per-widget rather than in a monolithic `App` struct means:
//! - Testability: each behavior's state machine is unit tested on its own
//! - Independence: no widget reads or writes another widget's state
//! - Reuse: several instances of a widget could coexist on one page
//!
//! # Architecture
//!
//! ```text
//! App
//! ├── NavState       - Collapsible navigation panel
//! ├── SlideshowState - Timed slide rotation with manual controls
//! ├── MarqueeState   - Time-stepped seamless scroll strip
//! ├── TabsState      - Single-selection tab panels
//! ├── FormState      - Submit-time field validation and feedback
//! └── ScrollState    - Content scrolling and the back-to-top glide
//! ```

mod form;
mod marquee;
mod nav;
mod scroll;
mod slideshow;
mod tabs;

pub use form::{is_valid_email, FieldState, FormState, SubmitOutcome};
pub use marquee::MarqueeState;
pub use nav::NavState;
pub use scroll::ScrollState;
pub use slideshow::{Autoplay, SlideshowState};
pub use tabs::{MoveFocus, TabsState};
