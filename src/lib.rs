// Library for testable modules
pub mod assets;
pub mod key_handler;
pub mod page;
pub mod state;
pub mod ui_utils;
pub mod widgets;

// Re-export main types used in tests and benches
pub use assets::AssetLoader;
pub use page::Page;
pub use state::{
    is_valid_email, FormState, MarqueeState, NavState, ScrollState, SlideshowState, TabsState,
};
pub use widgets::Widgets;
