pub mod content;
pub mod form;
pub mod marquee;
pub mod nav;
pub mod slideshow;
pub mod tabs;
