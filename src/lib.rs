pub mod gui;
pub mod headless;
pub mod host;
pub mod supersaw;
