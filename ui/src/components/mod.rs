//! Shared building blocks for the screens.
pub mod empty_state;
pub mod hash_display;
pub mod pico;
