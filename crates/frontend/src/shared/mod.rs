pub mod components;
pub mod config;
pub mod dom;
pub mod modal_frame;
pub mod notifications;
pub mod timers;
