pub mod header;
pub mod scroll_lock;
pub mod scroll_reveal;
