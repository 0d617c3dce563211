pub mod config;
pub mod permissions;
pub mod timer;
pub mod widget;
