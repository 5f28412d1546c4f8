pub mod cmd;
pub mod input;
pub mod menu;
pub mod session;
