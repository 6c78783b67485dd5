//! UI Components

pub mod chip;
pub mod connect_button;

pub use chip::Chip;
pub use connect_button::ConnectButton;
