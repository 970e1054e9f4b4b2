pub mod models;
pub mod services;
pub mod keypad;

pub use models::*;
pub use services::*;
pub use keypad::*;
