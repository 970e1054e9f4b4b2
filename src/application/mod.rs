//! Application layer managing state and user workflows.
//!
//! This module coordinates between the domain layer and presentation layer,
//! holding the calculator, the keypad selection, and the calculation tape.

pub mod state;

pub use state::*;
