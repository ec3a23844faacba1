pub mod axis;
pub mod error;
pub mod layout;
pub mod legend;
