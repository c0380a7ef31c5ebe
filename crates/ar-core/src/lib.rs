pub mod config;
pub mod constants;
pub mod controls;
pub mod error;
pub mod hotspot;
pub mod input;
pub mod marker;
pub mod pose;
pub mod scene;
pub mod viewer;

pub use config::*;
pub use constants::*;
pub use controls::*;
pub use error::Error;
pub use hotspot::*;
pub use input::*;
pub use marker::*;
pub use pose::*;
pub use scene::*;
pub use viewer::*;
