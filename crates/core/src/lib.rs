//! Deck and session logic. Keep this crate free of IO and platform concerns.

pub mod app;
pub mod cards;
pub mod catalog;
pub mod engine;
pub mod events;
pub mod pool;
pub mod progress;
pub mod rng;
pub mod rows;
pub mod session;

pub use app::*;
pub use cards::*;
pub use catalog::*;
pub use engine::*;
pub use events::*;
pub use pool::*;
pub use progress::*;
pub use rng::*;
pub use rows::*;
pub use session::*;
