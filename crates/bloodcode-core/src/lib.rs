//! Blood Code session controller.
//!
//! Owns all mutable playthrough state and mediates the menu → pattern
//! → timeline → deduction → complete progression over the pure logic
//! in `bloodcode-logic`. The presentation layer forwards input events
//! into [`engine::GameSession`] and re-renders from the
//! [`snapshot::SessionSnapshot`] it emits; [`content`] supplies the
//! immutable case tables and [`assets`] resolves scene image paths.

pub mod assets;
pub mod content;
pub mod engine;
pub mod snapshot;

pub use engine::GameSession;
pub use snapshot::SessionSnapshot;
