//! The Spike Dash core.
//!
//! A real-time side-scroller: gravity pulls the player square back to the
//! ground each tick, spikes scroll in from the right on a wall-clock
//! timer, and touching one ends the run. Pure state in, events out -- no
//! terminal, clock, or audio dependencies live here.

pub mod logic;
pub mod types;
pub mod view;

pub use logic::*;
pub use types::*;
pub use view::*;
