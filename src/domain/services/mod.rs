pub mod actions;
mod app_state;
pub mod events;
mod match_cards;
mod scroll;

pub use app_state::*;
pub use match_cards::*;
pub use scroll::*;
