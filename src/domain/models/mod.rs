mod action;
mod backend;
mod button;
mod event;
mod match_result;
mod outcome;
mod session;
mod slash_commands;
mod textarea;

pub use action::*;
pub use backend::*;
pub use button::*;
pub use event::*;
pub use match_result::*;
pub use outcome::*;
pub use session::*;
pub use slash_commands::*;
pub use textarea::*;
