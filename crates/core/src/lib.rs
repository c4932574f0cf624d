pub mod collaborators;
pub mod command;
pub mod coordinate;
pub mod error;
pub mod io;
pub mod menu;
pub mod mission;
pub mod planet;
pub mod rover;
pub mod session;

pub use collaborators::Collaborators;
pub use session::{Session, SessionState};
