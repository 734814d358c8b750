//! Line-oriented terminal front-end: the main menu, the four record
//! operations, the prompts they share, and the first-run seed offer.

mod console;
mod menu;
mod operations;
mod prompts;
mod seeding;
mod session;
mod table;

pub use console::{Console, ScriptedConsole, StdConsole, Tone};
pub use session::{Session, SessionError};
pub use table::render_books;
