pub mod state;

pub use state::{MenuAction, MenuState, MenuTarget, MenuView};
