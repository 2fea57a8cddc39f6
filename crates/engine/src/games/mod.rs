//! Built-in games.

pub mod basketball;
pub mod flappy;
pub mod pong;
pub mod snake;

pub use basketball::Basketball;
pub use flappy::Flappy;
pub use pong::Pong;
pub use snake::Snake;
