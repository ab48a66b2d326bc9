/// Chess domain types.
pub mod chess;
/// The history of a game.
pub mod game;
/// Board diagrams.
pub mod render;
/// Where moves come from.
pub mod source;
/// Assorted utilities.
pub mod util;
