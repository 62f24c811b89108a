#![warn(clippy::all, missing_docs)]

//! Core logic for the picture puzzle.
//!
//! This crate hosts configuration handling, asset discovery, the session,
//! the tile board model and the screen state machine. Frontends implement
//! [`surface::Surface`] and feed [`input::InputEvent`]s into a [`Game`].

pub mod assets;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod screen;
pub mod session;
pub mod surface;

pub use assets::AssetLibrary;
pub use board::{Board, TileId};
pub use config::{AppConfig, PuzzleSettings, SurfaceConfig};
pub use error::PuzzleError;
pub use game::{Game, Step};
pub use input::{InputEvent, Key, PointerButton};
pub use screen::{Context, Screen, Transition};
pub use session::Session;
pub use surface::{PixelRect, Point, Rgb, Size, Surface, TextSize, TextStyle};
