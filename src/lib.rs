#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
pub mod console;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use console::Command;
#[cfg(feature = "std")]
pub use logging::init_logging;
