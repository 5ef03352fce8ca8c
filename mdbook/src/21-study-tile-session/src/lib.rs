//! Session logic for the study tile: a 5x5 LED countdown for study blocks
//! separated by breaks, with a noise interlock that freezes the countdown
//! while the room is loud.
//!
//! Nothing in here touches hardware. The firmware implements the traits in
//! [`board`] and feeds button edges and periodic triggers into a [`Session`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod trace;

pub mod board;
pub mod buzzer;
pub mod config;
pub mod icons;
pub mod noise;
pub mod progress;
pub mod session;
pub mod tap;
pub mod time;

pub use board::{Board, Clock, Microphone, Note, Screen, Speaker};
pub use icons::Icon;
pub use session::{Phase, Session};
