//! Board-agnostic logic for the Leaf of Faith plant waterer
//!
//! Everything here runs on the host as well as on the AVR target:
//!
//! - A fixed-period cooperative [`scheduler`]
//! - The three periodic tasks: [`sampler`], [`clock`] and [`ui`]
//! - The shared [`profile`] data model and its [`storage`] layout
//! - The [`board::Board`] seam the firmware implements for real hardware

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod board;
pub mod clock;
pub mod config;
pub mod controller;
pub mod display;
pub mod events;
pub mod input;
pub mod link;
pub mod profile;
pub mod readings;
pub mod sampler;
pub mod scheduler;
pub mod storage;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;
