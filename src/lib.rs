// SPDX-License-Identifier: GPL-3.0-only

//! Terminal Pokédex backed by PokéApi.
//!
//! [`core`] holds the data source seam, the page loader and the detail resolver,
//! [`app`] the view state, its reducer and the effect runtime.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod entities;
pub mod utils;
