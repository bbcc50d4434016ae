//! # Herocraft Core
//!
//! Turns a character kind plus a selection of upgrades into a finished hero.
//!
//! * [`catalog`]: base character lookup.
//! * [`compose`]: stacking upgrades onto a character.
//! * [`portrait`]: portrait file names for a selection.
//! * [`assets`]: the on-disk asset directory.
//! * [`forge`]: the request/report entry point used by front ends.

pub mod assets;
pub mod catalog;
pub mod compose;
pub mod forge;
pub mod portrait;
