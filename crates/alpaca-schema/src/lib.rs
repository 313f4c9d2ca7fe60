//! Parsing and shorthand normalization for alpaca package descriptors.
//!
//! This crate defines the schema layer: the top-level descriptor (`Config`),
//! the object collection keyed by name (`ObjectMap`), and the object
//! relationship records (`Then`, `ThenList`). Descriptor authors get a
//! permissive notation — a relationship may be a bare name or a structured
//! entry, and a single entry may stand in for a one-element list — while
//! everything downstream sees one canonical shape: fully structured records,
//! always in a list, with every object's name matching its map key.

pub mod config;
pub mod object;
pub mod then;

pub use config::{parse_config_file, parse_config_str, Config, ConfigError};
pub use object::{Object, ObjectMap};
pub use then::{Then, ThenList};
