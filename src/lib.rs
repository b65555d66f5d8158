//! BeachDuo core - local data layer for the BeachDuo tournament organizer
//!
//! This crate provides the embedded store behind the BeachDuo app:
//! - Schema initialization with an explicit, configurable reset
//! - Tournament repository (create, list, delete)
//! - Account repository (create, delete, credential lookup)
//!
//! Screens, navigation and rendering live in the application shell, which
//! constructs the repositories and awaits their operations one at a time.

pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod error;
pub mod password;
pub mod repositories;
pub mod schema;
