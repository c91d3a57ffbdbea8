//! Core library exports for the catalog browser.
//!
//! With the `data` feature the crate exposes the catalog domain, the static
//! dataset repository and the join/filter/sort pipeline. The `server`
//! feature adds the forms, DTOs, configuration and Actix routes used by the
//! web application.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod services;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
