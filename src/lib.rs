//! SkyWeather: an in-memory API for celestial bodies and their weather.
//!
//! Requests flow from [`api`] through the [`service`] façade, which runs the
//! [`query`] and [`update`] engines against the [`store`].

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod service;
pub mod store;
pub mod update;
