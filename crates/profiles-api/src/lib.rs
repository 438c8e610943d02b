//! Profiles API: doctor profile endpoints behind the shared service host.

pub mod app;
pub mod controllers;
pub mod openapi;
