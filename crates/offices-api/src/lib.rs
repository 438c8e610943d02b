//! Offices API: the shared host pipeline with no controllers of its own yet.

pub mod app;
