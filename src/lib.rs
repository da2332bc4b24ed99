//! Browser client for round results: a year-grouped navigation drawer and
//! the pages it links to.

pub mod app;
pub mod components;
pub mod data;
pub mod error;
pub mod grouping;
pub mod model;
pub mod pages;
pub mod theme;
