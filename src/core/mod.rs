//! Core library components.
//!
//! Credential resolution, the two HTTP clients, spreadsheet output and the
//! repository session, tied together by [`workflow`].

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod domain;
pub mod http;
pub mod query;
pub mod repository;
pub mod spreadsheet;
pub mod token;
pub mod types;
pub mod vault;
pub mod workflow;
