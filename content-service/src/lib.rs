//! Brand content service: onboards organizations, generates brand-aligned
//! content through a language-model provider, and collects ratings and
//! analytics on the results.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
