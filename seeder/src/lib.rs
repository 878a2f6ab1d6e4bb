//! Seeder - fills a relational store with synthetic companies and employees
//!
//! This library provides the schema initializer, data generator and summary
//! reporter used by the `seeder` binary.

pub mod config;
pub mod entity;
pub mod error;
pub mod fake;
pub mod generator;
pub mod pipeline;
pub mod report;
pub mod schema;
pub mod suffix;
