pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod migration;
pub mod models;
pub mod service;
