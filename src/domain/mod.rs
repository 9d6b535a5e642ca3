//! Domain Layer
//!
//! Entities, mock seed data and the pure filter/sort/stat logic behind every
//! admin panel and the public booking form.

pub mod entity;
pub mod repository;
pub mod metric;
pub mod appointment;
pub mod customer;
pub mod service;
pub mod gallery;
pub mod finance;
pub mod analytics;
pub mod content;
pub mod settings;
pub mod booking;
pub mod dashboard;

pub use entity::{DomainError, DomainResult, Entity};
pub use repository::{MemoryRepository, Repository};
