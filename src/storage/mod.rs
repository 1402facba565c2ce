// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Project Storage Module
//!
//! Owner-scoped persistence for identities and projects behind the
//! [`ProjectStore`] trait.
//!
//! ## Backends
//!
//! - [`PgProjectStore`] — Postgres via sqlx, the production backend
//! - [`InMemoryProjectStore`] — tests and local development
//!
//! ## Ownership Model
//!
//! Every operation is filtered by the owner's normalized wallet address.
//! A project owned by someone else is indistinguishable from a nonexistent
//! one: both surface as [`StoreError::NotFound`].
//!
//! ## Uniqueness
//!
//! Slug and identity uniqueness are enforced by the store's own constraint
//! mechanism (unique indexes), not by this module's callers.

pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::InMemoryProjectStore;
pub use postgres::PgProjectStore;
pub use store::{NewProject, ProjectPatch, ProjectStore};

use thiserror::Error;

/// Persistence failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Resource absent, or owned by someone else (deliberately collapsed).
    #[error("not found")]
    NotFound,
    /// Unique-constraint violation (e.g. duplicate slug).
    #[error("conflict: {0}")]
    Conflict(String),
    /// Connectivity or query failure.
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.code().as_deref() == Some("23505") {
                return StoreError::Conflict(db.message().to_string());
            }
        }
        StoreError::Database(err.to_string())
    }
}
