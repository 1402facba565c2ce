// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Relational Projects - Wallet-Scoped Project Management Service
//!
//! This crate provides owner-scoped project CRUD for wallet-identified users,
//! with bearer-token verification delegated to the Quick Auth identity
//! provider and persistence in Postgres.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Authentication and authorization (Quick Auth bearer tokens)
//! - `identity` - Wallet/slug normalization primitives
//! - `storage` - Owner-scoped project persistence (Postgres + in-memory)

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod identity;
pub mod models;
pub mod state;
pub mod storage;
