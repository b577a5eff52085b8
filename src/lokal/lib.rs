//! # Lokal Architecture
//!
//! Lokal is a **UI-agnostic listing library**. The CLI binary is one client
//! of it; the same core could back a web front end or an admin panel.
//!
//! ## The layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prints tables/cards, handles exit codes│
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Listing pipeline (listing/, render.rs)                     │
//! │  - ListingState: filter spec × sort spec × page             │
//! │  - Pure: each step derives a new view, source list is never │
//! │    mutated                                                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Contact intake (api.rs, contact.rs)                        │
//! │  - Validates and persists contact messages                  │
//! │  - Returns structured Result types, no I/O assumptions      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract MessageStore trait                              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data flow
//!
//! `loader` populates an in-memory list of [`model::UnitRecord`]s once from a
//! directory of CMS-managed JSON files. [`listing::ListingState`] owns that
//! list together with the current filter/sort/page tuple; every user
//! interaction re-runs filter → sort → paginate wholesale and [`render`]
//! projects the visible page into table rows, cards and a pagination strip.
//!
//! ## Key principle: no I/O assumptions in core
//!
//! From `api.rs` inward (pipeline, contact commands, storage), code takes
//! regular Rust arguments, returns `Result`, and never touches
//! stdout/stderr or `std::process::exit`.
//!
//! ## Module overview
//!
//! - [`api`]: facade over the contact-message operations
//! - [`contact`]: submit / list / status-update business logic
//! - [`listing`]: filter, sort and pagination over the unit list
//! - [`loader`]: best-effort aggregation of unit source files
//! - [`model`]: core data types (`UnitRecord`, `ContactMessage`)
//! - [`render`]: view projections (table, cards, pagination strip)
//! - [`settings`]: site-settings document
//! - [`store`]: storage abstraction and implementations
//! - [`error`]: error types

pub mod api;
pub mod contact;
pub mod error;
pub mod listing;
pub mod loader;
pub mod model;
pub mod render;
pub mod settings;
pub mod store;
