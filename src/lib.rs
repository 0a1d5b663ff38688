//! # tracker-api-rust
//!
//! A typed, client-side object model for a remote issue-tracking REST
//! service, exemplified by the Milestone resource.
//!
//! ## Overview
//!
//! This crate provides:
//! - JSON materialization into typed resource structs, with absent/null
//!   fields as `None` and decode failures surfaced as errors
//! - An auth guard that rejects mutating calls locally, before any network
//!   I/O, when the session carries no credentials
//! - Partial updates that transmit only the fields the caller supplied,
//!   and skip the network entirely when none were
//! - Lazy, restartable-from-scratch pagination over sub-collections
//! - A thin async HTTP session collaborator over reqwest
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tracker_api::{Credentials, Milestone, MilestoneState, MilestoneUpdate, Session};
//!
//! let session = Session::authenticated(Credentials::token("abc123"));
//!
//! // Fetch a milestone by its canonical URL.
//! let mut milestone = Milestone::fetch(&session, &url).await?;
//! println!("{milestone}"); // the title
//!
//! // Close it: one PATCH carrying exactly the supplied field.
//! milestone
//!     .update(MilestoneUpdate {
//!         state: Some(MilestoneState::Closed),
//!         ..MilestoneUpdate::default()
//!     })
//!     .await?;
//!
//! // Walk its labels lazily, one page request at a time.
//! let mut labels = milestone.labels();
//! while let Some(label) = labels.try_next().await? {
//!     println!("- {}", label.name);
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the session is passed explicitly into each
//!   resource at construction
//! - **Snapshots are stable**: a resource's attributes are fixed when it is
//!   materialized and change only via an explicit server round-trip
//! - **Errors are distinguishable**: "nothing happened", "sent and
//!   rejected", and "sent and succeeded" are three different outcomes
//! - **No policy in the core**: retries, rate limiting, caching, and
//!   credential storage belong to outer layers

pub mod auth;
pub mod clients;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::Credentials;
pub use clients::{HttpError, HttpResponse, Session};
pub use rest::resources::{Label, Milestone, MilestoneState, MilestoneUpdate, User};
pub use rest::{materialize, require_auth, PageCursor, ResourceError, DEFAULT_PER_PAGE};
