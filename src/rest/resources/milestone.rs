//! Milestone resource implementation.
//!
//! A milestone groups issues under a title, state, and optional due date.
//! This type composes the whole of the generic core: eager materialization
//! with a retained snapshot, the auth guard on `delete`/`update`, the
//! partial-update payload that transmits only supplied fields, and a lazy
//! [`PageCursor`] over the milestone's labels.
//!
//! # Example
//!
//! ```rust,ignore
//! use tracker_api::{Credentials, Milestone, MilestoneUpdate, MilestoneState, Session};
//!
//! let session = Session::authenticated(Credentials::token("abc123"));
//! let mut milestone = Milestone::fetch(&session, &url).await?;
//!
//! // Partial update: only the supplied fields go on the wire.
//! let changed = milestone
//!     .update(MilestoneUpdate {
//!         state: Some(MilestoneState::Closed),
//!         ..MilestoneUpdate::default()
//!     })
//!     .await?;
//! assert!(changed);
//!
//! // Lazy label listing.
//! let mut labels = milestone.labels();
//! while let Some(label) = labels.try_next().await? {
//!     println!("{}", label.name);
//! }
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::Session;
use crate::rest::resources::{Label, User};
use crate::rest::{materialize, require_auth, PageCursor, ResourceError, DEFAULT_PER_PAGE};

/// The open/closed state of a milestone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneState {
    /// The milestone is open.
    Open,
    /// The milestone is closed.
    Closed,
}

impl MilestoneState {
    /// The wire name of the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for MilestoneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire shape of a milestone payload. Materialization target only; the
/// public type adds the session handle and the snapshot.
#[derive(Deserialize)]
struct MilestoneRepr {
    id: u64,
    number: u64,
    state: MilestoneState,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    creator: Option<User>,
    #[serde(default)]
    due_on: Option<DateTime<Utc>>,
    #[serde(default)]
    open_issues: Option<u64>,
    #[serde(default)]
    closed_issues: Option<u64>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    url: String,
}

/// A milestone on the remote service.
///
/// Attributes are fixed at construction from the JSON snapshot and change
/// only when a successful `update` or `refresh` replaces them wholesale;
/// `delete` never touches the local instance. Equality and hashing use the
/// stable `id` alone, so two fetches of the same remote entity compare
/// equal regardless of snapshot timing.
#[derive(Clone)]
pub struct Milestone {
    session: Session,
    snapshot: Value,
    /// The stable unique identifier of the milestone.
    pub id: u64,
    /// The milestone number within its repository.
    pub number: u64,
    /// The open/closed state.
    pub state: MilestoneState,
    /// The milestone title.
    pub title: String,
    /// The free-form description, if any.
    pub description: Option<String>,
    /// The user who created the milestone, when the payload carries one.
    pub creator: Option<User>,
    /// The due date, if one is set.
    pub due_on: Option<DateTime<Utc>>,
    /// Count of open issues under the milestone.
    pub open_issues: Option<u64>,
    /// Count of closed issues under the milestone.
    pub closed_issues: Option<u64>,
    /// When the milestone was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the milestone was last updated.
    pub updated_at: Option<DateTime<Utc>>,
    /// The canonical API URL of the milestone.
    pub url: String,
}

impl Milestone {
    /// Materializes a milestone from its JSON representation.
    ///
    /// All declared attributes are decoded eagerly; the raw JSON is kept as
    /// the snapshot returned by [`as_json`](Self::as_json).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedResponse`] if a declared field
    /// cannot be decoded (e.g., a malformed `due_on` timestamp).
    pub fn from_json(session: Session, json: Value) -> Result<Self, ResourceError> {
        let repr: MilestoneRepr = materialize(&json)?;

        Ok(Self {
            session,
            snapshot: json,
            id: repr.id,
            number: repr.number,
            state: repr.state,
            title: repr.title,
            description: repr.description,
            creator: repr.creator,
            due_on: repr.due_on,
            open_issues: repr.open_issues,
            closed_issues: repr.closed_issues,
            created_at: repr.created_at,
            updated_at: repr.updated_at,
            url: repr.url,
        })
    }

    /// Fetches a milestone by its canonical URL.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] for a 404,
    /// [`ResourceError::Response`] for other non-success statuses, and
    /// [`ResourceError::Transport`] if the request never completes.
    pub async fn fetch(session: &Session, url: &str) -> Result<Self, ResourceError> {
        let response = session.get(url, None).await?;

        if !response.is_success() {
            return Err(ResourceError::from_read_failure(url, &response));
        }

        let body = response.body.ok_or_else(|| ResourceError::MalformedResponse {
            reason: "milestone response carried no body".to_string(),
        })?;

        Self::from_json(session.clone(), body)
    }

    /// Re-fetches the milestone and replaces all attributes and the
    /// snapshot with the server's current representation.
    ///
    /// # Errors
    ///
    /// Same error classes as [`fetch`](Self::fetch).
    pub async fn refresh(&mut self) -> Result<(), ResourceError> {
        let refreshed = Self::fetch(&self.session, &self.url).await?;
        *self = refreshed;
        Ok(())
    }

    /// Returns the JSON snapshot this instance was materialized from.
    #[must_use]
    pub const fn as_json(&self) -> &Value {
        &self.snapshot
    }

    /// Deletes the milestone on the server.
    ///
    /// The local instance is not mutated; deletion is a server-side effect
    /// and callers are responsible for discarding references.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::AuthenticationRequired`], before any
    /// network I/O, if the session carries no credentials, or
    /// [`ResourceError::Transport`] if the request never completes.
    ///
    /// # Returns
    ///
    /// `Ok(true)` iff the server answered 204 No Content.
    pub async fn delete(&self) -> Result<bool, ResourceError> {
        require_auth(&self.session)?;

        let response = self.session.delete(&self.url).await?;
        Ok(response.status == 204)
    }

    /// Applies a partial update, transmitting only the supplied fields.
    ///
    /// If no fields were supplied the operation is a no-op: no request is
    /// issued and `Ok(false)` is returned. Otherwise a single PATCH goes to
    /// the canonical URL; on success the instance's attributes and snapshot
    /// are replaced from the response body and `Ok(true)` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::AuthenticationRequired`], before any
    /// network I/O, if the session carries no credentials;
    /// [`ResourceError::UpdateRejected`] with the server's status and
    /// message for a non-success response; and
    /// [`ResourceError::Transport`] if the request never completes.
    pub async fn update(&mut self, changes: MilestoneUpdate) -> Result<bool, ResourceError> {
        require_auth(&self.session)?;

        let payload = changes.into_payload();
        if payload.is_empty() {
            tracing::debug!(url = %self.url, "update called with no fields, skipping request");
            return Ok(false);
        }

        let response = self.session.patch(&self.url, &Value::Object(payload)).await?;

        if !response.is_success() {
            return Err(ResourceError::UpdateRejected {
                status: response.status,
                message: response.server_message(),
            });
        }

        let body = response.body.ok_or_else(|| ResourceError::MalformedResponse {
            reason: "update response carried no body".to_string(),
        })?;
        *self = Self::from_json(self.session.clone(), body)?;

        Ok(true)
    }

    /// Returns a fresh cursor over the milestone's labels.
    ///
    /// Each call builds an independent sequence starting from page one with
    /// the default page-size hint; nothing is fetched until the cursor is
    /// first advanced.
    #[must_use]
    pub fn labels(&self) -> PageCursor<Label> {
        self.labels_with_per_page(DEFAULT_PER_PAGE)
    }

    /// Like [`labels`](Self::labels), with an explicit page-size hint.
    #[must_use]
    pub fn labels_with_per_page(&self, per_page: u32) -> PageCursor<Label> {
        PageCursor::new(
            self.session.clone(),
            format!("{}/labels", self.url),
            per_page,
        )
    }
}

/// The title, matching the service's display convention.
impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// Fixed bracketed form: `<Milestone [title]>`.
impl fmt::Debug for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Milestone [{}]>", self.title)
    }
}

/// Identity comparison by stable id; snapshots of the same remote entity
/// taken at different times compare equal.
impl PartialEq for Milestone {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Milestone {}

impl Hash for Milestone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A partial update for a milestone.
///
/// Every field defaults to "unchanged"; only explicitly supplied fields are
/// serialized into the request payload. Supplying none makes
/// [`Milestone::update`] a no-op.
#[derive(Debug, Clone, Default)]
pub struct MilestoneUpdate {
    /// New title.
    pub title: Option<String>,
    /// New state.
    pub state: Option<MilestoneState>,
    /// New description.
    pub description: Option<String>,
    /// New due date, serialized as an ISO-8601 UTC timestamp.
    pub due_on: Option<DateTime<Utc>>,
}

impl MilestoneUpdate {
    /// Builds the request payload from the supplied fields only.
    fn into_payload(self) -> Map<String, Value> {
        let mut payload = Map::new();

        if let Some(title) = self.title {
            payload.insert("title".to_string(), Value::String(title));
        }
        if let Some(state) = self.state {
            payload.insert("state".to_string(), Value::String(state.as_str().to_string()));
        }
        if let Some(description) = self.description {
            payload.insert("description".to_string(), Value::String(description));
        }
        if let Some(due_on) = self.due_on {
            // The service's field names and timestamp form, verbatim.
            payload.insert(
                "due_on".to_string(),
                Value::String(due_on.to_rfc3339_opts(SecondsFormat::Secs, true)),
            );
        }

        payload
    }
}
