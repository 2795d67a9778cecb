//! JobPulse client core.
//!
//! This crate owns the in-memory view of a signed-in user's application
//! collection: the paginated sync store with reconciliation and
//! validation, the transient import-highlight tracker, and the
//! background Gmail scan poller. Rendering belongs to the embedding
//! frontend, which subscribes through [`SessionObserver`] and reads
//! state back through [`Session`] accessors.

pub mod api;
pub mod api_client;
pub mod auth;
pub mod config;
pub mod effects;
pub mod error;
pub mod highlight;
pub mod poller;
pub mod reconcile;
pub mod session;
pub mod store;
pub mod testing;

pub use api::JobsApi;
pub use api_client::ApiClient;
pub use auth::{AuthToken, SessionUser, SigninResponse};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use highlight::HighlightTracker;
pub use poller::ScanNotice;
pub use reconcile::{reconcile, StatusFix};
pub use session::{LoadOutcome, Session, SessionObserver};
pub use store::{
    InvalidRecord, LoadTicket, PageApplied, PageState, SyncStore,
};
