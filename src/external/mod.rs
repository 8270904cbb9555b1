//! Collaborators that talk to the outside world: the HTTP client and the
//! SHOWROOM catalog source.

pub mod client;
pub mod cookies;
pub mod showroom;
pub mod source;
pub mod user_agent;

pub use cookies::SessionCookies;
pub use showroom::{ShowroomClient, load_snapshot};
pub use source::{CatalogSource, StaticCatalog};
