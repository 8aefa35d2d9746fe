//! # Services
//!
//! One service per resource, sitting between the route handlers and the
//! repositories. The services own the non-transport concerns: action
//! logging with the explicit acting user, read caching, metrics, and the
//! calls into the lifecycle engine.

pub mod projects;
pub mod responsibles;
pub mod secretariats;

pub use projects::ProjectService;
pub use responsibles::ResponsibleService;
pub use secretariats::SecretariatService;
