#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

pub mod history;

mod matching;
mod navigation;
mod route_definition;
mod routes;
mod service;

pub use matching::{MatchedRoute, NOT_FOUND_NAME};
pub use navigation::Query;
pub use route_definition::RouteDefinition;
pub use routes::ensure_hash;
pub use service::{HandlerId, HashRouter};

/// A collection of useful items most applications might need.
pub mod prelude {
    pub use crate::history::*;
    pub use crate::matching::{MatchedRoute, NOT_FOUND_NAME};
    pub use crate::navigation::Query;
    pub use crate::route_definition::RouteDefinition;
    pub use crate::routes::ensure_hash;
    pub use crate::service::{HandlerId, HashRouter};
}
