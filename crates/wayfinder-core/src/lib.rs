//! Wayfinder Core Library
//!
//! Route matching, navigation state, the demo site's route tables and
//! configuration for the Wayfinder routing demo.

pub mod config;
pub mod error;
pub mod history;
pub mod location;
pub mod pattern;
pub mod route;
pub mod session;
pub mod site;

pub use config::Config;
pub use error::{CoreError, Result};
pub use history::History;
pub use location::Location;
pub use pattern::{MatchOptions, Params, PathMatch, RoutePattern, Segment};
pub use route::{MatchMode, RouteEntry, RouteMatch, RouteTable};
pub use session::{MountedPage, MountedUser, Screen, Session};
pub use site::{ContactForm, NavLink, Page, UserPage};
