//! # gauss-workspace
//!
//! A named collection of [`Matrix`](gauss_linalg::Matrix) values with
//! plain-text persistence.
//!
//! Operations read their operands by name and store results under a
//! caller-chosen name. A failing operation never modifies the workspace.
//!
//! ## Example
//!
//! ```
//! use gauss_workspace::Workspace;
//!
//! let mut ws = Workspace::new();
//! ws.create("A", 2, 2, 0.0).unwrap();
//! ws.assign("A", &[4.0, 7.0, 2.0, 6.0]).unwrap();
//! assert_eq!(ws.determinant("A").unwrap(), 10.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod persist;
pub mod workspace;

pub use config::WorkspaceConfig;
pub use error::{WorkspaceError, WorkspaceResult};
pub use workspace::Workspace;
