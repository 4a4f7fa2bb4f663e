//! Translation of analysis engine diagnostics into host issues.
//!
//! Each diagnostic is first routed ([`route`]) to an active rule, to an external issue or nowhere.
//! The [`IssueAssembler`] then builds the issue, resolving every reported range against the file
//! it belongs to ([`range::resolve`]). [`IssuesLoader`] ties both together for a sensor context.

mod assemble;
mod loader;
pub mod range;
mod router;
pub mod sensor;
mod settings;
pub mod severity;

pub use self::assemble::IssueAssembler;
pub use self::loader::{ContextFile, IssuesLoader};
pub use self::router::{
    route, Namespace, Routing, ACC_REPOSITORY_KEY, ACC_SOURCE, BSL_LS_ENGINE_ID,
    BSL_LS_REPOSITORY_KEY,
};
pub use self::sensor::SensorSummary;
pub use self::settings::{Settings, CREATE_EXTERNAL_ISSUES_DEFAULT, CREATE_EXTERNAL_ISSUES_KEY};
