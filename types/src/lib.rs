mod contractor;
mod error;
mod message;
mod project;
mod role;
pub mod token;

pub use contractor::Contractor;
pub use error::TokenError;
pub use message::Message;
pub use project::{DashboardStats, Project, ProjectStatus};
pub use role::{Role, RoleClaim, UnknownRole};
pub use token::{TOKEN_STORAGE_KEY, TokenPayload, decode_token};
