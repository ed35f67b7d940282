pub mod dto;
pub mod password;
pub mod repo;
pub mod repo_types;
pub mod services;
pub mod session;

pub use dto::{LoginRequest, SignupRequest};
pub use repo_types::UserRecord;
pub use services::CredentialStore;
pub use session::{Session, SessionManager};
