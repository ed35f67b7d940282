pub mod dto;
pub mod services;

pub use dto::{AdminStats, UserSummary};
pub use services::AdminAggregator;
