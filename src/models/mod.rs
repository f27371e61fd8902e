pub mod activity;
pub mod api;

pub use activity::{Activity, ActivityList};
pub use api::{ErrorDetail, MessageResponse};
