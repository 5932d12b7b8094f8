pub mod cloud_events;
pub mod quotes;
