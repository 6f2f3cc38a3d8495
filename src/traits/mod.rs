pub mod session_store;
pub mod stay_api;

// Re-export traits
pub use session_store::SessionStore;
pub use stay_api::StayApi;
