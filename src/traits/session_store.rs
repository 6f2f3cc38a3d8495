use crate::errors::StayResult;

/// Small persisted key-value store backing the admin session flag
pub trait SessionStore {
    fn get(&self, key: &str) -> StayResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> StayResult<()>;

    /// Removing a missing key is not an error
    fn remove(&mut self, key: &str) -> StayResult<()>;
}
