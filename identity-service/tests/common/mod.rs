use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use identity_service::domain::user::models::EmailAddress;
use identity_service::domain::user::models::UserRecord;
use identity_service::domain::user::ports::UserDirectory;
use identity_service::user::errors::DirectoryError;

/// In-memory user directory for integration tests.
///
/// Honors the same atomicity contract as the Postgres adapter: the map lock
/// makes check-and-insert a single step, so concurrent creates for the same
/// email resolve to exactly one record.
#[derive(Default)]
pub struct InMemoryDirectory {
    records: Mutex<HashMap<String, UserRecord>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl UserDirectory for InMemoryDirectory {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserRecord>, DirectoryError> {
        let records = self.records.lock().unwrap();
        Ok(records.get(email.as_str()).cloned())
    }

    async fn create(&self, record: UserRecord) -> Result<UserRecord, DirectoryError> {
        let mut records = self.records.lock().unwrap();

        if records.contains_key(record.email.as_str()) {
            return Err(DirectoryError::DuplicateUser(
                record.email.as_str().to_string(),
            ));
        }

        records.insert(record.email.as_str().to_string(), record.clone());
        Ok(record)
    }
}
