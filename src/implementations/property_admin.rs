use log::{error, info};

use crate::errors::{StayError, StayResult};
use crate::implementations::admin_form::PropertyForm;
use crate::implementations::session_gate::SessionGate;
use crate::models::booking::BookingInquiry;
use crate::models::property::Property;
use crate::traits::{SessionStore, StayApi};

/// Admin CRUD over the property listings.
///
/// Every operation checks the session gate first and every write validates
/// the form before anything is sent, so a rejected form never reaches the
/// network. Forms are borrowed and left intact whatever the outcome.
pub struct PropertyAdmin<'a, A: StayApi, S: SessionStore> {
    api: &'a A,
    gate: &'a SessionGate<S>,
}

impl<'a, A: StayApi, S: SessionStore> PropertyAdmin<'a, A, S> {
    pub fn new(api: &'a A, gate: &'a SessionGate<S>) -> Self {
        Self { api, gate }
    }

    fn require_session(&self) -> StayResult<()> {
        if self.gate.is_authenticated() {
            Ok(())
        } else {
            Err(StayError::Unauthorized)
        }
    }

    /// All active listings; the dashboard filters them locally
    pub async fn list(&self) -> StayResult<Vec<Property>> {
        self.require_session()?;
        self.api.list_properties(&Default::default()).await
    }

    pub async fn create(&self, form: &PropertyForm) -> StayResult<Property> {
        self.require_session()?;
        let payload = form.to_payload()?;
        match self.api.create_property(&payload).await {
            Ok(created) => {
                info!("Created property {} ({})", created.title, created.display_id());
                Ok(created)
            }
            Err(e) => {
                error!("Failed to create property {}: {}", payload.title, e);
                Err(e)
            }
        }
    }

    pub async fn update(&self, id: &str, form: &PropertyForm) -> StayResult<Property> {
        self.require_session()?;
        let payload = form.to_payload()?;
        match self.api.update_property(id, &payload).await {
            Ok(updated) => {
                info!("Updated property {}", id);
                Ok(updated)
            }
            Err(e) => {
                error!("Failed to update property {}: {}", id, e);
                Err(e)
            }
        }
    }

    /// Backend deletes are soft: the record is marked inactive
    pub async fn delete(&self, id: &str) -> StayResult<()> {
        self.require_session()?;
        self.api.delete_property(id).await.map_err(|e| {
            error!("Failed to delete property {}: {}", id, e);
            e
        })?;
        info!("Deleted property {}", id);
        Ok(())
    }

    pub async fn inquiries(&self, limit: Option<u32>) -> StayResult<Vec<BookingInquiry>> {
        self.require_session()?;
        self.api.list_inquiries(limit).await
    }

    /// Load a record for editing
    pub async fn edit_form(&self, id: &str) -> StayResult<PropertyForm> {
        self.require_session()?;
        let property = self.api.get_property(id).await?;
        Ok(PropertyForm::from_property(&property))
    }
}
