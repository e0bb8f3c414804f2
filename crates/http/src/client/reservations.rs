//! Reservation API client methods

use super::{ApiClient, ClientError};
use crate::types::{MessageResponse, Reservation};
use url::{Url, form_urlencoded};

/// Percent-encode `segment` for use as a single path segment
///
/// Spaces become `%20` and `/` becomes `%2F`.
fn encode_path_segment(segment: &str) -> Result<String, ClientError> {
    let mut url = Url::parse("http://localhost/")
        .map_err(|e| ClientError::Configuration(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| ClientError::Configuration("URL cannot carry path segments".into()))?
        .clear()
        .push(segment);
    Ok(url.path().trim_start_matches('/').to_string())
}

impl ApiClient {
    /// Create a reservation
    pub async fn create_reservation(
        &self,
        reservation: &Reservation,
    ) -> Result<Reservation, ClientError> {
        self.post_json("/reservations", reservation).await
    }

    /// Get a reservation by ID
    pub async fn get_reservation(&self, id: i64) -> Result<Reservation, ClientError> {
        self.get_json(&format!("/reservations/{id}")).await
    }

    /// List reservations, optionally filtered by guest name
    pub async fn list_reservations(
        &self,
        guest_name: Option<&str>,
    ) -> Result<Vec<Reservation>, ClientError> {
        // Blank names mean "no filter"; other names are sent untrimmed.
        let path = match guest_name.filter(|name| !name.trim().is_empty()) {
            Some(name) => {
                let encoded: String = form_urlencoded::byte_serialize(name.as_bytes()).collect();
                format!("/reservations?guestName={encoded}")
            }
            None => "/reservations".to_string(),
        };
        self.get_json(&path).await
    }

    /// Replace a reservation
    pub async fn update_reservation(
        &self,
        id: i64,
        reservation: &Reservation,
    ) -> Result<Reservation, ClientError> {
        self.put_json(&format!("/reservations/{id}"), reservation)
            .await
    }

    /// Delete a reservation
    pub async fn delete_reservation(&self, id: i64) -> Result<MessageResponse, ClientError> {
        self.delete_json(&format!("/reservations/{id}")).await
    }

    /// Reservations with a given status, e.g. `confirmed`
    pub async fn reservations_by_status(
        &self,
        status: &str,
    ) -> Result<Vec<Reservation>, ClientError> {
        let encoded = encode_path_segment(&status.to_uppercase())?;
        self.get_json(&format!("/reservations/status/{encoded}"))
            .await
    }

    /// Guests currently checked in
    pub async fn active_reservations(&self) -> Result<Vec<Reservation>, ClientError> {
        self.get_json("/reservations/active").await
    }

    /// Reservations with a future check-in
    pub async fn upcoming_reservations(&self) -> Result<Vec<Reservation>, ClientError> {
        self.get_json("/reservations/upcoming").await
    }

    /// Most recently created reservations
    pub async fn recent_reservations(&self) -> Result<Vec<Reservation>, ClientError> {
        self.get_json("/reservations/recent").await
    }
}
