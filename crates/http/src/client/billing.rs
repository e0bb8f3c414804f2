//! Billing API client methods

use super::{ApiClient, ClientError};
use crate::types::BillDetails;

impl ApiClient {
    /// Get the itemised bill for a reservation
    pub async fn get_bill(&self, reservation_id: i64) -> Result<BillDetails, ClientError> {
        self.get_json(&format!("/billing/{reservation_id}")).await
    }
}
