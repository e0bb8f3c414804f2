//! Request and response types for the reservation API

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for later requests
    pub token: String,
    pub user: UserInfo,
}

/// Logged-in user details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub email: String,
    pub role: String,
    /// Display name
    pub name: String,
}

/// Acknowledgement returned by logout and delete endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(default)]
    pub timestamp: i64,
}

/// Bookable room categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    Single,
    Double,
    Suite,
    Deluxe,
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Single => "SINGLE",
            Self::Double => "DOUBLE",
            Self::Suite => "SUITE",
            Self::Deluxe => "DELUXE",
        };
        f.write_str(name)
    }
}

/// A guest booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Assigned by the server on create
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub guest_full_name: String,
    pub address: String,
    pub contact_number: String,
    pub email: String,
    pub room_type: RoomType,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub number_of_guests: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    /// `PENDING` until confirmed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

impl Reservation {
    /// Nights between check-in and check-out
    pub fn number_of_nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Itemised bill for a reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillDetails {
    pub reservation_id: i64,
    pub guest_name: String,
    pub room_type: RoomType,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub number_of_nights: i64,
    pub room_rate_per_night: f64,
    pub room_subtotal: f64,
    pub service_charge: f64,
    /// Percentage, e.g. 5 for 5%
    pub service_charge_rate: u32,
    pub tax: f64,
    /// Percentage, e.g. 8 for 8%
    pub tax_rate: u32,
    pub grand_total: f64,
}
