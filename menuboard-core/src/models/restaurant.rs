use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Id, Upload};
use crate::api::{ApiError, FormData, IntoPayload, Payload};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub opening_hours: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub logo: Option<String>,
}

/// Body of `POST /api/restaurants/`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewRestaurant {
    pub name: String,
    pub location: String,
    pub opening_hours: String,
    pub contact_email: String,
    pub contact_phone: String,
}

impl NewRestaurant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: String::new(),
            opening_hours: String::new(),
            contact_email: String::new(),
            contact_phone: String::new(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_opening_hours(mut self, hours: impl Into<String>) -> Self {
        self.opening_hours = hours.into();
        self
    }

    pub fn with_contact_email(mut self, email: impl Into<String>) -> Self {
        self.contact_email = email.into();
        self
    }

    pub fn with_contact_phone(mut self, phone: impl Into<String>) -> Self {
        self.contact_phone = phone.into();
        self
    }
}

impl IntoPayload for NewRestaurant {
    fn into_payload(self) -> Result<Payload, ApiError> {
        Payload::json(&self)
    }
}

/// Body of `PUT /api/restaurants/{id}/`.
///
/// Sent as JSON unless a new logo is attached, in which case the whole
/// record goes out as multipart form data.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantUpdate {
    pub name: String,
    pub location: String,
    pub opening_hours: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub logo: Option<Upload>,
}

impl From<&Restaurant> for RestaurantUpdate {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            name: restaurant.name.clone(),
            location: restaurant.location.clone(),
            opening_hours: restaurant.opening_hours.clone(),
            contact_email: restaurant.contact_email.clone(),
            contact_phone: restaurant.contact_phone.clone(),
            logo: None,
        }
    }
}

impl IntoPayload for RestaurantUpdate {
    fn into_payload(self) -> Result<Payload, ApiError> {
        match self.logo {
            Some(logo) => Ok(Payload::Multipart(
                FormData::new()
                    .text("name", self.name)
                    .text("location", self.location)
                    .text("opening_hours", self.opening_hours)
                    .text("contact_email", self.contact_email)
                    .text("contact_phone", self.contact_phone)
                    .file("logo", logo),
            )),
            None => Ok(Payload::Json(serde_json::json!({
                "name": self.name,
                "location": self.location,
                "opening_hours": self.opening_hours,
                "contact_email": self.contact_email,
                "contact_phone": self.contact_phone,
            }))),
        }
    }
}

impl fmt::Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", "=".repeat(self.name.chars().count()))?;
        writeln!(f, "ID: {}", self.id)?;

        if !self.location.is_empty() {
            writeln!(f, "Location: {}", self.location)?;
        }
        if !self.opening_hours.is_empty() {
            writeln!(f, "Hours: {}", self.opening_hours)?;
        }
        if !self.contact_email.is_empty() {
            writeln!(f, "Email: {}", self.contact_email)?;
        }
        if !self.contact_phone.is_empty() {
            writeln!(f, "Phone: {}", self.contact_phone)?;
        }
        if let Some(logo) = &self.logo {
            writeln!(f, "Logo: {}", logo)?;
        }

        Ok(())
    }
}
