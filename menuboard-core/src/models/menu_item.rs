use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::{Id, Upload};
use crate::api::{ApiError, FormData, IntoPayload, Payload};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Decimal price; the API sends it as a string such as `"12.50"`.
    pub price: BigDecimal,
    #[serde(default)]
    pub image: Option<String>,
    pub category: Id,
}

/// Body of `POST /api/menu-items/`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub category: Id,
}

impl NewMenuItem {
    pub fn new(name: impl Into<String>, price: BigDecimal, category: Id) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            category,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl IntoPayload for NewMenuItem {
    fn into_payload(self) -> Result<Payload, ApiError> {
        Payload::json(&self)
    }
}

/// Body of `PUT /api/menu-items/{id}/`, always sent as multipart form data.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemUpdate {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub category: Id,
    pub image: Option<Upload>,
}

impl From<&MenuItem> for MenuItemUpdate {
    fn from(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.clone(),
            category: item.category,
            image: None,
        }
    }
}

impl IntoPayload for MenuItemUpdate {
    fn into_payload(self) -> Result<Payload, ApiError> {
        let mut form = FormData::new()
            .text("name", self.name)
            .text("description", self.description)
            .text("price", self.price.to_string())
            .text("category", self.category.to_string());
        if let Some(image) = self.image {
            form = form.file("image", image);
        }
        Ok(Payload::Multipart(form))
    }
}
