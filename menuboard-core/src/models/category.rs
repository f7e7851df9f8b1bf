use serde::{Deserialize, Serialize};

use super::{Icon, Id};
use crate::api::{ApiError, IntoPayload, Payload};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuCategory {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Kept as the raw name so unknown icons from the server still parse.
    #[serde(default)]
    pub icon_name: String,
    pub restaurant: Id,
}

impl MenuCategory {
    /// Resolves `icon_name` against the icon set, falling back to the default.
    pub fn icon(&self) -> Icon {
        self.icon_name.parse().unwrap_or_default()
    }
}

/// Body of `POST /api/menu-categories/`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewMenuCategory {
    pub name: String,
    pub description: Option<String>,
    pub icon_name: Icon,
    pub restaurant: Id,
}

impl NewMenuCategory {
    pub fn new(name: impl Into<String>, restaurant: Id) -> Self {
        Self {
            name: name.into(),
            description: None,
            icon_name: Icon::default(),
            restaurant,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon_name = icon;
        self
    }
}

impl IntoPayload for NewMenuCategory {
    fn into_payload(self) -> Result<Payload, ApiError> {
        Payload::json(&self)
    }
}

/// Body of `PUT /api/menu-categories/{id}/`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MenuCategoryUpdate {
    pub name: String,
    pub description: Option<String>,
    pub icon_name: Icon,
    pub restaurant: Id,
}

impl From<&MenuCategory> for MenuCategoryUpdate {
    fn from(category: &MenuCategory) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
            icon_name: category.icon(),
            restaurant: category.restaurant,
        }
    }
}

impl IntoPayload for MenuCategoryUpdate {
    fn into_payload(self) -> Result<Payload, ApiError> {
        Payload::json(&self)
    }
}
