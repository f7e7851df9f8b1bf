mod category;
mod icon;
mod menu_item;
mod restaurant;
mod upload;

pub use category::{MenuCategory, MenuCategoryUpdate, NewMenuCategory};
pub use icon::Icon;
pub use menu_item::{MenuItem, MenuItemUpdate, NewMenuItem};
pub use restaurant::{NewRestaurant, Restaurant, RestaurantUpdate};
pub use upload::Upload;

use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

/// Server-assigned identifier shared by every resource.
pub type Id = i64;

/// A record owned by the remote API and cached locally by id.
pub trait Entity: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    fn id(&self) -> Id;
}

impl Entity for Restaurant {
    fn id(&self) -> Id {
        self.id
    }
}

impl Entity for MenuCategory {
    fn id(&self) -> Id {
        self.id
    }
}

impl Entity for MenuItem {
    fn id(&self) -> Id {
        self.id
    }
}
