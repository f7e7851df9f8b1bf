use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed icon set a menu category can reference by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    #[default]
    Utensils,
    Soup,
    Salad,
    Pizza,
    Burger,
    Fish,
    Drumstick,
    Cake,
    IceCream,
    Coffee,
    Wine,
    Beer,
}

impl Icon {
    pub const ALL: [Icon; 12] = [
        Icon::Utensils,
        Icon::Soup,
        Icon::Salad,
        Icon::Pizza,
        Icon::Burger,
        Icon::Fish,
        Icon::Drumstick,
        Icon::Cake,
        Icon::IceCream,
        Icon::Coffee,
        Icon::Wine,
        Icon::Beer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Utensils => "utensils",
            Icon::Soup => "soup",
            Icon::Salad => "salad",
            Icon::Pizza => "pizza",
            Icon::Burger => "burger",
            Icon::Fish => "fish",
            Icon::Drumstick => "drumstick",
            Icon::Cake => "cake",
            Icon::IceCream => "ice-cream",
            Icon::Coffee => "coffee",
            Icon::Wine => "wine",
            Icon::Beer => "beer",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Icon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Icon::ALL
            .into_iter()
            .find(|icon| icon.as_str() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Icon::ALL.iter().map(Icon::as_str).collect();
                format!(
                    "Invalid icon '{}'. Valid options: {}",
                    s,
                    names.join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_from_str() {
        assert_eq!(Icon::from_str("soup").unwrap(), Icon::Soup);
        assert_eq!(Icon::from_str("ICE-CREAM").unwrap(), Icon::IceCream);
        assert_eq!(Icon::from_str(" wine ").unwrap(), Icon::Wine);
    }

    #[test]
    fn test_icon_from_str_invalid() {
        let err = Icon::from_str("rocket").unwrap_err();
        assert!(err.contains("Valid options"));
        assert!(err.contains("utensils"));
    }

    #[test]
    fn test_icon_serializes_as_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Icon::IceCream).unwrap(),
            "\"ice-cream\""
        );
        for icon in Icon::ALL {
            assert_eq!(Icon::from_str(&icon.to_string()).unwrap(), icon);
        }
    }
}
