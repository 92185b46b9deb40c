//! Categorical product attributes.
//!
//! Each attribute is a closed enumeration with a display label. Labels are
//! the values used on the wire and in listing URLs (`material=Rose%20Gold`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate label-backed attribute enums.
macro_rules! define_attribute {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Display label.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Parse an exact display label.
            pub fn from_label(label: &str) -> Option<Self> {
                match label {
                    $($label => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

define_attribute!(
    /// Top-level collection a product belongs to.
    CategoryName {
        Rings => "Rings",
        Necklaces => "Necklaces",
        Bracelets => "Bracelets",
        Earrings => "Earrings",
    }
);

define_attribute!(
    /// Metal a piece is made from.
    Material {
        Gold => "Gold",
        Silver => "Silver",
        RoseGold => "Rose Gold",
    }
);

define_attribute!(
    /// Principal gemstone, if any.
    Stone {
        Diamond => "Diamond",
        Ruby => "Ruby",
        Emerald => "Emerald",
        Pearl => "Pearl",
        Sapphire => "Sapphire",
    }
);

define_attribute!(
    /// Design style.
    Style {
        Solitaire => "Solitaire",
        Pendant => "Pendant",
        Stud => "Stud",
        Bangle => "Bangle",
        Chain => "Chain",
        Choker => "Choker",
        Vintage => "Vintage",
        Hoop => "Hoop",
        Charm => "Charm",
    }
);

impl CategoryName {
    /// URL slug of the category listing (lowercased name).
    pub fn slug(&self) -> String {
        self.label().to_lowercase()
    }

    /// Resolve a listing slug, case-insensitively.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(slug.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for material in Material::ALL {
            assert_eq!(Material::from_label(material.label()), Some(*material));
        }
        assert_eq!(Material::RoseGold.label(), "Rose Gold");
        assert_eq!(Material::from_label("rose gold"), None);
    }

    #[test]
    fn test_category_slug() {
        assert_eq!(CategoryName::Rings.slug(), "rings");
        assert_eq!(CategoryName::from_slug("RINGS"), Some(CategoryName::Rings));
        assert_eq!(CategoryName::from_slug("brooches"), None);
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Material::RoseGold).unwrap();
        assert_eq!(json, "\"Rose Gold\"");
        let stone: Stone = serde_json::from_str("\"Sapphire\"").unwrap();
        assert_eq!(stone, Stone::Sapphire);
    }
}
