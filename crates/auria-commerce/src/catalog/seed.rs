//! Built-in storefront catalog records.

use crate::catalog::{Catalog, Category, CategoryName, Material, Product, Stone, Style};
use crate::ids::{CategoryId, ImageId, ProductId};
use crate::money::Money;

fn images(ids: &[&str]) -> Vec<ImageId> {
    ids.iter().map(|id| ImageId::new(*id)).collect()
}

fn category(id: &str, name: CategoryName, slug_image: &str, description: &str) -> Category {
    Category {
        id: CategoryId::new(id),
        name,
        description: description.to_string(),
        image: ImageId::new(format!("category-{slug_image}")),
        header_image: ImageId::new(format!("collection-header-{slug_image}")),
    }
}

pub(crate) fn storefront_catalog() -> Catalog {
    let categories = vec![
        category(
            "cat-1",
            CategoryName::Rings,
            "rings",
            "Explore our collection of exquisite rings, from timeless solitaires to modern statement pieces. Each ring is crafted to perfection, making it the perfect symbol of love and commitment.",
        ),
        category(
            "cat-2",
            CategoryName::Necklaces,
            "necklaces",
            "Discover timeless elegance and modern designs. Our curated collection of necklaces features exquisite craftsmanship and the finest materials, perfect for any occasion.",
        ),
        category(
            "cat-3",
            CategoryName::Earrings,
            "earrings",
            "From elegant studs to glamorous drops, our earrings are designed to illuminate your features. Find the perfect pair to complete your look, crafted with exceptional care.",
        ),
        category(
            "cat-4",
            CategoryName::Bracelets,
            "bracelets",
            "Adorn your wrist with our stunning bracelets. Whether you prefer a delicate chain or a bold bangle, each piece is a work of art designed for everyday luxury.",
        ),
    ];

    let products = vec![
        Product {
            id: ProductId::new("prod-1"),
            name: "Solitaire Diamond Ring".into(),
            description: "An 18k white gold ring featuring a brilliant-cut 1-carat diamond. A timeless symbol of love and elegance.".into(),
            price: Money::usd(1999),
            category: CategoryName::Rings,
            material: Material::Silver,
            stone: Some(Stone::Diamond),
            style: Style::Solitaire,
            images: images(&["product-ring-1", "product-detail-1", "product-detail-2"]),
            is_new: true,
            is_featured: true,
            stock: 5,
        },
        Product {
            id: ProductId::new("prod-2"),
            name: "Golden Locket Necklace".into(),
            description: "A 24k gold-plated locket, perfect for holding cherished memories close to your heart. Intricate filigree work adds a vintage touch.".into(),
            price: Money::usd(450),
            category: CategoryName::Necklaces,
            material: Material::Gold,
            stone: None,
            style: Style::Pendant,
            images: images(&["product-necklace-1", "product-detail-1", "product-detail-3"]),
            is_new: true,
            is_featured: true,
            stock: 12,
        },
        Product {
            id: ProductId::new("prod-3"),
            name: "Emerald Stud Earrings".into(),
            description: "Vibrant green emeralds set in sterling silver. These stud earrings add a pop of color and sophistication to any outfit.".into(),
            price: Money::usd(875),
            category: CategoryName::Earrings,
            material: Material::Silver,
            stone: Some(Stone::Emerald),
            style: Style::Stud,
            images: images(&["product-earrings-1", "product-detail-2"]),
            is_new: true,
            is_featured: false,
            stock: 8,
        },
        Product {
            id: ProductId::new("prod-4"),
            name: "Rose Gold Bangle".into(),
            description: "A sleek and modern bangle crafted from solid 18k rose gold. Perfect for stacking or wearing as a standalone statement piece.".into(),
            price: Money::usd(1200),
            category: CategoryName::Bracelets,
            material: Material::RoseGold,
            stone: None,
            style: Style::Bangle,
            images: images(&["product-bracelet-1", "product-detail-3"]),
            is_new: true,
            is_featured: false,
            stock: 10,
        },
        Product {
            id: ProductId::new("prod-5"),
            name: "Vintage Sapphire Ring".into(),
            description: "A stunning vintage-inspired ring with a deep blue sapphire center stone, surrounded by a halo of smaller diamonds.".into(),
            price: Money::usd(2500),
            category: CategoryName::Rings,
            material: Material::Gold,
            stone: Some(Stone::Sapphire),
            style: Style::Vintage,
            images: images(&["product-ring-2"]),
            is_new: false,
            is_featured: true,
            stock: 3,
        },
        Product {
            id: ProductId::new("prod-6"),
            name: "Sterling Silver Choker".into(),
            description: "A delicate and modern sterling silver choker chain that sits beautifully on the collarbone. Minimalist and chic.".into(),
            price: Money::usd(275),
            category: CategoryName::Necklaces,
            material: Material::Silver,
            stone: None,
            style: Style::Choker,
            images: images(&["product-necklace-2"]),
            is_new: false,
            is_featured: false,
            stock: 15,
        },
        Product {
            id: ProductId::new("prod-7"),
            name: "Diamond Hoop Earrings".into(),
            description: "Classic diamond hoop earrings in 14k gold. A versatile accessory that transitions effortlessly from day to night.".into(),
            price: Money::usd(1500),
            category: CategoryName::Earrings,
            material: Material::Gold,
            stone: Some(Stone::Diamond),
            style: Style::Hoop,
            images: images(&["product-earrings-2"]),
            is_new: false,
            is_featured: true,
            stock: 7,
        },
        Product {
            id: ProductId::new("prod-8"),
            name: "Pearl Charm Bracelet".into(),
            description: "An elegant bracelet featuring freshwater pearls and delicate gold charms. A piece that exudes grace and femininity.".into(),
            price: Money::usd(350),
            category: CategoryName::Bracelets,
            material: Material::Gold,
            stone: Some(Stone::Pearl),
            style: Style::Charm,
            images: images(&["product-bracelet-2"]),
            is_new: false,
            is_featured: false,
            stock: 20,
        },
    ];

    Catalog::from_parts(products, categories)
}
