//! Sample products for `--demo`.

use crate::catalog::{Category, ProductDraft};

pub fn demo_products() -> Vec<ProductDraft> {
    vec![
        ProductDraft {
            name: "Wireless Mouse".to_string(),
            price: 149_000.0,
            description: "2.4 GHz mouse with silent clicks".to_string(),
            category: Category::Electronics,
            stock: 12,
            image_url: None,
        },
        ProductDraft {
            name: "Batik Shirt".to_string(),
            price: 275_000.0,
            description: "Hand-stamped cotton, long sleeves".to_string(),
            category: Category::Fashion,
            stock: 4,
            image_url: Some("https://example.com/batik.jpg".to_string()),
        },
        ProductDraft {
            name: "Kopi Arabika 250g".to_string(),
            price: 85_000.0,
            description: "Single-origin beans, medium roast".to_string(),
            category: Category::Food,
            stock: 0,
            image_url: None,
        },
        ProductDraft {
            name: "Pen".to_string(),
            price: 1_000.0,
            description: "Black ballpoint".to_string(),
            category: Category::Other,
            stock: 5,
            image_url: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{validate, ProductInput};

    #[test]
    fn demo_products_pass_form_validation() {
        for draft in demo_products() {
            let input = ProductInput {
                name: draft.name.clone(),
                price: draft.price.to_string(),
                category: Some(draft.category.clone()),
                stock: draft.stock.to_string(),
                description: draft.description.clone(),
                image_url: draft.image_url.clone().unwrap_or_default(),
            };
            assert_eq!(validate(&input), Ok(draft));
        }
    }
}
