use serde::{Deserialize, Serialize};

/// Static pet-shop catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Unit price in minor currency units.
    pub price: u64,
    /// Bundled asset path of the product picture.
    pub image: String,
}

impl Product {
    pub fn new(id: &str, name: &str, price: u64, image: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            image: image.to_string(),
        }
    }
}

/// The built-in shop catalog, in display order.
pub fn catalog() -> Vec<Product> {
    vec![
        Product::new("1", "Alimento Premium", 8500, "products/alimento.jpg"),
        Product::new("2", "Pelota de Goma", 2000, "products/pelota.jpg"),
        Product::new("3", "Cama Mediana", 15000, "products/cama.jpg"),
        Product::new("4", "Rascador Gato", 12800, "products/rascador.jpg"),
        Product::new("5", "Collar Reflectante", 3500, "products/collar.jpg"),
        Product::new("6", "Shampoo Natural", 4300, "products/shampoo.jpg"),
    ]
}

/// Look up a catalog product by id.
pub fn find_product(id: &str) -> Option<Product> {
    catalog().into_iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let products = catalog();
        let ids: HashSet<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), products.len());
        assert_eq!(products.len(), 6);
    }

    #[test]
    fn find_product_by_id() {
        let product = find_product("3").unwrap();
        assert_eq!(product.name, "Cama Mediana");
        assert_eq!(product.price, 15000);
        assert!(find_product("99").is_none());
    }
}
