//! Lab and product suggestions for the details step of the wizard.

use store::{LabCatalog, LabEntry};

/// Labs whose name, or one of whose products, contains `query`
/// (case-insensitive). An empty query returns the whole catalog.
pub fn matching_labs<'a>(catalog: &'a LabCatalog, query: &str) -> Vec<&'a LabEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return catalog.entries().iter().collect();
    }
    catalog
        .entries()
        .iter()
        .filter(|lab| {
            lab.name.to_lowercase().contains(&needle)
                || lab
                    .products
                    .iter()
                    .any(|p| p.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Products of the selected lab matching `query`, ranked exact match first,
/// then prefix matches, then other substring matches. Catalog order is kept
/// within each tier.
pub fn ranked_products<'a>(products: &'a [String], query: &str) -> Vec<&'a str> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.iter().map(String::as_str).collect();
    }
    let mut tiers: [Vec<&str>; 3] = Default::default();
    for product in products {
        let lower = product.to_lowercase();
        let tier = if lower == needle {
            0
        } else if lower.starts_with(&needle) {
            1
        } else if lower.contains(&needle) {
            2
        } else {
            continue;
        };
        tiers[tier].push(product.as_str());
    }
    tiers.concat()
}

/// Product candidates for whatever is currently in the lab field.
pub fn product_candidates<'a>(catalog: &'a LabCatalog, lab: &str, query: &str) -> Vec<&'a str> {
    ranked_products(catalog.products_of(lab.trim()), query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> LabCatalog {
        LabCatalog::from_json(
            r#"[
                {"lab": "Acme Labs", "products": ["Zenor", "Azenor", "Zen", "Zenor Plus"]},
                {"lab": "Bayer", "products": ["Aspirine", "Xarelto"]},
                {"lab": "Sanofi", "products": ["Doliprane"]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_lab_filter_matches_name_or_product() {
        let c = catalog();
        let names = |q: &str| -> Vec<String> {
            matching_labs(&c, q).iter().map(|l| l.name.clone()).collect()
        };
        assert_eq!(names(""), vec!["Acme Labs", "Bayer", "Sanofi"]);
        assert_eq!(names("acme"), vec!["Acme Labs"]);
        assert_eq!(names("XARELTO"), vec!["Bayer"]);
        assert_eq!(names("a"), vec!["Acme Labs", "Bayer", "Sanofi"]);
        assert!(names("nothing").is_empty());
    }

    #[test]
    fn test_product_ranking() {
        let c = catalog();
        let products = c.products_of("Acme Labs");
        assert_eq!(
            ranked_products(products, "zen"),
            vec!["Zen", "Zenor", "Zenor Plus", "Azenor"]
        );
        assert_eq!(ranked_products(products, "plus"), vec!["Zenor Plus"]);
        assert_eq!(ranked_products(products, "").len(), 4);
    }

    #[test]
    fn test_selected_lab_narrows_products() {
        let c = catalog();
        assert_eq!(product_candidates(&c, "Bayer", ""), vec!["Aspirine", "Xarelto"]);
        assert!(product_candidates(&c, "Unknown", "").is_empty());
    }
}
