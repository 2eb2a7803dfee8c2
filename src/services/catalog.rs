use crate::models::{ServiceCategory, ServiceEntry};

/// Supplies the selectable services and their display names.
pub trait ServiceCatalog: Send + Sync {
    fn lookup(&self, id: &str) -> Option<&ServiceEntry>;

    fn categories(&self) -> &[ServiceCategory];
}

pub struct StaticCatalog {
    categories: Vec<ServiceCategory>,
}

impl StaticCatalog {
    pub fn new(categories: Vec<ServiceCategory>) -> Self {
        Self { categories }
    }

    /// The shop's published menu.
    pub fn barbershop_menu() -> Self {
        let category = |title: &str, services: Vec<ServiceEntry>| ServiceCategory {
            title: title.to_string(),
            services,
        };

        Self::new(vec![
            category(
                "Haircuts",
                vec![
                    ServiceEntry::new("classic-haircut", "Classic Haircut", "$30", "Traditional barbershop cut with clippers and scissors."),
                    ServiceEntry::new("skin-fade", "Skin Fade", "$35", "Sharp, clean fade that blends seamlessly to the skin."),
                    ServiceEntry::new("taper-fade", "Taper Fade", "$32", "Gradual fade that maintains length on top."),
                    ServiceEntry::new("pompadour", "Pompadour", "$40", "Classic voluminous style with precise styling."),
                    ServiceEntry::new("buzz-cut", "Buzz Cut", "$22", "Quick, clean clipper cut for a fresh look."),
                    ServiceEntry::new("long-hair-trim", "Long Hair Trim", "$35", "Professional trim for longer hairstyles."),
                ],
            ),
            category(
                "Beards",
                vec![
                    ServiceEntry::new("beard-trim", "Beard Trim", "$15", "Expert shaping and maintenance of your beard."),
                    ServiceEntry::new("hot-towel-shave", "Hot Towel Shave", "$30", "Traditional straight razor shave with hot towel treatment."),
                    ServiceEntry::new("line-up", "Line Up", "$12", "Precise edge work and line definition."),
                    ServiceEntry::new("full-beard-service", "Full Beard Service", "$25", "Complete beard grooming including trim, shape, and styling."),
                    ServiceEntry::new("mustache-trim", "Mustache Trim", "$10", "Precise mustache shaping and styling."),
                ],
            ),
            category(
                "Speciality",
                vec![
                    ServiceEntry::new("hair-design", "Hair Design", "$45", "Custom designs and patterns cut into your hair."),
                    ServiceEntry::new("color-service", "Color Service", "$60", "Professional hair coloring and highlights."),
                    ServiceEntry::new("hair-beard-combo", "Hair & Beard Combo", "$40", "Complete grooming package for hair and beard."),
                    ServiceEntry::new("executive-cut", "Executive Cut", "$50", "Premium service with hot towel and styling."),
                    ServiceEntry::new("wedding-package", "Wedding Package", "$75", "Special occasion grooming with premium styling."),
                ],
            ),
            category(
                "Kids",
                vec![
                    ServiceEntry::new("kids-cut", "Kids Cut (12 & under)", "$25", "Gentle, professional cut designed for children."),
                    ServiceEntry::new("first-haircut", "First Haircut", "$30", "Special first haircut experience with certificate."),
                    ServiceEntry::new("kids-fade", "Kids Fade", "$28", "Clean fade style for kids."),
                    ServiceEntry::new("kids-design", "Kids Design", "$35", "Fun designs and patterns for kids."),
                ],
            ),
        ])
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::barbershop_menu()
    }
}

impl ServiceCatalog for StaticCatalog {
    fn lookup(&self, id: &str) -> Option<&ServiceEntry> {
        self.categories
            .iter()
            .flat_map(|c| c.services.iter())
            .find(|s| s.id == id)
    }

    fn categories(&self) -> &[ServiceCategory] {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_known_service() {
        let catalog = StaticCatalog::barbershop_menu();
        let entry = catalog.lookup("hair-beard-combo").unwrap();
        assert_eq!(entry.display_name, "Hair & Beard Combo");
        assert_eq!(entry.price_range, "$40");
    }

    #[test]
    fn test_lookup_unknown_service() {
        let catalog = StaticCatalog::barbershop_menu();
        assert!(catalog.lookup("perm").is_none());
        assert!(catalog.lookup("").is_none());
    }

    #[test]
    fn test_menu_ids_are_unique() {
        let catalog = StaticCatalog::barbershop_menu();
        let ids: Vec<&str> = catalog
            .categories()
            .iter()
            .flat_map(|c| c.services.iter().map(|s| s.id.as_str()))
            .collect();
        assert_eq!(ids.len(), 20);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
    }
}
