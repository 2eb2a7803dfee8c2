use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ServiceEntry {
    pub id: String,
    pub display_name: String,
    pub price_range: String,
    pub description: String,
}

impl ServiceEntry {
    pub fn new(id: &str, display_name: &str, price_range: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            price_range: price_range.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ServiceCategory {
    pub title: String,
    pub services: Vec<ServiceEntry>,
}
