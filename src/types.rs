use std::fmt::{self, Display};

use serde::Serialize;

pub type RecordId = u64;

/**
 * The three resource endpoints the backend exposes for creating records
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Cities,
    Articles,
    Packages,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Cities, Resource::Articles, Resource::Packages];

    pub fn path(&self) -> &'static str {
        match self {
            Resource::Cities => "/cities/",
            Resource::Articles => "/articles/",
            Resource::Packages => "/packages/",
        }
    }

    //  singular noun used in the console lines
    pub fn noun(&self) -> &'static str {
        match self {
            Resource::Cities => "city",
            Resource::Articles => "article",
            Resource::Packages => "package",
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Cities => write!(f, "cities"),
            Resource::Articles => write!(f, "articles"),
            Resource::Packages => write!(f, "packages"),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct City {
    pub name: String,
    pub state: String,
    pub country: String,
    pub description: String,
    pub is_featured: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub is_published: bool,
    pub is_featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<RecordId>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Package {
    pub name: String,
    pub description: String,
    pub duration_days: u32,
    pub base_price: u32,
    pub is_featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<RecordId>,
}

/**
 * Anything the loader can submit to the backend.
 * 1. resource -> which endpoint the record is posted to
 * 2. label -> what the record is called in the console output
 * 3. attach_city -> link the record to a created city, if it supports one
 */
pub trait SeedRecord: Serialize {
    fn resource(&self) -> Resource;
    fn label(&self) -> &str;
    fn attach_city(&mut self, _city: RecordId) {}
}

impl SeedRecord for City {
    fn resource(&self) -> Resource {
        Resource::Cities
    }
    fn label(&self) -> &str {
        &self.name
    }
}

impl SeedRecord for Article {
    fn resource(&self) -> Resource {
        Resource::Articles
    }
    fn label(&self) -> &str {
        &self.title
    }
    fn attach_city(&mut self, city: RecordId) {
        self.city = Some(city);
    }
}

impl SeedRecord for Package {
    fn resource(&self) -> Resource {
        Resource::Packages
    }
    fn label(&self) -> &str {
        &self.name
    }
    fn attach_city(&mut self, city: RecordId) {
        self.city = Some(city);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_city_reference_is_omitted_until_attached() {
        let mut package = Package {
            name: "Sacred Ayodhya Pilgrimage".to_string(),
            description: "3 days".to_string(),
            duration_days: 3,
            base_price: 15000,
            is_featured: true,
            city: None,
        };
        let value = serde_json::to_value(&package).unwrap();
        assert!(value.get("city").is_none());

        package.attach_city(42);
        let value = serde_json::to_value(&package).unwrap();
        assert_eq!(value["city"], json!(42));
        assert_eq!(value["base_price"], json!(15000));
    }

    #[test]
    fn test_city_ignores_attached_reference() {
        let mut city = City {
            name: "Ayodhya".to_string(),
            state: "Uttar Pradesh".to_string(),
            country: "India".to_string(),
            description: String::new(),
            is_featured: true,
        };
        city.attach_city(7);
        let value = serde_json::to_value(&city).unwrap();
        assert!(value.get("city").is_none());
        assert_eq!(city.label(), "Ayodhya");
    }

    #[test]
    fn test_resource_paths() {
        assert_eq!(Resource::Cities.path(), "/cities/");
        assert_eq!(Resource::Articles.path(), "/articles/");
        assert_eq!(Resource::Packages.path(), "/packages/");
        assert_eq!(Resource::Packages.to_string(), "packages");
    }
}
