use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// The three buckets the directory renders. Anything else the store holds
/// in `category` is not shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Leadership,
    JuniorManagement,
    Staff,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Leadership,
        Category::JuniorManagement,
        Category::Staff,
    ];

    pub fn parse(value: &str) -> Option<Category> {
        match value {
            "leadership" => Some(Category::Leadership),
            "junior_management" => Some(Category::JuniorManagement),
            "staff" => Some(Category::Staff),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Leadership => "leadership",
            Category::JuniorManagement => "junior_management",
            Category::Staff => "staff",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TeamRecord {
    #[serde(deserialize_with = "id_from_text_or_number")]
    pub id: String,
    pub category: String,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    // Not validated; a record without these still renders.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub role: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub upwork_profile_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

// The store may key rows by uuid or by integer.
fn id_from_text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl TeamRecord {
    pub fn group(&self) -> Option<Category> {
        Category::parse(&self.category)
    }

    /// Profile link, if one is set to something other than whitespace.
    pub fn profile_url(&self) -> Option<&str> {
        self.upwork_profile_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}
