#[cfg(debug_assertions)]
pub fn get_store_url() -> &'static str {
    match option_env!("TEAM_STORE_URL") {
        Some(url) => url,
        None => "http://localhost:54321", // Local store when developing
    }
}

#[cfg(not(debug_assertions))]
pub fn get_store_url() -> &'static str {
    match option_env!("TEAM_STORE_URL") {
        Some(url) => url,
        None => "", // Same origin in production
    }
}

pub fn get_store_key() -> Option<&'static str> {
    option_env!("TEAM_STORE_KEY").filter(|key| !key.is_empty())
}

pub const TEAM_COLLECTION: &str = "team_members";

pub const PLACEHOLDER_IMAGE: &str = "/assets/team-placeholder.svg";
