use yew::prelude::*;

use crate::config;
use crate::team::model::{Category, TeamRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVariant {
    /// Leadership: large image and the optional description.
    Primary,
    /// Junior management: medium image, no description.
    Compact,
    /// Staff: small image, name and role.
    Minimal,
}

impl CardVariant {
    pub fn for_category(category: Category) -> CardVariant {
        match category {
            Category::Leadership => CardVariant::Primary,
            Category::JuniorManagement => CardVariant::Compact,
            Category::Staff => CardVariant::Minimal,
        }
    }

    pub fn card_class(&self) -> &'static str {
        match self {
            CardVariant::Primary => "team-card team-card-primary",
            CardVariant::Compact => "team-card team-card-compact",
            CardVariant::Minimal => "team-card team-card-minimal",
        }
    }

    pub fn image_class(&self) -> &'static str {
        match self {
            CardVariant::Primary => "team-card-image image-large",
            CardVariant::Compact => "team-card-image image-medium",
            CardVariant::Minimal => "team-card-image image-small",
        }
    }

    pub fn shows_description(&self) -> bool {
        matches!(self, CardVariant::Primary)
    }
}

/// Image to show for a record. A missing or blank URL and a URL that
/// failed to load both end up on the placeholder.
pub fn resolve_image_src(image_url: Option<&str>, load_failed: bool) -> &str {
    match image_url.map(str::trim) {
        Some(url) if !url.is_empty() && !load_failed => url,
        _ => config::PLACEHOLDER_IMAGE,
    }
}

/// Whether the image currently on the record is the one that failed to
/// load. A new URL gets a fresh attempt.
pub fn load_failed_for(image_url: Option<&str>, failed_url: Option<&str>) -> bool {
    image_url.is_some() && image_url == failed_url
}

#[derive(Properties, PartialEq)]
pub struct TeamCardProps {
    pub record: TeamRecord,
    pub variant: CardVariant,
}

#[function_component(TeamCard)]
pub fn team_card(props: &TeamCardProps) -> Html {
    let TeamCardProps { record, variant } = props;
    let failed_url = use_state_eq(|| None::<String>);

    let load_failed = load_failed_for(record.image_url.as_deref(), failed_url.as_deref());
    let src = resolve_image_src(record.image_url.as_deref(), load_failed);
    let on_image_error = {
        let failed_url = failed_url.clone();
        let image_url = record.image_url.clone();
        Callback::from(move |_: Event| {
            if image_url.is_some() {
                failed_url.set(image_url.clone());
            }
        })
    };

    let description = match record.description.as_deref() {
        Some(text) if variant.shows_description() && !text.trim().is_empty() => html! {
            <p class="team-card-description">{text}</p>
        },
        _ => html! {},
    };

    let profile_link = match record.profile_url() {
        Some(url) => html! {
            <a
                class="team-card-profile"
                href={url.to_string()}
                target="_blank"
                rel="noopener noreferrer"
            >
                {"View Upwork profile"}
            </a>
        },
        None => html! {},
    };

    html! {
        <div class={variant.card_class()}>
            <img
                class={variant.image_class()}
                src={src.to_string()}
                alt={record.name.clone()}
                loading="lazy"
                onerror={on_image_error}
            />
            <div class="team-card-body">
                <h3 class="team-card-name">{&record.name}</h3>
                <p class="team-card-role">{&record.role}</p>
                {description}
                {profile_link}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_failed_images_resolve_identically() {
        let missing = resolve_image_src(None, false);
        let failed = resolve_image_src(Some("https://cdn.example.com/broken.jpg"), true);
        assert_eq!(missing, config::PLACEHOLDER_IMAGE);
        assert_eq!(missing, failed);
    }

    #[test]
    fn failure_is_tied_to_the_url_that_failed() {
        let broken = "https://cdn.example.com/old.jpg";
        let fresh = "https://cdn.example.com/new.jpg";

        assert!(load_failed_for(Some(broken), Some(broken)));
        assert_eq!(
            resolve_image_src(Some(broken), load_failed_for(Some(broken), Some(broken))),
            config::PLACEHOLDER_IMAGE
        );

        // Record later points at a working image under the same key.
        assert!(!load_failed_for(Some(fresh), Some(broken)));
        assert_eq!(
            resolve_image_src(Some(fresh), load_failed_for(Some(fresh), Some(broken))),
            fresh
        );

        assert!(!load_failed_for(None, None));
        assert!(!load_failed_for(Some(fresh), None));
    }

    #[test]
    fn blank_image_url_is_treated_as_missing() {
        assert_eq!(resolve_image_src(Some(""), false), config::PLACEHOLDER_IMAGE);
        assert_eq!(resolve_image_src(Some("  "), false), config::PLACEHOLDER_IMAGE);
    }

    #[test]
    fn working_image_url_is_used() {
        assert_eq!(
            resolve_image_src(Some("https://cdn.example.com/ana.jpg"), false),
            "https://cdn.example.com/ana.jpg"
        );
    }

    #[test]
    fn variants_follow_category() {
        assert_eq!(CardVariant::for_category(Category::Leadership), CardVariant::Primary);
        assert_eq!(
            CardVariant::for_category(Category::JuniorManagement),
            CardVariant::Compact
        );
        assert_eq!(CardVariant::for_category(Category::Staff), CardVariant::Minimal);
    }

    #[test]
    fn only_primary_cards_show_description() {
        assert!(CardVariant::Primary.shows_description());
        assert!(!CardVariant::Compact.shows_description());
        assert!(!CardVariant::Minimal.shows_description());
    }

    #[test]
    fn image_sizes_shrink_with_variant() {
        assert!(CardVariant::Primary.image_class().ends_with("image-large"));
        assert!(CardVariant::Compact.image_class().ends_with("image-medium"));
        assert!(CardVariant::Minimal.image_class().ends_with("image-small"));
    }
}
