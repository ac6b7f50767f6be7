use std::cell::Cell;
use std::rc::Rc;

use log::{error, warn};

use crate::components::team_card::CardVariant;
use crate::team::model::{Category, TeamRecord};
use crate::team::source::FetchError;

pub const JUNIOR_MANAGEMENT_CAPTION: &str =
    "Our junior managers keep client projects on schedule and are often your first point of contact.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedDirectory {
    pub leadership: Vec<TeamRecord>,
    pub junior_management: Vec<TeamRecord>,
    pub staff: Vec<TeamRecord>,
}

impl GroupedDirectory {
    /// Groups records by category in one pass, keeping their incoming
    /// order. Records with an unknown category are dropped.
    pub fn partition(records: &[TeamRecord]) -> Self {
        let mut grouped = GroupedDirectory::default();
        for record in records {
            match record.group() {
                Some(Category::Leadership) => grouped.leadership.push(record.clone()),
                Some(Category::JuniorManagement) => grouped.junior_management.push(record.clone()),
                Some(Category::Staff) => grouped.staff.push(record.clone()),
                None => warn!(
                    "Team record {} has unknown category {:?}, not displayed",
                    record.id, record.category
                ),
            }
        }
        grouped
    }

    pub fn group(&self, category: Category) -> &[TeamRecord] {
        match category {
            Category::Leadership => &self.leadership,
            Category::JuniorManagement => &self.junior_management,
            Category::Staff => &self.staff,
        }
    }

    pub fn len(&self) -> usize {
        self.leadership.len() + self.junior_management.len() + self.staff.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryState {
    Idle,
    Loading,
    Loaded(GroupedDirectory),
    Failed,
}

impl DirectoryState {
    pub fn settle(result: Result<Vec<TeamRecord>, FetchError>) -> DirectoryState {
        match result {
            Ok(records) => DirectoryState::Loaded(GroupedDirectory::partition(&records)),
            Err(e) => {
                error!("Failed to load team directory: {}", e);
                DirectoryState::Failed
            }
        }
    }

    pub fn view(&self) -> DirectoryView<'_> {
        match self {
            DirectoryState::Idle | DirectoryState::Loading => DirectoryView::Loading,
            DirectoryState::Failed => DirectoryView::Failed,
            DirectoryState::Loaded(directory) if directory.is_empty() => DirectoryView::Empty,
            DirectoryState::Loaded(directory) => DirectoryView::Sections(
                Category::ALL
                    .iter()
                    .filter_map(|&category| GroupSection::new(category, directory.group(category)))
                    .collect(),
            ),
        }
    }
}

/// What the directory should put on screen for a given state.
#[derive(Debug, PartialEq)]
pub enum DirectoryView<'a> {
    Loading,
    Failed,
    Empty,
    Sections(Vec<GroupSection<'a>>),
}

#[derive(Debug, PartialEq)]
pub struct GroupSection<'a> {
    pub category: Category,
    pub variant: CardVariant,
    pub heading: &'static str,
    pub caption: Option<&'static str>,
    pub members: &'a [TeamRecord],
}

impl<'a> GroupSection<'a> {
    /// `None` for an empty group, which is left out of the page.
    fn new(category: Category, members: &'a [TeamRecord]) -> Option<Self> {
        if members.is_empty() {
            return None;
        }
        let (heading, caption) = match category {
            Category::Leadership => ("Leadership", None),
            Category::JuniorManagement => ("Junior Management", Some(JUNIOR_MANAGEMENT_CAPTION)),
            Category::Staff => ("Our Team", None),
        };
        Some(GroupSection {
            category,
            variant: CardVariant::for_category(category),
            heading,
            caption,
            members,
        })
    }
}

/// Tracks the most recently issued directory query for one mounted
/// directory. Responses carrying an older ticket are discarded.
#[derive(Debug, Clone, Default)]
pub struct LatestRequest {
    current: Rc<Cell<u64>>,
}

#[derive(Debug, Clone)]
pub struct RequestTicket {
    id: u64,
    current: Rc<Cell<u64>>,
}

impl LatestRequest {
    pub fn issue(&self) -> RequestTicket {
        let id = self.current.get() + 1;
        self.current.set(id);
        RequestTicket {
            id,
            current: self.current.clone(),
        }
    }

    /// Retires every outstanding ticket, e.g. when the directory unmounts.
    pub fn invalidate(&self) {
        self.current.set(self.current.get() + 1);
    }
}

impl RequestTicket {
    pub fn is_current(&self) -> bool {
        self.current.get() == self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::model::fixtures::record;
    use crate::team::source::fake::InMemorySource;
    use crate::team::source::DirectorySource;

    fn ids(records: &[TeamRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn partition_keeps_incoming_order_per_group() {
        let records = vec![
            record("a", "staff", 1, 1),
            record("b", "leadership", 1, 1),
            record("c", "staff", 2, 1),
            record("d", "junior_management", 1, 1),
            record("e", "leadership", 2, 1),
        ];
        let grouped = GroupedDirectory::partition(&records);
        assert_eq!(ids(&grouped.leadership), vec!["b", "e"]);
        assert_eq!(ids(&grouped.junior_management), vec!["d"]);
        assert_eq!(ids(&grouped.staff), vec!["a", "c"]);
    }

    #[test]
    fn partition_does_not_reorder_by_rank() {
        // Input order wins even if display_order disagrees.
        let records = vec![record("late", "staff", 9, 1), record("early", "staff", 1, 1)];
        let grouped = GroupedDirectory::partition(&records);
        assert_eq!(ids(&grouped.staff), vec!["late", "early"]);
    }

    #[test]
    fn unknown_categories_reach_no_group() {
        let records = vec![
            record("1", "leadership", 1, 1),
            record("2", "advisors", 1, 1),
            record("3", "", 1, 1),
            record("4", "staff", 1, 1),
        ];
        let grouped = GroupedDirectory::partition(&records);
        assert_eq!(grouped.len(), 2);

        let mut union: Vec<&str> = Category::ALL
            .iter()
            .flat_map(|&c| grouped.group(c).iter().map(|r| r.id.as_str()))
            .collect();
        union.sort();
        assert_eq!(union, vec!["1", "4"]);
    }

    #[test]
    fn partition_is_idempotent() {
        let records = vec![
            record("1", "leadership", 1, 1),
            record("2", "staff", 1, 1),
            record("3", "junior_management", 1, 1),
        ];
        assert_eq!(
            GroupedDirectory::partition(&records),
            GroupedDirectory::partition(&records)
        );
    }

    #[tokio::test]
    async fn leadership_and_staff_scenario() {
        let source = InMemorySource::new(vec![
            record("1", "leadership", 2, 1),
            record("2", "leadership", 1, 1),
            record("3", "staff", 1, 1),
        ]);
        let state = DirectoryState::settle(source.fetch_active_ordered().await);

        let DirectoryState::Loaded(grouped) = &state else {
            panic!("expected loaded state, got {:?}", state);
        };
        assert_eq!(ids(&grouped.leadership), vec!["2", "1"]);
        assert!(grouped.junior_management.is_empty());
        assert_eq!(ids(&grouped.staff), vec!["3"]);

        let DirectoryView::Sections(sections) = state.view() else {
            panic!("expected sections");
        };
        let rendered: Vec<Category> = sections.iter().map(|s| s.category).collect();
        assert_eq!(rendered, vec![Category::Leadership, Category::Staff]);
        assert_eq!(sections[0].variant, CardVariant::Primary);
        assert_eq!(sections[1].variant, CardVariant::Minimal);
        assert!(sections.iter().all(|s| s.caption.is_none()));
    }

    #[tokio::test]
    async fn integer_id_rows_decode_and_group() {
        let json = r#"[
            {"id": 1, "category": "leadership", "display_order": 2, "created_at": "2024-01-01T09:00:00Z", "is_active": true, "name": "Ana", "role": "Founder"},
            {"id": 2, "category": "leadership", "display_order": 1, "created_at": "2024-01-01T09:00:00Z", "is_active": true, "name": "Ben", "role": "Director"},
            {"id": 3, "category": "staff", "display_order": 1, "created_at": "2024-01-01T09:00:00Z", "is_active": true, "name": null, "role": null}
        ]"#;
        let rows: Vec<TeamRecord> = serde_json::from_str(json).unwrap();
        let source = InMemorySource::new(rows);
        let state = DirectoryState::settle(source.fetch_active_ordered().await);

        let DirectoryState::Loaded(grouped) = &state else {
            panic!("expected loaded state, got {:?}", state);
        };
        assert_eq!(ids(&grouped.leadership), vec!["2", "1"]);
        assert!(grouped.junior_management.is_empty());
        assert_eq!(ids(&grouped.staff), vec!["3"]);
        assert_eq!(grouped.staff[0].name, "");
    }

    #[tokio::test]
    async fn empty_fetch_renders_empty_message_not_sections() {
        let source = InMemorySource::new(Vec::new());
        let state = DirectoryState::settle(source.fetch_active_ordered().await);
        assert_eq!(state, DirectoryState::Loaded(GroupedDirectory::default()));
        assert_eq!(state.view(), DirectoryView::Empty);
    }

    #[tokio::test]
    async fn only_unknown_categories_is_also_empty() {
        let source = InMemorySource::new(vec![record("1", "board", 1, 1)]);
        let state = DirectoryState::settle(source.fetch_active_ordered().await);
        assert_eq!(state.view(), DirectoryView::Empty);
    }

    #[tokio::test]
    async fn rejected_fetch_renders_failure_only() {
        for error in [
            FetchError::Network("offline".to_string()),
            FetchError::Status(401),
            FetchError::Malformed("expected a sequence".to_string()),
        ] {
            let source = InMemorySource::failing(error);
            let state = DirectoryState::settle(source.fetch_active_ordered().await);
            assert_eq!(state, DirectoryState::Failed);
            assert_eq!(state.view(), DirectoryView::Failed);
        }
    }

    #[test]
    fn junior_management_caption_only_when_group_present() {
        let state = DirectoryState::Loaded(GroupedDirectory::partition(&[
            record("1", "junior_management", 1, 1),
            record("2", "staff", 1, 1),
        ]));
        let DirectoryView::Sections(sections) = state.view() else {
            panic!("expected sections");
        };
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].category, Category::JuniorManagement);
        assert_eq!(sections[0].variant, CardVariant::Compact);
        assert_eq!(sections[0].caption, Some(JUNIOR_MANAGEMENT_CAPTION));
        assert_eq!(sections[1].caption, None);
    }

    #[test]
    fn idle_and_loading_show_progress() {
        assert_eq!(DirectoryState::Idle.view(), DirectoryView::Loading);
        assert_eq!(DirectoryState::Loading.view(), DirectoryView::Loading);
    }

    #[test]
    fn last_issued_ticket_wins() {
        let latest = LatestRequest::default();
        let first = latest.issue();
        let second = latest.issue();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn invalidate_retires_outstanding_ticket() {
        let latest = LatestRequest::default();
        let ticket = latest.issue();
        assert!(ticket.is_current());
        latest.invalidate();
        assert!(!ticket.is_current());
    }

    #[test]
    fn separate_mounts_do_not_share_tickets() {
        let first_mount = LatestRequest::default();
        let second_mount = LatestRequest::default();
        let ticket = first_mount.issue();
        second_mount.issue();
        second_mount.invalidate();
        assert!(ticket.is_current());
    }
}
