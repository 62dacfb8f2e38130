//! Library search, sort and bookmark helpers.
//!
//! # Design
//! - Filtering is a linear scan over the in-memory library; results keep library order
//!   until a sort is applied, and sorts are stable.
//! - Matching is case-insensitive on title, authors, venue and tags.

use uuid::Uuid;

use crate::models::Paper;

/// Sort orders offered by the library toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Most recently added first.
    #[default]
    Recent,
    /// Most cited first.
    Citations,
    /// Alphabetical by title.
    Title,
}

impl SortKey {
    /// All sort keys in toolbar order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Recent, Self::Citations, Self::Title]
    }

    /// Select value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Citations => "citations",
            Self::Title => "title",
        }
    }

    /// Toolbar label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Recent => "Recently added",
            Self::Citations => "Most cited",
            Self::Title => "Title",
        }
    }

    /// Parses a select value, defaulting to [`SortKey::Recent`].
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            "citations" => Self::Citations,
            "title" => Self::Title,
            _ => Self::Recent,
        }
    }
}

/// Library toolbar state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LibraryFilter {
    /// Free-text query.
    pub query: String,
    /// Selected tag chip.
    pub tag: Option<String>,
    /// Only show bookmarked papers.
    pub bookmarked_only: bool,
    /// Result ordering.
    pub sort: SortKey,
}

/// Papers matching the filter, in the requested order.
#[must_use]
pub fn filter_papers(papers: &[Paper], filter: &LibraryFilter) -> Vec<Paper> {
    let needle = filter.query.trim().to_lowercase();
    let mut rows: Vec<Paper> = papers
        .iter()
        .filter(|paper| !filter.bookmarked_only || paper.is_bookmarked)
        .filter(|paper| {
            filter.tag.as_ref().is_none_or(|tag| {
                paper
                    .tags
                    .iter()
                    .any(|candidate| candidate.eq_ignore_ascii_case(tag))
            })
        })
        .filter(|paper| needle.is_empty() || matches_query(paper, &needle))
        .cloned()
        .collect();

    match filter.sort {
        SortKey::Recent => rows.sort_by(|a, b| b.added_on.cmp(&a.added_on)),
        SortKey::Citations => rows.sort_by(|a, b| b.citations.cmp(&a.citations)),
        SortKey::Title => rows.sort_by_key(|paper| paper.title.to_lowercase()),
    }
    rows
}

fn matches_query(paper: &Paper, needle: &str) -> bool {
    paper.title.to_lowercase().contains(needle)
        || paper.venue.to_lowercase().contains(needle)
        || paper
            .authors
            .iter()
            .any(|author| author.to_lowercase().contains(needle))
        || paper
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Distinct tags across the library, in first-seen order.
#[must_use]
pub fn library_tags(papers: &[Paper]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in papers.iter().flat_map(|paper| paper.tags.iter()) {
        if !tags.iter().any(|seen| seen.eq_ignore_ascii_case(tag)) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Flips the bookmark of the paper with `id`, returning the new value.
pub fn toggle_bookmark(papers: &mut [Paper], id: Uuid) -> Option<bool> {
    let paper = papers.iter_mut().find(|paper| paper.id == id)?;
    paper.is_bookmarked = !paper.is_bookmarked;
    Some(paper.is_bookmarked)
}

/// Absolute link to a paper for the clipboard.
#[must_use]
pub fn paper_link(origin: &str, id: Uuid) -> String {
    format!("{}/papers/{id}", origin.trim_end_matches('/'))
}

/// External scholar search for a title.
#[must_use]
pub fn scholar_search_url(title: &str) -> String {
    format!(
        "https://scholar.google.com/scholar?q={}",
        urlencoding::encode(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::demo_papers;

    fn titles(rows: &[Paper]) -> Vec<&str> {
        rows.iter().map(|paper| paper.title.as_str()).collect()
    }

    #[test]
    fn empty_filter_returns_everything_most_recent_first() {
        let rows = filter_papers(&demo_papers(), &LibraryFilter::default());
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].title, "Language Models are Few-Shot Learners");
    }

    #[test]
    fn query_matches_authors_case_insensitively() {
        let filter = LibraryFilter {
            query: "  JUMPER ".into(),
            ..LibraryFilter::default()
        };
        let rows = filter_papers(&demo_papers(), &filter);
        assert_eq!(
            titles(&rows),
            vec!["Highly Accurate Protein Structure Prediction with AlphaFold"]
        );
    }

    #[test]
    fn tag_and_bookmark_filters_combine() {
        let filter = LibraryFilter {
            tag: Some("NLP".into()),
            bookmarked_only: true,
            ..LibraryFilter::default()
        };
        let rows = filter_papers(&demo_papers(), &filter);
        assert_eq!(titles(&rows), vec!["Attention Is All You Need"]);
    }

    #[test]
    fn citation_and_title_sorts() {
        let by_citations = filter_papers(
            &demo_papers(),
            &LibraryFilter {
                sort: SortKey::Citations,
                ..LibraryFilter::default()
            },
        );
        assert_eq!(by_citations[0].citations, 98_000);
        let by_title = filter_papers(
            &demo_papers(),
            &LibraryFilter {
                sort: SortKey::Title,
                ..LibraryFilter::default()
            },
        );
        assert_eq!(by_title[0].title, "Attention Is All You Need");
        assert_eq!(by_title[3].title, "Language Models are Few-Shot Learners");
    }

    #[test]
    fn bookmark_toggle_targets_one_paper() {
        let mut papers = demo_papers();
        let id = papers[1].id;
        assert_eq!(toggle_bookmark(&mut papers, id), Some(true));
        assert!(papers[1].is_bookmarked);
        assert!(!papers[3].is_bookmarked);
        assert_eq!(toggle_bookmark(&mut papers, Uuid::from_u128(7)), None);
    }

    #[test]
    fn tags_are_distinct_in_first_seen_order() {
        assert_eq!(
            library_tags(&demo_papers()),
            vec![
                "transformers",
                "nlp",
                "diffusion",
                "generative",
                "biology",
                "structure-prediction",
                "scaling"
            ]
        );
    }

    #[test]
    fn links_are_absolute_and_encoded() {
        assert_eq!(
            paper_link("https://scholarflow.app/", Uuid::from_u128(1)),
            "https://scholarflow.app/papers/00000000-0000-0000-0000-000000000001"
        );
        assert_eq!(
            scholar_search_url("a b&c"),
            "https://scholar.google.com/scholar?q=a%20b%26c"
        );
    }

    #[test]
    fn sort_keys_parse_select_values() {
        for key in SortKey::all() {
            assert_eq!(SortKey::from_value(key.as_str()), key);
        }
        assert_eq!(SortKey::from_value("bogus"), SortKey::Recent);
    }
}
