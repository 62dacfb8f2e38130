//! Library aggregates for the dashboard cards.

use crate::models::Paper;

/// Counts shown in the dashboard stat cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LibraryStats {
    /// Papers in the library.
    pub total: usize,
    /// Bookmarked papers.
    pub bookmarked: usize,
    /// Started but unfinished papers.
    pub in_progress: usize,
    /// Fully read papers.
    pub completed: usize,
    /// Sum of citation counts.
    pub total_citations: u64,
    /// Mean reading progress, 0–100.
    pub average_progress: u8,
}

/// Aggregates the library in one pass.
#[must_use]
pub fn library_stats(papers: &[Paper]) -> LibraryStats {
    let mut stats = LibraryStats {
        total: papers.len(),
        ..LibraryStats::default()
    };
    let mut progress_sum: u64 = 0;
    for paper in papers {
        if paper.is_bookmarked {
            stats.bookmarked += 1;
        }
        match paper.reading_progress {
            0 => {}
            100.. => stats.completed += 1,
            _ => stats.in_progress += 1,
        }
        stats.total_citations += u64::from(paper.citations);
        progress_sum += u64::from(paper.reading_progress.min(100));
    }
    if let Ok(count) = u64::try_from(papers.len()) {
        if count > 0 {
            stats.average_progress = u8::try_from(progress_sum / count).unwrap_or(100);
        }
    }
    stats
}

/// The `limit` most recently added papers.
#[must_use]
pub fn recent_papers(papers: &[Paper], limit: usize) -> Vec<Paper> {
    let mut rows = papers.to_vec();
    rows.sort_by(|a, b| b.added_on.cmp(&a.added_on));
    rows.truncate(limit);
    rows
}

/// Papers started but not finished, least progress first.
#[must_use]
pub fn continue_reading(papers: &[Paper]) -> Vec<Paper> {
    let mut rows: Vec<Paper> = papers
        .iter()
        .filter(|paper| paper.reading_progress > 0 && paper.reading_progress < 100)
        .cloned()
        .collect();
    rows.sort_by_key(|paper| paper.reading_progress);
    rows
}

/// Compact citation count (`98k`, `1.2k`, `950`).
#[must_use]
pub fn compact_count(value: u64) -> String {
    match value {
        0..=999 => value.to_string(),
        1_000..=9_999 => {
            let tenths = value / 100;
            format!("{}.{}k", tenths / 10, tenths % 10)
        }
        _ => format!("{}k", value / 1_000),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::demo_papers;

    #[test]
    fn stats_aggregate_demo_library() {
        let stats = library_stats(&demo_papers());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.bookmarked, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.in_progress, 2);
        assert_eq!(stats.total_citations, 162_400);
        assert_eq!(stats.average_progress, 53);
    }

    #[test]
    fn empty_library_has_zero_stats() {
        assert_eq!(library_stats(&[]), LibraryStats::default());
    }

    #[test]
    fn recent_and_continue_reading_order() {
        let papers = demo_papers();
        let recent = recent_papers(&papers, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].year, 2020);
        let reading = continue_reading(&papers);
        assert_eq!(
            reading.iter().map(|p| p.reading_progress).collect::<Vec<_>>(),
            vec![45, 70]
        );
    }

    #[test]
    fn compact_counts() {
        assert_eq!(compact_count(950), "950");
        assert_eq!(compact_count(1_250), "1.2k");
        assert_eq!(compact_count(98_000), "98k");
    }
}
