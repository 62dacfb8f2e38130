//! Recommendation and trending-topic selection.

use crate::models::{Recommendation, TrendingTopic};

/// Recommendations matching the query and topic, highest relevance first.
#[must_use]
pub fn filter_recommendations(
    recommendations: &[Recommendation],
    query: &str,
    topic: Option<&str>,
) -> Vec<Recommendation> {
    let needle = query.trim().to_lowercase();
    let mut rows: Vec<Recommendation> = recommendations
        .iter()
        .filter(|rec| topic.is_none_or(|topic| rec.topic.eq_ignore_ascii_case(topic)))
        .filter(|rec| {
            needle.is_empty()
                || rec.title.to_lowercase().contains(&needle)
                || rec.reason.to_lowercase().contains(&needle)
                || rec.topic.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();
    rows.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    rows
}

/// Trending topics, fastest growing first.
#[must_use]
pub fn trending_sorted(topics: &[TrendingTopic]) -> Vec<TrendingTopic> {
    let mut rows = topics.to_vec();
    rows.sort_by(|a, b| b.growth_pct.cmp(&a.growth_pct));
    rows
}

/// Distinct topic tags for filter chips, in first-seen order, ignoring ASCII case.
#[must_use]
pub fn all_tags(recommendations: &[Recommendation], topics: &[TrendingTopic]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    let candidates = recommendations
        .iter()
        .map(|rec| &rec.topic)
        .chain(topics.iter().map(|topic| &topic.tag));
    for tag in candidates {
        if !tags.iter().any(|seen| seen.eq_ignore_ascii_case(tag)) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Signed growth label (`+38%`, `-4%`).
#[must_use]
pub fn growth_label(growth_pct: i16) -> String {
    format!("{growth_pct:+}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{demo_recommendations, demo_trending};

    #[test]
    fn unfiltered_recommendations_sorted_by_relevance() {
        let rows = filter_recommendations(&demo_recommendations(), "", None);
        let scores: Vec<u8> = rows.iter().map(|rec| rec.relevance).collect();
        assert_eq!(scores, vec![94, 88, 81, 76]);
    }

    #[test]
    fn topic_and_query_filters() {
        let recs = demo_recommendations();
        let diffusion = filter_recommendations(&recs, "", Some("Diffusion"));
        assert_eq!(diffusion.len(), 1);
        let collaborators = filter_recommendations(&recs, "collaborators", None);
        assert_eq!(collaborators[0].topic, "nlp");
        assert!(filter_recommendations(&recs, "collaborators", Some("biology")).is_empty());
    }

    #[test]
    fn trending_sorted_by_growth() {
        let rows = trending_sorted(&demo_trending());
        assert_eq!(rows[0].name, "Video Diffusion");
        assert_eq!(rows[3].growth_pct, -4);
        assert_eq!(growth_label(rows[0].growth_pct), "+54%");
        assert_eq!(growth_label(-4), "-4%");
    }

    #[test]
    fn tags_deduplicate_across_sources() {
        assert_eq!(
            all_tags(&demo_recommendations(), &demo_trending()),
            vec!["scaling", "diffusion", "nlp", "biology"]
        );
    }

    #[test]
    fn tags_deduplicate_ignoring_case() {
        let mut topics = demo_trending();
        topics.push(TrendingTopic {
            name: "Language Models".into(),
            tag: "NLP".into(),
            papers: 12,
            growth_pct: 3,
        });
        topics.push(TrendingTopic {
            name: "Robotics".into(),
            tag: "Robotics".into(),
            papers: 4,
            growth_pct: 1,
        });
        assert_eq!(
            all_tags(&demo_recommendations(), &topics),
            vec!["scaling", "diffusion", "nlp", "biology", "Robotics"]
        );
    }
}
