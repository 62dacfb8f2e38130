//! View models and the demo records the UI is seeded with.

use chrono::NaiveDate;
use uuid::Uuid;

/// A paper in the researcher's library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paper {
    /// Stable identifier.
    pub id: Uuid,
    /// Paper title.
    pub title: String,
    /// Author names in byline order.
    pub authors: Vec<String>,
    /// Journal or conference.
    pub venue: String,
    /// Publication year.
    pub year: u16,
    /// Citation count.
    pub citations: u32,
    /// Topic tags.
    pub tags: Vec<String>,
    /// Reading progress, 0–100.
    pub reading_progress: u8,
    /// Saved to bookmarks.
    pub is_bookmarked: bool,
    /// Date the paper was added to the library.
    pub added_on: NaiveDate,
}

impl Paper {
    /// Byline with `et al.` after the first two authors.
    #[must_use]
    pub fn byline(&self) -> String {
        match self.authors.as_slice() {
            [] => String::new(),
            [one] => one.clone(),
            [first, second] => format!("{first}, {second}"),
            [first, second, ..] => format!("{first}, {second} et al."),
        }
    }
}

/// A suggested paper on the discover page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recommendation {
    /// Stable identifier.
    pub id: Uuid,
    /// Paper title.
    pub title: String,
    /// Author names.
    pub authors: Vec<String>,
    /// Why the paper was suggested.
    pub reason: String,
    /// Topic tag the suggestion belongs to.
    pub topic: String,
    /// Relevance score, 0–100.
    pub relevance: u8,
}

/// A topic gaining attention.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrendingTopic {
    /// Display name.
    pub name: String,
    /// Tag used for filtering.
    pub tag: String,
    /// Papers published on the topic this month.
    pub papers: u32,
    /// Month-over-month growth in percent.
    pub growth_pct: i16,
}

/// A researcher the user works with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collaborator {
    /// Stable identifier.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Institution.
    pub affiliation: String,
    /// Papers co-authored with the user.
    pub shared_papers: u32,
    /// The user follows this researcher.
    pub is_following: bool,
}

/// Editable researcher profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    /// Full name.
    pub name: String,
    /// Institution.
    pub affiliation: String,
    /// Short biography.
    pub bio: String,
    /// Research interests.
    pub interests: Vec<String>,
    /// Avatar image as a data URL.
    pub avatar_url: Option<String>,
    /// ORCID identifier.
    pub orcid: Option<String>,
    /// Personal website.
    pub website: Option<String>,
}

/// Role of a workspace member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeamRole {
    /// Full control, including billing.
    Owner,
    /// Manages members and settings.
    Admin,
    /// Reads and edits shared papers.
    Member,
    /// Read-only access.
    Viewer,
}

impl TeamRole {
    /// Roles that can be assigned through an invitation.
    #[must_use]
    pub const fn invitable() -> [Self; 3] {
        [Self::Admin, Self::Member, Self::Viewer]
    }

    /// Label and select value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Admin => "Admin",
            Self::Member => "Member",
            Self::Viewer => "Viewer",
        }
    }

    /// Parses a select value.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "Owner" => Some(Self::Owner),
            "Admin" => Some(Self::Admin),
            "Member" => Some(Self::Member),
            "Viewer" => Some(Self::Viewer),
            _ => None,
        }
    }
}

/// Workspace member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamMember {
    /// Stable identifier.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Sign-in email.
    pub email: String,
    /// Assigned role.
    pub role: TeamRole,
}

/// Pending workspace invitation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invitation {
    /// Stable identifier.
    pub id: Uuid,
    /// Invitee email, lowercased.
    pub email: String,
    /// Role granted on acceptance.
    pub role: TeamRole,
}

/// Notification switches on the settings page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationSettings {
    /// Weekly email digest.
    pub email_digest: bool,
    /// Alerts when a library paper is cited.
    pub new_citations: bool,
    /// Collaborator uploads and comments.
    pub collaborator_activity: bool,
    /// Product announcements.
    pub product_updates: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_digest: true,
            new_citations: true,
            collaborator_activity: false,
            product_updates: false,
        }
    }
}

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational toast.
    Info,
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

/// Toast notification displayed by the shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Identifier used for dismissal.
    pub id: u64,
    /// Message content.
    pub message: String,
    /// Visual variant.
    pub kind: ToastKind,
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|name| (*name).to_string()).collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Demo library.
#[must_use]
pub fn demo_papers() -> Vec<Paper> {
    vec![
        Paper {
            id: Uuid::from_u128(0x101),
            title: "Attention Is All You Need".into(),
            authors: names(&["Ashish Vaswani", "Noam Shazeer", "Niki Parmar"]),
            venue: "NeurIPS".into(),
            year: 2017,
            citations: 98_000,
            tags: names(&["transformers", "nlp"]),
            reading_progress: 100,
            is_bookmarked: true,
            added_on: date(2024, 1, 12),
        },
        Paper {
            id: Uuid::from_u128(0x102),
            title: "Denoising Diffusion Probabilistic Models".into(),
            authors: names(&["Jonathan Ho", "Ajay Jain", "Pieter Abbeel"]),
            venue: "NeurIPS".into(),
            year: 2020,
            citations: 12_400,
            tags: names(&["diffusion", "generative"]),
            reading_progress: 45,
            is_bookmarked: false,
            added_on: date(2024, 3, 2),
        },
        Paper {
            id: Uuid::from_u128(0x103),
            title: "Highly Accurate Protein Structure Prediction with AlphaFold".into(),
            authors: names(&["John Jumper", "Richard Evans"]),
            venue: "Nature".into(),
            year: 2021,
            citations: 21_000,
            tags: names(&["biology", "structure-prediction"]),
            reading_progress: 0,
            is_bookmarked: true,
            added_on: date(2024, 2, 18),
        },
        Paper {
            id: Uuid::from_u128(0x104),
            title: "Language Models are Few-Shot Learners".into(),
            authors: names(&["Tom Brown", "Benjamin Mann", "Nick Ryder"]),
            venue: "NeurIPS".into(),
            year: 2020,
            citations: 31_000,
            tags: names(&["nlp", "scaling"]),
            reading_progress: 70,
            is_bookmarked: false,
            added_on: date(2024, 4, 9),
        },
    ]
}

/// Demo recommendations.
#[must_use]
pub fn demo_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            id: Uuid::from_u128(0x201),
            title: "Scaling Laws for Neural Language Models".into(),
            authors: names(&["Jared Kaplan", "Sam McCandlish"]),
            reason: "Cited by 3 papers in your library".into(),
            topic: "scaling".into(),
            relevance: 94,
        },
        Recommendation {
            id: Uuid::from_u128(0x202),
            title: "High-Resolution Image Synthesis with Latent Diffusion Models".into(),
            authors: names(&["Robin Rombach", "Andreas Blattmann"]),
            reason: "Similar to Denoising Diffusion Probabilistic Models".into(),
            topic: "diffusion".into(),
            relevance: 88,
        },
        Recommendation {
            id: Uuid::from_u128(0x203),
            title: "BERT: Pre-training of Deep Bidirectional Transformers".into(),
            authors: names(&["Jacob Devlin", "Ming-Wei Chang"]),
            reason: "Popular with your collaborators".into(),
            topic: "nlp".into(),
            relevance: 81,
        },
        Recommendation {
            id: Uuid::from_u128(0x204),
            title: "ESMFold: Evolutionary-Scale Prediction of Atomic Structure".into(),
            authors: names(&["Zeming Lin", "Halil Akin"]),
            reason: "Matches your interest in structural biology".into(),
            topic: "biology".into(),
            relevance: 76,
        },
    ]
}

/// Demo trending topics.
#[must_use]
pub fn demo_trending() -> Vec<TrendingTopic> {
    vec![
        TrendingTopic {
            name: "Retrieval-Augmented Generation".into(),
            tag: "nlp".into(),
            papers: 412,
            growth_pct: 38,
        },
        TrendingTopic {
            name: "Video Diffusion".into(),
            tag: "diffusion".into(),
            papers: 187,
            growth_pct: 54,
        },
        TrendingTopic {
            name: "Protein Language Models".into(),
            tag: "biology".into(),
            papers: 96,
            growth_pct: 21,
        },
        TrendingTopic {
            name: "Mixture of Experts".into(),
            tag: "scaling".into(),
            papers: 143,
            growth_pct: -4,
        },
    ]
}

/// Demo collaborators.
#[must_use]
pub fn demo_collaborators() -> Vec<Collaborator> {
    vec![
        Collaborator {
            id: Uuid::from_u128(0x301),
            name: "Dr. Amara Okafor".into(),
            affiliation: "University of Lagos".into(),
            shared_papers: 6,
            is_following: true,
        },
        Collaborator {
            id: Uuid::from_u128(0x302),
            name: "Prof. Lena Fischer".into(),
            affiliation: "ETH Zürich".into(),
            shared_papers: 3,
            is_following: false,
        },
        Collaborator {
            id: Uuid::from_u128(0x303),
            name: "Kenji Watanabe".into(),
            affiliation: "University of Tokyo".into(),
            shared_papers: 1,
            is_following: false,
        },
    ]
}

/// Demo profile, partially filled in.
#[must_use]
pub fn demo_profile() -> Profile {
    Profile {
        name: "Sam Rivera".into(),
        affiliation: "Stanford University".into(),
        bio: String::new(),
        interests: names(&["machine learning", "computational biology"]),
        avatar_url: None,
        orcid: Some("0000-0002-1825-0097".into()),
        website: None,
    }
}

/// Demo workspace members.
#[must_use]
pub fn demo_team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: Uuid::from_u128(0x401),
            name: "Sam Rivera".into(),
            email: "sam.rivera@stanford.edu".into(),
            role: TeamRole::Owner,
        },
        TeamMember {
            id: Uuid::from_u128(0x402),
            name: "Dr. Amara Okafor".into(),
            email: "a.okafor@unilag.edu.ng".into(),
            role: TeamRole::Admin,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byline_abbreviates_long_author_lists() {
        let mut paper = demo_papers().remove(0);
        assert_eq!(paper.byline(), "Ashish Vaswani, Noam Shazeer et al.");
        paper.authors.truncate(1);
        assert_eq!(paper.byline(), "Ashish Vaswani");
        paper.authors.clear();
        assert_eq!(paper.byline(), "");
    }

    #[test]
    fn team_role_values_round_trip_through_select() {
        for role in TeamRole::invitable() {
            assert_eq!(TeamRole::from_value(role.as_str()), Some(role));
        }
        assert_eq!(TeamRole::from_value("Guest"), None);
    }

    #[test]
    fn demo_records_have_unique_ids() {
        let papers = demo_papers();
        let mut ids: Vec<_> = papers.iter().map(|paper| paper.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), papers.len());
    }
}
