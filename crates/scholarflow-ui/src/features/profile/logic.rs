//! Profile completeness scoring.
//!
//! Each field carries a fixed weight; the weights sum to 100 so the score is a
//! percentage without further scaling.

use crate::models::Profile;

/// Scored profile fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileField {
    /// Full name.
    Name,
    /// Institution.
    Affiliation,
    /// Biography.
    Bio,
    /// Research interests.
    Interests,
    /// Avatar image.
    Avatar,
    /// ORCID identifier.
    Orcid,
    /// Personal website.
    Website,
}

impl ProfileField {
    /// All fields in display order.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Name,
            Self::Affiliation,
            Self::Bio,
            Self::Interests,
            Self::Avatar,
            Self::Orcid,
            Self::Website,
        ]
    }

    /// Share of the score contributed by the field.
    #[must_use]
    pub const fn weight(self) -> u8 {
        match self {
            Self::Name | Self::Bio => 20,
            Self::Affiliation | Self::Interests => 15,
            Self::Avatar | Self::Orcid | Self::Website => 10,
        }
    }

    /// Label used in the "missing" checklist.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Affiliation => "Affiliation",
            Self::Bio => "Bio",
            Self::Interests => "Research interests",
            Self::Avatar => "Profile photo",
            Self::Orcid => "ORCID iD",
            Self::Website => "Website",
        }
    }

    fn is_filled(self, profile: &Profile) -> bool {
        fn present(value: &str) -> bool {
            !value.trim().is_empty()
        }
        match self {
            Self::Name => present(&profile.name),
            Self::Affiliation => present(&profile.affiliation),
            Self::Bio => present(&profile.bio),
            Self::Interests => profile.interests.iter().any(|interest| present(interest)),
            Self::Avatar => profile.avatar_url.as_deref().is_some_and(present),
            Self::Orcid => profile.orcid.as_deref().is_some_and(present),
            Self::Website => profile.website.as_deref().is_some_and(present),
        }
    }
}

/// Completeness score and the fields still missing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completeness {
    /// Score, 0–100.
    pub percent: u8,
    /// Unfilled fields in display order.
    pub missing: Vec<ProfileField>,
}

/// Scores a profile.
#[must_use]
pub fn completeness(profile: &Profile) -> Completeness {
    let mut percent = 0u8;
    let mut missing = Vec::new();
    for field in ProfileField::all() {
        if field.is_filled(profile) {
            percent = percent.saturating_add(field.weight());
        } else {
            missing.push(field);
        }
    }
    Completeness {
        percent: percent.min(100),
        missing,
    }
}

/// Splits a comma-separated interests input into trimmed, non-empty entries.
#[must_use]
pub fn parse_interests(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|interest| !interest.is_empty())
        .map(str::to_string)
        .collect()
}

/// Maps an empty input to `None`.
#[must_use]
pub fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::demo_profile;

    #[test]
    fn weights_sum_to_one_hundred() {
        let total: u32 = ProfileField::all()
            .iter()
            .map(|field| u32::from(field.weight()))
            .sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn empty_profile_scores_zero() {
        let score = completeness(&Profile::default());
        assert_eq!(score.percent, 0);
        assert_eq!(score.missing.len(), 7);
    }

    #[test]
    fn demo_profile_is_partially_complete() {
        let score = completeness(&demo_profile());
        assert_eq!(score.percent, 60);
        assert_eq!(
            score.missing,
            vec![ProfileField::Bio, ProfileField::Avatar, ProfileField::Website]
        );
    }

    #[test]
    fn whitespace_does_not_count_as_filled() {
        let profile = Profile {
            name: "   ".into(),
            interests: vec![" ".into()],
            website: Some(String::new()),
            ..Profile::default()
        };
        assert_eq!(completeness(&profile).percent, 0);
    }

    #[test]
    fn interests_and_optional_inputs() {
        assert_eq!(parse_interests(" nlp, ,biology "), vec!["nlp", "biology"]);
        assert_eq!(optional_text("  "), None);
        assert_eq!(optional_text(" x "), Some("x".to_string()));
    }
}
