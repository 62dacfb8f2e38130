//! Collaborator list helpers.

use uuid::Uuid;

use crate::models::Collaborator;

/// Collaborators whose name or affiliation contains the query, most shared papers first.
#[must_use]
pub fn filter_collaborators(collaborators: &[Collaborator], query: &str) -> Vec<Collaborator> {
    let needle = query.trim().to_lowercase();
    let mut rows: Vec<Collaborator> = collaborators
        .iter()
        .filter(|person| {
            needle.is_empty()
                || person.name.to_lowercase().contains(&needle)
                || person.affiliation.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();
    rows.sort_by(|a, b| b.shared_papers.cmp(&a.shared_papers));
    rows
}

/// Flips the follow flag of the collaborator with `id`, returning the new value.
pub fn toggle_follow(collaborators: &mut [Collaborator], id: Uuid) -> Option<bool> {
    let person = collaborators.iter_mut().find(|person| person.id == id)?;
    person.is_following = !person.is_following;
    Some(person.is_following)
}

/// Initials for the avatar placeholder, skipping honorifics.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter(|part| !part.ends_with('.'))
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::demo_collaborators;

    #[test]
    fn filter_by_affiliation_and_sort() {
        let people = demo_collaborators();
        assert_eq!(filter_collaborators(&people, "")[0].shared_papers, 6);
        let tokyo = filter_collaborators(&people, "tokyo");
        assert_eq!(tokyo.len(), 1);
        assert_eq!(tokyo[0].name, "Kenji Watanabe");
    }

    #[test]
    fn follow_toggle_is_per_id() {
        let mut people = demo_collaborators();
        let id = people[1].id;
        assert_eq!(toggle_follow(&mut people, id), Some(true));
        assert_eq!(toggle_follow(&mut people, id), Some(false));
        assert_eq!(toggle_follow(&mut people, Uuid::nil()), None);
        assert!(people[0].is_following);
    }

    #[test]
    fn initials_skip_titles() {
        assert_eq!(initials("Dr. Amara Okafor"), "AO");
        assert_eq!(initials("Prof. Lena Fischer"), "LF");
        assert_eq!(initials("kenji"), "K");
        assert_eq!(initials(""), "");
    }
}
