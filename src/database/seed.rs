use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::SeedError;
use crate::models::Activity;

/// Activities every fresh process starts with.
pub const DEFAULT_SEED: &str = include_str!("../../data/activities.json");

pub fn default_seed() -> Result<Vec<(String, Activity)>, SeedError> {
    parse_seed(DEFAULT_SEED)
}

pub fn load_seed_file(path: &Path) -> Result<Vec<(String, Activity)>, SeedError> {
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&raw)
}

/// Parses `{name: activity}` keeping document order.
pub fn parse_seed(raw: &str) -> Result<Vec<(String, Activity)>, SeedError> {
    let doc: Map<String, Value> = serde_json::from_str(raw)?;
    let mut seed = Vec::with_capacity(doc.len());
    for (name, value) in doc {
        let activity: Activity = serde_json::from_value(value)?;
        check_unique_participants(&name, &activity)?;
        seed.push((name, activity));
    }
    Ok(seed)
}

fn check_unique_participants(name: &str, activity: &Activity) -> Result<(), SeedError> {
    let mut seen = HashSet::with_capacity(activity.participants.len());
    for email in &activity.participants {
        if !seen.insert(email.as_str()) {
            return Err(SeedError::DuplicateParticipant {
                activity: name.to_string(),
                email: email.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_seed_has_known_activities() {
        let seed = default_seed().unwrap();
        let names: Vec<&str> = seed.iter().map(|(n, _)| n.as_str()).collect();
        for expected in [
            "Chess Club",
            "Programming Class",
            "Gym Class",
            "Soccer Club",
            "Basketball",
            "Art Studio",
            "Drama Club",
            "Debate Team",
        ] {
            assert!(names.contains(&expected), "missing {}", expected);
        }
        assert_eq!(names[0], "Chess Club");

        let (_, chess) = &seed[0];
        assert!(chess
            .participants
            .contains(&"michael@mergington.edu".to_string()));
    }

    #[test]
    fn parse_keeps_document_order() {
        let seed = parse_seed(
            r#"{
                "Zeta": {"description": "z", "schedule": "s", "max_participants": 1, "participants": []},
                "Alpha": {"description": "a", "schedule": "s", "max_participants": 2, "participants": []}
            }"#,
        )
        .unwrap();
        assert_eq!(seed[0].0, "Zeta");
        assert_eq!(seed[1].0, "Alpha");
    }

    #[test]
    fn empty_document_is_allowed() {
        assert!(parse_seed("{}").unwrap().is_empty());
    }

    #[test]
    fn rejects_duplicate_participant() {
        let err = parse_seed(
            r#"{"Chess Club": {"description": "d", "schedule": "s", "max_participants": 3,
                "participants": ["a@mergington.edu", "a@mergington.edu"]}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SeedError::DuplicateParticipant { .. }));
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(matches!(parse_seed("[]"), Err(SeedError::Parse(_))));
        assert!(matches!(
            parse_seed(r#"{"Chess Club": {"description": "d"}}"#),
            Err(SeedError::Parse(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"Robotics": {{"description": "Build robots", "schedule": "Saturdays", "max_participants": 8}}}}"#
        )
        .unwrap();
        let seed = load_seed_file(file.path()).unwrap();
        assert_eq!(seed.len(), 1);
        assert_eq!(seed[0].0, "Robotics");
        assert!(seed[0].1.participants.is_empty());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_seed_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SeedError::Read { .. }));
    }
}
