use super::*;
use crate::state::locale::{Language, dictionary};

fn all_keys() -> Vec<&'static str> {
    let mut keys = Vec::new();
    for entry in EXPERIENCE {
        keys.extend([entry.role_key, entry.company_key, entry.summary_key]);
        keys.extend(entry.highlight_keys);
    }
    keys.extend(SKILL_GROUPS.iter().map(|g| g.title_key));
    keys
}

#[test]
fn content_keys_exist_in_both_dictionaries() {
    for language in Language::ALL {
        let dict = dictionary(language);
        for key in all_keys() {
            assert!(dict.contains_key(key), "{} is missing {key}", language.code());
        }
    }
}

#[test]
fn skill_groups_are_not_empty() {
    assert!(SKILL_GROUPS.iter().all(|g| !g.skills.is_empty()));
}

#[test]
fn contact_links() {
    assert_eq!(mailto(), "mailto:hello@example.com");
    assert_eq!(tel(), "tel:+201000000000");
}

#[test]
fn cv_path_is_absolute() {
    assert!(CV_PATH.starts_with('/'));
    assert!(CV_PATH.ends_with(CV_DOWNLOAD_NAME));
}
