use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_project(slug: &str, title: &str) -> Project {
    Project {
        id: format!("id-{slug}"),
        slug: slug.to_owned(),
        title: title.to_owned(),
        description: String::new(),
        content: None,
        technologies: Vec::new(),
        images: Vec::new(),
        github_url: None,
        live_url: None,
        featured: false,
    }
}

// =============================================================
// Envelope
// =============================================================

#[test]
fn envelope_success_with_data_is_ok() {
    let envelope = Envelope { success: true, data: Some(7), message: None };
    assert_eq!(envelope.into_result(), Ok(7));
}

#[test]
fn envelope_failure_uses_message() {
    let envelope: Envelope<u8> = Envelope { success: false, data: None, message: Some("nope".to_owned()) };
    assert_eq!(envelope.into_result(), Err(ApiError::Rejected("nope".to_owned())));
}

#[test]
fn envelope_failure_ignores_data() {
    let envelope = Envelope { success: false, data: Some(1), message: None };
    assert_eq!(
        envelope.into_result(),
        Err(ApiError::Rejected("unsuccessful response".to_owned()))
    );
}

#[test]
fn envelope_success_without_data_is_rejected() {
    let envelope: Envelope<u8> = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert!(matches!(envelope.into_result(), Err(ApiError::Rejected(_))));
}

#[test]
fn envelope_requires_success_flag() {
    assert!(serde_json::from_str::<Envelope<u8>>(r#"{"data":1}"#).is_err());
}

// =============================================================
// Models
// =============================================================

#[test]
fn project_deserializes_camel_case_and_mongo_id() {
    let project: Project = serde_json::from_value(serde_json::json!({
        "_id": "65f0",
        "slug": "weather-app",
        "title": "Weather App",
        "description": "Forecasts",
        "technologies": ["Rust", "Leptos"],
        "images": ["https://example.com/1.png", "https://example.com/2.png"],
        "githubUrl": "https://github.com/example/weather",
        "featured": true
    }))
    .unwrap();
    assert_eq!(project.id, "65f0");
    assert_eq!(project.technologies, vec!["Rust", "Leptos"]);
    assert_eq!(project.github_url.as_deref(), Some("https://github.com/example/weather"));
    assert_eq!(project.live_url, None);
    assert_eq!(project.cover_image(), Some("https://example.com/1.png"));
    assert!(project.featured);
}

#[test]
fn project_optional_fields_default() {
    let project: Project = serde_json::from_str(r#"{"id":"1","slug":"a","title":"A"}"#).unwrap();
    assert!(project.images.is_empty());
    assert!(project.description.is_empty());
    assert_eq!(project.cover_image(), None);
    assert!(!project.featured);
}

#[test]
fn certification_deserializes() {
    let cert: Certification = serde_json::from_str(
        r#"{"id":"c1","title":"Cloud Practitioner","issuer":"AWS","issueDate":"2024-03","credentialUrl":"https://example.com/c1"}"#,
    )
    .unwrap();
    assert_eq!(cert.issuer, "AWS");
    assert_eq!(cert.issue_date.as_deref(), Some("2024-03"));
    assert_eq!(cert.credential_url.as_deref(), Some("https://example.com/c1"));
}

// =============================================================
// Validation
// =============================================================

#[test]
fn project_validation_requires_slug_and_title() {
    assert!(make_project("a", "A").validated().is_ok());
    assert_eq!(make_project(" ", "A").problem(), Some("slug is empty"));
    assert_eq!(make_project("a", "").problem(), Some("title is empty"));
}

#[test]
fn list_validation_drops_invalid_items() {
    let items = vec![make_project("a", "A"), make_project("", "B"), make_project("c", "C")];
    let kept = items.validated().unwrap();
    let slugs: Vec<_> = kept.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, ["a", "c"]);
}

#[test]
fn certification_validation_requires_title() {
    let cert = Certification {
        id: "c".to_owned(),
        title: String::new(),
        issuer: "Issuer".to_owned(),
        issue_date: None,
        credential_url: None,
        image: None,
        description: None,
    };
    assert_eq!(
        cert.validated(),
        Err(ApiError::Invalid { entity: "certification", reason: "title is empty".to_owned() })
    );
}
