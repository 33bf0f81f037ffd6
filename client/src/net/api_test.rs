use super::*;

#[test]
fn base_url_defaults_when_unset_or_blank() {
    assert_eq!(base_url_or_default(None), DEFAULT_API_BASE_URL);
    assert_eq!(base_url_or_default(Some("   ")), DEFAULT_API_BASE_URL);
}

#[test]
fn base_url_trims_trailing_slashes() {
    assert_eq!(base_url_or_default(Some("https://api.example.com/v1/")), "https://api.example.com/v1");
    assert_eq!(base_url_or_default(Some("https://api.example.com//")), "https://api.example.com");
}

#[test]
fn endpoints_are_relative_to_base_url() {
    let base = api_base_url();
    assert_eq!(profile_endpoint(), format!("{base}/user/profile"));
    assert_eq!(projects_endpoint(), format!("{base}/projects"));
    assert_eq!(certifications_endpoint(), format!("{base}/certifications"));
    assert_eq!(project_endpoint("portfolio-website"), format!("{base}/projects/portfolio-website"));
}

#[test]
fn project_endpoint_encodes_slug() {
    let base = api_base_url();
    assert_eq!(project_endpoint("a b/c"), format!("{base}/projects/a%20b%2Fc"));
}

#[test]
fn encode_path_segment_keeps_unreserved_and_encodes_utf8() {
    assert_eq!(encode_path_segment("Az09-_.~"), "Az09-_.~");
    assert_eq!(encode_path_segment("مشروع"), "%D9%85%D8%B4%D8%B1%D9%88%D8%B9");
}

#[test]
fn decode_envelope_unwraps_success() {
    let body = r#"{"success":true,"data":{"name":"Sam","profilePicture":"https://example.com/me.png"}}"#;
    let profile: Profile = decode_envelope(body).unwrap();
    assert_eq!(profile.name, "Sam");
    assert_eq!(profile.profile_picture.as_deref(), Some("https://example.com/me.png"));
}

#[test]
fn decode_envelope_reports_rejection_message() {
    let body = r#"{"success":false,"message":"Project not found"}"#;
    let err = decode_envelope::<Project>(body).unwrap_err();
    assert_eq!(err, ApiError::Rejected("Project not found".to_owned()));
}

#[test]
fn decode_envelope_rejects_malformed_json() {
    assert!(matches!(decode_envelope::<Profile>("<html>"), Err(ApiError::Decode(_))));
}

#[test]
fn decode_envelope_rejects_invalid_payload() {
    let body = r#"{"success":true,"data":{"name":"  "}}"#;
    assert_eq!(
        decode_envelope::<Profile>(body),
        Err(ApiError::Invalid { entity: "profile", reason: "name is empty".to_owned() })
    );
}

#[test]
fn status_error_keeps_envelope_message() {
    let err = status_error(404, r#"{"success":false,"message":"Not found"}"#);
    assert_eq!(err, ApiError::Status { status: 404, message: Some("Not found".to_owned()) });
}

#[test]
fn status_error_without_envelope() {
    let err = status_error(502, "Bad Gateway");
    assert_eq!(err, ApiError::Status { status: 502, message: None });
    assert_eq!(err.to_string(), "unexpected status 502");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetches_are_unavailable_without_browser() {
    let result = futures::executor::block_on(fetch_projects());
    assert_eq!(result, Err(ApiError::Unavailable));
}
