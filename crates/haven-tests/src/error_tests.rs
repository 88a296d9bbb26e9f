use haven_core::FetchFailure;
use haven_sdk::SdkError;

#[test]
fn test_error_display_messages() {
    let transport = FetchFailure::Transport("connection reset".to_string());
    assert_eq!(format!("{transport}"), "Request failed: connection reset");

    let status = FetchFailure::Status {
        status: 502,
        body: "bad gateway".to_string(),
    };
    assert_eq!(format!("{status}"), "API 502: bad gateway");

    let decode = FetchFailure::Decode("expected value".to_string());
    assert_eq!(format!("{decode}"), "JSON decode: expected value");
}

#[test]
fn test_error_kinds() {
    assert_eq!(FetchFailure::Transport(String::new()).kind(), "transport");
    assert_eq!(
        FetchFailure::Status {
            status: 404,
            body: String::new()
        }
        .kind(),
        "status"
    );
    assert_eq!(FetchFailure::Decode(String::new()).kind(), "decode");
}

#[test]
fn test_serde_error_converts_to_decode() {
    let err = serde_json::from_str::<haven_core::UserStats>("[").unwrap_err();
    let failure: FetchFailure = err.into();
    assert!(matches!(failure, FetchFailure::Decode(_)));
}

#[test]
fn test_invalid_url_error() {
    let err = haven_sdk::StatsClient::new("localhost").unwrap_err();
    assert!(matches!(err, SdkError::InvalidUrl(_)));
    assert!(format!("{err}").starts_with("Invalid API URL: localhost"));
}
