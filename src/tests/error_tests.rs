use crate::error::{ErrorContext, LinkError};

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found",
    ));

    let link_result = result.context("Failed to read config file");
    assert!(link_result.is_err());

    match link_result {
        Err(LinkError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read config file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected LinkError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;
    let result = option.context("API key not found");

    assert!(result.is_err());
    match result {
        Err(LinkError::Unknown(msg)) => {
            assert_eq!(msg, "API key not found");
        }
        _ => panic!("Expected LinkError::Unknown"),
    }
}

#[test]
fn test_error_context_with_closure() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "access denied",
    ));

    let link_result =
        result.with_context(|| format!("Failed to access file at path: {}", "/tmp/test.txt"));

    assert!(link_result.is_err());
    match link_result {
        Err(LinkError::Unknown(msg)) => {
            assert!(msg.contains("Failed to access file at path: /tmp/test.txt"));
            assert!(msg.contains("access denied"));
        }
        _ => panic!("Expected LinkError::Unknown"),
    }
}

#[test]
fn test_missing_config_message_passes_through() {
    let err = LinkError::MissingConfig("GitHub token not found".to_string());
    assert_eq!(err.to_string(), "GitHub token not found");
}

#[test]
fn test_graphql_error_display() {
    let err = LinkError::GraphQLError("Entity not found".to_string());
    assert_eq!(err.to_string(), "GraphQL error: Entity not found");
}
