// Unit tests for error mapping - pure domain logic without HTTP or store dependencies
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_invalid_move_to_400() {
    let de = DomainError::invalid_move("Z9 to E4 is not a legal move");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::InvalidMove);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_invalid_square_to_400() {
    let de = DomainError::validation(ValidationKind::InvalidSquare, "i9 is off the board");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::InvalidSquare);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn domain_errors_never_render_as_404() {
    // A missing round is a frame outcome, not an HTTP error.
    let errors = [
        DomainError::invalid_move("e2e5"),
        DomainError::validation(ValidationKind::InvalidSquare, "z0"),
        DomainError::infra(InfraErrorKind::Timeout, "get"),
        DomainError::infra(InfraErrorKind::StoreUnavailable, "down"),
        DomainError::infra(InfraErrorKind::DataCorruption, "garbled"),
        DomainError::infra(InfraErrorKind::Oracle, "rejected"),
    ];
    for de in errors {
        let app: AppError = de.into();
        assert_ne!(app.status().as_u16(), 404, "{app:?}");
    }
}

#[test]
fn maps_infra() {
    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code().as_str(), "STORE_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));

    let down = DomainError::infra(InfraErrorKind::StoreUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "STORE_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let corrupt = DomainError::infra(InfraErrorKind::DataCorruption, "not a number");
    let app: AppError = corrupt.into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);

    let oracle = DomainError::infra(InfraErrorKind::Oracle, "rejected own move");
    let app: AppError = oracle.into();
    assert_eq!(app.code(), ErrorCode::OracleFailure);
    assert_eq!(app.status().as_u16(), 500);
}
