use super::*;
use crate::types::Category;

#[test]
fn no_match_found_is_recoverable() {
    let err = ValuengError::from(MatchError::NoMatchFound {
        material_id: "W2".to_string(),
        category: Category::Window,
    });
    assert!(err.is_recoverable());
}

#[test]
fn judge_errors_are_recoverable() {
    let err = ValuengError::from(JudgeError::Timeout { elapsed_ms: 5000 });
    assert!(err.is_recoverable());
}

#[test]
fn config_errors_are_not_recoverable() {
    let err = ValuengError::from(ConfigError::InvalidWeights {
        name: "balanced".to_string(),
        sum: 0.9,
    });
    assert!(!err.is_recoverable());
}

#[test]
fn display_includes_material_context() {
    let err = MatchError::NoMatchFound {
        material_id: "Door1".to_string(),
        category: Category::InteriorDoor,
    };
    let msg = err.to_string();
    assert!(msg.contains("Door1"));
    assert!(msg.contains("InteriorDoor"));
}

#[test]
fn validation_error_is_descriptive() {
    let err = ValidationError::InvalidMaterial {
        id: "W9".to_string(),
        reason: "quantity must be at least 1".to_string(),
    };
    assert!(err.to_string().contains("quantity must be at least 1"));
}
