use actix_web_flash_messages::Level;
use dealerdesk::models::auth::AuthenticatedUser;
use dealerdesk::routes::{alert_level_to_str, check_role};

#[test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[test]
fn test_check_role_matches_exactly() {
    let roles = vec!["backoffice".to_string(), "backoffice_admin".to_string()];
    assert!(check_role("backoffice", &roles));
    assert!(check_role("backoffice_admin", &roles));
    assert!(!check_role("backoffice_dealer", &roles));
    assert!(!check_role("back", &roles));
}

#[test]
fn test_jwt_round_trip() {
    let user = AuthenticatedUser {
        sub: "u-1".to_string(),
        email: "staff@operator.example".to_string(),
        name: "Staff".to_string(),
        roles: vec!["backoffice".to_string()],
        exp: 4_000_000_000,
    };

    let token = user.to_jwt("sekret").expect("sign");
    let decoded = AuthenticatedUser::from_jwt(&token, "sekret").expect("decode");
    assert_eq!(decoded, user);

    assert!(AuthenticatedUser::from_jwt(&token, "other-secret").is_err());
}
