use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "pw"),
        Ok(("user@example.com".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("", "pw"),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_login_input("a@b.com", ""),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_login_input("   ", "pw"),
        Err("Enter both email and password.")
    );
}

#[test]
fn admins_land_on_the_admin_home() {
    assert_eq!(post_login_route(true), "/admin");
}

#[test]
fn ordinary_users_land_on_services() {
    assert_eq!(post_login_route(false), "/services");
}
