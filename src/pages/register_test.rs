use super::*;

#[test]
fn validate_register_input_trims_name_and_email() {
    assert_eq!(
        validate_register_input(" Alice ", " a@b.com ", "secret"),
        Ok(("Alice".to_owned(), "a@b.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_register_input_requires_every_field() {
    let expected = Err("Fill in name, email, and password.");
    assert_eq!(validate_register_input("", "a@b.com", "pw"), expected);
    assert_eq!(validate_register_input("Alice", "", "pw"), expected);
    assert_eq!(validate_register_input("Alice", "a@b.com", ""), expected);
}

#[test]
fn profile_metadata_carries_the_name() {
    let metadata = profile_metadata("Alice");
    assert_eq!(metadata.get("name"), Some(&serde_json::json!("Alice")));
    assert_eq!(metadata.len(), 1);
}
