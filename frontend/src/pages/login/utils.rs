pub fn validate_credentials(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Please enter your username".into());
    }
    if password.is_empty() {
        return Err("Please enter your password".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_credentials;

    #[test]
    fn requires_both_fields() {
        assert!(validate_credentials("", "secret").is_err());
        assert!(validate_credentials("   ", "secret").is_err());
        assert!(validate_credentials("alice", "").is_err());
        assert!(validate_credentials("alice", "secret").is_ok());
    }

    #[test]
    fn messages_name_the_missing_field() {
        assert_eq!(
            validate_credentials("", "secret").unwrap_err(),
            "Please enter your username"
        );
        assert_eq!(
            validate_credentials("alice", "").unwrap_err(),
            "Please enter your password"
        );
    }
}
