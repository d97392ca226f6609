pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Please enter a username".into());
    }
    if !is_plausible_email(email) {
        return Err("Please enter a valid email address".into());
    }
    if !is_strong_password(password) {
        return Err(
            "Password must be at least 8 characters long and include an uppercase letter and a number"
                .into(),
        );
    }
    if password != confirm_password {
        return Err("Passwords do not match".into());
    }
    Ok(())
}

fn is_plausible_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

pub fn is_strong_password(password: &str) -> bool {
    password.len() >= 8
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}
