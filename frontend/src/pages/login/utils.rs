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
    use super::*;

    #[test]
    fn requires_both_fields() {
        assert!(validate_credentials(" ", "pw").is_err());
        assert!(validate_credentials("ravi", "").is_err());
        assert!(validate_credentials("ravi", "pw").is_ok());
    }
}
