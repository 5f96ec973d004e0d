//! Email address utilities

/// Mask an email address for log output (e.g. `p***@example.com`)
///
/// Keeps the first character of the local part and the full domain so log
/// lines stay correlatable without exposing the address.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}
