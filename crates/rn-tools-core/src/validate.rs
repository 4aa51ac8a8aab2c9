//! Input validators for the scaffold prompts
//!
//! Each validator returns `Err` with a user-facing message; the prompt layer
//! re-asks the same field until validation passes.

use std::path::Path;

/// Project name: a leading letter followed by letters and digits only
pub fn validate_project_name(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Project name is required".to_string());
    }
    if value.chars().any(char::is_whitespace) {
        return Err("Project name cannot contain spaces".to_string());
    }
    let mut chars = value.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    if !starts_with_letter || !chars.all(|c| c.is_ascii_alphanumeric()) {
        return Err(
            "Project name must start with a letter and contain only letters and numbers"
                .to_string(),
        );
    }
    Ok(())
}

/// Bundle identifier: reverse-domain form with at least two segments,
/// each segment a lowercase letter followed by lowercase letters, digits
/// or hyphens (e.g. com.company.myapp)
pub fn validate_bundle_id(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Bundle ID is required".to_string());
    }

    let segments: Vec<&str> = value.split('.').collect();
    let segment_ok = |s: &&str| {
        let mut chars = s.chars();
        chars.next().is_some_and(|c| c.is_ascii_lowercase())
            && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    };

    if segments.len() < 2 || !segments.iter().all(segment_ok) {
        return Err("Invalid bundle ID format (e.g., com.company.myapp)".to_string());
    }
    Ok(())
}

/// Target directory: must not exist, or exist as an empty directory
pub fn validate_target_directory(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Directory is required".to_string());
    }

    let path = Path::new(value);
    if !path.exists() {
        return Ok(());
    }
    if !path.is_dir() {
        return Err("Path already exists and is not a directory".to_string());
    }
    match std::fs::read_dir(path) {
        Ok(mut entries) => {
            if entries.next().is_some() {
                Err("Directory already exists and is not empty".to_string())
            } else {
                Ok(())
            }
        }
        Err(e) => Err(format!("Cannot read directory: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_name_accepts_alphanumeric() {
        assert!(validate_project_name("MyApp2").is_ok());
        assert!(validate_project_name("app").is_ok());
    }

    #[test]
    fn test_project_name_rejects_empty_and_whitespace() {
        assert!(validate_project_name("").is_err());
        assert!(validate_project_name("My App").is_err());
        assert!(validate_project_name(" MyApp").is_err());
    }

    #[test]
    fn test_project_name_rejects_bad_shapes() {
        assert!(validate_project_name("2App").is_err());
        assert!(validate_project_name("my-app").is_err());
        assert!(validate_project_name("my_app").is_err());
    }

    #[test]
    fn test_bundle_id_requires_second_segment() {
        assert!(validate_bundle_id("com").is_err());
        assert!(validate_bundle_id("com.company.myapp").is_ok());
        assert!(validate_bundle_id("com.my-company.app2").is_ok());
    }

    #[test]
    fn test_bundle_id_rejects_malformed_segments() {
        assert!(validate_bundle_id("").is_err());
        assert!(validate_bundle_id("com.").is_err());
        assert!(validate_bundle_id(".com").is_err());
        assert!(validate_bundle_id("com.Company").is_err());
        assert!(validate_bundle_id("com.1company").is_err());
    }

    #[test]
    fn test_directory_accepts_missing_or_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("does-not-exist");
        assert!(validate_target_directory(missing.to_str().unwrap()).is_ok());

        let empty = tmp.path().join("empty");
        std::fs::create_dir(&empty).unwrap();
        assert!(validate_target_directory(empty.to_str().unwrap()).is_ok());
    }

    #[test]
    fn test_directory_rejects_non_empty() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("file.txt"), "x").unwrap();
        assert!(validate_target_directory(tmp.path().to_str().unwrap()).is_err());
    }
}
