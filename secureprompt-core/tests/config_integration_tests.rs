// secureprompt-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use secureprompt_core::config::{merge_config, KeywordEntry, SecurePromptConfig};
use secureprompt_core::{PromptChecker, SanitizationEngine, SecurePromptError, Status};

fn write_config(yaml: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_from_file() -> Result<()> {
    let file = write_config(
        r#"
keywords:
  - internal
  - keyword: Project Falcon
    label: "[CODENAME]"
patterns:
  - name: ticket
    pattern: 'TICKET-\d+'
    replace_with: "[TICKET_REF]"
"#,
    )?;
    let config = SecurePromptConfig::load_from_file(file.path())?;
    assert_eq!(config.keywords.len(), 2);
    assert_eq!(config.keywords[1], KeywordEntry::new("Project Falcon").with_label("[CODENAME]"));
    assert_eq!(config.patterns[0].name, "ticket");
    assert!(!config.patterns[0].programmatic_validation);

    let checker = PromptChecker::new(&config)?;
    assert_eq!(
        checker.sanitize("Internal note on project falcon, see TICKET-42"),
        "[INTERNAL] note on [CODENAME], see [TICKET_REF]"
    );
    Ok(())
}

#[test]
fn test_load_from_missing_file_fails() {
    let err = SecurePromptConfig::load_from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read config file"));
}

#[test]
fn test_non_string_keyword_is_a_configuration_error() -> Result<()> {
    let file = write_config("keywords:\n  - password\n  - 42\n")?;
    let err = SecurePromptConfig::load_from_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid config file"));

    let file = write_config("keywords:\n  - password\n  - {label: \"[X]\"}\n")?;
    assert!(SecurePromptConfig::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_invalid_regex_in_file_is_reported() -> Result<()> {
    let file = write_config("patterns:\n  - name: broken\n    pattern: '(oops'\n")?;
    let err = SecurePromptConfig::load_from_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("Rule 'broken' has an invalid regex pattern"));
    Ok(())
}

#[test]
fn test_user_config_merges_over_defaults() -> Result<()> {
    let file = write_config(
        r#"
keywords:
  - internal
  - keyword: PIN
    enabled: false
"#,
    )?;
    let user = SecurePromptConfig::load_from_file(file.path())?;
    let merged = merge_config(SecurePromptConfig::load_default()?, Some(user));
    let checker = PromptChecker::new(&merged)?;

    assert_eq!(checker.keywords().len(), 18);
    assert!(checker.keywords().iter().any(|k| k == "internal"));
    assert!(!checker.keywords().iter().any(|k| k == "pin"));
    assert_eq!(checker.check("spinning internal wheels").matches.len(), 1);
    Ok(())
}

#[test]
fn test_flagged_replacement_label_fails_checker_build() -> Result<()> {
    let file = write_config(
        r#"
keywords:
  - token
patterns:
  - name: bearer
    pattern: 'Bearer \S+'
    replace_with: "[TOKEN]"
"#,
    )?;
    let config = SecurePromptConfig::load_from_file(file.path())?;
    let err = PromptChecker::new(&config).unwrap_err();
    assert!(matches!(err, SecurePromptError::FlaggedReplacement(ref rule, _) if rule == "bearer"));
    Ok(())
}

#[test]
fn test_empty_dictionary_never_flags() -> Result<()> {
    let config = SecurePromptConfig::from_yaml_str("keywords: []\n")?;
    let checker = PromptChecker::new(&config)?;
    assert_eq!(checker.check("password secret token").status, Status::Safe);
    Ok(())
}

#[test]
fn test_padded_user_keyword_still_detects() -> Result<()> {
    let file = write_config(
        r#"
keywords:
  - keyword: " PIN "
    label: "[PIN_CODE]"
  - "  internal "
"#,
    )?;
    let user = SecurePromptConfig::load_from_file(file.path())?;
    assert_eq!(user.keywords[0].keyword, "PIN");
    assert_eq!(user.keywords[1].keyword, "internal");

    let merged = merge_config(SecurePromptConfig::load_default()?, Some(user));
    let checker = PromptChecker::new(&merged)?;
    assert!(checker.keywords().iter().any(|k| k == "pin"));
    assert!(!checker.keywords().iter().any(|k| k.contains(' ') && k.trim() == "pin"));

    assert_eq!(checker.check("my pin: 1234").status, Status::Sensitive);
    assert_eq!(checker.check("PIN 1234").status, Status::Sensitive);
    assert_eq!(checker.sanitize("my pin: 1234"), "my [PIN_CODE]: 1234");
    Ok(())
}

#[test]
fn test_padded_entry_built_in_code_replaces_default() -> Result<()> {
    let user = SecurePromptConfig {
        keywords: vec![KeywordEntry::new(" PIN ").with_label("[PIN_CODE]")],
        patterns: Vec::new(),
    };
    let merged = merge_config(SecurePromptConfig::load_default()?, Some(user));
    assert_eq!(merged.keywords.len(), 18);

    let checker = PromptChecker::new(&merged)?;
    let result = checker.check("my pin: 1234");
    assert_eq!(result.status, Status::Sensitive);
    assert_eq!(result.matches[0].keyword, "pin");
    assert_eq!(result.matches[0].position, 3);
    Ok(())
}
