use std::path::PathBuf;

use vimlet::config::{ConfigFlags, LogLevel, load_config_flags, parse_flag_tokens};

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".vimletrc");
    let content = r#"
# comment
--no-status

--tick-ms 30
   
--debug-log=editor.log
"#;
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.no_status);
    assert_eq!(flags.tick_ms, Some(30));
    assert_eq!(flags.debug_log, Some(PathBuf::from("editor.log")));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".vimletrc");
    let content = "--no-status\n--tick-ms 30\n--debug-log file.log\n";
    std::fs::write(&path, content).unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "vimlet".to_string(),
        "--tick-ms".to_string(),
        "10".to_string(),
        "--no-line-numbers".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert!(effective.no_status, "file flags should remain enabled");
    assert!(effective.no_line_numbers, "cli flags should be applied");
    assert_eq!(effective.tick_ms, Some(10), "cli should override tick");
    assert_eq!(
        effective.debug_log,
        Some(PathBuf::from("file.log")),
        "file config should be preserved when CLI does not override"
    );
}

#[test]
fn test_parse_flag_tokens_handles_equals_syntax() {
    let args = vec![
        "vimlet".to_string(),
        "--log-level=info".to_string(),
        "--debug-log=editor.log".to_string(),
    ];
    let flags = parse_flag_tokens(&args);
    assert_eq!(flags.log_level, Some(LogLevel::Info));
    assert_eq!(flags.debug_log, Some(PathBuf::from("editor.log")));
}

#[test]
fn test_config_union_merges_booleans() {
    let file = ConfigFlags {
        no_status: true,
        ..ConfigFlags::default()
    };
    let cli = ConfigFlags {
        no_line_numbers: true,
        ..ConfigFlags::default()
    };
    let merged = file.union(&cli);
    assert!(merged.no_status);
    assert!(merged.no_line_numbers);
}
