use super::*;

#[test]
fn empty_file_gives_defaults() {
    let config = SessionConfig::from_toml_str("").unwrap();
    assert_eq!(config, SessionConfig::default());
    assert_eq!(config.bot.depth, 3);
    assert_eq!(config.bot.seed, None);
    assert_eq!(config.selfplay.games, 2);
    assert_eq!(config.selfplay.max_plies, 200);
    assert!(config.selfplay.alternate_colors);
    assert_eq!(config.selfplay.opponent, OpponentKind::Minimax);
}

#[test]
fn partial_tables_keep_other_defaults() {
    let config = SessionConfig::from_toml_str(
        r#"
[bot]
depth = 2
seed = 42
move_time_ms = 500

[selfplay]
opponent = "random"
"#,
    )
    .unwrap();
    assert_eq!(config.bot.depth, 2);
    assert_eq!(config.bot.seed, Some(42));
    assert_eq!(config.bot.move_time_ms, Some(500));
    assert_eq!(config.selfplay.opponent, OpponentKind::Random);
    assert_eq!(config.selfplay.games, 2);
}

#[test]
fn bad_values_are_parse_errors() {
    let err = SessionConfig::from_toml_str("[bot]\ndepth = \"deep\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = SessionConfig::from_toml_str("[selfplay]\nopponent = \"stockfish\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn missing_file_is_io_error() {
    let err = SessionConfig::load("/definitely/not/here/castellan.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("castellan.toml"));
}

#[test]
fn load_reads_a_file() {
    let path = std::env::temp_dir().join(format!("castellan-config-{}.toml", std::process::id()));
    std::fs::write(&path, "[selfplay]\ngames = 6\n").unwrap();
    let config = SessionConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(config.selfplay.games, 6);
}

#[test]
fn opponent_from_str() {
    assert_eq!("random".parse::<OpponentKind>(), Ok(OpponentKind::Random));
    assert_eq!("Minimax".parse::<OpponentKind>(), Ok(OpponentKind::Minimax));
    assert!("gnuchess".parse::<OpponentKind>().is_err());
    assert_eq!(OpponentKind::Random.to_string(), "random");
}
