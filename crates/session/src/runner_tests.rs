use super::*;

fn quick_config(games: u32) -> SelfPlayConfig {
    SelfPlayConfig {
        games,
        max_plies: 16,
        alternate_colors: true,
        opponent: OpponentKind::Random,
    }
}

fn quick_bot() -> BotConfig {
    BotConfig {
        depth: 1,
        seed: Some(9),
        move_time_ms: None,
    }
}

#[test]
fn test_self_play_alternates_colors() {
    let runner = SelfPlay::new(quick_config(2), quick_bot());
    let mut first = MinimaxBot::new(quick_bot());
    let mut second = opponent_engine(OpponentKind::Random, &quick_bot());

    let report = runner.run(&mut first, second.as_mut()).unwrap();

    assert_eq!(report.total_games(), 2);
    assert_eq!(report.games.len(), 2);
    assert_eq!(report.games[0].white, "Minimax v1.0");
    assert_eq!(report.games[1].white, "Random v1.0");
    for record in &report.games {
        assert!(record.plies <= 16);
        assert!(record.plies > 0);
    }
}

#[test]
fn test_fixed_colors() {
    let config = SelfPlayConfig {
        alternate_colors: false,
        ..quick_config(2)
    };
    let runner = SelfPlay::new(config, quick_bot());
    let mut first = RandomBot::new(Some(1));
    let mut second = RandomBot::new(Some(2));
    let report = runner.run(&mut first, &mut second).unwrap();
    assert!(report.games.iter().all(|g| g.number > 0 && g.white == report.first));
}

#[test]
fn test_game_end_winner() {
    assert_eq!(GameEnd::WhiteMates.winner(), Some(Color::White));
    assert_eq!(GameEnd::BlackMates.winner(), Some(Color::Black));
    assert_eq!(GameEnd::Stalemate.winner(), None);
    assert_eq!(GameEnd::MoveLimit.winner(), None);
}

#[test]
fn test_report_text_and_json() {
    let report = SelfPlayReport {
        first: "Minimax v1.0".into(),
        second: "Random v1.0".into(),
        first_wins: 1,
        second_wins: 0,
        draws: 0,
        games: vec![GameRecord {
            number: 1,
            white: "Minimax v1.0".into(),
            black: "Random v1.0".into(),
            end: GameEnd::WhiteMates,
            plies: 31,
        }],
    };
    let text = report.to_string();
    assert!(text.contains("1-0 after 31 plies"));
    assert!(text.ends_with("Minimax v1.0: 1 wins, 0 losses, 0 draws"));

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"end\":\"white_mates\""));
    let back: SelfPlayReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn test_opponent_engine_kinds() {
    let bot = quick_bot();
    assert_eq!(opponent_engine(OpponentKind::Minimax, &bot).name(), "Minimax v1.0");
    assert_eq!(opponent_engine(OpponentKind::Random, &bot).name(), "Random v1.0");
}
