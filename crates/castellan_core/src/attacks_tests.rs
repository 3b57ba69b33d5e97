use super::*;

fn sq(name: &str) -> Square {
    Square::parse(name).unwrap()
}

fn pos(placement: &str) -> Position {
    Position::from_placement(placement).unwrap()
}

#[test]
fn pawns_attack_only_forward_diagonals() {
    // White pawn on e4, black pawn on d5.
    let p = pos("4k3/8/8/3p4/4P3/8/8/4K3");
    assert!(is_attacked(&p, sq("d5"), Color::White));
    assert!(is_attacked(&p, sq("f5"), Color::White));
    assert!(!is_attacked(&p, sq("e5"), Color::White));
    assert!(!is_attacked(&p, sq("d3"), Color::White));

    assert!(is_attacked(&p, sq("e4"), Color::Black));
    assert!(is_attacked(&p, sq("c4"), Color::Black));
    assert!(!is_attacked(&p, sq("d4"), Color::Black));
}

#[test]
fn knight_and_king_attacks() {
    let p = pos("4k3/8/8/8/4N3/8/8/K7");
    for name in ["d6", "f6", "c5", "g5", "c3", "g3", "d2", "f2"] {
        assert!(is_attacked(&p, sq(name), Color::White), "{name}");
    }
    assert!(!is_attacked(&p, sq("e5"), Color::White));
    assert!(is_attacked(&p, sq("b2"), Color::White));
    assert!(is_attacked(&p, sq("d7"), Color::Black));
}

#[test]
fn sliding_attack_stops_at_first_blocker() {
    // Rook a1, white pawn a4 blocks the file.
    let p = pos("4k3/8/8/8/P7/8/8/R3K3");
    assert!(is_attacked(&p, sq("a3"), Color::White));
    assert!(is_attacked(&p, sq("a4"), Color::White));
    assert!(!is_attacked(&p, sq("a5"), Color::White));
    assert!(is_attacked(&p, sq("d1"), Color::White));
    assert!(!is_attacked(&p, sq("g1"), Color::White));
}

#[test]
fn sliding_attack_passes_through_defending_king() {
    // Black rook on a4 checks the white king on d4 along the rank.
    let p = pos("4k3/8/8/8/r2K4/8/8/8");
    assert!(is_attacked(&p, sq("d4"), Color::Black));
    // The square behind the king on the same ray is still attacked.
    assert!(is_attacked(&p, sq("e4"), Color::Black));
    assert!(is_attacked(&p, sq("h4"), Color::Black));
    // The attacker's own king does not let the ray through.
    let p = pos("8/8/8/8/r2k4/8/8/7K");
    assert!(!is_attacked(&p, sq("f4"), Color::Black));
}

#[test]
fn attackers_lists_every_checker() {
    // Knight f3 and rook e8 both hit the king on e1.
    let p = pos("k3r3/8/8/8/8/5n2/8/4K3");
    let found = attackers(&p, sq("e1"), Color::Black);
    assert_eq!(found.len(), 2);
    assert!(found.contains(&p.piece_at(sq("e8")).unwrap()));
    assert!(found.contains(&p.piece_at(sq("f3")).unwrap()));
}

#[test]
fn squares_between_lines() {
    assert_eq!(squares_between(sq("a1"), sq("d4")), vec![sq("b2"), sq("c3")]);
    assert_eq!(squares_between(sq("e8"), sq("e5")), vec![sq("e7"), sq("e6")]);
    assert!(squares_between(sq("a1"), sq("b3")).is_empty());
    assert!(squares_between(sq("a1"), sq("a2")).is_empty());
}
