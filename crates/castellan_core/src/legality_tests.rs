use super::*;

fn sq(name: &str) -> Square {
    Square::parse(name).unwrap()
}

fn pos(placement: &str) -> Position {
    Position::from_placement(placement).unwrap()
}

fn legal_names(p: &Position, from: &str) -> Vec<String> {
    let id = p.piece_at(sq(from)).unwrap();
    let mut v: Vec<String> = legal_moves(p, id).iter().map(|s| s.to_string()).collect();
    v.sort();
    v
}

#[test]
fn test_startpos_counts() {
    let p = Position::standard();
    assert_eq!(legal_moves_for(&p, Color::White).len(), 20);
    assert_eq!(legal_moves_for(&p, Color::Black).len(), 20);
}

#[test]
fn test_kiwipete_count() {
    let p = pos("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R");
    assert_eq!(legal_moves_for(&p, Color::White).len(), 48);
}

#[test]
fn test_own_pieces_are_never_targets() {
    let p = Position::standard();
    assert_eq!(legal_names(&p, "b1"), vec!["a3", "c3"]);
    assert!(legal_names(&p, "a1").is_empty());
}

#[test]
fn test_pinned_piece_cannot_leave_the_line() {
    let p = pos("4k3/4r3/8/8/8/8/4B3/4K3");
    assert!(legal_names(&p, "e2").is_empty());

    // A pinned rook may still slide along the pin.
    let p = pos("4k3/4r3/8/8/8/8/4R3/4K3");
    assert_eq!(
        legal_names(&p, "e2"),
        vec!["e3", "e4", "e5", "e6", "e7"]
    );
}

#[test]
fn test_king_is_never_captured() {
    let p = pos("4k3/8/8/8/8/8/8/4R1K1");
    let rook_moves = legal_names(&p, "e1");
    assert!(rook_moves.contains(&"e7".to_string()));
    assert!(!rook_moves.contains(&"e8".to_string()));
}

#[test]
fn test_king_cannot_step_into_attack() {
    let p = pos("4k3/8/8/8/8/8/3r4/7K");
    // Rook d2 covers the second rank and the d-file.
    assert_eq!(legal_names(&p, "h1"), vec!["g1"]);
}

#[test]
fn test_king_cannot_retreat_along_checking_ray() {
    // Rook a4 checks d4; e4 sits behind the king on the same ray.
    let p = pos("7k/8/8/8/r2K4/8/8/8");
    let moves = legal_names(&p, "d4");
    assert!(!moves.contains(&"e4".to_string()));
    assert!(!moves.contains(&"c4".to_string()));
    assert!(moves.contains(&"d5".to_string()));
}

#[test]
fn test_castling_through_attacked_square() {
    // Rook f5 covers f1: short castle passes through it, long castle is fine.
    let p = pos("4k3/8/8/5r2/8/8/8/R3K2R");
    let moves = legal_names(&p, "e1");
    assert!(!moves.contains(&"g1".to_string()));
    assert!(moves.contains(&"c1".to_string()));
    assert!(!moves.contains(&"f1".to_string()));
}

#[test]
fn test_castling_into_attacked_square() {
    let p = pos("4k3/8/8/6r1/8/8/8/R3K2R");
    let moves = legal_names(&p, "e1");
    assert!(!moves.contains(&"g1".to_string()));
    assert!(moves.contains(&"c1".to_string()));
}

#[test]
fn test_long_castle_ignores_attack_on_b_file() {
    let p = pos("4k3/8/8/1r6/8/8/8/R3K2R");
    let moves = legal_names(&p, "e1");
    assert!(moves.contains(&"c1".to_string()));
    assert!(moves.contains(&"g1".to_string()));
}

#[test]
fn test_en_passant_exposing_king_is_illegal() {
    let mut p = pos("4k3/3p4/8/K3P2r/8/8/8/8");
    let black_pawn = p.piece_at(sq("d7")).unwrap();
    p.make_move(black_pawn, sq("d5"));
    // Capturing en passant would clear both pawns off the fifth rank.
    assert_eq!(legal_names(&p, "e5"), vec!["e6"]);
}

#[test]
fn test_en_passant_is_legal_when_safe() {
    let mut p = pos("4k3/3p4/8/4P3/8/8/8/4K3");
    let black_pawn = p.piece_at(sq("d7")).unwrap();
    p.make_move(black_pawn, sq("d5"));
    assert_eq!(legal_names(&p, "e5"), vec!["d6", "e6"]);
}

#[test]
fn test_is_legal_move_matches_legal_moves() {
    let p = pos("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R");
    for color in Color::BOTH {
        for id in p.pieces_of(color) {
            let legal = legal_moves(&p, id);
            for to in Square::all() {
                assert_eq!(
                    is_legal_move(&p, id, to),
                    legal.contains(&to),
                    "{:?} to {to}",
                    p.piece(id)
                );
            }
        }
    }
}

#[test]
fn test_has_legal_move() {
    assert!(has_legal_move(&Position::standard(), Color::White));
    // Black king a8 boxed in by the queen on b6.
    let p = pos("k7/8/1Q6/8/8/8/8/7K");
    assert!(!has_legal_move(&p, Color::Black));
    assert!(has_legal_move(&p, Color::White));
}

#[test]
fn test_legality_leaves_position_untouched() {
    let p = pos("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R");
    let before = p.clone();
    let _ = legal_moves_for(&p, Color::White);
    let _ = legal_moves_for(&p, Color::Black);
    assert_eq!(p, before);
}
