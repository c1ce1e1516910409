use std::collections::HashSet;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::SeedableRng;
use spincube_core::*;

fn arbitrary_move() -> impl Strategy<Value = Move> {
    (0..Face::COUNT, any::<bool>()).prop_map(|(i, ccw)| {
        let face = Face::iter().nth(i).unwrap();
        let direction = if ccw { Direction::Ccw } else { Direction::Cw };
        Move::new(face, direction)
    })
}

fn assert_well_formed(cube: &Cube) {
    let positions: HashSet<GridPos> = cube.pieces().iter().map(Piece::pos).collect();
    assert_eq!(positions.len(), PIECE_COUNT, "positions must be distinct");
    assert!(!positions.contains(&GridPos::CORE));

    for face in Face::iter() {
        let slice = cube.slice(face);
        assert_eq!(slice.len(), SLICE_SIZE);
        for &id in slice {
            assert!(cube.piece(id).unwrap().pos().is_on(face));
        }
    }
    for piece in cube.pieces() {
        assert_eq!(
            cube.slices_of(piece.id()).len(),
            piece.pos().exterior_face_count(),
        );
        // Corners stay corners and edges stay edges.
        assert_eq!(
            piece.pos().exterior_face_count(),
            piece.home().exterior_face_count(),
        );
    }
}

proptest! {
    #[test]
    fn proptest_moves_preserve_grid(moves in prop::collection::vec(arbitrary_move(), 0..40)) {
        let mut cube = Cube::new();
        for mv in moves {
            cube.apply_move(mv).unwrap();
            assert_well_formed(&cube);
        }
    }

    #[test]
    fn proptest_move_then_reverse_is_identity(
        setup in prop::collection::vec(arbitrary_move(), 0..20),
        mv in arbitrary_move(),
    ) {
        let mut cube = Cube::new();
        cube.apply_moves(setup).unwrap();
        let before = cube.clone();
        cube.apply_move(mv).unwrap();
        cube.apply_move(mv.rev()).unwrap();
        assert_eq!(cube, before);
    }

    #[test]
    fn proptest_quarter_turn_has_order_four(
        setup in prop::collection::vec(arbitrary_move(), 0..20),
        mv in arbitrary_move(),
    ) {
        let mut cube = Cube::new();
        cube.apply_moves(setup).unwrap();
        let before = cube.clone();
        for i in 1..=4 {
            cube.apply_move(mv).unwrap();
            if i < 4 {
                assert_ne!(cube, before);
            }
        }
        assert_eq!(cube, before);
    }

    #[test]
    fn proptest_reset_restores_solved(moves in prop::collection::vec(arbitrary_move(), 0..40)) {
        let mut cube = Cube::new();
        cube.apply_moves(moves).unwrap();
        cube.reset();
        assert_eq!(cube, Cube::new());
        assert!(cube.is_solved());
        cube.reset();
        assert_eq!(cube, Cube::new());
    }

    #[test]
    fn proptest_stickers_face_outward(moves in prop::collection::vec(arbitrary_move(), 0..40)) {
        let mut cube = Cube::new();
        cube.apply_moves(moves).unwrap();
        for piece in cube.pieces() {
            for face in Face::iter() {
                let has_sticker = piece.sticker_facing(face).is_some();
                assert_eq!(has_sticker, piece.pos().is_on(face));
            }
        }
    }
}

#[test]
fn test_random_moves_are_reproducible() {
    let mut rng1 = rand_chacha::ChaCha8Rng::seed_from_u64(42);
    let mut rng2 = rand_chacha::ChaCha8Rng::seed_from_u64(42);
    let a: Vec<Move> = (0..SCRAMBLE_MOVE_COUNT).map(|_| Move::random(&mut rng1)).collect();
    let b: Vec<Move> = (0..SCRAMBLE_MOVE_COUNT).map(|_| Move::random(&mut rng2)).collect();
    assert_eq!(a, b);
}

#[test]
fn test_sexy_move_has_order_six() {
    let sexy = parse_moves("R U R' U'").unwrap();
    let mut cube = Cube::new();
    for _ in 0..6 {
        assert_well_formed(&cube);
        cube.apply_moves(sexy.iter().copied()).unwrap();
    }
    assert!(cube.is_reset());
}
