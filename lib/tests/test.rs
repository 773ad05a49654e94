use polyomino_lib::{
    candidates_from_one_added_cell, is_isomorphic, Config, Error as PolyominoError, Generation,
    Grid, Symmetry, Transform,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::error::Error;

/// A random grid with at least one occupied cell.
fn random_grid(rng: &mut StdRng) -> Grid {
    let rows = rng.gen_range(1..=6);
    let cols = rng.gen_range(1..=6);
    let mut grid = Grid::new(rows, cols);
    for i in 0..rows {
        for j in 0..cols {
            grid.set((i, j), rng.gen_bool(0.3)).unwrap();
        }
    }
    let i = rng.gen_range(0..rows);
    let j = rng.gen_range(0..cols);
    grid.set((i, j), true).unwrap();
    grid
}

#[test]
fn known_counts() -> Result<(), Box<dyn Error>> {
    let counts: Vec<usize> = Config::new(7)
        .generations()?
        .map(|g| g.map(|g| g.len()))
        .collect::<Result<_, _>>()?;
    assert_eq!(
        counts,
        vec![1, 1, 2, 5, 12, 35, 108],
        "free polyomino counts deviate from OEIS A000105"
    );
    Ok(())
}

#[test]
fn every_generation_verifies() -> Result<(), Box<dyn Error>> {
    for generation in Config::new(6).generations()? {
        generation?.verify()?;
    }
    Ok(())
}

#[test]
fn seed_gives_domino() -> Result<(), Box<dyn Error>> {
    let next = Generation::seed().next_generation()?;
    assert_eq!(next.size(), 2);
    assert_eq!(next.len(), 1);
    let domino = &next.shapes()[0];
    assert!(domino.to_string() == "oo\n" || domino.to_string() == "o\no\n");
    Ok(())
}

#[test]
fn domino_to_trominoes() -> Result<(), Box<dyn Error>> {
    let domino: Grid = "oo".parse()?;
    assert_eq!(candidates_from_one_added_cell(&domino)?.len(), 6);

    let trominoes = Generation::seed().next_generation()?.next_generation()?;
    assert_eq!(trominoes.len(), 2);
    let straight: Grid = "ooo".parse()?;
    let l: Grid = "oo\no.".parse()?;
    assert!(trominoes.iter().any(|g| is_isomorphic(g, &straight)));
    assert!(trominoes.iter().any(|g| is_isomorphic(g, &l)));
    Ok(())
}

#[test]
fn generations_are_canonical_and_distinct() -> Result<(), Box<dyn Error>> {
    let generation = Generation::of_size(6)?;
    for (k, a) in generation.iter().enumerate() {
        assert!(a.is_canonical());
        assert_eq!(a.cell_count(), 6);
        for b in &generation.shapes()[k + 1..] {
            assert!(!is_isomorphic(a, b), "{:?}{:?}", a, b);
        }
    }
    Ok(())
}

#[test]
fn pentomino_symmetries() -> Result<(), Box<dyn Error>> {
    let pentominoes = Generation::of_size(5)?;
    let count = |sym: Symmetry| pentominoes.iter().filter(|g| g.symmetry() == sym).count();
    // F, L, N, P, Y have no symmetry; only X has all 8.
    assert_eq!(count(Symmetry::C1), 5);
    assert_eq!(count(Symmetry::D8), 1);
    // Each shape appears in as many fixed orientations as the index of its group.
    let fixed: usize = pentominoes
        .iter()
        .map(|g| g.symmetry().orientations())
        .sum();
    assert_eq!(fixed, 63);
    Ok(())
}

#[test]
fn isomorphic_to_rotation_not_to_other_shape() -> Result<(), Box<dyn Error>> {
    let l: Grid = "o.\no.\noo".parse()?;
    let s: Grid = ".o\noo\no.".parse()?;
    assert!(is_isomorphic(&l, &l.rotate(1)));
    assert!(!is_isomorphic(&l, &s));
    Ok(())
}

#[test]
fn reduce_is_idempotent() -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(105);
    for _ in 0..200 {
        let grid = random_grid(&mut rng);
        let reduced = grid.reduce()?;
        assert!(reduced.is_canonical());
        assert_eq!(reduced.cell_count(), grid.cell_count());
        assert_eq!(reduced.reduce()?, reduced);
    }
    Ok(())
}

#[test]
fn transforms_are_involutions() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..200 {
        let grid = random_grid(&mut rng);
        assert_eq!(grid.reflect_horizontal().reflect_horizontal(), grid);
        assert_eq!(grid.reflect_vertical().reflect_vertical(), grid);
        assert_eq!(grid.rotate(1).rotate(1).rotate(1).rotate(1), grid);
        assert_eq!(
            grid.reflect_horizontal().reflect_vertical(),
            grid.transformed(Transform::Rotate180)
        );
    }
}

#[test]
fn expansion_adds_one_cell() -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(4655);
    for _ in 0..100 {
        let grid = random_grid(&mut rng).reduce()?;
        for candidate in candidates_from_one_added_cell(&grid)? {
            assert_eq!(candidate.cell_count(), grid.cell_count() + 1);
            assert!(candidate.is_canonical());
        }
    }
    Ok(())
}

#[test]
fn empty_grid_cannot_be_reduced() {
    assert_eq!(Grid::new(2, 2).reduce(), Err(PolyominoError::EmptyShapeError));
}

#[test]
#[cfg(feature = "serde")]
fn ser() -> Result<(), Box<dyn Error>> {
    let generation = Generation::of_size(4)?;
    let json = serde_json::to_string(&generation)?;
    let restored: Generation = serde_json::from_str(&json)?;
    assert_eq!(restored, generation);

    let grid: Grid = serde_json::from_str(r#"{"rows": ["oo.", ".oo"]}"#)?;
    assert_eq!(grid.symmetry(), Symmetry::C2);

    let bad = r#"{"size": 2, "count": 1, "shapes": [{"rows": ["ooo"]}]}"#;
    assert!(serde_json::from_str::<Generation>(bad).is_err());

    // Two orientations of the L-tromino.
    let repeated = r#"{
        "size": 3,
        "count": 2,
        "shapes": [{"rows": ["oo", "o."]}, {"rows": ["oo", ".o"]}]
    }"#;
    assert!(serde_json::from_str::<Generation>(repeated).is_err());

    let diagonal = r#"{"size": 2, "count": 1, "shapes": [{"rows": ["o.", ".o"]}]}"#;
    assert!(serde_json::from_str::<Generation>(diagonal).is_err());

    let trominoes = r#"{
        "size": 3,
        "count": 2,
        "shapes": [{"rows": ["ooo"]}, {"rows": ["oo", ".o"]}]
    }"#;
    assert_eq!(serde_json::from_str::<Generation>(trominoes)?.len(), 2);
    Ok(())
}
