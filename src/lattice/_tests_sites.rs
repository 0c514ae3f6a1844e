#[cfg(test)]
mod tests {
    use super::super::honeycomb::SQRT_3;
    use super::super::sites::{Bond, SiteGrid, SiteKind, orbital_indices};
    use approx::assert_abs_diff_eq;
    use num_complex::Complex64;
    use std::collections::BTreeSet;

    #[test]
    fn test_periodic_inside_bounds() {
        let grid = SiteGrid::new(2, 4, 1);
        assert_eq!(grid.periodic([0, 0], [1, 0]), [1, 0]);
    }

    #[test]
    fn test_periodic_outside_bounds() {
        let grid = SiteGrid::new(2, 4, 1);

        assert_eq!(grid.periodic([0, 0], [2, 0]), [0, 0]);
        assert_eq!(grid.periodic([0, 0], [0, 4]), [0, 0]);
        assert_eq!(grid.periodic([0, 0], [2, 4]), [0, 0]);
    }

    #[test]
    fn test_periodic_negative_steps_wrap_forward() {
        let grid = SiteGrid::new(2, 4, 1);

        assert_eq!(grid.periodic([0, 0], [-1, -1]), [1, 3]);
    }

    #[test]
    fn test_periodic_with_orbitals() {
        let grid = SiteGrid::new(2, 4, 2);

        assert_eq!(grid.periodic([0, 0], [2, 0]), [0, 0]);
        assert_eq!(grid.periodic([0, 0], [0, 4]), [0, 0]);
        assert_eq!(grid.periodic([0, 0], [2, 4]), [0, 0]);
        // One row step skips the partner orbital
        assert_eq!(grid.periodic([0, 1], [0, 1]), [0, 3]);
    }

    #[test]
    fn test_sequential_index() {
        let grid = SiteGrid::new(2, 4, 1);

        assert_eq!(grid.sequential_index([0, 0]), 0);
        assert_eq!(grid.sequential_index([1, 0]), grid.ny);
        assert_eq!(grid.sequential_index([0, 1]), 1);
    }

    #[test]
    fn test_sequential_index_with_orbitals() {
        let grid = SiteGrid::new(2, 4, 2);

        assert_eq!(grid.sequential_index([0, 0]), 0);
        assert_eq!(grid.sequential_index([1, 0]), grid.orbitals * grid.ny);
        assert_eq!(grid.sequential_index([0, 1]), 1);
        assert_eq!(grid.len(), 16);
    }

    #[test]
    fn test_positions_follow_sequential_order() {
        let grid = SiteGrid::new(3, 2, 2);

        for (expected, position) in grid.positions().enumerate() {
            assert_eq!(grid.sequential_index(position), expected);
        }
        assert_eq!(grid.positions().count(), grid.len());
    }

    #[test]
    fn test_site_kind_cycles_per_site() {
        let single = SiteGrid::new(2, 4, 1);
        let kinds: Vec<SiteKind> = (0..5).map(|i| single.site_kind(i)).collect();
        assert_eq!(
            kinds,
            vec![SiteKind::A, SiteKind::B, SiteKind::C, SiteKind::D, SiteKind::A]
        );

        // Both orbitals of a site share its kind
        let double = SiteGrid::new(2, 4, 2);
        assert_eq!(double.site_kind(0), SiteKind::A);
        assert_eq!(double.site_kind(1), SiteKind::A);
        assert_eq!(double.site_kind(2), SiteKind::B);
        assert_eq!(double.site_kind(7), SiteKind::D);
    }

    #[test]
    fn test_site_kind_tables() {
        assert_eq!(SiteKind::A.neighbor_offsets(), [[0, 1], [-1, 1], [0, -1]]);
        assert_eq!(SiteKind::D.neighbor_offsets(), [[-1, -1], [0, -1], [0, 1]]);
        assert_eq!(SiteKind::C.bond_directions(), [1, 2, 3]);
        assert_eq!(SiteKind::B.bond_directions(), [-1, -2, -3]);
    }

    #[test]
    fn test_hopping_bonds_are_reciprocal() {
        let grid = SiteGrid::new(4, 8, 1);
        let bonds = grid.hopping_bonds(&BTreeSet::new());

        for bond in &bonds {
            assert!(
                bonds
                    .iter()
                    .any(|back| back.from == bond.to && back.to == bond.from && back.direction == -bond.direction),
                "no reverse bond for {:?}",
                bond
            );
        }
    }

    #[test]
    fn test_rashba_coefficients() {
        let up = SiteKind::A.rashba_coefficients(true);
        assert_abs_diff_eq!(up[0].re, -0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(up[0].im, 0.5 * SQRT_3, epsilon = 1e-15);
        assert_abs_diff_eq!(up[1].im, -0.5 * SQRT_3, epsilon = 1e-15);
        assert_eq!(up[2], Complex64::new(-1.0, 0.0));

        let down = SiteKind::A.rashba_coefficients(false);
        assert_eq!(down[0], Complex64::new(0.5, 0.5 * SQRT_3));
        assert_eq!(down[2], Complex64::new(1.0, 0.0));

        // B and D carry the opposite sign of A and C
        for spin_up in [true, false] {
            let a = SiteKind::A.rashba_coefficients(spin_up);
            let b = SiteKind::B.rashba_coefficients(spin_up);
            assert_eq!(SiteKind::C.rashba_coefficients(spin_up), a);
            assert_eq!(SiteKind::D.rashba_coefficients(spin_up), b);
            for (ca, cb) in a.iter().zip(b.iter()) {
                assert_eq!(*ca, -*cb);
            }
        }
    }

    #[test]
    fn test_orbital_indices() {
        assert_eq!(orbital_indices(&[1, 3], 1), BTreeSet::from([1, 3]));
        assert_eq!(orbital_indices(&[1, 3], 2), BTreeSet::from([1, 2, 5, 6]));
        assert!(orbital_indices(&[], 2).is_empty());

        let grid = SiteGrid::new(2, 4, 2);
        assert_eq!(grid.orbital_indices(&[2]), BTreeSet::from([3, 4]));
    }

    #[test]
    fn test_hopping_bonds_of_first_site() {
        let grid = SiteGrid::new(2, 4, 1);
        let bonds = grid.hopping_bonds(&BTreeSet::new());

        assert_eq!(bonds.len(), 3 * grid.len());

        let first: Vec<(i8, usize, usize)> = bonds[..3].iter().map(|b| (b.direction, b.from, b.to)).collect();
        assert_eq!(first, vec![(1, 1, 2), (2, 1, 6), (3, 1, 4)]);
        assert!(bonds.iter().all(|b| !b.removed));
        assert!(bonds.iter().all(|b| b.coupling == Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_hopping_bonds_flag_removed_orbitals() {
        let grid = SiteGrid::new(2, 4, 1);
        let removed = grid.orbital_indices(&[6]);
        let bonds = grid.hopping_bonds(&removed);

        assert!(bonds[1].removed);
        assert!(!bonds[0].removed);
        assert!(bonds.iter().filter(|b| b.removed).all(|b| b.from == 6 || b.to == 6));
        // Site 6 has three bonds out and three bonds in
        assert_eq!(bonds.iter().filter(|b| b.removed).count(), 6);
    }

    #[test]
    fn test_bond_table_takes_one_based_site_numbers() {
        let grid = SiteGrid::new(2, 4, 1);
        let bonds = grid.bond_table(&[6], false);

        assert_eq!(bonds, grid.hopping_bonds(&BTreeSet::from([6])));
        assert_eq!(bonds.iter().filter(|b| b.removed).count(), 6);
        assert!(bonds.iter().all(|b| b.from != b.to));

        // Site 0 does not exist in 1-based numbering
        assert!(grid.bond_table(&[0], false).iter().all(|b| !b.removed));
    }

    #[test]
    fn test_bond_table_removes_every_orbital_of_a_site() {
        let grid = SiteGrid::new(2, 4, 2);
        let bonds = grid.bond_table(&[1], true);
        let touches_site = |b: &&Bond| [1, 2].contains(&b.from) || [1, 2].contains(&b.to);

        assert_eq!(bonds, grid.rashba_bonds(&BTreeSet::from([1, 2])));
        assert!(bonds.iter().filter(|b| b.removed).all(|b| touches_site(&b)));
        assert_eq!(bonds.iter().filter(touches_site).filter(|b| !b.removed).count(), 0);
        assert_eq!(bonds.iter().filter(|b| b.removed && b.from <= 2).count(), 6);
    }

    #[test]
    fn test_rashba_bonds_pair_opposite_spins() {
        let grid = SiteGrid::new(2, 4, 2);
        let bonds = grid.rashba_bonds(&BTreeSet::new());

        assert_eq!(bonds.len(), 3 * grid.len());

        // Index 0 is spin up on an A site; its first neighbor is at row 2 (index 2)
        assert_eq!((bonds[0].from, bonds[0].to), (1, 4));
        assert_eq!(bonds[0].coupling, SiteKind::A.rashba_coefficients(true)[0]);

        // Index 1 is spin down on the same site
        assert_eq!((bonds[3].from, bonds[3].to), (2, 3));
        assert_eq!(bonds[3].coupling, SiteKind::A.rashba_coefficients(false)[0]);
    }

    #[test]
    #[should_panic(expected = "positive")]
    fn test_empty_grid_panics() {
        SiteGrid::new(0, 4, 1);
    }
}
