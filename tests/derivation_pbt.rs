use gridwatch_lib::model::grid::compose_grid;
use gridwatch_lib::model::leaderboard::aggregate;
use gridwatch_lib::model::snapshot::RobotView;
use gridwatch_lib::model::vision::{compute_vision_set, VisionSet};
use proptest::prelude::*;
use std::collections::HashSet;

prop_compose! {
    fn arb_robot()(
        name in "[A-Z]{2}",
        x in -2i64..20,
        y in -2i64..20,
        direction in 0u8..4,
        vision in prop::sample::select(vec![0u32, 4, 8]),
        score in -100i64..1000
    ) -> RobotView {
        RobotView {
            name,
            x,
            y,
            color: "#e6194b".to_string(),
            direction,
            vision,
            score,
        }
    }
}

proptest! {
    #[test]
    fn vision_set_is_permutation_invariant(
        (robots, shuffled) in prop::collection::vec(arb_robot(), 0..12)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        prop_assert_eq!(compute_vision_set(&robots), compute_vision_set(&shuffled));
    }

    #[test]
    fn vision_set_is_the_union_of_per_robot_footprints(
        robots in prop::collection::vec(arb_robot(), 0..12)
    ) {
        let combined = compute_vision_set(&robots);
        let mut expected = VisionSet::new();
        for r in &robots {
            expected.extend(compute_vision_set(std::slice::from_ref(r)));
        }
        prop_assert_eq!(combined, expected);
    }

    #[test]
    fn vision_four_footprint_is_exactly_orthogonal(
        x in -5i64..25, y in -5i64..25
    ) {
        let robot = RobotView {
            name: "VV".into(), x, y, color: "#ffffff".into(),
            direction: 0, vision: 4, score: 0,
        };
        let set = compute_vision_set(std::slice::from_ref(&robot));
        let expected: VisionSet =
            [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)].into_iter().collect();
        prop_assert_eq!(set, expected);
    }

    #[test]
    fn grid_is_always_row_major_and_complete(
        size in 1u32..24,
        vision in prop::collection::hash_set((-2i64..26, -2i64..26), 0..40)
    ) {
        let cells = compose_grid(size, &vision);
        prop_assert_eq!(cells.len(), (size * size) as usize);
        for (i, cell) in cells.iter().enumerate() {
            prop_assert_eq!(cell.x, (i as i64) % size as i64);
            prop_assert_eq!(cell.y, (i as i64) / size as i64);
            prop_assert_eq!(cell.illuminated, vision.contains(&(cell.x, cell.y)));
        }
    }

    #[test]
    fn aggregate_preserves_total_score_and_name_uniqueness(
        robots in prop::collection::vec(arb_robot(), 0..20)
    ) {
        // Table size large enough that no entrant is truncated away.
        let table = aggregate(&robots, robots.len() + 1);

        let names: HashSet<&str> = table.iter().map(|e| e.name.as_str()).collect();
        prop_assert_eq!(names.len(), table.len(), "names unique within table");

        let table_total: i64 = table.iter().map(|e| e.score).sum();
        let feed_total: i64 = robots.iter().map(|r| r.score).sum();
        prop_assert_eq!(table_total, feed_total);

        for pair in table.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score, "descending order");
        }
    }

    #[test]
    fn aggregate_truncation_keeps_the_highest_scores(
        robots in prop::collection::vec(arb_robot(), 0..20),
        top_n in 0usize..10
    ) {
        let full = aggregate(&robots, robots.len() + 1);
        let truncated = aggregate(&robots, top_n);
        prop_assert_eq!(truncated.len(), full.len().min(top_n));
        prop_assert_eq!(&truncated[..], &full[..truncated.len()]);
    }

    #[test]
    fn derivations_are_pure(robots in prop::collection::vec(arb_robot(), 0..12)) {
        prop_assert_eq!(compute_vision_set(&robots), compute_vision_set(&robots));
        prop_assert_eq!(aggregate(&robots, 8), aggregate(&robots, 8));
    }
}
