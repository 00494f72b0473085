// End-to-end tests: text input through builders and playback

use std::collections::BTreeSet;
use std::time::Instant;

use tracetty::algorithms::backtracking::combination_sum;
use tracetty::algorithms::course_schedule::{course_schedule, Outcome, ScheduleKind};
use tracetty::algorithms::merge_sort::{merge_sort, SortKind};
use tracetty::algorithms::rotate::rotate;
use tracetty::algorithms::sliding_window::{longest_substring, WindowKind};
use tracetty::algorithms::spiral::spiral_order;
use tracetty::algorithms::three_sum::{three_sum, ThreeSumKind};
use tracetty::algorithms::tree_recursion::{lowest_common_ancestor, max_path_sum};
use tracetty::algorithms::Algorithm;
use tracetty::input::{parse_level_order_tree, InputParseError};
use tracetty::playback::{PlaybackConfig, PlaybackController, PlaybackMode, Workbench};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn test_every_sample_builds_a_bracketed_trace() {
    for algorithm in Algorithm::ALL {
        let workbench = Workbench::with_sample(algorithm).expect("sample should parse");
        let views = workbench.session().views();

        assert!(views.len() >= 2, "{} is too short", algorithm);
        assert_eq!(views[0].kind, "init", "{} must start with init", algorithm);
        let last = views.last().map(|v| v.kind);
        assert_eq!(last, Some("done"), "{} must end with done", algorithm);
        for (position, view) in views.iter().enumerate() {
            assert_eq!(view.index, position + 1);
            assert_eq!(view.total, views.len());
        }
    }
}

#[test]
fn test_builders_are_deterministic() {
    for algorithm in Algorithm::ALL {
        let a = Workbench::with_sample(algorithm).unwrap();
        let b = Workbench::with_sample(algorithm).unwrap();
        assert_eq!(a.session().views(), b.session().views(), "{}", algorithm);
    }
}

#[test]
fn test_longest_substring_answer() {
    let trace = longest_substring(&chars("abcabcbb"));
    let last = trace.last().unwrap();
    assert_eq!(last.snapshot.best_len, 3);
    assert_eq!(last.snapshot.best(), "abc");
}

#[test]
fn test_empty_string_still_has_init_and_done() {
    let trace = longest_substring(&[]);
    assert_eq!(trace.len(), 2);
    assert_eq!(trace.first().unwrap().kind, WindowKind::Init);
    assert_eq!(trace.last().unwrap().kind, WindowKind::Done);
    assert_eq!(trace.last().unwrap().snapshot.best_len, 0);
}

#[test]
fn test_three_sum_answer() {
    let trace = three_sum(&[-1, 0, 1, 2, -1, -4]);
    let found: BTreeSet<[i64; 3]> = trace
        .last()
        .unwrap()
        .snapshot
        .triplets
        .iter()
        .copied()
        .collect();
    let expected: BTreeSet<[i64; 3]> = [[-1, -1, 2], [-1, 0, 1]].into_iter().collect();
    assert_eq!(found, expected);
    assert_eq!(trace.count_kind(ThreeSumKind::Found), 2);
}

#[test]
fn test_three_sum_single_number_is_insufficient() {
    let trace = three_sum(&[5]);
    let kinds: Vec<ThreeSumKind> = trace.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![ThreeSumKind::Init, ThreeSumKind::Insufficient]);
    assert!(trace.last().unwrap().snapshot.triplets.is_empty());
}

#[test]
fn test_course_schedule_outcomes() {
    let ok = course_schedule(4, &[(1, 0), (2, 0), (3, 1), (3, 2)]);
    let last = &ok.last().unwrap().snapshot;
    assert_eq!(last.outcome, Outcome::Success);
    assert_eq!(last.order.len(), 4);
    assert_eq!(last.order[0], 0);
    assert_eq!(last.order[3], 3);

    let cycle = course_schedule(2, &[(1, 0), (0, 1)]);
    assert_eq!(cycle.last().unwrap().snapshot.outcome, Outcome::Cycle);
    assert_eq!(cycle.count_kind(ScheduleKind::Dequeue), 0);
}

#[test]
fn test_tree_answers() {
    let tree = parse_level_order_tree("[3,5,1,6,2,0,8,null,null,7,4]", 31).unwrap();
    let trace = lowest_common_ancestor(&tree, 7, 4);
    let answer = trace.last().unwrap().snapshot.answer;
    assert_eq!(answer.map(|id| tree.nodes()[id].value), Some(2));

    let tree = parse_level_order_tree("[-10,9,20,null,null,15,7]", 31).unwrap();
    let trace = max_path_sum(&tree);
    assert_eq!(trace.last().unwrap().snapshot.answer, Some(42));
}

#[test]
fn test_combination_sum_answer() {
    let trace = combination_sum(&[2, 3, 6, 7], 7);
    let results = &trace.last().unwrap().snapshot.results;
    assert_eq!(results, &vec![vec![2, 2, 3], vec![7]]);
}

#[test]
fn test_merge_sort_four_elements() {
    let trace = merge_sort(&[4, 2, 1, 3]);
    assert_eq!(trace.count_kind(SortKind::Pass), 2);
    assert_eq!(trace.last().unwrap().snapshot.array, vec![1, 2, 3, 4]);
}

#[test]
fn test_spiral_three_by_three() {
    let matrix = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
    let trace = spiral_order(&matrix);
    assert_eq!(
        trace.last().unwrap().snapshot.result,
        vec![1, 2, 3, 6, 9, 8, 7, 4, 5]
    );
}

#[test]
fn test_rotate_four_times_is_identity() {
    let original = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
    let mut matrix = original.clone();
    for _ in 0..4 {
        matrix = rotate(&matrix).last().unwrap().snapshot.matrix.clone();
    }
    assert_eq!(matrix, original);
}

#[test]
fn test_cursor_only_moves_forward_while_playing() {
    let trace = merge_sort(&[5, 2, 4, 6, 1, 3]);
    let total = trace.len();
    let config = PlaybackConfig::default();
    let mut controller = PlaybackController::new(trace, config);

    let start = Instant::now();
    assert!(controller.play(start));
    let mut last = controller.cursor();
    for tick in 1..=total as u32 + 3 {
        controller.poll(start + config.delay() * tick);
        assert!(controller.cursor() >= last);
        assert!(controller.cursor() <= total);
        last = controller.cursor();
    }
    assert_eq!(controller.cursor(), total);
    assert_eq!(controller.mode(), PlaybackMode::Finished);
    assert!(controller.timer().is_none());
}

#[test]
fn test_repeated_log_sync_appends_once() {
    let trace = spiral_order(&[vec![1, 2], vec![3, 4]]);
    let mut controller = PlaybackController::new(trace, PlaybackConfig::default());
    controller.step();
    assert_eq!(controller.log().len(), 1);

    let appended: usize = (0..100).map(|_| controller.sync_log()).sum();
    assert_eq!(appended, 0);
    assert_eq!(controller.log().len(), 1);
    assert_eq!(controller.log().latest().map(|e| e.index), Some(1));
}

#[test]
fn test_workbench_apply_is_atomic() {
    let mut workbench = Workbench::with_sample(Algorithm::ThreeSum).unwrap();
    let start = Instant::now();
    let delay = workbench.config().delay();
    workbench.session_mut().play(start);
    workbench.session_mut().poll(start + delay);
    let before = workbench.session().state();
    let timer = workbench.session().timer_id();
    assert!(timer.is_some());

    let err = workbench.apply("1,2,oops", "").unwrap_err();
    assert!(matches!(err, InputParseError::NonNumeric { .. }));
    assert_eq!(workbench.session().state(), before);
    assert_eq!(workbench.session().timer_id(), timer);
    assert_eq!(workbench.input(), "-1,0,1,2,-1,-4");

    workbench.apply("0,0,0", "").unwrap();
    assert_eq!(workbench.session().state().mode, PlaybackMode::Idle);
    assert_eq!(workbench.session().state().cursor, 0);
    assert!(workbench.session().timer_id().is_none());
    assert!(workbench.session().log().is_empty());
}

#[test]
fn test_input_errors_surface_from_parse() {
    assert!(matches!(
        Algorithm::RotateMatrix.parse("[[1,2,3],[4,5,6]]", ""),
        Err(InputParseError::NotSquare { rows: 2, cols: 3 })
    ));
    assert!(matches!(
        Algorithm::CombinationSum.parse("2,3", "99"),
        Err(InputParseError::OutOfRange { value: 99, .. })
    ));
    assert!(Algorithm::MergeSort.parse("", "").is_err());
}
