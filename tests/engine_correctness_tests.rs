//! Поведение четырёх представлений на фиксированных наборах.

use datebench::{
    AnyEngine, CalendarDate, DateDataset, DateEngine, EngineError, HashSetEngine,
    OrderedListEngine, PriorityQueueEngine, Reorder, Representation, SearchOutcome,
    SortedArrayEngine,
};
use rstest::{fixture, rstest};

fn date(s: &str) -> CalendarDate {
    s.parse().unwrap()
}

#[fixture]
fn sample() -> DateDataset {
    ["2024-03-10", "2024-01-05", "2024-03-10", "2024-07-01"]
        .into_iter()
        .map(date)
        .collect()
}

#[rstest]
#[case(Representation::Array)]
#[case(Representation::List)]
#[case(Representation::PriorityQueue)]
#[case(Representation::HashSet)]
fn min_max_is_identical_everywhere(
    sample: DateDataset,
    #[case] representation: Representation,
) {
    let engine = AnyEngine::build(representation, &sample);
    let extrema = engine.min_max().unwrap();
    assert_eq!(extrema.min, date("2024-01-05"));
    assert_eq!(extrema.max, date("2024-07-01"));
}

#[rstest]
#[case(Representation::Array)]
#[case(Representation::List)]
#[case(Representation::PriorityQueue)]
#[case(Representation::HashSet)]
fn empty_representation_reports_empty(#[case] representation: Representation) {
    let engine = AnyEngine::build(representation, &DateDataset::default());
    assert!(engine.is_empty());

    let err = engine.min_max().unwrap_err();
    assert!(err.is_empty_structure());
    assert_eq!(err.to_string(), format!("{representation} is empty"));
}

#[rstest]
#[case(Representation::Array)]
#[case(Representation::List)]
#[case(Representation::PriorityQueue)]
#[case(Representation::HashSet)]
fn absent_target_is_not_found(
    sample: DateDataset,
    #[case] representation: Representation,
) {
    let mut engine = AnyEngine::build(representation, &sample);
    engine.reorder();
    assert_eq!(engine.search(date("1999-12-31")), SearchOutcome::Absent);
    assert_eq!(engine.min_max().unwrap().min, date("2024-01-05"));
}

#[rstest]
fn sorted_array_finds_target_among_duplicates(sample: DateDataset) {
    let mut array = SortedArrayEngine::from_dataset(&sample);
    array.sort();

    assert_eq!(
        array.as_slice(),
        &[
            date("2024-01-05"),
            date("2024-03-10"),
            date("2024-03-10"),
            date("2024-07-01")
        ]
    );
    let idx = array.search(date("2024-03-10")).index().unwrap();
    assert!(idx == 1 || idx == 2);
}

#[rstest]
fn list_search_after_sort(sample: DateDataset) {
    let mut list = OrderedListEngine::from_dataset(&sample);
    assert!(!list.is_sorted());

    // До сортировки гарантировано только: найдено ⇒ по индексу лежит цель.
    if let Some(i) = list.search(date("2024-03-10")).index() {
        assert_eq!(list.to_vec()[i], date("2024-03-10"));
    }

    assert_eq!(list.reorder(), Reorder::Sorted);
    assert!(list.is_sorted());
    assert!(list.search(date("2024-03-10")).is_found());
}

#[rstest]
fn queue_head_operations(sample: DateDataset) {
    let mut queue = PriorityQueueEngine::from_dataset(&sample);
    assert_eq!(queue.search(date("2024-07-01")), SearchOutcome::Present);
    assert_eq!(queue.reorder(), Reorder::Unsupported);

    let head = queue.head_operations().unwrap();
    assert_eq!(head.peeked, date("2024-01-05"));
    assert_eq!(head.polled, date("2024-01-05"));
    assert_eq!(head.next, Some(date("2024-03-10")));
    assert_eq!(queue.len(), 3);
}

#[test]
fn empty_queue_head_operations_do_not_mutate() {
    let mut queue = PriorityQueueEngine::from_dataset(&DateDataset::default());
    let err = queue.head_operations().unwrap_err();
    assert!(matches!(err, EngineError::EmptyStructure { .. }));
    assert!(queue.is_empty());
}

#[rstest]
fn set_collapses_duplicates(sample: DateDataset) {
    let set = HashSetEngine::from_dataset(&sample);
    assert_eq!(set.len(), 3);

    let check = set.cross_check(&sample);
    assert!(check.all_present);
    assert_eq!(check.source_len, 4);
    assert_eq!(check.duplicates_collapsed(), 1);
}

#[rstest]
fn engines_do_not_share_state(sample: DateDataset) {
    let mut queue = PriorityQueueEngine::from_dataset(&sample);
    let _ = queue.head_operations().unwrap();
    let mut array = SortedArrayEngine::from_dataset(&sample);
    array.sort();

    assert_eq!(sample.len(), 4);
    assert_eq!(sample[0], date("2024-03-10"));
    assert_eq!(PriorityQueueEngine::from_dataset(&sample).len(), 4);
}
