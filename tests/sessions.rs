use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sort_steps::{AlgorithmId, ControllerBuilder, SessionController, SortError, Value};
use std::time::Duration;

fn fast_controller() -> SessionController {
    ControllerBuilder::new()
        .pause_interval(Duration::from_millis(1))
        .drain_delay(Duration::from_millis(0))
        .build()
}

fn numbers_in(rng: &mut StdRng, len: usize, low: Value, high: Value) -> Vec<Value> {
    (0..len).map(|_| rng.gen_range(low..high)).collect()
}

#[test]
fn superseded_sessions_never_reach_the_caller() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut controller = fast_controller();
    let low = numbers_in(&mut rng, 300, 0, 500);
    let high = numbers_in(&mut rng, 300, 500, 1000);
    for _ in 0..3 {
        let step = controller
            .start_or_advance_step(&low, AlgorithmId::BubbleSort)
            .unwrap();
        assert!(step.snapshot.values().iter().all(|&v| v < 500));
    }
    // a full run replaces the stepped session
    let run = controller.start_full(&high, AlgorithmId::MergeSort).unwrap();
    assert!(run.snapshot.values().iter().all(|&v| v >= 500));
    loop {
        let step = controller
            .start_or_advance_step(&high, AlgorithmId::InsertionSort)
            .unwrap();
        assert!(step.snapshot.values().iter().all(|&v| v >= 500));
        if step.done {
            break;
        }
    }
}

#[test]
fn switching_algorithms_restarts_from_the_first_step() {
    let mut controller = fast_controller();
    let numbers: Vec<Value> = (0..200).rev().collect();
    controller
        .start_or_advance_step(&numbers, AlgorithmId::HeapSort)
        .unwrap();
    controller
        .start_or_advance_step(&numbers, AlgorithmId::HeapSort)
        .unwrap();
    assert_eq!(controller.step_count(), 2);
    controller.cancel();
    let step = controller
        .start_or_advance_step(&numbers, AlgorithmId::QuickSort)
        .unwrap();
    assert_eq!(step.step, 1);
    assert_eq!(controller.active_algorithm(), Some(AlgorithmId::QuickSort));
}

#[test]
fn full_runs_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(8);
    let numbers = numbers_in(&mut rng, 500, 0, 1000);
    let mut expected = numbers.clone();
    expected.sort();
    let mut controller = fast_controller();
    for algorithm in AlgorithmId::ALL.iter().cloned() {
        let first = controller.start_full(&numbers, algorithm).unwrap();
        let second = controller.start_full(&numbers, algorithm).unwrap();
        assert!(first.snapshot.is_final());
        assert_eq!(first.snapshot.sequence, 1);
        assert_eq!(first.snapshot.values(), &expected[..]);
        assert_eq!(first.snapshot, second.snapshot);
    }
}

#[test]
fn stepping_ends_within_the_budget() {
    let mut rng = StdRng::seed_from_u64(21);
    let numbers = numbers_in(&mut rng, 400, 0, 1000);
    let mut expected = numbers.clone();
    expected.sort();
    let mut controller = fast_controller();
    for algorithm in AlgorithmId::ALL.iter().cloned() {
        let mut last = None;
        for _ in 0..40 {
            let step = controller.start_or_advance_step(&numbers, algorithm).unwrap();
            let done = step.done;
            last = Some(step);
            if done {
                break;
            }
        }
        let last = last.unwrap();
        assert!(last.done, "{} never finished", algorithm);
        assert!(last.step <= 21);
        assert!(last.snapshot.is_final());
        assert_eq!(last.snapshot.values(), &expected[..]);
        controller.cancel();
    }
}

#[test]
fn timing_reports_every_trial() {
    let mut controller = fast_controller();
    let numbers: Vec<Value> = (0..50).rev().collect();
    let (report, sorted) = controller
        .timed_trials(&numbers, AlgorithmId::RadixSort, 5)
        .unwrap();
    assert_eq!(report.trials(), 5);
    assert_eq!(report.input_len, 50);
    assert!(sorted.is_final());
    let (average, total) = report.summary();
    assert!(average.starts_with("Average time over 5 trials"));
    assert!(total.starts_with("Total time for 5 trials"));
}

#[test]
fn missing_pacing_file_is_an_io_error() {
    match sort_steps::Pacing::load("/nonexistent/pacing.json") {
        Err(SortError::Io(_)) => (),
        other => panic!("unexpected {:?}", other),
    }
}
