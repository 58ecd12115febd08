// SPDX-License-Identifier: MPL-2.0
use iced_labeler::progress::{
    self, CancelToken, ProgressError, ProgressState, ProgressSurface, StepRunner, StepTask,
    TaskOutcome,
};
use std::thread;
use std::time::Duration;

/// Surface that keeps a log of everything applied to it.
#[derive(Debug, Default)]
struct Log {
    renders: Vec<ProgressState>,
    visibility: Vec<bool>,
}

impl ProgressSurface for Log {
    fn render(&mut self, state: &ProgressState) {
        self.renders.push(state.clone());
    }

    fn set_visible(&mut self, visible: bool) {
        self.visibility.push(visible);
    }
}

#[test]
fn updates_from_worker_thread_arrive_in_order() {
    let (coordinator, mut queue) = progress::channel();

    let worker = thread::spawn(move || {
        coordinator.set_maximum(100).unwrap();
        for value in 0..100 {
            coordinator.update(value, None).unwrap();
        }
    });

    let mut log = Log::default();
    // Drain while the worker is still sending, like a UI tick would.
    while !worker.is_finished() {
        queue.process_pending(&mut log);
        thread::sleep(Duration::from_millis(1));
    }
    worker.join().unwrap();
    queue.process_pending(&mut log);

    let values: Vec<u32> = log.renders.iter().skip(1).map(|state| state.current).collect();
    assert_eq!(values, (0..100).collect::<Vec<_>>());
    assert_eq!(queue.state().current, 99);
}

struct Letters;

impl StepTask for Letters {
    fn total_steps(&self) -> u32 {
        3
    }

    fn run_step(&mut self, step: u32) -> Result<Option<String>, String> {
        let letter = ["a", "b", "c"][(step - 1) as usize];
        Ok(Some(letter.to_string()))
    }
}

#[test]
fn runner_reports_each_step_then_hides_surface() {
    let (coordinator, mut queue) = progress::channel();
    let runner = StepRunner::new(coordinator, CancelToken::new());

    let outcome = thread::spawn(move || runner.run(&mut Letters))
        .join()
        .unwrap();
    assert_eq!(outcome, TaskOutcome::Completed { steps: 3 });

    let mut log = Log::default();
    queue.process_pending(&mut log);

    let updates: Vec<(u32, Option<&str>)> = log
        .renders
        .iter()
        .skip(1)
        .map(|state| (state.current, state.message.as_deref()))
        .collect();
    assert_eq!(
        updates,
        vec![(1, Some("a")), (2, Some("b")), (3, Some("c"))]
    );
    assert_eq!(log.visibility, vec![true, false]);
    assert!(queue.is_disposed());
}

#[test]
fn update_after_dispose_is_rejected_quietly() {
    let (coordinator, mut queue) = progress::channel();
    coordinator.set_maximum(10).unwrap();
    coordinator.dispose();

    assert_eq!(coordinator.update(5, None), Err(ProgressError::Disposed));
    assert_eq!(coordinator.set_maximum(20), Err(ProgressError::Disposed));

    let mut log = Log::default();
    queue.process_pending(&mut log);
    assert_eq!(queue.state().current, 0);
    assert_eq!(queue.state().maximum, Some(10));
}

#[test]
fn dropped_queue_does_not_break_worker() {
    let (coordinator, queue) = progress::channel();
    drop(queue);

    let runner = StepRunner::new(coordinator, CancelToken::new());
    let outcome = runner.run(&mut Letters);
    assert_eq!(outcome, TaskOutcome::Cancelled { completed: 0 });
}
