use std::sync::Barrier;
use std::sync::atomic::Ordering;
use std::thread;

use coverage_dumper::{DumpOutcome, dump_coverage};

use crate::test_ctx::{FLUSH_COUNT, assert_flush_ignored, install_counting_handler, reset_counters};

const THREADS: usize = 8;
const STRESS_ROUNDS: usize = 500;

// 多线程同时 dump：sigaction 的 get-and-set 保证只有一个线程拿到 handler
unsafe fn race_once() {
    reset_counters();
    install_counting_handler();

    let barrier = Barrier::new(THREADS);
    let dumped = thread::scope(|scope| {
        let workers: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    dump_coverage()
                })
            })
            .collect();
        workers
            .into_iter()
            .map(|worker| worker.join().expect("dump worker panicked"))
            .filter(|outcome| *outcome == DumpOutcome::Dumped)
            .count()
    });

    assert_eq!(dumped, 1, "exactly one thread must observe the handler");
    assert_eq!(FLUSH_COUNT.load(Ordering::SeqCst), 1);
    assert_flush_ignored("concurrent-dump");
}

pub unsafe fn scenario_concurrent_dump() {
    race_once();
}

pub unsafe fn scenario_concurrent_dump_stress() {
    for _ in 0..STRESS_ROUNDS {
        race_once();
    }
}
