use std::sync::atomic::Ordering;

use coverage_dumper::{COVERAGE_FLUSH_SIGNAL, DumpOutcome, dump_coverage};

use crate::test_ctx::{
    FLUSH_COUNT, FLUSH_LAST_SIGNUM, assert_flush_ignored, install_counting_handler,
    reset_counters, set_flush_disposition,
};

pub unsafe fn scenario_no_handler() {
    reset_counters();
    set_flush_disposition(libc::SIG_DFL);

    let outcome = dump_coverage();
    assert_eq!(outcome, DumpOutcome::NoHandler);
    println!("{}", outcome.message());
    assert_eq!(FLUSH_COUNT.load(Ordering::SeqCst), 0);
    assert_flush_ignored("no-handler");
}

pub unsafe fn scenario_sentinels() {
    for sentinel in [libc::SIG_DFL, libc::SIG_IGN] {
        reset_counters();
        set_flush_disposition(sentinel);
        assert_eq!(dump_coverage(), DumpOutcome::NoHandler);
        assert_eq!(FLUSH_COUNT.load(Ordering::SeqCst), 0);
        assert_flush_ignored("sentinels");
    }
}

pub unsafe fn scenario_dump_once() {
    reset_counters();
    install_counting_handler();

    let outcome = dump_coverage();
    assert_eq!(outcome, DumpOutcome::Dumped);
    println!("{}", outcome.message());
    assert_eq!(FLUSH_COUNT.load(Ordering::SeqCst), 1);
    assert_eq!(FLUSH_LAST_SIGNUM.load(Ordering::SeqCst), COVERAGE_FLUSH_SIGNAL);
    assert_flush_ignored("dump-once");
}

pub unsafe fn scenario_dump_twice() {
    reset_counters();
    install_counting_handler();

    assert_eq!(dump_coverage(), DumpOutcome::Dumped);
    let second = dump_coverage();
    assert_eq!(second, DumpOutcome::NoHandler);
    println!("{}", second.message());
    assert_eq!(FLUSH_COUNT.load(Ordering::SeqCst), 1);
    assert_flush_ignored("dump-twice");
}
