use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};

use coverage_dumper::{COVERAGE_FLUSH_SIGNAL, Disposition, OsSignalTable};

pub static FLUSH_COUNT: AtomicUsize = AtomicUsize::new(0);
pub static FLUSH_LAST_SIGNUM: AtomicI32 = AtomicI32::new(0);

// 模拟插桩运行时注册的 flush handler
pub extern "C" fn counting_flush_handler(signum: libc::c_int) {
    FLUSH_COUNT.fetch_add(1, Ordering::SeqCst);
    FLUSH_LAST_SIGNUM.store(signum, Ordering::SeqCst);
}

pub fn reset_counters() {
    FLUSH_COUNT.store(0, Ordering::SeqCst);
    FLUSH_LAST_SIGNUM.store(0, Ordering::SeqCst);
}

// 通过 libc signal() 直接改写处置，与插桩运行时的注册方式一致
pub unsafe fn set_flush_disposition(handler: libc::sighandler_t) {
    let prev = libc::signal(COVERAGE_FLUSH_SIGNAL, handler);
    assert_ne!(prev, libc::SIG_ERR, "signal({COVERAGE_FLUSH_SIGNAL}) failed");
}

pub unsafe fn install_counting_handler() {
    let handler: extern "C" fn(libc::c_int) = counting_flush_handler;
    set_flush_disposition(handler as libc::sighandler_t);
}

pub fn flush_disposition() -> Disposition {
    OsSignalTable.current(COVERAGE_FLUSH_SIGNAL)
}

pub fn assert_flush_ignored(op: &str) {
    let current = flush_disposition();
    assert!(current.is_ignore(), "{op}: disposition {current:?} is not Ignore");
}

pub fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .ok()
        .map(|value| {
            matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        })
        .unwrap_or(false)
}
