// 真实 sigaction 的宿主测试；每个用例占用独立的实时信号，避免并行测试互相干扰
use super::{Disposition, HandlerRef, OsSignalTable, SignalTable};
use std::ffi::c_void;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};

const SIG_SWAP_DEFAULT: libc::c_int = 40;
const SIG_SWAP_PLAIN: libc::c_int = 41;
const SIG_SWAP_SIGINFO: libc::c_int = 42;
const SIG_SWAP_ERROR: libc::c_int = 43;

static PLAIN_COUNT: AtomicUsize = AtomicUsize::new(0);
static PLAIN_LAST_SIGNUM: AtomicI32 = AtomicI32::new(0);
static SIGINFO_LAST_SIGNO: AtomicI32 = AtomicI32::new(0);

unsafe extern "C" fn counting_plain_handler(signum: libc::c_int) {
    PLAIN_COUNT.fetch_add(1, Ordering::SeqCst);
    PLAIN_LAST_SIGNUM.store(signum, Ordering::SeqCst);
}

unsafe extern "C" fn recording_siginfo_handler(
    _signum: libc::c_int,
    info: *mut libc::siginfo_t,
    _context: *mut c_void,
) {
    if !info.is_null() {
        SIGINFO_LAST_SIGNO.store((*info).si_signo, Ordering::SeqCst);
    }
}

#[test]
fn swap_reports_default_and_leaves_ignore() {
    let table = OsSignalTable;
    let _ = table.swap_handler(SIG_SWAP_DEFAULT, Disposition::Default);

    let previous = table.swap_handler(SIG_SWAP_DEFAULT, Disposition::Ignore);
    assert!(previous.is_default(), "unexpected previous {previous:?}");
    assert!(table.current(SIG_SWAP_DEFAULT).is_ignore());

    let previous = table.swap_handler(SIG_SWAP_DEFAULT, Disposition::Ignore);
    assert!(previous.is_ignore(), "unexpected previous {previous:?}");
}

#[test]
fn swap_returns_installed_plain_handler() {
    let table = OsSignalTable;
    let handler = HandlerRef::Plain(counting_plain_handler);
    let _ = table.swap_handler(SIG_SWAP_PLAIN, Disposition::Handler(handler));

    let previous = table.swap_handler(SIG_SWAP_PLAIN, Disposition::Ignore);
    let found = previous.handler().expect("plain handler not returned");
    assert!(!found.is_siginfo());
    assert_eq!(found.addr(), handler.addr());

    table.invoke(found, SIG_SWAP_PLAIN);
    assert_eq!(PLAIN_COUNT.load(Ordering::SeqCst), 1);
    assert_eq!(PLAIN_LAST_SIGNUM.load(Ordering::SeqCst), SIG_SWAP_PLAIN);
    assert!(table.current(SIG_SWAP_PLAIN).is_ignore());
}

#[test]
fn swap_keeps_siginfo_flavor() {
    let table = OsSignalTable;
    let handler = HandlerRef::SigInfo(recording_siginfo_handler);
    let _ = table.swap_handler(SIG_SWAP_SIGINFO, Disposition::Handler(handler));

    let previous = table.swap_handler(SIG_SWAP_SIGINFO, Disposition::Ignore);
    let found = previous.handler().expect("siginfo handler not returned");
    assert!(found.is_siginfo());
    assert_eq!(found.addr(), handler.addr());

    table.invoke(found, SIG_SWAP_SIGINFO);
    assert_eq!(SIGINFO_LAST_SIGNO.load(Ordering::SeqCst), SIG_SWAP_SIGINFO);
}

#[test]
fn error_disposition_is_not_installed() {
    let table = OsSignalTable;
    let _ = table.swap_handler(SIG_SWAP_ERROR, Disposition::Ignore);

    let previous = table.swap_handler(SIG_SWAP_ERROR, Disposition::Error);
    assert!(matches!(previous, Disposition::Error));
    assert!(table.current(SIG_SWAP_ERROR).is_ignore());
}

#[test]
fn rejected_signal_classifies_as_error() {
    let table = OsSignalTable;
    let previous = table.swap_handler(libc::SIGKILL, Disposition::Ignore);
    assert!(matches!(previous, Disposition::Error));
}

#[test]
fn sentinels_have_no_handler() {
    for disposition in [Disposition::Default, Disposition::Ignore, Disposition::Error] {
        assert!(disposition.handler().is_none(), "{disposition:?}");
    }
    assert!(Disposition::Error.to_action().is_none());
}
