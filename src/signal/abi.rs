// sigaction 的底层封装
// 动态解析 libc 中的 sigaction 符号，兼容不同 Android 版本

use crate::errno::Errno;
use crate::log;
use once_cell::sync::Lazy;
use std::ffi::{CStr, c_void};
use std::ptr;

pub(super) type SigActionFn = unsafe extern "C" fn(
    libc::c_int,
    *const libc::sigaction,
    *mut libc::sigaction,
) -> libc::c_int;

// EINTR 重试上限
const EINTR_RETRY_LIMIT: usize = 4;
// libc.so 的候选路径，覆盖 APEX 和传统路径
const LIBC_PATH_CANDIDATES: [&CStr; 3] = [
    c"libc.so",
    c"/apex/com.android.runtime/lib64/bionic/libc.so",
    c"/system/lib64/libc.so",
];
// 优先 64 位变体（sigaction64）；64 位 bionic 上两者布局相同
const SIGACTION_SYMBOLS: [&CStr; 4] = [
    c"sigaction64",
    c"__sigaction64",
    c"sigaction",
    c"__sigaction",
];

static SIGACTION_FN: Lazy<Result<SigActionFn, Errno>> = Lazy::new(resolve_sigaction_fn);

fn resolve_symbol_from_handle(handle: *mut c_void, symbols: &[&CStr]) -> *mut c_void {
    for symbol in symbols {
        let ptr = unsafe { libc::dlsym(handle, symbol.as_ptr()) };
        if !ptr.is_null() {
            return ptr;
        }
    }
    ptr::null_mut()
}

fn resolve_symbol_from_library(lib_path: &CStr, symbols: &[&CStr]) -> *mut c_void {
    let handle = unsafe { libc::dlopen(lib_path.as_ptr(), libc::RTLD_NOW | libc::RTLD_NOLOAD) };
    if handle.is_null() {
        return ptr::null_mut();
    }
    let ptr = resolve_symbol_from_handle(handle, symbols);
    unsafe {
        libc::dlclose(handle);
    }
    ptr
}

// 查找顺序: RTLD_DEFAULT -> 已加载的 libc
fn resolve_sigaction_fn() -> Result<SigActionFn, Errno> {
    let mut sigaction_ptr = resolve_symbol_from_handle(libc::RTLD_DEFAULT, &SIGACTION_SYMBOLS);

    for lib_path in LIBC_PATH_CANDIDATES {
        if !sigaction_ptr.is_null() {
            break;
        }
        sigaction_ptr = resolve_symbol_from_library(lib_path, &SIGACTION_SYMBOLS);
    }

    if sigaction_ptr.is_null() {
        log::error(format_args!("resolve sigaction failed"));
        return Err(Errno::NoSym);
    }
    log::debug(format_args!("resolved sigaction at {sigaction_ptr:p}"));
    Ok(unsafe { std::mem::transmute::<*mut c_void, SigActionFn>(sigaction_ptr) })
}

// 单次原子地安装 new_action 并取回旧处置，EINTR 时有限重试
pub(super) fn raw_sigaction(
    signum: libc::c_int,
    new_action: &libc::sigaction,
    old_action: &mut libc::sigaction,
) -> Result<(), Errno> {
    let sigaction_fn = (*SIGACTION_FN)?;
    for _ in 0..EINTR_RETRY_LIMIT {
        let ret = unsafe { sigaction_fn(signum, new_action, old_action) };
        if ret == 0 {
            return Ok(());
        }
        if std::io::Error::last_os_error().raw_os_error() != Some(libc::EINTR) {
            break;
        }
    }
    Err(Errno::Sigaction)
}

// 只读查询当前处置，不修改
pub(super) fn query_sigaction(signum: libc::c_int) -> Result<libc::sigaction, Errno> {
    let sigaction_fn = (*SIGACTION_FN)?;
    let mut old_action: libc::sigaction = unsafe { std::mem::zeroed() };
    let ret = unsafe { sigaction_fn(signum, ptr::null(), &mut old_action) };
    if ret != 0 {
        return Err(Errno::Sigaction);
    }
    Ok(old_action)
}
