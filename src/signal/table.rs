use super::abi;
use super::disposition::{Disposition, HandlerRef};
use crate::log;

/// 进程信号处置表的窄接口，单元测试可替换为假实现。
pub trait SignalTable {
    /// 原子地把 `signum` 绑定到 `disposition`，返回之前的处置。
    fn swap_handler(&self, signum: libc::c_int, disposition: Disposition) -> Disposition;

    /// 直接调用取回的 handler。
    fn invoke(&self, handler: HandlerRef, signum: libc::c_int);
}

/// 基于 libc sigaction 的真实实现。
#[derive(Clone, Copy, Debug, Default)]
pub struct OsSignalTable;

impl OsSignalTable {
    /// 只读查询当前处置；查询失败归为 Error。
    pub fn current(&self, signum: libc::c_int) -> Disposition {
        match abi::query_sigaction(signum) {
            Ok(action) => Disposition::from_action(&action),
            Err(errno) => {
                log::warn(format_args!(
                    "query sigaction failed signum={signum} errno={}",
                    errno.as_i32()
                ));
                Disposition::Error
            }
        }
    }
}

impl SignalTable for OsSignalTable {
    // 单次 sigaction(new, old) 即 get-and-set，并发调用者最多一个能拿到真实 handler
    fn swap_handler(&self, signum: libc::c_int, disposition: Disposition) -> Disposition {
        let Some(new_action) = disposition.to_action() else {
            return Disposition::Error;
        };
        let mut old_action: libc::sigaction = unsafe { std::mem::zeroed() };
        match abi::raw_sigaction(signum, &new_action, &mut old_action) {
            Ok(()) => Disposition::from_action(&old_action),
            Err(errno) => {
                log::warn(format_args!(
                    "swap sigaction failed signum={signum} errno={}",
                    errno.as_i32()
                ));
                Disposition::Error
            }
        }
    }

    fn invoke(&self, handler: HandlerRef, signum: libc::c_int) {
        log::debug(format_args!("invoke handler {handler:?} signum={signum}"));
        // handler 由 swap_handler 从信号表取回，注册方保证其可调用
        unsafe { handler.call(signum) }
    }
}
