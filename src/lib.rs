#![allow(unsafe_op_in_unsafe_fn)]
#![allow(clippy::missing_safety_doc)]

#[cfg(not(any(target_os = "android", target_os = "linux")))]
compile_error!("coverage_dumper supports Android only (Linux hosts are accepted for development)");

#[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64")))]
compile_error!("coverage_dumper supports only 64-bit architectures: aarch64 and x86_64");

// 公共 API 层：dump、debug 开关、版本
mod api;
// JNI 导出入口
mod bridge;
// 错误码定义
mod errno;
// 日志输出，Android 上使用 logcat
mod log;
// 进程级配置
mod runtime;
// 信号处置表的抽象与 sigaction 实现
mod signal;
// 覆盖率 dump 触发器
mod trigger;
// 版本信息
mod version;

pub use api::{dump_coverage, get_debug, get_version, set_debug};
pub use errno::Errno as CoverageDumperErrno;
pub use signal::{
    Disposition, HandlerRef, OsSignalTable, PlainHandlerFn, SigInfoHandlerFn, SignalTable,
};
pub use trigger::{COVERAGE_FLUSH_SIGNAL, CoverageTrigger, DumpOutcome};
