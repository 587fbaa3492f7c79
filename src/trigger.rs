// 覆盖率 dump 触发器：取回插桩运行时注册在实时信号上的 handler 并直接调用一次
//
// 状态只有 UNTRIGGERED -> TRIGGERED：无论走哪个分支，信号处置最终都是 Ignore，
// 第二次调用必然走 no-op 分支。

use crate::log;
use crate::signal::{Disposition, SignalTable};

// 内核实时信号下界（__SIGRTMIN），不是 libc 的 SIGRTMIN()：bionic 会保留一段实时信号
const KERNEL_SIGRTMIN: libc::c_int = 32;

/// 插桩运行时注册 flush handler 所用的信号（37）。
pub const COVERAGE_FLUSH_SIGNAL: libc::c_int = KERNEL_SIGRTMIN + 5;

pub const MSG_DUMPED: &str = "Coverage dumped.";
pub const MSG_NO_HANDLER: &str = "No coverage signal registered! No-op";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DumpOutcome {
    // 找到真实 handler 并已调用
    Dumped,
    // 处置为哨兵值，通常是未以覆盖率变体编译
    NoHandler,
}

impl DumpOutcome {
    pub const fn message(self) -> &'static str {
        match self {
            Self::Dumped => MSG_DUMPED,
            Self::NoHandler => MSG_NO_HANDLER,
        }
    }

    pub const fn is_dumped(self) -> bool {
        matches!(self, Self::Dumped)
    }
}

pub struct CoverageTrigger<T: SignalTable> {
    table: T,
    signum: libc::c_int,
}

impl<T: SignalTable> CoverageTrigger<T> {
    pub fn new(table: T) -> Self {
        Self::with_signal(table, COVERAGE_FLUSH_SIGNAL)
    }

    pub fn with_signal(table: T, signum: libc::c_int) -> Self {
        Self { table, signum }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn signum(&self) -> libc::c_int {
        self.signum
    }

    /// 原子换入 Ignore 并分类旧处置；真实 handler 只会被本次调用执行。
    /// 从不向调用方报错，两种结果都只记一条 INFO 日志。
    pub fn dump(&self) -> DumpOutcome {
        let previous = self.table.swap_handler(self.signum, Disposition::Ignore);
        let handler = match previous {
            Disposition::Handler(handler) => handler,
            Disposition::Default | Disposition::Ignore | Disposition::Error => {
                log::debug(format_args!(
                    "signum={} previous disposition {previous:?}",
                    self.signum
                ));
                log::info(format_args!("{}", MSG_NO_HANDLER));
                return DumpOutcome::NoHandler;
            }
        };

        // 先记日志：handler 可能直接结束进程
        log::info(format_args!("{}", MSG_DUMPED));
        // signum 对被调方无意义，仅满足 handler 签名
        self.table.invoke(handler, self.signum);
        DumpOutcome::Dumped
    }
}
