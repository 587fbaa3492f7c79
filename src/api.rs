use crate::runtime;
use crate::signal::OsSignalTable;
use crate::trigger::{CoverageTrigger, DumpOutcome};
use crate::version;

// 对真实进程信号表执行一次覆盖率 dump；进程生命周期内只有首次调用可能真正 dump
pub fn dump_coverage() -> DumpOutcome {
    runtime::apply_env_config();
    CoverageTrigger::new(OsSignalTable).dump()
}

pub fn get_version() -> String {
    version::version_str_full()
}

pub fn get_debug() -> bool {
    runtime::get_debug()
}

pub fn set_debug(debug: bool) {
    runtime::set_debug(debug);
}

#[cfg(test)]
mod tests {
    use super::dump_coverage;
    use crate::log::{ANDROID_LOG_INFO, capture};
    use crate::signal::OsSignalTable;
    use crate::trigger::{COVERAGE_FLUSH_SIGNAL, DumpOutcome};

    // 宿主测试进程没有插桩运行时，37 号信号保持默认处置；本文件是唯一碰 37 的用例
    #[test]
    fn dump_without_instrumentation_is_noop_and_sticky() {
        let _ = capture::take();
        assert_eq!(dump_coverage(), DumpOutcome::NoHandler);
        assert_eq!(
            capture::take_at(ANDROID_LOG_INFO),
            vec!["No coverage signal registered! No-op".to_string()]
        );
        assert!(OsSignalTable.current(COVERAGE_FLUSH_SIGNAL).is_ignore());
        assert_eq!(dump_coverage(), DumpOutcome::NoHandler);
        assert_eq!(
            capture::take_at(ANDROID_LOG_INFO),
            vec!["No coverage signal registered! No-op".to_string()]
        );
        assert!(OsSignalTable.current(COVERAGE_FLUSH_SIGNAL).is_ignore());
    }
}
