// 进程级配置：debug 开关与环境变量覆盖

use crate::log;
use once_cell::sync::OnceCell;
use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

const DEBUG_ENV: &str = "COVERAGE_DUMPER_DEBUG";

static DEBUG: AtomicBool = AtomicBool::new(false);
// 环境变量与显式 set_debug 共用一个门闩：谁先到谁生效，之后不再读环境变量
static ENV_APPLIED: OnceCell<()> = OnceCell::new();

pub fn set_debug(debug: bool) {
    let _ = ENV_APPLIED.set(());
    store_debug(debug);
}

pub fn get_debug() -> bool {
    DEBUG.load(Ordering::SeqCst)
}

fn store_debug(debug: bool) {
    DEBUG.store(debug, Ordering::SeqCst);
    log::set_debug_enabled(debug);
}

pub fn apply_env_config() {
    apply_env_config_with(|| env::var(DEBUG_ENV).ok());
}

// 只在门闩未关闭时读取；无法识别的值保持当前设置
fn apply_env_config_with<F>(read_env: F)
where
    F: FnOnce() -> Option<String>,
{
    ENV_APPLIED.get_or_init(|| {
        let Some(value) = read_env() else {
            return;
        };
        match parse_env_flag(&value) {
            Some(enabled) => store_debug(enabled),
            None => log::warn(format_args!("ignore {DEBUG_ENV}={value:?}")),
        }
    });
}

fn parse_env_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
