use std::fmt;
use std::sync::atomic::{AtomicI32, Ordering};

pub const ANDROID_LOG_DEBUG: i32 = 3;
pub const ANDROID_LOG_INFO: i32 = 4;
pub const ANDROID_LOG_WARN: i32 = 5;
pub const ANDROID_LOG_ERROR: i32 = 6;

const LOG_TAG_ANDROID: &[u8] = b"CoverageDumper\0";

// 默认 INFO：dump 结果两条日志必须始终可见
static LOG_PRIORITY: AtomicI32 = AtomicI32::new(ANDROID_LOG_INFO);

#[cfg(target_os = "android")]
#[link(name = "log")]
unsafe extern "C" {
    fn __android_log_write(prio: i32, tag: *const i8, text: *const i8) -> i32;
}

// 启用时输出 DEBUG 及以上，禁用时回到 INFO 及以上
pub fn set_debug_enabled(enabled: bool) {
    let priority = if enabled {
        ANDROID_LOG_DEBUG
    } else {
        ANDROID_LOG_INFO
    };
    LOG_PRIORITY.store(priority, Ordering::SeqCst);
}

fn enabled(priority: i32) -> bool {
    LOG_PRIORITY.load(Ordering::Relaxed) <= priority
}

// 格式化日志文本，内部 NUL 替换为空格并追加结尾 NUL
fn format_text(args: fmt::Arguments) -> Vec<u8> {
    let mut text = format!("{args}").into_bytes();
    for byte in &mut text {
        if *byte == 0 {
            *byte = b' ';
        }
    }
    text.push(0);
    text
}

fn write_log(priority: i32, args: fmt::Arguments) {
    if !enabled(priority) {
        return;
    }
    let text = format_text(args);
    #[cfg(test)]
    capture::record(priority, &text);
    emit(priority, &text);
}

// 测试用：按线程记录实际送达 sink 的 (priority, text)
#[cfg(test)]
pub(crate) mod capture {
    use std::cell::RefCell;

    thread_local! {
        static CAPTURED: RefCell<Vec<(i32, String)>> = const { RefCell::new(Vec::new()) };
    }

    pub(super) fn record(priority: i32, text: &[u8]) {
        let body = &text[..text.len().saturating_sub(1)];
        let line = String::from_utf8_lossy(body).into_owned();
        CAPTURED.with(|captured| captured.borrow_mut().push((priority, line)));
    }

    pub(crate) fn take() -> Vec<(i32, String)> {
        CAPTURED.with(|captured| std::mem::take(&mut *captured.borrow_mut()))
    }

    // 只取指定级别，debug 开关被其他用例打开时不受影响
    pub(crate) fn take_at(priority: i32) -> Vec<String> {
        take()
            .into_iter()
            .filter(|(level, _)| *level == priority)
            .map(|(_, line)| line)
            .collect()
    }
}

#[cfg(target_os = "android")]
fn emit(priority: i32, text: &[u8]) {
    unsafe {
        __android_log_write(
            priority,
            LOG_TAG_ANDROID.as_ptr() as *const i8,
            text.as_ptr() as *const i8,
        );
    }
}

// 非 Android 宿主（开发与单元测试）输出到 stderr，格式仿 logcat
#[cfg(not(target_os = "android"))]
fn emit(priority: i32, text: &[u8]) {
    let level = match priority {
        ANDROID_LOG_DEBUG => 'D',
        ANDROID_LOG_INFO => 'I',
        ANDROID_LOG_WARN => 'W',
        _ => 'E',
    };
    let tag = &LOG_TAG_ANDROID[..LOG_TAG_ANDROID.len() - 1];
    let body = &text[..text.len().saturating_sub(1)];
    eprintln!(
        "{level}/{}: {}",
        String::from_utf8_lossy(tag),
        String::from_utf8_lossy(body)
    );
}

pub(crate) fn info(args: fmt::Arguments) {
    write_log(ANDROID_LOG_INFO, args);
}

pub(crate) fn debug(args: fmt::Arguments) {
    write_log(ANDROID_LOG_DEBUG, args);
}

pub(crate) fn warn(args: fmt::Arguments) {
    write_log(ANDROID_LOG_WARN, args);
}

pub(crate) fn error(args: fmt::Arguments) {
    write_log(ANDROID_LOG_ERROR, args);
}
