// JNI 导出符号：由托管侧 instrumentation listener 在进程退出前调用

use crate::api;
use crate::errno::Errno;
use crate::log;
use crate::runtime;
use crate::version;
use jni::JNIEnv;
use jni::objects::JClass;
use jni::sys::{JNI_VERSION_1_6, jint};
use std::ffi::c_void;
use std::panic;

// 加载时应用环境配置并记录版本
#[unsafe(no_mangle)]
pub extern "system" fn JNI_OnLoad(_vm: *mut jni::sys::JavaVM, _reserved: *mut c_void) -> jint {
    runtime::apply_env_config();
    log::debug(format_args!("{} loaded", version::version_str_full()));
    JNI_VERSION_1_6
}

// 符号名是与调用方的外部契约，不可改动；env/class 仅满足 JNI 调用约定
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_android_modules_utils_testing_NativeCoverageHackInstrumentationListener_dumpCoverage(
    _env: JNIEnv,
    _class: JClass,
) {
    if panic::catch_unwind(api::dump_coverage).is_err() {
        log::error(format_args!(
            "panic caught in dumpCoverage errno={}",
            Errno::Panic.as_i32()
        ));
    }
}
