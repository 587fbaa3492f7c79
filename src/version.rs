// 库名、版本与目标架构，JNI_OnLoad 日志和 get_version 共用
pub fn version_str_full() -> String {
    format!(
        "coverage_dumper {} ({})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::ARCH
    )
}
