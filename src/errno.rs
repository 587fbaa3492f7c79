// 内部错误码；不会越过 JNI 边界返回给调用方，只出现在日志里
#[repr(i32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Errno {
    NoSym = 13,     // sigaction 符号未找到
    Sigaction = 14, // sigaction 调用返回 -1
    Panic = 1009,   // FFI 边界捕获到 panic
}

impl Errno {
    pub const fn as_i32(self) -> i32 {
        self as i32
    }
}
