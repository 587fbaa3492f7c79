// 信号处置表的窄接口：原子换入新处置并取回旧处置，以及直接调用 handler

// 处置的封闭枚举：Default / Ignore / Error / Handler
mod disposition;
// 动态解析 libc 的 sigaction 符号
mod abi;
// SignalTable trait 与基于 sigaction 的实现
mod table;

pub use disposition::{Disposition, HandlerRef, PlainHandlerFn, SigInfoHandlerFn};
pub use table::{OsSignalTable, SignalTable};

#[cfg(test)]
mod tests;
