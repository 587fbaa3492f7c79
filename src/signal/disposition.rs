use std::ffi::c_void;
use std::fmt;

// signal() 风格的单参数 handler
pub type PlainHandlerFn = unsafe extern "C" fn(libc::c_int);
// SA_SIGINFO 风格的三参数 handler
pub type SigInfoHandlerFn =
    unsafe extern "C" fn(libc::c_int, *mut libc::siginfo_t, *mut c_void);

/// 从系统信号表借来的 handler 引用，本组件从不释放它。
#[derive(Clone, Copy)]
pub enum HandlerRef {
    Plain(PlainHandlerFn),
    SigInfo(SigInfoHandlerFn),
}

impl HandlerRef {
    /// 由 `sa_sigaction` 原始地址构造。
    ///
    /// # Safety
    /// `addr` 必须是有效函数地址且不是 SIG_DFL/SIG_IGN/SIG_ERR；
    /// `siginfo` 必须与该 handler 注册时的 SA_SIGINFO 标志一致。
    pub unsafe fn from_addr(addr: libc::sighandler_t, siginfo: bool) -> Self {
        if siginfo {
            Self::SigInfo(std::mem::transmute::<libc::sighandler_t, SigInfoHandlerFn>(addr))
        } else {
            Self::Plain(std::mem::transmute::<libc::sighandler_t, PlainHandlerFn>(addr))
        }
    }

    pub fn addr(self) -> usize {
        match self {
            Self::Plain(handler) => handler as usize,
            Self::SigInfo(handler) => handler as usize,
        }
    }

    pub fn is_siginfo(self) -> bool {
        matches!(self, Self::SigInfo(_))
    }

    /// 以 `signum` 为唯一有效参数调用 handler，不经过内核投递。
    ///
    /// # Safety
    /// handler 所在模块必须仍然映射，且允许在普通线程上下文中执行。
    pub unsafe fn call(self, signum: libc::c_int) {
        match self {
            Self::Plain(handler) => handler(signum),
            Self::SigInfo(handler) => {
                // 三参数 handler 拿到一个只填了 si_signo 的 siginfo，避免读到垃圾
                let mut info: libc::siginfo_t = std::mem::zeroed();
                info.si_signo = signum;
                handler(signum, &mut info, std::ptr::null_mut());
            }
        }
    }
}

impl fmt::Debug for HandlerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_siginfo() { "SigInfo" } else { "Plain" };
        write!(f, "{kind}(0x{:x})", self.addr())
    }
}

/// 信号当前绑定的动作。
#[derive(Clone, Copy, Debug)]
pub enum Disposition {
    Default,
    Ignore,
    Error,
    Handler(HandlerRef),
}

impl Disposition {
    // 从 sigaction 结构分类：三个哨兵值之外都视为真实 handler
    pub(crate) fn from_action(action: &libc::sigaction) -> Self {
        match action.sa_sigaction {
            libc::SIG_DFL => Self::Default,
            libc::SIG_IGN => Self::Ignore,
            libc::SIG_ERR => Self::Error,
            addr => {
                let siginfo = action.sa_flags & libc::SA_SIGINFO != 0;
                Self::Handler(unsafe { HandlerRef::from_addr(addr, siginfo) })
            }
        }
    }

    // 生成可安装的 sigaction；Error 不可安装，返回 None
    pub(crate) fn to_action(self) -> Option<libc::sigaction> {
        let mut action: libc::sigaction = unsafe { std::mem::zeroed() };
        unsafe {
            libc::sigemptyset(&mut action.sa_mask);
        }
        match self {
            Self::Default => action.sa_sigaction = libc::SIG_DFL,
            Self::Ignore => action.sa_sigaction = libc::SIG_IGN,
            Self::Error => return None,
            Self::Handler(handler) => {
                action.sa_sigaction = handler.addr() as libc::sighandler_t;
                if handler.is_siginfo() {
                    action.sa_flags = libc::SA_SIGINFO;
                }
            }
        }
        Some(action)
    }

    pub fn handler(self) -> Option<HandlerRef> {
        match self {
            Self::Handler(handler) => Some(handler),
            Self::Default | Self::Ignore | Self::Error => None,
        }
    }

    pub fn is_ignore(self) -> bool {
        matches!(self, Self::Ignore)
    }

    pub fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }
}
