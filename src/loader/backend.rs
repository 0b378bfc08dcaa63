//! 原生调用后端
//!
//! 后端负责打开二进制并把符号名解析为入口地址。
//! 加载器只依赖 [`NativeBackend`] trait，具体实现可以替换（测试中使用模拟后端）。

use std::ffi::c_void;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// 已解析的符号入口地址
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolAddress(*const c_void);

// 地址只在绑定的库存活期间被解引用，库句柄由命名空间持有
unsafe impl Send for SymbolAddress {}
unsafe impl Sync for SymbolAddress {}

impl SymbolAddress {
    /// 空地址返回 `None`
    pub fn new(address: *const c_void) -> Option<Self> {
        (!address.is_null()).then_some(Self(address))
    }

    pub fn as_ptr(self) -> *const c_void {
        self.0
    }
}

/// 一个已打开的二进制
pub trait NativeLibrary: Send + Sync + fmt::Debug {
    /// 打开时使用的路径，用于日志和错误信息
    fn path(&self) -> &Path;

    /// 解析符号，失败时返回原因
    fn symbol(&self, name: &str) -> Result<SymbolAddress, String>;
}

/// 后端能力
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendCapabilities {
    /// 能否调用按值传递或返回结构体的函数
    pub by_value_aggregates: bool,
}

impl Default for BackendCapabilities {
    fn default() -> Self {
        Self {
            by_value_aggregates: true,
        }
    }
}

/// 原生调用后端策略
pub trait NativeBackend: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    fn capabilities(&self) -> BackendCapabilities {
        BackendCapabilities::default()
    }

    /// 打开二进制，失败时返回原因
    fn open(&self, path: &Path) -> Result<Arc<dyn NativeLibrary>, String>;
}

/// `libloading` 打开的共享库
pub struct LoadedLibrary {
    path: std::path::PathBuf,
    library: libloading::Library,
}

impl fmt::Debug for LoadedLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedLibrary")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl NativeLibrary for LoadedLibrary {
    fn path(&self) -> &Path {
        &self.path
    }

    fn symbol(&self, name: &str) -> Result<SymbolAddress, String> {
        // SAFETY: 只取地址，不按此类型调用；调用类型由命名空间按签名检查
        let symbol: libloading::Symbol<unsafe extern "C" fn()> = unsafe {
            self.library
                .get(name.as_bytes())
                .map_err(|e| e.to_string())?
        };
        SymbolAddress::new(*symbol as *const c_void)
            .ok_or_else(|| format!("symbol {} resolved to null", name))
    }
}

/// 通过 `libloading` 打开共享库文件
#[derive(Debug, Default, Clone, Copy)]
pub struct LibloadingBackend;

impl NativeBackend for LibloadingBackend {
    fn name(&self) -> &str {
        "libloading"
    }

    fn open(&self, path: &Path) -> Result<Arc<dyn NativeLibrary>, String> {
        // SAFETY: SDL 的初始化例程没有需要额外约束的副作用
        let library = unsafe { libloading::Library::new(path) }.map_err(|e| e.to_string())?;
        Ok(Arc::new(LoadedLibrary {
            path: path.to_path_buf(),
            library,
        }))
    }
}

/// 从当前进程已链接的符号中解析（静态链接或已由宿主加载 SDL 时使用）
///
/// 传入的路径只用于标识，不会被打开。
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessBackend;

impl NativeBackend for ProcessBackend {
    fn name(&self) -> &str {
        "process"
    }

    fn open(&self, path: &Path) -> Result<Arc<dyn NativeLibrary>, String> {
        #[cfg(unix)]
        let library: libloading::Library = libloading::os::unix::Library::this().into();
        #[cfg(windows)]
        let library: libloading::Library = libloading::os::windows::Library::this()
            .map_err(|e| e.to_string())?
            .into();

        Ok(Arc::new(LoadedLibrary {
            path: path.to_path_buf(),
            library,
        }))
    }
}
