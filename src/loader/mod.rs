//! 动态库加载器
//!
//! 选择子库 → 检查后端 → 注册类型与常量 → 打开二进制 → 绑定函数表，
//! 最终返回合并后的 [`Namespace`]。
//!
//! - `platform` - 平台相关的文件名
//! - `backend` - 原生调用后端策略

pub mod backend;
pub mod platform;

pub use backend::{
    BackendCapabilities, LibloadingBackend, LoadedLibrary, NativeBackend, NativeLibrary,
    ProcessBackend, SymbolAddress,
};
pub use platform::{library_file_name, Platform};

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use crate::abi::TypeRegistry;
use crate::config::{BackendKind, LinkConfig};
use crate::consts;
use crate::core::error::{LinkError, LinkResult, MarshalResult};
use crate::namespace::{BoundFunction, Entry, Namespace};
use crate::signatures::{self, FunctionSignature};
use crate::sys;

/// SDL 子库
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubLibrary {
    Core,
    Image,
    Ttf,
    Mixer,
    /// 摇杆与游戏控制器，符号位于核心二进制中
    Joystick,
}

impl SubLibrary {
    /// 全部子库（也是加载顺序）
    pub const ALL: [SubLibrary; 5] = [
        SubLibrary::Core,
        SubLibrary::Image,
        SubLibrary::Ttf,
        SubLibrary::Mixer,
        SubLibrary::Joystick,
    ];

    /// 逻辑名
    pub fn name(self) -> &'static str {
        match self {
            SubLibrary::Core => "SDL2",
            SubLibrary::Image => "SDL2_image",
            SubLibrary::Ttf => "SDL2_ttf",
            SubLibrary::Mixer => "SDL2_mixer",
            SubLibrary::Joystick => "SDL2_joystick",
        }
    }

    /// 实际二进制的逻辑名
    pub fn binary_name(self) -> &'static str {
        match self {
            SubLibrary::Joystick => SubLibrary::Core.name(),
            other => other.name(),
        }
    }

    pub fn functions(self) -> &'static [FunctionSignature] {
        match self {
            SubLibrary::Core => signatures::core::FUNCTIONS,
            SubLibrary::Image => signatures::image::FUNCTIONS,
            SubLibrary::Ttf => signatures::ttf::FUNCTIONS,
            SubLibrary::Mixer => signatures::mixer::FUNCTIONS,
            SubLibrary::Joystick => signatures::joystick::FUNCTIONS,
        }
    }

    /// 注册此子库声明的结构体/联合体
    pub fn register_types(self, registry: &mut TypeRegistry) -> MarshalResult<()> {
        match self {
            SubLibrary::Core => sys::register_core_types(registry),
            SubLibrary::Joystick => sys::register_joystick_types(registry),
            SubLibrary::Mixer => sys::register_mixer_types(registry),
            SubLibrary::Image | SubLibrary::Ttf => Ok(()),
        }
    }

    /// 逗号分隔的全部逻辑名
    pub fn available_names() -> String {
        Self::ALL
            .iter()
            .map(|lib| lib.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SubLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SubLibrary {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lib| lib.name() == s)
            .ok_or_else(|| LinkError::UnknownLibrary {
                name: s.to_string(),
                available: Self::available_names(),
            })
    }
}

/// 绑定前对函数表的过滤
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionFilter {
    /// 只绑定列出的符号
    Include(HashSet<String>),
    /// 绑定除列出符号外的全部
    Exclude(HashSet<String>),
}

impl FunctionFilter {
    pub fn include<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FunctionFilter::Include(symbols.into_iter().map(Into::into).collect())
    }

    pub fn exclude<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FunctionFilter::Exclude(symbols.into_iter().map(Into::into).collect())
    }

    pub fn allows(&self, symbol: &str) -> bool {
        match self {
            FunctionFilter::Include(symbols) => symbols.contains(symbol),
            FunctionFilter::Exclude(symbols) => !symbols.contains(symbol),
        }
    }
}

/// 加载器构建器
///
/// ```ignore
/// let ns = Loader::new()
///     .with_backend(LibloadingBackend)
///     .with_ttf()
///     .with_image()
///     .load()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Loader {
    backend: Option<Arc<dyn NativeBackend>>,
    extensions: Vec<SubLibrary>,
    paths: HashMap<SubLibrary, PathBuf>,
    search_dir: Option<PathBuf>,
    filter: Option<FunctionFilter>,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按配置构建，`backend = "none"` 时不设置后端，`load()` 会失败
    pub fn from_config(config: &LinkConfig) -> LinkResult<Self> {
        let mut loader = Self::new();

        loader.backend = match config.backend {
            BackendKind::Libloading => Some(Arc::new(LibloadingBackend)),
            BackendKind::Process => Some(Arc::new(ProcessBackend)),
            BackendKind::None => None,
        };

        for library in config.sub_libraries()? {
            loader = loader.with_library(library);
        }
        for (name, path) in &config.paths {
            let library: SubLibrary = name.parse()?;
            loader.paths.insert(library, path.clone());
        }

        loader.search_dir = config.search_dir.clone();
        loader.filter = config.filter.as_ref().map(|f| f.to_filter());
        Ok(loader)
    }

    pub fn with_backend<B: NativeBackend + 'static>(mut self, backend: B) -> Self {
        self.backend = Some(Arc::new(backend));
        self
    }

    pub fn with_shared_backend(mut self, backend: Arc<dyn NativeBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn with_image(self) -> Self {
        self.with_library(SubLibrary::Image)
    }

    pub fn with_ttf(self) -> Self {
        self.with_library(SubLibrary::Ttf)
    }

    pub fn with_mixer(self) -> Self {
        self.with_library(SubLibrary::Mixer)
    }

    pub fn with_joystick(self) -> Self {
        self.with_library(SubLibrary::Joystick)
    }

    /// 启用子库，核心库总是加载
    pub fn with_library(mut self, library: SubLibrary) -> Self {
        if library != SubLibrary::Core && !self.extensions.contains(&library) {
            self.extensions.push(library);
        }
        self
    }

    /// 启用子库并指定其二进制路径
    pub fn with_library_path(mut self, library: SubLibrary, path: impl Into<PathBuf>) -> Self {
        self.paths.insert(library, path.into());
        self.with_library(library)
    }

    /// 按逻辑名启用子库，未知名称立即失败
    pub fn with_library_name(self, name: &str) -> LinkResult<Self> {
        let library: SubLibrary = name.parse()?;
        Ok(self.with_library(library))
    }

    pub fn with_core_path(self, path: impl Into<PathBuf>) -> Self {
        self.with_library_path(SubLibrary::Core, path)
    }

    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dir = Some(dir.into());
        self
    }

    pub fn with_filter(mut self, filter: FunctionFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// 本次加载的子库（核心在前，其余按 [`SubLibrary::ALL`] 顺序）
    pub fn libraries(&self) -> Vec<SubLibrary> {
        SubLibrary::ALL
            .into_iter()
            .filter(|lib| *lib == SubLibrary::Core || self.extensions.contains(lib))
            .collect()
    }

    /// 子库二进制路径：显式覆盖 > 摇杆沿用核心覆盖 > 搜索目录 > 交给系统链接器
    pub fn resolve_path(&self, library: SubLibrary) -> PathBuf {
        if let Some(path) = self.paths.get(&library) {
            return path.clone();
        }
        if library == SubLibrary::Joystick {
            if let Some(path) = self.paths.get(&SubLibrary::Core) {
                return path.clone();
            }
        }

        let file_name = library_file_name(library.binary_name());
        match &self.search_dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }

    fn bound_signatures(&self, library: SubLibrary) -> impl Iterator<Item = &'static FunctionSignature> + '_ {
        library
            .functions()
            .iter()
            .filter(move |sig| self.filter.as_ref().map_or(true, |f| f.allows(sig.name)))
    }

    /// 加载并返回命名空间
    pub fn load(&self) -> LinkResult<Namespace> {
        let backend = self.backend.clone().ok_or(LinkError::MissingBackend)?;
        let libraries = self.libraries();

        tracing::info!(
            target: "sdl2_link::loader",
            "Loading {} with backend '{}'",
            libraries.iter().map(|l| l.name()).collect::<Vec<_>>().join(", "),
            backend.name()
        );

        if !backend.capabilities().by_value_aggregates {
            for library in &libraries {
                if let Some(sig) = self.bound_signatures(*library).find(|s| s.passes_aggregates()) {
                    return Err(LinkError::UnsupportedByBackend {
                        backend: backend.name().to_string(),
                        symbol: sig.name.to_string(),
                    });
                }
            }
        }

        let mut registry = TypeRegistry::new();
        let mut namespace = Namespace::new();
        let mut opened: HashMap<PathBuf, Arc<dyn NativeLibrary>> = HashMap::new();

        // 每个子库依次登记类型、常量、函数，后登记的同名条目覆盖先前的
        for library in &libraries {
            let known: HashSet<String> = registry.names().map(str::to_string).collect();
            library.register_types(&mut registry)?;
            for name in registry.names().filter(|name| !known.contains(*name)) {
                if let Some(registered) = registry.get(name) {
                    namespace.insert(name, Entry::Type(registered.clone()));
                }
            }
            for table in consts::tables(*library) {
                for (name, value) in table.iter() {
                    namespace.insert(name, Entry::Constant(*value));
                }
            }

            let path = self.resolve_path(*library);
            let handle = match opened.get(&path) {
                Some(handle) => Arc::clone(handle),
                None => {
                    let handle = backend.open(&path).map_err(|reason| LinkError::LibraryNotFound {
                        library: library.name().to_string(),
                        path: path.display().to_string(),
                        reason,
                    })?;
                    tracing::debug!(target: "sdl2_link::loader", "Opened {} from {}", library, path.display());
                    opened.insert(path.clone(), Arc::clone(&handle));
                    namespace.hold(Arc::clone(&handle));
                    handle
                }
            };

            let mut bound = 0usize;
            for sig in self.bound_signatures(*library) {
                let address = handle
                    .symbol(sig.name)
                    .map_err(|reason| LinkError::SymbolNotFound {
                        library: library.name().to_string(),
                        symbol: sig.name.to_string(),
                        reason,
                    })?;
                namespace.insert(sig.name, Entry::Function(BoundFunction::new(sig, address, *library)));
                bound += 1;
            }

            namespace.mark_loaded(*library);
            tracing::debug!(target: "sdl2_link::loader", "Bound {} functions from {}", bound, library);
        }

        namespace.set_registry(registry);

        tracing::info!(
            target: "sdl2_link::loader",
            "Namespace ready: {} entries from {} binaries",
            namespace.len(),
            opened.len()
        );
        Ok(namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_parse_library_names() {
        assert_eq!("SDL2_ttf".parse::<SubLibrary>().unwrap(), SubLibrary::Ttf);
        assert_eq!("SDL2".parse::<SubLibrary>().unwrap(), SubLibrary::Core);

        let err = "SDL2_net".parse::<SubLibrary>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("SDL2_net"));
        for library in SubLibrary::ALL {
            assert!(message.contains(library.name()));
        }
    }

    #[test]
    fn test_joystick_shares_core_binary() {
        assert_eq!(SubLibrary::Joystick.binary_name(), "SDL2");

        let loader = Loader::new().with_joystick().with_core_path("/opt/sdl/libSDL2.so");
        assert_eq!(
            loader.resolve_path(SubLibrary::Joystick),
            Path::new("/opt/sdl/libSDL2.so")
        );
    }

    #[test]
    fn test_resolve_path_uses_search_dir() {
        let loader = Loader::new().with_search_dir("/usr/local/lib").with_mixer();
        assert_eq!(
            loader.resolve_path(SubLibrary::Mixer),
            Path::new("/usr/local/lib").join(library_file_name("SDL2_mixer"))
        );
        assert_eq!(
            Loader::new().resolve_path(SubLibrary::Core),
            PathBuf::from(library_file_name("SDL2"))
        );
    }

    #[test]
    fn test_load_order_is_fixed() {
        let loader = Loader::new().with_joystick().with_ttf().with_image().with_ttf();
        assert_eq!(
            loader.libraries(),
            vec![SubLibrary::Core, SubLibrary::Image, SubLibrary::Ttf, SubLibrary::Joystick]
        );
    }

    #[test]
    fn test_missing_backend_fails_before_io() {
        let err = Loader::new()
            .with_core_path("/definitely/not/here/libSDL2.so")
            .load()
            .unwrap_err();
        assert!(matches!(err, LinkError::MissingBackend));
    }

    #[test]
    fn test_filter() {
        let include = FunctionFilter::include(["SDL_Init"]);
        assert!(include.allows("SDL_Init"));
        assert!(!include.allows("SDL_Quit"));

        let exclude = FunctionFilter::exclude(vec!["SDL_Init".to_string()]);
        assert!(!exclude.allows("SDL_Init"));
        assert!(exclude.allows("SDL_Quit"));
    }

    #[test]
    fn test_from_config() {
        let mut config = LinkConfig::default();
        config.backend = BackendKind::None;
        config.extensions = vec!["SDL2_image".to_string()];
        config
            .paths
            .insert("SDL2_image".to_string(), PathBuf::from("/tmp/img.so"));

        let loader = Loader::from_config(&config).unwrap();
        assert_eq!(loader.libraries(), vec![SubLibrary::Core, SubLibrary::Image]);
        assert_eq!(loader.resolve_path(SubLibrary::Image), Path::new("/tmp/img.so"));
        assert!(matches!(loader.load(), Err(LinkError::MissingBackend)));
    }

    #[test]
    fn test_missing_library_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = Loader::new()
            .with_backend(LibloadingBackend)
            .with_search_dir(dir.path())
            .load()
            .unwrap_err();
        match err {
            LinkError::LibraryNotFound { library, path, .. } => {
                assert_eq!(library, "SDL2");
                assert!(path.contains(&library_file_name("SDL2")));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
