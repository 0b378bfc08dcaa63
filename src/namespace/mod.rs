//! 命名空间合成
//!
//! 把常量、类型和已绑定函数合并为一张扁平的 `名称 → 条目` 表。
//! 后注册的同名条目覆盖先前的条目（记录 debug 日志，不报错）。
//! 加载完成后只读，可在线程间共享。

mod function;

pub use function::{BoundFunction, NativeFn};

use std::collections::HashMap;
use std::sync::Arc;

use crate::abi::{Layout, RegisteredType, TypeRegistry};
use crate::core::error::{LinkError, LinkResult};
use crate::loader::{NativeLibrary, SubLibrary};
use crate::signatures::format_prototype;

/// 命名空间条目
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Constant(i64),
    Type(RegisteredType),
    Function(BoundFunction),
}

impl Entry {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Entry::Constant(_) => "constant",
            Entry::Type(_) => "type",
            Entry::Function(_) => "function",
        }
    }
}

/// 条目计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NamespaceStats {
    pub constants: usize,
    pub types: usize,
    pub functions: usize,
}

/// 合并后的命名空间
#[derive(Debug, Default)]
pub struct Namespace {
    entries: HashMap<String, Entry>,
    registry: TypeRegistry,
    libraries: Vec<SubLibrary>,
    handles: Vec<Arc<dyn NativeLibrary>>,
}

impl Namespace {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: &str, entry: Entry) {
        if let Some(previous) = self.entries.insert(name.to_string(), entry) {
            tracing::debug!(
                target: "sdl2_link::namespace",
                "{} overwrites previous {} entry",
                name,
                previous.kind_name()
            );
        }
    }

    pub(crate) fn hold(&mut self, handle: Arc<dyn NativeLibrary>) {
        self.handles.push(handle);
    }

    pub(crate) fn mark_loaded(&mut self, library: SubLibrary) {
        if !self.libraries.contains(&library) {
            self.libraries.push(library);
        }
    }

    pub(crate) fn set_registry(&mut self, registry: TypeRegistry) {
        self.registry = registry;
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn constant(&self, name: &str) -> Option<i64> {
        match self.entries.get(name)? {
            Entry::Constant(value) => Some(*value),
            _ => None,
        }
    }

    pub fn type_layout(&self, name: &str) -> Option<&Layout> {
        match self.entries.get(name)? {
            Entry::Type(registered) => Some(&registered.layout),
            _ => None,
        }
    }

    pub fn bound_function(&self, name: &str) -> LinkResult<&BoundFunction> {
        match self.entries.get(name) {
            Some(Entry::Function(function)) => Ok(function),
            _ => Err(LinkError::FunctionNotBound(name.to_string())),
        }
    }

    /// 以指定的函数指针类型取出已绑定函数
    ///
    /// 类型在调用约定层面与声明比对（参数个数、整数/浮点宽度、指针、按值结构体名），
    /// 不一致时返回 `SignatureMismatch`。
    ///
    /// ```ignore
    /// let init = ns.function::<unsafe extern "C" fn(u32) -> i32>("SDL_Init")?;
    /// unsafe { init(SDL_INIT_VIDEO) };
    /// ```
    pub fn function<F: NativeFn>(&self, name: &str) -> LinkResult<F> {
        let bound = self.bound_function(name)?;
        let signature = bound.signature();
        let (ret, params) = (F::ret(), F::params());

        if !signature.abi_compatible(ret, &params) {
            return Err(LinkError::SignatureMismatch {
                name: name.to_string(),
                declared: format_prototype(signature.ret, signature.params),
                requested: format_prototype(ret, &params),
            });
        }

        // SAFETY: 地址来自已打开且由本命名空间持有的库，类型已与声明比对
        Ok(unsafe { F::from_address(bound.address()) })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// 全部条目名（排序后）
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> NamespaceStats {
        self.entries
            .values()
            .fold(NamespaceStats::default(), |mut stats, entry| {
                match entry {
                    Entry::Constant(_) => stats.constants += 1,
                    Entry::Type(_) => stats.types += 1,
                    Entry::Function(_) => stats.functions += 1,
                }
                stats
            })
    }

    /// 本命名空间使用的类型注册表
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// 已加载的子库（加载顺序）
    pub fn libraries(&self) -> &[SubLibrary] {
        &self.libraries
    }

    pub fn has_library(&self, library: SubLibrary) -> bool {
        self.libraries.contains(&library)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::SymbolAddress;
    use crate::signatures::{FunctionSignature, NativeType};

    static ADD: FunctionSignature = FunctionSignature {
        name: "test_add",
        ret: NativeType::I32,
        params: &[NativeType::I32, NativeType::I32],
    };

    extern "C" fn add(a: i32, b: i32) -> i32 {
        a + b
    }

    fn namespace() -> Namespace {
        let mut ns = Namespace::new();
        let address = SymbolAddress::new(add as extern "C" fn(i32, i32) -> i32 as *const _).unwrap();
        ns.insert("test_add", Entry::Function(BoundFunction::new(&ADD, address, SubLibrary::Core)));
        ns.insert("TEST_VALUE", Entry::Constant(7));
        ns
    }

    #[test]
    fn test_typed_lookup() {
        let ns = namespace();
        let f = ns
            .function::<unsafe extern "C" fn(i32, i32) -> i32>("test_add")
            .unwrap();
        assert_eq!(unsafe { f(2, 3) }, 5);

        // 有符号与无符号同宽，调用约定一致
        assert!(ns.function::<unsafe extern "C" fn(u32, u32) -> u32>("test_add").is_ok());
    }

    #[test]
    fn test_signature_mismatch() {
        let ns = namespace();
        let err = ns
            .function::<unsafe extern "C" fn(i32) -> i32>("test_add")
            .unwrap_err();
        match err {
            LinkError::SignatureMismatch { declared, requested, .. } => {
                assert_eq!(declared, "int32(int32, int32)");
                assert_eq!(requested, "int32(int32)");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(ns.function::<unsafe extern "C" fn(f64, i32) -> i32>("test_add").is_err());
    }

    #[test]
    fn test_lookup_kinds() {
        let ns = namespace();
        assert_eq!(ns.constant("TEST_VALUE"), Some(7));
        assert_eq!(ns.constant("test_add"), None);
        assert!(matches!(
            ns.bound_function("TEST_VALUE"),
            Err(LinkError::FunctionNotBound(_))
        ));
        assert_eq!(ns.names(), vec!["TEST_VALUE", "test_add"]);
        assert_eq!(
            ns.stats(),
            NamespaceStats {
                constants: 1,
                types: 0,
                functions: 1
            }
        );
    }

    #[test]
    fn test_later_entry_overwrites() {
        let mut ns = namespace();
        ns.insert("TEST_VALUE", Entry::Constant(9));
        assert_eq!(ns.constant("TEST_VALUE"), Some(9));
        assert_eq!(ns.len(), 2);
    }

    #[test]
    fn test_namespace_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Namespace>();
    }
}
