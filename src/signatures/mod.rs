//! 函数签名注册表
//!
//! 按子库分组的声明式 `(符号, 返回类型, 参数类型)` 表：
//! - `core` - SDL2 核心
//! - `image` - SDL2_image
//! - `ttf` - SDL2_ttf
//! - `mixer` - SDL2_mixer
//! - `joystick` - 摇杆与游戏控制器（符号位于 SDL2 核心库）

use std::fmt;

/// 声明签名表
///
/// ```ignore
/// signatures! {
///     pub static FUNCTIONS = {
///         SDL_Init(U32) -> I32;
///         SDL_Quit() -> Void;
///     }
/// }
/// ```
macro_rules! signatures {
    ($(#[$meta:meta])* $vis:vis static $table:ident = {
        $($name:ident ( $($param:expr),* $(,)? ) -> $ret:expr;)*
    }) => {
        $(#[$meta])*
        $vis static $table: &[$crate::signatures::FunctionSignature] = &[
            $(
                $crate::signatures::FunctionSignature {
                    name: stringify!($name),
                    ret: $ret,
                    params: &[$($param),*],
                },
            )*
        ];
    };
}

pub mod core;
pub mod image;
pub mod joystick;
pub mod mixer;
pub mod ttf;

/// 原生参数/返回值类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeType {
    Void,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    /// `size_t`
    Usize,
    /// C `long`，Windows 上为32位
    Long,
    /// 数据指针
    Ptr,
    /// 以 NUL 结尾的字符串
    CStr,
    /// 函数指针
    FnPtr,
    /// 按值传递的结构体
    Aggregate(&'static str),
}

/// 调用约定层面的类型分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbiClass {
    Void,
    Integer(usize),
    Float(usize),
    Pointer,
    Aggregate(&'static str),
}

impl NativeType {
    pub fn abi_class(self) -> AbiClass {
        match self {
            NativeType::Void => AbiClass::Void,
            NativeType::I8 | NativeType::U8 => AbiClass::Integer(1),
            NativeType::I16 | NativeType::U16 => AbiClass::Integer(2),
            NativeType::I32 | NativeType::U32 => AbiClass::Integer(4),
            NativeType::I64 | NativeType::U64 => AbiClass::Integer(8),
            NativeType::Usize => AbiClass::Integer(std::mem::size_of::<usize>()),
            NativeType::Long => AbiClass::Integer(std::mem::size_of::<std::os::raw::c_long>()),
            NativeType::F32 => AbiClass::Float(4),
            NativeType::F64 => AbiClass::Float(8),
            NativeType::Ptr | NativeType::CStr | NativeType::FnPtr => AbiClass::Pointer,
            NativeType::Aggregate(name) => AbiClass::Aggregate(name),
        }
    }

    pub fn is_aggregate(self) -> bool {
        matches!(self, NativeType::Aggregate(_))
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NativeType::Void => "void",
            NativeType::I8 => "int8",
            NativeType::U8 => "uint8",
            NativeType::I16 => "int16",
            NativeType::U16 => "uint16",
            NativeType::I32 => "int32",
            NativeType::U32 => "uint32",
            NativeType::I64 => "int64",
            NativeType::U64 => "uint64",
            NativeType::F32 => "float",
            NativeType::F64 => "double",
            NativeType::Usize => "size_t",
            NativeType::Long => "long",
            NativeType::Ptr => "void*",
            NativeType::CStr => "char*",
            NativeType::FnPtr => "fn*",
            NativeType::Aggregate(name) => name,
        };
        f.write_str(name)
    }
}

/// 函数签名
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: &'static str,
    pub ret: NativeType,
    pub params: &'static [NativeType],
}

impl FunctionSignature {
    /// 是否按值传递或返回结构体
    pub fn passes_aggregates(&self) -> bool {
        self.ret.is_aggregate() || self.params.iter().any(|p| p.is_aggregate())
    }

    /// 与另一组类型在调用约定层面是否一致
    pub fn abi_compatible(&self, ret: NativeType, params: &[NativeType]) -> bool {
        self.ret.abi_class() == ret.abi_class()
            && self.params.len() == params.len()
            && self
                .params
                .iter()
                .zip(params)
                .all(|(a, b)| a.abi_class() == b.abi_class())
    }
}

/// 格式化为 C 风格原型，例如 `int32(uint32)`
pub fn format_prototype(ret: NativeType, params: &[NativeType]) -> String {
    let params: Vec<String> = params.iter().map(ToString::to_string).collect();
    format!("{}({})", ret, params.join(", "))
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, format_prototype(self.ret, self.params))
    }
}

/// Rust 类型到原生类型的映射，用于类型化的函数查找
pub trait NativeArg {
    const NATIVE_TYPE: NativeType;
}

macro_rules! native_arg {
    ($($ty:ty => $native:ident),* $(,)?) => {
        $(impl NativeArg for $ty { const NATIVE_TYPE: NativeType = NativeType::$native; })*
    };
}

native_arg! {
    () => Void,
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    usize => Usize,
    isize => Usize,
}

impl<T> NativeArg for *mut T {
    const NATIVE_TYPE: NativeType = NativeType::Ptr;
}

impl<T> NativeArg for *const T {
    const NATIVE_TYPE: NativeType = NativeType::Ptr;
}

macro_rules! fn_pointer_arg {
    ($($arg:ident),*) => {
        impl<R, $($arg),*> NativeArg for Option<unsafe extern "C" fn($($arg),*) -> R> {
            const NATIVE_TYPE: NativeType = NativeType::FnPtr;
        }
        impl<R, $($arg),*> NativeArg for unsafe extern "C" fn($($arg),*) -> R {
            const NATIVE_TYPE: NativeType = NativeType::FnPtr;
        }
    };
}

fn_pointer_arg!();
fn_pointer_arg!(A);
fn_pointer_arg!(A, B);
fn_pointer_arg!(A, B, C);
fn_pointer_arg!(A, B, C, D);
fn_pointer_arg!(A, B, C, D, E);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abi_classes() {
        assert_eq!(NativeType::CStr.abi_class(), NativeType::Ptr.abi_class());
        assert_eq!(NativeType::I32.abi_class(), NativeType::U32.abi_class());
        assert_ne!(NativeType::I32.abi_class(), NativeType::F32.abi_class());
        assert_ne!(
            NativeType::Aggregate("SDL_Color").abi_class(),
            NativeType::Aggregate("SDL_JoystickGUID").abi_class()
        );
    }

    #[test]
    fn test_signature_display() {
        let sig = FunctionSignature {
            name: "SDL_Init",
            ret: NativeType::I32,
            params: &[NativeType::U32],
        };
        assert_eq!(sig.to_string(), "SDL_Init int32(uint32)");
        assert!(!sig.passes_aggregates());
        assert!(sig.abi_compatible(NativeType::U32, &[NativeType::I32]));
        assert!(!sig.abi_compatible(NativeType::I32, &[]));
    }

    #[test]
    fn test_native_arg_mapping() {
        assert_eq!(<*const u8 as NativeArg>::NATIVE_TYPE, NativeType::Ptr);
        assert_eq!(<() as NativeArg>::NATIVE_TYPE, NativeType::Void);
        assert_eq!(
            <Option<unsafe extern "C" fn(i32)> as NativeArg>::NATIVE_TYPE,
            NativeType::FnPtr
        );
    }

    #[test]
    fn test_no_duplicate_symbols_per_table() {
        for table in [
            super::core::FUNCTIONS,
            super::image::FUNCTIONS,
            super::ttf::FUNCTIONS,
            super::mixer::FUNCTIONS,
            super::joystick::FUNCTIONS,
        ] {
            let mut names: Vec<&str> = table.iter().map(|s| s.name).collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total);
        }
    }

    #[test]
    fn test_by_value_aggregates_are_declared() {
        let render = ttf::FUNCTIONS
            .iter()
            .find(|s| s.name == "TTF_RenderUTF8_Blended")
            .unwrap();
        assert_eq!(render.params[2], NativeType::Aggregate("SDL_Color"));
        assert!(joystick::FUNCTIONS.iter().any(|s| s.passes_aggregates()));
        assert!(!super::core::FUNCTIONS.iter().any(|s| s.passes_aggregates()));
    }
}
