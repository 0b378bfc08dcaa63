//! Rust 镜像类型与描述符之间的桥接
//!
//! `sys` 中的每个 `#[repr(C)]` 类型都实现 [`NativeStruct`]，
//! 由编译器计算的布局可以与注册表计算的布局逐字段比对。

use bytemuck::Zeroable;

use super::registry::TypeRegistry;
use super::types::{FieldType, Scalar, TypeDescriptor};
use crate::core::error::MarshalResult;

/// SDL 结构体/联合体的 Rust 镜像
///
/// # Safety
///
/// 实现者必须是 `#[repr(C)]`（或 `repr(C, packed)`）类型，只包含整数、浮点、
/// 原始指针、`Option<extern fn>` 以及其他 `NativeStruct`，
/// 因此任意非空指针位模式都是合法值；`descriptor()` 必须与字段声明一致。
pub unsafe trait NativeStruct: Copy + Zeroable + 'static {
    /// C 头文件中的类型名
    const NAME: &'static str;

    fn descriptor() -> TypeDescriptor;

    /// 编译器给出的字段偏移（联合体成员均为0）
    fn field_offsets() -> Vec<(&'static str, usize)>;
}

/// 能作为结构体字段出现的 Rust 类型
pub trait NativeField {
    fn field_type() -> FieldType;
}

macro_rules! scalar_field {
    ($($ty:ty => $scalar:ident),* $(,)?) => {
        $(
            impl NativeField for $ty {
                fn field_type() -> FieldType {
                    FieldType::Scalar(Scalar::$scalar)
                }
            }
        )*
    };
}

scalar_field! {
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
}

impl<T> NativeField for *mut T {
    fn field_type() -> FieldType {
        FieldType::Pointer
    }
}

impl<T> NativeField for *const T {
    fn field_type() -> FieldType {
        FieldType::Pointer
    }
}

impl<T: NativeField, const N: usize> NativeField for [T; N] {
    fn field_type() -> FieldType {
        FieldType::array(T::field_type(), N)
    }
}

macro_rules! fn_pointer_field {
    ($($arg:ident),*) => {
        impl<R, $($arg),*> NativeField for Option<unsafe extern "C" fn($($arg),*) -> R> {
            fn field_type() -> FieldType {
                FieldType::FnPointer
            }
        }
    };
}

fn_pointer_field!();
fn_pointer_field!(A);
fn_pointer_field!(A, B);
fn_pointer_field!(A, B, C);
fn_pointer_field!(A, B, C, D);
fn_pointer_field!(A, B, C, D, E);
fn_pointer_field!(A, B, C, D, E, F);

/// 比对注册表布局与编译器布局，返回不一致之处的描述
pub fn layout_mismatches<T: NativeStruct>(registry: &TypeRegistry) -> MarshalResult<Vec<String>> {
    let layout = registry.layout(T::NAME)?;
    let mut problems = Vec::new();

    if layout.size != std::mem::size_of::<T>() {
        problems.push(format!(
            "{}: size {} != compiler size {}",
            T::NAME,
            layout.size,
            std::mem::size_of::<T>()
        ));
    }
    if layout.align != std::mem::align_of::<T>() {
        problems.push(format!(
            "{}: align {} != compiler align {}",
            T::NAME,
            layout.align,
            std::mem::align_of::<T>()
        ));
    }
    for (field, offset) in T::field_offsets() {
        match layout.offset_of(field) {
            Some(computed) if computed == offset => {}
            Some(computed) => problems.push(format!(
                "{}.{}: offset {} != compiler offset {}",
                T::NAME,
                field,
                computed,
                offset
            )),
            None => problems.push(format!("{}.{}: missing from descriptor", T::NAME, field)),
        }
    }

    Ok(problems)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_types() {
        assert_eq!(<u16 as NativeField>::field_type(), FieldType::Scalar(Scalar::U16));
        assert_eq!(<*mut u8 as NativeField>::field_type(), FieldType::Pointer);
        assert_eq!(
            <[i32; 3] as NativeField>::field_type(),
            FieldType::array(FieldType::Scalar(Scalar::I32), 3)
        );
        assert_eq!(
            <Option<unsafe extern "C" fn(*mut u8, u16)> as NativeField>::field_type(),
            FieldType::FnPointer
        );
    }
}
