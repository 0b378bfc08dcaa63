//! 字段类型与类型描述符
//!
//! 描述符只记录字段顺序和语义类型，布局由 [`TypeRegistry`](super::TypeRegistry) 计算。

use std::fmt;

/// 标量字段类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
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
}

impl Scalar {
    pub const fn size(self) -> usize {
        match self {
            Scalar::I8 | Scalar::U8 => 1,
            Scalar::I16 | Scalar::U16 => 2,
            Scalar::I32 | Scalar::U32 | Scalar::F32 => 4,
            Scalar::I64 | Scalar::U64 | Scalar::F64 => 8,
            Scalar::Usize => std::mem::size_of::<usize>(),
        }
    }

    pub const fn align(self) -> usize {
        match self {
            Scalar::I8 | Scalar::U8 => std::mem::align_of::<u8>(),
            Scalar::I16 | Scalar::U16 => std::mem::align_of::<u16>(),
            Scalar::I32 | Scalar::U32 => std::mem::align_of::<u32>(),
            Scalar::F32 => std::mem::align_of::<f32>(),
            Scalar::I64 | Scalar::U64 => std::mem::align_of::<u64>(),
            Scalar::F64 => std::mem::align_of::<f64>(),
            Scalar::Usize => std::mem::align_of::<usize>(),
        }
    }

    pub const fn is_float(self) -> bool {
        matches!(self, Scalar::F32 | Scalar::F64)
    }

    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Scalar::I8 | Scalar::I16 | Scalar::I32 | Scalar::I64 | Scalar::F32 | Scalar::F64
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            Scalar::I8 => "int8",
            Scalar::U8 => "uint8",
            Scalar::I16 => "int16",
            Scalar::U16 => "uint16",
            Scalar::I32 => "int32",
            Scalar::U32 => "uint32",
            Scalar::I64 => "int64",
            Scalar::U64 => "uint64",
            Scalar::F32 => "float",
            Scalar::F64 => "double",
            Scalar::Usize => "size_t",
        }
    }
}

/// 结构体字段的语义类型
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Scalar(Scalar),
    /// 数据指针
    Pointer,
    /// 函数指针
    FnPointer,
    /// 定长数组
    Array(Box<FieldType>, usize),
    /// 已注册的结构体或联合体
    Named(String),
}

impl FieldType {
    pub fn array(element: FieldType, len: usize) -> Self {
        FieldType::Array(Box::new(element), len)
    }

    pub fn named(name: impl Into<String>) -> Self {
        FieldType::Named(name.into())
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Scalar(s) => f.write_str(s.name()),
            FieldType::Pointer => f.write_str("pointer"),
            FieldType::FnPointer => f.write_str("function pointer"),
            FieldType::Array(elem, len) => write!(f, "{}[{}]", elem, len),
            FieldType::Named(name) => f.write_str(name),
        }
    }
}

/// 复合类型种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Struct,
    Union,
}

/// 结构体/联合体描述符
///
/// ```rust
/// use sdl2_link::abi::{FieldType, Scalar, TypeDescriptor};
///
/// let rect = TypeDescriptor::structure("SDL_Rect")
///     .field("x", FieldType::Scalar(Scalar::I32))
///     .field("y", FieldType::Scalar(Scalar::I32))
///     .field("w", FieldType::Scalar(Scalar::I32))
///     .field("h", FieldType::Scalar(Scalar::I32));
/// assert_eq!(rect.fields().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    name: String,
    kind: TypeKind,
    packed: bool,
    fields: Vec<(String, FieldType)>,
}

impl TypeDescriptor {
    pub fn structure(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Struct,
            packed: false,
            fields: Vec::new(),
        }
    }

    pub fn union(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Union,
            packed: false,
            fields: Vec::new(),
        }
    }

    /// 按 1 字节对齐排布（`#pragma pack(1)` / `__attribute__((packed))`）
    pub fn packed(mut self) -> Self {
        self.packed = true;
        self
    }

    pub fn field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.fields.push((name.into(), ty));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn is_packed(&self) -> bool {
        self.packed
    }

    pub fn fields(&self) -> &[(String, FieldType)] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_sizes() {
        assert_eq!(Scalar::U8.size(), 1);
        assert_eq!(Scalar::I16.size(), 2);
        assert_eq!(Scalar::F32.size(), 4);
        assert_eq!(Scalar::F64.size(), 8);
        assert_eq!(Scalar::Usize.size(), std::mem::size_of::<usize>());
        assert!(Scalar::F32.is_float());
        assert!(!Scalar::U64.is_signed());
    }

    #[test]
    fn test_field_type_display() {
        let ty = FieldType::array(FieldType::Scalar(Scalar::U8), 32);
        assert_eq!(ty.to_string(), "uint8[32]");
        assert_eq!(FieldType::named("SDL_Rect").to_string(), "SDL_Rect");
    }

    #[test]
    fn test_builder_keeps_order() {
        let desc = TypeDescriptor::union("SDL_WindowShapeParams")
            .field("binarizationCutoff", FieldType::Scalar(Scalar::U8))
            .field("colorKey", FieldType::named("SDL_Color"));

        assert_eq!(desc.kind(), TypeKind::Union);
        assert!(!desc.is_packed());
        assert_eq!(desc.fields()[0].0, "binarizationCutoff");
        assert_eq!(desc.fields()[1].1, FieldType::named("SDL_Color"));
    }
}
