//! 类型注册表
//!
//! 显式构造、按引用传递的注册表：注册描述符时按C的自然对齐规则计算布局并缓存，
//! 之后负责 [`Value`] 与原生字节之间的编组。

use std::collections::BTreeMap;
use std::ops::Range;

use super::buffer::NativeBuffer;
use super::native::NativeStruct;
use super::types::{FieldType, Scalar, TypeDescriptor, TypeKind};
use super::value::Value;
use crate::core::error::{MarshalError, MarshalResult};

/// 字段布局
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    pub name: String,
    pub ty: FieldType,
    pub offset: usize,
    pub size: usize,
}

/// 计算得到的内存布局
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub size: usize,
    pub align: usize,
    pub fields: Vec<FieldLayout>,
}

impl Layout {
    pub fn field(&self, name: &str) -> Option<&FieldLayout> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn offset_of(&self, name: &str) -> Option<usize> {
        self.field(name).map(|f| f.offset)
    }
}

/// 已注册的类型：描述符与其布局
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredType {
    pub descriptor: TypeDescriptor,
    pub layout: Layout,
}

const fn align_up(offset: usize, align: usize) -> usize {
    (offset + align - 1) / align * align
}

/// 类型注册表
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    types: BTreeMap<String, RegisteredType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册描述符并计算布局
    ///
    /// 嵌套的具名类型必须已经注册。同名类型会被替换；
    /// 若定义改变且已有其他类型嵌入它，返回 `TypeInUse`。
    pub fn register(&mut self, descriptor: TypeDescriptor) -> MarshalResult<&Layout> {
        let layout = self.compute_layout(&descriptor)?;
        let name = descriptor.name().to_string();

        if let Some(existing) = self.types.get(&name) {
            if existing.descriptor != descriptor {
                if let Some(user) = self.embedding_type(&name) {
                    return Err(MarshalError::TypeInUse {
                        type_name: name,
                        used_by: user.to_string(),
                    });
                }
                tracing::trace!(target: "sdl2_link::abi", "Replacing type {}", name);
            }
        }

        self.types
            .insert(name.clone(), RegisteredType { descriptor, layout });
        Ok(&self.types[&name].layout)
    }

    /// 第一个以字段嵌入 `name` 的已注册类型
    fn embedding_type(&self, name: &str) -> Option<&str> {
        fn embeds(ty: &FieldType, name: &str) -> bool {
            match ty {
                FieldType::Named(inner) => inner == name,
                FieldType::Array(elem, _) => embeds(elem, name),
                _ => false,
            }
        }

        self.types
            .values()
            .find(|t| t.descriptor.fields().iter().any(|(_, ty)| embeds(ty, name)))
            .map(|t| t.descriptor.name())
    }

    /// 注册一个 Rust 镜像类型
    pub fn register_native<T: NativeStruct>(&mut self) -> MarshalResult<&Layout> {
        self.register(T::descriptor())
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredType> {
        self.types.get(name)
    }

    pub fn layout(&self, name: &str) -> MarshalResult<&Layout> {
        self.lookup(name).map(|t| &t.layout)
    }

    pub fn descriptor(&self, name: &str) -> MarshalResult<&TypeDescriptor> {
        self.lookup(name).map(|t| &t.descriptor)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// 已注册的类型名（按字典序）
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn lookup(&self, name: &str) -> MarshalResult<&RegisteredType> {
        self.types
            .get(name)
            .ok_or_else(|| MarshalError::UnknownType(name.to_string()))
    }

    fn size_align(&self, ty: &FieldType) -> MarshalResult<(usize, usize)> {
        match ty {
            FieldType::Scalar(s) => Ok((s.size(), s.align())),
            FieldType::Pointer | FieldType::FnPointer => Ok((
                std::mem::size_of::<usize>(),
                std::mem::align_of::<usize>(),
            )),
            FieldType::Array(elem, len) => {
                let (size, align) = self.size_align(elem)?;
                Ok((size * len, align))
            }
            FieldType::Named(name) => {
                let layout = self.layout(name)?;
                Ok((layout.size, layout.align))
            }
        }
    }

    fn compute_layout(&self, descriptor: &TypeDescriptor) -> MarshalResult<Layout> {
        let mut fields = Vec::with_capacity(descriptor.fields().len());
        let mut offset = 0usize;
        let mut size = 0usize;
        let mut max_align = 1usize;

        for (name, ty) in descriptor.fields() {
            let (field_size, natural_align) = self.size_align(ty)?;
            let align = if descriptor.is_packed() { 1 } else { natural_align };
            max_align = max_align.max(align);

            let field_offset = match descriptor.kind() {
                TypeKind::Struct => {
                    offset = align_up(offset, align);
                    let at = offset;
                    offset += field_size;
                    size = offset;
                    at
                }
                TypeKind::Union => {
                    size = size.max(field_size);
                    0
                }
            };

            fields.push(FieldLayout {
                name: name.clone(),
                ty: ty.clone(),
                offset: field_offset,
                size: field_size,
            });
        }

        Ok(Layout {
            size: align_up(size, max_align),
            align: max_align,
            fields,
        })
    }

    // ========================================================================
    // 编组
    // ========================================================================

    /// 把值编码为原生字节，未给出的字段以零填充
    pub fn encode(&self, name: &str, value: &Value) -> MarshalResult<Vec<u8>> {
        let layout = self.layout(name)?;
        let mut bytes = vec![0u8; layout.size];
        self.encode_into(name, value, &mut bytes)?;
        Ok(bytes)
    }

    /// 编码到调用方提供的缓冲区，未给出的字段保持原样
    pub fn encode_into(&self, name: &str, value: &Value, out: &mut [u8]) -> MarshalResult<()> {
        let layout = self.layout(name)?;
        if out.len() < layout.size {
            return Err(MarshalError::BufferSize {
                type_name: name.to_string(),
                expected: layout.size,
                found: out.len(),
            });
        }
        let mut written = vec![false; layout.size];
        self.encode_named(name, value, name, &mut out[..layout.size], &mut written)
    }

    /// 从原生字节解码，结构体得到全部字段，联合体得到全部成员的解释
    pub fn decode(&self, name: &str, bytes: &[u8]) -> MarshalResult<Value> {
        let layout = self.layout(name)?;
        if bytes.len() < layout.size {
            return Err(MarshalError::BufferSize {
                type_name: name.to_string(),
                expected: layout.size,
                found: bytes.len(),
            });
        }
        self.decode_named(name, &bytes[..layout.size])
    }

    /// 分配8字节对齐、零初始化的原生缓冲区，可选地写入初始值
    pub fn alloc(&self, name: &str, value: Option<&Value>) -> MarshalResult<NativeBuffer> {
        let layout = self.layout(name)?;
        let mut buffer = NativeBuffer::zeroed(name, layout.size);
        if let Some(value) = value {
            self.encode_into(name, value, buffer.as_bytes_mut())?;
        }
        Ok(buffer)
    }

    /// 读取原生指针指向的结构体，空指针返回 `None`
    ///
    /// # Safety
    ///
    /// `ptr` 为空或指向至少 `layout(name).size` 个可读字节。
    pub unsafe fn read_from_ptr(
        &self,
        name: &str,
        ptr: *const std::ffi::c_void,
    ) -> MarshalResult<Option<Value>> {
        if ptr.is_null() {
            return Ok(None);
        }
        let layout = self.layout(name)?;
        let bytes = std::slice::from_raw_parts(ptr as *const u8, layout.size);
        self.decode_named(name, bytes).map(Some)
    }

    /// `written` 与 `out` 等长，记录实际写入过的字节（填充字节保持 `false`）
    fn encode_named(
        &self,
        name: &str,
        value: &Value,
        path: &str,
        out: &mut [u8],
        written: &mut [bool],
    ) -> MarshalResult<()> {
        let entry = self.lookup(name)?;
        let fields = match value {
            Value::Record(fields) => fields,
            other => {
                return Err(MarshalError::TypeMismatch {
                    path: path.to_string(),
                    expected: name.to_string(),
                    found: other.kind_name().to_string(),
                })
            }
        };

        if entry.descriptor.kind() == TypeKind::Union {
            return self.encode_union(entry, fields, path, out, written);
        }

        for (field_name, field_value) in fields {
            let field = field_of(entry, field_name)?;
            let range = slot(name, field, out.len())?;
            let field_path = format!("{}.{}", path, field_name);
            self.encode_field(
                &field.ty,
                field_value,
                &field_path,
                &mut out[range.clone()],
                &mut written[range],
            )?;
        }
        Ok(())
    }

    /// 联合体可以同时给出多个成员，只要它们在重叠的字节上一致
    fn encode_union(
        &self,
        entry: &RegisteredType,
        fields: &[(String, Value)],
        path: &str,
        out: &mut [u8],
        written: &mut [bool],
    ) -> MarshalResult<()> {
        let name = entry.descriptor.name();
        let mut merged = vec![0u8; out.len()];
        let mut merged_written = vec![false; out.len()];

        for (field_name, field_value) in fields {
            let field = field_of(entry, field_name)?;
            let range = slot(name, field, out.len())?;
            let mut member = vec![0u8; field.size];
            let mut member_written = vec![false; field.size];
            self.encode_field(
                &field.ty,
                field_value,
                &format!("{}.{}", path, field_name),
                &mut member,
                &mut member_written,
            )?;

            for (i, at) in range.enumerate() {
                if !member_written[i] {
                    continue;
                }
                if merged_written[at] && merged[at] != member[i] {
                    return Err(MarshalError::AmbiguousUnion(name.to_string()));
                }
                merged[at] = member[i];
                merged_written[at] = true;
            }
        }

        for (at, was_written) in merged_written.into_iter().enumerate() {
            if was_written {
                out[at] = merged[at];
                written[at] = true;
            }
        }
        Ok(())
    }

    fn encode_field(
        &self,
        ty: &FieldType,
        value: &Value,
        path: &str,
        out: &mut [u8],
        written: &mut [bool],
    ) -> MarshalResult<()> {
        let (size, _) = self.size_align(ty)?;
        if out.len() < size {
            return Err(MarshalError::BufferSize {
                type_name: path.to_string(),
                expected: size,
                found: out.len(),
            });
        }

        let mismatch = || MarshalError::TypeMismatch {
            path: path.to_string(),
            expected: ty.to_string(),
            found: value.kind_name().to_string(),
        };

        match ty {
            FieldType::Scalar(scalar) if scalar.is_float() => {
                let v = match *value {
                    Value::Float(v) => v,
                    Value::Int(v) => v as f64,
                    Value::Uint(v) => v as f64,
                    _ => return Err(mismatch()),
                };
                match scalar {
                    Scalar::F32 => out[..4].copy_from_slice(&(v as f32).to_ne_bytes()),
                    _ => out[..8].copy_from_slice(&v.to_ne_bytes()),
                }
            }
            FieldType::Scalar(scalar) => {
                let wide = match *value {
                    Value::Int(v) => i128::from(v),
                    Value::Uint(v) => i128::from(v),
                    _ => return Err(mismatch()),
                };
                write_int(*scalar, wide, &mut out[..size]).ok_or_else(|| MarshalError::OutOfRange {
                    path: path.to_string(),
                    ty: ty.to_string(),
                    value: wide,
                })?;
            }
            FieldType::Pointer | FieldType::FnPointer => {
                let addr = match *value {
                    Value::Pointer(v) => Some(v),
                    Value::Uint(v) => usize::try_from(v).ok(),
                    Value::Int(0) => Some(0),
                    _ => return Err(mismatch()),
                };
                let addr = addr.ok_or_else(|| MarshalError::OutOfRange {
                    path: path.to_string(),
                    ty: ty.to_string(),
                    value: value.as_u64().map_or(0, i128::from),
                })?;
                out[..size].copy_from_slice(&addr.to_ne_bytes());
            }
            FieldType::Array(elem, capacity) => {
                let items = match value {
                    Value::Array(items) => items,
                    _ => return Err(mismatch()),
                };
                if items.len() > *capacity {
                    return Err(MarshalError::ArrayOverflow {
                        path: path.to_string(),
                        capacity: *capacity,
                        found: items.len(),
                    });
                }
                let (elem_size, _) = self.size_align(elem)?;
                for (i, item) in items.iter().enumerate() {
                    let range = i * elem_size..(i + 1) * elem_size;
                    self.encode_field(
                        elem,
                        item,
                        &format!("{}[{}]", path, i),
                        &mut out[range.clone()],
                        &mut written[range],
                    )?;
                }
                return Ok(());
            }
            FieldType::Named(name) => {
                return self.encode_named(name, value, path, &mut out[..size], &mut written[..size])
            }
        }

        written[..size].fill(true);
        Ok(())
    }

    fn decode_named(&self, name: &str, bytes: &[u8]) -> MarshalResult<Value> {
        let entry = self.lookup(name)?;
        let mut fields = Vec::with_capacity(entry.layout.fields.len());
        for field in &entry.layout.fields {
            let range = slot(name, field, bytes.len())?;
            fields.push((field.name.clone(), self.decode_field(&field.ty, &bytes[range])?));
        }
        Ok(Value::Record(fields))
    }

    fn decode_field(&self, ty: &FieldType, bytes: &[u8]) -> MarshalResult<Value> {
        let (size, _) = self.size_align(ty)?;
        if bytes.len() < size {
            return Err(MarshalError::BufferSize {
                type_name: ty.to_string(),
                expected: size,
                found: bytes.len(),
            });
        }

        Ok(match ty {
            FieldType::Scalar(scalar) => read_scalar(*scalar, bytes),
            FieldType::Pointer | FieldType::FnPointer => {
                Value::Pointer(usize::from_ne_bytes(take(bytes)))
            }
            FieldType::Array(elem, len) => {
                let (elem_size, _) = self.size_align(elem)?;
                let items = (0..*len)
                    .map(|i| self.decode_field(elem, &bytes[i * elem_size..(i + 1) * elem_size]))
                    .collect::<MarshalResult<Vec<_>>>()?;
                Value::Array(items)
            }
            FieldType::Named(name) => self.decode_named(name, &bytes[..size])?,
        })
    }
}

fn field_of<'a>(entry: &'a RegisteredType, field: &str) -> MarshalResult<&'a FieldLayout> {
    entry.layout.field(field).ok_or_else(|| MarshalError::UnknownField {
        type_name: entry.descriptor.name().to_string(),
        field: field.to_string(),
    })
}

/// 字段在长度为 `len` 的缓冲区中的字节范围
fn slot(type_name: &str, field: &FieldLayout, len: usize) -> MarshalResult<Range<usize>> {
    let end = field.offset + field.size;
    if end > len {
        return Err(MarshalError::BufferSize {
            type_name: type_name.to_string(),
            expected: end,
            found: len,
        });
    }
    Ok(field.offset..end)
}

fn take<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut buf = [0u8; N];
    buf.copy_from_slice(&bytes[..N]);
    buf
}

/// 按标量宽度和符号写入整数，超出范围返回 `None`
fn write_int(scalar: Scalar, value: i128, out: &mut [u8]) -> Option<()> {
    match scalar {
        Scalar::I8 => out.copy_from_slice(&i8::try_from(value).ok()?.to_ne_bytes()),
        Scalar::U8 => out.copy_from_slice(&u8::try_from(value).ok()?.to_ne_bytes()),
        Scalar::I16 => out.copy_from_slice(&i16::try_from(value).ok()?.to_ne_bytes()),
        Scalar::U16 => out.copy_from_slice(&u16::try_from(value).ok()?.to_ne_bytes()),
        Scalar::I32 => out.copy_from_slice(&i32::try_from(value).ok()?.to_ne_bytes()),
        Scalar::U32 => out.copy_from_slice(&u32::try_from(value).ok()?.to_ne_bytes()),
        Scalar::I64 => out.copy_from_slice(&i64::try_from(value).ok()?.to_ne_bytes()),
        Scalar::U64 => out.copy_from_slice(&u64::try_from(value).ok()?.to_ne_bytes()),
        Scalar::Usize => out.copy_from_slice(&usize::try_from(value).ok()?.to_ne_bytes()),
        Scalar::F32 | Scalar::F64 => return None,
    }
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int() -> FieldType {
        FieldType::Scalar(Scalar::I32)
    }

    fn registry() -> TypeRegistry {
        let mut reg = TypeRegistry::new();
        reg.register(
            TypeDescriptor::structure("SDL_Rect")
                .field("x", int())
                .field("y", int())
                .field("w", int())
                .field("h", int()),
        )
        .unwrap();
        reg.register(
            TypeDescriptor::structure("SDL_Color")
                .field("r", FieldType::Scalar(Scalar::U8))
                .field("g", FieldType::Scalar(Scalar::U8))
                .field("b", FieldType::Scalar(Scalar::U8))
                .field("a", FieldType::Scalar(Scalar::U8)),
        )
        .unwrap();
        reg
    }

    #[test]
    fn test_rect_round_trip() {
        let reg = registry();
        let rect = Value::record([
            ("x", Value::Int(1)),
            ("y", Value::Int(2)),
            ("w", Value::Int(3)),
            ("h", Value::Int(4)),
        ]);

        let bytes = reg.encode("SDL_Rect", &rect).unwrap();
        assert_eq!(bytes.len(), 16);
        assert_eq!(reg.decode("SDL_Rect", &bytes).unwrap(), rect);
    }

    #[test]
    fn test_natural_alignment_and_tail_padding() {
        let mut reg = registry();
        let layout = reg
            .register(
                TypeDescriptor::structure("SDL_Palette")
                    .field("ncolors", int())
                    .field("colors", FieldType::Pointer)
                    .field("version", FieldType::Scalar(Scalar::U32))
                    .field("refcount", int()),
            )
            .unwrap()
            .clone();

        let ptr = std::mem::size_of::<usize>();
        assert_eq!(layout.offset_of("colors"), Some(ptr));
        assert_eq!(layout.offset_of("version"), Some(ptr * 2));
        assert_eq!(layout.size, align_up(ptr * 2 + 8, ptr));
    }

    #[test]
    fn test_packed_layout() {
        let mut reg = TypeRegistry::new();
        let layout = reg
            .register(
                TypeDescriptor::structure("Packed")
                    .packed()
                    .field("a", FieldType::Scalar(Scalar::U16))
                    .field("b", FieldType::Scalar(Scalar::F64)),
            )
            .unwrap();
        assert_eq!(layout.offset_of("b"), Some(2));
        assert_eq!(layout.size, 10);
        assert_eq!(layout.align, 1);
    }

    #[test]
    fn test_union_layout_and_decode() {
        let mut reg = registry();
        reg.register(
            TypeDescriptor::union("SDL_WindowShapeParams")
                .field("binarizationCutoff", FieldType::Scalar(Scalar::U8))
                .field("colorKey", FieldType::named("SDL_Color")),
        )
        .unwrap();

        let value = Value::record([(
            "colorKey",
            Value::record([("r", Value::Uint(9)), ("a", Value::Uint(255))]),
        )]);
        let bytes = reg.encode("SDL_WindowShapeParams", &value).unwrap();
        assert_eq!(bytes.len(), 4);

        let decoded = reg.decode("SDL_WindowShapeParams", &bytes).unwrap();
        assert_eq!(decoded.get("binarizationCutoff"), Some(&Value::Uint(9)));
        assert_eq!(decoded.path("colorKey.a"), Some(&Value::Uint(255)));
    }

    #[test]
    fn test_union_rejects_conflicting_members() {
        let mut reg = TypeRegistry::new();
        reg.register(
            TypeDescriptor::union("U")
                .field("a", int())
                .field("b", FieldType::Scalar(Scalar::F32)),
        )
        .unwrap();
        let value = Value::record([("a", Value::Int(1)), ("b", Value::Float(1.0))]);
        assert_eq!(
            reg.encode("U", &value),
            Err(MarshalError::AmbiguousUnion("U".to_string()))
        );

        // 重叠字节一致时接受
        let value = Value::record([("a", Value::Int(0x3f80_0000)), ("b", Value::Float(1.0))]);
        assert_eq!(reg.encode("U", &value).unwrap(), 1.0f32.to_ne_bytes().to_vec());
    }

    #[test]
    fn test_union_members_of_different_sizes() {
        let mut reg = TypeRegistry::new();
        reg.register(
            TypeDescriptor::structure("Hat")
                .field("hat", int())
                .field("hat_mask", int()),
        )
        .unwrap();
        reg.register(
            TypeDescriptor::union("Bind")
                .field("button", int())
                .field("hat", FieldType::named("Hat")),
        )
        .unwrap();

        let mut bytes = vec![0u8; 8];
        bytes[..4].copy_from_slice(&3i32.to_ne_bytes());
        bytes[4..].copy_from_slice(&8i32.to_ne_bytes());

        // 解码得到全部成员，原样写回
        let decoded = reg.decode("Bind", &bytes).unwrap();
        assert_eq!(decoded.get("button"), Some(&Value::Int(3)));
        assert_eq!(reg.encode("Bind", &decoded).unwrap(), bytes);
    }

    #[test]
    fn test_redefining_embedded_type_is_rejected() {
        let mut reg = TypeRegistry::new();
        let inner = TypeDescriptor::structure("Inner").field("a", FieldType::Scalar(Scalar::U8));
        reg.register(inner.clone()).unwrap();
        reg.register(TypeDescriptor::structure("Outer").field("inner", FieldType::named("Inner")))
            .unwrap();

        // 相同定义可以重复注册
        assert!(reg.register(inner).is_ok());

        let err = reg
            .register(
                TypeDescriptor::structure("Inner")
                    .field("a", FieldType::Scalar(Scalar::U8))
                    .field("b", FieldType::Scalar(Scalar::U64)),
            )
            .unwrap_err();
        assert_eq!(
            err,
            MarshalError::TypeInUse {
                type_name: "Inner".to_string(),
                used_by: "Outer".to_string(),
            }
        );

        // 布局未被破坏
        assert_eq!(reg.layout("Inner").unwrap().size, 1);
        assert_eq!(
            reg.decode("Outer", &[7u8]).unwrap().path("inner.a"),
            Some(&Value::Uint(7))
        );
    }

    #[test]
    fn test_redefining_unused_type_replaces() {
        let mut reg = registry();
        reg.register(TypeDescriptor::structure("SDL_Color").field("r", FieldType::Scalar(Scalar::U16)))
            .unwrap();
        assert_eq!(reg.layout("SDL_Color").unwrap().size, 2);
    }

    #[test]
    fn test_integer_range_checks() {
        let reg = registry();

        let err = reg
            .encode("SDL_Color", &Value::record([("r", Value::Int(300))]))
            .unwrap_err();
        assert_eq!(
            err,
            MarshalError::OutOfRange {
                path: "SDL_Color.r".to_string(),
                ty: "uint8".to_string(),
                value: 300,
            }
        );
        assert!(matches!(
            reg.encode("SDL_Color", &Value::record([("g", Value::Int(-1))])),
            Err(MarshalError::OutOfRange { .. })
        ));
        assert!(matches!(
            reg.encode("SDL_Rect", &Value::record([("x", Value::Uint(u64::MAX))])),
            Err(MarshalError::OutOfRange { .. })
        ));

        // 非负的有符号值可以写入无符号字段
        let bytes = reg
            .encode("SDL_Color", &Value::record([("r", Value::Int(255)), ("a", Value::Uint(0))]))
            .unwrap();
        assert_eq!(bytes, vec![255, 0, 0, 0]);
        assert_eq!(
            reg.encode("SDL_Rect", &Value::record([("x", Value::Int(i64::from(i32::MIN)))]))
                .unwrap()[..4],
            i32::MIN.to_ne_bytes()
        );
    }

    #[test]
    fn test_encode_into_keeps_unset_bytes() {
        let reg = registry();
        let mut bytes = vec![0xAAu8; 4];
        reg.encode_into("SDL_Color", &Value::record([("g", Value::Uint(1))]), &mut bytes)
            .unwrap();
        assert_eq!(bytes, vec![0xAA, 1, 0xAA, 0xAA]);
    }

    #[test]
    fn test_unknown_nested_type() {
        let mut reg = TypeRegistry::new();
        let err = reg
            .register(TypeDescriptor::structure("Outer").field("inner", FieldType::named("Inner")))
            .unwrap_err();
        assert_eq!(err, MarshalError::UnknownType("Inner".to_string()));
    }

    #[test]
    fn test_encode_errors() {
        let reg = registry();
        let err = reg
            .encode("SDL_Rect", &Value::record([("z", Value::Int(1))]))
            .unwrap_err();
        assert!(matches!(err, MarshalError::UnknownField { .. }));

        let err = reg
            .encode("SDL_Rect", &Value::record([("x", Value::Float(1.5))]))
            .unwrap_err();
        assert_eq!(
            err,
            MarshalError::TypeMismatch {
                path: "SDL_Rect.x".to_string(),
                expected: "int32".to_string(),
                found: "float".to_string(),
            }
        );
    }

    #[test]
    fn test_array_overflow() {
        let mut reg = TypeRegistry::new();
        reg.register(
            TypeDescriptor::structure("SDL_JoystickGUID")
                .field("data", FieldType::array(FieldType::Scalar(Scalar::U8), 16)),
        )
        .unwrap();
        let too_long = Value::record([("data", Value::Array(vec![Value::Uint(0); 17]))]);
        assert!(matches!(
            reg.encode("SDL_JoystickGUID", &too_long),
            Err(MarshalError::ArrayOverflow { capacity: 16, found: 17, .. })
        ));
    }

    #[test]
    fn test_alloc_and_read_from_ptr() {
        let reg = registry();
        let buffer = reg
            .alloc("SDL_Rect", Some(&Value::record([("w", Value::Int(640))])))
            .unwrap();
        assert_eq!(buffer.len(), 16);

        let value = unsafe { reg.read_from_ptr("SDL_Rect", buffer.as_ptr()) }
            .unwrap()
            .unwrap();
        assert_eq!(value.get("w"), Some(&Value::Int(640)));
        assert_eq!(value.get("x"), Some(&Value::Int(0)));

        let none = unsafe { reg.read_from_ptr("SDL_Rect", std::ptr::null()) }.unwrap();
        assert!(none.is_none());
    }

    #[test]
    fn test_short_buffer() {
        let reg = registry();
        assert!(matches!(
            reg.decode("SDL_Rect", &[0u8; 8]),
            Err(MarshalError::BufferSize { expected: 16, found: 8, .. })
        ));
    }
}
