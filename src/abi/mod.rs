//! 类型/布局注册表
//!
//! - `types` - 字段类型与描述符
//! - `registry` - 布局计算与编组
//! - `value` - 宿主侧值
//! - `buffer` - 对齐的原生缓冲区
//! - `native` - Rust 镜像类型桥接
//!
//! 注意：描述符与真实动态库不一致时无法在此检测，
//! 只能与 `sys` 中的 Rust 镜像比对。

pub mod buffer;
pub mod native;
pub mod registry;
pub mod types;
pub mod value;

pub use buffer::NativeBuffer;
pub use native::{layout_mismatches, NativeField, NativeStruct};
pub use registry::{FieldLayout, Layout, RegisteredType, TypeRegistry};
pub use types::{FieldType, Scalar, TypeDescriptor, TypeKind};
pub use value::Value;
