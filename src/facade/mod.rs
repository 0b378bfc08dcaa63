//! 便利层
//!
//! - `cstring` - C 字符串转换
//! - `deref` - 指针到结构体值、按类型名分配缓冲区
//! - `rect` - 矩形内联宏
//! - `helpers` - 由导出函数组合的派生调用
//! - `resource` - 离开作用域自动析构的原生句柄

pub mod cstring;
pub mod deref;
mod helpers;
pub mod rect;
pub mod resource;

pub use cstring::{from_c_string, to_c_string};
pub use deref::deref_struct;
pub use rect::{
    frect_empty, frect_equals, frect_equals_epsilon, point_in_frect, point_in_rect, rect_empty,
    rect_equals,
};
pub use resource::NativeResource;
