//! 原生指针到结构体值

use std::ffi::c_void;

use crate::abi::{NativeBuffer, NativeStruct, Value};
use crate::core::error::LinkResult;
use crate::namespace::Namespace;

/// 复制原生指针指向的结构体，空指针返回 `None`
///
/// # Safety
///
/// `ptr` 为空或指向一个有效的 `T`。
pub unsafe fn deref_struct<T: NativeStruct>(ptr: *const T) -> Option<T> {
    if ptr.is_null() {
        None
    } else {
        Some(std::ptr::read_unaligned(ptr))
    }
}

impl Namespace {
    /// 按已注册的类型名解码原生指针，空指针返回 `Ok(None)`
    ///
    /// # Safety
    ///
    /// `ptr` 为空或指向至少该类型大小的可读内存。
    pub unsafe fn to_object(&self, type_name: &str, ptr: *const c_void) -> LinkResult<Option<Value>> {
        Ok(self.registry().read_from_ptr(type_name, ptr)?)
    }

    /// 为已注册的类型分配零初始化的原生缓冲区，可选地写入初始值
    pub fn alloc(&self, type_name: &str, value: Option<&Value>) -> LinkResult<NativeBuffer> {
        Ok(self.registry().alloc(type_name, value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sys::SDL_Rect;

    #[test]
    fn test_deref_struct() {
        let rect = SDL_Rect { x: 1, y: 2, w: 3, h: 4 };
        let copy = unsafe { deref_struct(&rect as *const SDL_Rect) }.unwrap();
        assert_eq!((copy.x, copy.y, copy.w, copy.h), (1, 2, 3, 4));
        assert!(unsafe { deref_struct::<SDL_Rect>(std::ptr::null()) }.is_none());
    }
}
