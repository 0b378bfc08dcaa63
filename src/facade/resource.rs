//! 作用域内的原生句柄
//!
//! 持有构造函数返回的指针，离开作用域时调用配对的析构函数。
//! `into_raw()` 交还所有权，之后由调用方负责析构。

use std::fmt;
use std::marker::PhantomData;

use super::cstring::from_c_string;
use crate::core::error::{LinkError, LinkResult};
use crate::namespace::Namespace;

/// 拥有原生句柄，析构函数来自命名空间（借用保证库在句柄之前不被释放）
pub struct NativeResource<'ns, T> {
    ptr: *mut T,
    destructor: unsafe extern "C" fn(*mut T),
    destructor_name: &'static str,
    _namespace: PhantomData<&'ns Namespace>,
}

impl<'ns, T> NativeResource<'ns, T> {
    pub fn as_ptr(&self) -> *mut T {
        self.ptr
    }

    /// 放弃所有权，不调用析构函数
    pub fn into_raw(self) -> *mut T {
        let ptr = self.ptr;
        std::mem::forget(self);
        ptr
    }
}

impl<T> Drop for NativeResource<'_, T> {
    fn drop(&mut self) {
        tracing::trace!(target: "sdl2_link::facade", "{}({:p})", self.destructor_name, self.ptr);
        // SAFETY: 指针来自配对的构造函数且所有权未被交出
        unsafe { (self.destructor)(self.ptr) }
    }
}

impl<T> fmt::Debug for NativeResource<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeResource")
            .field("ptr", &self.ptr)
            .field("destructor", &self.destructor_name)
            .finish()
    }
}

impl Namespace {
    /// 接管构造函数返回的句柄
    ///
    /// 空指针返回 `NullHandle`，原因取自 `SDL_GetError`（若已绑定）。
    ///
    /// ```ignore
    /// let window = ns.own("SDL_CreateWindow", raw_window, "SDL_DestroyWindow")?;
    /// ```
    ///
    /// # Safety
    ///
    /// `ptr` 必须是 `constructor` 返回的、尚未被析构的句柄，
    /// 且 `destructor` 接受该句柄作为唯一参数。
    pub unsafe fn own<T>(
        &self,
        constructor: &str,
        ptr: *mut T,
        destructor: &str,
    ) -> LinkResult<NativeResource<'_, T>> {
        if ptr.is_null() {
            return Err(LinkError::NullHandle {
                call: constructor.to_string(),
                reason: self.last_error_or_unknown(),
            });
        }

        let bound = self.bound_function(destructor)?;
        let destroy = self.function::<unsafe extern "C" fn(*mut T)>(destructor)?;

        Ok(NativeResource {
            ptr,
            destructor: destroy,
            destructor_name: bound.name(),
            _namespace: PhantomData,
        })
    }

    pub(crate) fn last_error_or_unknown(&self) -> String {
        self.function::<unsafe extern "C" fn() -> *const std::os::raw::c_char>("SDL_GetError")
            .ok()
            .and_then(|get_error| unsafe { from_c_string(get_error()) })
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| "unknown error".to_string())
    }
}
