//! 原生缓冲区
//!
//! 以 `u64` 为存储单元，保证8字节对齐，足够容纳任何SDL结构体。

use std::ffi::c_void;

use super::native::NativeStruct;
use crate::core::error::{MarshalError, MarshalResult};

/// 零初始化、8字节对齐的原生缓冲区
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeBuffer {
    type_name: String,
    storage: Vec<u64>,
    len: usize,
}

impl NativeBuffer {
    pub fn zeroed(type_name: impl Into<String>, len: usize) -> Self {
        let words = (len + 7) / 8;
        Self {
            type_name: type_name.into(),
            storage: vec![0u64; words.max(1)],
            len,
        }
    }

    /// 从已初始化的 Rust 镜像值构造
    pub fn from_struct<T: NativeStruct>(value: &T) -> Self {
        let mut buffer = Self::zeroed(T::NAME, std::mem::size_of::<T>());
        // SAFETY: 存储至少 size_of::<T>() 字节且8字节对齐
        unsafe {
            std::ptr::write_unaligned(buffer.as_mut_ptr() as *mut T, *value);
        }
        buffer
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &bytemuck::cast_slice::<u64, u8>(&self.storage)[..self.len]
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut bytemuck::cast_slice_mut::<u64, u8>(&mut self.storage)[..self.len]
    }

    pub fn as_ptr(&self) -> *const c_void {
        self.storage.as_ptr() as *const c_void
    }

    pub fn as_mut_ptr(&mut self) -> *mut c_void {
        self.storage.as_mut_ptr() as *mut c_void
    }

    /// 复制为 Rust 镜像类型，类型名和大小必须一致
    pub fn to_struct<T: NativeStruct>(&self) -> MarshalResult<T> {
        if self.type_name != T::NAME {
            return Err(MarshalError::TypeMismatch {
                path: self.type_name.clone(),
                expected: T::NAME.to_string(),
                found: self.type_name.clone(),
            });
        }
        if self.len != std::mem::size_of::<T>() {
            return Err(MarshalError::BufferSize {
                type_name: T::NAME.to_string(),
                expected: std::mem::size_of::<T>(),
                found: self.len,
            });
        }
        // SAFETY: NativeStruct 保证任意位模式都是合法值，长度已检查
        Ok(unsafe { std::ptr::read_unaligned(self.as_ptr() as *const T) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sys::SDL_Rect;

    #[test]
    fn test_alignment_and_zeroing() {
        let buffer = NativeBuffer::zeroed("SDL_Event", 56);
        assert_eq!(buffer.as_ptr() as usize % 8, 0);
        assert!(buffer.as_bytes().iter().all(|b| *b == 0));
        assert_eq!(buffer.len(), 56);
    }

    #[test]
    fn test_struct_round_trip() {
        let rect = SDL_Rect { x: 1, y: 2, w: 3, h: 4 };
        let buffer = NativeBuffer::from_struct(&rect);
        let back: SDL_Rect = buffer.to_struct().unwrap();
        assert_eq!((back.x, back.y, back.w, back.h), (1, 2, 3, 4));
    }

    #[test]
    fn test_to_struct_checks_type() {
        let buffer = NativeBuffer::zeroed("SDL_Point", 8);
        assert!(buffer.to_struct::<SDL_Rect>().is_err());
    }
}
