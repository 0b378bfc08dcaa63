//! 已绑定函数与类型化的函数指针

use std::ffi::c_void;

use crate::loader::{SubLibrary, SymbolAddress};
use crate::signatures::{FunctionSignature, NativeArg, NativeType};

/// 绑定到入口地址的函数声明
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundFunction {
    signature: &'static FunctionSignature,
    address: SymbolAddress,
    library: SubLibrary,
}

impl BoundFunction {
    pub fn new(signature: &'static FunctionSignature, address: SymbolAddress, library: SubLibrary) -> Self {
        Self {
            signature,
            address,
            library,
        }
    }

    pub fn name(&self) -> &'static str {
        self.signature.name
    }

    pub fn signature(&self) -> &'static FunctionSignature {
        self.signature
    }

    pub fn library(&self) -> SubLibrary {
        self.library
    }

    pub fn address(&self) -> *const c_void {
        self.address.as_ptr()
    }
}

/// 可由入口地址构造的 `unsafe extern "C" fn` 类型
///
/// # Safety
///
/// 实现者必须是与指针同宽的 C ABI 函数指针类型。
pub unsafe trait NativeFn: Copy {
    fn ret() -> NativeType;

    fn params() -> Vec<NativeType>;

    /// # Safety
    ///
    /// `address` 必须指向签名与 `Self` 一致的函数。
    unsafe fn from_address(address: *const c_void) -> Self;
}

macro_rules! native_fn {
    ($($arg:ident),*) => {
        unsafe impl<R: NativeArg, $($arg: NativeArg),*> NativeFn for unsafe extern "C" fn($($arg),*) -> R {
            fn ret() -> NativeType {
                R::NATIVE_TYPE
            }

            fn params() -> Vec<NativeType> {
                vec![$($arg::NATIVE_TYPE),*]
            }

            unsafe fn from_address(address: *const c_void) -> Self {
                std::mem::transmute_copy::<*const c_void, Self>(&address)
            }
        }
    };
}

native_fn!();
native_fn!(A);
native_fn!(A, B);
native_fn!(A, B, C);
native_fn!(A, B, C, D);
native_fn!(A, B, C, D, E);
native_fn!(A, B, C, D, E, F);
native_fn!(A, B, C, D, E, F, G);
native_fn!(A, B, C, D, E, F, G, H);
native_fn!(A, B, C, D, E, F, G, H, I);
native_fn!(A, B, C, D, E, F, G, H, I, J);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sys::SDL_Color;

    #[test]
    fn test_native_fn_types() {
        type Init = unsafe extern "C" fn(u32) -> i32;
        assert_eq!(<Init as NativeFn>::ret(), NativeType::I32);
        assert_eq!(<Init as NativeFn>::params(), vec![NativeType::U32]);

        type Render = unsafe extern "C" fn(*mut c_void, *const i8, SDL_Color) -> *mut c_void;
        assert_eq!(
            <Render as NativeFn>::params(),
            vec![NativeType::Ptr, NativeType::Ptr, NativeType::Aggregate("SDL_Color")]
        );
        assert_eq!(<unsafe extern "C" fn() as NativeFn>::ret(), NativeType::Void);
    }

    extern "C" fn double(x: i32) -> i32 {
        x * 2
    }

    #[test]
    fn test_from_address_calls_through() {
        let address = double as extern "C" fn(i32) -> i32 as *const c_void;
        let f = unsafe { <unsafe extern "C" fn(i32) -> i32 as NativeFn>::from_address(address) };
        assert_eq!(unsafe { f(21) }, 42);
    }
}
