//! C 字符串转换

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use crate::core::error::LinkResult;

/// 转为以 NUL 结尾的字符串，内部含 NUL 时失败
pub fn to_c_string(s: &str) -> LinkResult<CString> {
    Ok(CString::new(s)?)
}

/// 复制原生字符串，空指针返回 `None`，非 UTF-8 字节被替换
///
/// # Safety
///
/// `ptr` 为空或指向以 NUL 结尾的有效字符串。
pub unsafe fn from_c_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LinkError;
    use proptest::prelude::*;

    #[test]
    fn test_interior_nul_rejected() {
        assert!(matches!(to_c_string("a\0b"), Err(LinkError::InteriorNul(_))));
    }

    #[test]
    fn test_null_pointer() {
        assert_eq!(unsafe { from_c_string(std::ptr::null()) }, None);
    }

    #[test]
    fn test_empty_string() {
        let c = to_c_string("").unwrap();
        assert_eq!(c.as_bytes_with_nul(), &[0]);
        assert_eq!(unsafe { from_c_string(c.as_ptr()) }.as_deref(), Some(""));
    }

    proptest! {
        #[test]
        fn prop_round_trip_is_idempotent(s in "[^\\x00]*") {
            let c = to_c_string(&s).unwrap();
            let back = unsafe { from_c_string(c.as_ptr()) }.unwrap();
            prop_assert_eq!(&back, &s);
            let again = to_c_string(&back).unwrap();
            prop_assert_eq!(again, c);
        }
    }
}
