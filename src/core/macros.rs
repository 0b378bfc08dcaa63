//! 核心宏定义
//!
//! 提供统一的宏来减少配置类型上的重复代码

/// 为结构体实现Default trait的宏
///
/// 使用示例:
/// ```rust
/// use sdl2_link::impl_default;
///
/// struct SearchPath {
///     dir: String,
///     recursive: bool,
/// }
///
/// impl_default!(SearchPath {
///     dir: ".".to_string(),
///     recursive: false,
/// });
/// ```
#[macro_export]
macro_rules! impl_default {
    ($struct_name:ident {
        $($field:ident: $value:expr),* $(,)?
    }) => {
        impl Default for $struct_name {
            fn default() -> Self {
                Self {
                    $($field: $value),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {

    struct LibraryEntry {
        name: String,
        optional: bool,
    }

    impl_default!(LibraryEntry {
        name: "SDL2".to_string(),
        optional: false,
    });

    #[test]
    fn test_impl_default() {
        let entry = LibraryEntry::default();

        assert_eq!(entry.name, "SDL2");
        assert!(!entry.optional);
    }
}
