//! 平台相关的共享库文件名

/// 共享库命名约定所属的平台族
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    /// Linux、BSD 等使用 `lib*.so` 的平台
    Unix,
}

impl Platform {
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Unix
        }
    }

    pub fn library_file_name(self, name: &str) -> String {
        match self {
            Platform::Windows => format!("{}.dll", name),
            Platform::MacOs => format!("lib{}.dylib", name),
            Platform::Unix => format!("lib{}.so", name),
        }
    }
}

/// 当前平台上逻辑库名对应的文件名，例如 `SDL2` → `libSDL2.so`
pub fn library_file_name(name: &str) -> String {
    Platform::current().library_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_per_platform() {
        assert_eq!(Platform::Windows.library_file_name("SDL2"), "SDL2.dll");
        assert_eq!(Platform::MacOs.library_file_name("SDL2_ttf"), "libSDL2_ttf.dylib");
        assert_eq!(Platform::Unix.library_file_name("SDL2_image"), "libSDL2_image.so");
    }

    #[test]
    fn test_current_platform() {
        let name = library_file_name("SDL2");
        #[cfg(target_os = "linux")]
        assert_eq!(name, "libSDL2.so");
        #[cfg(target_os = "windows")]
        assert_eq!(name, "SDL2.dll");
        #[cfg(target_os = "macos")]
        assert_eq!(name, "libSDL2.dylib");
        assert!(name.contains("SDL2"));
    }
}
