//! 枚举常量与头文件宏
//!
//! 每个子模块导出 `pub const` 常量、对应的 `const fn` 宏，
//! 以及按声明顺序排列的 `CONSTANTS` 表，供命名空间注册。

#![allow(non_snake_case, non_upper_case_globals)]

use crate::loader::SubLibrary;

/// 声明常量并生成 `CONSTANTS` 表
macro_rules! constants {
    ($($(#[$meta:meta])* $name:ident: $ty:ty = $value:expr;)*) => {
        $($(#[$meta])* pub const $name: $ty = $value;)*

        /// 本模块全部常量（按声明顺序）
        pub const CONSTANTS: &[(&str, i64)] = &[$((stringify!($name), $name as i64)),*];
    };
}

pub mod core;
pub mod image;
pub mod joystick;
pub mod keyboard;
pub mod mixer;
pub mod ttf;

/// 子库对应的常量表
pub fn tables(library: SubLibrary) -> &'static [&'static [(&'static str, i64)]] {
    match library {
        SubLibrary::Core => &[self::core::CONSTANTS, keyboard::CONSTANTS],
        SubLibrary::Image => &[image::CONSTANTS],
        SubLibrary::Ttf => &[ttf::CONSTANTS],
        SubLibrary::Mixer => &[mixer::CONSTANTS],
        SubLibrary::Joystick => &[joystick::CONSTANTS],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_unique_across_tables() {
        let mut seen = HashSet::new();
        for library in SubLibrary::ALL {
            for table in tables(library) {
                for (name, _) in table.iter() {
                    assert!(seen.insert(*name), "duplicate constant {}", name);
                }
            }
        }
    }

    #[test]
    fn test_core_table_contains_init_flags() {
        let table = tables(SubLibrary::Core);
        let video = table
            .iter()
            .flat_map(|t| t.iter())
            .find(|(name, _)| *name == "SDL_INIT_VIDEO")
            .map(|(_, v)| *v);
        assert_eq!(video, Some(0x20));
    }
}
