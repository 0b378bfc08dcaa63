//! 镜像类型声明宏
//!
//! 每个声明同时生成：`#[repr(C)]` 类型、`Zeroable`、[`NativeStruct`]、
//! [`NativeField`]（作为具名字段）以及 [`NativeArg`]（按值传递）。
//!
//! [`NativeStruct`]: crate::abi::NativeStruct
//! [`NativeField`]: crate::abi::NativeField
//! [`NativeArg`]: crate::signatures::NativeArg

macro_rules! native_struct {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($(#[$fmeta:meta])* pub $field:ident : $ty:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(Debug, Clone, Copy)]
        pub struct $name {
            $($(#[$fmeta])* pub $field: $ty),*
        }

        native_struct!(@impls $name [] { $($field: $ty),* });
    };

    (
        $(#[$meta:meta])*
        pub packed struct $name:ident {
            $($(#[$fmeta:meta])* pub $field:ident : $ty:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(C, packed)]
        #[derive(Debug, Clone, Copy)]
        pub struct $name {
            $($(#[$fmeta])* pub $field: $ty),*
        }

        native_struct!(@impls $name [.packed()] { $($field: $ty),* });
    };

    (@impls $name:ident [$($modifier:tt)*] { $($field:ident : $ty:ty),* }) => {
        // SAFETY: 只包含整数、浮点、原始指针、Option<fn> 与其他镜像类型
        unsafe impl bytemuck::Zeroable for $name {}

        unsafe impl $crate::abi::NativeStruct for $name {
            const NAME: &'static str = stringify!($name);

            fn descriptor() -> $crate::abi::TypeDescriptor {
                $crate::abi::TypeDescriptor::structure(Self::NAME)
                    $($modifier)*
                    $(.field(
                        stringify!($field).trim_start_matches("r#"),
                        <$ty as $crate::abi::NativeField>::field_type(),
                    ))*
            }

            fn field_offsets() -> Vec<(&'static str, usize)> {
                vec![$((
                    stringify!($field).trim_start_matches("r#"),
                    std::mem::offset_of!($name, $field),
                )),*]
            }
        }

        native_struct!(@by_name $name);
    };

    (@by_name $name:ident) => {
        impl $crate::abi::NativeField for $name {
            fn field_type() -> $crate::abi::FieldType {
                $crate::abi::FieldType::named(stringify!($name))
            }
        }

        impl $crate::signatures::NativeArg for $name {
            const NATIVE_TYPE: $crate::signatures::NativeType =
                $crate::signatures::NativeType::Aggregate(stringify!($name));
        }
    };
}

macro_rules! native_union {
    (
        $(#[$meta:meta])*
        pub union $name:ident {
            $($(#[$fmeta:meta])* pub $field:ident : $ty:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(Clone, Copy)]
        pub union $name {
            $($(#[$fmeta])* pub $field: $ty),*
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name)).finish_non_exhaustive()
            }
        }

        // SAFETY: 同 native_struct!
        unsafe impl bytemuck::Zeroable for $name {}

        unsafe impl $crate::abi::NativeStruct for $name {
            const NAME: &'static str = stringify!($name);

            fn descriptor() -> $crate::abi::TypeDescriptor {
                $crate::abi::TypeDescriptor::union(Self::NAME)
                    $(.field(
                        stringify!($field).trim_start_matches("r#"),
                        <$ty as $crate::abi::NativeField>::field_type(),
                    ))*
            }

            fn field_offsets() -> Vec<(&'static str, usize)> {
                vec![$((stringify!($field).trim_start_matches("r#"), 0)),*]
            }
        }

        native_struct!(@by_name $name);
    };
}

/// 只能通过指针使用的不透明类型
macro_rules! opaque {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[repr(C)]
            pub struct $name {
                _opaque: [u8; 0],
                _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
            }
        )*
    };
}
