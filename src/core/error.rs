//! 统一错误处理模块
//!
//! 提供绑定层范围内的统一错误类型定义
//!
//! ## 错误类型分层
//!
//! - **配置错误** (`ConfigError`): 配置文件读取、解析、验证失败
//! - **编组错误** (`MarshalError`): 类型表与值之间的转换失败
//! - **链接错误** (`LinkError`): 后端缺失、动态库/符号解析失败、命名空间查询失败
//!
//! `LinkError` 可以同时承载配置层和编组层的错误。
//!
//! 注意：声明的结构体布局与真实原生库不一致时，本层无法检测，
//! 表现为原生调用内部的内存破坏，这不是一个可处理的错误类别。

use thiserror::Error;

/// 链接层核心错误类型
#[derive(Error, Debug)]
pub enum LinkError {
    #[error("No native call backend configured. Use Loader::with_backend() or set `backend` in the config")]
    MissingBackend,

    #[error("Invalid SDL library name: {name}. Available library names: {available}")]
    UnknownLibrary { name: String, available: String },

    #[error("Failed to open native library {library} at {path}: {reason}")]
    LibraryNotFound {
        library: String,
        path: String,
        reason: String,
    },

    #[error("Symbol {symbol} not found in {library}: {reason}")]
    SymbolNotFound {
        library: String,
        symbol: String,
        reason: String,
    },

    #[error("Backend '{backend}' cannot bind {symbol}: it passes structs by value")]
    UnsupportedByBackend { backend: String, symbol: String },

    #[error("Function not bound in namespace: {0}")]
    FunctionNotBound(String),

    #[error("Signature mismatch for {name}: declared {declared}, requested {requested}")]
    SignatureMismatch {
        name: String,
        declared: String,
        requested: String,
    },

    #[error("{call} returned a null handle: {reason}")]
    NullHandle { call: String, reason: String },

    #[error("String contains an interior NUL byte: {0}")]
    InteriorNul(#[from] std::ffi::NulError),

    #[error("Marshal error: {0}")]
    Marshal(#[from] MarshalError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// 类型表编组错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarshalError {
    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("Type {type_name} has no field named {field}")]
    UnknownField { type_name: String, field: String },

    #[error("Field {path} expects {expected}, got {found}")]
    TypeMismatch {
        path: String,
        expected: String,
        found: String,
    },

    #[error("Union {0} was given members with conflicting bytes")]
    AmbiguousUnion(String),

    #[error("Field {path} ({ty}) cannot hold {value}")]
    OutOfRange { path: String, ty: String, value: i128 },

    #[error("Type {type_name} is embedded by {used_by} and cannot be redefined")]
    TypeInUse { type_name: String, used_by: String },

    #[error("Array {path} holds {capacity} elements, got {found}")]
    ArrayOverflow {
        path: String,
        capacity: usize,
        found: usize,
    },

    #[error("Buffer for {type_name} is {found} bytes, need {expected}")]
    BufferSize {
        type_name: String,
        expected: usize,
        found: usize,
    },
}

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读取错误
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    /// 解析错误
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// 验证错误
    #[error("Config validation error: {0}")]
    ValidationError(String),
}

/// 结果类型别名
pub type LinkResult<T> = Result<T, LinkError>;
pub type MarshalResult<T> = Result<T, MarshalError>;
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let marshal_err = MarshalError::UnknownType("SDL_Nope".to_string());
        let link_err: LinkError = marshal_err.into();
        assert!(matches!(link_err, LinkError::Marshal(_)));

        let config_err = ConfigError::ValidationError("bad".to_string());
        let link_err: LinkError = config_err.into();
        assert!(matches!(link_err, LinkError::Config(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LinkError::UnknownLibrary {
            name: "SDL2_net".to_string(),
            available: "SDL2, SDL2_image".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid SDL library name: SDL2_net. Available library names: SDL2, SDL2_image"
        );

        let err = LinkError::SymbolNotFound {
            library: "SDL2".to_string(),
            symbol: "SDL_Init".to_string(),
            reason: "undefined symbol".to_string(),
        };
        assert!(err.to_string().contains("SDL_Init"));
    }
}
