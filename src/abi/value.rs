//! 宿主侧的值表示
//!
//! `Value` 是原生内存与 Rust 之间的中间形式，结构体和联合体解码为有序记录。

/// 编组值
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Uint(u64),
    Float(f64),
    /// 指针地址（数据指针与函数指针）
    Pointer(usize),
    Array(Vec<Value>),
    /// 有序的 (字段名, 值) 列表
    Record(Vec<(String, Value)>),
}

impl Value {
    /// 从 (字段名, 值) 对构造记录
    pub fn record<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Value::Record(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// 查找记录字段
    pub fn get(&self, field: &str) -> Option<&Value> {
        match self {
            Value::Record(fields) => fields.iter().find(|(k, _)| k == field).map(|(_, v)| v),
            _ => None,
        }
    }

    /// 按点分路径查找嵌套字段，例如 `"keysym.sym"`
    pub fn path(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(self, |value, segment| value.get(segment))
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Int(v) => Some(v),
            Value::Uint(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Value::Uint(v) => Some(v),
            Value::Int(v) => u64::try_from(v).ok(),
            Value::Pointer(v) => Some(v as u64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Pointer(0))
    }

    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Uint(_) => "uint",
            Value::Float(_) => "float",
            Value::Pointer(_) => "pointer",
            Value::Array(_) => "array",
            Value::Record(_) => "record",
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::Uint(v as u64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Uint(v as u64)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_path() {
        let event = Value::record([
            ("type", Value::Uint(768)),
            (
                "keysym",
                Value::record([("scancode", Value::Uint(4)), ("sym", Value::Int(97))]),
            ),
        ]);

        assert_eq!(event.path("keysym.sym"), Some(&Value::Int(97)));
        assert_eq!(event.path("keysym.mod"), None);
        assert_eq!(event.get("type").and_then(Value::as_u64), Some(768));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Value::Int(-1).as_u64(), None);
        assert_eq!(Value::Uint(5).as_i64(), Some(5));
        assert!(Value::Pointer(0).is_null());
        assert_eq!(Value::from(3i32), Value::Int(3));
    }
}
