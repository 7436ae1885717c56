//! Movie Context - Aggregate Root

use serde::Serialize;
use serde_json::{Map, Value};

use super::{MovieError, MovieId};

/// 文档主键字段名
const ID_FIELD: &str = "_id";

/// Movie 聚合根
///
/// 不变量:
/// - `_id` 由系统生成，创建后不可修改
/// - 其余字段原样保存，不做类型校验
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    #[serde(rename = "_id")]
    id: MovieId,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Movie {
    /// 从存储层恢复
    pub fn from_parts(id: MovieId, fields: Map<String, Value>) -> Self {
        Self { id, fields }
    }

    /// `$set` 语义：逐个顶层字段覆盖，未出现的字段保持不变
    ///
    /// 返回文档是否真的发生了变化
    pub fn apply_changes(&mut self, changes: MovieChanges) -> bool {
        let mut modified = false;
        for (key, value) in changes.0 {
            if self.fields.get(&key) != Some(&value) {
                self.fields.insert(key, value);
                modified = true;
            }
        }
        modified
    }

    pub fn id(&self) -> MovieId {
        self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }

    /// 不含 `_id` 的字段
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// 待插入的新文档（尚未分配 `_id`）
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie(Map<String, Value>);

impl NewMovie {
    /// 校验客户端提交的 JSON，忽略其中的 `_id`
    pub fn from_value(body: Value) -> Result<Self, MovieError> {
        into_fields(body).map(Self)
    }

    /// 由存储层分配 `_id`
    pub fn assign_id(self, id: MovieId) -> Movie {
        Movie::from_parts(id, self.0)
    }
}

/// 更新请求中的字段集合
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieChanges(Map<String, Value>);

impl MovieChanges {
    /// `_id` 不可变，出现时直接丢弃
    pub fn from_value(body: Value) -> Result<Self, MovieError> {
        into_fields(body).map(Self)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

fn into_fields(body: Value) -> Result<Map<String, Value>, MovieError> {
    let Value::Object(mut fields) = body else {
        return Err(MovieError::NotAnObject);
    };
    fields.remove(ID_FIELD);
    Ok(fields)
}
