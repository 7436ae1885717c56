//! Movie Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::MovieError;

/// 电影文档唯一标识（`_id`）
///
/// 使用 UUID v7，按创建时间有序，因此按 `_id` 排序即为创建顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MovieId(Uuid);

impl MovieId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// 解析路径参数中的 ID
    pub fn parse(raw: &str) -> Result<Self, MovieError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(MovieError::EmptyId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| MovieError::InvalidId(raw.to_string()))
    }
}

impl Default for MovieId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 分页参数
///
/// 不变量:
/// - page 从 1 开始
/// - per_page >= 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    per_page: u32,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Result<Self, MovieError> {
        if page == 0 || per_page == 0 {
            return Err(MovieError::InvalidPagination);
        }
        Ok(Self { page, per_page })
    }

    /// 从查询字符串解析（`page=2&perPage=10`）
    pub fn parse(page: &str, per_page: &str) -> Result<Self, MovieError> {
        let page = page
            .trim()
            .parse::<u32>()
            .map_err(|_| MovieError::InvalidPagination)?;
        let per_page = per_page
            .trim()
            .parse::<u32>()
            .map_err(|_| MovieError::InvalidPagination)?;
        Self::new(page, per_page)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// 跳过的文档数: (page - 1) * per_page
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }
}

/// 标题匹配方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleMatch {
    /// 不区分大小写的子串匹配
    #[default]
    Contains,
    /// 完全相等（区分大小写）
    Exact,
}

impl TitleMatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            TitleMatch::Contains => "contains",
            TitleMatch::Exact => "exact",
        }
    }
}

/// 标题过滤条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleFilter {
    needle: String,
    mode: TitleMatch,
}

impl TitleFilter {
    /// 空字符串视为未过滤
    pub fn new(needle: impl Into<String>, mode: TitleMatch) -> Option<Self> {
        let needle = needle.into();
        if needle.is_empty() {
            return None;
        }
        Some(Self { needle, mode })
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn mode(&self) -> TitleMatch {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_id_parse() {
        let id = MovieId::new();
        let parsed = MovieId::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);

        assert!(matches!(MovieId::parse("  "), Err(MovieError::EmptyId)));
        assert!(matches!(
            MovieId::parse("573a1390f29313caabcd4135"),
            Err(MovieError::InvalidId(_))
        ));
    }

    #[test]
    fn test_movie_ids_are_time_ordered() {
        let first = MovieId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = MovieId::new();
        assert!(first < second);
        assert!(first.to_string() < second.to_string());
    }

    #[test]
    fn test_pagination_offset() {
        let p = Pagination::parse("3", "10").unwrap();
        assert_eq!(p.offset(), 20);
        assert_eq!(p.limit(), 10);

        let first = Pagination::new(1, 5).unwrap();
        assert_eq!(first.offset(), 0);
    }

    #[test]
    fn test_pagination_rejects_invalid_numbers() {
        assert!(Pagination::parse("0", "10").is_err());
        assert!(Pagination::parse("1", "0").is_err());
        assert!(Pagination::parse("-1", "10").is_err());
        assert!(Pagination::parse("abc", "10").is_err());
        assert!(Pagination::parse("1", "2.5").is_err());
    }

    #[test]
    fn test_title_filter() {
        assert!(TitleFilter::new("", TitleMatch::Contains).is_none());

        let filter = TitleFilter::new("incep", TitleMatch::Contains).unwrap();
        assert_eq!(filter.needle(), "incep");
        assert_eq!(filter.mode(), TitleMatch::Contains);
    }
}
