// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::models::scrape_result::{ScrapeResult, FIELD_NAMES};

static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").unwrap());

/// 数据表
///
/// 从存储加载的表格视图：有序表头加字符串行。
/// 支持按价格或评分取前N条记录。
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// 当前行数
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 按指定列取数值最大的前 `n` 行
    ///
    /// `price` 列剥离非数字字符后按整数比较，`rating` 列按浮点数比较；
    /// 其余列不可排名。无法解析的值排在最后，相等值保持原有顺序。
    pub fn top_n_by_column(&self, n: usize, column: &str) -> Option<DataTable> {
        let index = self.headers.iter().position(|header| header == column)?;
        let key: fn(&str) -> Option<f64> = match column {
            "price" => |value| {
                let digits = NON_DIGITS.replace_all(value, "");
                digits.parse::<i64>().ok().map(|v| v as f64)
            },
            "rating" => |value| value.trim().parse::<f64>().ok(),
            _ => return None,
        };

        if self.rows.is_empty() {
            return None;
        }

        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| {
            let ka = a.get(index).and_then(|v| key(v));
            let kb = b.get(index).and_then(|v| key(v));
            match (ka, kb) {
                (Some(x), Some(y)) => y.total_cmp(&x),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            }
        });
        rows.truncate(n);

        Some(DataTable::new(self.headers.clone(), rows))
    }
}

impl From<&ScrapeResult> for DataTable {
    fn from(result: &ScrapeResult) -> Self {
        let headers = FIELD_NAMES.iter().map(|name| name.to_string()).collect();
        let rows = (0..result.len())
            .map(|i| result.row(i).iter().map(|v| v.to_string()).collect())
            .collect();
        Self { headers, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::scrape_result::ProductRecord;

    fn table() -> DataTable {
        DataTable::new(
            vec!["name".to_string(), "price".to_string(), "rating".to_string()],
            vec![
                vec!["cheap".to_string(), "1 832₽".to_string(), "4.1".to_string()],
                vec!["pricey".to_string(), "54 550₽".to_string(), "3.9".to_string()],
                vec!["unpriced".to_string(), "no information".to_string(), "4.9".to_string()],
            ],
        )
    }

    #[test]
    fn test_top_one_by_price_strips_non_digits() {
        let top = table().top_n_by_column(1, "price").unwrap();
        assert_eq!(top.rows.len(), 1);
        assert_eq!(top.rows[0][0], "pricey");
    }

    #[test]
    fn test_top_by_rating_parses_floats() {
        let top = table().top_n_by_column(2, "rating").unwrap();
        assert_eq!(top.rows[0][0], "unpriced");
        assert_eq!(top.rows[1][0], "cheap");
    }

    #[test]
    fn test_unparseable_values_sort_last() {
        let top = table().top_n_by_column(3, "price").unwrap();
        assert_eq!(top.rows[2][0], "unpriced");
    }

    #[test]
    fn test_unknown_column_is_rejected() {
        assert!(table().top_n_by_column(1, "description").is_none());
        assert!(table().top_n_by_column(1, "name").is_none());
    }

    #[test]
    fn test_from_scrape_result_orders_fields() {
        let mut result = ScrapeResult::new();
        result.push(ProductRecord {
            link: "https://goldapple.ru/1".to_string(),
            name: "scent".to_string(),
            price: "990₽".to_string(),
            rating: "4.5".to_string(),
            description: "fresh".to_string(),
            how_to_use: "no information".to_string(),
            country_of_origin: "Италия".to_string(),
        });

        let tbl = DataTable::from(&result);
        assert_eq!(tbl.headers, FIELD_NAMES.to_vec());
        assert_eq!(tbl.rows[0][1], "scent");
        assert_eq!(tbl.len(), 1);
    }
}
