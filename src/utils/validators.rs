// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

use crate::domain::models::scrape_result::ScrapeResult;

/// 验证错误类型
#[derive(Error, Debug)]
pub enum ValidationError {
    /// 页数超出允许范围
    #[error("The number of pages must be between 0 and 100,000 (exclusive)")]
    PageCountOutOfRange,
    /// 抓取数据的列长度不一致
    #[error("Scraped data columns have unequal lengths")]
    UnevenColumns,
}

/// 验证器特质
///
/// 对单个值做一次性校验，失败时返回具体的验证错误
pub trait Validator<T> {
    fn validate(&self, value: T) -> Result<(), ValidationError>;
}

/// 页数验证器
///
/// 页数必须严格落在 (0, 100000) 开区间内，越界值直接拒绝而不截断
pub struct PageCountValidator;

impl Validator<u32> for PageCountValidator {
    fn validate(&self, value: u32) -> Result<(), ValidationError> {
        if (1..100_000).contains(&value) {
            Ok(())
        } else {
            Err(ValidationError::PageCountOutOfRange)
        }
    }
}

/// 抓取结果验证器
///
/// 保存前确认所有列的长度一致
pub struct ScrapedDataValidator;

impl<'a> Validator<&'a ScrapeResult> for ScrapedDataValidator {
    fn validate(&self, value: &'a ScrapeResult) -> Result<(), ValidationError> {
        let expected = value.len();
        if value.columns().iter().all(|column| column.len() == expected) {
            Ok(())
        } else {
            Err(ValidationError::UnevenColumns)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::scrape_result::ProductRecord;

    fn record(name: &str) -> ProductRecord {
        ProductRecord {
            link: "https://goldapple.ru/19000012345".to_string(),
            name: name.to_string(),
            price: "1 832₽".to_string(),
            rating: "4.8".to_string(),
            description: "eau de parfum".to_string(),
            how_to_use: "no information".to_string(),
            country_of_origin: "Франция".to_string(),
        }
    }

    #[test]
    fn test_page_count_bounds() {
        assert!(PageCountValidator.validate(0).is_err());
        assert!(PageCountValidator.validate(1).is_ok());
        assert!(PageCountValidator.validate(99_999).is_ok());
        assert!(PageCountValidator.validate(100_000).is_err());
    }

    #[test]
    fn test_even_columns_pass() {
        let mut result = ScrapeResult::new();
        result.push(record("first"));
        result.push(record("second"));
        assert!(ScrapedDataValidator.validate(&result).is_ok());
    }

    #[test]
    fn test_uneven_columns_fail() {
        let mut result = ScrapeResult::new();
        result.push(record("first"));
        result.name.push("stray value".to_string());
        assert!(matches!(
            ScrapedDataValidator.validate(&result),
            Err(ValidationError::UnevenColumns)
        ));
    }
}
