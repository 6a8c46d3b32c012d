// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::models::data_table::DataTable;
use crate::domain::models::scrape_result::ScrapeResult;
use crate::utils::validators::ValidationError;

/// 存储错误类型
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// CSV读写错误
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// 请求的文件不存在
    #[error("File '{filename}' not found in directory '{dir}'")]
    FileNotFound { filename: String, dir: String },
    /// 目录中没有可删除的文件
    #[error("The directory '{0}' is already empty")]
    DirectoryEmpty(String),
    /// 待保存的数据未通过校验
    #[error(transparent)]
    InvalidPayload(#[from] ValidationError),
}

/// 结果仓库特质
///
/// 定义抓取结果文件的数据访问接口
#[async_trait]
pub trait ResultRepository: Send + Sync {
    /// 保存结果集为CSV文件
    ///
    /// 文件名缺省时生成带时间戳的名称，同名文件静默覆盖；
    /// 返回写入文件的完整路径
    async fn save(
        &self,
        data: &ScrapeResult,
        filename: Option<&str>,
    ) -> Result<PathBuf, StorageError>;

    /// 按文件名加载一个已保存的结果文件
    async fn load(&self, filename: &str) -> Result<DataTable, StorageError>;

    /// 删除指定文件，或在未指定时删除目录下的全部文件
    async fn delete(&self, filename: Option<&str>) -> Result<(), StorageError>;

    /// 列出数据目录下的结果文件，按文件名排序
    async fn list_files(&self) -> Result<Vec<PathBuf>, StorageError>;
}
