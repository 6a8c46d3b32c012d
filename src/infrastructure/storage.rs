// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::domain::models::data_table::DataTable;
use crate::domain::models::scrape_result::{ScrapeResult, FIELD_NAMES};
use crate::domain::repositories::result_repository::{ResultRepository, StorageError};
use crate::utils::os_utils;
use crate::utils::validators::{ScrapedDataValidator, Validator};

/// CSV文件存储实现
///
/// 把结果集写成带行索引列的CSV文件，目录由配置指定，
/// 构造时若目录不存在则创建
pub struct CsvStorage {
    data_dir: PathBuf,
}

impl CsvStorage {
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn dir_display(&self) -> String {
        self.data_dir.display().to_string()
    }

    fn file_path(&self, filename: &str) -> PathBuf {
        self.data_dir.join(filename)
    }

    /// 数据目录路径
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[async_trait]
impl ResultRepository for CsvStorage {
    async fn save(
        &self,
        data: &ScrapeResult,
        filename: Option<&str>,
    ) -> Result<PathBuf, StorageError> {
        ScrapedDataValidator.validate(data)?;

        let name = match filename {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => os_utils::generate_filename(),
        };
        let path = self.file_path(&name);

        let mut writer = csv::Writer::from_path(&path)?;
        // Leading index column, labelled with an empty header cell
        writer.write_record(std::iter::once("").chain(FIELD_NAMES))?;
        for index in 0..data.len() {
            let mut record = vec![index.to_string()];
            record.extend(data.row(index).iter().map(|value| value.to_string()));
            writer.write_record(&record)?;
        }
        writer.flush()?;

        info!("Saved {} records to {}", data.len(), path.display());
        Ok(path)
    }

    async fn load(&self, filename: &str) -> Result<DataTable, StorageError> {
        let path = self.file_path(filename);
        if !path.is_file() {
            return Err(StorageError::FileNotFound {
                filename: filename.to_string(),
                dir: self.dir_display(),
            });
        }

        let mut reader = csv::Reader::from_path(&path)?;
        // Drop the index column on the way in
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .skip(1)
            .map(|header| header.to_string())
            .collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().skip(1).map(|value| value.to_string()).collect());
        }

        Ok(DataTable::new(headers, rows))
    }

    async fn delete(&self, filename: Option<&str>) -> Result<(), StorageError> {
        if os_utils::is_directory_empty(&self.data_dir)? {
            return Err(StorageError::DirectoryEmpty(self.dir_display()));
        }

        match filename {
            Some(name) => {
                let path = self.file_path(name);
                if !path.is_file() {
                    return Err(StorageError::FileNotFound {
                        filename: name.to_string(),
                        dir: self.dir_display(),
                    });
                }
                fs::remove_file(&path)?;
                info!("Deleted {}", path.display());
            }
            None => {
                for path in os_utils::list_files(&self.data_dir)? {
                    fs::remove_file(&path)?;
                }
                info!("Deleted every file in {}", self.dir_display());
            }
        }

        Ok(())
    }

    async fn list_files(&self) -> Result<Vec<PathBuf>, StorageError> {
        Ok(os_utils::list_files(&self.data_dir)?)
    }
}
