// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::Local;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 结果文件名的固定前缀
pub const RESULT_FILE_PREFIX: &str = "scraped-product-details";

/// 生成带时间戳的结果文件名
pub fn generate_filename() -> String {
    format!(
        "{}_{}.csv",
        RESULT_FILE_PREFIX,
        Local::now().format("%Y-%m-%d_%H-%M-%S")
    )
}

/// 列出目录下的普通文件，按文件名排序
///
/// 不递归子目录，排序保证菜单编号稳定
pub fn list_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// 检查目录中是否没有任何普通文件
pub fn is_directory_empty(dir: &Path) -> io::Result<bool> {
    Ok(list_files(dir)?.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_filename_shape() {
        let name = generate_filename();
        assert!(name.starts_with(RESULT_FILE_PREFIX));
        assert!(name.ends_with(".csv"));
    }

    #[test]
    fn test_list_files_sorted_and_files_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.csv"), "b").unwrap();
        fs::write(dir.path().join("a.csv"), "a").unwrap();

        let files = list_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);
    }

    #[test]
    fn test_is_directory_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(is_directory_empty(dir.path()).unwrap());
        fs::write(dir.path().join("one.csv"), "x").unwrap();
        assert!(!is_directory_empty(dir.path()).unwrap());
    }
}
