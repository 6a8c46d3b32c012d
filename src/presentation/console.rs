// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::io::{self, BufRead};
use tracing::error;

use crate::domain::models::data_table::DataTable;
use crate::domain::repositories::result_repository::{ResultRepository, StorageError};
use crate::domain::services::scraper_service::Scraper;
use crate::presentation::table;

const MENU_WIDTH: usize = 41;

enum StartChoice {
    NewScrape,
    Browse,
}

/// 控制台应用
///
/// 同步的菜单循环：开始菜单、文件选择器和主菜单。
/// 任何展示数据的分支都会结束会话，"更换文件"则回到主菜单。
pub struct ConsoleApp<S: Scraper, R: ResultRepository> {
    scraper: S,
    repository: R,
}

impl<S: Scraper, R: ResultRepository> ConsoleApp<S, R> {
    pub fn new(scraper: S, repository: R) -> Self {
        Self { scraper, repository }
    }

    /// 运行整个控制台会话
    pub async fn run(&mut self) -> Result<(), StorageError> {
        let files = self.repository.list_files().await?;
        let loaded = if files.is_empty() {
            self.run_scrape().await?
        } else {
            match self.start_menu() {
                Some(StartChoice::NewScrape) => self.run_scrape().await?,
                Some(StartChoice::Browse) => self.pick_file().await?,
                None => return Ok(()),
            }
        };
        let Some(mut table) = loaded else {
            return Ok(());
        };

        loop {
            print_separator();
            println!("Loaded {} records.", table.len());
            println!("What would you like to do?");
            println!("1. Show all records");
            println!("2. Show top records by price");
            println!("3. Show top records by rating");
            println!("4. Change file");
            println!("5. Exit");

            let Some(choice) = read_line() else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => {
                    print!("{}", table::render(&table));
                    return Ok(());
                }
                "2" => {
                    self.show_top(&table, "price");
                    return Ok(());
                }
                "3" => {
                    self.show_top(&table, "rating");
                    return Ok(());
                }
                "4" => match self.pick_file().await? {
                    Some(next) => table = next,
                    None => return Ok(()),
                },
                "5" => return Ok(()),
                _ => println!("Invalid selection, try again"),
            }
        }
    }

    // Runs a scrape, persists the result and hands back the in-memory table.
    // A failed scrape is reported and ends the session without touching storage.
    async fn run_scrape(&mut self) -> Result<Option<DataTable>, StorageError> {
        println!("Starting a new scrape...");
        if let Err(e) = self.scraper.scrape().await {
            error!("Scrape failed: {}", e);
            println!("Scrape failed: {}", e);
            return Ok(None);
        }

        let path = self.repository.save(self.scraper.data(), None).await?;
        println!("Results saved to {}", path.display());
        Ok(Some(DataTable::from(self.scraper.data())))
    }

    fn start_menu(&self) -> Option<StartChoice> {
        loop {
            print_separator();
            println!("What would you like to do?");
            println!("1. Start a new scrape");
            println!("2. Browse previous results");

            let choice = read_line()?;
            match choice.as_str() {
                "1" => return Some(StartChoice::NewScrape),
                "2" => return Some(StartChoice::Browse),
                _ => println!("Invalid selection, try again"),
            }
        }
    }

    async fn pick_file(&mut self) -> Result<Option<DataTable>, StorageError> {
        let files = self.repository.list_files().await?;
        if files.is_empty() {
            println!("No stored result files found");
            return Ok(None);
        }

        loop {
            print_separator();
            println!("Select a file to load:");
            for (index, file) in files.iter().enumerate() {
                let name = file
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                println!("{}. {}", index + 1, name);
            }

            let Some(input) = read_line() else {
                return Ok(None);
            };
            if let Ok(number) = input.parse::<usize>() {
                if (1..=files.len()).contains(&number) {
                    let name = files[number - 1]
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    return Ok(Some(self.repository.load(&name).await?));
                }
            }
            println!("Invalid selection, try again");
        }
    }

    fn show_top(&self, table: &DataTable, column: &str) {
        println!("How many records to show?");
        let top = read_line()
            .as_deref()
            .and_then(parse_top_n)
            .and_then(|n| table.top_n_by_column(n, column));
        match top {
            Some(top) => print!("{}", table::render(&top)),
            None => println!("Invalid input or no data available"),
        }
    }
}

fn print_separator() {
    println!("{}", "=".repeat(MENU_WIDTH));
}

// Trailing dots are tolerated so "2." selects option 2.
fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().trim_end_matches('.').to_string()),
        Err(_) => None,
    }
}

fn parse_top_n(input: &str) -> Option<usize> {
    input.parse::<usize>().ok().filter(|n| *n > 0)
}
