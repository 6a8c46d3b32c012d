// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n|\s{2,}").unwrap());
static NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());

/// 将换行和连续空白折叠为单个空格
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUNS.replace_all(text, " ").trim().to_string()
}

/// 仅将换行折叠为单个空格，保留其余空白
pub fn collapse_newlines(text: &str) -> String {
    NEWLINES.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        let text = "  scent\nnotes:   amber, musk  ";
        assert_eq!(collapse_whitespace(text), "scent notes: amber, musk");
    }

    #[test]
    fn test_collapse_newlines_keeps_inner_spacing() {
        let text = "apply to\n\nclean  skin\n";
        assert_eq!(collapse_newlines(text), "apply to clean  skin");
    }
}
