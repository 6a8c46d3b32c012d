// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::domain::models::scrape_result::ProductRecord;
use crate::utils::text_processing;

/// 可选字段缺失时写入的占位值
pub const NO_INFORMATION: &str = "no information";

/// 提取错误类型
///
/// 仅必需字段会产生错误，可选字段缺失时返回占位值
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// 页面缺少必需字段
    #[error("Required field '{0}' is missing from the page")]
    MissingField(&'static str),
}

static CARD: Lazy<Selector> = Lazy::new(|| Selector::parse("article").unwrap());
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());
static DIV: Lazy<Selector> = Lazy::new(|| Selector::parse("div").unwrap());
static DESCRIPTION_TAB: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"div[value="Description_0"]"#).unwrap());
static HOW_TO_USE_TAB: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"div[value="Text_1"]"#).unwrap());
static INFO_TABS: Lazy<Vec<Selector>> = Lazy::new(|| {
    (2..=5)
        .map(|i| Selector::parse(&format!(r#"div[value="Text_{}"]"#, i)).unwrap())
        .collect()
});
static OFFERS: Lazy<Selector> = Lazy::new(|| Selector::parse(r#"div[itemprop="offers"]"#).unwrap());
static RATING_META: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[itemprop="ratingValue"]"#).unwrap());
static DESCRIPTION_BLOCK: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"div[itemprop="description"]"#).unwrap());

// The tab `text` attribute carries the human-readable Russian label.
static DESCRIPTION_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)описание").unwrap());
static HOW_TO_USE_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)применение").unwrap());
static EXTRA_INFO_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)дополнительная информация").unwrap());
static PRICE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d[\d\s]*₽").unwrap());
static COUNTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)страна происхождения<br\s*/?>([А-Яа-яЁё]+)<br").unwrap());

/// 从列表页文档中取出所有商品卡片
pub fn extract_cards(doc: &Html) -> Vec<ElementRef<'_>> {
    doc.select(&CARD).collect()
}

/// 读取商品卡片中第一个链接的相对路径（必需）
pub fn extract_product_path(card: &ElementRef<'_>) -> Result<String, ExtractionError> {
    card.select(&ANCHOR)
        .next()
        .and_then(|anchor| anchor.value().attr("href"))
        .map(|href| href.to_string())
        .ok_or(ExtractionError::MissingField("link"))
}

/// 提取商品名称（必需）
///
/// 名称位于描述选项卡的第一个子元素中
pub fn extract_name(doc: &Html) -> Result<String, ExtractionError> {
    find_labeled_section(doc, &DESCRIPTION_TAB, &DESCRIPTION_LABEL)
        .and_then(|section| section.child_elements().next())
        .map(|child| child.text().collect::<String>().trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or(ExtractionError::MissingField("name"))
}

/// 提取展示价格（可选）
pub fn extract_price(doc: &Html) -> String {
    doc.select(&OFFERS)
        .next()
        .map(|offers| offers.text().collect::<Vec<_>>().join(" "))
        .and_then(|text| PRICE.find(&text).map(|m| m.as_str().trim().to_string()))
        .unwrap_or_else(|| NO_INFORMATION.to_string())
}

/// 提取商品评分（必需）
pub fn extract_rating(doc: &Html) -> Result<String, ExtractionError> {
    doc.select(&RATING_META)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or(ExtractionError::MissingField("rating"))
}

/// 提取商品描述（可选）
pub fn extract_description(doc: &Html) -> String {
    doc.select(&DESCRIPTION_BLOCK)
        .next()
        .map(|block| {
            text_processing::collapse_whitespace(&block.text().collect::<Vec<_>>().join(" "))
        })
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_INFORMATION.to_string())
}

/// 提取使用方法（可选）
pub fn extract_how_to_use(doc: &Html) -> String {
    find_labeled_section(doc, &HOW_TO_USE_TAB, &HOW_TO_USE_LABEL)
        .map(|section| {
            text_processing::collapse_newlines(&section.text().collect::<Vec<_>>().join(" "))
        })
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_INFORMATION.to_string())
}

/// 提取原产国（可选）
///
/// 在"дополнительная информация"选项卡的正文HTML中，
/// 截取"страна происхождения"标签后的西里尔词
pub fn extract_country_of_origin(doc: &Html) -> String {
    for selector in INFO_TABS.iter() {
        let Some(section) = find_labeled_section(doc, selector, &EXTRA_INFO_LABEL) else {
            continue;
        };
        let block = section.select(&DIV).next().or_else(|| {
            section
                .next_siblings()
                .filter_map(ElementRef::wrap)
                .find(|sibling| sibling.value().name() == "div")
        });
        let html = match block {
            Some(block) => block.html(),
            None => section.html(),
        };
        if let Some(capture) = COUNTRY.captures(&html).and_then(|c| c.get(1)) {
            return capture.as_str().to_string();
        }
    }
    NO_INFORMATION.to_string()
}

/// 对一个商品页运行全部提取器
///
/// 任一必需字段缺失时整条记录失败，可选字段缺失时落入占位值
pub fn extract_record(url: &str, html: &str) -> Result<ProductRecord, ExtractionError> {
    let doc = Html::parse_document(html);
    Ok(ProductRecord {
        link: url.to_string(),
        name: extract_name(&doc)?,
        price: extract_price(&doc),
        rating: extract_rating(&doc)?,
        description: extract_description(&doc),
        how_to_use: extract_how_to_use(&doc),
        country_of_origin: extract_country_of_origin(&doc),
    })
}

fn find_labeled_section<'a>(
    doc: &'a Html,
    selector: &Selector,
    label: &Regex,
) -> Option<ElementRef<'a>> {
    doc.select(selector)
        .find(|section| section.value().attr("text").is_some_and(|t| label.is_match(t)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEM_PAGE: &str = r#"
        <html><body>
            <div itemprop="offers"><span>1 832₽</span><span>старая цена 2 500₽</span></div>
            <meta itemprop="ratingValue" content="4.8">
            <div itemprop="description">стойкий аромат
с нотами  амбры</div>
            <div value="Description_0" text="Описание">
                <div>Лосьон для тела</div>
                <div>прочее</div>
            </div>
            <div value="Text_1" text="Применение">нанести на
кожу</div>
            <div value="Text_3" text="Дополнительная информация">
                <div>состав: вода<br>страна происхождения<br>Франция<br>объём: 50 мл</div>
            </div>
        </body></html>
    "#;

    #[test]
    fn test_extract_name_from_description_tab() {
        let doc = Html::parse_document(ITEM_PAGE);
        assert_eq!(extract_name(&doc).unwrap(), "Лосьон для тела");
    }

    #[test]
    fn test_extract_name_missing_section_fails() {
        let doc = Html::parse_document("<html><body><div>nothing</div></body></html>");
        assert!(matches!(
            extract_name(&doc),
            Err(ExtractionError::MissingField("name"))
        ));
    }

    #[test]
    fn test_extract_price_first_match() {
        let doc = Html::parse_document(ITEM_PAGE);
        assert_eq!(extract_price(&doc), "1 832₽");
    }

    #[test]
    fn test_extract_price_sentinel_when_absent() {
        let doc = Html::parse_document("<html><body></body></html>");
        assert_eq!(extract_price(&doc), NO_INFORMATION);
    }

    #[test]
    fn test_extract_rating_content_attribute() {
        let doc = Html::parse_document(ITEM_PAGE);
        assert_eq!(extract_rating(&doc).unwrap(), "4.8");
    }

    #[test]
    fn test_extract_rating_missing_fails() {
        let doc = Html::parse_document("<html><body></body></html>");
        assert!(extract_rating(&doc).is_err());
    }

    #[test]
    fn test_extract_description_collapses_whitespace() {
        let doc = Html::parse_document(ITEM_PAGE);
        assert_eq!(extract_description(&doc), "стойкий аромат с нотами амбры");
    }

    #[test]
    fn test_extract_how_to_use_collapses_newlines() {
        let doc = Html::parse_document(ITEM_PAGE);
        assert_eq!(extract_how_to_use(&doc), "нанести на кожу");
    }

    #[test]
    fn test_extract_country_of_origin() {
        let doc = Html::parse_document(ITEM_PAGE);
        assert_eq!(extract_country_of_origin(&doc), "Франция");
    }

    #[test]
    fn test_optional_fields_fall_back_to_sentinel() {
        let html = r#"
            <html><body>
                <meta itemprop="ratingValue" content="4.0">
                <div value="Description_0" text="описание"><div>Духи</div></div>
            </body></html>
        "#;
        let doc = Html::parse_document(html);
        assert_eq!(extract_how_to_use(&doc), NO_INFORMATION);
        assert_eq!(extract_country_of_origin(&doc), NO_INFORMATION);
        assert_eq!(extract_description(&doc), NO_INFORMATION);
    }

    #[test]
    fn test_extract_record_requires_name_and_rating() {
        let record = extract_record("https://goldapple.ru/1", ITEM_PAGE).unwrap();
        assert_eq!(record.name, "Лосьон для тела");
        assert_eq!(record.rating, "4.8");
        assert_eq!(record.country_of_origin, "Франция");

        let no_rating = ITEM_PAGE.replace("ratingValue", "somethingElse");
        assert!(extract_record("https://goldapple.ru/1", &no_rating).is_err());
    }

    #[test]
    fn test_extract_cards_and_product_path() {
        let listing = r#"
            <html><body>
                <article><a href="/19000012345-losjon">item</a></article>
                <article><a href="/19000054321-dukhi">item</a></article>
                <article><span>no link here</span></article>
            </body></html>
        "#;
        let doc = Html::parse_document(listing);
        let cards = extract_cards(&doc);
        assert_eq!(cards.len(), 3);
        assert_eq!(
            extract_product_path(&cards[0]).unwrap(),
            "/19000012345-losjon"
        );
        assert!(extract_product_path(&cards[2]).is_err());
    }
}
