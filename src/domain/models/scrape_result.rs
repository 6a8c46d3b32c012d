// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 字段名称，按CSV列的固定顺序排列
pub const FIELD_NAMES: [&str; 7] = [
    "link",
    "name",
    "price",
    "rating",
    "description",
    "how_to_use",
    "country_of_origin",
];

/// 单个商品的完整记录
///
/// 七个字段一次性写入结果集，保证各列长度始终一致
#[derive(Debug, Clone)]
pub struct ProductRecord {
    /// 商品页的绝对URL
    pub link: String,
    /// 商品名称
    pub name: String,
    /// 展示价格，含货币符号
    pub price: String,
    /// 商品评分
    pub rating: String,
    /// 商品描述
    pub description: String,
    /// 使用方法
    pub how_to_use: String,
    /// 原产国
    pub country_of_origin: String,
}

/// 抓取结果实体
///
/// 按列组织的商品字段集合，插入顺序即为发现顺序。
/// 每次运行前通过 `clear` 重置，新增数据只能整条记录追加。
#[derive(Debug, Clone, Default)]
pub struct ScrapeResult {
    pub link: Vec<String>,
    pub name: Vec<String>,
    pub price: Vec<String>,
    pub rating: Vec<String>,
    pub description: Vec<String>,
    pub how_to_use: Vec<String>,
    pub country_of_origin: Vec<String>,
}

impl ScrapeResult {
    /// 创建一个各列均为空的结果集
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条完整的商品记录
    ///
    /// 整条记录原子地写入所有列
    pub fn push(&mut self, record: ProductRecord) {
        self.link.push(record.link);
        self.name.push(record.name);
        self.price.push(record.price);
        self.rating.push(record.rating);
        self.description.push(record.description);
        self.how_to_use.push(record.how_to_use);
        self.country_of_origin.push(record.country_of_origin);
    }

    /// 清空所有列
    pub fn clear(&mut self) {
        self.link.clear();
        self.name.clear();
        self.price.clear();
        self.rating.clear();
        self.description.clear();
        self.how_to_use.clear();
        self.country_of_origin.clear();
    }

    /// 当前记录条数
    pub fn len(&self) -> usize {
        self.link.len()
    }

    /// 结果集是否为空
    pub fn is_empty(&self) -> bool {
        self.link.is_empty()
    }

    /// 按 `FIELD_NAMES` 顺序返回所有列
    pub fn columns(&self) -> [&Vec<String>; 7] {
        [
            &self.link,
            &self.name,
            &self.price,
            &self.rating,
            &self.description,
            &self.how_to_use,
            &self.country_of_origin,
        ]
    }

    /// 按 `FIELD_NAMES` 顺序返回第 `index` 行的值
    pub fn row(&self, index: usize) -> [&str; 7] {
        [
            &self.link[index],
            &self.name[index],
            &self.price[index],
            &self.rating[index],
            &self.description[index],
            &self.how_to_use[index],
            &self.country_of_origin[index],
        ]
    }
}
