use std::sync::LazyLock;

use regex::{NoExpand, Regex, RegexBuilder};

/// English finance terms and their Traditional-Chinese renderings.
///
/// Order matters: entries are applied first to last, so `market` is rewritten
/// before `bull market` is ever considered.
pub const FINANCE_KEYWORDS: &[(&str, &str)] = &[
    ("stock", "股票"),
    ("share", "股份"),
    ("market", "市場"),
    ("trading", "交易"),
    ("price", "價格"),
    ("rally", "上漲"),
    ("surge", "飆升"),
    ("plunge", "暴跌"),
    ("decline", "下跌"),
    ("gain", "漲幅"),
    ("loss", "虧損"),
    ("investor", "投資者"),
    ("wall street", "華爾街"),
    ("earnings", "收益"),
    ("profit", "利潤"),
    ("revenue", "收入"),
    ("forecast", "預測"),
    ("outlook", "展望"),
    ("upgrade", "升級"),
    ("downgrade", "降級"),
    ("ipo", "首次公開募股"),
    ("merger", "合併"),
    ("acquisition", "收購"),
    ("bankruptcy", "破產"),
    ("inflation", "通脹"),
    ("interest rate", "利率"),
    ("federal reserve", "美聯儲"),
    ("bull market", "牛市"),
    ("bear market", "熊市"),
    ("volatility", "波動性"),
    ("dividend", "股息"),
    ("split", "分拆"),
    ("sector", "行業"),
    ("tech", "科技"),
    ("financial", "金融"),
    ("healthcare", "醫療"),
    ("energy", "能源"),
    ("consumer", "消費"),
    ("industrial", "工業"),
    ("bull", "牛"),
    ("bear", "熊"),
    ("breakout", "突破"),
    ("support", "支撐"),
    ("resistance", "阻力"),
    ("momentum", "動力"),
    ("sentiment", "情緒"),
];

static FINANCE: LazyLock<KeywordDictionary> =
    LazyLock::new(|| KeywordDictionary::new(FINANCE_KEYWORDS));

/// Ordered whole-word, case-insensitive term replacement.
///
/// Each term is bracketed by ASCII word boundaries: word characters are ASCII
/// letters, digits and `_`, and anything else, CJK included, is a boundary.
pub struct KeywordDictionary {
    rules: Vec<(Regex, &'static str)>,
}

impl KeywordDictionary {
    /// Compile a dictionary from ordered `(term, replacement)` pairs.
    #[must_use]
    pub fn new(entries: &[(&'static str, &'static str)]) -> Self {
        let rules = entries
            .iter()
            .filter_map(|(term, zh)| {
                // escaped ASCII literals always compile
                RegexBuilder::new(&format!(r"(?-u:\b){}(?-u:\b)", regex::escape(term)))
                    .case_insensitive(true)
                    .build()
                    .ok()
                    .map(|re| (re, *zh))
            })
            .collect();
        Self { rules }
    }

    /// The process-wide finance dictionary.
    #[must_use]
    pub fn finance() -> &'static Self {
        &FINANCE
    }

    /// Number of compiled rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the dictionary has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule in order over `text`.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (re, zh) in &self.rules {
            out = re.replace_all(&out, NoExpand(zh)).into_owned();
        }
        out
    }
}
