use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

pub const DEFAULT_CURRENCY_CODE: &str = "USD";
pub const DEFAULT_LOCALE: &str = "en-US";

/// Display currency chosen by the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Currency {
    pub code: String,
    pub symbol: String,
    pub name: String,
    pub locale: String,
}

impl Currency {
    fn from_row(&(code, symbol, name, locale): &(&str, &str, &str, &str)) -> Self {
        Self {
            code: code.into(),
            symbol: symbol.into(),
            name: name.into(),
            locale: locale.into(),
        }
    }

    /// Renders `amount` in this currency using its own locale.
    pub fn format(&self, amount: f64) -> String {
        format_currency(amount, &self.code, &self.locale)
    }

    pub fn label(&self) -> String {
        format!("{} ({}) - {}", self.code, self.symbol, self.name)
    }
}

impl Default for Currency {
    fn default() -> Self {
        SUPPORTED_CURRENCIES[0].clone()
    }
}

const CURRENCY_ROWS: [(&str, &str, &str, &str); 20] = [
    ("USD", "$", "US Dollar", "en-US"),
    ("EUR", "€", "Euro", "de-DE"),
    ("JPY", "¥", "Japanese Yen", "ja-JP"),
    ("GBP", "£", "British Pound", "en-GB"),
    ("AUD", "A$", "Australian Dollar", "en-AU"),
    ("CAD", "C$", "Canadian Dollar", "en-CA"),
    ("CHF", "Fr", "Swiss Franc", "fr-CH"),
    ("CNY", "¥", "Chinese Yuan", "zh-CN"),
    ("SEK", "kr", "Swedish Krona", "sv-SE"),
    ("NZD", "NZ$", "New Zealand Dollar", "en-NZ"),
    ("MXN", "$", "Mexican Peso", "es-MX"),
    ("SGD", "S$", "Singapore Dollar", "en-SG"),
    ("HKD", "HK$", "Hong Kong Dollar", "zh-HK"),
    ("NOK", "kr", "Norwegian Krone", "nb-NO"),
    ("KRW", "₩", "South Korean Won", "ko-KR"),
    ("TRY", "₺", "Turkish Lira", "tr-TR"),
    ("INR", "₹", "Indian Rupee", "en-IN"),
    ("RUB", "₽", "Russian Ruble", "ru-RU"),
    ("BRL", "R$", "Brazilian Real", "pt-BR"),
    ("ZAR", "R", "South African Rand", "en-ZA"),
];

/// Currencies offered to the user; the first entry is the default.
pub static SUPPORTED_CURRENCIES: Lazy<Vec<Currency>> =
    Lazy::new(|| CURRENCY_ROWS.iter().map(Currency::from_row).collect());

/// Looks up a supported currency by ISO code, ignoring case.
pub fn find_currency(code: &str) -> Option<&'static Currency> {
    SUPPORTED_CURRENCIES
        .iter()
        .find(|currency| currency.code.eq_ignore_ascii_case(code.trim()))
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DigitGrouping {
    /// Groups of three: 1,234,567.
    Thousands,
    /// Last three digits, then groups of two: 12,34,567.
    Indian,
}

/// Number and currency layout rules for one locale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub grouping: DigitGrouping,
    pub symbol_position: SymbolPosition,
    /// Separator placed between symbol and digits, if any.
    pub symbol_spacing: Option<char>,
    /// Currency this locale writes with a bare local symbol.
    pub home_currency: String,
    pub home_symbol: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::for_tag(DEFAULT_LOCALE)
    }
}

impl LocaleConfig {
    /// Rules for `tag`; unsupported tags get `en-US` rules.
    pub fn for_tag(tag: &str) -> Self {
        use DigitGrouping::*;
        use SymbolPosition::*;

        let (language_tag, decimal, group, grouping, position, spacing, home, symbol) =
            match tag {
                "de-DE" => ("de-DE", ',', '.', Thousands, Suffix, Some(NBSP), "EUR", "€"),
                "ja-JP" => ("ja-JP", '.', ',', Thousands, Prefix, None, "JPY", "￥"),
                "en-GB" => ("en-GB", '.', ',', Thousands, Prefix, None, "GBP", "£"),
                "en-AU" => ("en-AU", '.', ',', Thousands, Prefix, None, "AUD", "$"),
                "en-CA" => ("en-CA", '.', ',', Thousands, Prefix, None, "CAD", "$"),
                "fr-CH" => ("fr-CH", ',', NARROW_NBSP, Thousands, Suffix, Some(NBSP), "CHF", "CHF"),
                "zh-CN" => ("zh-CN", '.', ',', Thousands, Prefix, None, "CNY", "¥"),
                "sv-SE" => ("sv-SE", ',', NBSP, Thousands, Suffix, Some(NBSP), "SEK", "kr"),
                "en-NZ" => ("en-NZ", '.', ',', Thousands, Prefix, None, "NZD", "$"),
                "es-MX" => ("es-MX", '.', ',', Thousands, Prefix, None, "MXN", "$"),
                "en-SG" => ("en-SG", '.', ',', Thousands, Prefix, None, "SGD", "$"),
                "zh-HK" => ("zh-HK", '.', ',', Thousands, Prefix, None, "HKD", "HK$"),
                "nb-NO" => ("nb-NO", ',', NBSP, Thousands, Suffix, Some(NBSP), "NOK", "kr"),
                "ko-KR" => ("ko-KR", '.', ',', Thousands, Prefix, None, "KRW", "₩"),
                "tr-TR" => ("tr-TR", ',', '.', Thousands, Prefix, None, "TRY", "₺"),
                "en-IN" => ("en-IN", '.', ',', Indian, Prefix, None, "INR", "₹"),
                "ru-RU" => ("ru-RU", ',', NBSP, Thousands, Suffix, Some(NBSP), "RUB", "₽"),
                "pt-BR" => ("pt-BR", ',', '.', Thousands, Prefix, Some(NBSP), "BRL", "R$"),
                "en-ZA" => ("en-ZA", ',', NBSP, Thousands, Prefix, None, "ZAR", "R"),
                _ => ("en-US", '.', ',', Thousands, Prefix, None, "USD", "$"),
            };

        Self {
            language_tag: language_tag.into(),
            decimal_separator: decimal,
            grouping_separator: group,
            grouping,
            symbol_position: position,
            symbol_spacing: spacing,
            home_currency: home.into(),
            home_symbol: symbol.into(),
        }
    }

    /// Symbol this locale uses for `code`.
    ///
    /// The home currency gets its local symbol. Dollar and peso codes read
    /// abroad are disambiguated with a prefix; other supported currencies
    /// keep their usual symbol, and unknown codes are written as the code.
    pub fn symbol_for(&self, code: &str) -> String {
        let code = code.trim().to_ascii_uppercase();
        if code == self.home_currency {
            return self.home_symbol.clone();
        }
        match code.as_str() {
            "USD" => "US$".into(),
            "MXN" => "MX$".into(),
            _ => find_currency(&code)
                .map(|currency| currency.symbol.clone())
                .unwrap_or_else(|| code.clone()),
        }
    }
}

/// Renders `value` with `precision` fraction digits using the locale's
/// separators and digit grouping.
pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value);
    let (int_part, fraction) = match body.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (body.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };
    let grouped = group_digits(digits, locale.grouping_separator, locale.grouping);
    match fraction {
        Some(fraction) => format!("{sign}{grouped}{}{fraction}", locale.decimal_separator),
        None => format!("{sign}{grouped}"),
    }
}

fn group_digits(digits: &str, separator: char, grouping: DigitGrouping) -> String {
    let mut grouped: Vec<char> = Vec::with_capacity(digits.len() + digits.len() / 2);
    let mut group_size = 3;
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count == group_size {
            grouped.push(separator);
            count = 0;
            if grouping == DigitGrouping::Indian {
                group_size = 2;
            }
        }
        grouped.push(ch);
        count += 1;
    }
    grouped.into_iter().rev().collect()
}

/// Formats `amount` as a whole-unit currency string for `currency_code` in
/// `locale`, rounding half away from zero.
///
/// ```
/// use cannon_core::currency::format_currency;
///
/// assert_eq!(format_currency(1234.5, "USD", "en-US"), "$1,235");
/// ```
pub fn format_currency(amount: f64, currency_code: &str, locale: &str) -> String {
    let locale = LocaleConfig::for_tag(locale);
    let symbol = locale.symbol_for(currency_code);

    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = if rounded.is_nan() {
        "NaN".to_string()
    } else if rounded.is_infinite() {
        "∞".to_string()
    } else {
        format_number(&locale, rounded.abs(), 0)
    };

    let spacing = locale
        .symbol_spacing
        .map(String::from)
        .unwrap_or_default();
    let body = match locale.symbol_position {
        SymbolPosition::Prefix => format!("{symbol}{spacing}{digits}"),
        SymbolPosition::Suffix => format!("{digits}{spacing}{symbol}"),
    };
    if negative {
        format!("-{body}")
    } else {
        body
    }
}

/// [`format_currency`] with the default code and locale.
pub fn format_currency_default(amount: f64) -> String {
    format_currency(amount, DEFAULT_CURRENCY_CODE, DEFAULT_LOCALE)
}
