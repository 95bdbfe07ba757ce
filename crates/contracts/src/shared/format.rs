//! Форматирование значений для таблиц, карточек и выгрузки

use chrono::{DateTime, NaiveDate};

/// Адреса длиннее этого порога сокращаются до `первые6...последние4`
const ADDRESS_SHORTEN_THRESHOLD: usize = 20;

/// "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02:26"
pub fn format_datetime(value: &str) -> String {
    if value.is_empty() {
        return "-".to_string();
    }
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.format("%d.%m.%Y %H:%M:%S").to_string(),
        Err(_) => value.to_string(),
    }
}

/// "2024-03-15" или "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(value: &str) -> String {
    if value.is_empty() {
        return "-".to_string();
    }
    let date_part = value.split('T').next().unwrap_or(value);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Число с разделителем тысяч (запятая) и `decimals` знаками после точки
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

pub fn format_amount(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Сумма в монетах: "1,250.50 ATMC"
pub fn format_atmc(value: f64) -> String {
    format!("{} ATMC", format_amount(value))
}

pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= ADDRESS_SHORTEN_THRESHOLD {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Пустое значение в ячейке
pub fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02:26");
        assert_eq!(format_datetime(""), "-");
        assert_eq!(format_datetime("yesterday"), "yesterday");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1234.56), "1,234.56");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(-1234.5), "-1,234.50");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_atmc(100000.0), "100,000.00 ATMC");
    }

    #[test]
    fn test_shorten_address() {
        assert_eq!(
            shorten_address("0x1234567890abcdef1234567890abcdef12345678"),
            "0x1234...5678"
        );
        assert_eq!(shorten_address("short"), "short");
        assert_eq!(shorten_address("12345678901234567890"), "12345678901234567890");
    }
}
