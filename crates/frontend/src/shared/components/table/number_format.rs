//! Форматирование чисел для таблиц

/// Число с разделителем тысяч (пробел) и `decimals` знаками после точки
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, fraction) = match formatted.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (formatted.as_str(), None),
    };

    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(*c);
    }

    // -0.00 показываем как 0.00
    let negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };
    match fraction {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Денежное значение: 2 знака и разделитель тысяч
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Цена с кодом валюты активного магазина, например "1 299.00 USD"
pub fn format_price(value: f64, currency: &str) -> String {
    if currency.is_empty() {
        format_money(value)
    } else {
        format!("{} {}", format_money(value), currency)
    }
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Процент с одним знаком, например "42.5%"
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number_with_decimals(value, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.89), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1 234.56");
        assert_eq!(format_money(-0.001), "0.00");
        assert_eq!(format_money(49.99), "49.99");
    }

    #[test]
    fn test_format_int_and_percent() {
        assert_eq!(format_number_int(1000.0), "1 000");
        assert_eq!(format_number_int(999.0), "999");
        assert_eq!(format_number_int(-1234567.0), "-1 234 567");
        assert_eq!(format_percent(25.0), "25.0%");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1299.0, "USD"), "1 299.00 USD");
        assert_eq!(format_price(5.5, ""), "5.50");
    }
}
