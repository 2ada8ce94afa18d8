//! 文本值的宽松数值解析。
//!
//! # 契约说明（What）
//! - 与 C 运行时的 `atoi`/`atof` 行为对齐：读取最长的合法数值前缀，遇到第一个非法字符即停止；
//!   文本不以数值开头时得到 `0`；
//! - 范围校验（拒绝负数）只在 [`uint`] 与 [`non_negative_float`] 中进行，[`int`] 接受任何符号。

/// 删除行内所有空格、制表符与回车。
///
/// 作用于整行而非两端，因此 `max_useless_passes =5` 与 `max_ useless_passes=5` 都会被规整。
pub(crate) fn despace(line: &str) -> String {
    line.chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\r'))
        .collect()
}

/// 宽松整数解析，结果饱和到 `i32` 范围。
pub(crate) fn int(text: &str) -> i32 {
    let bytes = text.as_bytes();
    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };
    let magnitude = digits
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .fold(0i64, |acc, byte| {
            acc.saturating_mul(10).saturating_add(i64::from(byte - b'0'))
        });
    let value = if negative { -magnitude } else { magnitude };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// 宽松无符号整数解析；数值为负时返回 `None`。
pub(crate) fn uint(text: &str) -> Option<u32> {
    u32::try_from(int(text)).ok()
}

/// 宽松浮点解析。
///
/// # 逻辑解析（How）
/// - 支持可选符号、整数部分、小数部分与 `e`/`E` 指数，以及不区分大小写的 `inf`/`infinity`/`nan`；
/// - 支持 `0x` 前缀的十六进制浮点（如 `0x1.8p-1`），`p` 后为十进制的二进制指数；
/// - 指数部分缺少数字时（如 `2e`）只取到尾数为止；
/// - 先按 `f64` 解析再收窄为 `f32`。
pub(crate) fn float(text: &str) -> f32 {
    let bytes = text.as_bytes();
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let negative = bytes.first() == Some(&b'-');

    if let Some(special) = special_float(&bytes[sign_len..]) {
        return if negative { -special } else { special };
    }
    if let Some(hex) = hex_float(&text[sign_len..]) {
        let value = hex as f32;
        return if negative { -value } else { value };
    }

    let integer = count_digits(&bytes[sign_len..]);
    let mut end = sign_len + integer;
    let mut mantissa_digits = integer;
    if bytes.get(end) == Some(&b'.') {
        let fraction = count_digits(&bytes[end + 1..]);
        mantissa_digits += fraction;
        end += 1 + fraction;
    }
    if mantissa_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_start = end + 1;
        if matches!(bytes.get(exponent_start), Some(b'+' | b'-')) {
            exponent_start += 1;
        }
        let exponent_digits = count_digits(&bytes[exponent_start..]);
        if exponent_digits > 0 {
            end = exponent_start + exponent_digits;
        }
    }

    text[..end].parse::<f64>().map_or(0.0, |value| value as f32)
}

/// 宽松非负浮点解析；数值小于零时返回 `None`，`NaN` 视为通过。
pub(crate) fn non_negative_float(text: &str) -> Option<f32> {
    let value = float(text);
    if value < 0.0 { None } else { Some(value) }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

/// 解析 `0x` 开头的十六进制浮点；前缀后没有任何十六进制数字时返回 `None`。
fn hex_float(text: &str) -> Option<f64> {
    let rest = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))?;
    let bytes = rest.as_bytes();
    let mut mantissa = 0f64;

    let integer = hex_digits(bytes, &mut mantissa);
    let mut end = integer;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = hex_digits(&bytes[end + 1..], &mut mantissa);
        end += 1 + fraction;
    }
    if integer + fraction == 0 {
        return None;
    }

    let mut exponent = i32::try_from(fraction).unwrap_or(i32::MAX).saturating_mul(-4);
    if matches!(bytes.get(end), Some(b'p' | b'P')) {
        exponent = exponent.saturating_add(int(&rest[end + 1..]));
    }
    if mantissa == 0.0 {
        return Some(0.0);
    }
    Some(mantissa * 2f64.powi(exponent))
}

/// 累加连续的十六进制数字到 `mantissa`，返回数字个数。
fn hex_digits(bytes: &[u8], mantissa: &mut f64) -> usize {
    bytes
        .iter()
        .map_while(|byte| char::from(*byte).to_digit(16))
        .fold(0, |count, digit| {
            *mantissa = *mantissa * 16.0 + f64::from(digit);
            count + 1
        })
}

fn special_float(bytes: &[u8]) -> Option<f32> {
    let has_prefix = |word: &str| {
        bytes.len() >= word.len() && bytes[..word.len()].eq_ignore_ascii_case(word.as_bytes())
    };
    if has_prefix("inf") {
        Some(f32::INFINITY)
    } else if has_prefix("nan") {
        Some(f32::NAN)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn despace_strips_whitespace_everywhere() {
        assert_eq!(despace(" max_useless_passes =\t5\r"), "max_useless_passes=5");
        assert_eq!(despace("a b\tc\rd"), "abcd");
        assert_eq!(despace("   \t\r"), "");
    }

    #[test]
    fn int_reads_leading_digits_only() {
        assert_eq!(int("42"), 42);
        assert_eq!(int("-1"), -1);
        assert_eq!(int("+7"), 7);
        assert_eq!(int("12abc"), 12);
        assert_eq!(int("abc"), 0);
        assert_eq!(int(""), 0);
        assert_eq!(int("-"), 0);
        assert_eq!(int("3.9"), 3);
    }

    #[test]
    fn int_saturates_instead_of_wrapping() {
        assert_eq!(int("99999999999999999999"), i32::MAX);
        assert_eq!(int("-99999999999999999999"), i32::MIN);
    }

    #[test]
    fn uint_rejects_negative_values() {
        assert_eq!(uint("8"), Some(8));
        assert_eq!(uint("-0"), Some(0));
        assert_eq!(uint("junk"), Some(0));
        assert_eq!(uint("-1"), None);
    }

    #[test]
    fn float_reads_longest_decimal_prefix() {
        assert_eq!(float("0.9999"), 0.9999f64 as f32);
        assert_eq!(float("6"), 6.0);
        assert_eq!(float(".5"), 0.5);
        assert_eq!(float("5."), 5.0);
        assert_eq!(float("1e2"), 100.0);
        assert_eq!(float("1.5E-1x"), 0.15f64 as f32);
        assert_eq!(float("2e"), 2.0);
        assert_eq!(float("2e+"), 2.0);
        assert_eq!(float("-3.25"), -3.25);
        assert_eq!(float("abc"), 0.0);
        assert_eq!(float("."), 0.0);
        assert_eq!(float(""), 0.0);
    }

    #[test]
    fn float_accepts_hex_literals() {
        assert_eq!(float("0x1p3"), 8.0);
        assert_eq!(float("0x10"), 16.0);
        assert_eq!(float("-0x.8"), -0.5);
        assert_eq!(float("0X1.8p-1"), 0.75);
        assert_eq!(float("0x2p"), 2.0);
        assert_eq!(float("0xg"), 0.0);
        assert_eq!(non_negative_float("-0x1p0"), None);
    }

    #[test]
    fn float_accepts_special_literals() {
        assert_eq!(float("inf"), f32::INFINITY);
        assert_eq!(float("-Infinity"), f32::NEG_INFINITY);
        assert!(float("NaN").is_nan());
    }

    #[test]
    fn non_negative_float_rejects_negatives() {
        assert_eq!(non_negative_float("0"), Some(0.0));
        assert_eq!(non_negative_float("2"), Some(2.0));
        assert_eq!(non_negative_float("-1"), None);
        assert_eq!(non_negative_float("-inf"), None);
        assert!(non_negative_float("nan").is_some_and(f32::is_nan));
    }
}
