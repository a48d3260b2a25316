// paykit/src/format.rs
//
// Display helpers shared by the web and terminal front ends
//

/// Format an integer with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Format an amount the way a locale-aware number formatter would for en-US:
/// grouped integer part, up to three fraction digits, trailing zeros dropped.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let negative = value < 0.0;
    let rounded = (value.abs() * 1000.0).round() as u64;
    let whole = rounded / 1000;
    let fraction = rounded % 1000;

    let mut out = String::new();
    if negative && rounded > 0 {
        out.push('-');
    }
    out.push_str(&format_number(whole));
    if fraction > 0 {
        let digits = format!("{:03}", fraction);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

/// "1,200 USDC"
pub fn format_usdc(value: f64) -> String {
    format!("{} USDC", format_amount(value))
}

/// 0x742d...0bEb. Counts characters, not bytes, so any stored string is safe.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
