// src/domain/format.rs

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;

/// Rupee amount in crore or lakh, rounded half-up to two decimals.
///
/// `225000000` -> `"₹22.50 Cr"`, `4500000` -> `"₹45.00 L"`.
pub fn format_price(amount: u64) -> String {
    // Work in hundredths of the unit so rounding stays exact.
    let (unit, suffix) = if amount >= CRORE {
        (CRORE, "Cr")
    } else {
        (LAKH, "L")
    };
    let step = unit / 100;
    let hundredths = amount / step + u64::from(amount % step >= step / 2);
    format!("₹{}.{:02} {}", hundredths / 100, hundredths % 100, suffix)
}

/// Western digit grouping: `150000` -> `"150,000"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut groups: Vec<&str> = Vec::new();
    let mut end = digits.len();
    while end > 3 {
        groups.push(&digits[end - 3..end]);
        end -= 3;
    }
    groups.push(&digits[..end]);
    groups.reverse();
    groups.join(",")
}

/// Indian digit grouping: last three digits, then pairs. `10000000` -> `"1,00,00,000"`.
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
