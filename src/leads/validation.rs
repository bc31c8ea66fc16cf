//! Contact field checks and phone formatting for Russian numbers.

/// Keep only ASCII digits
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, 'А'..='я' | 'Ё' | 'ё' | '-' | ' ')
}

/// At least two characters, letters (Latin or Cyrillic), hyphens and spaces only
pub fn is_valid_name(name: &str) -> bool {
    let trimmed = name.trim();
    trimmed.chars().count() >= 2 && trimmed.chars().all(is_name_char)
}

/// Exactly 11 digits starting with 7, separators ignored
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = digits_only(phone);
    digits.len() == 11 && digits.starts_with('7')
}

/// Format phone input as the user types it.
///
/// `+7` numbers grow into `+7 (XXX) XXX-XX-XX`; anything else comes back as
/// digits with a single leading `+`.
pub fn format_phone(raw: &str) -> String {
    let mut src: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    if !src.starts_with('+') {
        src = format!("+{}", src.replace('+', ""));
    }

    if src.chars().nth(1) != Some('7') {
        return src;
    }

    let digits = digits_only(&src);
    let rest: Vec<char> = digits.chars().skip(1).collect();
    let part = |from: usize, to: usize| -> String {
        rest[from.min(rest.len())..to.min(rest.len())].iter().collect()
    };

    let mut out = String::from("+7");
    if !rest.is_empty() {
        out.push_str(" (");
        out.push_str(&part(0, 3));
    }
    if rest.len() >= 3 {
        out.push(')');
    }
    if rest.len() > 3 {
        out.push(' ');
        out.push_str(&part(3, 6));
    }
    if rest.len() > 6 {
        out.push('-');
        out.push_str(&part(6, 8));
    }
    if rest.len() > 8 {
        out.push('-');
        out.push_str(&part(8, 10));
    }
    out
}

/// Country hint shown next to the phone field
pub fn phone_flag(phone: &str) -> &'static str {
    if phone.starts_with("+7") {
        "🇷🇺"
    } else {
        "📞"
    }
}
