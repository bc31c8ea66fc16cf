//! Russian-locale string ordering for material names.
//!
//! Approximates CLDR `ru` collation in three levels. Primary: spaces, then
//! punctuation and symbols, then digits, then Cyrillic, then Latin, with
//! letters case-folded and stripped of diacritics (`ё` is `е` here).
//! Secondary: unaccented before accented. Tertiary: lowercase before
//! uppercase. Remaining ties fall back to code point order.

use std::cmp::Ordering;

/// Script group, in collation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Group {
    Space,
    Symbol,
    Digit,
    Cyrillic,
    Latin,
    Other,
}

/// ASCII punctuation and symbols in CLDR root order
const SYMBOL_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Base letter of an accented Latin character, lowercased
fn latin_base(c: char) -> Option<char> {
    let lower = c.to_lowercase().next().unwrap_or(c);
    let base = match lower {
        'a'..='z' => lower,
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' => 'd',
        'è'..='ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ğ' => 'g',
        'ì'..='ï' | 'ī' | 'į' | 'ı' => 'i',
        'ł' | 'ľ' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ß' | 'ś' | 'š' | 'ş' => 's',
        'ť' => 't',
        'ù'..='ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => return None,
    };
    Some(base)
}

/// Collation elements of one character
#[derive(Debug, Clone, Copy)]
struct Element {
    group: Group,
    weight: u32,
    accented: bool,
}

fn element(c: char) -> Element {
    let (group, weight, accented) = match c {
        '0'..='9' => (Group::Digit, c as u32, false),
        'а'..='я' | 'А'..='Я' => {
            let lower = c.to_lowercase().next().unwrap_or(c);
            (Group::Cyrillic, lower as u32, false)
        }
        'ё' | 'Ё' => (Group::Cyrillic, 'е' as u32, true),
        c if c.is_whitespace() => (Group::Space, c as u32, false),
        c if c.is_alphabetic() => match latin_base(c) {
            Some(base) => (Group::Latin, base as u32, !c.is_ascii()),
            None => (Group::Other, c as u32, false),
        },
        c if c.is_numeric() => (Group::Digit, c as u32, false),
        c => {
            let weight = SYMBOL_ORDER
                .find(c)
                .map(|idx| idx as u32)
                .unwrap_or(SYMBOL_ORDER.len() as u32 + c as u32);
            (Group::Symbol, weight, false)
        }
    };
    Element {
        group,
        weight,
        accented,
    }
}

/// Compare two strings the way a Russian-locale `localeCompare` would
pub fn compare_ru(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .map(|c| {
            let e = element(c);
            (e.group, e.weight)
        })
        .cmp(b.chars().map(|c| {
            let e = element(c);
            (e.group, e.weight)
        }));
    if primary != Ordering::Equal {
        return primary;
    }

    // Primary-equal strings have the same length
    let secondary = a
        .chars()
        .map(|c| element(c).accented)
        .cmp(b.chars().map(|c| element(c).accented));
    if secondary != Ordering::Equal {
        return secondary;
    }

    // lowercase before uppercase at the first differing position
    let tertiary = a
        .chars()
        .zip(b.chars())
        .find(|(x, y)| x != y)
        .map(|(x, y)| y.is_lowercase().cmp(&x.is_lowercase()))
        .unwrap_or(Ordering::Equal);

    tertiary.then_with(|| a.cmp(b))
}
