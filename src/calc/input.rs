//! Numeric coercion for free-form calculator inputs

use std::borrow::Cow;

/// A value that may or may not be readable as a real number.
///
/// Text is trimmed and parsed as a float literal, with single `_` separators
/// allowed between digits (`"10_000"`). `None` never coerces.
pub trait NumericInput {
    fn to_real(&self) -> Option<f64>;
}

/// Drop each `_` that sits between two ASCII digits. Any other underscore is
/// left in place so the parse rejects it.
fn strip_digit_separators(text: &str) -> Cow<'_, str> {
    if !text.contains('_') {
        return Cow::Borrowed(text);
    }
    let bytes = text.as_bytes();
    let kept = text
        .char_indices()
        .filter(|&(i, c)| {
            let between_digits = i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
            !(c == '_' && between_digits)
        })
        .map(|(_, c)| c)
        .collect();
    Cow::Owned(kept)
}

impl NumericInput for str {
    fn to_real(&self) -> Option<f64> {
        strip_digit_separators(self.trim()).parse::<f64>().ok()
    }
}

impl NumericInput for String {
    fn to_real(&self) -> Option<f64> {
        self.as_str().to_real()
    }
}

impl NumericInput for f64 {
    fn to_real(&self) -> Option<f64> {
        Some(*self)
    }
}

impl NumericInput for f32 {
    fn to_real(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

macro_rules! integer_input {
    ($($t:ty),*) => {
        $(
            impl NumericInput for $t {
                fn to_real(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

integer_input!(i32, i64, u32, u64, usize);

impl<T: NumericInput + ?Sized> NumericInput for &T {
    fn to_real(&self) -> Option<f64> {
        (**self).to_real()
    }
}

impl<T: NumericInput> NumericInput for Option<T> {
    fn to_real(&self) -> Option<f64> {
        self.as_ref().and_then(NumericInput::to_real)
    }
}
