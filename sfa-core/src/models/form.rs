use super::{ProductData, ProductRecord, Rating};

/// The text draft behind the create and edit forms.
///
/// Every field is kept exactly as typed so a failed submission can re-render
/// the form unchanged. Conversion into [`ProductData`] coerces the numeric
/// fields instead of rejecting them: empty or unparsable input becomes `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ProductForm {
    /// Display name
    pub title: String,
    /// Unit price, as typed
    pub price: String,
    /// Free-form description
    pub description: String,
    /// Category tag
    pub category: String,
    /// Image URL
    pub image: String,
    /// Review score, as typed
    pub rate: String,
    /// Review count, as typed
    pub count: String,
}

impl ProductForm {
    /// The draft a fresh create form starts from.
    pub fn blank() -> Self {
        Self {
            category: "men's clothing".to_owned(),
            rate: "0".to_owned(),
            count: "0".to_owned(),
            ..Default::default()
        }
    }

    /// Coerce the draft into a payload for the remote service.
    pub fn to_data(&self) -> ProductData {
        ProductData {
            title: self.title.clone(),
            price: coerce_decimal(&self.price),
            description: self.description.clone(),
            category: self.category.clone(),
            image: self.image.clone(),
            rating: Rating {
                rate: coerce_decimal(&self.rate),
                count: coerce_count(&self.count),
            },
        }
    }
}

impl From<&ProductData> for ProductForm {
    fn from(data: &ProductData) -> Self {
        Self {
            title: data.title.clone(),
            price: data.price.to_string(),
            description: data.description.clone(),
            category: data.category.clone(),
            image: data.image.clone(),
            rate: data.rating.rate.to_string(),
            count: data.rating.count.to_string(),
        }
    }
}

impl From<&ProductRecord> for ProductForm {
    fn from(record: &ProductRecord) -> Self {
        Self::from(&record.data)
    }
}

/// Length of the leading run of ASCII digits in `s`.
fn digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Length of an optional leading `+` or `-`.
fn sign(s: &str) -> usize {
    usize::from(s.starts_with(['+', '-']))
}

/// Parse the longest decimal prefix of `input`, falling back to `0`.
///
/// `"12.5"` and `"12.5kg"` both give `12.5`; `""`, `"abc"` and anything that
/// would not be finite give `0`.
pub fn coerce_decimal(input: &str) -> f64 {
    let s = input.trim();

    let mut end = sign(s);
    let integral = digits(&s[end..]);
    end += integral;

    let mut fractional = 0;
    if s[end..].starts_with('.') {
        fractional = digits(&s[end + 1..]);
        if integral > 0 || fractional > 0 {
            end += 1 + fractional;
        }
    }

    if integral == 0 && fractional == 0 {
        return 0.0;
    }

    // an exponent only counts when at least one digit follows it
    if s[end..].starts_with(['e', 'E']) {
        let at = end + 1;
        let exponent_sign = sign(&s[at..]);
        let exponent = digits(&s[at + exponent_sign..]);
        if exponent > 0 {
            end = at + exponent_sign + exponent;
        }
    }

    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Parse the leading integer of `input`, falling back to `0`.
///
/// Negative values and values that do not fit a `u32` also give `0`.
pub fn coerce_count(input: &str) -> u32 {
    let s = input.trim();
    let end = sign(s) + digits(&s[sign(s)..]);
    s[..end].parse::<i64>().ok().and_then(|n| u32::try_from(n).ok()).unwrap_or(0)
}
