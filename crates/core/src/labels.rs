use std::fmt;
use std::str::FromStr;

/// Language of the field labels rendered into placemark descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelSet {
    #[default]
    Russian,
    English,
}

impl LabelSet {
    pub fn address(&self) -> &'static str {
        match self {
            LabelSet::Russian => "Адрес",
            LabelSet::English => "Address",
        }
    }

    pub fn object(&self) -> &'static str {
        match self {
            LabelSet::Russian => "Объект",
            LabelSet::English => "Object",
        }
    }

    pub fn topic(&self) -> &'static str {
        match self {
            LabelSet::Russian => "Проблема",
            LabelSet::English => "Problem",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            LabelSet::Russian => "Текст",
            LabelSet::English => "Text",
        }
    }

    /// Heading of the photo link list.
    pub fn photos(&self) -> &'static str {
        match self {
            LabelSet::Russian => "Фото",
            LabelSet::English => "Photos",
        }
    }

    /// Caption of a single photo link, 1-based.
    pub fn photo(&self, n: usize) -> String {
        match self {
            LabelSet::Russian => format!("Фото {n}"),
            LabelSet::English => format!("Photo {n}"),
        }
    }
}

impl FromStr for LabelSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" | "russian" => Ok(LabelSet::Russian),
            "en" | "english" => Ok(LabelSet::English),
            other => Err(format!("unknown label set '{other}' (expected 'ru' or 'en')")),
        }
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelSet::Russian => write!(f, "ru"),
            LabelSet::English => write!(f, "en"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_names() {
        assert_eq!("ru".parse::<LabelSet>().unwrap(), LabelSet::Russian);
        assert_eq!(" EN ".parse::<LabelSet>().unwrap(), LabelSet::English);
        assert_eq!("english".parse::<LabelSet>().unwrap(), LabelSet::English);
        assert!("de".parse::<LabelSet>().is_err());
    }

    #[test]
    fn photo_captions_are_numbered() {
        assert_eq!(LabelSet::English.photo(2), "Photo 2");
        assert_eq!(LabelSet::Russian.photo(1), "Фото 1");
    }
}
