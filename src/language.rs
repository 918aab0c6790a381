pub const LANGUAGE_STORAGE_KEY: &str = "portfolio-language";

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Fr,
    Ar,
}

impl Lang {
    pub const ALL: [Self; 3] = [Self::En, Self::Fr, Self::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Ar => "ar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Fr => "FR",
            Self::Ar => "AR",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
            Self::Ar => "العربية",
        }
    }

    pub fn from_code(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    // Primary subtag of a BCP 47 locale; anything unrecognized is English.
    pub fn from_locale(locale: &str) -> Self {
        match locale.split('-').next() {
            Some("fr") => Self::Fr,
            Some("ar") => Self::Ar,
            _ => Self::En,
        }
    }

    pub fn suggests_translation(self) -> bool {
        !matches!(self, Self::En)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_subtag_selects_the_language() {
        assert!(matches!(Lang::from_locale("fr-FR"), Lang::Fr));
        assert!(matches!(Lang::from_locale("ar"), Lang::Ar));
        assert!(matches!(Lang::from_locale("en-US"), Lang::En));
    }

    #[test]
    fn unknown_locales_fall_back_to_english() {
        assert!(matches!(Lang::from_locale("de-DE"), Lang::En));
        assert!(matches!(Lang::from_locale(""), Lang::En));
        assert!(matches!(Lang::from_locale("FR"), Lang::En));
    }

    #[test]
    fn only_french_and_arabic_suggest_translation() {
        assert!(Lang::Fr.suggests_translation());
        assert!(Lang::Ar.suggests_translation());
        assert!(!Lang::En.suggests_translation());
    }

    #[test]
    fn persisted_codes_round_trip() {
        for lang in Lang::ALL {
            assert!(matches!(Lang::from_code(lang.code()), Some(found) if found == lang));
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert!(Lang::from_code("de").is_none());
        assert!(Lang::from_code("EN").is_none());
        assert!(Lang::from_code("").is_none());
    }
}
