pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const DARK_MODE_STYLE_ID: &str = "dark-mode-styles";

pub const DARK_MODE_CSS: &str = "
body.dark-mode {
    background: #1a1a1a;
    color: #fff;
}
body.dark-mode .card,
body.dark-mode .project-card,
body.dark-mode .testimonial-card,
body.dark-mode .contact-form {
    background: #2d2d2d;
    color: #fff;
}
body.dark-mode .form-group input,
body.dark-mode .form-group textarea {
    background: #2d2d2d;
    color: #fff;
    border-color: #444;
}
";

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = match self.toggled() {
            Self::Light => "light",
            Self::Dark => "dark",
        };
        format!("Switch to {next} mode")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "◐",
            Self::Dark => "◑",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_the_theme() {
        assert!(matches!(Theme::Light.toggled(), Theme::Dark));
        assert!(matches!(Theme::Light.toggled().toggled(), Theme::Light));
    }

    #[test]
    fn only_dark_reads_as_pressed() {
        assert!(Theme::Dark.pressed());
        assert!(!Theme::Light.pressed());
    }

    #[test]
    fn injected_rules_are_scoped_to_the_body_class() {
        assert!(DARK_MODE_CSS
            .lines()
            .filter(|line| line.contains('{') || line.contains(','))
            .all(|line| line.trim().is_empty() || line.contains("body.dark-mode")));
    }
}
