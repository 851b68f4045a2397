/// Style tokens for one color scheme. Every themed region of the page pulls
/// its classes from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeBundle {
    pub bg: &'static str,
    pub section: &'static str,
    pub text: &'static str,
    pub subtext: &'static str,
    pub border: &'static str,
    pub nav_text: &'static str,
    pub project_card: &'static str,
    pub button: &'static str,
    pub link_hover: &'static str,
}

static LIGHT: ThemeBundle = ThemeBundle {
    bg: "bg-white",
    section: "bg-gray-100",
    text: "text-black",
    subtext: "text-gray-700",
    border: "border-gray-300",
    nav_text: "text-gray-600",
    project_card: "bg-white border border-gray-200",
    button: "bg-green-500 text-white hover:bg-green-600",
    link_hover: "hover:text-green-600",
};

static DARK: ThemeBundle = ThemeBundle {
    bg: "bg-[#0f0f10]",
    section: "bg-[#1a1a1d]",
    text: "text-white",
    subtext: "text-gray-300",
    border: "border-gray-800",
    nav_text: "text-gray-400",
    project_card: "bg-[#262626]",
    button: "bg-green-400 text-black hover:bg-green-500",
    link_hover: "hover:text-green-400",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn bundle(self) -> &'static ThemeBundle {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn test_bundles_differ() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.bundle().bg, "bg-white");
        assert_eq!(Theme::Dark.bundle().bg, "bg-[#0f0f10]");
        assert_ne!(Theme::Light.bundle(), Theme::Dark.bundle());
    }
}
