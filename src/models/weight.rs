/// Visual variant of an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weight {
    Thin,
    Light,
    Regular,
    Bold,
    Fill,
    Duotone,
}

impl Weight {
    /// All weights in the order they are emitted.
    pub const ALL: [Weight; 6] = [
        Weight::Thin,
        Weight::Light,
        Weight::Regular,
        Weight::Bold,
        Weight::Fill,
        Weight::Duotone,
    ];

    /// Elm constructor name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Weight::Thin => "Thin",
            Weight::Light => "Light",
            Weight::Regular => "Regular",
            Weight::Bold => "Bold",
            Weight::Fill => "Fill",
            Weight::Duotone => "Duotone",
        }
    }

    /// Lowercase token used in folder and file names.
    pub fn slug(&self) -> &'static str {
        match self {
            Weight::Thin => "thin",
            Weight::Light => "light",
            Weight::Regular => "regular",
            Weight::Bold => "bold",
            Weight::Fill => "fill",
            Weight::Duotone => "duotone",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "thin" => Some(Weight::Thin),
            "light" => Some(Weight::Light),
            "regular" => Some(Weight::Regular),
            "bold" => Some(Weight::Bold),
            "fill" => Some(Weight::Fill),
            "duotone" => Some(Weight::Duotone),
            _ => None,
        }
    }

    /// Filename suffix for this weight; Regular files carry none.
    pub fn file_suffix(&self) -> Option<String> {
        match self {
            Weight::Regular => None,
            other => Some(format!("-{}", other.slug())),
        }
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Weight::parse("bold"), Some(Weight::Bold));
        assert_eq!(Weight::parse("Bold"), Some(Weight::Bold));
        assert_eq!(Weight::parse("DUOTONE"), Some(Weight::Duotone));
        assert_eq!(Weight::parse("heavy"), None);
    }

    #[test]
    fn test_all_is_canonical_order() {
        let names: Vec<_> = Weight::ALL.iter().map(|w| w.as_str()).collect();
        assert_eq!(
            names,
            ["Thin", "Light", "Regular", "Bold", "Fill", "Duotone"]
        );
        let mut sorted = Weight::ALL;
        sorted.sort();
        assert_eq!(sorted, Weight::ALL);
    }

    #[test]
    fn test_file_suffix() {
        assert_eq!(Weight::Regular.file_suffix(), None);
        assert_eq!(Weight::Fill.file_suffix().as_deref(), Some("-fill"));
    }
}
