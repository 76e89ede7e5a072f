//! Navigation Definitions
//!
//! Section ids, labels and title formatting shared by the header and footer.

/// Section navigation entries as (label, element id) pairs.
pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("Home", "home"),
    ("About", "about"),
    ("Project", "project"),
    ("Experience", "experience"),
    ("Contact", "contact"),
];

/// Social profiles as (label, url) pairs.
pub const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("GitHub", "https://github.com/jefthah"),
    ("Instagram", "https://www.instagram.com/jefta_supraja/"),
    ("LinkedIn", "https://www.linkedin.com/in/jefta-supraja-925805286/"),
];

/// Shared CV document link.
pub const CV_URL: &str = "https://docs.google.com/document/d/1SG4NuIex-Gh5T0DrIS6pU-eSr12mA8r1/edit?usp=sharing&ouid=112833147381606617908&rtpof=true&sd=true";

/// Fixed header height compensated for when jumping to a section.
pub const HEADER_OFFSET: f64 = 80.0;

/// Capitalize a section id for display ("about" -> "About").
pub fn display_name(section: &str) -> String {
    let mut chars = section.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Document title for the section currently in view. Home keeps the
/// branded title, every other section gets the portfolio suffix.
pub fn page_title(section: &str) -> String {
    if section.eq_ignore_ascii_case("home") {
        "Jefta Supraja - Full Stack Dev".to_string()
    } else {
        format!("{} | Jefta Portfolio", display_name(section))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_capitalizes() {
        assert_eq!(display_name("about"), "About");
        assert_eq!(display_name("EXPERIENCE"), "Experience");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_page_title_home_is_branded() {
        assert_eq!(page_title("home"), "Jefta Supraja - Full Stack Dev");
        assert_eq!(page_title("Home"), "Jefta Supraja - Full Stack Dev");
    }

    #[test]
    fn test_page_title_sections_use_suffix() {
        assert_eq!(page_title("project"), "Project | Jefta Portfolio");
        assert_eq!(page_title("contact"), "Contact | Jefta Portfolio");
    }
}
