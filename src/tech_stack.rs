//! Tech Stack Catalog
//!
//! Static category -> option tables for the multi-select dropdown and
//! badge rendering.

/// Tech option as (value, label)
pub type TechOption = (&'static str, &'static str);

pub const FRONTEND: &[TechOption] = &[
    ("react", "React"),
    ("nextjs", "Next.js"),
    ("vue", "Vue.js"),
    ("angular", "Angular"),
    ("svelte", "Svelte"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("sass", "Sass/SCSS"),
    ("tailwind", "Tailwind CSS"),
    ("bootstrap", "Bootstrap"),
];

pub const BACKEND: &[TechOption] = &[
    ("nodejs", "Node.js"),
    ("express", "Express.js"),
    ("django", "Django"),
    ("flask", "Flask"),
    ("laravel", "Laravel"),
    ("spring", "Spring Boot"),
    ("fastapi", "FastAPI"),
    ("rails", "Ruby on Rails"),
];

pub const LANGUAGES: &[TechOption] = &[
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
    ("python", "Python"),
    ("java", "Java"),
    ("csharp", "C#"),
    ("php", "PHP"),
    ("ruby", "Ruby"),
    ("go", "Go"),
    ("rust", "Rust"),
];

pub const DATABASES: &[TechOption] = &[
    ("mongodb", "MongoDB"),
    ("postgresql", "PostgreSQL"),
    ("mysql", "MySQL"),
    ("redis", "Redis"),
    ("firebase", "Firebase"),
    ("supabase", "Supabase"),
];

pub const TOOLS: &[TechOption] = &[
    ("git", "Git"),
    ("docker", "Docker"),
    ("kubernetes", "Kubernetes"),
    ("aws", "AWS"),
    ("vercel", "Vercel"),
    ("netlify", "Netlify"),
];

/// Category -> options, in display order
pub const TECH_BY_CATEGORY: &[(&str, &[TechOption])] = &[
    ("Frontend", FRONTEND),
    ("Backend", BACKEND),
    ("Language", LANGUAGES),
    ("Database", DATABASES),
    ("Tools", TOOLS),
];

/// Find the (label, category) pair for a stored value.
pub fn find_tech(value: &str) -> Option<(&'static str, &'static str)> {
    TECH_BY_CATEGORY.iter().find_map(|(category, options)| {
        options
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, label)| (*label, *category))
    })
}

/// Badge classes per category; unknown categories take the Tools gray.
pub fn badge_class(category: &str) -> &'static str {
    match category {
        "Frontend" => "bg-blue-100 text-blue-700",
        "Backend" => "bg-green-100 text-green-700",
        "Language" => "bg-purple-100 text-purple-700",
        "Database" => "bg-orange-100 text-orange-700",
        _ => "bg-gray-100 text-gray-700",
    }
}

/// Options whose label or category contains the query, case-insensitive,
/// grouped per category in catalog order. Categories with no match are
/// omitted.
pub fn filter_grouped(query: &str) -> Vec<(&'static str, Vec<TechOption>)> {
    let needle = query.to_lowercase();
    TECH_BY_CATEGORY
        .iter()
        .filter_map(|(category, options)| {
            let hits: Vec<TechOption> = options
                .iter()
                .filter(|(_, label)| {
                    needle.is_empty()
                        || label.to_lowercase().contains(&needle)
                        || category.to_lowercase().contains(&needle)
                })
                .copied()
                .collect();
            if hits.is_empty() {
                None
            } else {
                Some((*category, hits))
            }
        })
        .collect()
}

/// Labels of the selected values, joined for the dropdown summary line.
pub fn selected_labels(values: &[String]) -> String {
    values
        .iter()
        .filter_map(|v| find_tech(v).map(|(label, _)| label))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_tech() {
        assert_eq!(find_tech("rust"), Some(("Rust", "Language")));
        assert_eq!(find_tech("mongodb"), Some(("MongoDB", "Database")));
        assert_eq!(find_tech("cobol"), None);
    }

    #[test]
    fn test_badge_class_by_category() {
        assert_eq!(badge_class("Frontend"), "bg-blue-100 text-blue-700");
        assert_eq!(badge_class("Database"), "bg-orange-100 text-orange-700");
        assert_eq!(badge_class("Anything"), "bg-gray-100 text-gray-700");
    }

    #[test]
    fn test_filter_matches_label() {
        let groups = filter_grouped("next");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "Frontend");
        assert_eq!(groups[0].1, vec![("nextjs", "Next.js")]);
    }

    #[test]
    fn test_filter_matches_category() {
        let groups = filter_grouped("database");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].1.len(), DATABASES.len());
    }

    #[test]
    fn test_filter_empty_query_returns_all() {
        let groups = filter_grouped("");
        assert_eq!(groups.len(), TECH_BY_CATEGORY.len());
    }

    #[test]
    fn test_selected_labels_skips_unknown() {
        let values = vec![
            "react".to_string(),
            "mystery".to_string(),
            "go".to_string(),
        ];
        assert_eq!(selected_labels(&values), "React, Go");
    }
}
