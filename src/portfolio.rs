use std::sync::LazyLock;

/// Sentinel filter label that shows every project.
pub const ALL_CATEGORY: &str = "All";

pub const OWNER: &str = "Kiran Kumar Reddy Gade";
pub const TAGLINE: &str =
    "QA Automation Engineer | 7+ Years Experience | Master's in Data Science (UK)";
pub const RESUME_PATH: &str = "/resume/Kiran_Updated_Resume.pdf";
pub const HERO_WORDS: [&str; 3] = ["Kiran Kumar Reddy Gade", "QA Engineer", "Data Enthusiast"];

pub const CONTACT_EMAIL: &str = "gkirankumar595@gmail.com";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/kiran-kumar-reddy-gade-6b7267329/";
pub const LINKEDIN_LABEL: &str = "linkedin.com/in/kiran-kumar-reddy-gade";
pub const GITHUB_URL: &str = "https://github.com/kirankumargade";
pub const GITHUB_LABEL: &str = "github.com/kirankumargade";

/// Iconography used across the page. Each variant resolves to a fixed icon
/// font class, so the view never builds icon names dynamically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Java,
    Python,
    Bug,
    Postman,
    Jenkins,
    Aws,
    Airflow,
    Database,
    MySql,
    Sqlite,
    JavaScript,
    Cogs,
    Envelope,
    LinkedIn,
    GitHub,
    Comments,
    Moon,
    Sun,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Icon::Java => "devicon-java-plain",
            Icon::Python => "devicon-python-plain",
            Icon::Bug => "extra-bug",
            Icon::Postman => "devicon-postman-plain",
            Icon::Jenkins => "devicon-jenkins-line",
            Icon::Aws => "devicon-amazonwebservices-plain-wordmark",
            Icon::Airflow => "devicon-apacheairflow-plain",
            Icon::Database => "extra-database",
            Icon::MySql => "devicon-mysql-plain",
            Icon::Sqlite => "devicon-sqlite-plain",
            Icon::JavaScript => "devicon-javascript-plain",
            Icon::Cogs => "extra-cogs",
            Icon::Envelope => "extra-email",
            Icon::LinkedIn => "devicon-linkedin-plain",
            Icon::GitHub => "devicon-github-plain",
            Icon::Comments => "extra-comments",
            Icon::Moon => "extra-moon",
            Icon::Sun => "extra-sun",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    /// Text color class used for the card title.
    pub accent: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub icon: Icon,
    pub name: &'static str,
}

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "Selenium Framework",
        description:
            "Built a robust automation framework using Selenium WebDriver, TestNG, and Maven.",
        category: "QA",
        accent: "text-indigo-400",
    },
    Project {
        title: "API Test Suite",
        description:
            "Automated REST API tests using Postman and Karate for banking and healthcare apps.",
        category: "QA",
        accent: "text-pink-400",
    },
    Project {
        title: "Data Pipeline with Airflow",
        description: "Created an ETL pipeline using Apache Airflow and Python for data transformation and loading.",
        category: "Data",
        accent: "text-green-400",
    },
];

pub static SKILLS: [Skill; 12] = [
    Skill { icon: Icon::Java, name: "Java" },
    Skill { icon: Icon::Python, name: "Python" },
    Skill { icon: Icon::Bug, name: "Selenium" },
    Skill { icon: Icon::Postman, name: "Postman" },
    Skill { icon: Icon::Jenkins, name: "Jenkins" },
    Skill { icon: Icon::Aws, name: "AWS" },
    Skill { icon: Icon::Airflow, name: "Airflow" },
    Skill { icon: Icon::Database, name: "SQL" },
    Skill { icon: Icon::MySql, name: "MySQL" },
    Skill { icon: Icon::Sqlite, name: "SQLite" },
    Skill { icon: Icon::JavaScript, name: "JavaScript" },
    Skill { icon: Icon::Cogs, name: "Automation" },
];

/// Filter labels: the "All" sentinel followed by each distinct project
/// category in order of first appearance.
pub static CATEGORIES: LazyLock<Vec<&'static str>> = LazyLock::new(|| categories(&PROJECTS));

pub fn categories(projects: &[Project]) -> Vec<&'static str> {
    let mut cats = vec![ALL_CATEGORY];
    for p in projects {
        if !cats.contains(&p.category) {
            cats.push(p.category);
        }
    }
    cats
}

/// Projects visible under `category`, in their original relative order.
pub fn filter_projects<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| category == ALL_CATEGORY || p.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(projects: &[&Project]) -> Vec<&'static str> {
        projects.iter().map(|p| p.title).collect()
    }

    #[test]
    fn test_categories_are_derived_once_in_order() {
        assert_eq!(*CATEGORIES, vec!["All", "QA", "Data"]);
    }

    #[test]
    fn test_filter_all_returns_full_list() {
        let visible = filter_projects(&PROJECTS, ALL_CATEGORY);
        assert_eq!(visible.len(), PROJECTS.len());
        for (shown, original) in visible.iter().zip(PROJECTS.iter()) {
            assert_eq!(*shown, original);
        }
    }

    #[test]
    fn test_filter_qa() {
        let visible = filter_projects(&PROJECTS, "QA");
        assert_eq!(titles(&visible), vec!["Selenium Framework", "API Test Suite"]);
    }

    #[test]
    fn test_filter_every_category_matches_exactly() {
        for cat in CATEGORIES.iter().filter(|c| **c != ALL_CATEGORY) {
            let visible = filter_projects(&PROJECTS, cat);
            let expected = PROJECTS
                .iter()
                .filter(|p| p.category == *cat)
                .collect::<Vec<_>>();
            assert_eq!(visible, expected);
            assert!(visible.iter().all(|p| p.category == *cat));
        }
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        assert!(filter_projects(&PROJECTS, "qa").is_empty());
        assert!(filter_projects(&PROJECTS, "Design").is_empty());
    }

    #[test]
    fn test_categories_dedup_preserves_first_appearance() {
        let projects = [
            Project {
                category: "Data",
                ..PROJECTS[0]
            },
            PROJECTS[0],
            Project {
                category: "Data",
                ..PROJECTS[1]
            },
        ];
        assert_eq!(categories(&projects), vec!["All", "Data", "QA"]);
        assert_eq!(categories(&[]), vec!["All"]);
    }

    #[test]
    fn test_skill_icons_resolve() {
        assert_eq!(SKILLS.len(), 12);
        assert_eq!(SKILLS[2].name, "Selenium");
        assert_eq!(SKILLS[2].icon.class(), "extra-bug");
        assert!(SKILLS.iter().all(|s| !s.icon.class().is_empty()));
    }
}
