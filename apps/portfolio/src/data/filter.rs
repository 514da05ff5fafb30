use crate::models::Project;

pub const ALL_CATEGORIES: &str = "All";

/// Project category selection. `All` shows every project; anything else
/// matches `Project::category` exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(c) => c,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => project.category == *c,
        }
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value.is_empty() || value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value)
        }
    }
}

/// Filter bar entries: "All" followed by each distinct category in the order
/// it first appears.
pub fn categories(projects: &[Project]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for project in projects {
        if !out.iter().any(|c| *c == project.category) {
            out.push(project.category.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectType;

    fn project(id: u64, category: &str) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            description: String::new(),
            image: String::new(),
            technologies: vec![],
            category: category.to_string(),
            project_type: ProjectType::PersonalProject,
            demo_url: None,
            github_url: None,
            featured: false,
            completed_at: "2024-01-01".to_string(),
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project(1, "Web"),
            project(2, "Mobile"),
            project(3, "Web"),
            project(4, "CLI"),
        ]
    }

    #[test]
    fn test_all_returns_full_set() {
        let projects = sample();
        let shown = CategoryFilter::All.apply(&projects);
        assert_eq!(shown.len(), projects.len());
    }

    #[test]
    fn test_category_returns_exact_subset_in_order() {
        let projects = sample();
        let shown = CategoryFilter::Category("Web".to_string()).apply(&projects);
        let ids: Vec<u64> = shown.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let projects = sample();
        assert!(CategoryFilter::Category("Games".to_string())
            .apply(&projects)
            .is_empty());
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let projects = sample();
        assert!(CategoryFilter::Category("web".to_string())
            .apply(&projects)
            .is_empty());
    }

    #[test]
    fn test_categories_are_unique_in_first_seen_order() {
        assert_eq!(categories(&sample()), vec!["All", "Web", "Mobile", "CLI"]);
    }

    #[test]
    fn test_categories_of_empty_collection() {
        assert_eq!(categories(&[]), vec!["All"]);
    }

    #[test]
    fn test_from_string() {
        assert_eq!(CategoryFilter::from("All".to_string()), CategoryFilter::All);
        assert_eq!(CategoryFilter::from(String::new()), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from("Web".to_string()),
            CategoryFilter::Category("Web".to_string())
        );
    }
}
