//! Projects parsing.

use crate::models::Project;

/// A colon line starts a new project: the text before the colon is the
/// name, the text after seeds the description. Colon-free lines extend the
/// current project's description, space-joined. A section with no colon
/// anywhere yields no projects.
pub fn parse_projects(text: &str) -> Vec<Project> {
    let mut projects = Vec::new();
    let mut current: Option<(String, Vec<String>)> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some((name, rest)) = line.split_once(':') {
            if let Some(finished) = current.take() {
                projects.push(finish(finished));
            }
            let rest = rest.trim();
            let description = if rest.is_empty() {
                Vec::new()
            } else {
                vec![rest.to_string()]
            };
            current = Some((name.trim().to_string(), description));
        } else if let Some((_, description)) = current.as_mut() {
            description.push(line.to_string());
        }
    }

    if let Some(finished) = current {
        projects.push(finish(finished));
    }

    projects
}

fn finish((name, description): (String, Vec<String>)) -> Project {
    Project {
        name,
        description: description.join(" ").trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colon_line_starts_a_project() {
        let projects = parse_projects("Chat Server: async message broker in Rust");
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Chat Server");
        assert_eq!(projects[0].description, "async message broker in Rust");
    }

    #[test]
    fn test_continuation_lines_are_space_joined() {
        let body = "Chat Server: async broker\nhandles 10k connections\nwith backpressure";
        let projects = parse_projects(body);
        assert_eq!(
            projects[0].description,
            "async broker handles 10k connections with backpressure"
        );
    }

    #[test]
    fn test_multiple_projects() {
        let body = "One: first\ndetail\nTwo: second";
        let projects = parse_projects(body);
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].description, "first detail");
        assert_eq!(projects[1].name, "Two");
    }

    #[test]
    fn test_colon_free_section_yields_nothing() {
        assert!(parse_projects("built some things\nand more things").is_empty());
    }

    #[test]
    fn test_lines_before_the_first_colon_are_ignored() {
        let projects = parse_projects("stray line\nOne: first");
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "One");
    }

    #[test]
    fn test_colon_with_empty_remainder() {
        let projects = parse_projects("One:\ndescription on the next line");
        assert_eq!(projects[0].description, "description on the next line");
    }
}
