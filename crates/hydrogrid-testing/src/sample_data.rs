//! Deterministic sample catalog.

use hydrogrid_model::{Project, ProjectStatus};

const CITIES: [&str; 5] = ["Rishikesh", "Haridwar", "Agra", "Varanasi", "Mathura"];

/// Generates `count` projects with stable ids `1..=count`.
///
/// Even indices are sewage-treatment projects whose names contain "STP"
/// (useful for highlight assertions); every third project is completed.
pub fn sample_projects(count: usize) -> Vec<Project> {
    (0..count)
        .map(|i| {
            let city = CITIES[i % CITIES.len()];
            let phase = i / CITIES.len() + 1;
            let (name, category) = if i % 2 == 0 {
                (format!("{city} STP Phase {phase}"), "Sewage Treatment")
            } else {
                (format!("{city} Water Supply Phase {phase}"), "Water Supply")
            };
            Project {
                id: i as u64 + 1,
                name,
                location: city.to_owned(),
                capacity: format!("{} MLD", 10 + (i % 40)),
                category: category.to_owned(),
                year: 2010 + (i % 14) as i32,
                value: format!("INR {} Cr", 40 + (i % 200)),
                status: if i % 3 == 0 {
                    ProjectStatus::Completed
                } else {
                    ProjectStatus::Ongoing
                },
                description: format!("Design, build and operate contract for {city}."),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_stable_and_one_based() {
        let projects = sample_projects(10);
        let ids: Vec<u64> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u64>>());
    }

    #[test]
    fn generator_is_deterministic() {
        assert_eq!(sample_projects(25), sample_projects(25));
    }
}
