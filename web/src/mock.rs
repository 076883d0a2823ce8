//! Sample records shown until the dashboards are wired to the project API.

use jiff::civil::{date, datetime};
use types::{Contractor, Message, Project, ProjectStatus};

fn skills(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "Kitchen Remodel".to_string(),
            description: "Full kitchen renovation: new cabinets, quartz countertops and an island."
                .to_string(),
            budget: 15000.0,
            status: ProjectStatus::Open,
            skills_required: skills(&["Carpentry", "Plumbing", "Electrical"]),
            posted_date: date(2026, 2, 1),
            proposals: 12,
        },
        Project {
            id: "2".to_string(),
            title: "Deck Construction".to_string(),
            description: "400 sq ft composite deck with built-in benches off the back door."
                .to_string(),
            budget: 8000.0,
            status: ProjectStatus::InProgress,
            skills_required: skills(&["Carpentry", "Outdoor"]),
            posted_date: date(2026, 1, 18),
            proposals: 7,
        },
        Project {
            id: "3".to_string(),
            title: "Bathroom Tile Refresh".to_string(),
            description: "Replace floor and shower tile in the guest bathroom.".to_string(),
            budget: 3200.0,
            status: ProjectStatus::Completed,
            skills_required: skills(&["Tiling"]),
            posted_date: date(2025, 11, 4),
            proposals: 5,
        },
    ]
}

pub fn contractors() -> Vec<Contractor> {
    vec![
        Contractor {
            id: "c1".to_string(),
            name: "Sarah Johnson".to_string(),
            skills: skills(&["Carpentry", "Cabinetry", "Kitchen Design"]),
            rating: 4.9,
            hourly_rate: 85.0,
            completed_projects: 47,
            bio: Some("Licensed general contractor, 12 years in kitchen and bath.".to_string()),
        },
        Contractor {
            id: "c2".to_string(),
            name: "Miguel Torres".to_string(),
            skills: skills(&["Plumbing", "Tiling"]),
            rating: 4.7,
            hourly_rate: 70.0,
            completed_projects: 63,
            bio: None,
        },
        Contractor {
            id: "c3".to_string(),
            name: "Priya Natarajan".to_string(),
            skills: skills(&["Electrical", "Smart Home"]),
            rating: 4.8,
            hourly_rate: 95.0,
            completed_projects: 31,
            bio: Some("Master electrician. Panel upgrades, EV chargers, lighting.".to_string()),
        },
        Contractor {
            id: "c4".to_string(),
            name: "Dan Okafor".to_string(),
            skills: skills(&["Outdoor", "Landscaping", "Carpentry"]),
            rating: 4.5,
            hourly_rate: 60.0,
            completed_projects: 22,
            bio: None,
        },
    ]
}

pub fn messages() -> Vec<Message> {
    vec![
        Message {
            id: "m1".to_string(),
            sender_name: "Sarah Johnson".to_string(),
            content: "Happy to walk through the kitchen over video this week. Thursday work?"
                .to_string(),
            timestamp: datetime(2026, 2, 2, 10, 30, 0, 0),
            read: false,
        },
        Message {
            id: "m2".to_string(),
            sender_name: "Dan Okafor".to_string(),
            content: "Deck framing is done, photos attached. Decking boards arrive Monday."
                .to_string(),
            timestamp: datetime(2026, 1, 29, 16, 5, 0, 0),
            read: true,
        },
    ]
}
