//! Content the site ships with on first boot.

use super::{Achievement, BlogPost, CohortYear, Event, TeamMember};

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Nullam auctor, nisl eget ultricies lacinia, nisl nisl aliquam nisl, eget ultricies nisl nisl eget nisl. Nullam auctor, nisl eget ultricies lacinia, nisl nisl aliquam nisl, eget ultricies nisl nisl eget nisl.";

fn member(id: &str, name: &str, role: &str, year: CohortYear, image: &str, linkedin: &str) -> TeamMember {
    TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        year,
        image: image.to_string(),
        linkedin: linkedin.to_string(),
    }
}

pub fn team_members() -> Vec<TeamMember> {
    vec![
        member("1", "Aditya Sharma", "President", CohortYear::Y2024To25,
            "https://randomuser.me/api/portraits/men/1.jpg", "https://linkedin.com/in/adityasharma"),
        member("2", "Priya Patel", "Vice President", CohortYear::Y2024To25,
            "https://randomuser.me/api/portraits/women/1.jpg", "https://linkedin.com/in/priyapatel"),
        member("3", "Rohit Verma", "Marketing Lead", CohortYear::Y2024To25,
            "https://randomuser.me/api/portraits/men/2.jpg", "https://linkedin.com/in/rohitverma"),
        member("4", "Ananya Singh", "Secretary", CohortYear::Y2025To26,
            "https://randomuser.me/api/portraits/women/2.jpg", "https://linkedin.com/in/ananyasingh"),
        member("5", "Vikram Mehta", "Technical Lead", CohortYear::Y2025To26,
            "https://randomuser.me/api/portraits/men/3.jpg", "https://linkedin.com/in/vikrammehta"),
    ]
}

pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            title: "Startup Weekend".to_string(),
            description: "A 54-hour event where participants pitch ideas, form teams, and build startups.".to_string(),
            date: "2023-11-15".to_string(),
            location: "Wadia College Campus".to_string(),
            image: "https://images.unsplash.com/photo-1540317580384-e5d43867caa6".to_string(),
            is_past: true,
            registrations: Some(120),
        },
        Event {
            id: "2".to_string(),
            title: "Entrepreneurship Summit".to_string(),
            description: "Annual summit featuring keynote speakers, panel discussions, and networking opportunities.".to_string(),
            date: "2023-12-10".to_string(),
            location: "Wadia College Auditorium".to_string(),
            image: "https://images.unsplash.com/photo-1475721027785-f74eccf877e2".to_string(),
            is_past: true,
            registrations: Some(250),
        },
        Event {
            id: "3".to_string(),
            title: "Pitch Perfect Competition".to_string(),
            description: "Showcase your startup idea and win funding and mentorship opportunities.".to_string(),
            date: "2024-06-20".to_string(),
            location: "Wadia College Conference Hall".to_string(),
            image: "https://images.unsplash.com/photo-1551818255-e6e10975bc17".to_string(),
            is_past: false,
            registrations: None,
        },
        Event {
            id: "4".to_string(),
            title: "Innovation Workshop Series".to_string(),
            description: "Weekly workshops focused on different aspects of building successful startups.".to_string(),
            date: "2024-07-05".to_string(),
            location: "Online (Zoom)".to_string(),
            image: "https://images.unsplash.com/photo-1522071820081-009f0129c71c".to_string(),
            is_past: false,
            registrations: None,
        },
    ]
}

pub fn blog_posts() -> Vec<BlogPost> {
    let post = |id: &str, title: &str, excerpt: &str, author: &str, date: &str, category: &str, image: &str| BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        content: LOREM.to_string(),
        excerpt: excerpt.to_string(),
        author: author.to_string(),
        date: date.to_string(),
        category: category.to_string(),
        image: image.to_string(),
    };

    vec![
        post("1", "How to Validate Your Startup Idea",
            "Learn effective strategies to test your business concept before investing significant resources.",
            "Aditya Sharma", "2023-12-01", "Startup",
            "https://images.unsplash.com/photo-1523240795612-9a054b0db644"),
        post("2", "Funding Options for Student Entrepreneurs",
            "Explore various funding avenues available specifically for college students with entrepreneurial ambitions.",
            "Priya Patel", "2024-01-15", "Funding",
            "https://images.unsplash.com/photo-1579621970563-ebec7560ff3e"),
        post("3", "Building a Strong Team for Your Startup",
            "Tips for finding and recruiting the right team members to help grow your startup.",
            "Rohit Verma", "2024-02-28", "Team Building",
            "https://images.unsplash.com/photo-1542744173-8e7e53415bb0"),
    ]
}

pub fn achievements() -> Vec<Achievement> {
    let achievement = |id: &str, title: &str, description: &str, year: &str, image: &str| Achievement {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        year: year.to_string(),
        image: Some(image.to_string()),
    };

    vec![
        achievement("1", "Best College E-Cell Award",
            "Recognized as the Best Entrepreneurship Cell among engineering colleges in the region.",
            "2023", "https://images.unsplash.com/photo-1567427017947-545c5f8d16ad"),
        achievement("2", "Successful Incubation of 5 Startups",
            "Helped incubate and launch 5 successful student startups that secured external funding.",
            "2022", "https://images.unsplash.com/photo-1559136555-9303baea8ebd"),
        achievement("3", "National Entrepreneurship Challenge - Finalists",
            "Reached the finals of the prestigious National Entrepreneurship Challenge.",
            "2022", "https://images.unsplash.com/photo-1546531130-0f3dd5de266b"),
    ]
}
