//! Static portfolio records.
//!
//! Everything here is compiled into the bundle; nothing is fetched at runtime.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: Level,
    pub percentage: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub category: &'static str,
    /// Class of the icon glyph, see `input.css`.
    pub icon: &'static str,
    pub items: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub location: Option<&'static str>,
    pub period: &'static str,
    pub description: &'static str,
    pub tasks: &'static [&'static str],
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub github: Option<&'static str>,
    pub featured: bool,
}

impl Project {
    pub fn uses(&self, tech: &str) -> bool {
        self.technologies.contains(&tech)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub title: &'static str,
    pub quote: &'static str,
    pub image: Option<&'static str>,
}

pub const PLACEHOLDER_AVATAR: &str = "/placeholder.svg?height=100&width=100";
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=400&width=600";

/// Titles cycled by the hero typewriter.
pub const HERO_TITLES: &[&str] = &[
    "Full-Stack Developer",
    "Backend Specialist",
    "API Engineer",
    "Data Automation Expert",
];

pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

impl NavItem {
    /// Id of the section the link scrolls to.
    pub fn section_id(&self) -> &'static str {
        self.href.trim_start_matches('#')
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        name: "About",
        href: "#about",
    },
    NavItem {
        name: "Skills",
        href: "#skills",
    },
    NavItem {
        name: "Experience",
        href: "#experience",
    },
    NavItem {
        name: "Projects",
        href: "#projects",
    },
    NavItem {
        name: "Testimonials",
        href: "#testimonials",
    },
    NavItem {
        name: "Contact",
        href: "#contact",
    },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        category: "Programming Languages",
        icon: "icon-code",
        items: &[
            Skill { name: "Python", level: Level::Advanced, percentage: 90 },
            Skill { name: "JavaScript", level: Level::Intermediate, percentage: 75 },
            Skill { name: "C++", level: Level::Intermediate, percentage: 70 },
            Skill { name: "JAVA", level: Level::Intermediate, percentage: 65 },
        ],
    },
    SkillCategory {
        category: "Web Development",
        icon: "icon-globe",
        items: &[
            Skill { name: "Django", level: Level::Advanced, percentage: 90 },
            Skill { name: "React", level: Level::Intermediate, percentage: 75 },
            Skill { name: "Next.js", level: Level::Intermediate, percentage: 70 },
            Skill { name: "Tailwind CSS", level: Level::Intermediate, percentage: 80 },
        ],
    },
    SkillCategory {
        category: "Database & DevOps",
        icon: "icon-database",
        items: &[
            Skill { name: "PostgreSQL", level: Level::Intermediate, percentage: 75 },
            Skill { name: "MySQL", level: Level::Intermediate, percentage: 70 },
            Skill { name: "MongoDB", level: Level::Intermediate, percentage: 65 },
            Skill { name: "AWS", level: Level::Intermediate, percentage: 60 },
            Skill { name: "Git", level: Level::Intermediate, percentage: 80 },
            Skill { name: "Docker", level: Level::Intermediate, percentage: 65 },
        ],
    },
    SkillCategory {
        category: "Data Science & Analytics",
        icon: "icon-chart",
        items: &[
            Skill { name: "SPSS", level: Level::Advanced, percentage: 85 },
            Skill { name: "STATA", level: Level::Intermediate, percentage: 75 },
            Skill { name: "EPI INFO", level: Level::Advanced, percentage: 85 },
            Skill { name: "Data Visualization", level: Level::Intermediate, percentage: 80 },
            Skill { name: "Machine Learning", level: Level::Intermediate, percentage: 65 },
        ],
    },
];

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        role: "Health Information Officer",
        company: "Greater Accra Regional Health Directorate, Ghana Health Service",
        location: Some("Accra, Ghana"),
        period: "2020 - Present",
        description: "Utilized DHIMS2 for comprehensive health data management, ensuring accuracy and efficiency in data analysis and interpretation.",
        tags: &["Healthcare", "Data Management", "Analysis"],
        tasks: &[
            "Trained healthcare professionals on effective data collection and analysis techniques.",
            "Developed customized data collection tools using Kobo Collect, ODK, and Google Forms.",
            "Conducted data analysis with statistical tools like Excel, SPSS, STATA, and EPI INFO.",
            "Ensured effective health data management through regular supervisory visits.",
            "Monitored and evaluated Key Performance Indicators (KPIs) at the district and facility level.",
        ],
    },
    Experience {
        role: "Field Research Officer",
        company: "University of Ghana Business School - Department of Finance",
        location: Some("Accra, Ghana"),
        period: "06/2024",
        description: "Engaged in pivotal research projects focusing on health system governance and the impacts of antimicrobial resistance.",
        tags: &["Research", "Healthcare", "Data Collection"],
        tasks: &[
            "Collaborated with pharmacies and over-the-counter (OTC) providers to gather insights on antimicrobial resistance.",
            "Utilized REDCAP offline survey app for accurate data collection in diverse environments.",
        ],
    },
    Experience {
        role: "HHFA Data Collector",
        company: "World Health Organization (in collaboration with GHS & MOH)",
        location: Some("Ghana"),
        period: "2022 - 2023",
        description: "Led data collection initiatives for the Harmonized Health Facility Assessment (HHFA) in Ghana, contributing to national health system evaluations.",
        tags: &["WHO", "Healthcare Assessment", "Data Collection"],
        tasks: &[
            "Assessed health system service availability and readiness across various facilities.",
            "Worked closely with WHO to ensure the successful execution of health assessments.",
            "Provided in-depth data analysis and interpretation to support evidence-based decision-making.",
        ],
    },
    Experience {
        role: "Clinical Data Abstractor",
        company: "AYA Collective (GHS)",
        location: Some("Accra, Ghana"),
        period: "08/2022 - 09/2022",
        description: "Participated in the baseline evaluation of the Making Every Baby Count Initiative (MEBCI 2.0), focusing on maternal and child health data.",
        tags: &["Clinical Data", "Maternal Health", "Child Health"],
        tasks: &[
            "Entered critical data from delivery, antenatal, and NICU registers at Ridge Hospital using Survey CTO.",
        ],
    },
    Experience {
        role: "Software Development Projects",
        company: "Various Projects",
        location: None,
        period: "Ongoing",
        description: "Developed innovative software solutions addressing various needs in health and e-commerce sectors.",
        tags: &["Software Development", "Healthcare", "E-commerce"],
        tasks: &[
            "Electronic Medical Records System: Addressed data management gaps in health facilities.",
            "E-commerce Web App: Developed CRUD operations for both user and admin roles.",
            "E-voting System: Enabled user voting and results monitoring with a dedicated admin panel.",
            "Blockchain Voting Platform: Created a secure voting environment with real-time monitoring capabilities.",
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "AI Chatbot SAAS Application",
        description: "A web application that allows users to create, train, and deploy custom chatbots with data-specific training and website integration for customer support.",
        link: "https://ai-chatbot-saas.vercel.app",
        github: Some("https://github.com/wisdomdzontoh/AI-chatbot-SAAS"),
        technologies: &["Django REST Framework", "Next.js", "OpenAI API", "Tailwind CSS"],
        image: "/assets/ai-chatbot.png",
        featured: true,
    },
    Project {
        title: "Data Visualizer Dashboard",
        description: "A dashboard application that enables users to create visualizations from uploaded CSV/Excel files or database connections with sharing and collaboration features.",
        link: "#",
        github: Some("https://github.com/wisdomdzontoh/data-visualizer"),
        technologies: &["Django REST Framework", "Next.js", "Chart.js", "shadcn/ui"],
        image: "/assets/data-visualizer.png",
        featured: true,
    },
    Project {
        title: "Invoice Generator System",
        description: "An automated invoice generation system that integrates with the sevDesk API to streamline invoice creation, processing, and organization.",
        link: "#",
        github: Some("https://github.com/wisdomdzontoh/invoice-generator"),
        technologies: &["Python", "sevDesk API", "Pandas", "FastAPI"],
        image: "/assets/invoice-generator.png",
        featured: true,
    },
    Project {
        title: "Campaign Automation Tool",
        description: "An end-to-end solution that automates lead campaign processes by cleaning data, integrating with ChatGPT for analysis, and connecting with CRM systems.",
        link: "#",
        github: Some("https://github.com/wisdomdzontoh/campaign-automation"),
        technologies: &["Python", "ChatGPT API", "Turso", "Pipedrive API"],
        image: "/assets/campaign-automation.png",
        featured: false,
    },
    Project {
        title: "Web Scraping & Lead Generation",
        description: "A sophisticated web scraping tool that extracts data from websites, scores leads using a BK_Tree algorithm, and enhances accuracy with AI integration.",
        link: "#",
        github: Some("https://github.com/wisdomdzontoh/web-scraping-lead-gen"),
        technologies: &["Python", "Selenium", "ChatGPT API", "Pandas"],
        image: "/assets/web-scraping.png",
        featured: false,
    },
    Project {
        title: "Expense Tracker Application",
        description: "A responsive web application for tracking personal and business expenses with interactive visualizations and trend analysis.",
        link: "#",
        github: Some("https://github.com/wisdomdzontoh/expense-tracker"),
        technologies: &["Django REST Framework", "Next.js", "Chart.js", "Tailwind CSS"],
        image: "/assets/expense-tracker.png",
        featured: false,
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Andreas Kahabka",
        title: "CTO CBAM-Estimator",
        quote: "I've managed several developers, and Wisdom stands out for his technical excellence and professional approach. He communicates clearly, meets deadlines consistently, and always considers the business impact of his technical decisions.",
        image: None,
    },
    Testimonial {
        name: "Jocelyn Laryea",
        title: "Regional Health Information Officer",
        quote: "Wisdom is an exceptional developer with a rare combination of technical expertise and domain knowledge. His ability to understand complex requirements and translate them into elegant solutions has been invaluable to our team.",
        image: None,
    },
    Testimonial {
        name: "Nana Yaw Osei Poku",
        title: "Medical Doctor",
        quote: "Working with Wisdom has been transformative for our projects. His technical skills are impressive, but what sets him apart is his ability to understand healthcare workflows and build systems that genuinely improve efficiency and patient care.",
        image: None,
    },
    Testimonial {
        name: "Bright Obeng",
        title: "Data Protection Engineer",
        quote: "Wisdom's code quality and architecture decisions are exemplary. He consistently delivers robust, maintainable solutions and has a talent for simplifying complex problems. His work on our data pipeline automation saved countless hours of manual work.",
        image: None,
    },
];

/// Projects matching the selected technology, `None` meaning "All".
///
/// Order always follows [`PROJECTS`].
pub fn filter_projects<'a>(projects: &'a [Project], tech: Option<&str>) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| tech.is_none_or(|t| p.uses(t)))
        .collect()
}

pub fn featured_projects(projects: &[Project]) -> Vec<&Project> {
    projects.iter().filter(|p| p.featured).collect()
}

/// Sorted, de-duplicated technology tags for the filter chips.
pub fn unique_technologies(projects: &[Project]) -> Vec<&'static str> {
    let mut techs = projects
        .iter()
        .flat_map(|p| p.technologies.iter().copied())
        .collect::<Vec<_>>();
    techs.sort_unstable();
    techs.dedup();
    techs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_by_tag_counts() {
        for tech in unique_technologies(PROJECTS) {
            let expected = PROJECTS.iter().filter(|p| p.technologies.contains(&tech)).count();
            assert_eq!(filter_projects(PROJECTS, Some(tech)).len(), expected, "{tech}");
        }
        assert_eq!(filter_projects(PROJECTS, Some("Python")).len(), 3);
        assert_eq!(filter_projects(PROJECTS, Some("Chart.js")).len(), 2);
        assert_eq!(filter_projects(PROJECTS, Some("Turso")).len(), 1);
    }

    #[test]
    fn test_all_restores_order() {
        let narrowed = filter_projects(PROJECTS, Some("Next.js"));
        assert_eq!(narrowed.len(), 3);

        let all = filter_projects(PROJECTS, None);
        assert_eq!(all.len(), PROJECTS.len());
        let titles = all.iter().map(|p| p.title).collect::<Vec<_>>();
        let original = PROJECTS.iter().map(|p| p.title).collect::<Vec<_>>();
        assert_eq!(titles, original);
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let python = filter_projects(PROJECTS, Some("Python"))
            .iter()
            .map(|p| p.title)
            .collect::<Vec<_>>();
        assert_eq!(
            python,
            vec![
                "Invoice Generator System",
                "Campaign Automation Tool",
                "Web Scraping & Lead Generation"
            ]
        );
    }

    #[test]
    fn test_unknown_tag_is_empty() {
        assert!(filter_projects(PROJECTS, Some("COBOL")).is_empty());
    }

    #[test]
    fn test_unique_technologies_sorted() {
        let techs = unique_technologies(PROJECTS);
        let mut sorted = techs.clone();
        sorted.sort();
        assert_eq!(techs, sorted);
        assert_eq!(techs.first(), Some(&"Chart.js"));
        assert_eq!(techs.iter().filter(|t| **t == "Python").count(), 1);
    }

    #[test]
    fn test_featured() {
        let featured = featured_projects(PROJECTS);
        assert_eq!(featured.len(), 3);
        assert!(featured.iter().all(|p| p.featured));
    }

    #[test]
    fn test_nav_targets() {
        let ids = NAV_ITEMS.iter().map(|n| n.section_id()).collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec!["about", "skills", "experience", "projects", "testimonials", "contact"]
        );
    }

    #[test]
    fn test_skill_percentages_in_range() {
        for cat in SKILL_CATEGORIES {
            for skill in cat.items {
                assert!(skill.percentage <= 100, "{}", skill.name);
            }
        }
    }
}
