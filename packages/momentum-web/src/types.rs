//! Page content
//!
//! Copy for every section of the landing page. Widgets size themselves from
//! these tables (slide count, FAQ length, counter targets).

// ============================================================================
// Navigation
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Id of the `section` this link scrolls to
    pub section: &'static str,
    pub label: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.section)
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { section: "home", label: "Home" },
    NavLink { section: "about", label: "About" },
    NavLink { section: "services", label: "Services" },
    NavLink { section: "how-it-works", label: "How It Works" },
    NavLink { section: "testimonials", label: "Testimonials" },
    NavLink { section: "faq", label: "FAQ" },
];

// ============================================================================
// Stats
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub target: i64,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { target: 150, suffix: "+", label: "Students Helped" },
    Stat { target: 40, suffix: "+", label: "Volunteer Tutors" },
    Stat { target: 1200, suffix: "+", label: "Free Sessions" },
    Stat { target: 12, suffix: "", label: "Subjects Covered" },
];

// ============================================================================
// Services & steps
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    /// Lucide icon name
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Feature] = &[
    Feature {
        icon: "calculator",
        title: "Math",
        description: "From fractions to calculus, step-by-step help that builds real understanding.",
    },
    Feature {
        icon: "flask-conical",
        title: "Science",
        description: "Biology, chemistry and physics explained with examples that stick.",
    },
    Feature {
        icon: "book-open",
        title: "Reading & Writing",
        description: "Reading comprehension, essay structure and editing feedback.",
    },
    Feature {
        icon: "languages",
        title: "Languages",
        description: "Conversation practice and homework help in Spanish and French.",
    },
    Feature {
        icon: "graduation-cap",
        title: "Test Prep",
        description: "Study plans and practice for unit tests, finals and standardized exams.",
    },
    Feature {
        icon: "lightbulb",
        title: "Study Skills",
        description: "Note-taking, time management and habits that make schoolwork easier.",
    },
];

pub const STEPS: &[Feature] = &[
    Feature {
        icon: "clipboard-list",
        title: "Request a Tutor",
        description: "Tell us the student's grade, subjects and when they are free.",
    },
    Feature {
        icon: "users",
        title: "Get Matched",
        description: "We pair the student with a volunteer who knows the material.",
    },
    Feature {
        icon: "rocket",
        title: "Build Momentum",
        description: "Weekly free sessions, online or in person, at the student's pace.",
    },
];

// ============================================================================
// Testimonials
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

impl Testimonial {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect()
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "My daughter went from dreading algebra to asking for extra practice problems. Her tutor made math feel doable.",
        name: "Priya Sharma",
        role: "Parent of a 9th grader",
    },
    Testimonial {
        quote: "I raised my chemistry grade from a C to an A- in one semester. Having someone explain things patiently changed everything.",
        name: "Marcus Lee",
        role: "11th grade student",
    },
    Testimonial {
        quote: "Volunteering here is the best part of my week. Watching a student finally get it is incredibly rewarding.",
        name: "Elena Torres",
        role: "Volunteer tutor",
    },
    Testimonial {
        quote: "The sessions fit around our schedule and it's completely free. We couldn't have afforded this otherwise.",
        name: "David Okafor",
        role: "Parent of a 6th grader",
    },
];

// ============================================================================
// FAQ
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Is tutoring really free?",
        answer: "Yes. Every session is run by volunteers and there is no cost to students or families.",
    },
    FaqEntry {
        question: "Which grades do you support?",
        answer: "We work with students from elementary school through 12th grade.",
    },
    FaqEntry {
        question: "Are sessions online or in person?",
        answer: "Both. Most sessions happen over video call, and some tutors can meet at local libraries.",
    },
    FaqEntry {
        question: "How do I become a volunteer tutor?",
        answer: "Click \"Become a Tutor\" and fill out the short application. We'll follow up by email.",
    },
    FaqEntry {
        question: "How quickly will my student be matched?",
        answer: "Most students are matched with a tutor within one to two weeks of their request.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testimonial_initials() {
        assert_eq!(TESTIMONIALS[0].initials(), "PS");
    }

    #[test]
    fn test_nav_links_point_at_sections() {
        assert!(NAV_LINKS.iter().all(|link| link.href().starts_with('#')));
        assert_eq!(NAV_LINKS[5].href(), "#faq");
    }
}
