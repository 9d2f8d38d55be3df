//! Static page content and the small view state around it.
//!
//! The tables are plain configuration. The only behaviour here is the About tab switcher and the
//! project gallery (category filter, collapsed listing, detail dialog).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Who the page is about.
pub struct Profile {
    /// Display name.
    pub name: &'static str,
    /// One-line role description.
    pub tagline: &'static str,
    /// Short introduction under the tagline.
    pub intro: &'static str,
    /// Contact address.
    pub email: &'static str,
    /// City and country.
    pub location: &'static str,
    /// External profiles as `(label, url)`.
    pub links: &'static [(&'static str, &'static str)],
}

/// The page owner.
pub const PROFILE: Profile = Profile {
    name: "Sam Rivera",
    tagline: "Machine learning engineer & full-stack developer",
    intro: "I build computer vision pipelines, data-heavy web apps and the occasional mobile \
            client, and I care about shipping them end to end.",
    email: "sam@rivera.dev",
    location: "Lisbon, Portugal",
    links: &[
        ("GitHub", "https://github.com/samrivera"),
        ("LinkedIn", "https://www.linkedin.com/in/samrivera"),
    ],
};

// --- <About> ---

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Panel shown in the About section.
pub enum AboutTab {
    /// Skill groups.
    #[default]
    Skills,
    /// Work history.
    Experience,
    /// Degrees and courses.
    Education,
}

impl AboutTab {
    /// Tabs in display order.
    pub const ALL: [Self; 3] = [Self::Skills, Self::Experience, Self::Education];

    #[must_use]
    /// Tab heading.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Education => "Education",
        }
    }

    #[must_use]
    /// The tab to the right, wrapping around.
    pub const fn next(self) -> Self {
        match self {
            Self::Skills => Self::Experience,
            Self::Experience => Self::Education,
            Self::Education => Self::Skills,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A themed group of skills.
pub struct SkillGroup {
    /// Group heading.
    pub category: &'static str,
    /// Individual skills.
    pub items: &'static [&'static str],
}

/// Skills tab content.
pub const SKILLS: [SkillGroup; 5] = [
    SkillGroup {
        category: "Languages & Fundamentals",
        items: &["Python", "Rust", "TypeScript", "SQL", "Data structures"],
    },
    SkillGroup {
        category: "AI/ML & Data Science",
        items: &["PyTorch", "scikit-learn", "pandas", "Model evaluation"],
    },
    SkillGroup {
        category: "Computer Vision",
        items: &["OpenCV", "Pose estimation", "Object detection"],
    },
    SkillGroup {
        category: "Web Development",
        items: &["React", "Tailwind CSS", "Axum", "REST APIs"],
    },
    SkillGroup {
        category: "Mobile Development",
        items: &["Flutter", "React Native"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A position held.
pub struct Role {
    /// Job title.
    pub title: &'static str,
    /// Employer.
    pub organisation: &'static str,
    /// Dates, free-form.
    pub period: &'static str,
    /// What the work involved.
    pub summary: &'static str,
}

/// Experience tab content.
pub const EXPERIENCE: [Role; 2] = [
    Role {
        title: "Machine Learning Engineer",
        organisation: "Brightfield Analytics",
        period: "2023 - present",
        summary: "Built real-time video analysis services and their evaluation tooling.",
    },
    Role {
        title: "Software Engineering Intern",
        organisation: "Harbor Labs",
        period: "2022",
        summary: "Shipped dashboard features and data import pipelines.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A completed course of study.
pub struct Study {
    /// Degree or certificate.
    pub degree: &'static str,
    /// Awarding institution.
    pub institution: &'static str,
    /// Dates, free-form.
    pub period: &'static str,
}

/// Education tab content.
pub const EDUCATION: [Study; 2] = [
    Study {
        degree: "BSc Computer Science",
        institution: "University of Porto",
        period: "2019 - 2023",
    },
    Study {
        degree: "Deep Learning Specialisation",
        institution: "Online",
        period: "2022",
    },
];

// --- </About> ---

// --- <Projects> ---

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Project category used by the gallery filter.
pub enum Category {
    /// Machine learning and vision work.
    Ai,
    /// Phone apps.
    Mobile,
    /// Web apps and services.
    Web,
}

impl Category {
    #[must_use]
    /// Badge text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Mobile => "mobile",
            Self::Web => "web",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// One gallery entry.
pub struct Project {
    /// Card title.
    pub title: &'static str,
    /// Filter category.
    pub category: Category,
    /// Card blurb.
    pub summary: &'static str,
    /// Technologies used.
    pub tech: &'static [&'static str],
    /// Detail dialog body.
    pub description: &'static str,
    /// Detail dialog "challenges" list.
    pub challenges: &'static [&'static str],
    /// Detail dialog "outcomes" list.
    pub outcomes: &'static [&'static str],
}

/// Gallery content, in display order.
pub static PROJECTS: [Project; 6] = [
    Project {
        title: "Workout Form Coach",
        category: Category::Ai,
        summary: "Classifies exercise movements from video in real time.",
        tech: &["PyTorch", "OpenCV", "FastAPI"],
        description: "Pose estimation feeds a temporal classifier that labels each repetition \
                      and flags form problems as they happen.",
        challenges: &["Real-time inference", "Varied lighting", "Occluded joints"],
        outcomes: &["94% classification accuracy", "30 fps on a laptop GPU"],
    },
    Project {
        title: "Document Q&A",
        category: Category::Ai,
        summary: "Retrieval-augmented answers over internal documentation.",
        tech: &["Python", "pgvector", "React"],
        description: "Chunks and embeds documents, retrieves passages per question and cites \
                      sources in every answer.",
        challenges: &["Chunking long tables", "Keeping citations precise"],
        outcomes: &["Halved time-to-answer for support staff"],
    },
    Project {
        title: "Market Board",
        category: Category::Web,
        summary: "Live dashboard for small-business sales data.",
        tech: &["TypeScript", "React", "Axum"],
        description: "Streams order events into aggregated charts with per-store drill-down.",
        challenges: &["Incremental aggregation", "Responsive charts"],
        outcomes: &["Adopted by 12 stores"],
    },
    Project {
        title: "Trail Notes",
        category: Category::Mobile,
        summary: "Offline-first hiking journal with GPS traces.",
        tech: &["Flutter", "SQLite"],
        description: "Records tracks and notes without signal and syncs when back online.",
        challenges: &["Conflict-free sync", "Battery budget"],
        outcomes: &["4.7 rating on the store"],
    },
    Project {
        title: "Plant Doctor",
        category: Category::Ai,
        summary: "Leaf disease detection from a phone photo.",
        tech: &["TensorFlow Lite", "Kotlin"],
        description: "A quantised classifier runs on-device and suggests treatments.",
        challenges: &["Small training set", "On-device latency"],
        outcomes: &["Runs in under 200 ms on mid-range phones"],
    },
    Project {
        title: "Portfolio Site",
        category: Category::Web,
        summary: "This page: scroll-spy navigation, themes and a contact form.",
        tech: &["Rust", "ratatui"],
        description: "A single page with section tracking, keyboard shortcuts and a \
                      persisted theme preference.",
        challenges: &["Consistent active-section state across surfaces"],
        outcomes: &["Navigable entirely from the keyboard"],
    },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Gallery category filter.
pub enum ProjectFilter {
    /// Every project.
    #[default]
    All,
    /// One category only.
    Only(Category),
}

impl ProjectFilter {
    /// Filters in button order.
    pub const ALL: [Self; 4] = [
        Self::All,
        Self::Only(Category::Ai),
        Self::Only(Category::Mobile),
        Self::Only(Category::Web),
    ];

    #[must_use]
    /// Button text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Only(category) => category.label(),
        }
    }

    #[must_use]
    /// Whether `project` passes the filter.
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == category,
        }
    }

    #[must_use]
    /// The next filter button, wrapping around.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

/// Number of cards shown before "show more".
pub const COLLAPSED_COUNT: usize = 3;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Gallery view state: filter, expansion, cursor and open dialog.
pub struct Gallery {
    filter: ProjectFilter,
    show_all: bool,
    cursor: usize,
    open: Option<usize>,
}

impl Gallery {
    #[must_use]
    /// Unfiltered, collapsed gallery.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Active filter.
    pub fn filter(&self) -> ProjectFilter {
        self.filter
    }

    /// Applies a filter; the cursor returns to the first card.
    pub fn set_filter(&mut self, filter: ProjectFilter) {
        self.filter = filter;
        self.cursor = 0;
    }

    /// Moves to the next filter button.
    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    #[must_use]
    /// Projects passing the filter, in table order.
    pub fn filtered(&self) -> Vec<&'static Project> {
        PROJECTS
            .iter()
            .filter(|project| self.filter.matches(project))
            .collect()
    }

    #[must_use]
    /// Cards currently shown.
    pub fn visible(&self) -> Vec<&'static Project> {
        let filtered = self.filtered();
        if self.show_all {
            filtered
        } else {
            filtered.into_iter().take(COLLAPSED_COUNT).collect()
        }
    }

    #[must_use]
    /// Whether a "show more" control applies.
    pub fn has_more(&self) -> bool {
        !self.show_all && self.filtered().len() > COLLAPSED_COUNT
    }

    #[must_use]
    /// Whether every filtered card is shown.
    pub fn shows_all(&self) -> bool {
        self.show_all
    }

    /// Shows every filtered card.
    pub fn show_all(&mut self) {
        self.show_all = true;
    }

    #[must_use]
    /// Index of the highlighted card among the visible ones.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Highlights the next visible card, stopping at the last.
    pub fn select_next(&mut self) {
        let count = self.visible().len();
        if self.cursor + 1 < count {
            self.cursor += 1;
        }
    }

    /// Highlights the previous visible card, stopping at the first.
    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Opens the detail dialog for the highlighted card.
    pub fn open_selected(&mut self) {
        let Some(project) = self.visible().get(self.cursor).copied() else {
            return;
        };
        self.open = PROJECTS.iter().position(|p| p == project);
    }

    /// Closes the detail dialog.
    pub fn close_dialog(&mut self) {
        self.open = None;
    }

    #[must_use]
    /// Project shown in the detail dialog, if open.
    pub fn dialog(&self) -> Option<&'static Project> {
        self.open.and_then(|index| PROJECTS.get(index))
    }
}

// --- </Projects> ---

#[cfg(test)]
#[path = "tests/content.rs"]
mod tests;
