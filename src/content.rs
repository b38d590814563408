use thiserror::Error;

pub const SITE_TITLE: &str = "Prashant Mishra | Full Stack Developer";
pub const SITE_DESCRIPTION: &str = "Full Stack Developer building scalable web applications with React, Next.js, Node.js, and modern cloud tools. Portfolio of Prashant Mishra.";

/// Section ids rendered on the home page, in page order.
pub const SECTION_IDS: &[&str] = &["hero", "about", "experience", "projects", "skills", "contact"];

#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ExternalProfile {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Image {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub about: &'static str,
    pub email: &'static str,
    /// Dialable form used in the `tel:` link.
    pub phone: &'static str,
    pub phone_display: &'static str,
    pub profiles: &'static [ExternalProfile],
    pub certification: &'static str,
    pub hero_image: Image,
    pub headshot: Image,
}

#[derive(Debug, Clone, Copy)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    /// Work arrangement, e.g. hybrid or remote.
    pub kind: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct EducationEntry {
    pub institution: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub name: &'static str,
    pub stack: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub image: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

/// How a project card is laid out, one variant per combination of the
/// optional screenshot and live demo url.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectLayout {
    Showcase {
        image: &'static str,
        url: &'static str,
    },
    ScreenshotOnly {
        image: &'static str,
    },
    LinkOnly {
        url: &'static str,
    },
    TextOnly,
}

/// The screenshot block at the top of a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screenshot {
    pub image: &'static str,
    /// Set when the whole screenshot links to the live demo.
    pub link: Option<&'static str>,
}

impl ProjectLayout {
    pub fn screenshot(&self) -> Option<Screenshot> {
        match *self {
            Self::Showcase { image, url } => Some(Screenshot {
                image,
                link: Some(url),
            }),
            Self::ScreenshotOnly { image } => Some(Screenshot { image, link: None }),
            Self::LinkOnly { .. } | Self::TextOnly => None,
        }
    }

    pub fn live_demo(&self) -> Option<&'static str> {
        match *self {
            Self::Showcase { url, .. } | Self::LinkOnly { url } => Some(url),
            Self::ScreenshotOnly { .. } | Self::TextOnly => None,
        }
    }
}

impl Project {
    pub fn layout(&self) -> ProjectLayout {
        match (self.image, self.live_url) {
            (Some(image), Some(url)) => ProjectLayout::Showcase { image, url },
            (Some(image), None) => ProjectLayout::ScreenshotOnly { image },
            (None, Some(url)) => ProjectLayout::LinkOnly { url },
            (None, None) => ProjectLayout::TextOnly,
        }
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "About",
        href: "#about",
    },
    NavLink {
        label: "Experience",
        href: "#experience",
    },
    NavLink {
        label: "Projects",
        href: "#projects",
    },
    NavLink {
        label: "Skills",
        href: "#skills",
    },
    NavLink {
        label: "Contact",
        href: "#contact",
    },
];

pub const PROFILE: Profile = Profile {
    name: "Prashant Mishra",
    initials: "PM",
    headline: "Full Stack Developer",
    tagline: "I build scalable web applications with modern stacks (React, Next.js, Node.js) and ship features that improve workflows and user experience.",
    about: "I'm a Full Stack Developer intern at Neolytix, focused on healthcare and credentialing products. I enjoy building full-cycle features, from API design and database modeling to responsive UIs, and care about code quality, testing, and maintainability.",
    email: "prashantmishra10232@gmail.com",
    phone: "+919958304996",
    phone_display: "+91 9958304996",
    profiles: &[
        ExternalProfile {
            label: "LinkedIn",
            url: "https://www.linkedin.com/in/prashant-mishra-10232",
        },
        ExternalProfile {
            label: "GitHub",
            url: "https://github.com/prashantmishra10232",
        },
        ExternalProfile {
            label: "LeetCode",
            url: "https://leetcode.com/u/prashantmishra10232",
        },
    ],
    certification: "100xdevs – Certified Full Stack Web Development",
    hero_image: Image {
        src: "/hero-illustration.png",
        alt: "Prashant Mishra - Full Stack Developer with React, AI, and modern tech stack",
    },
    headshot: Image {
        src: "/headshot.png",
        alt: "Prashant Mishra - Professional headshot",
    },
};

pub const EXPERIENCE: &[ExperienceEntry] = &[ExperienceEntry {
    company: "Neolytix",
    role: "Full Stack Developer Intern",
    period: "August 2024 – Present",
    kind: "Hybrid",
    points: &[
        "Architected NeoScribe, a live audio transcription platform for healthcare providers with Python and Next.js/TypeScript for real-time medical documentation.",
        "Building Incredibly, a credentialing platform using Next.js, TypeScript, Node.js, Express.js, PostgreSQL and Sequelize ORM.",
        "Database administration and query optimization with pgAdmin 4 and DBeaver.",
        "Code quality with SonarQube and end-to-end testing with Cypress.",
        "Collaborated with cross-functional teams on scalable healthcare solutions.",
    ],
}];

pub const EDUCATION: &[EducationEntry] = &[EducationEntry {
    institution: "Institute of Management Education",
    degree: "Bachelor of Computer Application",
    period: "September 2023 – June 2026",
    location: "India",
}];

pub const PROJECTS: &[Project] = &[
    Project {
        name: "CareerFlow",
        stack: "React.js, Tailwind CSS, Node.js, Express.js, MongoDB, Redux Toolkit",
        description: "MERN stack job portal for jobseekers and recruiters with job search and application management.",
        highlights: &[
            "JWT auth (access & refresh tokens), OAuth 2.0 (Google & GitHub).",
            "Resume upload and parsing with ATS scoring.",
            "Mobile-first responsive UI with Tailwind and ShadCN UI, Redux Toolkit, Cloudinary.",
        ],
        live_url: Some("https://chakri-portal-72eg.onrender.com"),
        image: Some("/careerflow-screenshot.png"),
    },
    Project {
        name: "RareKraft",
        stack: "React.js, Tailwind CSS, Node.js, Express.js, MongoDB, Redux Toolkit",
        description: "Production-ready e-commerce web app with payments and secure auth.",
        highlights: &[
            "JWT + Google OAuth, OTP-based forgot-password flow.",
            "Razorpay integration for payments.",
            "Redis for email verification and rate-limiting.",
        ],
        live_url: Some("https://rarekraft-in-1.onrender.com"),
        image: Some("/rarekraft-screenshot.png"),
    },
    Project {
        name: "NeoScribe",
        stack: "Python, Next.js, TypeScript",
        description: "Live audio transcription platform for healthcare providers.",
        highlights: &[
            "Real-time medical documentation for doctors.",
            "Built at Neolytix.",
        ],
        live_url: None,
        image: None,
    },
    Project {
        name: "Incredibly",
        stack: "Next.js, TypeScript, Node.js, Express.js, PostgreSQL, Sequelize",
        description: "Comprehensive credentialing platform (in progress).",
        highlights: &["Robust database design and API.", "Built at Neolytix."],
        live_url: None,
        image: None,
    },
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Languages",
        items: &["JavaScript", "TypeScript", "Java", "C", "C++"],
    },
    SkillGroup {
        title: "Frontend",
        items: &[
            "React.js",
            "Next.js",
            "HTML",
            "CSS",
            "Tailwind CSS",
            "Redux Toolkit",
            "ShadCN UI",
        ],
    },
    SkillGroup {
        title: "Backend",
        items: &["Node.js", "Express.js", "REST APIs", "JWT", "OAuth 2.0"],
    },
    SkillGroup {
        title: "Databases & ORM",
        items: &["MongoDB", "Mongoose", "PostgreSQL", "Redis", "Sequelize ORM"],
    },
    SkillGroup {
        title: "Tools & Cloud",
        items: &[
            "VSCode",
            "Docker",
            "GitHub",
            "Postman",
            "SonarQube",
            "Cypress",
            "AWS",
            "Vercel",
            "Render",
            "Cloudinary",
        ],
    },
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("empty text in {0}")]
    EmptyText(String),
    #[error("nav link {label} points at {href}, which is not a section on the page")]
    DanglingAnchor {
        label: &'static str,
        href: &'static str,
    },
    #[error("skill group {group} lists {item} more than once")]
    DuplicateSkill {
        group: &'static str,
        item: &'static str,
    },
    #[error("{project} has a live url that is not absolute: {url}")]
    RelativeUrl {
        project: &'static str,
        url: &'static str,
    },
    #[error("{project} has an image path that is not rooted at /: {path}")]
    UnrootedImage {
        project: &'static str,
        path: &'static str,
    },
}

fn require_text(value: &str, what: impl FnOnce() -> String) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        Err(ContentError::EmptyText(what()))
    } else {
        Ok(())
    }
}

fn is_absolute_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Checks every static table once at startup.
pub fn validate() -> Result<(), ContentError> {
    validate_tables(NAV_LINKS, PROJECTS, SKILL_GROUPS)?;

    let p = &PROFILE;
    for (field, value) in [
        ("name", p.name),
        ("initials", p.initials),
        ("headline", p.headline),
        ("tagline", p.tagline),
        ("about", p.about),
        ("email", p.email),
        ("phone", p.phone),
        ("certification", p.certification),
    ] {
        require_text(value, || format!("profile {field}"))?;
    }
    for profile in p.profiles {
        require_text(profile.label, || "profile link label".to_string())?;
        require_text(profile.url, || format!("{} url", profile.label))?;
    }

    for entry in EXPERIENCE {
        for (field, value) in [
            ("company", entry.company),
            ("role", entry.role),
            ("period", entry.period),
            ("type", entry.kind),
        ] {
            require_text(value, || format!("experience {field}"))?;
        }
        for (i, point) in entry.points.iter().enumerate() {
            require_text(point, || format!("{} point {i}", entry.company))?;
        }
    }

    for entry in EDUCATION {
        for (field, value) in [
            ("institution", entry.institution),
            ("degree", entry.degree),
            ("period", entry.period),
            ("location", entry.location),
        ] {
            require_text(value, || format!("education {field}"))?;
        }
    }

    Ok(())
}

fn validate_tables(
    nav: &[NavLink],
    projects: &[Project],
    skills: &[SkillGroup],
) -> Result<(), ContentError> {
    for link in nav {
        require_text(link.label, || format!("nav link to {}", link.href))?;
        let section = link.href.strip_prefix('#');
        if !section.is_some_and(|id| SECTION_IDS.contains(&id)) {
            return Err(ContentError::DanglingAnchor {
                label: link.label,
                href: link.href,
            });
        }
    }

    for project in projects {
        require_text(project.name, || "project name".to_string())?;
        require_text(project.stack, || format!("{} stack", project.name))?;
        require_text(project.description, || {
            format!("{} description", project.name)
        })?;
        for (i, highlight) in project.highlights.iter().enumerate() {
            require_text(highlight, || format!("{} highlight {i}", project.name))?;
        }
        if let Some(url) = project.live_url.filter(|u| !is_absolute_url(u)) {
            return Err(ContentError::RelativeUrl {
                project: project.name,
                url,
            });
        }
        if let Some(path) = project.image.filter(|p| !p.starts_with('/')) {
            return Err(ContentError::UnrootedImage {
                project: project.name,
                path,
            });
        }
    }

    for group in skills {
        require_text(group.title, || "skill group title".to_string())?;
        for (i, item) in group.items.iter().enumerate() {
            require_text(item, || format!("{} item {i}", group.title))?;
            if group.items[..i].contains(item) {
                return Err(ContentError::DuplicateSkill {
                    group: group.title,
                    item: *item,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(image: Option<&'static str>, live_url: Option<&'static str>) -> Project {
        Project {
            name: "Sample",
            stack: "Rust",
            description: "A sample project.",
            highlights: &["Does a thing."],
            live_url,
            image,
        }
    }

    #[test]
    fn test_shipped_content_is_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn test_layout_with_image_and_url() {
        let layout = project(Some("/shot.png"), Some("https://example.com")).layout();
        assert_eq!(
            layout,
            ProjectLayout::Showcase {
                image: "/shot.png",
                url: "https://example.com"
            }
        );
        assert_eq!(
            layout.screenshot(),
            Some(Screenshot {
                image: "/shot.png",
                link: Some("https://example.com")
            })
        );
        assert_eq!(layout.live_demo(), Some("https://example.com"));
    }

    #[test]
    fn test_layout_with_image_only() {
        let layout = project(Some("/shot.png"), None).layout();
        assert_eq!(layout, ProjectLayout::ScreenshotOnly { image: "/shot.png" });
        assert_eq!(
            layout.screenshot(),
            Some(Screenshot {
                image: "/shot.png",
                link: None
            })
        );
        assert_eq!(layout.live_demo(), None);
    }

    #[test]
    fn test_layout_with_url_only() {
        let layout = project(None, Some("https://example.com")).layout();
        assert_eq!(
            layout,
            ProjectLayout::LinkOnly {
                url: "https://example.com"
            }
        );
        // no screenshot block, but the inline link is still there
        assert_eq!(layout.screenshot(), None);
        assert_eq!(layout.live_demo(), Some("https://example.com"));
    }

    #[test]
    fn test_layout_with_neither() {
        let layout = project(None, None).layout();
        assert_eq!(layout, ProjectLayout::TextOnly);
        assert_eq!(layout.screenshot(), None);
        assert_eq!(layout.live_demo(), None);
    }

    #[test]
    fn test_shipped_projects_cover_two_layouts() {
        let layouts = PROJECTS.iter().map(Project::layout).collect::<Vec<_>>();
        assert!(matches!(layouts[0], ProjectLayout::Showcase { .. }));
        assert!(matches!(layouts[1], ProjectLayout::Showcase { .. }));
        assert_eq!(layouts[2], ProjectLayout::TextOnly);
        assert_eq!(layouts[3], ProjectLayout::TextOnly);
    }

    #[test]
    fn test_nav_links_point_at_sections() {
        for link in NAV_LINKS {
            let id = link.href.strip_prefix('#').expect("nav href is an anchor");
            assert!(SECTION_IDS.contains(&id), "{} has no section", link.href);
        }
    }

    #[test]
    fn test_rejects_dangling_anchor() {
        let nav = [NavLink {
            label: "Blog",
            href: "#blog",
        }];
        assert_eq!(
            validate_tables(&nav, &[], &[]),
            Err(ContentError::DanglingAnchor {
                label: "Blog",
                href: "#blog"
            })
        );

        let nav = [NavLink {
            label: "About",
            href: "about",
        }];
        assert!(matches!(
            validate_tables(&nav, &[], &[]),
            Err(ContentError::DanglingAnchor { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_text() {
        let nav = [NavLink {
            label: "  ",
            href: "#about",
        }];
        assert!(matches!(
            validate_tables(&nav, &[], &[]),
            Err(ContentError::EmptyText(_))
        ));

        let mut p = project(None, None);
        p.highlights = &["fine", ""];
        assert_eq!(
            validate_tables(&[], &[p], &[]),
            Err(ContentError::EmptyText("Sample highlight 1".to_string()))
        );
    }

    #[test]
    fn test_rejects_duplicate_skill() {
        let skills = [SkillGroup {
            title: "Languages",
            items: &["Rust", "Go", "Rust"],
        }];
        assert_eq!(
            validate_tables(&[], &[], &skills),
            Err(ContentError::DuplicateSkill {
                group: "Languages",
                item: "Rust"
            })
        );
    }

    #[test]
    fn test_rejects_bad_project_paths() {
        let p = project(None, Some("example.com"));
        assert!(matches!(
            validate_tables(&[], &[p], &[]),
            Err(ContentError::RelativeUrl { .. })
        ));

        let p = project(Some("shot.png"), None);
        assert!(matches!(
            validate_tables(&[], &[p], &[]),
            Err(ContentError::UnrootedImage { .. })
        ));
    }
}
