//! Tech-stack showcase data.

#[cfg(test)]
#[path = "tech_stack_test.rs"]
mod tech_stack_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TechSkill {
    pub name: &'static str,
    pub logo: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TechCategory {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
    pub skills: &'static [TechSkill],
}

pub const TECH_STACK: &[TechCategory] = &[
    TechCategory {
        title: "Frontend",
        subtitle: "UI/UX Development",
        icon: "🎨",
        skills: &[
            TechSkill { name: "React.js", logo: "/react.png" },
            TechSkill { name: "Next.js", logo: "/vecel-dark.svg" },
            TechSkill { name: "TypeScript", logo: "/typescript.png" },
            TechSkill { name: "Tailwind CSS", logo: "/tailwind-CSS.png" },
            TechSkill { name: "HTML", logo: "/HTML5.png" },
            TechSkill { name: "CSS", logo: "/CSS3.png" },
        ],
    },
    TechCategory {
        title: "Backend",
        subtitle: "Server & API Development",
        icon: "⚙",
        skills: &[
            TechSkill { name: "Node.js", logo: "/Node.js.png" },
            TechSkill { name: "Express.js", logo: "/Express.png" },
        ],
    },
    TechCategory {
        title: "Database & Tools",
        subtitle: "Data Management & Version Control",
        icon: "🗄",
        skills: &[
            TechSkill { name: "MongoDB", logo: "/MongoDB.png" },
            TechSkill { name: "MySQL", logo: "/MySQL.png" },
            TechSkill { name: "Git", logo: "/Git.png" },
            TechSkill { name: "GitHub", logo: "/GitHub.png" },
        ],
    },
];

pub const ADDITIONAL_SKILLS: &[&str] = &["JavaScript", "Responsive Design", "RESTful APIs", "Debugging"];
