//! Compiled-in portfolio content
//!
//! The one place content is edited. Display order is array order everywhere.

use crate::catalog::records::{
    CategoryKey, EducationEntry, ExperienceEntry, Identity, ProjectEntry, SkillCategory,
    SkillEntry,
};

pub(crate) const IDENTITY: Identity = Identity {
    name: "Mohamed Raiyan Rizwan",
    monogram: "MR",
    tagline: "React | Spring Boot | .NET(C#) | Natural Language Processing | Computer Vision",
    location: "Dubai, UAE",
    email: "raiyanriz11@gmail.com",
    phone: "+971 56 324 8990",
    github_url: "https://github.com/Raiyan-R11",
    linkedin_url: "https://linkedin.com/in/raiyan-rizwan/",
    summary: &[
        "Fresh BSc Computer Science graduate from the American University of Sharjah \
         with a Minor in Data Science.",
        "My expertise spans full-stack development and Artificial Intelligence, with \
         hands-on experience in modern web technologies (Spring Boot and .NET) and \
         machine learning frameworks.",
        "I've successfully completed internships at Emirates Group IT and have built \
         numerous projects ranging from a multilingual AI text detector to scalable \
         e-commerce applications.",
        "I'm driven by the challenge of solving complex problems and creating \
         innovative solutions that bridge the gap between cutting-edge AI research \
         and practical applications.",
    ],
};

pub(crate) const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        key: CategoryKey::Frontend,
        title: "Frontend",
        skills: &[
            SkillEntry { name: "React", icon: "⚛️" },
            SkillEntry { name: "TypeScript", icon: "📘" },
            SkillEntry { name: "JavaScript", icon: "🟨" },
            SkillEntry { name: "Tailwind CSS", icon: "🎨" },
            SkillEntry { name: "Redux", icon: "🔄" },
        ],
    },
    SkillCategory {
        key: CategoryKey::Backend,
        title: "Backend",
        skills: &[
            SkillEntry { name: "Python", icon: "🐍" },
            SkillEntry { name: "Java", icon: "☕" },
            SkillEntry { name: "Spring Boot", icon: "🍃" },
            SkillEntry { name: "Node.js", icon: "🟢" },
            SkillEntry { name: "C#", icon: "#️⃣" },
            SkillEntry { name: "PostgreSQL", icon: "🐘" },
        ],
    },
    SkillCategory {
        key: CategoryKey::AiMl,
        title: "AI/ML",
        skills: &[
            SkillEntry { name: "TensorFlow", icon: "🧠" },
            SkillEntry { name: "PyTorch", icon: "🔥" },
            SkillEntry { name: "HuggingFace", icon: "🤗" },
            SkillEntry { name: "OpenAI API", icon: "🤖" },
            SkillEntry { name: "scikit-learn", icon: "📊" },
        ],
    },
    SkillCategory {
        key: CategoryKey::Tools,
        title: "Tools",
        skills: &[
            SkillEntry { name: "Docker", icon: "🐳" },
            SkillEntry { name: "AWS", icon: "☁️" },
            SkillEntry { name: "Git", icon: "📚" },
            SkillEntry { name: "VS Code", icon: "💻" },
            SkillEntry { name: "Photoshop", icon: "🎭" },
        ],
    },
];

pub(crate) const EXPERIENCES: &[ExperienceEntry] = &[ExperienceEntry {
    organization: "Emirates Group IT",
    role: "Software Engineer - Intern",
    location: "Dubai, U.A.E",
    duration: "June 2024 – August 2024",
    achievements: &[
        "Migrated chatbot services to Azure Bot Service, integrating 350+ documentation \
         sources using Python (Flask, NLTK)",
        "Developed Performance Engineering portal with responsive UI components using \
         React and Node.js",
        "Collaborated in an Agile team, participating in sprints, daily stand-ups, and \
         code reviews using Git",
        "Managed a PostgreSQL database, performing data normalization and optimization",
    ],
}];

pub(crate) const EDUCATION: EducationEntry = EducationEntry {
    institution: "American University of Sharjah",
    degree: "B.Sc. Major in Computer Science, Minor in Data Science",
    duration: "Sep 2021 - June 2025",
    gpa: "GPA: 3.5/4.0",
    coursework: "Neural Networks and Deep Learning, Computer Vision, Machine Learning \
                 and Data Mining, Foundations of Statistics for Data Science, Data \
                 Structures and Algorithms, Software Engineering, Software Testing",
};

pub(crate) const AI_PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Multilingual AI Text Detector",
        description: "Fine-tuned multilingual encoder using LoRA for binary \
                      classification achieving 98% accuracy",
        tech: "Python, Transformers, HuggingFace, PEFT, Flask",
        glyph: "🔍",
    },
    ProjectEntry {
        title: "Equivalent Mutant Detection via LLMs",
        description: "Evaluated PLBart, UniXCoder, and Longformer for semantic \
                      equivalence detection",
        tech: "Python, Transformers",
        glyph: "🧬",
    },
    ProjectEntry {
        title: "Contrastive Learning Study",
        description: "Compared SupCon, SimCLR, and cross-entropy loss on medical \
                      image dataset",
        tech: "Python, PyTorch, scikit-learn",
        glyph: "🏥",
    },
    ProjectEntry {
        title: "Asteroid Hazard Prediction",
        description: "Built ML models to predict asteroid hazard and size with 100% \
                      F1 score",
        tech: "Python, scikit-learn, Pandas",
        glyph: "🌌",
    },
    ProjectEntry {
        title: "Audio Transcription System",
        description: "Voice-to-text system integrating Whisper API with Spring Boot \
                      interface",
        tech: "Spring AI, Whisper API, Spring Boot",
        glyph: "🎤",
    },
];

pub(crate) const FULL_STACK_PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "E-Commerce Application",
        description: "Scalable full-stack application with RESTful APIs, JWT \
                      authentication, and AWS deployment",
        tech: "ReactJS, Redux, Java, Spring Boot, PostgreSQL, AWS",
        glyph: "🛒",
    },
    ProjectEntry {
        title: "Quiz Web Application",
        description: "Responsive quiz platform with dynamic questions and real-time \
                      results",
        tech: "ReactJS, MUI, ASP.NET 6, SQL Server",
        glyph: "📝",
    },
];

pub(crate) const ACHIEVEMENTS: &[&str] = &[
    "6th Place (out of 22 teams) – AI Hackathon II, GOTECH 2025 (SPE, Dubai)",
    "Artificial Intelligence Course – Samsung Innovation Campus",
    "Najim Appreciation Award – Emirates Group IT",
    "JavaScript Algorithms and Data Structures – freeCodeCamp",
    "Dean's List (x4), Chancellor's List (x1) – American University of Sharjah",
];
