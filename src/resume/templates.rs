// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Built-in resume templates: complete sample resumes a user can start from.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub struct TemplatePersonal {
    pub full_name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub summary: &'static str,
}

pub struct TemplateExperience {
    pub company: &'static str,
    pub position: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

pub struct TemplateEducation {
    pub school: &'static str,
    pub degree: &'static str,
    pub year: &'static str,
}

/// A named, immutable sample resume.
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub personal_info: TemplatePersonal,
    pub experiences: &'static [TemplateExperience],
    pub education: &'static [TemplateEducation],
    pub skills: &'static [&'static str],
}

/// Listing entry for the template picker.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl Template {
    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
        }
    }
}

pub fn all() -> &'static [Template] {
    TEMPLATES
}

/// Look up a template by id or display name (case-insensitive).
pub fn find(key: &str) -> Option<&'static Template> {
    let key = key.trim();
    TEMPLATES
        .iter()
        .find(|t| t.id.eq_ignore_ascii_case(key) || t.name.eq_ignore_ascii_case(key))
}

static TEMPLATES: &[Template] = &[
    Template {
        id: "software-developer",
        name: "Software Developer",
        description: "Perfect for tech professionals and developers",
        personal_info: TemplatePersonal {
            full_name: "Alex Johnson",
            email: "alex.johnson@email.com",
            phone: "+1 (555) 123-4567",
            location: "San Francisco, CA",
            summary: "Passionate full-stack developer with 5+ years of experience building scalable web applications. Expertise in React, Node.js, and cloud technologies. Strong problem-solving skills and collaborative team player.",
        },
        experiences: &[
            TemplateExperience {
                company: "TechCorp Inc.",
                position: "Senior Software Engineer",
                duration: "Jan 2022 - Present",
                description: "Led development of microservices architecture serving 1M+ users. Implemented CI/CD pipelines reducing deployment time by 60%. Mentored 3 junior developers and conducted code reviews.",
            },
            TemplateExperience {
                company: "StartupXYZ",
                position: "Full Stack Developer",
                duration: "Jun 2020 - Dec 2021",
                description: "Built responsive web applications using React and Node.js. Integrated third-party APIs and payment systems. Collaborated with designers to implement pixel-perfect UI components.",
            },
        ],
        education: &[TemplateEducation {
            school: "University of California, Berkeley",
            degree: "Bachelor of Science in Computer Science",
            year: "2020",
        }],
        skills: &[
            "JavaScript", "React", "Node.js", "TypeScript", "Python", "AWS", "Docker",
            "PostgreSQL", "Git", "Agile",
        ],
    },
    Template {
        id: "marketing-manager",
        name: "Marketing Manager",
        description: "Ideal for marketing professionals and brand managers",
        personal_info: TemplatePersonal {
            full_name: "Sarah Martinez",
            email: "sarah.martinez@email.com",
            phone: "+1 (555) 987-6543",
            location: "New York, NY",
            summary: "Results-driven marketing manager with 7+ years of experience in digital marketing, brand management, and campaign optimization. Proven track record of increasing brand awareness by 40% and driving revenue growth through data-driven strategies.",
        },
        experiences: &[
            TemplateExperience {
                company: "Global Brands LLC",
                position: "Senior Marketing Manager",
                duration: "Mar 2021 - Present",
                description: "Developed and executed integrated marketing campaigns resulting in 35% increase in lead generation. Managed $500K annual marketing budget and optimized ROI across multiple channels. Led cross-functional team of 8 members.",
            },
            TemplateExperience {
                company: "Creative Agency Pro",
                position: "Digital Marketing Specialist",
                duration: "Aug 2019 - Feb 2021",
                description: "Created and managed social media campaigns for 15+ clients. Implemented SEO strategies that improved organic traffic by 60%. Analyzed campaign performance and provided actionable insights to clients.",
            },
        ],
        education: &[TemplateEducation {
            school: "New York University",
            degree: "Master of Business Administration (MBA)",
            year: "2019",
        }],
        skills: &[
            "Digital Marketing", "SEO/SEM", "Google Analytics", "Social Media Marketing",
            "Content Strategy", "Email Marketing", "Adobe Creative Suite", "Project Management",
            "Data Analysis", "Brand Management",
        ],
    },
    Template {
        id: "teacher",
        name: "Teacher",
        description: "Great for educators and academic professionals",
        personal_info: TemplatePersonal {
            full_name: "Michael Chen",
            email: "michael.chen@email.com",
            phone: "+1 (555) 456-7890",
            location: "Austin, TX",
            summary: "Dedicated high school mathematics teacher with 8+ years of experience inspiring students to achieve academic excellence. Specialized in creating engaging lesson plans and implementing innovative teaching methods that improved student test scores by 25%.",
        },
        experiences: &[
            TemplateExperience {
                company: "Lincoln High School",
                position: "Mathematics Teacher",
                duration: "Aug 2020 - Present",
                description: "Teach Algebra II and Calculus to 150+ students across 6 classes. Developed interactive learning modules that increased student engagement by 40%. Coordinate with parents and administrators to support student success.",
            },
            TemplateExperience {
                company: "Roosevelt Middle School",
                position: "Math Teacher & Department Head",
                duration: "Sep 2016 - Jul 2020",
                description: "Led mathematics department of 12 teachers. Implemented new curriculum standards and professional development programs. Mentored new teachers and facilitated grade-level team meetings.",
            },
        ],
        education: &[TemplateEducation {
            school: "University of Texas at Austin",
            degree: "Master of Education in Mathematics",
            year: "2016",
        }],
        skills: &[
            "Curriculum Development", "Classroom Management", "Educational Technology",
            "Student Assessment", "Parent Communication", "Differentiated Instruction",
            "Google Classroom", "Microsoft Office", "Data Analysis", "Team Leadership",
        ],
    },
    Template {
        id: "designer",
        name: "Creative Designer",
        description: "Perfect for designers and creative professionals",
        personal_info: TemplatePersonal {
            full_name: "Emma Rodriguez",
            email: "emma.rodriguez@email.com",
            phone: "+1 (555) 321-9876",
            location: "Los Angeles, CA",
            summary: "Creative visual designer with 6+ years of experience in branding, UI/UX design, and digital marketing materials. Passionate about creating compelling visual narratives that drive engagement and deliver measurable business results.",
        },
        experiences: &[
            TemplateExperience {
                company: "Design Studio Pro",
                position: "Senior Graphic Designer",
                duration: "Feb 2022 - Present",
                description: "Lead designer for 20+ client projects including brand identity, web design, and marketing collateral. Increased client satisfaction scores by 30% through collaborative design process. Mentor junior designers and manage project timelines.",
            },
            TemplateExperience {
                company: "Creative Collective",
                position: "UI/UX Designer",
                duration: "May 2020 - Jan 2022",
                description: "Designed user interfaces for mobile and web applications. Conducted user research and usability testing to improve conversion rates by 25%. Collaborated with developers to ensure design feasibility and brand consistency.",
            },
        ],
        education: &[TemplateEducation {
            school: "Art Center College of Design",
            degree: "Bachelor of Fine Arts in Graphic Design",
            year: "2020",
        }],
        skills: &[
            "Adobe Creative Suite", "Figma", "Sketch", "UI/UX Design", "Branding", "Typography",
            "Color Theory", "Web Design", "Print Design", "Client Communication",
        ],
    },
    Template {
        id: "business-analyst",
        name: "Business Analyst",
        description: "Perfect for business professionals and analysts",
        personal_info: TemplatePersonal {
            full_name: "Robert Kim",
            email: "robert.kim@email.com",
            phone: "+1 (555) 789-0123",
            location: "Chicago, IL",
            summary: "Strategic business analyst with 6+ years of experience in process optimization and data-driven decision making. Expert in stakeholder management and translating business requirements into technical solutions. Proven track record of improving operational efficiency by 35%.",
        },
        experiences: &[
            TemplateExperience {
                company: "Global Solutions Inc.",
                position: "Senior Business Analyst",
                duration: "Mar 2021 - Present",
                description: "Analyzed business processes and identified optimization opportunities saving $2M annually. Led cross-functional teams to implement CRM systems and streamline operations. Presented findings to C-suite executives.",
            },
            TemplateExperience {
                company: "Financial Services Corp",
                position: "Business Analyst",
                duration: "Sep 2018 - Feb 2021",
                description: "Conducted market research and competitive analysis for strategic planning. Developed financial models and forecasting reports. Collaborated with IT teams to implement new reporting tools.",
            },
        ],
        education: &[TemplateEducation {
            school: "Northwestern University",
            degree: "MBA in Business Strategy",
            year: "2018",
        }],
        skills: &[
            "Business Analysis", "Data Analytics", "SQL", "Tableau", "Agile/Scrum",
            "Process Mapping", "Stakeholder Management", "Financial Modeling", "Power BI",
            "Project Management",
        ],
    },
    Template {
        id: "doctor",
        name: "Healthcare Professional",
        description: "Ideal for doctors and medical professionals",
        personal_info: TemplatePersonal {
            full_name: "Dr. Sophia Anderson",
            email: "sophia.anderson@email.com",
            phone: "+1 (555) 234-5678",
            location: "Boston, MA",
            summary: "Board-certified physician with 10+ years of experience in internal medicine. Passionate about patient care and medical research. Published 15+ papers in peer-reviewed journals. Committed to advancing healthcare through evidence-based practices.",
        },
        experiences: &[
            TemplateExperience {
                company: "Boston General Hospital",
                position: "Senior Physician",
                duration: "Jul 2019 - Present",
                description: "Provide comprehensive care to 2000+ patients annually. Lead weekly grand rounds and mentor medical residents. Participate in clinical trials and medical research initiatives.",
            },
            TemplateExperience {
                company: "Mercy Medical Center",
                position: "Attending Physician",
                duration: "Jun 2014 - Jun 2019",
                description: "Managed inpatient and outpatient care for diverse patient population. Coordinated with multidisciplinary teams for complex cases. Maintained 98% patient satisfaction rating.",
            },
        ],
        education: &[TemplateEducation {
            school: "Harvard Medical School",
            degree: "Doctor of Medicine (MD)",
            year: "2014",
        }],
        skills: &[
            "Internal Medicine", "Patient Care", "Medical Research", "Clinical Trials",
            "Medical Writing", "EHR Systems", "Team Leadership", "Problem Solving",
            "Medical Spanish", "CPR Certified",
        ],
    },
    Template {
        id: "research-scientist",
        name: "Research Scientist",
        description: "Great for scientists and researchers",
        personal_info: TemplatePersonal {
            full_name: "Dr. James Park",
            email: "james.park@email.com",
            phone: "+1 (555) 345-6789",
            location: "Seattle, WA",
            summary: "Research scientist with 8+ years of experience in biotechnology and drug development. Published 25+ peer-reviewed articles. Expert in molecular biology, protein biochemistry, and experimental design. Passionate about advancing scientific knowledge and developing innovative solutions.",
        },
        experiences: &[
            TemplateExperience {
                company: "BioTech Innovations",
                position: "Senior Research Scientist",
                duration: "Jan 2020 - Present",
                description: "Lead research team developing novel cancer therapeutics. Manage $5M+ research budget. Published 8 papers in Nature and Cell journals. Collaborate with pharmaceutical companies on drug development.",
            },
            TemplateExperience {
                company: "National Institute of Health",
                position: "Research Scientist",
                duration: "Jun 2016 - Dec 2019",
                description: "Conducted breakthrough research on neurodegenerative diseases. Secured $3M in research grants. Mentored 10+ junior researchers and graduate students.",
            },
        ],
        education: &[TemplateEducation {
            school: "MIT",
            degree: "PhD in Molecular Biology",
            year: "2016",
        }],
        skills: &[
            "Molecular Biology", "Biochemistry", "Drug Development", "Cell Culture", "PCR",
            "Western Blot", "Grant Writing", "Data Analysis", "Laboratory Management",
            "Scientific Writing",
        ],
    },
    Template {
        id: "chef",
        name: "Professional Chef",
        description: "Perfect for culinary professionals",
        personal_info: TemplatePersonal {
            full_name: "Isabella Martinez",
            email: "isabella.martinez@email.com",
            phone: "+1 (555) 456-7890",
            location: "San Francisco, CA",
            summary: "Award-winning chef with 12+ years of experience in fine dining and restaurant management. Michelin-star restaurant veteran. Expert in fusion cuisine and sustainable cooking practices. Passionate about creating memorable culinary experiences.",
        },
        experiences: &[
            TemplateExperience {
                company: "The Michelin Restaurant",
                position: "Executive Chef",
                duration: "Jan 2021 - Present",
                description: "Lead kitchen team of 20 chefs serving 200+ covers nightly. Maintained Michelin star rating for 3 consecutive years. Developed innovative seasonal menus using locally sourced ingredients.",
            },
            TemplateExperience {
                company: "Fusion Bistro",
                position: "Head Chef",
                duration: "Mar 2016 - Dec 2020",
                description: "Created award-winning Asian-Latin fusion menu. Increased restaurant revenue by 40% through innovative dishes and strategic marketing.",
            },
        ],
        education: &[TemplateEducation {
            school: "Culinary Institute of America",
            degree: "Associate Degree in Culinary Arts",
            year: "2012",
        }],
        skills: &[
            "Fine Dining", "Fusion Cuisine", "Kitchen Management", "Menu Development",
            "Food Safety", "Cost Control", "Team Leadership", "Sous Vide",
            "Molecular Gastronomy", "Wine Pairing",
        ],
    },
    Template {
        id: "musician",
        name: "Music Professional",
        description: "Ideal for musicians and audio professionals",
        personal_info: TemplatePersonal {
            full_name: "Marcus Johnson",
            email: "marcus.johnson@email.com",
            phone: "+1 (555) 567-8901",
            location: "Nashville, TN",
            summary: "Multi-platinum music producer and songwriter with 15+ years in the music industry. Worked with Grammy-winning artists. Expert in music production, mixing, and mastering. Published songwriter with 100+ song placements.",
        },
        experiences: &[
            TemplateExperience {
                company: "Melody Records",
                position: "Senior Music Producer",
                duration: "Jan 2020 - Present",
                description: "Produce tracks for chart-topping artists. Manage production team of 15. Achieved 5 #1 hits and multiple gold/platinum certifications.",
            },
            TemplateExperience {
                company: "Beats Studio",
                position: "Music Producer & Engineer",
                duration: "Jun 2015 - Dec 2019",
                description: "Produced and engineered albums for independent and major label artists. Specialized in hip-hop, R&B, and pop genres.",
            },
        ],
        education: &[TemplateEducation {
            school: "Berklee College of Music",
            degree: "Bachelor of Music in Music Production",
            year: "2010",
        }],
        skills: &[
            "Music Production", "Audio Engineering", "Songwriting", "Mixing", "Mastering",
            "Pro Tools", "Ableton Live", "Music Theory", "Recording", "Artist Development",
        ],
    },
    Template {
        id: "photographer",
        name: "Photographer",
        description: "Perfect for photographers and visual artists",
        personal_info: TemplatePersonal {
            full_name: "Luna Chen",
            email: "luna.chen@email.com",
            phone: "+1 (555) 678-9012",
            location: "Los Angeles, CA",
            summary: "Award-winning photographer with 10+ years specializing in portrait, fashion, and commercial photography. Published in Vogue, GQ, and National Geographic. Expert in digital and film photography with a distinctive artistic vision.",
        },
        experiences: &[
            TemplateExperience {
                company: "Freelance Photographer",
                position: "Professional Photographer",
                duration: "2018 - Present",
                description: "Shoot for fashion brands, magazines, and advertising agencies. Clients include major brands in fashion, tech, and hospitality. Maintain 98% client satisfaction rate.",
            },
            TemplateExperience {
                company: "Prestige Magazine",
                position: "Staff Photographer",
                duration: "Jan 2014 - Dec 2017",
                description: "Created compelling visual narratives for editorial spreads. Covered major events and celebrity portraits. Won 3 industry awards for photography excellence.",
            },
        ],
        education: &[TemplateEducation {
            school: "Art Institute of Los Angeles",
            degree: "Bachelor of Fine Arts in Photography",
            year: "2013",
        }],
        skills: &[
            "Portrait Photography", "Fashion Photography", "Photo Editing", "Lighting",
            "Adobe Photoshop", "Adobe Lightroom", "Color Grading", "Retouching",
            "Video Production", "Art Direction",
        ],
    },
];
