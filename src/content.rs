#[derive(Clone, Debug)]
pub struct NavItem {
    pub id: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug)]
pub struct Tool {
    pub name: &'static str,
    pub blurb: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Debug)]
pub struct ToolCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub tools: &'static [Tool],
}

#[derive(Clone, Debug)]
pub struct Project {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

#[derive(Clone, Debug)]
pub struct BlogPost {
    pub icon: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub blurb: &'static str,
    pub link: &'static str,
}

#[derive(Clone, Debug)]
pub struct TimelineEntry {
    pub period: &'static str,
    pub title: &'static str,
    pub context: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Debug)]
pub struct Stat {
    pub icon: &'static str,
    pub figure: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug)]
pub struct ContactLink {
    pub icon: &'static str,
    pub brand: bool,
    pub label: &'static str,
    pub href: &'static str,
}

pub const SITE_NAME: &str = "Anubhav Mohandas";
pub const SITE_NAME_SHORT: &str = "AM";
pub const SITE_TAGLINE: &str = "Cybersecurity Researcher & Tool Developer";
pub const GITHUB_PROFILE_URL: &str = "https://github.com/anubhavmohandas";
pub const BLOG_HOME_URL: &str = "https://www.techtonichive.in/";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "home", icon: "house", label: "Home" },
    NavItem { id: "about", icon: "user", label: "About" },
    NavItem { id: "tools", icon: "wrench", label: "Tools" },
    NavItem { id: "experience", icon: "briefcase", label: "Experience" },
    NavItem { id: "projects", icon: "code", label: "Projects" },
    NavItem { id: "blog", icon: "blog", label: "Blog" },
    NavItem { id: "contact", icon: "envelope", label: "Contact" },
];

const SECTION_CAPTIONS: &[(&str, &str)] = &[
    ("home", "Welcome! I'm your cyber guide! Ready to explore?"),
    ("about", "Discover Anubhav's cybersecurity research & tool development!"),
    ("tools", "Check out these powerful security tools!"),
    ("experience", "Look at this impressive research & development journey!"),
    ("projects", "Amazing security tools and research projects ahead!"),
    ("blog", "Fresh security research and write-ups ahead!"),
    ("contact", "Ready to connect? Let's secure the world together!"),
];

pub const GREETING_MESSAGE: &str =
    "Hi! Explore my cybersecurity research & tool development portfolio!";
pub const CELEBRATION_MESSAGE: &str = "🌈 Rainbow Mode Activated! You found the secret!";

pub fn section_caption(id: &str) -> Option<&'static str> {
    SECTION_CAPTIONS
        .iter()
        .find(|(section, _)| *section == id)
        .map(|(_, caption)| *caption)
}

pub const HERO_ICONS: &[&str] = &["user-secret", "shield-halved", "earth-americas"];
pub const HERO_ROLE: &str = "Digital Forensics & Cyber Crime Investigation Specialist";
pub const HERO_DESCRIPTION: &str = "Passionate cybersecurity researcher and tool developer specializing in cyber crime investigation and digital forensics. I love solving complex cases using advanced investigative techniques, developing security tools, and exploring innovative methodologies.";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a passionate cybersecurity researcher and tool developer specializing in cyber crime investigation and digital forensics. My research focuses on developing innovative investigative methodologies, security tools, and techniques to solve complex cyber crime cases and enhance digital evidence analysis.",
    "I love diving deep into challenging cases, building powerful security tools, and using cutting-edge techniques to uncover digital evidence. When I'm not investigating cases or developing tools, I enjoy traveling and exploring new places.",
];

pub const STATS: &[Stat] = &[
    Stat { icon: "clock", figure: "5+", label: "Years Research" },
    Stat { icon: "screwdriver-wrench", figure: "15+", label: "Tools Developed" },
    Stat { icon: "magnifying-glass-plus", figure: "10+", label: "Cases Investigated" },
    Stat { icon: "shield-virus", figure: "24/7", label: "Learning Mode" },
];

pub const TOOL_CATEGORIES: &[ToolCategory] = &[
    ToolCategory {
        title: "Operating Systems",
        icon: "terminal",
        tools: &[
            Tool { name: "Kali Linux", blurb: "Primary investigation OS", icon: "linux" },
            Tool { name: "Windows", blurb: "Windows forensics & analysis", icon: "windows" },
            Tool { name: "Red Hat Linux", blurb: "Enterprise security testing", icon: "redhat" },
        ],
    },
    ToolCategory {
        title: "Digital Forensics",
        icon: "magnifying-glass",
        tools: &[
            Tool { name: "Autopsy", blurb: "Digital forensics platform", icon: "microscope" },
            Tool { name: "FTK", blurb: "Forensic toolkit suite", icon: "hammer" },
            Tool { name: "Wireshark", blurb: "Network protocol analyzer", icon: "fish" },
        ],
    },
    ToolCategory {
        title: "Penetration Testing",
        icon: "bug",
        tools: &[
            Tool { name: "Burp Suite", blurb: "Web security testing", icon: "crosshairs" },
            Tool { name: "Metasploit", blurb: "Exploitation framework", icon: "bomb" },
            Tool { name: "Nmap", blurb: "Network scanning & discovery", icon: "network-wired" },
        ],
    },
    ToolCategory {
        title: "Password & Brute Force",
        icon: "key",
        tools: &[
            Tool { name: "Hydra", blurb: "Network login cracker", icon: "lock-open" },
            Tool { name: "John the Ripper", blurb: "Password cracking tool", icon: "unlock" },
            Tool { name: "SQLMap", blurb: "SQL injection automation", icon: "database" },
        ],
    },
    ToolCategory {
        title: "OSINT & Reconnaissance",
        icon: "eye",
        tools: &[
            Tool { name: "Amass", blurb: "Network mapping & enumeration", icon: "map" },
            Tool { name: "TheHarvester", blurb: "Email & subdomain discovery", icon: "envelope-open-text" },
            Tool { name: "AssetFinder", blurb: "Domain & subdomain enumeration", icon: "sitemap" },
        ],
    },
    ToolCategory {
        title: "SIEM & Monitoring",
        icon: "chart-line",
        tools: &[
            Tool { name: "Wazuh", blurb: "Security monitoring platform", icon: "shield-halved" },
            Tool { name: "Sysmon", blurb: "System activity monitoring", icon: "desktop" },
            Tool { name: "Splunk", blurb: "Log analysis & SIEM", icon: "chart-bar" },
        ],
    },
    ToolCategory {
        title: "Malware Analysis",
        icon: "virus",
        tools: &[
            Tool { name: "PEStudio", blurb: "Malware initial assessment", icon: "file-code" },
            Tool { name: "CFF Explorer", blurb: "PE file structure analysis", icon: "microscope" },
            Tool { name: "YARA", blurb: "Malware identification", icon: "fingerprint" },
        ],
    },
    ToolCategory {
        title: "Scripting & Automation",
        icon: "code",
        tools: &[
            Tool { name: "Python", blurb: "Security automation & scripting", icon: "python" },
            Tool { name: "Bash", blurb: "Linux automation & scripting", icon: "terminal" },
            Tool { name: "PowerShell", blurb: "Windows automation", icon: "file-code" },
        ],
    },
    ToolCategory {
        title: "Web Application Security",
        icon: "globe",
        tools: &[
            Tool { name: "OWASP ZAP", blurb: "Web security scanner", icon: "spider" },
            Tool { name: "Nikto", blurb: "Web server scanner", icon: "server" },
            Tool { name: "DirBuster", blurb: "Directory & file bruteforcer", icon: "folder-tree" },
        ],
    },
];

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        period: "Current Focus",
        title: "Cyber Crime Investigation & Tool Development",
        context: "Digital Forensics Research",
        body: "Specializing in cyber crime investigation techniques, analyzing complex digital crime cases, and developing innovative security tools and methodologies.",
    },
    TimelineEntry {
        period: "Active Development",
        title: "Security Tool Development",
        context: "Open Source Projects",
        body: "Developing advanced forensic investigation tools including WhoisUser, Log Analyzer, Secure Gen, and Ultimate Digital Forensics Toolkit.",
    },
    TimelineEntry {
        period: "Specialization",
        title: "Digital Evidence Analysis",
        context: "Cybersecurity Research",
        body: "Deep focus on digital evidence analysis, threat intelligence, and building tools to assist cyber crime investigators worldwide.",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        icon: "toolbox",
        title: "Ultimate Digital Forensics Toolkit",
        blurb: "Comprehensive all-in-one digital forensics toolkit featuring multiple investigation tools, evidence collection utilities, and analysis capabilities for cyber crime investigation.",
        tags: &["Digital Forensics", "Investigation", "Evidence Analysis", "All-in-One"],
        link: "https://github.com/anubhavmohandas/Ultimate-Digital-Forensics-Toolkit",
    },
    Project {
        icon: "user-secret",
        title: "WhoisUser - OSINT Framework",
        blurb: "Professional username enumeration and OSINT investigation framework. Automated username discovery across 100+ platforms with intelligent result merging and forensic tools.",
        tags: &["OSINT", "Username Enumeration", "Investigation", "Multi-Platform"],
        link: "https://github.com/anubhavmohandas/whoisuser",
    },
    Project {
        icon: "chart-line",
        title: "Log Analyzer - Threat Detection",
        blurb: "Security log analysis tool with automated threat detection, IP intelligence with geolocation, and support for multiple log formats including firewalls, systems, and web servers.",
        tags: &["Log Analysis", "Threat Detection", "IP Intelligence", "Security"],
        link: "https://github.com/anubhavmohandas/log-analyzer",
    },
    Project {
        icon: "bomb",
        title: "Secure Gen - Payload Framework",
        blurb: "Advanced security payload generation framework for ethical hacking. Features 15+ payload types, intelligent mutation techniques, and database-specific attack vectors.",
        tags: &["Payload Generation", "Ethical Hacking", "Security Testing", "WAF Bypass"],
        link: "https://github.com/anubhavmohandas/secure_gen",
    },
    Project {
        icon: "magnifying-glass",
        title: "Recon Scanner",
        blurb: "Advanced reconnaissance tool designed for cybersecurity researchers to perform comprehensive security assessments and network reconnaissance.",
        tags: &["Python", "Network Security", "Reconnaissance", "OSINT"],
        link: "https://github.com/anubhavmohandas/recon_scanner",
    },
    Project {
        icon: "shield-virus",
        title: "SIEM Kernel Exploit Detection",
        blurb: "Security Information and Event Management system specialized in detecting kernel-level exploits and advanced persistent threats in real-time.",
        tags: &["SIEM", "Exploit Detection", "Kernel Security", "APT"],
        link: "https://github.com/anubhavmohandas/siem-kernel-exploit-detection",
    },
    Project {
        icon: "calculator",
        title: "Enhanced CVSS Calculator",
        blurb: "Advanced Common Vulnerability Scoring System calculator with enhanced features for accurate vulnerability assessment and risk management.",
        tags: &["CVSS", "Vulnerability Assessment", "Risk Management"],
        link: "https://github.com/anubhavmohandas/Enhanced-CVSS-Calculator",
    },
    Project {
        icon: "user-shield",
        title: "AuthGuard",
        blurb: "Robust authentication and authorization security system designed to protect applications from unauthorized access with multi-layer security.",
        tags: &["Authentication", "Authorization", "Access Control"],
        link: "https://github.com/anubhavmohandas/AuthGuard",
    },
    Project {
        icon: "robot",
        title: "Jerry - Personalized Virtual AI",
        blurb: "Advanced personalized virtual AI assistant designed to provide intelligent automation, personalized interactions, and smart task management.",
        tags: &["AI Assistant", "Machine Learning", "Automation"],
        link: "https://github.com/anubhavmohandas/Jerry",
    },
    Project {
        icon: "file-alt",
        title: "Nyxine - AI Resume Maker",
        blurb: "Smart, AI-powered resume builder with privacy focus. Features ATS optimization, job description matching, and authentic experience highlighting without fluff.",
        tags: &["AI", "Resume Builder", "ATS Optimization", "Privacy-First"],
        link: "https://github.com/anubhavmohandas/Nyxine-Resume-Maker",
    },
    Project {
        icon: "globe",
        title: "Web Detection System",
        blurb: "Advanced web-based detection system for identifying security threats, malicious activities, and anomalous behavior in real-time web traffic.",
        tags: &["Web Security", "Threat Detection", "Anomaly Detection"],
        link: "https://github.com/anubhavmohandas/web_detection",
    },
];

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        icon: "terminal",
        title: "Essential Kali Linux Commands for Beginners",
        date: "February 2024",
        blurb: "Comprehensive guide to essential Kali Linux commands every cybersecurity professional should know.",
        link: "https://www.techtonichive.in/2024/02/unveiling-power-essential-kali-linux.html",
    },
    BlogPost {
        icon: "magnifying-glass-chart",
        title: "Why OSINT Matters: Exploring Cyber Intelligence",
        date: "April 2023",
        blurb: "Deep dive into Open Source Intelligence (OSINT) and its critical role in modern cybersecurity investigations.",
        link: "https://www.techtonichive.in/2023/04/why-osint-matters-exploring-cyber.html",
    },
];

pub const CONTACT_TEXT: &str = "Open for collaboration on cybersecurity research and cyber crime investigation projects. Let's secure the digital world together!";

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink { icon: "github", brand: true, label: "GitHub", href: "https://github.com/anubhavmohandas" },
    ContactLink { icon: "linkedin", brand: true, label: "LinkedIn", href: "https://www.linkedin.com/in/anubhavmohandas/" },
    ContactLink { icon: "twitter", brand: true, label: "Twitter", href: "https://x.com/anubhavmohandas" },
    ContactLink { icon: "envelope", brand: false, label: "Email", href: "mailto:anubhav.manav147@gmail.com" },
];

pub const FOOTER_LINES: &[&str] = &[
    "© 2025 Anubhav Mohandas. All rights reserved.",
    "Cybersecurity researcher & tool developer - Making the digital world safer, one investigation at a time.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_ids_are_unique() {
        for (index, item) in NAV_ITEMS.iter().enumerate() {
            for other in &NAV_ITEMS[index + 1..] {
                assert_ne!(item.id, other.id);
            }
        }
    }

    #[test]
    fn every_nav_item_has_a_caption() {
        for item in NAV_ITEMS {
            assert!(
                section_caption(item.id).is_some(),
                "missing caption for {}",
                item.id
            );
        }
    }

    #[test]
    fn captions_only_name_declared_sections() {
        let declared: Vec<&str> = NAV_ITEMS.iter().map(|item| item.id).collect();
        for (section, _) in SECTION_CAPTIONS {
            assert!(declared.contains(section), "stray caption for {section}");
        }
    }

    #[test]
    fn unknown_section_has_no_caption() {
        assert_eq!(section_caption("downloads"), None);
        assert_eq!(section_caption(""), None);
    }

    #[test]
    fn external_links_are_absolute() {
        let mut links: Vec<&str> = Vec::new();
        links.extend(PROJECTS.iter().map(|project| project.link));
        links.extend(BLOG_POSTS.iter().map(|post| post.link));
        links.extend(CONTACT_LINKS.iter().map(|contact| contact.href));
        links.push(GITHUB_PROFILE_URL);
        links.push(BLOG_HOME_URL);
        for link in links {
            assert!(
                link.starts_with("https://") || link.starts_with("mailto:"),
                "unexpected link form: {link}"
            );
        }
    }

    #[test]
    fn tool_categories_are_fully_populated() {
        assert_eq!(TOOL_CATEGORIES.len(), 9);
        for category in TOOL_CATEGORIES {
            assert_eq!(category.tools.len(), 3, "{} is short", category.title);
        }
    }

    #[test]
    fn projects_carry_tags() {
        assert_eq!(PROJECTS.len(), 11);
        for project in PROJECTS {
            assert!(
                (2..=4).contains(&project.tags.len()),
                "{} has {} tags",
                project.title,
                project.tags.len()
            );
        }
    }
}
