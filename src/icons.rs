/// Icons the data file can refer to by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Code,
    Code2,
    Database,
    Cpu,
    GitBranch,
    Heart,
    Telescope,
    Sparkles,
    Github,
    Linkedin,
    Mail,
}

impl Icon {
    /// Maps a name from the data file to an icon, or `fallback` if unknown.
    pub fn lookup(name: &str, fallback: Icon) -> Icon {
        match name {
            "Code" => Icon::Code,
            "Code2" => Icon::Code2,
            "Database" => Icon::Database,
            "Cpu" => Icon::Cpu,
            "GitBranch" => Icon::GitBranch,
            "Heart" => Icon::Heart,
            "Telescope" => Icon::Telescope,
            "Sparkles" => Icon::Sparkles,
            "Github" => Icon::Github,
            "Linkedin" => Icon::Linkedin,
            "Mail" => Icon::Mail,
            _ => fallback,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Icon::Code => "extra-code",
            Icon::Code2 => "extra-code-2",
            Icon::Database => "extra-database",
            Icon::Cpu => "extra-cpu",
            Icon::GitBranch => "extra-git-branch",
            Icon::Heart => "extra-heart",
            Icon::Telescope => "extra-telescope",
            Icon::Sparkles => "extra-sparkles",
            Icon::Github => "devicon-github-plain",
            Icon::Linkedin => "devicon-linkedin-plain",
            Icon::Mail => "extra-email",
        }
    }
}
