//! Built-in sample dataset. This is fixture data owned by the catalog
//! store, standing in for a real backing database.

use super::Catalog;
use crate::domain::{Category, Feature, OpenSourceAlternative, Platform, ProprietarySoftware};
use chrono::Utc;

pub fn seed_catalog() -> Catalog {
    Catalog::new(seed_categories(), seed_proprietary(), seed_alternatives())
}

fn category(id: &str, name: &str, description: &str, icon: &str) -> Category {
    let now = Utc::now();
    Category {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        slug: id.to_string(),
        parent_id: None,
        created_at: now,
        updated_at: now,
    }
}

fn seed_categories() -> Vec<Category> {
    vec![
        category(
            "office-suites",
            "Office Suites",
            "Word processors, spreadsheets, and presentation software",
            "FileText",
        ),
        category(
            "media-players",
            "Media Players",
            "Audio and video playback software",
            "Play",
        ),
        category(
            "graphic-design",
            "Graphic Design",
            "Image editing and design tools",
            "Palette",
        ),
        category(
            "development",
            "Development Tools",
            "IDEs, text editors, and development utilities",
            "Code",
        ),
        category(
            "communication",
            "Communication",
            "Email clients, messaging, and video conferencing",
            "MessageCircle",
        ),
    ]
}

fn proprietary(
    id: &str,
    name: &str,
    description: &str,
    website: &str,
    category_id: &str,
    popularity: f64,
) -> ProprietarySoftware {
    let now = Utc::now();
    ProprietarySoftware {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        website: website.to_string(),
        logo: None,
        category_id: category_id.to_string(),
        popularity,
        created_at: now,
        updated_at: now,
    }
}

fn seed_proprietary() -> Vec<ProprietarySoftware> {
    vec![
        proprietary(
            "microsoft-office",
            "Microsoft Office",
            "Microsoft's productivity suite including Word, Excel, PowerPoint",
            "https://office.microsoft.com",
            "office-suites",
            95.0,
        ),
        proprietary(
            "spotify",
            "Spotify",
            "Music streaming service with premium features",
            "https://spotify.com",
            "media-players",
            90.0,
        ),
        proprietary(
            "photoshop",
            "Adobe Photoshop",
            "Professional image editing and graphic design software",
            "https://adobe.com/products/photoshop",
            "graphic-design",
            88.0,
        ),
        proprietary(
            "sublime-text",
            "Sublime Text",
            "Sophisticated text editor for code, markup and prose",
            "https://sublimetext.com",
            "development",
            75.0,
        ),
    ]
}

fn platform(name: &str, icon: &str) -> Platform {
    Platform {
        name: name.to_string(),
        icon: icon.to_string(),
        supported: true,
    }
}

fn desktop_platforms() -> Vec<Platform> {
    vec![
        platform("Windows", "Monitor"),
        platform("macOS", "Apple"),
        platform("Linux", "Tux"),
    ]
}

fn feature(name: &str, description: &str) -> Feature {
    Feature {
        name: name.to_string(),
        description: description.to_string(),
        available: true,
        notes: None,
    }
}

struct AltSeed<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    website: &'a str,
    repository: &'a str,
    category_id: &'a str,
    proprietary_software_id: &'a str,
    license: &'a str,
    platforms: Vec<Platform>,
    languages: &'a [&'a str],
    features: Vec<Feature>,
    pros: &'a [&'a str],
    cons: &'a [&'a str],
    stars: u64,
    forks: u64,
    contributors: u32,
    rating: f64,
    review_count: u64,
    bookmark_count: u64,
}

fn alternative(seed: AltSeed) -> OpenSourceAlternative {
    let now = Utc::now();
    OpenSourceAlternative {
        id: seed.id.to_string(),
        name: seed.name.to_string(),
        description: seed.description.to_string(),
        website: seed.website.to_string(),
        repository: Some(seed.repository.to_string()),
        logo: None,
        screenshots: Vec::new(),
        proprietary_software_id: seed.proprietary_software_id.to_string(),
        category_id: seed.category_id.to_string(),
        license: seed.license.to_string(),
        platforms: seed.platforms,
        languages: seed.languages.iter().map(|s| s.to_string()).collect(),
        last_updated: now,
        features: seed.features,
        pros: seed.pros.iter().map(|s| s.to_string()).collect(),
        cons: seed.cons.iter().map(|s| s.to_string()).collect(),
        stars: Some(seed.stars),
        forks: Some(seed.forks),
        contributors: Some(seed.contributors),
        rating: seed.rating,
        review_count: seed.review_count,
        bookmark_count: seed.bookmark_count,
        created_at: now,
        updated_at: now,
    }
}

fn seed_alternatives() -> Vec<OpenSourceAlternative> {
    vec![
        alternative(AltSeed {
            id: "libreoffice",
            name: "LibreOffice",
            description: "Free and open source office suite with Writer, Calc, Impress, and more",
            website: "https://libreoffice.org",
            repository: "https://github.com/LibreOffice/core",
            category_id: "office-suites",
            proprietary_software_id: "microsoft-office",
            license: "MPL-2.0",
            platforms: desktop_platforms(),
            languages: &["C++", "Java", "Python"],
            features: vec![
                feature("Word Processing", "Full-featured word processor"),
                feature("Spreadsheets", "Advanced spreadsheet application"),
                feature("Presentations", "Presentation creation tool"),
                feature("Database", "Database management system"),
            ],
            pros: &[
                "Completely free and open source",
                "Cross-platform compatibility",
                "Regular updates and community support",
                "Extensive format support",
            ],
            cons: &[
                "Interface may feel dated compared to modern alternatives",
                "Some advanced features may be missing",
                "Large file size",
            ],
            stars: 1500,
            forks: 300,
            contributors: 200,
            rating: 4.2,
            review_count: 1250,
            bookmark_count: 890,
        }),
        alternative(AltSeed {
            id: "audacious",
            name: "Audacious",
            description: "Lightweight audio player with extensive format support",
            website: "https://audacious-media-player.org",
            repository: "https://github.com/audacious-media-player/audacious",
            category_id: "media-players",
            proprietary_software_id: "spotify",
            license: "BSD-2-Clause",
            platforms: desktop_platforms(),
            languages: &["C++", "C"],
            features: vec![
                feature("Audio Playback", "High-quality audio playback"),
                feature("Playlist Support", "Create and manage playlists"),
                feature("Plugin System", "Extensible with plugins"),
                feature("Streaming", "Internet radio streaming"),
            ],
            pros: &[
                "Lightweight and fast",
                "Excellent audio quality",
                "Highly customizable",
                "Low resource usage",
            ],
            cons: &[
                "No built-in music library",
                "Limited streaming services integration",
                "Basic interface",
            ],
            stars: 800,
            forks: 150,
            contributors: 50,
            rating: 4.0,
            review_count: 320,
            bookmark_count: 180,
        }),
        alternative(AltSeed {
            id: "vscode",
            name: "Visual Studio Code",
            description: "Free, open source code editor with excellent extensions and debugging support",
            website: "https://code.visualstudio.com",
            repository: "https://github.com/microsoft/vscode",
            category_id: "development",
            proprietary_software_id: "sublime-text",
            license: "MIT",
            platforms: {
                let mut p = desktop_platforms();
                p.push(platform("Web", "Globe"));
                p
            },
            languages: &["TypeScript", "JavaScript", "C++"],
            features: vec![
                feature("IntelliSense", "Smart code completion and suggestions"),
                feature("Debugging", "Built-in debugger with breakpoints"),
                feature("Extensions", "Rich extension ecosystem"),
                feature("Git Integration", "Built-in Git support"),
            ],
            pros: &[
                "Free and open source",
                "Excellent extension ecosystem",
                "Great debugging tools",
                "Cross-platform support",
                "Regular updates",
            ],
            cons: &[
                "Can be resource intensive",
                "Large download size",
                "Microsoft-owned (though open source)",
            ],
            stars: 150_000,
            forks: 26_000,
            contributors: 1000,
            rating: 4.8,
            review_count: 5000,
            bookmark_count: 12_000,
        }),
        alternative(AltSeed {
            id: "vim",
            name: "Vim",
            description: "Highly configurable text editor built for efficient text editing",
            website: "https://vim.org",
            repository: "https://github.com/vim/vim",
            category_id: "development",
            proprietary_software_id: "sublime-text",
            license: "Vim License",
            platforms: desktop_platforms(),
            languages: &["C", "Vim script"],
            features: vec![
                feature("Modal Editing", "Different modes for different editing tasks"),
                feature("Extensibility", "Highly customizable with plugins"),
                feature("Keyboard Shortcuts", "Efficient keyboard-driven editing"),
                feature("Syntax Highlighting", "Support for many programming languages"),
            ],
            pros: &[
                "Extremely fast and lightweight",
                "Powerful keyboard shortcuts",
                "Highly customizable",
                "Available everywhere",
                "Large plugin ecosystem",
            ],
            cons: &[
                "Steep learning curve",
                "Not beginner-friendly",
                "Modal editing can be confusing",
                "Outdated interface",
            ],
            stars: 30_000,
            forks: 5000,
            contributors: 200,
            rating: 4.3,
            review_count: 2000,
            bookmark_count: 5000,
        }),
        alternative(AltSeed {
            id: "emacs",
            name: "GNU Emacs",
            description: "Extensible, customizable text editor with Lisp-based extension language",
            website: "https://gnu.org/software/emacs",
            repository: "https://git.savannah.gnu.org/cgit/emacs.git",
            category_id: "development",
            proprietary_software_id: "sublime-text",
            license: "GPL-3.0",
            platforms: desktop_platforms(),
            languages: &["C", "Emacs Lisp"],
            features: vec![
                feature("Lisp Extensions", "Extensible with Emacs Lisp"),
                feature("Org Mode", "Powerful note-taking and organization"),
                feature("Magit", "Excellent Git interface"),
                feature("Multiple Buffers", "Work with multiple files simultaneously"),
            ],
            pros: &[
                "Highly extensible",
                "Powerful Org mode",
                "Excellent Git integration",
                "Cross-platform",
                "Free software",
            ],
            cons: &[
                "Complex for beginners",
                "Lisp learning curve",
                "Can be slow with many extensions",
                "Memory usage can be high",
            ],
            stars: 2000,
            forks: 500,
            contributors: 100,
            rating: 4.1,
            review_count: 800,
            bookmark_count: 1500,
        }),
    ]
}
