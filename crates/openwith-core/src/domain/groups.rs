//! Named suffix groups.
//!
//! A group bundles the suffixes of one file-type family so a single
//! command can assign the same handler to all of them. Suffixes are
//! stored with their leading dot, ready to hand to the assigner.

/// A named set of file suffixes.
#[derive(Debug, Clone, Copy)]
pub struct SuffixGroup {
    pub name: &'static str,
    pub description: &'static str,
    pub suffixes: &'static [&'static str],
}

const GROUPS: &[SuffixGroup] = &[
    SuffixGroup {
        name: "code",
        description: "Popular source code files",
        suffixes: &[
            ".c", ".cpp", ".h", ".hpp", ".rs", ".go", ".py", ".rb", ".js", ".jsx", ".ts", ".tsx",
            ".java", ".kt", ".swift", ".php", ".sh", ".json", ".yaml", ".yml", ".toml", ".xml",
        ],
    },
    SuffixGroup {
        name: "text",
        description: "Plain text and markup documents",
        suffixes: &[".txt", ".md", ".rtf", ".log", ".csv", ".tsv"],
    },
    SuffixGroup {
        name: "image",
        description: "Raster and vector images",
        suffixes: &[".jpg", ".jpeg", ".png", ".gif", ".tiff", ".svg", ".webp", ".heic"],
    },
    SuffixGroup {
        name: "video",
        description: "Video containers",
        suffixes: &[".mp4", ".mov", ".avi", ".mkv", ".mpeg", ".webm"],
    },
    SuffixGroup {
        name: "audio",
        description: "Audio files",
        suffixes: &[".mp3", ".wav", ".aiff", ".m4a", ".flac", ".ogg"],
    },
    SuffixGroup {
        name: "archive",
        description: "Compressed archives",
        suffixes: &[".zip", ".gz", ".tar", ".7z", ".rar", ".bz2"],
    },
];

/// All known groups.
pub fn suffix_groups() -> &'static [SuffixGroup] {
    GROUPS
}

/// Look up a group by name (case-insensitive).
pub fn suffix_group(name: &str) -> Option<&'static SuffixGroup> {
    GROUPS.iter().find(|g| g.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_known_group() {
        let video = suffix_group("video").expect("video group");
        assert!(video.suffixes.contains(&".mp4"));
        assert!(suffix_group("VIDEO").is_some());
        assert!(suffix_group("spreadsheets").is_none());
    }

    #[test]
    fn group_suffixes_carry_a_leading_dot() {
        for group in suffix_groups() {
            for suffix in group.suffixes {
                assert!(suffix.starts_with('.'), "{} in {}", suffix, group.name);
                assert!(suffix.len() > 1, "{} in {}", suffix, group.name);
            }
        }
    }

    #[test]
    fn group_names_are_unique() {
        let mut names: Vec<&str> = suffix_groups().iter().map(|g| g.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), suffix_groups().len());
    }
}
