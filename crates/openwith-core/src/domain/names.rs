//! Human-readable names for common content-type identifiers.
//!
//! Used for display only; unknown identifiers fall back to the raw string.

/// Friendly display name for a content-type identifier, if known.
pub fn friendly_name(uti: &str) -> Option<&'static str> {
    Some(match uti {
        // Video
        "public.mpeg-4" | "public.mp4" => "MPEG-4 Video",
        "public.mpeg" => "MPEG Video",
        "public.avi" => "AVI Video",
        "com.apple.quicktime-movie" | "public.mov" => "QuickTime Movie",

        // Audio
        "public.mp3" => "MP3 Audio",
        "com.microsoft.waveform-audio" | "public.wav" => "WAV Audio",
        "public.aiff-audio" => "AIFF Audio",
        "com.apple.m4a-audio" => "M4A Audio",
        "public.audio" => "Audio",

        // Images
        "public.jpeg" => "JPEG Image",
        "public.png" => "PNG Image",
        "com.compuserve.gif" => "GIF Image",
        "public.svg-image" => "SVG Image",
        "public.tiff" => "TIFF Image",
        "public.heic" => "HEIC Image",

        // Documents
        "public.plain-text" => "Plain Text",
        "public.text" => "Text",
        "public.html" => "HTML Document",
        "public.xml" => "XML Document",
        "public.json" => "JSON Document",
        "com.adobe.pdf" => "PDF Document",
        "com.microsoft.word.doc" => "Word Document",
        "org.openxmlformats.wordprocessingml.document" => "Word Document",
        "public.rtf" => "Rich Text Document",
        "net.daringfireball.markdown" | "public.markdown" => "Markdown Document",

        // Source code
        "public.python-script" => "Python Source",
        "com.netscape.javascript-source" => "JavaScript Source",
        "public.ruby-script" => "Ruby Source",
        "public.go-source" => "Go Source",
        "public.rust-source" | "dyn.ah62d4rv4ge81e5pe" => "Rust Source",
        "public.c-source" => "C Source",
        "public.c-plus-plus-source" => "C++ Source",
        "public.swift-source" => "Swift Source",
        "com.sun.java-source" => "Java Source",
        "public.shell-script" => "Shell Script",
        "public.yaml" => "YAML Document",

        // Archives
        "public.zip-archive" => "ZIP Archive",
        "org.gnu.gnu-zip-archive" => "GZIP Archive",
        "public.tar-archive" => "TAR Archive",
        "org.7-zip.7-zip-archive" => "7Z Archive",
        "com.rarlab.rar-archive" => "RAR Archive",

        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_identifiers() {
        assert_eq!(friendly_name("com.adobe.pdf"), Some("PDF Document"));
        assert_eq!(friendly_name("public.rust-source"), Some("Rust Source"));
        assert_eq!(friendly_name("com.example.proprietary"), None);
    }
}
