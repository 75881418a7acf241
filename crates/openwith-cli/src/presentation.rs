//! Shared output formatting helpers.

/// Truncate a string to `max_len` characters, appending `...` when cut.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a `=` separator line of the given width.
pub fn print_separator(len: usize) {
    println!("{}", "=".repeat(len));
}

/// Print the recommendation banner and entries.
pub fn print_recommendations(recommendations: &[String]) {
    let banner = format!("{0} Recommended applications {0}", "=".repeat(10));
    println!("{banner}");
    if recommendations.is_empty() {
        println!("No recommended applications");
    } else {
        for entry in recommendations {
            println!("{entry}");
        }
    }
    print_separator(banner.len());
}
