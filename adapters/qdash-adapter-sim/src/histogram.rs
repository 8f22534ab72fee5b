//! Plain-text histogram rendering of measurement counts.

use qdash_hal::{Artifact, Counts};

/// Width of the longest bar, in characters.
const BAR_WIDTH: u64 = 40;

/// Render one line per outcome: bitstring, bar scaled to the largest count,
/// then the count.
///
/// ```text
/// 00 | ######################################## 515
/// 11 | #######################################  509
/// ```
pub fn render(counts: &Counts) -> Artifact {
    let max = counts.iter().map(|(_, c)| c).max().unwrap_or(0);
    let mut out = String::new();

    for (bits, count) in counts.iter() {
        let len = if max == 0 { 0 } else { count * BAR_WIDTH / max };
        out.push_str(&format!(
            "{bits} | {:<width$} {count}\n",
            "#".repeat(len as usize),
            width = BAR_WIDTH as usize
        ));
    }

    Artifact::text(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_scales_to_largest() {
        let counts: Counts = [("00", 100), ("11", 50)].into_iter().collect();
        let artifact = render(&counts);

        assert_eq!(artifact.media_type, "text/plain");
        let lines: Vec<&str> = artifact.data.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("00 | "));
        assert_eq!(lines[0].matches('#').count(), 40);
        assert_eq!(lines[1].matches('#').count(), 20);
        assert!(lines[1].ends_with(" 50"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&Counts::new()).data, "");
    }
}
