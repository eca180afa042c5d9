//! Formatting utilities for terminal output

/// Bar showing how much of a bucket has been found
///
/// Integer arithmetic on purpose: counts are small and exact. A found
/// count above the total (corrupt input) clamps to a full bar.
#[must_use]
pub fn completion_bar(found: usize, total: usize, width: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        (found * width) / total
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_empty() {
        assert_eq!(completion_bar(0, 10, 10), "░░░░░░░░░░");
    }

    #[test]
    fn bar_full() {
        assert_eq!(completion_bar(10, 10, 10), "██████████");
    }

    #[test]
    fn bar_half() {
        assert_eq!(completion_bar(5, 10, 10), "█████░░░░░");
    }

    #[test]
    fn bar_overfull_clamps() {
        assert_eq!(completion_bar(15, 10, 10), "██████████");
    }

    #[test]
    fn bar_zero_total_stays_empty() {
        assert_eq!(completion_bar(3, 0, 10), "░░░░░░░░░░");
    }
}
