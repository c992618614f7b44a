// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/// Counts derived from the task list at one point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
    pub uncompleted: usize,
}

impl TaskSummary {
    pub fn new(total: usize, completed: usize) -> Self {
        debug_assert!(completed <= total);
        Self { total, completed, uncompleted: total - completed }
    }

    /// Share of completed tasks in `[0, 1]`; an empty list counts as `0`.
    pub fn progress_fraction(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }

        self.completed as f32 / self.total as f32
    }

    /// Progress as a whole percentage, rounded down.
    pub fn percent(&self) -> i32 {
        if self.total == 0 {
            return 0;
        }

        (self.completed * 100 / self.total) as i32
    }

    pub fn headline(&self) -> String {
        match self.uncompleted {
            0 => "All done. Time to take a break.".into(),
            1 => "You have 1 task to complete".into(),
            n => format!("You have {n} tasks to complete"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let summary = TaskSummary::new(0, 0);

        assert_eq!(summary.uncompleted, 0);
        assert_eq!(summary.progress_fraction(), 0.0);
        assert_eq!(summary.percent(), 0);
    }

    #[test]
    fn test_progress() {
        let summary = TaskSummary::new(6, 5);

        assert_eq!(summary.uncompleted, 1);
        assert!((summary.progress_fraction() - 5.0 / 6.0).abs() < 1e-6);
        assert_eq!(summary.percent(), 83);
        assert_eq!(TaskSummary::new(6, 6).progress_fraction(), 1.0);
        assert_eq!(TaskSummary::new(6, 6).percent(), 100);
    }

    #[test]
    fn test_progress_in_range() {
        for total in 0..20 {
            for completed in 0..=total {
                let summary = TaskSummary::new(total, completed);
                let progress = summary.progress_fraction();

                assert!((0.0..=1.0).contains(&progress), "{summary:?}: {progress}");
                assert!((0..=100).contains(&summary.percent()));
                assert_eq!(summary.completed + summary.uncompleted, summary.total);
            }
        }
    }

    #[test]
    fn test_headline() {
        assert_eq!(TaskSummary::new(6, 1).headline(), "You have 5 tasks to complete");
        assert_eq!(TaskSummary::new(6, 5).headline(), "You have 1 task to complete");
        assert_eq!(TaskSummary::new(6, 6).headline(), "All done. Time to take a break.");
    }
}
