// SPDX-License-Identifier: GPL-3.0

/// Identifies an action related to Pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationAction {
    Next,
    Back,
}

impl PaginationAction {
    /// The page this action leads to, clamped to `1..=total_pages`
    pub fn apply(self, current: u32, total_pages: u32) -> u32 {
        let total_pages = total_pages.max(1);
        match self {
            PaginationAction::Next => current.saturating_add(1).min(total_pages),
            PaginationAction::Back => current.saturating_sub(1).max(1),
        }
    }
}
