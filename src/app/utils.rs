// SPDX-License-Identifier: GPL-3.0

mod filters;
mod pagination;

pub use filters::filter;
pub use pagination::PaginationAction;
