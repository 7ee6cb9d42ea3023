// SPDX-License-Identifier: GPL-3.0-only

pub mod api;
pub mod error;
pub mod evolution;
pub mod loader;
pub mod resolver;

pub use api::{DataSource, PokeApi, pokemon_url};
pub use error::{DexError, FetchError, FetchStep};
pub use evolution::{flatten, stages};
pub use loader::{load_page, page_offset, try_load_page};
pub use resolver::{ResolvedDetail, lookup_evolutions, resolve_detail};
