// SPDX-License-Identifier: GPL-3.0-only

use crate::{
    config::Config,
    core::{DexError, ResolvedDetail},
    entities::PokemonSummary,
};

pub mod runtime;
pub mod utils;
pub mod view;

pub use utils::{PaginationAction, filter};

/// Identifies the status of the list page
#[derive(Debug, Clone, PartialEq)]
pub enum ListStatus {
    Loading,
    Loaded(Vec<PokemonSummary>),
}

/// Identifies the status of the details view
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Loading,
    Loaded(Box<ResolvedDetail>),
    Failed(String),
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }
}

/// Snapshot of everything the front end shows.
///
/// Never mutated in place, [`update`] derives the next snapshot from the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub page: u32,
    pub total_pages: u32,
    pub page_size: usize,
    pub list: ListStatus,
    pub search: String,
    pub modal: Modal,
    page_generation: u64,
    detail_generation: u64,
}

#[derive(Debug)]
pub enum Message {
    Paginate(PaginationAction),
    GoTo(u32),
    Reload,
    PageLoaded {
        generation: u64,
        summaries: Vec<PokemonSummary>,
    },
    Search(String),
    /// Opens the n-th (0-based) card of the visible list
    OpenCard(usize),
    /// Opens the details at a detail url
    Open(String),
    DetailResolved {
        generation: u64,
        result: Result<ResolvedDetail, DexError>,
    },
    Close,
}

/// Work the runtime has to perform after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadPage {
        generation: u64,
        page: u32,
        page_size: usize,
    },
    ResolveDetail {
        generation: u64,
        url: String,
    },
    /// Discards whatever detail request is still pending
    CancelDetail,
}

impl ViewState {
    /// Initial state on `page` and the load that populates it
    pub fn new(config: &Config, page: u32) -> (Self, Effect) {
        let total_pages = config.total_pages();
        let state = Self {
            page: page.clamp(1, total_pages),
            total_pages,
            page_size: config.items_per_page.max(1),
            list: ListStatus::Loading,
            search: String::new(),
            modal: Modal::Closed,
            page_generation: 0,
            detail_generation: 0,
        };

        state.load_page(state.page)
    }

    /// The loaded Pokémon matching the search text, in index order
    pub fn visible(&self) -> Vec<PokemonSummary> {
        match &self.list {
            ListStatus::Loading => Vec::new(),
            ListStatus::Loaded(summaries) => filter(summaries, &self.search),
        }
    }

    pub fn page_generation(&self) -> u64 {
        self.page_generation
    }

    pub fn detail_generation(&self) -> u64 {
        self.detail_generation
    }

    fn load_page(&self, page: u32) -> (Self, Effect) {
        let generation = self.page_generation.wrapping_add(1);
        let next = Self {
            page,
            list: ListStatus::Loading,
            page_generation: generation,
            ..self.clone()
        };
        let effect = Effect::LoadPage {
            generation,
            page,
            page_size: next.page_size,
        };

        (next, effect)
    }

    fn open(&self, url: String) -> (Self, Option<Effect>) {
        let generation = self.detail_generation.wrapping_add(1);
        let next = Self {
            modal: Modal::Loading,
            detail_generation: generation,
            ..self.clone()
        };

        (next, Some(Effect::ResolveDetail { generation, url }))
    }
}

/// Pure transition function of the front end
pub fn update(state: &ViewState, message: Message) -> (ViewState, Option<Effect>) {
    match message {
        Message::Paginate(action) => {
            let page = action.apply(state.page, state.total_pages);
            if page == state.page {
                return (state.clone(), None);
            }
            let (next, effect) = state.load_page(page);
            (next, Some(effect))
        }
        Message::GoTo(page) => {
            let page = page.clamp(1, state.total_pages);
            if page == state.page && state.list != ListStatus::Loading {
                return (state.clone(), None);
            }
            let (next, effect) = state.load_page(page);
            (next, Some(effect))
        }
        Message::Reload => {
            let (next, effect) = state.load_page(state.page);
            (next, Some(effect))
        }
        Message::PageLoaded {
            generation,
            summaries,
        } => {
            if generation != state.page_generation {
                log::debug!(
                    "Dropping stale page (generation {generation}, current {})",
                    state.page_generation
                );
                return (state.clone(), None);
            }
            let next = ViewState {
                list: ListStatus::Loaded(summaries),
                ..state.clone()
            };
            (next, None)
        }
        Message::Search(search) => {
            let next = ViewState {
                search,
                ..state.clone()
            };
            (next, None)
        }
        Message::OpenCard(index) => match state.visible().into_iter().nth(index) {
            Some(pokemon) => state.open(pokemon.detail_url),
            None => (state.clone(), None),
        },
        Message::Open(url) => state.open(url),
        Message::DetailResolved { generation, result } => {
            if generation != state.detail_generation || !state.modal.is_open() {
                log::debug!("Dropping stale details (generation {generation})");
                return (state.clone(), None);
            }
            let modal = match result {
                Ok(resolved) => Modal::Loaded(Box::new(resolved)),
                Err(e) => {
                    log::warn!("{e}");
                    Modal::Failed(e.to_string())
                }
            };
            let next = ViewState {
                modal,
                ..state.clone()
            };
            (next, None)
        }
        Message::Close => {
            if !state.modal.is_open() {
                return (state.clone(), None);
            }
            let next = ViewState {
                modal: Modal::Closed,
                detail_generation: state.detail_generation.wrapping_add(1),
                ..state.clone()
            };
            (next, Some(Effect::CancelDetail))
        }
    }
}
