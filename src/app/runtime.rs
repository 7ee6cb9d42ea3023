// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use tokio::{sync::mpsc, task::AbortHandle};

use crate::{
    app::{Effect, Message},
    core::{DataSource, load_page, resolve_detail},
};

/// Runs [`Effect`]s as tokio tasks and posts their results back as [`Message`]s.
///
/// At most one page load and one detail resolution are in flight: starting a
/// new one aborts the previous task of the same kind.
pub struct Dispatcher<S> {
    source: Arc<S>,
    max_concurrent: usize,
    sender: mpsc::UnboundedSender<Message>,
    page_task: Option<AbortHandle>,
    detail_task: Option<AbortHandle>,
}

impl<S> Dispatcher<S>
where
    S: DataSource + 'static,
{
    pub fn new(
        source: Arc<S>,
        max_concurrent: usize,
    ) -> (Self, mpsc::UnboundedReceiver<Message>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let dispatcher = Self {
            source,
            max_concurrent: max_concurrent.max(1),
            sender,
            page_task: None,
            detail_task: None,
        };

        (dispatcher, receiver)
    }

    pub fn dispatch(&mut self, effect: Effect) {
        match effect {
            Effect::LoadPage {
                generation,
                page,
                page_size,
            } => {
                abort(&mut self.page_task);

                let source = Arc::clone(&self.source);
                let sender = self.sender.clone();
                let max_concurrent = self.max_concurrent;

                log::debug!("Loading page {page} (generation {generation})");
                let handle = tokio::spawn(async move {
                    let summaries =
                        load_page(source.as_ref(), page, page_size, max_concurrent).await;
                    // the receiver is gone once the front end exits
                    let _ = sender.send(Message::PageLoaded {
                        generation,
                        summaries,
                    });
                });
                self.page_task = Some(handle.abort_handle());
            }
            Effect::ResolveDetail { generation, url } => {
                abort(&mut self.detail_task);

                let source = Arc::clone(&self.source);
                let sender = self.sender.clone();
                let max_concurrent = self.max_concurrent;

                log::debug!("Resolving {url} (generation {generation})");
                let handle = tokio::spawn(async move {
                    let result = resolve_detail(source.as_ref(), &url, max_concurrent).await;
                    let _ = sender.send(Message::DetailResolved { generation, result });
                });
                self.detail_task = Some(handle.abort_handle());
            }
            Effect::CancelDetail => abort(&mut self.detail_task),
        }
    }
}

impl<S> Drop for Dispatcher<S> {
    // pending requests must not outlive the front end
    fn drop(&mut self) {
        abort(&mut self.page_task);
        abort(&mut self.detail_task);
    }
}

fn abort(task: &mut Option<AbortHandle>) {
    if let Some(handle) = task.take() {
        if !handle.is_finished() {
            log::trace!("Aborting a pending request");
        }
        handle.abort();
    }
}
