//! FAQ Screen Controller
//!
//! Owns the FAQ cache for one screen session and turns each operation's
//! outcome into a toast plus a store refresh.

use std::rc::Rc;

use faq_core::{FaqCache, FaqDraft, FaqError, FaqId, HttpFaqStore};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::store::{
    store_begin_load, store_close_editor, store_draft_fields, store_finish_load,
    store_selected_id, store_sync, FaqScreenState, FaqScreenStore,
};

type Cache = FaqCache<HttpFaqStore>;

#[derive(Clone, Copy)]
pub struct FaqController {
    cache: StoredValue<Rc<Cache>, LocalStorage>,
    store: FaqScreenStore,
    ctx: AppContext,
}

impl FaqController {
    pub fn new(ctx: AppContext) -> Self {
        let store = HttpFaqStore::new(ctx.config().faq_api_base);
        Self {
            cache: StoredValue::new_local(Rc::new(FaqCache::new(store))),
            store: FaqScreenStore::new(FaqScreenState::default()),
            ctx,
        }
    }

    pub fn store(&self) -> FaqScreenStore {
        self.store
    }

    /// Copy the cache into the store after a round trip settles
    fn sync(&self, cache: &Cache) {
        store_sync(&self.store, cache.snapshot(), cache.state());
    }

    fn report(&self, err: &FaqError) {
        self.ctx.notify_error(err.user_message());
    }

    /// Ignored while a previous load is still in flight
    pub fn load(&self) {
        if !store_begin_load(&self.store) {
            log::debug!("[FAQ] Load already in flight");
            return;
        }
        let this = *self;
        let cache = self.cache.get_value();
        spawn_local(async move {
            if let Err(e) = cache.load().await {
                this.report(&e);
            }
            this.sync(&cache);
            store_finish_load(&this.store);
        });
    }

    /// Create or update, depending on whether an entry is selected
    pub fn submit(&self) {
        let (question, answer) = store_draft_fields(&self.store);
        let draft = match FaqDraft::new(question, answer) {
            Ok(draft) => draft,
            Err(e) => {
                self.report(&e);
                return;
            }
        };
        let selected = store_selected_id(&self.store);

        let this = *self;
        let cache = self.cache.get_value();
        spawn_local(async move {
            let result = match selected {
                Some(id) => cache.update(&id, draft).await,
                None => cache.create(draft).await,
            };
            match result {
                Ok(notice) => {
                    this.ctx.notify_success(notice.message());
                    store_close_editor(&this.store);
                }
                Err(e) => this.report(&e),
            }
            this.sync(&cache);
        });
    }

    pub fn delete(&self, id: FaqId) {
        let this = *self;
        let cache = self.cache.get_value();
        spawn_local(async move {
            match cache.delete(&id).await {
                Ok(notice) => this.ctx.notify_success(notice.message()),
                Err(e) => this.report(&e),
            }
            this.sync(&cache);
        });
    }
}
