//! Authored-post content store.
//!
//! The single source of truth for posts created through the publish path.
//! Constructed once by the composition root from a [`JsonStorage`] backend;
//! construction loads whatever was persisted by earlier runs. Every append
//! persists the full sequence and synchronously notifies subscribers, so a
//! listing rendered elsewhere in the process reflects the new post without
//! a refresh.
//!
//! # Thread Safety
//!
//! Uses `RwLock` so concurrent readers never block each other; in practice
//! there is exactly one logical writer (the publish command) and reads are
//! point-in-time snapshots.

use parking_lot::RwLock;

use crate::{
    data::{persist::JsonStorage, types::Post},
    log,
    search::search,
};

/// Synchronous store observer. Called with a snapshot of the full post
/// sequence after every append.
pub type Listener = Box<dyn Fn(&[Post]) + Send + Sync>;

/// Reactive container for authored posts.
pub struct ContentStore {
    posts: RwLock<Vec<Post>>,
    listeners: RwLock<Vec<Listener>>,
    storage: JsonStorage,
}

impl ContentStore {
    /// Open the store on a storage backend.
    ///
    /// Loads the persisted sequence eagerly; a fresh or unreadable backend
    /// yields an empty store (the backend already logged why).
    pub fn open(storage: JsonStorage) -> Self {
        let posts = storage.load();
        Self {
            posts: RwLock::new(posts),
            listeners: RwLock::new(Vec::new()),
            storage,
        }
    }

    /// Append a post, persist the full sequence and notify subscribers.
    ///
    /// Append-only: no dedup, no uniqueness check beyond what the caller
    /// supplies, insertion order preserved. Persistence is best-effort:
    /// a failed write keeps the in-memory append and is only logged.
    /// Once this returns, every subsequent read observes the new post.
    pub fn add_post(&self, post: Post) {
        let snapshot = {
            let mut posts = self.posts.write();
            posts.push(post);
            posts.clone()
        };

        if let Err(err) = self.storage.save(&snapshot) {
            log!("store"; "failed to persist posts: {err}");
        }

        for listener in self.listeners.read().iter() {
            listener(&snapshot);
        }
    }

    /// Search the authored posts only.
    ///
    /// Seed posts are merged by the caller (see `assemble::merged_corpus`),
    /// not here. Empty query returns every authored post in order.
    pub fn search_posts(&self, query: &str) -> Vec<Post> {
        let posts = self.posts.read();
        search(query, posts.as_slice())
            .into_iter()
            .cloned()
            .collect()
    }

    /// Read-only copy of the current sequence.
    pub fn snapshot(&self) -> Vec<Post> {
        self.posts.read().clone()
    }

    /// Register an observer for subsequent appends.
    pub fn subscribe(&self, listener: Listener) {
        self.listeners.write().push(listener);
    }

    /// Number of authored posts.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.posts.read().len()
    }

    /// Whether any post has been authored yet.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.posts.read().is_empty()
    }
}
