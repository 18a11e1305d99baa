// tests/support/mocks/post_repo.rs
use async_trait::async_trait;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use inkpost::application::ports::time::Clock;
use inkpost::domain::errors::{DomainError, DomainResult};
use inkpost::domain::post::{NewPost, Post, PostId, PostRepository, PostSlug, sort_by_recency};

use super::time::SteppingClock;

struct Store {
    posts: Vec<Post>,
    next_id: i64,
}

/// Store double that honours the repository contract: ids and timestamps are
/// assigned on insert, slugs are unique and listings use recency order.
pub struct InMemoryPostRepo {
    store: Mutex<Store>,
    clock: Arc<dyn Clock>,
    inserts: AtomicUsize,
}

impl Default for InMemoryPostRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPostRepo {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SteppingClock::default()))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Mutex::new(Store {
                posts: Vec::new(),
                next_id: 1,
            }),
            clock,
            inserts: AtomicUsize::new(0),
        }
    }

    /// Seeds already-stored posts, bypassing id and timestamp assignment.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let repo = Self::new();
        {
            let mut store = repo.store.lock().unwrap();
            let max_id = posts.iter().map(|p| i64::from(p.id)).max().unwrap_or(0);
            store.posts = posts;
            store.next_id = max_id + 1;
        }
        repo
    }

    /// Number of insert attempts, successful or not.
    pub fn insert_calls(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.store.lock().unwrap().posts.len()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepo {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        let mut store = self.store.lock().unwrap();
        if store.posts.iter().any(|p| p.slug == post.slug) {
            return Err(DomainError::conflict("slug already exists"));
        }

        let now = self.clock.now();
        let stored = Post {
            id: PostId::new(store.next_id)?,
            title: post.title,
            slug: post.slug,
            content_md: post.content_md,
            content_html: post.content_html,
            summary: post.summary,
            status: post.status,
            published_at: post.published_at,
            created_at: now,
            updated_at: now,
        };
        store.next_id += 1;
        store.posts.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: PostId) -> DomainResult<Post> {
        let store = self.store.lock().unwrap();
        store
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("post {id} not found")))
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Post> {
        let store = self.store.lock().unwrap();
        store
            .posts
            .iter()
            .find(|p| &p.slug == slug)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("post `{slug}` not found")))
    }

    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<Post>> {
        let mut posts = self.store.lock().unwrap().posts.clone();
        sort_by_recency(&mut posts);
        posts.truncate(limit as usize);
        Ok(posts)
    }
}

/// Every operation fails the way an unreachable database would.
#[derive(Default)]
pub struct FailingPostRepo;

#[async_trait]
impl PostRepository for FailingPostRepo {
    async fn insert(&self, _post: NewPost) -> DomainResult<Post> {
        Err(DomainError::persistence("connection refused"))
    }

    async fn find_by_id(&self, _id: PostId) -> DomainResult<Post> {
        Err(DomainError::persistence("connection refused"))
    }

    async fn find_by_slug(&self, _slug: &PostSlug) -> DomainResult<Post> {
        Err(DomainError::persistence("connection refused"))
    }

    async fn list_recent(&self, _limit: u32) -> DomainResult<Vec<Post>> {
        Err(DomainError::persistence("connection refused"))
    }
}

/// Wraps another repository and stalls every listing for `delay`.
pub struct SlowPostRepo {
    inner: InMemoryPostRepo,
    delay: Duration,
}

impl SlowPostRepo {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: InMemoryPostRepo::new(),
            delay,
        }
    }
}

#[async_trait]
impl PostRepository for SlowPostRepo {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        self.inner.insert(post).await
    }

    async fn find_by_id(&self, id: PostId) -> DomainResult<Post> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Post> {
        self.inner.find_by_slug(slug).await
    }

    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<Post>> {
        tokio::time::sleep(self.delay).await;
        self.inner.list_recent(limit).await
    }
}
