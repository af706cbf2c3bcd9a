//! Shared fixtures for the navigation integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use tokio::sync::mpsc;

use easyroute::config::{RouteConfig, RouterSettings};
use easyroute::navigation::{NavigationOutcome, Router, RouterBuilder, Trigger};
use easyroute::Window;

pub const HOME: usize = 0;
pub const USER: usize = 1;
pub const NEW_USER: usize = 2;
pub const SEARCH: usize = 3;

/// Home, a parameterized user route, a literal route overlapping it, search.
pub fn sample_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::new("/", "Home").named("home"),
        RouteConfig::new("/users/:id", "UserDetail").named("user"),
        RouteConfig::new("/users/new", "UserCreate").named("new-user"),
        RouteConfig::new("/search", "Search").named("search"),
    ]
}

pub fn settings(mode: &str, base: &str) -> RouterSettings {
    RouterSettings {
        mode: Some(mode.to_string()),
        base: base.to_string(),
        routes: sample_routes(),
        ..Default::default()
    }
}

/// A router plus the two streams a test wants to watch.
pub struct Harness {
    pub router: Router,
    pub window: Arc<Window>,
    pub triggers: mpsc::UnboundedReceiver<Trigger>,
    pub commits: mpsc::UnboundedReceiver<Option<usize>>,
}

impl Harness {
    pub fn new(settings: RouterSettings, url: &str) -> Self {
        Self::with(Router::builder(settings), url)
    }

    /// Build from a builder that may already carry hooks; the commit
    /// notifier is installed here.
    pub fn with(builder: RouterBuilder, url: &str) -> Self {
        let (window, triggers) = Window::open(url).unwrap();
        let (commit_tx, commits) = mpsc::unbounded_channel();
        let router = builder
            .on_commit(move |index| {
                let _ = commit_tx.send(index);
            })
            .build(window.clone())
            .unwrap();

        Self {
            router,
            window,
            triggers,
            commits,
        }
    }

    /// Handle every queued trigger in order, including ones raised while handling.
    pub async fn drain(&mut self) -> Vec<NavigationOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(trigger) = self.triggers.try_recv() {
            outcomes.push(self.router.handle(trigger).await);
        }
        outcomes
    }

    pub fn committed(&mut self) -> Vec<Option<usize>> {
        let mut indices = Vec::new();
        while let Ok(index) = self.commits.try_recv() {
            indices.push(index);
        }
        indices
    }

    pub fn current_path(&self) -> Option<String> {
        self.router.current_route().map(|r| r.full_path.clone())
    }
}

pub fn committed_index(outcome: &NavigationOutcome) -> Option<usize> {
    match outcome {
        NavigationOutcome::Committed { index, .. } => *index,
        other => panic!("expected a commit, got {other:?}"),
    }
}
