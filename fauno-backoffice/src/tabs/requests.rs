//! Requests inbox.
//!
//! Two independent collections (customer messages and part inquiries)
//! fetched in parallel, shown as tabs with unread counters. Expanding an
//! unread item marks it read; the read flag flips locally on success with
//! no refetch. This is the one screen with explicit loading/refreshing
//! indicators and a user-facing error message with a retry affordance.

use std::collections::HashSet;

use fauno_client::HttpClient;
use shared::models::{ClientRequest, PartRequest};

const LOAD_ERROR: &str = "Не удалось загрузить запросы. Попробуйте обновить страницу.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboxTab {
    Client,
    Part,
}

pub struct RequestsInbox {
    api: HttpClient,
    pub tab: InboxTab,
    client_requests: Vec<ClientRequest>,
    part_requests: Vec<PartRequest>,
    loading: bool,
    refreshing: bool,
    error: Option<String>,
    expanded: Option<String>,
    /// Ids with a mark-read call in flight
    marking_read: HashSet<String>,
}

impl RequestsInbox {
    pub fn new(api: HttpClient) -> Self {
        Self {
            api,
            tab: InboxTab::Client,
            client_requests: Vec::new(),
            part_requests: Vec::new(),
            loading: false,
            refreshing: false,
            error: None,
            expanded: None,
            marking_read: HashSet::new(),
        }
    }

    pub fn client_requests(&self) -> &[ClientRequest] {
        &self.client_requests
    }

    pub fn part_requests(&self) -> &[PartRequest] {
        &self.part_requests
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_marking(&self, id: &str) -> bool {
        self.marking_read.contains(id)
    }

    pub fn unread_client_count(&self) -> usize {
        self.client_requests.iter().filter(|r| r.is_unread).count()
    }

    pub fn unread_part_count(&self) -> usize {
        self.part_requests.iter().filter(|r| r.is_unread).count()
    }

    /// Initial load, with the full-screen loading indicator.
    pub async fn load(&mut self) {
        self.fetch(false).await;
    }

    /// The "Обновить" button: same fetch behind the refreshing flag.
    pub async fn refresh_silent(&mut self) {
        self.fetch(true).await;
    }

    async fn fetch(&mut self, silent: bool) {
        if silent {
            self.refreshing = true;
        } else {
            self.loading = true;
        }
        self.error = None;

        // Independent fan-out: whichever collection resolves still renders.
        let (clients, parts) = tokio::join!(
            self.api.list_client_requests(),
            self.api.list_part_requests()
        );

        let mut failures = 0;
        match clients {
            Ok(rows) => self.client_requests = rows,
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch client requests");
                self.client_requests = Vec::new();
                failures += 1;
            }
        }
        match parts {
            Ok(rows) => self.part_requests = rows,
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch part requests");
                self.part_requests = Vec::new();
                failures += 1;
            }
        }
        if failures == 2 {
            self.error = Some(LOAD_ERROR.to_string());
        }

        if silent {
            self.refreshing = false;
        } else {
            self.loading = false;
        }
    }

    /// Switching tabs collapses whatever is expanded.
    pub fn set_tab(&mut self, tab: InboxTab) {
        self.tab = tab;
        self.expanded = None;
    }

    /// Expand or collapse an item. Expanding an unread one marks it read.
    pub async fn toggle(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
            return;
        }
        self.expanded = Some(id.to_string());
        if self.is_unread(id) {
            self.mark_read(id).await;
        }
    }

    /// Mark one request as read. A duplicate trigger while the call for
    /// this id is in flight sends nothing; on success the local flag flips
    /// in both collections without a refetch.
    pub async fn mark_read(&mut self, id: &str) {
        if !self.marking_read.insert(id.to_string()) {
            return;
        }

        match self.api.mark_request_read(id).await {
            Ok(_) => self.flip_read(id),
            Err(e) => tracing::error!(error = %e, id, "failed to mark request as read"),
        }
        self.marking_read.remove(id);
    }

    fn is_unread(&self, id: &str) -> bool {
        self.client_requests
            .iter()
            .any(|r| r.id == id && r.is_unread)
            || self.part_requests.iter().any(|r| r.id == id && r.is_unread)
    }

    fn flip_read(&mut self, id: &str) {
        for request in &mut self.client_requests {
            if request.id == id {
                request.is_unread = false;
            }
        }
        for request in &mut self.part_requests {
            if request.id == id {
                request.is_unread = false;
            }
        }
    }
}
