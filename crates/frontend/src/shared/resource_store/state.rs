use super::resource::InsertPosition;
use contracts::domain::common::{Entity, Pagination};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Sequence number handed out when a request is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket {
    seq: u64,
}

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Request lifecycle: `Idle -> Loading -> Succeeded | Failed`.
///
/// Every request gets a monotonic ticket. `status` and `error` follow the
/// newest result to complete; older results never overwrite them. A list
/// snapshot older than the last write to the list is dropped entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestTracker {
    pub status: RequestStatus,
    pub error: Option<String>,
    issued: u64,
    settled: u64,
    written: u64,
}

impl RequestTracker {
    pub fn begin(&mut self) -> RequestTicket {
        self.issued += 1;
        self.status = RequestStatus::Loading;
        self.error = None;
        RequestTicket { seq: self.issued }
    }

    /// Claims the list for a whole snapshot; `false` when a newer write landed first
    pub fn accept_snapshot(&mut self, ticket: RequestTicket) -> bool {
        if ticket.seq <= self.written {
            log::debug!(
                "discarding stale snapshot #{} (list written by #{})",
                ticket.seq,
                self.written
            );
            return false;
        }
        self.written = ticket.seq;
        true
    }

    /// Records a per-id write so snapshots issued before it are dropped
    pub fn record_write(&mut self, ticket: RequestTicket) {
        self.written = self.written.max(ticket.seq);
    }

    pub fn succeed(&mut self, ticket: RequestTicket) -> bool {
        if !self.settle(ticket) {
            return false;
        }
        self.status = RequestStatus::Succeeded;
        self.error = None;
        true
    }

    pub fn fail(&mut self, ticket: RequestTicket, message: String) -> bool {
        if !self.settle(ticket) {
            return false;
        }
        self.status = RequestStatus::Failed;
        self.error = Some(message);
        true
    }

    fn settle(&mut self, ticket: RequestTicket) -> bool {
        if ticket.seq <= self.settled {
            log::debug!(
                "result #{} older than #{}, status kept",
                ticket.seq,
                self.settled
            );
            return false;
        }
        self.settled = ticket.seq;
        true
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }

    /// Latest ticket issued so far
    pub fn issued(&self) -> u64 {
        self.issued
    }
}

/// Snapshot of one entity collection
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<E> {
    pub items: Vec<E>,
    pub pagination: Option<Pagination>,
    pub tracker: RequestTracker,
    /// Set after the first fetch completes, successfully or not
    pub loaded: bool,
}

impl<E> Default for CollectionState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: None,
            tracker: RequestTracker::default(),
            loaded: false,
        }
    }
}

impl<E: Entity> CollectionState<E> {
    pub fn begin(&mut self) -> RequestTicket {
        self.tracker.begin()
    }

    pub fn status(&self) -> RequestStatus {
        self.tracker.status
    }

    pub fn error(&self) -> Option<&str> {
        self.tracker.error.as_deref()
    }

    /// Spinner only before the first list arrives
    pub fn is_initial_loading(&self) -> bool {
        !self.loaded && self.tracker.is_loading()
    }

    pub fn find(&self, id: &str) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Replaces `items` wholesale
    pub fn apply_fetch(
        &mut self,
        ticket: RequestTicket,
        items: Vec<E>,
        pagination: Option<Pagination>,
    ) -> bool {
        if !self.tracker.accept_snapshot(ticket) {
            return false;
        }
        self.tracker.succeed(ticket);
        self.items = items;
        self.pagination = pagination;
        self.loaded = true;
        true
    }

    /// Per-id results always land in `items`; only `status` is ordered
    fn mutated(&mut self, ticket: RequestTicket) {
        self.tracker.record_write(ticket);
        self.tracker.succeed(ticket);
    }

    /// Inserts the server's entity; an entity already present is replaced in place
    pub fn apply_created(&mut self, ticket: RequestTicket, entity: E, at: InsertPosition) -> bool {
        self.mutated(ticket);
        if let Some(slot) = self.items.iter_mut().find(|item| item.id() == entity.id()) {
            *slot = entity;
            return true;
        }
        match at {
            InsertPosition::Append => self.items.push(entity),
            InsertPosition::Prepend => self.items.insert(0, entity),
        }
        true
    }

    /// Replaces the entity with the same id; an unknown id leaves `items` alone
    pub fn apply_updated(&mut self, ticket: RequestTicket, entity: E) -> bool {
        self.mutated(ticket);
        match self.items.iter_mut().find(|item| item.id() == entity.id()) {
            Some(slot) => *slot = entity,
            None => log::debug!("updated id {} is not in the current list", entity.id()),
        }
        true
    }

    /// Removes the single entity matching `id`
    pub fn apply_deleted(&mut self, ticket: RequestTicket, id: &str) -> bool {
        self.mutated(ticket);
        if let Some(pos) = self.items.iter().position(|item| item.id() == id) {
            self.items.remove(pos);
        }
        true
    }

    /// Surfaces `message` unless a newer result already settled; `items` are kept
    pub fn apply_failure(&mut self, ticket: RequestTicket, message: String) -> bool {
        if !self.tracker.fail(ticket, message) {
            return false;
        }
        self.loaded = true;
        true
    }
}
