//! In-memory repository stores
//!
//! One ordered collection per entity type, owned by a single `Stores` value
//! constructed at startup and handed into every service. Access is
//! serialized with an `RwLock` per collection so concurrent requests cannot
//! interleave mid-mutation. State lives for the process lifetime only.

mod seed;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::RwLock;
use tokio::task::AbortHandle;
use uuid::Uuid;

use shared::{Employee, Farmer, MilkIntake, MilkOfftake, Payment, Settings, UserAccount};

/// An entity that can live in a [`MemoryStore`]
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
}

impl Record for Farmer {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for MilkIntake {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for MilkOfftake {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Payment {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Employee {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// An ordered in-memory collection with scan-by-id semantics
pub struct MemoryStore<T: Record> {
    entries: RwLock<Vec<T>>,
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    pub fn with_entries(entries: Vec<T>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// All entries in insertion order
    pub async fn list(&self) -> Vec<T> {
        self.entries.read().await.clone()
    }

    /// Entries matching `pred`, preserving relative order, truncated to
    /// `limit` when supplied
    pub async fn filter<F>(&self, pred: F, limit: Option<usize>) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        let entries = self.entries.read().await;
        let iter = entries.iter().filter(|e| pred(e)).cloned();
        match limit {
            Some(n) => iter.take(n).collect(),
            None => iter.collect(),
        }
    }

    /// Linear scan by id
    pub async fn find(&self, id: Uuid) -> Option<T> {
        self.entries.read().await.iter().find(|e| e.id() == id).cloned()
    }

    /// Prepend a record (newest-first collections)
    pub async fn insert_front(&self, record: T) {
        self.entries.write().await.insert(0, record);
    }

    /// Append a record (registration-order collections)
    pub async fn insert_back(&self, record: T) {
        self.entries.write().await.push(record);
    }

    /// Mutate the matching record in place; `None` signals not-found
    pub async fn update<F>(&self, id: Uuid, apply: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut entries = self.entries.write().await;
        let entry = entries.iter_mut().find(|e| e.id() == id)?;
        apply(entry);
        Some(entry.clone())
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

struct StoresInner {
    farmers: MemoryStore<Farmer>,
    intakes: MemoryStore<MilkIntake>,
    offtakes: MemoryStore<MilkOfftake>,
    payments: MemoryStore<Payment>,
    employees: MemoryStore<Employee>,
    users: RwLock<Vec<UserAccount>>,
    settings: RwLock<Settings>,
    /// Abort handles for pending payment settlement timers, keyed by
    /// payment id. Entries are removed on settlement or cancellation.
    settlements: Mutex<HashMap<Uuid, AbortHandle>>,
}

/// Handle to every repository store, cloned into services and handlers
#[derive(Clone)]
pub struct Stores {
    inner: Arc<StoresInner>,
}

impl Stores {
    /// Empty stores with default settings
    pub fn new() -> Self {
        Self {
            inner: Arc::new(StoresInner {
                farmers: MemoryStore::new(),
                intakes: MemoryStore::new(),
                offtakes: MemoryStore::new(),
                payments: MemoryStore::new(),
                employees: MemoryStore::new(),
                users: RwLock::new(Vec::new()),
                settings: RwLock::new(Settings::default()),
                settlements: Mutex::new(HashMap::new()),
            }),
        }
    }

    pub fn farmers(&self) -> &MemoryStore<Farmer> {
        &self.inner.farmers
    }

    pub fn intakes(&self) -> &MemoryStore<MilkIntake> {
        &self.inner.intakes
    }

    pub fn offtakes(&self) -> &MemoryStore<MilkOfftake> {
        &self.inner.offtakes
    }

    pub fn payments(&self) -> &MemoryStore<Payment> {
        &self.inner.payments
    }

    pub fn employees(&self) -> &MemoryStore<Employee> {
        &self.inner.employees
    }

    pub async fn find_user(&self, email: &str) -> Option<UserAccount> {
        self.inner
            .users
            .read()
            .await
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    pub async fn add_user(&self, user: UserAccount) {
        self.inner.users.write().await.push(user);
    }

    pub async fn settings(&self) -> Settings {
        self.inner.settings.read().await.clone()
    }

    /// Read-modify-write on the settings singleton
    pub async fn update_settings<F>(&self, apply: F) -> Settings
    where
        F: FnOnce(&mut Settings),
    {
        let mut settings = self.inner.settings.write().await;
        apply(&mut settings);
        settings.clone()
    }

    /// Track the settlement timer for a processing payment
    pub fn register_settlement(&self, payment_id: Uuid, handle: AbortHandle) {
        if let Ok(mut settlements) = self.inner.settlements.lock() {
            settlements.insert(payment_id, handle);
        }
    }

    /// Detach and return the settlement timer, if still pending
    pub fn take_settlement(&self, payment_id: Uuid) -> Option<AbortHandle> {
        self.inner
            .settlements
            .lock()
            .ok()
            .and_then(|mut s| s.remove(&payment_id))
    }
}

impl Default for Stores {
    fn default() -> Self {
        Self::new()
    }
}
