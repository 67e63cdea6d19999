//! Task Store
//!
//! In-memory task collection for the logged-in user. Updates are applied
//! optimistically for instant feedback; creates and deletes wait for server
//! confirmation. Per-operation failures land in `error` (and are returned to
//! the caller for toast notification) without losing already-loaded tasks.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::TasksApi;
use crate::models::{NewTask, Task, TaskPatch};

/// Task collection state and operations, shared via context.
#[derive(Clone, Copy)]
pub struct TaskStore {
    api: StoredValue<Rc<dyn TasksApi>, LocalStorage>,
    /// Server return order; new tasks append at the end. Never re-sorted.
    pub tasks: RwSignal<Vec<Task>>,
    /// True until the initial bulk fetch resolves. Starts true so a mount
    /// renders placeholders, never a false "no tasks" state, before the
    /// fetch effect has run.
    pub loading: RwSignal<bool>,
    /// Most recent operation failure, cleared by the next success.
    pub error: RwSignal<Option<String>>,
    /// Guard flag: the bulk fetch runs at most once per session mount.
    fetched: StoredValue<bool>,
}

/// Get the task store from context
pub fn use_tasks() -> TaskStore {
    expect_context::<TaskStore>()
}

impl TaskStore {
    pub fn new(api: Rc<dyn TasksApi>) -> Self {
        Self {
            api: StoredValue::new_local(api),
            tasks: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            fetched: StoredValue::new(false),
        }
    }

    /// Full resync from the server, replacing the collection wholesale.
    /// Re-invocations within the same mount are suppressed, so effect
    /// re-runs never issue a duplicate list call. On failure the previous
    /// collection is kept.
    pub async fn fetch_all(&self) {
        if self.fetched.get_value() {
            return;
        }
        self.fetched.set_value(true);

        self.loading.set(true);
        self.error.set(None);

        let api = self.api.get_value();
        match api.list_tasks().await {
            Ok(tasks) => self.tasks.set(tasks),
            Err(err) => self.error.set(Some(err.to_string())),
        }

        self.loading.set(false);
    }

    /// Create a task. Not optimistic: the id is server-assigned, so the task
    /// only enters the collection once the server returns it. The error
    /// message is also handed back so the caller can notify.
    pub async fn add(&self, title: &str, description: &str) -> Result<(), String> {
        let title = title.trim();
        if title.is_empty() {
            return Err("Title cannot be empty".to_string());
        }

        let api = self.api.get_value();
        let new_task = NewTask {
            title: title.to_string(),
            description: description.to_string(),
        };
        match api.create_task(new_task).await {
            Ok(task) => {
                self.tasks.update(|tasks| tasks.push(task));
                self.error.set(None);
                Ok(())
            }
            Err(err) => {
                let message = err.to_string();
                self.error.set(Some(message.clone()));
                Err(message)
            }
        }
    }

    /// Merge a partial update into the matching task immediately, then issue
    /// the remote call. A remote failure sets `error` but does NOT revert the
    /// local change; client and server can stay divergent until the next full
    /// fetch. See DESIGN.md.
    pub async fn update(&self, id: u32, patch: TaskPatch) -> Result<(), String> {
        if patch.is_empty() {
            return Ok(());
        }

        let mut found = false;
        self.tasks.update(|tasks| {
            if let Some(task) = tasks.iter_mut().find(|task| task.id == id) {
                task.apply(&patch);
                found = true;
            }
        });
        if !found {
            return Err(format!("No task with id {id}"));
        }

        let api = self.api.get_value();
        match api.update_task(id, patch).await {
            Ok(()) => {
                // Local state already matches what the server was told.
                self.error.set(None);
                Ok(())
            }
            Err(err) => {
                let message = err.to_string();
                self.error.set(Some(message.clone()));
                Err(message)
            }
        }
    }

    /// Flip the completion flag; same optimistic contract as `update`.
    pub async fn toggle_completed(&self, id: u32) -> Result<(), String> {
        let completed = self
            .tasks
            .with_untracked(|tasks| tasks.iter().find(|task| task.id == id).map(|t| t.completed));
        let Some(completed) = completed else {
            return Err(format!("No task with id {id}"));
        };

        self.update(
            id,
            TaskPatch {
                completed: Some(!completed),
                ..Default::default()
            },
        )
        .await
    }

    /// Delete is reconciled, not optimistic: the remote call goes first and
    /// the task is only removed locally on success.
    pub async fn delete(&self, id: u32) -> Result<(), String> {
        let api = self.api.get_value();
        match api.delete_task(id).await {
            Ok(()) => {
                self.tasks.update(|tasks| tasks.retain(|task| task.id != id));
                self.error.set(None);
                Ok(())
            }
            Err(err) => {
                let message = err.to_string();
                self.error.set(Some(message.clone()));
                Err(message)
            }
        }
    }

    /// Drop all loaded state so the next authenticated mount fetches fresh.
    /// Called on logout.
    pub fn reset(&self) {
        self.tasks.set(Vec::new());
        // Back to the pre-fetch state: the next mount shows placeholders
        // until its own fetch resolves.
        self.loading.set(true);
        self.error.set(None);
        self.fetched.set_value(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, ApiFuture, ApiResult};
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    /// Stub transport. Each endpoint pops a queued result; `observed` (when
    /// wired to the store's signal) snapshots the collection at the moment a
    /// call is issued, which is how the ordering contracts are asserted.
    #[derive(Default)]
    struct StubTasksApi {
        list_results: RefCell<VecDeque<ApiResult<Vec<Task>>>>,
        list_calls: Cell<u32>,
        create_results: RefCell<VecDeque<ApiResult<Task>>>,
        create_calls: Cell<u32>,
        update_results: RefCell<VecDeque<ApiResult<()>>>,
        update_calls: Cell<u32>,
        delete_results: RefCell<VecDeque<ApiResult<()>>>,
        observe: RefCell<Option<RwSignal<Vec<Task>>>>,
        observed: RefCell<Option<Vec<Task>>>,
    }

    impl StubTasksApi {
        fn snapshot(&self) {
            if let Some(signal) = *self.observe.borrow() {
                *self.observed.borrow_mut() = Some(signal.get_untracked());
            }
        }
    }

    impl TasksApi for StubTasksApi {
        fn list_tasks(&self) -> ApiFuture<'_, Vec<Task>> {
            self.list_calls.set(self.list_calls.get() + 1);
            let result = self
                .list_results
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()));
            Box::pin(async move { result })
        }

        fn create_task(&self, _task: NewTask) -> ApiFuture<'_, Task> {
            self.create_calls.set(self.create_calls.get() + 1);
            self.snapshot();
            let result = self
                .create_results
                .borrow_mut()
                .pop_front()
                .expect("unexpected create call");
            Box::pin(async move { result })
        }

        fn update_task(&self, _id: u32, _patch: TaskPatch) -> ApiFuture<'_, ()> {
            self.update_calls.set(self.update_calls.get() + 1);
            self.snapshot();
            let result = self
                .update_results
                .borrow_mut()
                .pop_front()
                .expect("unexpected update call");
            Box::pin(async move { result })
        }

        fn delete_task(&self, _id: u32) -> ApiFuture<'_, ()> {
            let result = self
                .delete_results
                .borrow_mut()
                .pop_front()
                .expect("unexpected delete call");
            Box::pin(async move { result })
        }
    }

    fn task(id: u32, title: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: String::new(),
            completed: false,
        }
    }

    fn store_with(stub: &Rc<StubTasksApi>) -> TaskStore {
        TaskStore::new(Rc::clone(stub) as Rc<dyn TasksApi>)
    }

    #[tokio::test]
    async fn test_loading_starts_true_until_first_fetch_resolves() {
        let owner = Owner::new();
        owner.set();

        let stub = Rc::new(StubTasksApi::default());
        let store = store_with(&stub);

        // A freshly mounted store must not read as an empty list; it is
        // loading until the first fetch has actually run.
        assert!(store.loading.get());

        store.fetch_all().await;
        assert!(!store.loading.get());

        // Reset (logout) returns to the pre-fetch state.
        store.reset();
        assert!(store.loading.get());
    }

    #[tokio::test]
    async fn test_fetch_all_replaces_wholesale() {
        let owner = Owner::new();
        owner.set();

        let stub = Rc::new(StubTasksApi::default());
        stub.list_results
            .borrow_mut()
            .push_back(Ok(vec![task(1, "One"), task(2, "Two")]));

        let store = store_with(&stub);
        store.fetch_all().await;

        assert_eq!(store.tasks.get().len(), 2);
        assert!(!store.loading.get());
        assert!(store.error.get().is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_prior_tasks() {
        let owner = Owner::new();
        owner.set();

        let stub = Rc::new(StubTasksApi::default());
        stub.list_results
            .borrow_mut()
            .push_back(Err(ApiError::Unreachable));

        let store = store_with(&stub);
        store.tasks.set(vec![task(1, "Kept")]);
        store.fetch_all().await;

        assert_eq!(store.tasks.get(), vec![task(1, "Kept")]);
        assert!(store.error.get().is_some());
        assert!(!store.loading.get());
    }

    #[tokio::test]
    async fn test_duplicate_fetch_suppressed() {
        let owner = Owner::new();
        owner.set();

        let stub = Rc::new(StubTasksApi::default());
        stub.list_results
            .borrow_mut()
            .push_back(Ok(vec![task(1, "One")]));

        let store = store_with(&stub);
        store.fetch_all().await;
        store.fetch_all().await;

        assert_eq!(stub.list_calls.get(), 1);
        assert_eq!(store.tasks.get().len(), 1);
    }

    #[tokio::test]
    async fn test_reset_allows_a_fresh_fetch() {
        let owner = Owner::new();
        owner.set();

        let stub = Rc::new(StubTasksApi::default());
        stub.list_results
            .borrow_mut()
            .push_back(Ok(vec![task(1, "One")]));
        stub.list_results
            .borrow_mut()
            .push_back(Ok(vec![task(2, "Two")]));

        let store = store_with(&stub);
        store.fetch_all().await;
        store.reset();
        assert!(store.tasks.get().is_empty());

        store.fetch_all().await;
        assert_eq!(stub.list_calls.get(), 2);
        assert_eq!(store.tasks.get(), vec![task(2, "Two")]);
    }

    #[tokio::test]
    async fn test_add_appends_server_confirmed_task() {
        let owner = Owner::new();
        owner.set();

        let stub = Rc::new(StubTasksApi::default());
        let created = Task {
            id: 7,
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            completed: false,
        };
        stub.create_results.borrow_mut().push_back(Ok(created.clone()));

        let store = store_with(&stub);
        *stub.observe.borrow_mut() = Some(store.tasks);

        store.add("Buy milk", "2%").await.expect("add should succeed");

        // Nothing was inserted before the server confirmed: the collection
        // was still empty at the moment the create call went out.
        assert_eq!(stub.observed.borrow().clone(), Some(Vec::new()));
        assert_eq!(store.tasks.get(), vec![created]);
    }

    #[tokio::test]
    async fn test_add_rejects_blank_title_before_any_remote_call() {
        let owner = Owner::new();
        owner.set();

        let stub = Rc::new(StubTasksApi::default());
        let store = store_with(&stub);

        assert!(store.add("   ", "desc").await.is_err());
        assert_eq!(stub.create_calls.get(), 0);
        assert!(store.tasks.get().is_empty());
    }

    #[tokio::test]
    async fn test_add_failure_leaves_tasks_unchanged() {
        let owner = Owner::new();
        owner.set();

        let stub = Rc::new(StubTasksApi::default());
        stub.create_results
            .borrow_mut()
            .push_back(Err(ApiError::ServerRejected("quota exceeded".to_string())));

        let store = store_with(&stub);
        store.tasks.set(vec![task(1, "One")]);

        let result = store.add("Two", "").await;
        assert_eq!(result, Err("quota exceeded".to_string()));
        assert_eq!(store.tasks.get(), vec![task(1, "One")]);
        assert_eq!(store.error.get().as_deref(), Some("quota exceeded"));
    }

    #[tokio::test]
    async fn test_update_is_optimistic_and_not_rolled_back() {
        let owner = Owner::new();
        owner.set();

        let stub = Rc::new(StubTasksApi::default());
        stub.update_results
            .borrow_mut()
            .push_back(Err(ApiError::Unreachable));

        let store = store_with(&stub);
        store.tasks.set(vec![task(7, "Buy milk"), task(8, "Other")]);
        *stub.observe.borrow_mut() = Some(store.tasks);

        let result = store
            .update(
                7,
                TaskPatch {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .await;

        // The local merge happened before the remote call was issued.
        let seen = stub.observed.borrow().clone().expect("update was called");
        assert!(seen.iter().find(|t| t.id == 7).unwrap().completed);

        // The rejection surfaces as an error, but the optimistic change
        // stays in place (documented divergence gap).
        assert!(result.is_err());
        assert!(store.error.get().is_some());
        let tasks = store.tasks.get();
        assert!(tasks.iter().find(|t| t.id == 7).unwrap().completed);
        assert!(!tasks.iter().find(|t| t.id == 8).unwrap().completed);
        assert_eq!(tasks[0].id, 7, "relative order is preserved");
    }

    #[tokio::test]
    async fn test_update_unknown_id_issues_no_remote_call() {
        let owner = Owner::new();
        owner.set();

        let stub = Rc::new(StubTasksApi::default());
        let store = store_with(&stub);
        store.tasks.set(vec![task(1, "One")]);

        let result = store
            .update(
                99,
                TaskPatch {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .await;

        assert!(result.is_err());
        assert_eq!(stub.update_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_empty_patch_is_a_no_op() {
        let owner = Owner::new();
        owner.set();

        let stub = Rc::new(StubTasksApi::default());
        let store = store_with(&stub);
        store.tasks.set(vec![task(1, "One")]);

        assert!(store.update(1, TaskPatch::default()).await.is_ok());
        assert_eq!(stub.update_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_toggle_flips_completed() {
        let owner = Owner::new();
        owner.set();

        let stub = Rc::new(StubTasksApi::default());
        stub.update_results.borrow_mut().push_back(Ok(()));
        stub.update_results.borrow_mut().push_back(Ok(()));

        let store = store_with(&stub);
        store.tasks.set(vec![task(3, "Flip me")]);

        store.toggle_completed(3).await.unwrap();
        assert!(store.tasks.get()[0].completed);

        store.toggle_completed(3).await.unwrap();
        assert!(!store.tasks.get()[0].completed);
    }

    #[tokio::test]
    async fn test_delete_failure_leaves_tasks_unchanged() {
        let owner = Owner::new();
        owner.set();

        let stub = Rc::new(StubTasksApi::default());
        stub.delete_results
            .borrow_mut()
            .push_back(Err(ApiError::Unreachable));

        let store = store_with(&stub);
        store.tasks.set(vec![task(7, "Keep me")]);

        assert!(store.delete(7).await.is_err());
        assert_eq!(store.tasks.get(), vec![task(7, "Keep me")]);
        assert!(store.error.get().is_some());
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_the_target() {
        let owner = Owner::new();
        owner.set();

        let stub = Rc::new(StubTasksApi::default());
        stub.delete_results.borrow_mut().push_back(Ok(()));

        let store = store_with(&stub);
        store.tasks.set(vec![task(6, "Stay"), task(7, "Go"), task(8, "Stay too")]);

        store.delete(7).await.unwrap();
        let ids: Vec<u32> = store.tasks.get().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![6, 8]);
    }
}
