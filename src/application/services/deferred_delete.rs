//! Optimistic delete-with-undo for the employee list view.
//!
//! A delete request removes the employee from the visible list immediately
//! and parks it in a single pending slot. Two tasks are armed with it: a
//! one-shot commit that issues the backend delete after the configured delay,
//! and a periodic tick that recomputes the remaining-time progress shown by
//! the undo notification. Undo aborts both tasks and puts the employee back
//! at the front of the list without touching the backend.
//!
//! The pending slot and both task handles always change together under the
//! same lock, so there is never a tick without a pending deletion or a
//! pending deletion without its commit.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, instrument};

use crate::application::ports::outbound::{
    EmployeeApiPort, EmployeeApiResult, ErrorSink, ListViewError,
};
use crate::common::clock::Clock;
use crate::common::config::UndoConfig;
use crate::domain::entities::employee::Employee;

/// Progress value of a freshly armed deletion
pub const FULL_PROGRESS: f64 = 100.0;

/// Remaining-time percentage after `elapsed` out of `duration`, floored at 0
pub fn remaining_progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 0.0;
    }
    let fraction = elapsed.as_secs_f64() / duration.as_secs_f64();
    (FULL_PROGRESS - fraction * FULL_PROGRESS).max(0.0)
}

/// What a presentation layer needs to draw the list view
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewSnapshot {
    /// Employees currently shown, in display order
    pub employees: Vec<Employee>,
    /// Employee whose deletion can still be undone
    pub pending: Option<Employee>,
    /// Whether the undo notification is visible
    pub show_undo: bool,
    /// Remaining time before the delete is committed, in [0, 100]
    pub progress: f64,
}

impl Default for ListViewSnapshot {
    fn default() -> Self {
        Self {
            employees: Vec::new(),
            pending: None,
            show_undo: false,
            progress: FULL_PROGRESS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommitPhase {
    /// Waiting for the commit delay; undo is still possible
    Armed,
    /// The backend delete has been sent
    InFlight,
}

struct PendingDeletion {
    employee: Employee,
    armed_at: Instant,
    generation: u64,
    phase: CommitPhase,
    commit_task: JoinHandle<()>,
    tick_task: JoinHandle<()>,
}

struct ListState {
    employees: Vec<Employee>,
    pending: Option<PendingDeletion>,
    progress: f64,
    /// Ids whose backend delete has been sent and not answered, detached ones included
    in_flight: HashSet<i64>,
    next_generation: u64,
    disposed: bool,
}

impl ListState {
    fn snapshot(&self) -> ListViewSnapshot {
        let pending = self.pending.as_ref().map(|p| p.employee.clone());
        ListViewSnapshot {
            employees: self.employees.clone(),
            show_undo: pending.is_some(),
            pending,
            progress: self.progress,
        }
    }

    fn restore_front(&mut self, employee: Employee) {
        if !self.employees.iter().any(|e| e.id() == employee.id()) {
            self.employees.insert(0, employee);
        }
    }
}

struct Shared {
    api: Arc<dyn EmployeeApiPort>,
    error_sink: Arc<dyn ErrorSink>,
    clock: Arc<dyn Clock>,
    commit_delay: Duration,
    tick_interval: Duration,
    state: Mutex<ListState>,
    updates: watch::Sender<ListViewSnapshot>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, ListState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &ListState) {
        self.updates.send_replace(state.snapshot());
    }

    fn spawn_tick(shared: &Arc<Self>, generation: u64) -> JoinHandle<()> {
        let shared = Arc::clone(shared);
        tokio::spawn(async move {
            let period = shared.tick_interval;
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                if !shared.refresh_progress(generation) {
                    break;
                }
            }
        })
    }

    fn spawn_deferred_commit(shared: &Arc<Self>, generation: u64) -> JoinHandle<()> {
        let shared = Arc::clone(shared);
        tokio::spawn(async move {
            time::sleep(shared.commit_delay).await;
            if let Some(employee) = shared.begin_commit(generation) {
                shared.commit(generation, employee).await;
            }
        })
    }

    fn spawn_immediate_commit(shared: &Arc<Self>, generation: u64, employee: Employee) {
        let shared = Arc::clone(shared);
        tokio::spawn(async move {
            shared.commit(generation, employee).await;
        });
    }

    /// Returns false once the tick no longer belongs to the pending deletion
    fn refresh_progress(&self, generation: u64) -> bool {
        let mut state = self.lock();
        if state.disposed {
            return false;
        }
        let armed_at = match &state.pending {
            Some(pending) if pending.generation == generation => pending.armed_at,
            _ => return false,
        };

        let elapsed = self.clock.now().saturating_duration_since(armed_at);
        let progress = remaining_progress(elapsed, self.commit_delay);
        // Never let the bar grow back while the same deletion is pending
        if progress < state.progress {
            state.progress = progress;
            self.publish(&state);
        }
        true
    }

    fn begin_commit(&self, generation: u64) -> Option<Employee> {
        let mut state = self.lock();
        if state.disposed {
            return None;
        }
        match state.pending.as_mut() {
            Some(pending) if pending.generation == generation && pending.phase == CommitPhase::Armed => {
                pending.phase = CommitPhase::InFlight;
                let employee = pending.employee.clone();
                state.in_flight.insert(employee.id());
                // The bar is empty once the delay has run out, whatever the tick cadence
                state.progress = 0.0;
                self.publish(&state);
                Some(employee)
            }
            _ => None,
        }
    }

    async fn commit(&self, generation: u64, employee: Employee) {
        info!("Committing delete of employee {}", employee.id());
        let outcome = self.api.delete(employee.id()).await;
        self.finish_commit(generation, employee, outcome);
    }

    fn finish_commit(&self, generation: u64, employee: Employee, outcome: EmployeeApiResult<()>) {
        let id = employee.id();
        let failure = outcome
            .err()
            .map(|source| ListViewError::CommitFailure { id, source });

        {
            let mut state = self.lock();
            if !state.disposed {
                state.in_flight.remove(&id);
                if failure.is_some() {
                    state.restore_front(employee);
                } else {
                    state.employees.retain(|e| e.id() != id);
                }
                if state.pending.as_ref().is_some_and(|p| p.generation == generation) {
                    if let Some(pending) = state.pending.take() {
                        pending.tick_task.abort();
                        // commit_task is the task running this code; dropping detaches it
                    }
                    state.progress = FULL_PROGRESS;
                }
                self.publish(&state);
            }
        }

        match failure {
            Some(err) => self.error_sink.report(&err),
            None => debug!("Employee {} deleted", id),
        }
    }
}

/// Owns the visible employee list and the single pending deletion.
///
/// Operations must be called from within a tokio runtime: arming a deletion
/// spawns its commit and tick tasks. Dropping the controller disposes it.
pub struct DeferredDeleteController {
    shared: Arc<Shared>,
}

impl DeferredDeleteController {
    pub fn new(
        api: Arc<dyn EmployeeApiPort>,
        error_sink: Arc<dyn ErrorSink>,
        clock: Arc<dyn Clock>,
        config: &UndoConfig,
    ) -> Self {
        let state = ListState {
            employees: Vec::new(),
            pending: None,
            progress: FULL_PROGRESS,
            in_flight: HashSet::new(),
            next_generation: 0,
            disposed: false,
        };
        let (updates, _) = watch::channel(state.snapshot());

        Self {
            shared: Arc::new(Shared {
                api,
                error_sink,
                clock,
                commit_delay: config.commit_delay(),
                tick_interval: config.tick_interval(),
                state: Mutex::new(state),
                updates,
            }),
        }
    }

    /// Current view state
    pub fn snapshot(&self) -> ListViewSnapshot {
        self.shared.lock().snapshot()
    }

    /// Receives a new snapshot after every state change
    pub fn subscribe(&self) -> watch::Receiver<ListViewSnapshot> {
        self.shared.updates.subscribe()
    }

    /// Replaces the visible list with the backend's.
    ///
    /// On failure the list is left as it was and the error goes to the sink.
    #[instrument(skip(self))]
    pub async fn load_all(&self) {
        match self.shared.api.list().await {
            Ok(employees) => {
                let mut state = self.shared.lock();
                if state.disposed {
                    return;
                }
                let pending_id = state.pending.as_ref().map(|p| p.employee.id());
                let fetched: Vec<Employee> = employees
                    .into_iter()
                    .filter(|e| Some(e.id()) != pending_id && !state.in_flight.contains(&e.id()))
                    .collect();
                state.employees = fetched;
                debug!("Loaded {} employees", state.employees.len());
                self.shared.publish(&state);
            }
            Err(e) => self.shared.error_sink.report(&ListViewError::LoadFailure(e)),
        }
    }

    /// Optimistically removes an employee and arms its deferred delete.
    ///
    /// A deletion that is still pending is committed right away first. Unknown
    /// ids are ignored.
    pub fn request_delete(&self, id: i64) {
        let mut state = self.shared.lock();
        if state.disposed {
            return;
        }
        let Some(position) = state.employees.iter().position(|e| e.id() == id) else {
            debug!("Employee {} is not in the visible list, ignoring delete", id);
            return;
        };

        if let Some(previous) = state.pending.take() {
            previous.tick_task.abort();
            match previous.phase {
                CommitPhase::Armed => {
                    previous.commit_task.abort();
                    state.in_flight.insert(previous.employee.id());
                    info!("Preempting pending delete of employee {}", previous.employee.id());
                    Shared::spawn_immediate_commit(&self.shared, previous.generation, previous.employee);
                }
                CommitPhase::InFlight => {
                    debug!("Delete of employee {} already sent, letting it settle", previous.employee.id());
                }
            }
        }

        let employee = state.employees.remove(position);
        let generation = state.next_generation;
        state.next_generation += 1;

        let commit_task = Shared::spawn_deferred_commit(&self.shared, generation);
        let tick_task = Shared::spawn_tick(&self.shared, generation);
        info!(
            "Employee {} removed from list, delete commits in {:?}",
            employee.id(),
            self.shared.commit_delay
        );

        state.pending = Some(PendingDeletion {
            employee,
            armed_at: self.shared.clock.now(),
            generation,
            phase: CommitPhase::Armed,
            commit_task,
            tick_task,
        });
        state.progress = FULL_PROGRESS;
        self.shared.publish(&state);
    }

    /// Undoes the pending deletion if its delete has not been sent yet
    pub fn cancel_delete(&self) {
        let mut state = self.shared.lock();
        if state.disposed {
            return;
        }
        match state.pending.as_ref().map(|p| p.phase) {
            None => {
                debug!("No pending deletion to undo");
                return;
            }
            Some(CommitPhase::InFlight) => {
                debug!("Delete already sent, undo ignored");
                return;
            }
            Some(CommitPhase::Armed) => {}
        }

        if let Some(pending) = state.pending.take() {
            pending.commit_task.abort();
            pending.tick_task.abort();
            info!("Undo delete of employee {}", pending.employee.id());
            state.employees.insert(0, pending.employee);
        }
        state.progress = FULL_PROGRESS;
        self.shared.publish(&state);
    }

    /// Stops both timers; later completions no longer touch the state.
    ///
    /// An armed deletion is dropped without reaching the backend. Idempotent.
    pub fn dispose(&self) {
        let mut state = self.shared.lock();
        if state.disposed {
            return;
        }
        state.disposed = true;

        if let Some(pending) = state.pending.take() {
            pending.tick_task.abort();
            if pending.phase == CommitPhase::Armed {
                pending.commit_task.abort();
                debug!("Discarding pending delete of employee {}", pending.employee.id());
            }
        }
    }
}

impl Drop for DeferredDeleteController {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_progress_is_linear_and_floored() {
        let duration = Duration::from_millis(3000);

        assert_eq!(remaining_progress(Duration::ZERO, duration), 100.0);
        assert_eq!(remaining_progress(Duration::from_millis(1500), duration), 50.0);
        assert_eq!(remaining_progress(Duration::from_millis(3000), duration), 0.0);
        assert_eq!(remaining_progress(Duration::from_millis(4500), duration), 0.0);
    }

    #[test]
    fn test_remaining_progress_with_zero_duration() {
        assert_eq!(remaining_progress(Duration::from_millis(1), Duration::ZERO), 0.0);
    }

    #[test]
    fn test_default_snapshot_hides_notification() {
        let snapshot = ListViewSnapshot::default();

        assert!(!snapshot.show_undo);
        assert_eq!(snapshot.progress, FULL_PROGRESS);
    }
}
