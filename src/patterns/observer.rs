//! Observer pattern: payroll and tax office react to salary changes.

use crate::config::DemoConfig;
use crate::error::{PatternError, PatternResult};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// State the observers get to see on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub name: String,
    pub salary: Option<u64>,
}

pub trait SalaryObserver {
    fn update(&mut self, employee: &EmployeeRecord) -> PatternResult<()>;
}

pub type SharedObserver = Arc<Mutex<dyn SalaryObserver + Send>>;

/// Handle returned by [`Employee::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// The subject. Observers are notified synchronously, in the order they
/// subscribed; the first failing observer stops the rest.
pub struct Employee {
    record: EmployeeRecord,
    observers: Vec<(Subscription, SharedObserver)>,
    next_id: u64,
}

impl Employee {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            record: EmployeeRecord {
                name: name.into(),
                salary: None,
            },
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn record(&self) -> &EmployeeRecord {
        &self.record
    }

    pub fn subscribe(&mut self, observer: SharedObserver) -> Subscription {
        let subscription = Subscription(self.next_id);
        self.next_id += 1;
        self.observers.push((subscription, observer));
        subscription
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(id, _)| *id != subscription);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn set_salary(&mut self, salary: u64) -> PatternResult<()> {
        self.record.salary = Some(salary);
        self.notify()
    }

    fn notify(&self) -> PatternResult<()> {
        for (id, observer) in &self.observers {
            debug!(subscription = id.0, employee = %self.record.name, "notify");
            observer
                .lock()
                .map_err(|_| PatternError::Observer(format!("observer {} is poisoned", id.0)))?
                .update(&self.record)?;
        }
        Ok(())
    }
}

// ============================================================================
// Concrete observers
// ============================================================================

#[derive(Debug, Default)]
pub struct Payroll {
    pub issued: Vec<String>,
}

impl SalaryObserver for Payroll {
    fn update(&mut self, employee: &EmployeeRecord) -> PatternResult<()> {
        let salary = employee.salary.unwrap_or_default();
        self.issued.push(format!(
            "Issuing a cheque for {} yen to {}",
            salary, employee.name
        ));
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct Taxman {
    pub issued: Vec<String>,
}

impl SalaryObserver for Taxman {
    fn update(&mut self, employee: &EmployeeRecord) -> PatternResult<()> {
        self.issued
            .push(format!("Issuing a new tax bill to {}", employee.name));
        Ok(())
    }
}

/// Collects what every observer issued, interleaved in notification order.
struct Journal {
    payroll: Arc<Mutex<Payroll>>,
    taxman: Arc<Mutex<Taxman>>,
}

fn locked<T>(observer: &Mutex<T>) -> PatternResult<MutexGuard<'_, T>> {
    observer
        .lock()
        .map_err(|_| PatternError::Observer("journal observer is poisoned".into()))
}

impl Journal {
    fn drain(&self) -> PatternResult<Vec<String>> {
        let mut lines: Vec<String> = locked(&self.payroll)?.issued.drain(..).collect();
        lines.extend(locked(&self.taxman)?.issued.drain(..));
        Ok(lines)
    }
}

pub fn demo(config: &DemoConfig) -> PatternResult<Vec<String>> {
    let journal = Journal {
        payroll: Arc::new(Mutex::new(Payroll::default())),
        taxman: Arc::new(Mutex::new(Taxman::default())),
    };

    let mut employee = Employee::new(config.observer.employee.as_str());
    employee.subscribe(journal.payroll.clone());
    employee.subscribe(journal.taxman.clone());

    let mut lines = Vec::new();
    for &salary in &config.observer.salaries {
        employee.set_salary(salary)?;
        lines.push(format!("salary = {}", salary));
        lines.extend(journal.drain()?.into_iter().map(|l| format!("  {}", l)));
    }
    Ok(lines)
}
