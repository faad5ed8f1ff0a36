// Singleton Pattern - Naive and Thread-Safe Lazy Instance Holders
// One holder static per "class": the generic holders below replace the
// original's per-class instance cache. The naive variant is !Sync, so
// misuse across threads is a compile error rather than a data race; the
// thread-safe variant serializes check-then-create under a mutex.

use rayon::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::thread;

use thiserror::Error;

/// Payload used by the demos and tests to prove which constructor call
/// "won" the first access.
#[derive(Debug)]
struct Settings {
    value: String,
}

#[derive(Error, Debug, PartialEq)]
enum SettingsError {
    #[error("settings value `{0}` is missing")]
    Missing(&'static str),
}

// ============================================================================
// Naive singleton holder
// ============================================================================

/// Lazily-initialized holder with no synchronization. `RefCell` makes it
/// `!Sync`, so it can only live in a `thread_local!` static: each thread
/// that touches it builds its own instance. That duplication is the
/// documented defect of the naive variant, standing in for the creation
/// race the unsynchronized original allows.
struct NaiveSingleton<T> {
    instance: RefCell<Option<Rc<T>>>,
}

impl<T> NaiveSingleton<T> {
    const fn new() -> Self {
        Self {
            instance: RefCell::new(None),
        }
    }

    /// Returns the cached instance, creating it on first access. Later
    /// calls ignore `init` entirely.
    fn instance(&self, init: impl FnOnce() -> T) -> Rc<T> {
        let mut slot = self.instance.borrow_mut();
        if let Some(existing) = &*slot {
            return Rc::clone(existing);
        }
        let created = Rc::new(init());
        *slot = Some(Rc::clone(&created));
        created
    }
}

// ============================================================================
// Thread-safe singleton holder
// ============================================================================

/// Lazily-initialized holder safe under concurrent first access. The
/// existence check and the creation happen under one `MutexGuard`, so
/// exactly one caller constructs the instance and everyone else blocks
/// until it is visible.
struct SyncSingleton<T> {
    instance: Mutex<Option<Arc<T>>>,
}

impl<T> SyncSingleton<T> {
    const fn new() -> Self {
        Self {
            instance: Mutex::new(None),
        }
    }

    /// Returns the cached instance, creating it on first access. All
    /// concurrent first callers observe the winner's payload; later
    /// calls ignore `init`.
    fn instance(&self, init: impl FnOnce() -> T) -> Arc<T> {
        let mut slot = self.instance.lock().unwrap();
        if let Some(existing) = &*slot {
            return Arc::clone(existing);
        }
        let created = Arc::new(init());
        *slot = Some(Arc::clone(&created));
        created
    }

    /// Fallible first access. The guard drops on the `?` path too, so a
    /// failed constructor leaves the slot empty and the lock free, and a
    /// later call may succeed.
    fn try_instance<E>(&self, init: impl FnOnce() -> Result<T, E>) -> Result<Arc<T>, E> {
        let mut slot = self.instance.lock().unwrap();
        if let Some(existing) = &*slot {
            return Ok(Arc::clone(existing));
        }
        let created = Arc::new(init()?);
        *slot = Some(Arc::clone(&created));
        Ok(created)
    }
}

// ============================================================================
// Demos
// ============================================================================

thread_local! {
    static LOCAL_SETTINGS: NaiveSingleton<Settings> = const { NaiveSingleton::new() };
}

static RACE_SETTINGS: SyncSingleton<Settings> = SyncSingleton::new();

fn naive_example() {
    let s1 = LOCAL_SETTINGS.with(|holder| {
        holder.instance(|| Settings {
            value: "FOO".to_string(),
        })
    });
    let s2 = LOCAL_SETTINGS.with(|holder| {
        holder.instance(|| Settings {
            value: "BAR".to_string(),
        })
    });

    if Rc::ptr_eq(&s1, &s2) {
        println!("Singleton works, both variables contain the same instance.");
    } else {
        println!("Singleton failed, variables contain different instances.");
    }
    println!("The second call's arguments were ignored: value = {}", s2.value);
}

fn thread_safe_example() {
    println!("If you see the same value twice, the singleton was reused (yay!)");
    println!("If you see two different values, two singletons were created (booo!)");
    println!("Result:");

    fn construct_and_report(value: &str) {
        let settings = RACE_SETTINGS.instance(|| Settings {
            value: value.to_string(),
        });
        println!("{}", settings.value);
    }

    let foo = thread::spawn(|| construct_and_report("FOO"));
    let bar = thread::spawn(|| construct_and_report("BAR"));
    foo.join().unwrap();
    bar.join().unwrap();
}

fn parallel_stress_example() {
    let holder: SyncSingleton<Settings> = SyncSingleton::new();

    let instances: Vec<Arc<Settings>> = (0..64)
        .into_par_iter()
        .map(|i| {
            holder.instance(|| Settings {
                value: format!("caller-{}", i),
            })
        })
        .collect();

    let first = &instances[0];
    let all_same = instances.iter().all(|instance| Arc::ptr_eq(first, instance));
    println!("64 parallel callers, single instance: {}", all_same);
    println!("Winning payload: {}", first.value);
}

fn fallible_construction_example() {
    let holder: SyncSingleton<Settings> = SyncSingleton::new();

    let failed = holder.try_instance(|| Err::<Settings, _>(SettingsError::Missing("value")));
    match failed {
        Ok(_) => println!("Unexpectedly constructed an instance."),
        Err(e) => println!("First construction failed: {}", e),
    }

    let recovered = holder.try_instance(|| {
        Ok::<_, SettingsError>(Settings {
            value: "recovered".to_string(),
        })
    });
    match recovered {
        Ok(settings) => println!("Second construction succeeded: value = {}", settings.value),
        Err(e) => println!("Second construction failed: {}", e),
    }
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("Singleton Pattern");
    println!("=================\n");

    println!("=== Naive singleton (single-threaded) ===");
    naive_example();
    println!();

    println!("=== Thread-safe singleton (two racing threads) ===");
    thread_safe_example();
    println!();

    println!("=== Thread-safe singleton (rayon stress) ===");
    parallel_stress_example();
    println!();

    println!("=== Fallible construction ===");
    fallible_construction_example();
}
