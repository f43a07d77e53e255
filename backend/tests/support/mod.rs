#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use rail_advisor::models::TrainSnapshot;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Panic-safe (restores variables on unwind) and serialized, since env vars
/// are process-global and tests run in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// A small suburban snapshot around 10:25.
pub fn sealdah_snapshot() -> Vec<TrainSnapshot> {
    vec![
        TrainSnapshot::new(33533, "SEALDAH - HASNABAD Local", "10:26").with_departure("10:27"),
        TrainSnapshot::new(33661, "BANGAON - SEALDAH Local", "10:25").with_departure("10:26"),
        TrainSnapshot::new(31341, "SEALDAH - NAIHATI Local", "10:32").with_departure("10:33"),
        TrainSnapshot::new(30326, "HASANABAD - SEALDAH Local", "10:31").with_departure("10:32"),
        TrainSnapshot::new(33687, "NAIHATI - SEALDAH Local", "10:23").with_departure("10:24"),
        TrainSnapshot::new(31613, "SEALDAH - KRISHNANAGAR Local", "10:40").with_departure("10:41"),
    ]
}
