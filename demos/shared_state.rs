//! Shared-state walkthrough for Guarded
//!
//! Demonstrates the three containers cooperating in a small worker pool:
//! a map of per-worker results, a vec of completion records, and a cell
//! carrying the most recent status message.

use guarded::{GuardedCell, GuardedMap, GuardedVec, MetricsCollector};
use std::sync::Arc;
use std::thread;

fn main() {
    println!("Guarded shared-state example");
    println!("============================");

    let results: Arc<GuardedMap<usize, u64>> = Arc::new(GuardedMap::new());
    let log: Arc<GuardedVec<String>> = Arc::new(GuardedVec::new());
    let status: Arc<GuardedCell<String>> = Arc::new(GuardedCell::new());

    println!("\n1. Workers writing disjoint keys:");
    let handles: Vec<_> = (0..4)
        .map(|worker_id| {
            let results = Arc::clone(&results);
            let log = Arc::clone(&log);
            let status = Arc::clone(&status);
            thread::spawn(move || {
                let mut acc = 0u64;
                for i in 0..1000u64 {
                    acc = acc.wrapping_add(i * i);
                }
                results.set(worker_id, acc);
                log.push(format!("worker {} done", worker_id));
                let previous = status.swap(format!("last finished: worker {}", worker_id));
                println!("   worker {} replaced status {:?}", worker_id, previous);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    println!("\n2. Snapshot of the results map:");
    let mut keys = results.keys();
    keys.sort_unstable();
    for key in keys {
        println!("   worker {} -> {:?}", key, results.get(&key));
    }

    println!("\n3. Completion log in append order:");
    log.scan(|index, entry| {
        println!("   [{}] {}", index, entry);
        true
    });

    println!("\n4. Early-exit scan (first two entries only):");
    log.scan(|index, entry| {
        println!("   [{}] {}", index, entry);
        index < 1
    });

    println!("\n5. Final status: {}", status.load());

    let snap = results.metrics();
    println!(
        "\n6. Map op counters: {} writes, {} reads ({:.0}% reads)",
        snap.write_ops,
        snap.read_ops,
        snap.read_ratio() * 100.0
    );
}
