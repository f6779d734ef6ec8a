// Kept in its own test binary so the constant table is still unbuilt when the
// threads below race for it.

use std::sync::{Arc, Barrier};
use std::thread;

use rawsockets::registry;

const THREADS: usize = 8;

#[test]
fn concurrent_first_lookup_populates_once() {
    assert_eq!(registry::population_count(), 0);

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry::resolve("AF_INET").unwrap()
            })
        })
        .collect();
    let values: Vec<i32> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(values.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(registry::population_count(), 1);
}
