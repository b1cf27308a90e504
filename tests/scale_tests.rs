use rand::Rng;
use std::time::Instant;
use stratasort::prelude::*;

#[test]
fn test_sort_100k() {
    let count = 100_000;
    let mut rng = rand::rng();

    let records: Vec<(i64, i64)> = (0..count)
        .map(|_| (rng.random_range(0..1_000), rng.random_range(0..1_000)))
        .collect();

    let by_pair = rule(|p: &(i64, i64)| vec![p.0.into(), p.1.into()]);

    let start = Instant::now();
    let sorted = stratasort(&records, &by_pair, &[]).unwrap();
    println!("Sorted {} records in {:?}", count, start.elapsed());

    assert_eq!(sorted.len(), count);
    for w in sorted.windows(2) {
        assert!((w[0].0, w[0].1) <= (w[1].0, w[1].1));
    }
}

#[test]
fn test_heap_100k() {
    let count = 100_000;
    let mut rng = rand::rng();

    let records: Vec<i64> = (0..count).map(|_| rng.random_range(0..1_000_000)).collect();

    let mut heap = KeyedHeap::new(rule(|n: &i64| vec![(*n).into()]));

    let start = Instant::now();
    for &n in &records {
        heap.push(n).unwrap();
    }
    let mut previous = i64::MIN;
    while let Ok(n) = heap.pop_min() {
        assert!(previous <= n);
        previous = n;
    }
    println!("Pushed and drained {} records in {:?}", count, start.elapsed());
}
