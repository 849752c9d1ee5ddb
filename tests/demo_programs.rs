// Client programs built on Vector and StrMap.
use proptest::prelude::*;
use stlib::collections::contiguous::Vector;
use stlib::collections::hash::StrMap;

fn fib_memo(n: i32, memo: &mut StrMap<i32>) -> i32 {
    let key = n.to_string();
    if let Some(f) = memo.get(&key) {
        return *f;
    }

    let f = if n <= 2 {
        1
    } else {
        fib_memo(n - 1, memo) + fib_memo(n - 2, memo)
    };
    memo.insert(&key, f);
    f
}

fn fib_bottom_up(n: i32) -> i32 {
    let mut table = StrMap::with_buckets(1000);

    for i in 1..=n {
        let f = if i <= 2 {
            1
        } else {
            table.get_cloned(&(i - 1).to_string()).unwrap()
                + table.get_cloned(&(i - 2).to_string()).unwrap()
        };
        table.insert(&i.to_string(), f);
    }

    let mut f = 0;
    assert!(table.copy_into(&n.to_string(), &mut f));
    f
}

#[test]
fn test_fib_memo() {
    let mut memo = StrMap::with_buckets(1000);
    assert_eq!(fib_memo(46, &mut memo), 1836311903);
    assert_eq!(memo.len(), 46, "Every n from 1 to 46 should be memoised once.");
    assert_eq!(memo.get("10"), Some(&55));
}

#[test]
fn test_fib_bottom_up() {
    assert_eq!(fib_bottom_up(1), 1);
    assert_eq!(fib_bottom_up(2), 1);
    assert_eq!(fib_bottom_up(20), 6765);
    assert_eq!(fib_bottom_up(46), 1836311903);
}

#[test]
fn test_fib_small_table() {
    let mut memo = StrMap::with_buckets(1);
    assert_eq!(fib_memo(30, &mut memo), 832040);
    assert_eq!(memo.bucket_count(), 32, "The memo should have grown by doubling.");
}

proptest! {
    #[test]
    fn prop_random_array(values in proptest::collection::vec(0i32..1000, 20..40)) {
        let mut arr = Vector::new();
        for value in &values {
            arr.push(*value);
        }
        prop_assert_eq!(arr.len(), values.len());

        arr.delete_n(0, 5).unwrap();
        prop_assert_eq!(&*arr, &values[5..]);

        arr.insert(1, 1987).unwrap();
        prop_assert_eq!(arr[1], 1987);

        arr.insert_n(7, 3).unwrap().copy_from_slice(&[1, 2, 3]);
        prop_assert_eq!(&arr[7..10], &[1, 2, 3]);

        let mut expected = values[5..].to_vec();
        expected.insert(1, 1987);
        expected.splice(7..7, [1, 2, 3]);
        prop_assert_eq!(&*arr, expected.as_slice());

        prop_assert_eq!(arr.pop(), expected.pop());
        prop_assert_eq!(arr.len(), values.len() - 5 + 1 + 3 - 1);

        let printed = arr.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ");
        prop_assert_eq!(printed.split(' ').count(), arr.len());
    }
}
