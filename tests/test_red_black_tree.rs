use rand::Rng;
use redwood::red_black_tree::{RedBlackMap, RedBlackSet};

#[test]
fn test_random_map_workload() {
    let mut rng = rand::thread_rng();
    let mut map = RedBlackMap::new();
    let mut expected = Vec::new();
    for _ in 0..10_000 {
        let key = rng.gen::<u32>();
        let val = rng.gen::<u32>();

        if !map.contains_key(&key) {
            map.insert(key, val);
            expected.push((key, val));
        }
    }

    expected.sort();
    assert_eq!(map.len(), expected.len());

    let actual: Vec<(u32, u32)> = map.iter().map(|(key, val)| (*key, *val)).collect();
    assert_eq!(actual, expected);

    rng.shuffle(&mut expected);
    for (index, &(key, val)) in expected.iter().enumerate() {
        assert_eq!(map.remove(&key), Some((key, val)));
        assert_eq!(map.len(), expected.len() - index - 1);
    }
    assert!(map.is_empty());
}

#[test]
fn test_random_set_workload() {
    let mut rng = rand::thread_rng();
    let mut set = RedBlackSet::new();
    let mut expected = Vec::new();
    for _ in 0..10_000 {
        let element = rng.gen::<u32>();
        if set.insert(element).is_none() {
            expected.push(element);
        }
    }

    expected.sort();
    assert_eq!(set.len(), expected.len());
    assert_eq!(set.iter().cloned().collect::<Vec<u32>>(), expected);

    rng.shuffle(&mut expected);
    for &element in &expected {
        assert_eq!(set.remove(&element), Some(element));
    }
    assert!(set.is_empty());
}
