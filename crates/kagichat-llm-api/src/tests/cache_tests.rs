#[cfg(test)]
mod cache_tests {
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    use crate::cache::{cache_key, ResponseCache};

    #[test]
    fn test_cache_key_is_deterministic() {
        let key1 = cache_key("test prompt");
        let key2 = cache_key("test prompt");
        let key3 = cache_key("different prompt");

        assert_eq!(key1, key2);
        assert_ne!(key1, key3);
        assert_eq!(key1.len(), 64);
        assert!(key1.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_save_and_get_from_cache() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.put("test prompt", "cached result");

        assert_eq!(cache.get("test prompt"), Some("cached result".to_string()));
        assert_eq!(
            cache.lookup("test prompt"),
            (true, Some("cached result".to_string()))
        );
    }

    #[test]
    fn test_cache_miss() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        assert_eq!(cache.lookup("nonexistent prompt"), (false, None));
    }

    #[test]
    fn test_put_overwrites_existing_entry() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.put("prompt", "first");
        cache.put("prompt", "second");

        assert_eq!(cache.get("prompt"), Some("second".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_expired_entry_is_a_miss_and_dropped() {
        let cache = ResponseCache::new(Duration::ZERO);
        cache.put("prompt", "value");
        assert_eq!(cache.len(), 1);

        assert_eq!(cache.lookup("prompt"), (false, None));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_expiration_after_ttl() {
        let cache = ResponseCache::new(Duration::from_millis(50));
        cache.put("test prompt", "cached result");

        let (hit, _) = cache.lookup("test prompt");
        assert!(hit);

        thread::sleep(Duration::from_millis(120));

        let (hit, _) = cache.lookup("test prompt");
        assert!(!hit);
    }

    #[test]
    fn test_purge_expired_only_removes_stale_entries() {
        let cache = ResponseCache::new(Duration::from_millis(50));
        cache.put("old", "1");
        thread::sleep(Duration::from_millis(120));
        cache.put("new", "2");

        assert_eq!(cache.purge_expired(), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("new"), Some("2".to_string()));
    }

    #[test]
    fn test_clear() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.put("a", "1");
        cache.put("b", "2");
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_shared_cache_across_threads() {
        let cache = Arc::new(ResponseCache::new(Duration::from_secs(60)));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    let prompt = format!("prompt {}", i);
                    cache.put(&prompt, &format!("reply {}", i));
                    cache.get(&prompt)
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), Some(format!("reply {}", i)));
        }
        assert_eq!(cache.len(), 8);
    }
}
