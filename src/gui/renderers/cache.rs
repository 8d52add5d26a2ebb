use std::collections::HashMap;
use std::hash::Hash;

/// GPU buffers that depend only on a shape's parameters, built the first
/// time each set of parameters is drawn and reused every frame after.
pub struct MeshCache<K, V> {
    meshes: HashMap<K, V>,
}

impl<K: Eq + Hash, V> MeshCache<K, V> {
    pub fn new() -> Self {
        MeshCache {
            meshes: HashMap::new(),
        }
    }

    pub fn get_or_build<F: FnOnce() -> V>(&mut self, key: K, build: F) -> &mut V {
        self.meshes.entry(key).or_insert_with(build)
    }
}

/// Floats aren't `Hash`, so shapes are keyed on their bit patterns. The
/// scene's sizes are literals, so equal sizes have equal bits.
pub fn size_key(size: f32) -> u32 {
    size.to_bits()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_built_once_per_key() {
        let builds = Cell::new(0);
        let mut cache = MeshCache::new();
        let build = |n: usize| {
            builds.set(builds.get() + 1);
            vec![0.0f32; n]
        };

        // Many frames drawing the same two rings
        for _ in 0..100 {
            for &(inner, outer) in [(0.9f32, 1.32f32), (1.5, 2.2)].iter() {
                let mesh = cache.get_or_build((size_key(inner), size_key(outer)), || build(6));
                assert_eq!(mesh.len(), 6);
            }
        }
        assert_eq!(builds.get(), 2);

        // A new size is a new mesh
        cache.get_or_build((size_key(0.9), size_key(1.5)), || build(6));
        assert_eq!(builds.get(), 3);
    }

    #[test]
    fn test_size_key() {
        assert_eq!(size_key(6.0), size_key(3.0 * 2.0));
        assert_ne!(size_key(6.0), size_key(6.5));
    }
}
