/// Array-based disjoint-set forest
/// with path compression and union by size.
#[derive(Debug, Clone)]
pub(crate) struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    n_sets: usize,
}


impl UnionFind {
    /// Construct `n` singleton sets `{0}, {1}, ..., {n-1}`.
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            n_sets: n,
        }
    }


    /// Returns the representative of the set containing `x`.
    pub(crate) fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Path compression
        let mut x = x;
        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }
        root
    }


    /// Merges the sets containing `x` and `y`.
    /// Returns `false` if they are already in the same set.
    pub(crate) fn union(&mut self, x: usize, y: usize) -> bool {
        let (mut rx, mut ry) = (self.find(x), self.find(y));
        if rx == ry {
            return false;
        }

        if self.size[rx] < self.size[ry] {
            std::mem::swap(&mut rx, &mut ry);
        }
        self.parent[ry] = rx;
        self.size[rx] += self.size[ry];
        self.n_sets -= 1;
        true
    }


    /// Returns the number of disjoint sets.
    pub(crate) fn n_sets(&self) -> usize {
        self.n_sets
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_find_01() {
        let mut uf = UnionFind::new(5);
        assert_eq!(uf.n_sets(), 5);

        assert!(uf.union(0, 1));
        assert!(uf.union(3, 4));
        assert!(!uf.union(1, 0));
        assert_eq!(uf.n_sets(), 3);

        assert_eq!(uf.find(0), uf.find(1));
        assert_eq!(uf.find(3), uf.find(4));
        assert_ne!(uf.find(0), uf.find(2));
        assert_ne!(uf.find(0), uf.find(3));
    }

    #[test]
    fn test_union_find_02() {
        let n = 100;
        let mut uf = UnionFind::new(n);
        (1..n).for_each(|i| { uf.union(i - 1, i); });
        assert_eq!(uf.n_sets(), 1);
        let root = uf.find(0);
        assert!((0..n).all(|i| uf.find(i) == root));
    }
}
