//! Kruskal's algorithm over the complete distance graph of the locations.
use rayon::prelude::*;

use super::{Location, union_find::UnionFind};


/// A weighted undirected edge `{u, v}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Edge {
    pub(crate) u: usize,
    pub(crate) v: usize,
    pub(crate) weight: f64,
}


/// Returns all `m (m - 1) / 2` edges of the complete graph on `locations`.
/// The weight of `{i, j}` is the Euclidean distance.
pub(crate) fn complete_graph(locations: &[Location]) -> Vec<Edge> {
    let m = locations.len();
    (0..m).into_par_iter()
        .flat_map_iter(|u| {
            ((u + 1)..m).map(move |v| {
                let weight = locations[u].distance_to(&locations[v]);
                Edge { u, v, weight }
            })
        })
        .collect()
}


/// Computes a minimum spanning tree of the graph on `n_vertices` vertices
/// by Kruskal's algorithm.
/// The returned edges are sorted in ascending order of weight.
/// Equal-weight edges keep their order in `edges`.
pub(crate) fn minimum_spanning_tree(n_vertices: usize, mut edges: Vec<Edge>)
    -> Vec<Edge>
{
    edges.par_sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut uf = UnionFind::new(n_vertices);
    let mut tree = Vec::with_capacity(n_vertices.saturating_sub(1));
    for edge in edges {
        if tree.len() + 1 >= n_vertices {
            break;
        }
        if uf.union(edge.u, edge.v) {
            tree.push(edge);
        }
    }
    tree
}


/// Labels the connected components of the graph
/// on `n_vertices` vertices with the given edges.
/// Component ids are `0, 1, ...` in order of the smallest vertex
/// each component contains.
pub(crate) fn connected_components<'a, I>(n_vertices: usize, edges: I)
    -> (Vec<usize>, usize)
    where I: IntoIterator<Item = &'a Edge>,
{
    let mut uf = UnionFind::new(n_vertices);
    edges.into_iter()
        .for_each(|e| { uf.union(e.u, e.v); });

    let mut root_to_id = vec![usize::MAX; n_vertices];
    let mut n_components = 0;
    let ids = (0..n_vertices).map(|i| {
            let root = uf.find(i);
            if root_to_id[root] == usize::MAX {
                root_to_id[root] = n_components;
                n_components += 1;
            }
            root_to_id[root]
        })
        .collect::<Vec<_>>();

    debug_assert_eq!(n_components, uf.n_sets());
    (ids, n_components)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Location> {
        vec![
            Location::new(0.0, 0.0),
            Location::new(1.0, 0.0),
            Location::new(1.0, 2.0),
            Location::new(0.0, 2.0),
        ]
    }

    #[test]
    fn test_complete_graph_01() {
        let edges = complete_graph(&square());
        assert_eq!(edges.len(), 6);
        assert_eq!(edges[0], Edge { u: 0, v: 1, weight: 1.0 });
    }

    #[test]
    fn test_mst_01() {
        let locations = square();
        let edges = complete_graph(&locations);
        let tree = minimum_spanning_tree(locations.len(), edges);

        assert_eq!(tree.len(), 3);
        assert!(tree.windows(2).all(|w| w[0].weight <= w[1].weight));

        let total = tree.iter().map(|e| e.weight).sum::<f64>();
        assert_eq!(total, 4.0);
    }

    #[test]
    fn test_mst_single_vertex() {
        let tree = minimum_spanning_tree(1, Vec::new());
        assert!(tree.is_empty());
    }

    #[test]
    fn test_connected_components_01() {
        let edges = vec![
            Edge { u: 1, v: 3, weight: 1.0 },
            Edge { u: 2, v: 4, weight: 1.0 },
        ];
        let (ids, n) = connected_components(5, &edges);
        assert_eq!(n, 3);
        assert_eq!(ids, vec![0, 1, 2, 1, 2]);
    }
}
