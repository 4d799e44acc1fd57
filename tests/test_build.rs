// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use halfedge_topology::{Edge, HalfEdgeDataStructure, PolygonalFace, TopologyError, Triangle};

/// Two CCW triangles sharing edge (1,2):
///
///  v2 ---- v3
///   | \     |
///   |  \    |
///  v0 ---- v1
fn two_triangles() -> Vec<Triangle> {
    vec![Triangle::new(0, 1, 2), Triangle::new(2, 1, 3)]
}

fn tetrahedron() -> Vec<Triangle> {
    vec![
        Triangle::new(0, 2, 1),
        Triangle::new(0, 1, 3),
        Triangle::new(1, 2, 3),
        Triangle::new(0, 3, 2),
    ]
}

fn quad_cube() -> Vec<PolygonalFace> {
    vec![
        vec![0, 3, 2, 1],
        vec![4, 5, 6, 7],
        vec![0, 1, 5, 4],
        vec![1, 2, 6, 5],
        vec![2, 3, 7, 6],
        vec![3, 0, 4, 7],
    ]
}

#[test]
fn test_unordered_edges_from_triangles() {
    let (nb_vertices, edges) = HalfEdgeDataStructure::unordered_edges_from_triangles(&two_triangles());
    assert_eq!(nb_vertices, 4);
    assert_eq!(
        edges,
        vec![
            Edge::new(0, 1),
            Edge::new(0, 2),
            Edge::new(1, 2),
            Edge::new(1, 3),
            Edge::new(2, 3),
        ]
    );
}

#[test]
fn test_unordered_edges_from_polygonal_faces() {
    let (nb_vertices, edges) = HalfEdgeDataStructure::unordered_edges_from_polygonal_faces(&quad_cube());
    assert_eq!(nb_vertices, 8);
    assert_eq!(edges.len(), 12);
    assert!(edges.iter().all(|e| e.start() < e.end()));
    assert!(edges.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_edge_is_canonical() {
    let e = Edge::new(7, 3);
    assert_eq!((e.start(), e.end()), (3, 7));
    assert_eq!(e, Edge::new(3, 7));
}

#[test]
fn test_build_two_triangles() {
    let mut mesh = HalfEdgeDataStructure::new();
    mesh.build_from_triangles(&two_triangles())
        .expect("two triangles must build");

    assert_eq!(mesh.nb_vertices(), 4);
    assert_eq!(mesh.nb_edges(), 5);
    assert_eq!(mesh.nb_faces(), 2);
    assert_eq!(mesh.nb_half_edges(), 10);
    assert_eq!(mesh.euler(), 1);
    assert!(mesh.is_valid(true));
}

#[test]
fn test_build_with_explicit_edges() {
    let triangles = two_triangles();
    let (nb_vertices, edges) = HalfEdgeDataStructure::unordered_edges(&triangles);

    let mut mesh = HalfEdgeDataStructure::new();
    mesh.build(nb_vertices, &triangles, &edges).unwrap();

    // edge e owns half-edges 2e and 2e+1, the first one going start -> end
    for (e, edge) in edges.iter().enumerate() {
        let h = mesh.half_edge_index_from_edge_index(e);
        assert_eq!(h, 2 * e);
        assert_eq!(mesh.arc_from_half_edge_index(h), (edge.start(), edge.end()));
        assert_eq!(mesh.half_edge(h).edge, e);
        assert_eq!(mesh.half_edge(h + 1).edge, e);
        assert_eq!(mesh.half_edge(h).opposite, h + 1);
    }
}

#[test]
fn test_build_keeps_face_numbering() {
    let mut mesh = HalfEdgeDataStructure::new();
    mesh.build_from_triangles(&two_triangles()).unwrap();

    let mut f0: Vec<_> = mesh.vertices_of_face(0).to_vec();
    let mut f1: Vec<_> = mesh.vertices_of_face(1).to_vec();
    f0.sort();
    f1.sort();
    assert_eq!(f0, vec![0, 1, 2]);
    assert_eq!(f1, vec![1, 2, 3]);
}

#[test]
fn test_build_closed_tetrahedron() {
    let mut mesh = HalfEdgeDataStructure::new();
    mesh.build_from_triangles(&tetrahedron()).unwrap();

    assert_eq!(mesh.nb_vertices(), 4);
    assert_eq!(mesh.nb_edges(), 6);
    assert_eq!(mesh.nb_faces(), 4);
    assert_eq!(mesh.euler(), 2);
    assert!(mesh.boundary_half_edge_indices().is_empty());
    assert!(mesh.is_valid(true));
}

#[test]
fn test_build_polygonal_cube() {
    let mut mesh = HalfEdgeDataStructure::new();
    mesh.build_from_polygonal_faces(&quad_cube()).unwrap();

    assert_eq!(mesh.nb_vertices(), 8);
    assert_eq!(mesh.nb_edges(), 12);
    assert_eq!(mesh.nb_faces(), 6);
    assert_eq!(mesh.euler(), 2);
    for f in 0..mesh.nb_faces() {
        assert_eq!(mesh.nb_sides_of_face(f), 4);
    }
    assert!(mesh.is_valid(true));
}

#[test]
fn test_build_mixed_polygons() {
    // a quad with a triangle glued on its top side
    let faces: Vec<PolygonalFace> = vec![vec![0, 1, 2, 3], vec![3, 2, 4]];
    let mut mesh = HalfEdgeDataStructure::new();
    mesh.build_from_faces(&faces).unwrap();

    assert_eq!(mesh.nb_sides_of_face(0), 4);
    assert_eq!(mesh.nb_sides_of_face(1), 3);
    assert_eq!(mesh.euler(), 1);
    assert!(mesh.is_valid(true));
}

#[test]
fn test_build_from_arrays() {
    let faces: [[usize; 3]; 2] = [[0, 1, 2], [2, 1, 3]];
    let mut mesh = HalfEdgeDataStructure::new();
    mesh.build_from_faces(&faces).unwrap();
    assert_eq!(mesh.nb_faces(), 2);
}

#[test]
fn test_non_manifold_edge_is_rejected() {
    let triangles = vec![
        Triangle::new(0, 1, 2),
        Triangle::new(0, 1, 3),
        Triangle::new(0, 1, 4),
    ];
    let mut mesh = HalfEdgeDataStructure::new();
    let err = mesh.build_from_triangles(&triangles).unwrap_err();

    assert_eq!(
        err,
        TopologyError::NonManifoldArc {
            from: 0,
            to: 1,
            first_face: 0,
            second_face: 1,
        }
    );
    // failed builds leave nothing behind
    assert_eq!(mesh.nb_half_edges(), 0);
    assert_eq!(mesh.nb_vertices(), 0);
    assert_eq!(mesh.nb_faces(), 0);
}

#[test]
fn test_inconsistent_orientation_is_rejected() {
    let triangles = vec![Triangle::new(0, 1, 2), Triangle::new(1, 2, 3)];
    let mut mesh = HalfEdgeDataStructure::new();
    assert!(matches!(
        mesh.build_from_triangles(&triangles),
        Err(TopologyError::NonManifoldArc { from: 1, to: 2, .. })
    ));
}

#[test]
fn test_degenerate_faces_are_rejected() {
    let mut mesh = HalfEdgeDataStructure::new();

    let too_short: Vec<PolygonalFace> = vec![vec![0, 1]];
    assert_eq!(
        mesh.build_from_faces(&too_short),
        Err(TopologyError::DegenerateFace { face: 0, len: 2 })
    );

    let repeated = vec![Triangle::new(0, 1, 2), Triangle::new(2, 2, 3)];
    assert_eq!(
        mesh.build_from_triangles(&repeated),
        Err(TopologyError::DegenerateFace { face: 1, len: 3 })
    );
}

#[test]
fn test_vertex_out_of_range_is_rejected() {
    let triangles = vec![Triangle::new(0, 1, 2)];
    let (_, edges) = HalfEdgeDataStructure::unordered_edges(&triangles);
    let mut mesh = HalfEdgeDataStructure::new();
    assert_eq!(
        mesh.build(2, &triangles, &edges),
        Err(TopologyError::VertexOutOfRange {
            face: 0,
            vertex: 2,
            num_vertices: 2,
        })
    );
}

#[test]
fn test_isolated_vertex_is_rejected() {
    let triangles = vec![Triangle::new(0, 1, 2)];
    let (_, edges) = HalfEdgeDataStructure::unordered_edges(&triangles);
    let mut mesh = HalfEdgeDataStructure::new();
    assert_eq!(
        mesh.build(5, &triangles, &edges),
        Err(TopologyError::IsolatedVertex { vertex: 3 })
    );
}

#[test]
fn test_edge_list_must_match_faces() {
    let triangles = vec![Triangle::new(0, 1, 2)];
    let mut mesh = HalfEdgeDataStructure::new();

    let missing = [Edge::new(0, 1), Edge::new(1, 2)];
    assert_eq!(
        mesh.build(3, &triangles, &missing),
        Err(TopologyError::UnknownEdge { from: 2, to: 0 })
    );

    let dangling = [
        Edge::new(0, 1),
        Edge::new(0, 2),
        Edge::new(1, 2),
        Edge::new(2, 3),
    ];
    assert_eq!(
        mesh.build(4, &triangles, &dangling),
        Err(TopologyError::DanglingEdge { edge: 3 })
    );

    let duplicated = [
        Edge::new(0, 1),
        Edge::new(1, 0),
        Edge::new(0, 2),
        Edge::new(1, 2),
    ];
    assert_eq!(
        mesh.build(3, &triangles, &duplicated),
        Err(TopologyError::DuplicateEdge { from: 0, to: 1 })
    );
}

#[test]
fn test_clear_and_rebuild() {
    let mut mesh = HalfEdgeDataStructure::new();
    mesh.build_from_triangles(&tetrahedron()).unwrap();
    mesh.clear();

    assert_eq!(mesh.nb_half_edges(), 0);
    assert_eq!(mesh.nb_vertices(), 0);
    assert_eq!(mesh.nb_edges(), 0);
    assert_eq!(mesh.nb_faces(), 0);
    assert_eq!(mesh.euler(), 0);
    assert_eq!(mesh.half_edge_index_from_vertices(0, 1), None);

    mesh.build_from_triangles(&two_triangles()).unwrap();
    assert_eq!(mesh.euler(), 1);
    assert!(mesh.is_valid(true));
}

#[test]
fn test_build_replaces_previous_mesh() {
    let mut mesh = HalfEdgeDataStructure::new();
    mesh.build_from_triangles(&tetrahedron()).unwrap();
    mesh.build_from_triangles(&two_triangles()).unwrap();

    assert_eq!(mesh.nb_faces(), 2);
    assert_eq!(mesh.half_edge_index_from_vertices(0, 3), None);
    assert!(mesh.is_valid(true));
}
