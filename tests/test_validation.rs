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

use halfedge_topology::{HalfEdgeDataStructure, Triangle, ValidationError};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn two_triangles() -> HalfEdgeDataStructure {
    let mut mesh = HalfEdgeDataStructure::new();
    mesh.build_from_triangles(&[Triangle::new(0, 1, 2), Triangle::new(2, 1, 3)])
        .unwrap();
    mesh
}

#[test]
fn test_fresh_build_reports_nothing() {
    init_tracing();
    let mesh = two_triangles();
    assert!(mesh.validate(true).is_empty());
    assert!(mesh.is_valid(true));
    assert!(mesh.is_valid(false));
}

#[test]
fn test_empty_structure_is_valid() {
    let mesh = HalfEdgeDataStructure::new();
    assert!(mesh.is_valid(true));
    assert_eq!(mesh.euler(), 0);
}

#[test]
fn test_stale_arc_map_is_fully_reported() {
    init_tracing();
    let mut mesh = two_triangles();
    let shared = mesh.half_edge_index_from_vertices(1, 2).unwrap();
    let opposite = mesh.half_edge(shared).opposite;
    mesh.flip(shared, false);

    assert!(mesh.validate(false).is_empty());

    let errors = mesh.validate(true);
    assert_eq!(errors.len(), 4, "{errors:?}");
    for expected in [
        ValidationError::ArcTargetMismatch {
            from: 1,
            to: 2,
            half_edge: shared,
            points_to: 0,
        },
        ValidationError::ArcSourceMismatch {
            from: 1,
            to: 2,
            half_edge: shared,
            opposite,
            points_to: 3,
        },
        ValidationError::ArcTargetMismatch {
            from: 2,
            to: 1,
            half_edge: opposite,
            points_to: 3,
        },
        ValidationError::ArcSourceMismatch {
            from: 2,
            to: 1,
            half_edge: opposite,
            opposite: shared,
            points_to: 0,
        },
    ] {
        assert!(errors.contains(&expected), "missing {expected}");
    }
    assert!(!mesh.is_valid(true));
}

#[test]
fn test_validation_messages() {
    let err = ValidationError::BoundaryVertexAnchor {
        vertex: 3,
        half_edge: 7,
        face: 1,
    };
    assert_eq!(
        err.to_string(),
        "boundary vertex 3 is associated to the half-edge 7 that does not lie on the boundary but on face 1"
    );
}
