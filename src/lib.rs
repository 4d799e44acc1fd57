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

//! Combinatorial half-edge structure for triangulated and polygonal
//! surfaces, with open or closed boundaries.
//!
//! The structure stores connectivity only. Geometry lives with the caller
//! and is correlated by vertex index.
//!
//! ```
//! use halfedge_topology::{HalfEdgeDataStructure, Triangle};
//!
//! let triangles = [Triangle::new(0, 1, 2), Triangle::new(2, 1, 3)];
//! let mut mesh = HalfEdgeDataStructure::new();
//! mesh.build_from_triangles(&triangles).unwrap();
//!
//! assert_eq!(mesh.nb_vertices(), 4);
//! assert_eq!(mesh.nb_edges(), 5);
//! assert_eq!(mesh.euler(), 1);
//! assert!(mesh.is_valid(true));
//! ```

pub mod error;
pub mod mesh;

pub use error::{TopologyError, ValidationError};
pub use mesh::{
    basic_types::{
        Arc, Edge, EdgeIndex, FaceIndex, HalfEdgeDataStructure, HalfEdgeIndex, PolygonalFace,
        Triangle, VertexIndex,
    },
    half_edge::HalfEdge,
};
