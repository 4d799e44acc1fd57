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

use thiserror::Error;

use crate::mesh::basic_types::{EdgeIndex, FaceIndex, HalfEdgeIndex, VertexIndex};

/// Failures raised while building a half-edge structure from faces.
///
/// Any of these leaves the structure cleared.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("face {face} is degenerate ({len} vertices or a repeated consecutive vertex)")]
    DegenerateFace { face: FaceIndex, len: usize },

    #[error("face {face} references vertex {vertex} but only {num_vertices} vertices were declared")]
    VertexOutOfRange {
        face: FaceIndex,
        vertex: VertexIndex,
        num_vertices: usize,
    },

    #[error("arc ({from},{to}) is claimed by faces {first_face} and {second_face}")]
    NonManifoldArc {
        from: VertexIndex,
        to: VertexIndex,
        first_face: FaceIndex,
        second_face: FaceIndex,
    },

    #[error("arc ({from},{to}) lies on no edge of the given edge list")]
    UnknownEdge { from: VertexIndex, to: VertexIndex },

    #[error("edge ({from},{to}) is listed more than once")]
    DuplicateEdge { from: VertexIndex, to: VertexIndex },

    #[error("edge {edge} borders no face")]
    DanglingEdge { edge: EdgeIndex },

    #[error("vertex {vertex} is not referenced by any face")]
    IsolatedVertex { vertex: VertexIndex },

    #[error("boundary loop through half-edge {half_edge} cannot be closed")]
    BrokenBoundary { half_edge: HalfEdgeIndex },
}

/// A single violated invariant found by [`HalfEdgeDataStructure::validate`].
///
/// [`HalfEdgeDataStructure::validate`]: crate::mesh::basic_types::HalfEdgeDataStructure::validate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{entity} {index} is associated to out-of-range half-edge {half_edge}")]
    AnchorOutOfRange {
        entity: &'static str,
        index: usize,
        half_edge: HalfEdgeIndex,
    },

    #[error("half-edge {half_edge} has out-of-range next half-edge {next}")]
    NextOutOfRange {
        half_edge: HalfEdgeIndex,
        next: HalfEdgeIndex,
    },

    #[error("half-edge {half_edge} has out-of-range opposite half-edge {opposite}")]
    OppositeOutOfRange {
        half_edge: HalfEdgeIndex,
        opposite: HalfEdgeIndex,
    },

    #[error(
        "half-edge {half_edge} has opposite half-edge {opposite} but the latter has opposite half-edge {back}"
    )]
    OppositeNotInvolutive {
        half_edge: HalfEdgeIndex,
        opposite: HalfEdgeIndex,
        back: HalfEdgeIndex,
    },

    #[error(
        "vertex {vertex} is associated to half-edge {half_edge} but its opposite half-edge {opposite} points to vertex {points_to}"
    )]
    VertexAnchorNotOutgoing {
        vertex: VertexIndex,
        half_edge: HalfEdgeIndex,
        opposite: HalfEdgeIndex,
        points_to: VertexIndex,
    },

    #[error("face {face} is associated to half-edge {half_edge} but its associated face is {found:?}")]
    FaceAnchorMismatch {
        face: FaceIndex,
        half_edge: HalfEdgeIndex,
        found: Option<FaceIndex>,
    },

    #[error("when turning around face {face}, half-edge {half_edge} is associated to face {found:?}")]
    FaceCycleLeaks {
        face: FaceIndex,
        half_edge: HalfEdgeIndex,
        found: Option<FaceIndex>,
    },

    #[error("turning around face {face} from half-edge {half_edge} never comes back")]
    FaceCycleOpen {
        face: FaceIndex,
        half_edge: HalfEdgeIndex,
    },

    #[error(
        "boundary vertex {vertex} is associated to the half-edge {half_edge} that does not lie on the boundary but on face {face}"
    )]
    BoundaryVertexAnchor {
        vertex: VertexIndex,
        half_edge: HalfEdgeIndex,
        face: FaceIndex,
    },

    #[error("arc ({from},{to}) is associated to half-edge {half_edge} but it points to vertex {points_to}")]
    ArcTargetMismatch {
        from: VertexIndex,
        to: VertexIndex,
        half_edge: HalfEdgeIndex,
        points_to: VertexIndex,
    },

    #[error(
        "arc ({from},{to}) is associated to half-edge {half_edge} but its opposite half-edge {opposite} points to vertex {points_to}"
    )]
    ArcSourceMismatch {
        from: VertexIndex,
        to: VertexIndex,
        half_edge: HalfEdgeIndex,
        opposite: HalfEdgeIndex,
        points_to: VertexIndex,
    },
}
